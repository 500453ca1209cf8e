//! Position extraction with per-field defaulting.
//!
//! Reads one raw provider record at a time and produces the normalized
//! schema. Any field that is missing or malformed substitutes its
//! documented default (sign → Aries, degree → 0.0, house → 1,
//! absDegree → 0.0) instead of failing the record, and one field's
//! failure never aborts the rest of the record. Defaulted extractions
//! are logged so degraded upstream data stays diagnosable.

use log::warn;

use natal_base::{Body, Sign};
use natal_core::{RawAngle, RawBody, RawHouse, SignValue};

use crate::chart_types::{
    AnglePosition, Extracted, ExtractedPlanet, HousePosition, PlanetPosition,
};

/// Round to the 6-decimal serialization contract for degree fields.
pub(crate) fn round6(v: f64) -> f64 {
    (v * 1e6).round() / 1e6
}

/// Round to 4 decimals, used for aspect differences.
pub(crate) fn round4(v: f64) -> f64 {
    (v * 1e4).round() / 1e4
}

/// Normalize a provider sign value to the canonical sign.
///
/// Name strings match the canonical 12-name list case-insensitively;
/// ordinals are 1-based. Unknown names, non-positive ordinals, and
/// absent values all normalize to Aries with the defaulted flag set.
pub fn normalize_sign(raw: Option<&SignValue>) -> Extracted<Sign> {
    match raw {
        Some(SignValue::Name(name)) => match Sign::from_name(name) {
            Some(sign) => Extracted::exact(sign),
            None => Extracted::fallback(Sign::Aries),
        },
        Some(SignValue::Ordinal(n)) if *n > 0 => Extracted::exact(Sign::from_ordinal(*n)),
        Some(SignValue::Ordinal(_)) | None => Extracted::fallback(Sign::Aries),
    }
}

fn read_degree(raw: Option<f64>) -> Extracted<f64> {
    match raw {
        Some(d) => Extracted::exact(round6(d)),
        None => Extracted::fallback(0.0),
    }
}

fn read_house(raw: Option<i64>) -> Extracted<u8> {
    match raw {
        Some(h) if (1..=12).contains(&h) => Extracted::exact(h as u8),
        Some(_) | None => Extracted::fallback(1),
    }
}

/// Extract one planet, defaulting field by field.
///
/// The planet always comes back fully populated; `abs_degree_known`
/// records whether the absolute longitude is real or the 0.0 default,
/// so aspect detection can skip sentinel values.
pub fn extract_planet(body: Body, raw: Option<&RawBody>) -> ExtractedPlanet {
    let sign = normalize_sign(raw.and_then(|r| r.sign.as_ref()));
    let degree = read_degree(raw.and_then(|r| r.degree));
    let house = read_house(raw.and_then(|r| r.house));
    let abs_degree = read_degree(raw.and_then(|r| r.abs_degree));

    if raw.is_none() {
        warn!("{}: no provider record, all fields defaulted", body.name());
    } else {
        let mut defaulted = Vec::new();
        if sign.defaulted {
            defaulted.push("sign");
        }
        if degree.defaulted {
            defaulted.push("degree");
        }
        if house.defaulted {
            defaulted.push("house");
        }
        if abs_degree.defaulted {
            defaulted.push("absDegree");
        }
        if !defaulted.is_empty() {
            warn!("{}: defaulted {}", body.name(), defaulted.join(", "));
        }
    }

    ExtractedPlanet {
        position: PlanetPosition {
            name: body.name().to_string(),
            sign: sign.value,
            degree: degree.value,
            house: house.value,
            abs_degree: abs_degree.value,
        },
        abs_degree_known: !abs_degree.defaulted,
    }
}

/// Extract the 12 house cusps; the output always has exactly 12.
///
/// No cusp list at all synthesizes an equal wheel from 0 deg Aries
/// (house i → sign index i-1, cusp at 0.0). A short list keeps the
/// cusps that are present and defaults the missing tail per cusp.
pub fn extract_houses(raw: &[RawHouse]) -> Vec<HousePosition> {
    if raw.is_empty() {
        warn!("no house cusps from provider, synthesizing equal houses");
        return (0..12u8)
            .map(|i| HousePosition {
                house: i + 1,
                sign: Sign::from_index(i),
                degree: 0.0,
            })
            .collect();
    }

    (0..12u8)
        .map(|i| match raw.get(i as usize) {
            Some(cusp) => HousePosition {
                house: i + 1,
                sign: normalize_sign(cusp.sign.as_ref()).value,
                degree: read_degree(cusp.degree).value,
            },
            None => {
                warn!("house {} cusp missing, defaulted", i + 1);
                HousePosition {
                    house: i + 1,
                    sign: Sign::Aries,
                    degree: 0.0,
                }
            }
        })
        .collect()
}

/// Extract a chart angle (ascendant or midheaven) with the same defaults.
pub fn extract_angle(raw: Option<&RawAngle>) -> AnglePosition {
    AnglePosition {
        sign: normalize_sign(raw.and_then(|r| r.sign.as_ref())).value,
        degree: read_degree(raw.and_then(|r| r.degree)).value,
    }
}

//! Deterministic demo ephemeris backend.
//!
//! Stands in for a real astronomical backend in the CLI and in tests:
//! chart positions are derived from a seed hashed out of the birth
//! instant, so the same input always yields the same chart. Signs are
//! reported as 1-based ordinals and houses as an equal wheel from a
//! synthetic ascendant, matching the shape of a real provider response.

use natal_base::{ALL_BODIES, Sign, normalize_360};

use crate::{
    ChartMoment, EphemerisProvider, GeoLocation, ProviderError, RawAngle, RawBody, RawChart,
    RawHouse, SignValue,
};

/// Seeded stand-in ephemeris backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoProvider;

impl DemoProvider {
    /// Seed from the formatted instant, by summing its bytes.
    fn seed(moment: &ChartMoment) -> u32 {
        moment.to_string().bytes().map(u32::from).sum()
    }
}

/// House of a longitude on an equal wheel anchored at the ascendant.
fn equal_house_of(lon_deg: f64, asc_deg: f64) -> i64 {
    (normalize_360(lon_deg - asc_deg) / 30.0).floor() as i64 % 12 + 1
}

/// Raw angle record for a longitude.
fn angle_at(lon_deg: f64) -> RawAngle {
    let (sign, degree) = Sign::from_longitude(lon_deg);
    RawAngle {
        sign: Some(SignValue::Ordinal(sign.index() as i64 + 1)),
        degree: Some(degree),
    }
}

impl EphemerisProvider for DemoProvider {
    fn name(&self) -> &'static str {
        "demo"
    }

    fn chart(
        &self,
        moment: &ChartMoment,
        location: &GeoLocation,
    ) -> Result<RawChart, ProviderError> {
        let seed = Self::seed(moment);
        let asc_lon = normalize_360(
            seed as f64 * 3.7 + location.latitude_deg + location.longitude_deg,
        );

        let planets = ALL_BODIES
            .iter()
            .enumerate()
            .map(|(i, body)| {
                let lon = normalize_360((seed + 47 * i as u32) as f64 * 13.7);
                let (sign, degree) = Sign::from_longitude(lon);
                RawBody {
                    name: Some(body.name().to_string()),
                    sign: Some(SignValue::Ordinal(sign.index() as i64 + 1)),
                    degree: Some(degree),
                    house: Some(equal_house_of(lon, asc_lon)),
                    abs_degree: Some(lon),
                }
            })
            .collect();

        let houses = (0..12)
            .map(|i| {
                let (sign, degree) = Sign::from_longitude(asc_lon + i as f64 * 30.0);
                RawHouse {
                    sign: Some(SignValue::Ordinal(sign.index() as i64 + 1)),
                    degree: Some(degree),
                }
            })
            .collect();

        Ok(RawChart {
            planets,
            houses,
            ascendant: Some(angle_at(asc_lon)),
            midheaven: Some(angle_at(asc_lon + 270.0)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (ChartMoment, GeoLocation) {
        (
            ChartMoment::new(1990, 6, 15, 14, 30),
            GeoLocation::new(51.5074, -0.1278),
        )
    }

    #[test]
    fn chart_is_deterministic() {
        let (moment, location) = sample();
        let a = DemoProvider.chart(&moment, &location).unwrap();
        let b = DemoProvider.chart(&moment, &location).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn chart_has_full_shape() {
        let (moment, location) = sample();
        let chart = DemoProvider.chart(&moment, &location).unwrap();
        assert_eq!(chart.planets.len(), 10);
        assert_eq!(chart.houses.len(), 12);
        assert!(chart.ascendant.is_some());
        assert!(chart.midheaven.is_some());
    }

    #[test]
    fn ordinals_are_one_based() {
        let (moment, location) = sample();
        let chart = DemoProvider.chart(&moment, &location).unwrap();
        for body in &chart.planets {
            match body.sign {
                Some(SignValue::Ordinal(n)) => assert!((1..=12).contains(&n)),
                ref other => panic!("expected ordinal sign, got {other:?}"),
            }
            let house = body.house.unwrap();
            assert!((1..=12).contains(&house));
        }
    }

    #[test]
    fn different_moments_differ() {
        let (moment, location) = sample();
        let other = ChartMoment::new(1991, 1, 1, 0, 0);
        let a = DemoProvider.chart(&moment, &location).unwrap();
        let b = DemoProvider.chart(&other, &location).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn degrees_within_sign_range() {
        let (moment, location) = sample();
        let chart = DemoProvider.chart(&moment, &location).unwrap();
        for body in &chart.planets {
            let degree = body.degree.unwrap();
            assert!((0.0..30.0).contains(&degree));
            let abs = body.abs_degree.unwrap();
            assert!((0.0..360.0).contains(&abs));
        }
    }
}

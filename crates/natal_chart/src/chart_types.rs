//! Frontend-facing chart schema and engine configuration.
//!
//! Field names and the 0-based sign index are a fixed contract the
//! frontend depends on; changing them breaks deployed clients.

use natal_base::{AspectKind, Sign};
use serde::Serialize;

/// Default orb tolerance in degrees for the 5 major aspects.
pub const DEFAULT_ORB_TOLERANCE_DEG: f64 = 8.0;

/// Engine configuration, passed by reference through assembly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartConfig {
    /// Maximum deviation from an exact aspect angle, in degrees.
    pub orb_tolerance_deg: f64,
}

impl ChartConfig {
    pub const fn with_orb(orb_tolerance_deg: f64) -> Self {
        Self { orb_tolerance_deg }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::with_orb(DEFAULT_ORB_TOLERANCE_DEG)
    }
}

/// One planet in the normalized schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetPosition {
    /// Canonical capitalized body name.
    pub name: String,
    /// Sign, serialized as the 0-based index.
    pub sign: Sign,
    /// Degrees within the sign, [0, 30) for well-formed input.
    pub degree: f64,
    /// House number, 1-12.
    pub house: u8,
    /// Absolute ecliptic longitude, [0, 360) for well-formed input.
    #[serde(rename = "absDegree")]
    pub abs_degree: f64,
}

/// One house cusp in the normalized schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HousePosition {
    /// House number, 1-12.
    pub house: u8,
    pub sign: Sign,
    /// Cusp degrees within the sign.
    pub degree: f64,
}

/// A chart angle (ascendant or midheaven).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnglePosition {
    pub sign: Sign,
    pub degree: f64,
}

/// One detected pairwise aspect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aspect {
    pub planet1: String,
    pub planet2: String,
    #[serde(rename = "aspect")]
    pub kind: AspectKind,
    /// Signed longitude difference `planet1.absDegree - planet2.absDegree`,
    /// not the circular distance the aspect was matched on.
    pub difference: f64,
}

/// The complete normalized chart handed back for serialization.
///
/// Always fully populated: 10 planets in canonical order, 12 houses,
/// both angles. Aspects vary from 0 to 45 entries for 10 bodies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    pub planets: Vec<PlanetPosition>,
    pub houses: Vec<HousePosition>,
    pub ascendant: AnglePosition,
    pub midheaven: AnglePosition,
    pub aspects: Vec<Aspect>,
}

/// Per-field extraction result carrying an explicit used-default flag.
///
/// Extraction never fails; this keeps degraded fields diagnosable
/// without reintroducing control flow by error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extracted<T> {
    pub value: T,
    pub defaulted: bool,
}

impl<T> Extracted<T> {
    /// Value read from the provider as-is.
    pub const fn exact(value: T) -> Self {
        Self {
            value,
            defaulted: false,
        }
    }

    /// Documented default substituted for a missing or malformed field.
    pub const fn fallback(value: T) -> Self {
        Self {
            value,
            defaulted: true,
        }
    }
}

/// Planet extraction carrier used inside assembly.
///
/// `abs_degree_known` gates aspect detection: a planet whose absolute
/// longitude was defaulted still appears in the serialized chart but
/// must not aspect other bodies against the 0.0 sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedPlanet {
    pub position: PlanetPosition,
    pub abs_degree_known: bool,
}

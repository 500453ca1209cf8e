//! Provider boundary for natal chart computation.
//!
//! This crate defines the raw chart data model an external ephemeris
//! provider hands us, the [`EphemerisProvider`] / [`AspectProvider`]
//! trait seams behind which real backends live, and the request-scoped
//! input types (instant and location).
//!
//! The raw model is deliberately lenient: every field is optional, known
//! field-name variants across provider versions are accepted as serde
//! aliases, and degree values arriving as numeric strings still parse.
//! Deciding what a missing or malformed field *means* is not this
//! crate's job; `natal_chart` applies the documented defaults.

use std::error::Error;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer};

pub mod demo;

pub use demo::DemoProvider;

/// Civil instant of birth, already validated by the request layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartMoment {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

impl ChartMoment {
    pub const fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }
}

impl Display for ChartMoment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

/// Geographic observer location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive.
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub const fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }
}

/// A zodiac sign as reported by a provider: either a name string or a
/// 1-based ordinal. Normalization to the 0-based frontend index happens
/// in `natal_chart`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SignValue {
    Ordinal(i64),
    Name(String),
}

/// Accept a degree value as a JSON number or a numeric string; anything
/// else reads as absent rather than failing the whole record.
fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Same leniency for integer fields (house numbers).
fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Sign fields: integral numbers read as ordinals, strings as names,
/// anything else as absent.
fn lenient_sign<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<SignValue>, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => n.as_i64().map(SignValue::Ordinal),
        serde_json::Value::String(s) => Some(SignValue::Name(s)),
        _ => None,
    })
}

/// One celestial body as reported by the provider.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_sign")]
    pub sign: Option<SignValue>,
    /// Degrees within the sign. Older provider versions call this `position`.
    #[serde(default, alias = "position", deserialize_with = "lenient_f64")]
    pub degree: Option<f64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub house: Option<i64>,
    /// Absolute ecliptic longitude. Also seen as `abs_pos` and `absDegree`.
    #[serde(
        default,
        alias = "abs_pos",
        alias = "absDegree",
        deserialize_with = "lenient_f64"
    )]
    pub abs_degree: Option<f64>,
}

/// One house cusp as reported by the provider. Cusps are positional:
/// the i-th record is the cusp of house i+1.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawHouse {
    #[serde(default, deserialize_with = "lenient_sign")]
    pub sign: Option<SignValue>,
    #[serde(default, alias = "position", deserialize_with = "lenient_f64")]
    pub degree: Option<f64>,
}

/// A chart angle (ascendant or midheaven) as reported by the provider.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawAngle {
    #[serde(default, deserialize_with = "lenient_sign")]
    pub sign: Option<SignValue>,
    #[serde(default, alias = "position", deserialize_with = "lenient_f64")]
    pub degree: Option<f64>,
}

/// One pairwise aspect as reported by an aspect provider.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawAspect {
    #[serde(default, alias = "p1_name")]
    pub planet1: Option<String>,
    #[serde(default, alias = "p2_name")]
    pub planet2: Option<String>,
    /// Provider aspect-type label ("Conjunction", "Trine", ...).
    #[serde(default, rename = "aspect")]
    pub kind: Option<String>,
    /// Deviation from the exact target angle, in degrees.
    #[serde(default, alias = "orbit", deserialize_with = "lenient_f64")]
    pub orb: Option<f64>,
}

/// The raw chart object produced by one ephemeris provider call.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawChart {
    #[serde(default, alias = "planets_list")]
    pub planets: Vec<RawBody>,
    #[serde(default, alias = "house_list")]
    pub houses: Vec<RawHouse>,
    #[serde(default)]
    pub ascendant: Option<RawAngle>,
    #[serde(default, alias = "mc")]
    pub midheaven: Option<RawAngle>,
}

impl RawChart {
    /// Find a body record by name, case-insensitive.
    pub fn planet(&self, name: &str) -> Option<&RawBody> {
        self.planets.iter().find(|b| {
            b.name
                .as_deref()
                .is_some_and(|n| n.eq_ignore_ascii_case(name))
        })
    }
}

/// Errors from an external computation backend.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ProviderError {
    /// The backend is not configured or not reachable at all.
    Unavailable(&'static str),
    /// The backend answered but the call failed.
    Backend(String),
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "computation backend unavailable: {msg}"),
            Self::Backend(msg) => write!(f, "backend error: {msg}"),
        }
    }
}

impl Error for ProviderError {}

/// External ephemeris backend: computes a raw chart for an instant and
/// location. Implementations must not mutate shared state per call.
pub trait EphemerisProvider {
    /// Backend name, for diagnostics.
    fn name(&self) -> &'static str;

    /// Compute the raw chart object for the given birth data.
    fn chart(&self, moment: &ChartMoment, location: &GeoLocation)
    -> Result<RawChart, ProviderError>;
}

/// Optional external aspect backend. Failure here is never fatal; the
/// caller falls back to the deterministic geometric detector.
pub trait AspectProvider {
    /// Backend name, for diagnostics.
    fn name(&self) -> &'static str;

    /// List pairwise aspects for the given raw chart.
    fn aspects(&self, chart: &RawChart) -> Result<Vec<RawAspect>, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moment_display() {
        let m = ChartMoment::new(1990, 6, 15, 14, 30);
        assert_eq!(m.to_string(), "1990-06-15 14:30");
    }

    #[test]
    fn sign_value_parses_ordinal() {
        let v: SignValue = serde_json::from_str("7").unwrap();
        assert_eq!(v, SignValue::Ordinal(7));
    }

    #[test]
    fn sign_value_parses_name() {
        let v: SignValue = serde_json::from_str("\"Libra\"").unwrap();
        assert_eq!(v, SignValue::Name("Libra".into()));
    }

    #[test]
    fn raw_body_accepts_aliases() {
        let body: RawBody = serde_json::from_str(
            r#"{"name": "Sun", "sign": 1, "position": 15.25, "house": 10, "abs_pos": 15.25}"#,
        )
        .unwrap();
        assert_eq!(body.degree, Some(15.25));
        assert_eq!(body.abs_degree, Some(15.25));
        assert_eq!(body.house, Some(10));
    }

    #[test]
    fn raw_body_accepts_frontend_names() {
        let body: RawBody =
            serde_json::from_str(r#"{"name": "Moon", "degree": 3.5, "absDegree": 93.5}"#).unwrap();
        assert_eq!(body.degree, Some(3.5));
        assert_eq!(body.abs_degree, Some(93.5));
        assert_eq!(body.sign, None);
    }

    #[test]
    fn raw_body_tolerates_numeric_strings() {
        let body: RawBody =
            serde_json::from_str(r#"{"degree": "12.5", "house": "4", "abs_pos": " 42.0 "}"#)
                .unwrap();
        assert_eq!(body.degree, Some(12.5));
        assert_eq!(body.house, Some(4));
        assert_eq!(body.abs_degree, Some(42.0));
    }

    #[test]
    fn raw_body_tolerates_wrong_types() {
        // A malformed field reads as absent, not as an error
        let body: RawBody =
            serde_json::from_str(r#"{"degree": [1, 2], "house": null, "abs_pos": "n/a"}"#).unwrap();
        assert_eq!(body.degree, None);
        assert_eq!(body.house, None);
        assert_eq!(body.abs_degree, None);
    }

    #[test]
    fn raw_body_tolerates_wrong_typed_sign() {
        let body: RawBody =
            serde_json::from_str(r#"{"name": "Venus", "sign": {"x": 1}, "degree": 2.0}"#).unwrap();
        assert_eq!(body.sign, None);
        assert_eq!(body.degree, Some(2.0));

        let body: RawBody = serde_json::from_str(r#"{"sign": true}"#).unwrap();
        assert_eq!(body.sign, None);
    }

    #[test]
    fn raw_chart_planet_lookup() {
        let chart: RawChart = serde_json::from_str(
            r#"{"planets_list": [{"name": "Mars", "abs_pos": 180.0}], "house_list": []}"#,
        )
        .unwrap();
        assert!(chart.planet("mars").is_some());
        assert!(chart.planet("Venus").is_none());
    }

    #[test]
    fn raw_aspect_accepts_provider_vocabulary() {
        let a: RawAspect = serde_json::from_str(
            r#"{"p1_name": "Sun", "p2_name": "Moon", "aspect": "Square", "orbit": 1.2}"#,
        )
        .unwrap();
        assert_eq!(a.planet1.as_deref(), Some("Sun"));
        assert_eq!(a.planet2.as_deref(), Some("Moon"));
        assert_eq!(a.kind.as_deref(), Some("Square"));
        assert_eq!(a.orb, Some(1.2));
    }

    #[test]
    fn provider_error_display() {
        let e = ProviderError::Unavailable("no ephemeris configured");
        assert!(e.to_string().contains("computation backend unavailable"));
    }
}

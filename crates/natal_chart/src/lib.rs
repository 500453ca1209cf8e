//! Natal chart normalization and aspect detection engine.
//!
//! Converts the heterogeneous raw chart object an ephemeris backend
//! produces into the stable frontend schema (0-based sign indices,
//! 6-decimal degrees, fixed field names) and derives the major pairwise
//! aspects between the 10 canonical bodies.
//!
//! The engine is purely computational and request-scoped: the only I/O
//! is the single [`natal_core::EphemerisProvider`] call made by
//! [`assemble`], and only that call can fail assembly. Everything the
//! provider gets wrong after that point is substituted with documented
//! defaults so the response shape never degrades.
//!
//! ```rust
//! use natal_chart::{ChartConfig, assemble};
//! use natal_core::{ChartMoment, DemoProvider, GeoLocation};
//!
//! let moment = ChartMoment::new(1990, 6, 15, 14, 30);
//! let location = GeoLocation::new(51.5074, -0.1278);
//! let chart = assemble(&DemoProvider, None, &moment, &location, &ChartConfig::default())?;
//! assert_eq!(chart.planets.len(), 10);
//! # Ok::<(), natal_chart::ChartError>(())
//! ```

pub mod aspect;
pub mod assemble;
pub mod chart_types;
pub mod error;
pub mod extract;

pub use aspect::{detect_aspects, geometric_aspects};
pub use assemble::assemble;
pub use chart_types::{
    AnglePosition, Aspect, ChartConfig, ChartResult, DEFAULT_ORB_TOLERANCE_DEG, Extracted,
    ExtractedPlanet, HousePosition, PlanetPosition,
};
pub use error::ChartError;
pub use extract::{extract_angle, extract_houses, extract_planet, normalize_sign};

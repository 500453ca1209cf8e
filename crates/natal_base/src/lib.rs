//! Shared vocabulary for western natal chart calculations.
//!
//! This crate provides:
//! - The 12 zodiac signs with 0-based frontend indexing (0 = Aries)
//! - The 10 canonical chart bodies in fixed order (Sun .. Pluto)
//! - The 5 major aspect kinds with target angles and match priority
//! - Circular angle helpers (normalization, shortest circular distance)
//!
//! Everything here is pure data and pure math; provider I/O lives in
//! `natal_core` and chart assembly in `natal_chart`.

pub mod aspect_kind;
pub mod body;
pub mod sign;
pub mod util;

pub use aspect_kind::{AspectKind, MAJOR_ASPECTS};
pub use body::{ALL_BODIES, Body};
pub use sign::{ALL_SIGNS, Sign};
pub use util::{circular_distance, normalize_360};

//! The 5 major aspect kinds and their target angles.
//!
//! An aspect is detected when the shortest circular distance between two
//! bodies is within an orb tolerance of a target angle. When a separation
//! falls within orb of more than one target, the kind listed earlier in
//! [`MAJOR_ASPECTS`] wins, so one pair of bodies yields at most one aspect.

use serde::Serialize;

/// The 5 major aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Square,
    Trine,
    Sextile,
}

/// All 5 major aspects in match priority order (conjunction highest).
pub const MAJOR_ASPECTS: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Opposition,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Sextile,
];

impl AspectKind {
    /// Target separation angle in degrees.
    pub const fn angle_deg(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Opposition => 180.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Sextile => 60.0,
        }
    }

    /// Lowercase label, as serialized in the chart output.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::Opposition => "opposition",
            Self::Square => "square",
            Self::Trine => "trine",
            Self::Sextile => "sextile",
        }
    }

    /// Map an aspect provider's type label into the canonical set.
    ///
    /// Case-insensitive; anything outside the 5 majors (quincunx,
    /// semi-sextile, ...) returns `None` and is discarded upstream.
    pub fn from_label(label: &str) -> Option<Self> {
        MAJOR_ASPECTS
            .iter()
            .copied()
            .find(|k| k.label().eq_ignore_ascii_case(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_order() {
        assert_eq!(MAJOR_ASPECTS[0], AspectKind::Conjunction);
        assert_eq!(MAJOR_ASPECTS[1], AspectKind::Opposition);
        assert_eq!(MAJOR_ASPECTS[2], AspectKind::Square);
        assert_eq!(MAJOR_ASPECTS[3], AspectKind::Trine);
        assert_eq!(MAJOR_ASPECTS[4], AspectKind::Sextile);
    }

    #[test]
    fn target_angles() {
        assert_eq!(AspectKind::Conjunction.angle_deg(), 0.0);
        assert_eq!(AspectKind::Opposition.angle_deg(), 180.0);
        assert_eq!(AspectKind::Square.angle_deg(), 90.0);
        assert_eq!(AspectKind::Trine.angle_deg(), 120.0);
        assert_eq!(AspectKind::Sextile.angle_deg(), 60.0);
    }

    #[test]
    fn labels_round_trip() {
        for k in MAJOR_ASPECTS {
            assert_eq!(AspectKind::from_label(k.label()), Some(k));
        }
    }

    #[test]
    fn from_label_provider_capitalization() {
        // kerykeion-style capitalized labels
        assert_eq!(
            AspectKind::from_label("Conjunction"),
            Some(AspectKind::Conjunction)
        );
        assert_eq!(AspectKind::from_label("TRINE"), Some(AspectKind::Trine));
    }

    #[test]
    fn from_label_minor_aspects_discarded() {
        assert_eq!(AspectKind::from_label("quincunx"), None);
        assert_eq!(AspectKind::from_label("semi-sextile"), None);
        assert_eq!(AspectKind::from_label(""), None);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&AspectKind::Square).unwrap();
        assert_eq!(json, "\"square\"");
    }
}

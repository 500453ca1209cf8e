//! Canonical celestial bodies for western natal charts.
//!
//! The 10 bodies every chart response carries, in the fixed order the
//! frontend expects. Computed points (Ascendant, Midheaven) are chart
//! angles, not bodies; they live in the chart output types.

/// The 10 canonical chart bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All 10 bodies in canonical chart order.
pub const ALL_BODIES: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    /// Capitalized English name, as serialized in the chart output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// 0-based index into [`ALL_BODIES`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Uranus => 7,
            Self::Neptune => 8,
            Self::Pluto => 9,
        }
    }

    /// Look up a body by its English name, case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_BODIES
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(name))
    }
}

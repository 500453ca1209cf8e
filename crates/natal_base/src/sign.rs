//! Zodiac sign vocabulary and index normalization.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at 0 deg. The frontend contract indexes signs from
//! 0 (Aries) to 11 (Pisces), while ephemeris providers commonly report
//! either a name string or a 1-based ordinal. Both normalize here, and
//! unrecognized input falls back to Aries instead of failing: a degraded
//! chart is preferable to a failed request.

use serde::{Serialize, Serializer};

use crate::util::normalize_360;

/// The 12 zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (index 0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11). This is the frontend contract.
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Sign from a 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_SIGNS[(index % 12) as usize]
    }

    /// Sign from a 1-based provider ordinal (1 = Aries .. 12 = Pisces).
    ///
    /// Ordinals above 12 wrap modulo 12; zero and negative values
    /// normalize to Aries.
    pub const fn from_ordinal(ordinal: i64) -> Self {
        if ordinal > 0 {
            Self::from_index(((ordinal - 1) % 12) as u8)
        } else {
            Self::Aries
        }
    }

    /// Look up a sign by its English name, case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_SIGNS
            .iter()
            .copied()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }

    /// Split an absolute ecliptic longitude into (sign, degrees-in-sign).
    ///
    /// Each sign spans exactly 30 degrees: Aries = [0, 30), Taurus = [30, 60), etc.
    pub fn from_longitude(lon_deg: f64) -> (Self, f64) {
        let lon = normalize_360(lon_deg);
        // Clamp to 11 in case of floating point edge (exactly 360.0)
        let index = ((lon / 30.0).floor() as u8).min(11);
        (Self::from_index(index), lon - index as f64 * 30.0)
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [Sign; 12] {
        &ALL_SIGNS
    }
}

// Serialized as the 0-based index; the frontend renders names itself.
impl Serialize for Sign {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.index())
    }
}

//! Chart assembly: one ephemeris call, then graceful extraction.
//!
//! Provisioning is the only fatal step. Once the raw chart object
//! exists, every sub-extraction degrades field by field, so the caller
//! always receives either a complete fixed-shape [`ChartResult`] or a
//! single backend-unavailable error, never a partial response.

use natal_base::ALL_BODIES;
use natal_core::{AspectProvider, ChartMoment, EphemerisProvider, GeoLocation};

use crate::aspect::detect_aspects;
use crate::chart_types::{ChartConfig, ChartResult, ExtractedPlanet};
use crate::error::ChartError;
use crate::extract::{extract_angle, extract_houses, extract_planet};

/// Assemble the normalized chart for one birth instant and location.
pub fn assemble(
    ephemeris: &dyn EphemerisProvider,
    aspects: Option<&dyn AspectProvider>,
    moment: &ChartMoment,
    location: &GeoLocation,
    config: &ChartConfig,
) -> Result<ChartResult, ChartError> {
    let raw = ephemeris.chart(moment, location)?;

    let extracted: Vec<ExtractedPlanet> = ALL_BODIES
        .iter()
        .map(|body| extract_planet(*body, raw.planet(body.name())))
        .collect();

    let houses = extract_houses(&raw.houses);
    let ascendant = extract_angle(raw.ascendant.as_ref());
    let midheaven = extract_angle(raw.midheaven.as_ref());
    let aspect_list = detect_aspects(aspects, &raw, &extracted, config);

    Ok(ChartResult {
        planets: extracted.into_iter().map(|p| p.position).collect(),
        houses,
        ascendant,
        midheaven,
        aspects: aspect_list,
    })
}

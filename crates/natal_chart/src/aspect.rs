//! Pairwise aspect detection.
//!
//! Two strategies. The primary delegates to an external aspect backend
//! and normalizes its vocabulary; any backend failure falls through to
//! the geometric strategy and is never surfaced to the caller. The
//! geometric strategy is deterministic: shortest circular distance per
//! unordered pair, tested against the 5 major target angles in fixed
//! priority order, first match within orb wins.
//!
//! Either way, `difference` is the signed longitude difference
//! `planet1.absDegree - planet2.absDegree` computed from our own
//! extracted positions; a backend's orb value is only used for
//! filtering. Bodies whose absolute longitude was defaulted are skipped
//! entirely so the 0.0 sentinel cannot produce spurious aspects.

use std::collections::HashSet;

use log::warn;

use natal_base::{AspectKind, MAJOR_ASPECTS, circular_distance};
use natal_core::{AspectProvider, RawAspect, RawChart};

use crate::chart_types::{Aspect, ChartConfig, ExtractedPlanet};
use crate::extract::round4;

/// Detect aspects, preferring the backend when one is configured.
///
/// A backend error logs a warning and falls back; a backend success is
/// taken as-is even when it filters down to an empty list.
pub fn detect_aspects(
    backend: Option<&dyn AspectProvider>,
    chart: &RawChart,
    planets: &[ExtractedPlanet],
    config: &ChartConfig,
) -> Vec<Aspect> {
    if let Some(backend) = backend {
        match backend.aspects(chart) {
            Ok(raw) => return backend_aspects(&raw, planets, config),
            Err(e) => warn!(
                "aspect backend {} failed, using geometric fallback: {e}",
                backend.name()
            ),
        }
    }
    geometric_aspects(planets, config)
}

/// Index of a named planet whose absolute longitude is known.
fn known_planet(planets: &[ExtractedPlanet], name: &str) -> Option<usize> {
    planets
        .iter()
        .position(|p| p.abs_degree_known && p.position.name.eq_ignore_ascii_case(name))
}

/// Normalize a backend's raw aspect list.
///
/// Labels outside the 5 majors, orbs beyond tolerance, unknown body
/// names, and repeat pairs are all discarded.
fn backend_aspects(
    raw: &[RawAspect],
    planets: &[ExtractedPlanet],
    config: &ChartConfig,
) -> Vec<Aspect> {
    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    let mut aspects = Vec::new();

    for record in raw {
        let Some(kind) = record.kind.as_deref().and_then(AspectKind::from_label) else {
            continue;
        };
        if record.orb.unwrap_or(0.0).abs() > config.orb_tolerance_deg {
            continue;
        }
        let Some(i) = record
            .planet1
            .as_deref()
            .and_then(|n| known_planet(planets, n))
        else {
            continue;
        };
        let Some(j) = record
            .planet2
            .as_deref()
            .and_then(|n| known_planet(planets, n))
        else {
            continue;
        };
        if i == j || !seen.insert((i.min(j), i.max(j))) {
            continue;
        }

        let p1 = &planets[i].position;
        let p2 = &planets[j].position;
        aspects.push(Aspect {
            planet1: p1.name.clone(),
            planet2: p2.name.clone(),
            kind,
            difference: round4(p1.abs_degree - p2.abs_degree),
        });
    }

    aspects
}

/// Deterministic geometric detection over every unordered pair.
///
/// Pairs are visited i ascending then j ascending, so output order is
/// stable for a fixed planet list.
pub fn geometric_aspects(planets: &[ExtractedPlanet], config: &ChartConfig) -> Vec<Aspect> {
    let mut aspects = Vec::new();

    for i in 0..planets.len() {
        for j in (i + 1)..planets.len() {
            let (pi, pj) = (&planets[i], &planets[j]);
            if !pi.abs_degree_known || !pj.abs_degree_known {
                continue;
            }

            let circ = circular_distance(pi.position.abs_degree, pj.position.abs_degree);
            for kind in MAJOR_ASPECTS {
                if (circ - kind.angle_deg()).abs() <= config.orb_tolerance_deg {
                    aspects.push(Aspect {
                        planet1: pi.position.name.clone(),
                        planet2: pj.position.name.clone(),
                        kind,
                        difference: round4(pi.position.abs_degree - pj.position.abs_degree),
                    });
                    break; // one aspect per pair, priority order decides
                }
            }
        }
    }

    aspects
}

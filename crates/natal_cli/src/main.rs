use clap::{Parser, Subcommand};
use serde::Serialize;

use natal_base::{ALL_BODIES, Sign};
use natal_chart::{
    ChartConfig, ChartResult, ExtractedPlanet, PlanetPosition, assemble, geometric_aspects,
};
use natal_core::{ChartMoment, DemoProvider, GeoLocation};

#[derive(Parser)]
#[command(name = "natal", about = "Natal chart normalization CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a zodiac sign given as a name or a 1-based ordinal
    Sign {
        /// Sign name ("Libra") or provider ordinal (1-12)
        value: String,
    },
    /// Detect major aspects between bodies at the given longitudes
    Aspects {
        /// Absolute ecliptic longitudes in degrees, assigned to
        /// Sun, Moon, Mercury, ... in canonical order (max 10)
        lons: Vec<f64>,
        /// Orb tolerance in degrees
        #[arg(long, default_value = "8.0")]
        orb: f64,
    },
    /// Assemble a full chart from the built-in demo backend
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM)
        #[arg(long)]
        time: String,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lng: f64,
        /// Orb tolerance in degrees
        #[arg(long, default_value = "8.0")]
        orb: f64,
    },
}

/// Response envelope matching the frontend contract.
#[derive(Serialize)]
struct ChartEnvelope<'a> {
    success: bool,
    data: &'a ChartResult,
    query: ChartQuery<'a>,
}

#[derive(Serialize)]
struct ChartQuery<'a> {
    date: &'a str,
    time: &'a str,
    lat: f64,
    lng: f64,
}

fn require_moment(date: &str, time: &str) -> ChartMoment {
    let date_parts: Vec<&str> = date.split('-').collect();
    let time_parts: Vec<&str> = time.split(':').collect();
    if date_parts.len() != 3 || time_parts.len() != 2 {
        eprintln!("Invalid date/time: expected YYYY-MM-DD and HH:MM");
        std::process::exit(1);
    }
    let parse = |s: &str, what: &str| -> i64 {
        s.parse().unwrap_or_else(|_| {
            eprintln!("Invalid {what}: {s}");
            std::process::exit(1);
        })
    };
    let year = parse(date_parts[0], "year") as i32;
    let month = parse(date_parts[1], "month");
    let day = parse(date_parts[2], "day");
    let hour = parse(time_parts[0], "hour");
    let minute = parse(time_parts[1], "minute");
    if !(1..=12).contains(&month)
        || !(1..=31).contains(&day)
        || !(0..=23).contains(&hour)
        || !(0..=59).contains(&minute)
    {
        eprintln!("Date/time component out of range: {date} {time}");
        std::process::exit(1);
    }
    ChartMoment::new(year, month as u8, day as u8, hour as u8, minute as u8)
}

fn to_pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Failed to serialize output: {e}");
        std::process::exit(1);
    })
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sign { value } => {
            let sign = match value.parse::<i64>() {
                Ok(ordinal) => Sign::from_ordinal(ordinal),
                Err(_) => Sign::from_name(&value).unwrap_or(Sign::Aries),
            };
            println!("{} {}", sign.index(), sign.name());
        }

        Commands::Aspects { lons, orb } => {
            if lons.is_empty() || lons.len() > ALL_BODIES.len() {
                eprintln!("Expected 1-10 longitudes, got {}", lons.len());
                std::process::exit(1);
            }
            let planets: Vec<ExtractedPlanet> = lons
                .iter()
                .zip(ALL_BODIES)
                .map(|(&lon, body)| {
                    let (sign, degree) = Sign::from_longitude(lon);
                    ExtractedPlanet {
                        position: PlanetPosition {
                            name: body.name().to_string(),
                            sign,
                            degree,
                            house: 1,
                            abs_degree: lon,
                        },
                        abs_degree_known: true,
                    }
                })
                .collect();
            let aspects = geometric_aspects(&planets, &ChartConfig::with_orb(orb));
            println!("{}", to_pretty_json(&aspects));
        }

        Commands::Chart {
            date,
            time,
            lat,
            lng,
            orb,
        } => {
            let moment = require_moment(&date, &time);
            let location = GeoLocation::new(lat, lng);
            let config = ChartConfig::with_orb(orb);
            match assemble(&DemoProvider, None, &moment, &location, &config) {
                Ok(chart) => {
                    let envelope = ChartEnvelope {
                        success: true,
                        data: &chart,
                        query: ChartQuery {
                            date: &date,
                            time: &time,
                            lat,
                            lng,
                        },
                    };
                    println!("{}", to_pretty_json(&envelope));
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}

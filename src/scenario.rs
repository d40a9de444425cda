use std::fmt;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::config::ScenarioConfig;
use crate::placement::Placement;

/// One aircraft shown on the scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Aircraft {
    pub callsign_id: String,
    pub aircraft_type: String,
    /// bearing of the line the glyph sits on, in [0, 180)
    pub heading: f64,
    /// zero padded flight level band, e.g. "150"
    pub altitude: String,
    pub speed: u32,
}

impl Aircraft {
    /// identifier / type / altitude and speed, one per line
    pub fn tag_text(&self) -> String {
        format!(
            "{}\n{}\n{}    {}",
            self.callsign_id, self.aircraft_type, self.altitude, self.speed
        )
    }
}

/// Everything random about a single redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub headings: (f64, f64),
    pub aircraft: (Aircraft, Aircraft),
    pub placement: Placement,
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = &self.aircraft;
        write!(
            f,
            "{} {} FL{} hdg {:.1} | {} {} FL{} hdg {:.1} | {}",
            a.callsign_id,
            a.aircraft_type,
            a.altitude,
            a.heading,
            b.callsign_id,
            b.aircraft_type,
            b.altitude,
            b.heading,
            self.placement
        )
    }
}

pub fn random_heading<R: Rng + ?Sized>(rng: &mut R, config: &ScenarioConfig) -> f64 {
    let (lo, hi) = config.heading_range;
    if hi > lo {
        rng.random_range(lo..hi)
    } else {
        lo
    }
}

pub fn random_headings<R: Rng + ?Sized>(rng: &mut R, config: &ScenarioConfig) -> (f64, f64) {
    (random_heading(rng, config), random_heading(rng, config))
}

pub fn format_altitude(level: u32) -> String {
    format!("{:03}", level)
}

/// Two adjacent altitude bands, the second one step above the first. The
/// lower band never exceeds `highest - step`; a range narrower than one step
/// always yields `lowest`.
pub fn random_altitudes<R: Rng + ?Sized>(rng: &mut R, config: &ScenarioConfig) -> (String, String) {
    let (lowest, highest) = config.altitude_range;
    let step = config.altitude_step.max(1);
    let bands = (highest.saturating_sub(lowest) / step).max(1);
    let a = lowest + rng.random_range(0..bands) * step;
    (format_altitude(a), format_altitude(a + step))
}

/// Carrier code followed by a three digit flight number, or rarely a four
/// digit one. Nothing stops both aircraft of a scenario sharing an identifier.
pub fn random_identifier<R: Rng + ?Sized>(rng: &mut R, config: &ScenarioConfig) -> String {
    let callsign = pick(rng, &config.callsigns);
    let number: u32 = if rng.random_bool(config.four_digit_probability.clamp(0.0, 1.0)) {
        rng.random_range(1000..=9999)
    } else {
        rng.random_range(100..=999)
    };
    format!("{}{}", callsign, number)
}

/// Binds the two headings to freshly drawn aircraft; the first one gets the
/// lower altitude band.
pub fn generate_pair<R: Rng + ?Sized>(
    rng: &mut R,
    config: &ScenarioConfig,
    heading_a: f64,
    heading_b: f64,
) -> (Aircraft, Aircraft) {
    let (alt_a, alt_b) = random_altitudes(rng, config);

    let first = Aircraft {
        callsign_id: random_identifier(rng, config),
        aircraft_type: pick(rng, &config.aircraft_types),
        heading: heading_a,
        altitude: alt_a,
        speed: config.speed,
    };
    let second = Aircraft {
        callsign_id: random_identifier(rng, config),
        aircraft_type: pick(rng, &config.aircraft_types),
        heading: heading_b,
        altitude: alt_b,
        speed: config.speed,
    };
    (first, second)
}

// an empty set yields an empty string
fn pick<R: Rng + ?Sized>(rng: &mut R, items: &[String]) -> String {
    items.choose(rng).cloned().unwrap_or_default()
}

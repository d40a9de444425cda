use std::fmt;

use rand::Rng;

use crate::config::ScenarioConfig;
use crate::scenario::Aircraft;

/// Which side of the scope centre a glyph sits on, along its heading line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    Positive,
    Negative,
}

impl Parity {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Parity::Positive
        } else {
            Parity::Negative
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Parity::Positive => Parity::Negative,
            Parity::Negative => Parity::Positive,
        }
    }

    pub fn sign(self) -> f64 {
        match self {
            Parity::Positive => 1.0,
            Parity::Negative => -1.0,
        }
    }
}

/// Shared radial distance plus one parity per aircraft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub distance: f64,
    pub parities: (Parity, Parity),
}

impl Placement {
    /// signed distances along each aircraft's heading line
    pub fn offsets(&self) -> (f64, f64) {
        (
            self.distance * self.parities.0.sign(),
            self.distance * self.parities.1.sign(),
        )
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.offsets();
        write!(f, "offsets {:+} / {:+}", a, b)
    }
}

pub fn heading_gap(heading_a: f64, heading_b: f64) -> f64 {
    (heading_a - heading_b).abs()
}

/// Parity of the second glyph. Below the threshold the two heading lines nearly
/// coincide, so the glyph goes to the opposite side of the first one. A gap
/// equal to the threshold counts as far enough apart.
pub fn second_parity<R: Rng + ?Sized>(rng: &mut R, gap: f64, threshold: f64, first: Parity) -> Parity {
    if gap < threshold {
        first.opposite()
    } else {
        Parity::random(rng)
    }
}

pub fn random_distance<R: Rng + ?Sized>(rng: &mut R, config: &ScenarioConfig) -> f64 {
    let (a, b) = config.distance_range;
    rng.random_range(a.min(b)..=a.max(b)) as f64
}

pub fn place<R: Rng + ?Sized>(
    rng: &mut R,
    config: &ScenarioConfig,
    first: &Aircraft,
    second: &Aircraft,
) -> Placement {
    let distance = random_distance(rng, config);
    let parity_0 = Parity::random(rng);
    let gap = heading_gap(first.heading, second.heading);
    let parity_1 = second_parity(rng, gap, config.same_heading_threshold, parity_0);

    Placement {
        distance,
        parities: (parity_0, parity_1),
    }
}

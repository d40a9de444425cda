use std::collections::HashSet;

use pps_drill::placement::{place, second_parity};
use pps_drill::scenario::generate_pair;
use pps_drill::{Parity, ScenarioConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn combos_for(headings: (f64, f64), trials: usize, seed: u64) -> HashSet<(Parity, Parity)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let config = ScenarioConfig::default();
    (0..trials)
        .map(|_| {
            let (a, b) = generate_pair(&mut rng, &config, headings.0, headings.1);
            place(&mut rng, &config, &a, &b).parities
        })
        .collect()
}

#[test]
fn close_headings_force_opposite_sides() {
    let mut rng = StdRng::seed_from_u64(10);
    let config = ScenarioConfig::default();

    for i in 0..2_000 {
        let h0 = (i % 180) as f64;
        let h1 = (h0 + (i % 30) as f64 * 0.999).min(179.9);
        let (a, b) = generate_pair(&mut rng, &config, h0, h1);
        let placement = place(&mut rng, &config, &a, &b);

        if (h0 - h1).abs() < config.same_heading_threshold {
            assert_eq!(placement.parities.1, placement.parities.0.opposite());
        }
    }
}

#[test]
fn distant_headings_draw_parities_independently() {
    let combos = combos_for((10.0, 100.0), 1_000, 11);
    assert_eq!(combos.len(), 4);
}

#[test]
fn gap_at_threshold_takes_the_independent_branch() {
    // |10 - 40| == 30 == threshold
    let combos = combos_for((10.0, 40.0), 1_000, 12);
    assert!(combos.contains(&(Parity::Positive, Parity::Positive)));
    assert!(combos.contains(&(Parity::Negative, Parity::Negative)));
}

#[test]
fn gap_just_below_threshold_is_forced() {
    let combos = combos_for((10.0, 39.999), 1_000, 13);
    assert_eq!(
        combos,
        HashSet::from([(Parity::Positive, Parity::Negative), (Parity::Negative, Parity::Positive)])
    );
}

#[test]
fn second_parity_boundary() {
    let mut rng = StdRng::seed_from_u64(14);
    for _ in 0..100 {
        assert_eq!(second_parity(&mut rng, 29.99, 30.0, Parity::Positive), Parity::Negative);
        assert_eq!(second_parity(&mut rng, 0.0, 30.0, Parity::Negative), Parity::Positive);
    }
}

#[test]
fn distance_is_shared_and_inside_the_band() {
    let mut rng = StdRng::seed_from_u64(15);
    let config = ScenarioConfig::default();
    let mut seen = HashSet::new();

    for _ in 0..5_000 {
        let (a, b) = generate_pair(&mut rng, &config, 50.0, 60.0);
        let placement = place(&mut rng, &config, &a, &b);
        let (o0, o1) = placement.offsets();
        assert_eq!(o0.abs(), placement.distance);
        assert_eq!(o1.abs(), placement.distance);
        assert!((40.0..=170.0).contains(&placement.distance));
        assert_eq!(placement.distance.fract(), 0.0);
        seen.insert(placement.distance as u32);
    }

    assert!(seen.contains(&40));
    assert!(seen.contains(&170));
}

use super::*;

// =============================================================
// Determinism
// =============================================================

#[test]
fn same_seed_same_field() {
    let a = Noise3::new(7);
    let b = Noise3::new(7);
    for step in 0..50 {
        let x = f64::from(step) * 0.173;
        assert_eq!(a.sample(x, 0.3, 0.01), b.sample(x, 0.3, 0.01));
    }
}

#[test]
fn different_seeds_differ_somewhere() {
    let a = Noise3::new(1);
    let b = Noise3::new(2);
    let diverged = (0..100).any(|step| {
        let x = f64::from(step) * 0.31;
        (a.sample(x, 0.5, 0.2) - b.sample(x, 0.5, 0.2)).abs() > 1e-9
    });
    assert!(diverged);
}

#[test]
fn default_is_stable_across_instances() {
    let a = Noise3::default();
    let b = Noise3::default();
    assert_eq!(a.sample(0.4, 0.6, 0.8), b.sample(0.4, 0.6, 0.8));
}

// =============================================================
// Range
// =============================================================

#[test]
fn output_stays_in_unit_interval() {
    let noise = Noise3::new(99);
    for ix in 0..40 {
        for iz in 0..40 {
            let v = noise.sample(f64::from(ix) * 0.217, 0.9, f64::from(iz) * 0.389);
            assert!((-1.0..=1.0).contains(&v), "out of range: {v}");
        }
    }
}

#[test]
fn negative_coordinates_are_valid() {
    let noise = Noise3::new(5);
    let v = noise.sample(-3.7, -0.3, -120.5);
    assert!((-1.0..=1.0).contains(&v));
}

// =============================================================
// Smoothness
// =============================================================

#[test]
fn nearby_samples_are_close() {
    let noise = Noise3::new(11);
    let eps = 1e-4;
    for step in 0..20 {
        let x = f64::from(step) * 0.77;
        let a = noise.sample(x, 0.3, 0.5);
        let b = noise.sample(x + eps, 0.3, 0.5);
        assert!((a - b).abs() < 0.01, "discontinuity near x={x}");
    }
}

#[test]
fn field_is_not_constant() {
    let noise = Noise3::new(3);
    let spread = (0..100)
        .map(|step| noise.sample(f64::from(step) * 0.129, 0.0, 0.0))
        .fold((f64::MAX, f64::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
    assert!(spread.1 - spread.0 > 0.1);
}

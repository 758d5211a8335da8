use trailsim::configuration::config::{BodiesConfig, VelocityConfig};
use trailsim::{
    attraction_accelerations, body_seeds, compute_translation, ramp_alpha, speed_hue, Scenario,
    Trail, VariantConfig, VelocityMode,
};

use bevy::math::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Build a scenario with the given body count and trail caps, everything
/// else at the built-in defaults
fn scenario_with(count: usize, max_length: usize, max_total: usize) -> Scenario {
    let mut cfg = VariantConfig::default();
    cfg.bodies.count = count;
    cfg.trail.max_length = max_length;
    cfg.trail.max_total_particles = max_total;
    Scenario::build(cfg)
}

/// A trail filled with `n` samples at x = 0, 1, .., n-1 under `cap`,
/// asserting the cap invariant after every single record
fn filled_trail(n: usize, cap: usize) -> Trail {
    let mut trail = Trail::default();
    for i in 0..n {
        trail.record(Vec2::new(i as f32, 0.0), 0.0, cap);
        assert!(
            trail.len() <= cap,
            "cap invariant broken after record {}: len {} > cap {}",
            i,
            trail.len(),
            cap
        );
    }
    trail
}

/// Two point masses separated along x
fn pair_sources(dist: f32, mu1: f32, mu2: f32) -> Vec<(Vec2, f32)> {
    vec![(Vec2::new(0.0, 0.0), mu1), (Vec2::new(dist, 0.0), mu2)]
}

// ==================================================================================
// Trail store tests
// ==================================================================================

#[test]
fn trail_cap_invariant_holds_after_every_record() {
    let scenario = scenario_with(3, 2000, 5000);
    assert_eq!(scenario.trail_cap, 1666);

    let trail = filled_trail(2000, scenario.trail_cap);

    assert_eq!(trail.len(), 1666);

    // 334 oldest samples evicted, so the oldest survivor is sample 334
    let oldest = trail.iter().next().expect("trail is not empty");
    assert_eq!(oldest.position.x, 334.0);
}

#[test]
fn trail_global_budget_bounded() {
    let scenario = scenario_with(3, 2000, 5000);

    let trails: Vec<Trail> = (0..3)
        .map(|_| filled_trail(2000, scenario.trail_cap))
        .collect();

    let total: usize = trails.iter().map(Trail::len).sum();
    assert!(
        total <= scenario.trail.max_total_particles,
        "global budget exceeded: {} > {}",
        total,
        scenario.trail.max_total_particles
    );
}

#[test]
fn trail_samples_stay_chronological() {
    let trail = filled_trail(10, 5);

    let xs: Vec<f32> = trail.iter().map(|sample| sample.position.x).collect();
    assert_eq!(xs, vec![5.0, 6.0, 7.0, 8.0, 9.0]);
}

#[test]
fn trail_zero_cap_evicts_to_empty() {
    let trail = filled_trail(10, 0);
    assert!(trail.is_empty());
}

#[test]
fn scenario_trail_cap_derivation() {
    assert_eq!(scenario_with(3, 2000, 5000).trail_cap, 1666);
    assert_eq!(scenario_with(4, 10, 5000).trail_cap, 10);
    assert_eq!(scenario_with(3, 2000, 0).trail_cap, 0);
    // no bodies: no trails, and no division by zero
    assert_eq!(scenario_with(0, 2000, 5000).trail_cap, 0);
}

// ==================================================================================
// Palette tests
// ==================================================================================

#[test]
fn hue_ramp_endpoints_and_clamp() {
    assert_eq!(speed_hue(0.0), 250.0);
    assert_eq!(speed_hue(0.5), 335.0);
    assert_eq!(speed_hue(1.0), 420.0);
    assert_eq!(speed_hue(2.0), 420.0);
}

#[test]
fn hue_ramp_monotone() {
    let mut previous = speed_hue(0.0);
    for i in 1..=120 {
        let hue = speed_hue(i as f32 * 0.01);
        assert!(hue >= previous, "hue decreased at speed {}", i as f32 * 0.01);
        previous = hue;
    }
}

#[test]
fn ramp_alpha_fades_oldest_quarter() {
    // len 8: the ramp spans the two oldest samples
    assert_eq!(ramp_alpha(0, 8), 0.0);
    assert_eq!(ramp_alpha(1, 8), 0.5);
    assert_eq!(ramp_alpha(2, 8), 1.0);
    assert_eq!(ramp_alpha(7, 8), 1.0);
}

// ==================================================================================
// Camera tests
// ==================================================================================

#[test]
fn camera_translation_identity_cases() {
    let center = Vec2::new(400.0, 300.0);

    assert_eq!(compute_translation(&[], center), Vec2::ZERO);
    assert_eq!(compute_translation(&[center], center), Vec2::ZERO);

    // a pair symmetric around the center also needs no translation
    let pair = [
        center + Vec2::new(50.0, -20.0),
        center - Vec2::new(50.0, -20.0),
    ];
    assert_eq!(compute_translation(&pair, center), Vec2::ZERO);
}

#[test]
fn camera_translation_recenters_offset_bodies() {
    let translation = compute_translation(&[Vec2::new(10.0, -4.0)], Vec2::ZERO);
    assert_eq!(translation, Vec2::new(-10.0, 4.0));
}

// ==================================================================================
// Body factory tests
// ==================================================================================

#[test]
fn factory_produces_exactly_count_seeds() {
    let bodies = BodiesConfig::default();
    let velocity = VelocityConfig::default();
    let center = Vec2::new(400.0, 300.0);

    let mut rng = StdRng::seed_from_u64(7);
    let seeds = body_seeds(&bodies, &velocity, center, &mut rng);
    assert_eq!(seeds.len(), bodies.count);

    let half = bodies.max_initial_distance / 2.0;
    for seed in &seeds {
        assert!((seed.position.x - center.x).abs() <= half);
        assert!((seed.position.y - center.y).abs() <= half);
    }

    let mut rng = StdRng::seed_from_u64(7);
    let none = body_seeds(
        &BodiesConfig {
            count: 0,
            ..BodiesConfig::default()
        },
        &velocity,
        center,
        &mut rng,
    );
    assert!(none.is_empty());
}

#[test]
fn factory_coherent_speed_within_bounds() {
    let bodies = BodiesConfig {
        count: 50,
        ..BodiesConfig::default()
    };
    let velocity = VelocityConfig::default();

    let mut rng = StdRng::seed_from_u64(3);
    let seeds = body_seeds(&bodies, &velocity, Vec2::ZERO, &mut rng);

    // the (speed, speed) vector rotated into place has magnitude speed * sqrt(2)
    let sqrt2 = std::f32::consts::SQRT_2;
    let min = (velocity.initial_speed - velocity.speed_range) * sqrt2 - 1e-4;
    let max = (velocity.initial_speed + velocity.speed_range) * sqrt2 + 1e-4;

    for seed in &seeds {
        let magnitude = seed.velocity.length();
        assert!(
            magnitude >= min && magnitude <= max,
            "coherent speed {} outside [{}, {}]",
            magnitude,
            min,
            max
        );
    }
}

#[test]
fn factory_random_velocities_within_range() {
    let bodies = BodiesConfig {
        count: 50,
        ..BodiesConfig::default()
    };
    let velocity = VelocityConfig {
        mode: VelocityMode::Random,
        ..VelocityConfig::default()
    };

    let mut rng = StdRng::seed_from_u64(11);
    let seeds = body_seeds(&bodies, &velocity, Vec2::ZERO, &mut rng);

    for seed in &seeds {
        assert!(seed.velocity.x.abs() <= velocity.random_range);
        assert!(seed.velocity.y.abs() <= velocity.random_range);
    }
}

#[test]
fn factory_seeded_runs_are_reproducible() {
    let bodies = BodiesConfig::default();
    let velocity = VelocityConfig::default();

    let mut first = StdRng::seed_from_u64(42);
    let mut second = StdRng::seed_from_u64(42);

    assert_eq!(
        body_seeds(&bodies, &velocity, Vec2::ZERO, &mut first),
        body_seeds(&bodies, &velocity, Vec2::ZERO, &mut second)
    );
}

// ==================================================================================
// Attraction tests
// ==================================================================================

#[test]
fn attraction_newton_third_law() {
    let sources = pair_sources(10.0, 100.0, 100.0);
    let accelerations = attraction_accelerations(&sources);

    // equal mu means equal and opposite accelerations
    let net = accelerations[0] + accelerations[1];
    assert!(net.length() < 1e-6, "net acceleration not zero: {:?}", net);
}

#[test]
fn attraction_points_toward_other_body() {
    let sources = pair_sources(10.0, 100.0, 100.0);
    let accelerations = attraction_accelerations(&sources);

    assert!(accelerations[0].x > 0.0, "left body not pulled right");
    assert!(accelerations[1].x < 0.0, "right body not pulled left");
}

#[test]
fn attraction_inverse_square_law() {
    let near = attraction_accelerations(&pair_sources(1.0, 1.0, 1.0));
    let far = attraction_accelerations(&pair_sources(2.0, 1.0, 1.0));

    let ratio = near[0].length() / far[0].length();
    assert!((ratio - 4.0).abs() < 1e-3, "expected ~4x, got {}", ratio);
}

#[test]
fn attraction_preserves_center_of_mass() {
    // three equal bodies at rest inside a 200-unit box around the viewport
    // center; with no global gravity the center of mass must stay put
    let mut positions = vec![
        Vec2::new(-80.0, -30.0),
        Vec2::new(60.0, 70.0),
        Vec2::new(20.0, -40.0),
    ];
    let mut velocities = vec![Vec2::ZERO; 3];
    let mu = 2000.0;
    let dt = 1.0 / 60.0;

    let initial_com = (positions[0] + positions[1] + positions[2]) / 3.0;

    for _ in 0..1000 {
        let sources: Vec<(Vec2, f32)> = positions.iter().map(|&p| (p, mu)).collect();
        let accelerations = attraction_accelerations(&sources);
        for i in 0..3 {
            velocities[i] += accelerations[i] * dt;
            positions[i] += velocities[i] * dt;
        }
    }

    let final_com = (positions[0] + positions[1] + positions[2]) / 3.0;
    let drift = (final_com - initial_com).length();
    assert!(drift < 0.1, "center of mass drifted by {}", drift);
}

#[test]
fn attraction_conserves_momentum() {
    // same setup but with initial velocities: the total momentum (equal
    // masses, so the velocity sum) must not change
    let mut positions = vec![
        Vec2::new(-70.0, 10.0),
        Vec2::new(90.0, -60.0),
        Vec2::new(-10.0, 55.0),
    ];
    let mut velocities = vec![
        Vec2::new(12.0, 6.0),
        Vec2::new(-8.0, 14.0),
        Vec2::new(4.0, -10.0),
    ];
    let mu = 5000.0;
    let dt = 1.0 / 60.0;

    let initial_momentum = velocities[0] + velocities[1] + velocities[2];

    for _ in 0..1000 {
        let sources: Vec<(Vec2, f32)> = positions.iter().map(|&p| (p, mu)).collect();
        let accelerations = attraction_accelerations(&sources);
        for i in 0..3 {
            velocities[i] += accelerations[i] * dt;
            positions[i] += velocities[i] * dt;
        }
    }

    let final_momentum = velocities[0] + velocities[1] + velocities[2];
    let change = (final_momentum - initial_momentum).length();
    assert!(change < 1e-2, "momentum changed by {}", change);
}

// ==================================================================================
// Configuration tests
// ==================================================================================

#[test]
fn variant_config_partial_yaml_overrides_defaults() {
    let yaml = r#"
bodies:
  count: 5
  radius: 4.0
  mass: 30.0
  restitution: 0.9
  max_initial_distance: 150.0

velocity:
  mode: random
  initial_speed: 0.2
  speed_range: 0.05
  angle_range: 0.8
  random_range: 0.4
"#;

    let cfg: VariantConfig = serde_yaml::from_str(yaml).expect("yaml parses");

    assert_eq!(cfg.bodies.count, 5);
    assert_eq!(cfg.velocity.mode, VelocityMode::Random);

    // untouched sections keep the built-in defaults
    assert_eq!(cfg.trail.max_length, 2000);
    assert_eq!(cfg.trail.max_total_particles, 5000);
    assert!(cfg.render.centered);
}

#[test]
fn default_variant_matches_reference_parameters() {
    let scenario = Scenario::build(VariantConfig::default());

    assert_eq!(scenario.bodies.count, 3);
    assert_eq!(scenario.trail_cap, 1666);
    assert!((scenario.dt - 1.0 / 60.0).abs() < 1e-9);
}

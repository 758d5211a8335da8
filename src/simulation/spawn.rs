//! Initial body construction
//!
//! `body_seeds` produces the initial positions and velocities for a variant;
//! the startup systems turn them into entities owned by the rigid-body
//! engine, with the attraction capability and an empty trail attached.
//! Border variants additionally get four static attracting walls

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::configuration::config::{BodiesConfig, VelocityConfig, VelocityMode};
use crate::simulation::attraction::Attractor;
use crate::simulation::scenario::Scenario;
use crate::visualization::trail::Trail;

/// Marker for the dynamic simulation bodies, the ones that move and leave
/// trails
#[derive(Component)]
pub struct SimBody;

/// Marker for the static border walls
#[derive(Component)]
pub struct Border;

/// Initial state of one body before any entity exists
///
/// Velocity is in units per physics tick, the same scale the trail samples
/// use for speed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySeed {
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Produces exactly `bodies.count` seeds
///
/// Positions are uniform within a square of side `max_initial_distance`
/// centered on `center`. Velocities are either independent per-axis uniforms
/// or a loosely coherent drift: one base angle per run, each body perturbed
/// by a bounded angle and speed offset, the speed vector then rotated into
/// place
pub fn body_seeds(
    bodies: &BodiesConfig,
    velocity: &VelocityConfig,
    center: Vec2,
    rng: &mut impl Rng,
) -> Vec<BodySeed> {
    let half = bodies.max_initial_distance / 2.0;
    let base_angle = rng.gen_range(0.0..std::f32::consts::TAU);

    (0..bodies.count)
        .map(|_| {
            let position =
                center + Vec2::new(rng.gen_range(-half..=half), rng.gen_range(-half..=half));

            let v = match velocity.mode {
                VelocityMode::Random => Vec2::new(
                    rng.gen_range(-velocity.random_range..=velocity.random_range),
                    rng.gen_range(-velocity.random_range..=velocity.random_range),
                ),
                VelocityMode::Coherent => {
                    let angle = base_angle
                        + rng.gen_range(-velocity.angle_range / 2.0..=velocity.angle_range / 2.0);
                    let speed = velocity.initial_speed
                        + rng.gen_range(-velocity.speed_range..=velocity.speed_range);
                    Vec2::from_angle(angle).rotate(Vec2::splat(speed))
                }
            };

            BodySeed {
                position,
                velocity: v,
            }
        })
        .collect()
}

/// Startup system: spawn one rigid body per seed
///
/// The engine owns integration and collision from here on; this crate only
/// configures mass, restitution, zero damping and the shared collision group
pub fn spawn_bodies(mut commands: Commands, scenario: Res<Scenario>) {
    let mut rng = match scenario.physics.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let seeds = body_seeds(
        &scenario.bodies,
        &scenario.velocity,
        scenario.viewport_center(),
        &mut rng,
    );

    info!("spawning {} bodies", seeds.len());

    let mu = scenario.physics.gravitational_constant * scenario.bodies.mass;

    for seed in seeds {
        commands.spawn((
            SpatialBundle::from_transform(Transform::from_translation(seed.position.extend(0.0))),
            RigidBody::Dynamic,
            Collider::ball(scenario.bodies.radius),
            ColliderMassProperties::Mass(scenario.bodies.mass),
            Restitution::coefficient(scenario.bodies.restitution),
            Damping {
                linear_damping: 0.0,
                angular_damping: 0.0,
            },
            CollisionGroups::new(Group::GROUP_1, Group::GROUP_1),
            // seed velocity is per tick, the engine wants per second
            Velocity::linear(seed.velocity / scenario.dt),
            Attractor { mu },
            Trail::default(),
            SimBody,
        ));
    }
}

/// Startup system: spawn the four static attracting walls in border variants
///
/// Walls sit just outside the viewport edges. They never move, never get a
/// trail, and pull bodies back toward the middle through their [`Attractor`]
pub fn spawn_borders(mut commands: Commands, scenario: Res<Scenario>) {
    if !scenario.borders.enabled {
        return;
    }

    let half_width = scenario.window.width / 2.0;
    let half_height = scenario.window.height / 2.0;
    let half_thickness = scenario.borders.thickness / 2.0;

    // (center, half-extents) for top, right, bottom, left
    let walls = [
        (
            Vec2::new(0.0, half_height + half_thickness),
            Vec2::new(half_width + scenario.borders.thickness, half_thickness),
        ),
        (
            Vec2::new(half_width + half_thickness, 0.0),
            Vec2::new(half_thickness, half_height + scenario.borders.thickness),
        ),
        (
            Vec2::new(0.0, -half_height - half_thickness),
            Vec2::new(half_width + scenario.borders.thickness, half_thickness),
        ),
        (
            Vec2::new(-half_width - half_thickness, 0.0),
            Vec2::new(half_thickness, half_height + scenario.borders.thickness),
        ),
    ];

    let mu = scenario.physics.gravitational_constant * scenario.borders.mass;

    for (center, half_extents) in walls {
        commands.spawn((
            SpatialBundle::from_transform(Transform::from_translation(center.extend(0.0))),
            RigidBody::Fixed,
            Collider::cuboid(half_extents.x, half_extents.y),
            Restitution::coefficient(scenario.bodies.restitution),
            CollisionGroups::new(Group::GROUP_1, Group::GROUP_1),
            Attractor { mu },
            Border,
        ));
    }
}

//! Hosts the external rigid-body engine
//!
//! Integration, collision detection and restitution are fully delegated to
//! rapier. This module only configures it: fixed-step ticking in Bevy's
//! `FixedUpdate` schedule (independent of render cadence), global gravity
//! zeroed so only inter-body attraction acts, and the attraction system
//! ordered ahead of the engine's sync step

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::simulation::attraction::apply_attraction;
use crate::simulation::scenario::Scenario;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(
            RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(100.0).in_fixed_schedule(),
        )
        .add_systems(Startup, configure_engine)
        .add_systems(
            FixedUpdate,
            apply_attraction.before(PhysicsSet::SyncBackend),
        );
    }
}

/// Zero or multiple physics ticks may fall between two rendered frames;
/// `TimestepMode::Fixed` advances exactly `dt` per tick either way
fn configure_engine(scenario: Res<Scenario>, mut config: ResMut<RapierConfiguration>) {
    config.gravity = Vec2::ZERO;
    config.timestep_mode = TimestepMode::Fixed {
        dt: scenario.dt,
        substeps: 1,
    };
}

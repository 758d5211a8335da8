//! Build a fully-initialized runtime scenario from configuration
//!
//! Takes a `VariantConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing the variant's scalar parameters plus the values
//! derived from them:
//!
//! - the fixed physics step `dt`
//! - the effective per-body trail cap
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! spawn, attraction and rendering systems. It is never mutated after startup

use bevy::prelude::{Resource, Vec2};

use crate::configuration::config::{
    BodiesConfig, BordersConfig, PhysicsConfig, RenderConfig, TrailConfig, VariantConfig,
    VelocityConfig, WindowConfig,
};

/// Bevy resource representing a fully-initialized simulation variant
///
/// This is the main "runtime bundle" constructed from a [`VariantConfig`]:
/// the immutable scalar parameters of the run plus the derived step size and
/// trail cap
///
/// In Bevy terms, this is inserted as a `Resource` and then read by systems
/// responsible for spawning, attraction and rendering
#[derive(Resource, Debug, Clone)]
pub struct Scenario {
    pub window: WindowConfig,
    pub bodies: BodiesConfig,
    pub velocity: VelocityConfig,
    pub trail: TrailConfig,
    pub render: RenderConfig,
    pub borders: BordersConfig,
    pub physics: PhysicsConfig,

    /// Fixed physics step in seconds, `1 / tick_rate`
    pub dt: f32,

    /// Effective per-body trail cap:
    /// `min(max_length, max_total_particles / count)`, zero when there are
    /// no bodies. A zero cap means trails evict straight down to empty
    pub trail_cap: usize,
}

impl Scenario {
    pub fn build(cfg: VariantConfig) -> Self {
        // Per-body cap: the per-body limit and an equal share of the global
        // particle budget, whichever is smaller
        let trail_cap = if cfg.bodies.count == 0 {
            0
        } else {
            cfg.trail
                .max_length
                .min(cfg.trail.max_total_particles / cfg.bodies.count)
        };

        let dt = (1.0 / cfg.physics.tick_rate) as f32;

        Self {
            window: cfg.window,
            bodies: cfg.bodies,
            velocity: cfg.velocity,
            trail: cfg.trail,
            render: cfg.render,
            borders: cfg.borders,
            physics: cfg.physics,
            dt,
            trail_cap,
        }
    }

    /// World-space position of the viewport center. Spawning and camera
    /// centering are both expressed relative to it
    pub fn viewport_center(&self) -> Vec2 {
        Vec2::ZERO
    }
}

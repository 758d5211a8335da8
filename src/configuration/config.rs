//! Variant configuration for the gravity trail visualizer.
//!
//! This module defines a thin, `serde`-deserializable description of one
//! simulation variant. A variant consists of:
//!
//! - [`WindowConfig`]   – viewport size
//! - [`BodiesConfig`]   – body count and physical parameters
//! - [`VelocityConfig`] – how initial velocities are sampled
//! - [`TrailConfig`]    – trail caps and fade style
//! - [`RenderConfig`]   – body paint and camera centering
//! - [`BordersConfig`]  – optional static attracting walls
//! - [`PhysicsConfig`]  – attraction constant, tick rate, RNG seed
//! - [`VariantConfig`]  – top-level wrapper used to load a variant from YAML
//!
//! # YAML format
//! An example variant YAML matching these types (every section is optional
//! and falls back to the built-in three-body variant):
//!
//! ```yaml
//! window:
//!   width: 800.0
//!   height: 600.0
//!
//! bodies:
//!   count: 3
//!   radius: 5.0
//!   mass: 50.0
//!   restitution: 0.5
//!   max_initial_distance: 200.0
//!
//! velocity:
//!   mode: coherent          # or "random"
//!   initial_speed: 0.3      # units per physics tick
//!   speed_range: 0.1
//!   angle_range: 1.5707963  # radians
//!   random_range: 0.5
//!
//! trail:
//!   max_length: 2000
//!   max_total_particles: 5000
//!   fade: ramp              # or "uniform"
//!   uniform_alpha: 0.7
//!
//! render:
//!   body_paint: speed       # or "fixed"
//!   fixed_color: [0.9, 0.9, 0.9]
//!   centered: true
//!
//! borders:
//!   enabled: false
//!   mass: 50.0
//!   thickness: 60.0
//!
//! physics:
//!   gravitational_constant: 650.0
//!   tick_rate: 60.0
//!   seed: 42                # omit for a different run every launch
//! ```

use serde::Deserialize;

/// How initial velocities are sampled
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VelocityMode {
    Random,   // uniform-random in both axes, fully independent bodies
    Coherent, // shared base direction per run, perturbed per body
}

/// How trail samples fade with age
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrailFade {
    Uniform, // every sample at the same fixed alpha
    Ramp,    // oldest quarter fades in from transparent
}

/// How the body discs are colored
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BodyPaint {
    Speed, // same speed-to-hue ramp as the trail
    Fixed, // constant color from `fixed_color`
}

/// Viewport size in pixels
#[derive(Deserialize, Debug, Clone)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

/// Body count and per-body physical parameters
#[derive(Deserialize, Debug, Clone)]
pub struct BodiesConfig {
    pub count: usize,              // zero yields an empty simulation, not an error
    pub radius: f32,               // collider and disc radius
    pub mass: f32,                 // exact rigid-body mass
    pub restitution: f32,          // bounciness on body/body and body/border contact
    pub max_initial_distance: f32, // side of the spawn square around the viewport center
}

/// Initial velocity sampling. Speeds are in units per physics tick
#[derive(Deserialize, Debug, Clone)]
pub struct VelocityConfig {
    pub mode: VelocityMode,
    pub initial_speed: f32, // base speed for `coherent`
    pub speed_range: f32,   // per-body speed offset bound for `coherent`
    pub angle_range: f32,   // per-body angle offset bound (radians) for `coherent`
    pub random_range: f32,  // per-axis bound for `random`
}

/// Trail caps and fade style
#[derive(Deserialize, Debug, Clone)]
pub struct TrailConfig {
    pub max_length: usize,          // per-body cap
    pub max_total_particles: usize, // global budget across all trails
    pub fade: TrailFade,
    pub uniform_alpha: f32, // alpha used by `TrailFade::Uniform`
}

/// Body paint and camera behavior
#[derive(Deserialize, Debug, Clone)]
pub struct RenderConfig {
    pub body_paint: BodyPaint,
    pub fixed_color: [f32; 3], // rgb used by `BodyPaint::Fixed`
    pub centered: bool,        // keep the center of mass at the viewport center
}

/// Optional static border bodies just outside the viewport edges.
/// They attract bodies back toward the middle as well as bouncing them
#[derive(Deserialize, Debug, Clone)]
pub struct BordersConfig {
    pub enabled: bool,
    pub mass: f32,      // attraction mass of each wall
    pub thickness: f32, // wall thickness in pixels
}

/// Attraction constant, physics cadence and determinism
#[derive(Deserialize, Debug, Clone)]
pub struct PhysicsConfig {
    pub gravitational_constant: f32, // mu of a body = G * mass
    pub tick_rate: f64,              // physics ticks per second, independent of rendering
    pub seed: Option<u64>,           // deterministic seed to make runs reproducable
}

/// Top-level variant configuration loaded from YAML.
/// Omitted sections fall back to the built-in three-body variant
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct VariantConfig {
    pub window: WindowConfig,
    pub bodies: BodiesConfig,
    pub velocity: VelocityConfig,
    pub trail: TrailConfig,
    pub render: RenderConfig,
    pub borders: BordersConfig,
    pub physics: PhysicsConfig,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Default for BodiesConfig {
    fn default() -> Self {
        Self {
            count: 3,
            radius: 5.0,
            mass: 50.0,
            restitution: 0.5,
            max_initial_distance: 200.0,
        }
    }
}

impl Default for VelocityConfig {
    fn default() -> Self {
        Self {
            mode: VelocityMode::Coherent,
            initial_speed: 0.3,
            speed_range: 0.1,
            angle_range: 0.5 * std::f32::consts::PI,
            random_range: 0.5,
        }
    }
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            max_length: 2000,
            max_total_particles: 5000,
            fade: TrailFade::Ramp,
            uniform_alpha: 0.7,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            body_paint: BodyPaint::Speed,
            fixed_color: [0.9, 0.9, 0.9],
            centered: true,
        }
    }
}

impl Default for BordersConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            mass: 50.0,
            thickness: 60.0,
        }
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: 650.0,
            tick_rate: 60.0,
            seed: None,
        }
    }
}

//! Bevy viewer: app wiring and the per-frame render pass
//!
//! Every rendered frame, after physics and camera state are settled, each
//! body records one trail sample and the frame is painted: trail samples as
//! single-pixel squares colored by speed and faded by age, then the body
//! discs themselves. Nothing here mutates body or trail state other than the
//! per-frame `record`

use bevy::gizmos::config::{DefaultGizmoConfigGroup, GizmoConfigStore};
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{ColorMaterial, Mesh2dHandle};
use bevy_rapier2d::prelude::Velocity;

use crate::configuration::config::{BodyPaint, TrailFade};
use crate::simulation::engine::WorldPlugin;
use crate::simulation::scenario::Scenario;
use crate::simulation::spawn::{spawn_bodies, spawn_borders, SimBody};
use crate::visualization::camera::{camera_centered, recenter_camera};
use crate::visualization::palette::{ramp_alpha, speed_color};
use crate::visualization::trail::Trail;

/// Builds and runs the Bevy app for one variant. Returns when the window
/// closes
pub fn run(scenario: Scenario) {
    let window = Window {
        title: "trailsim".to_string(),
        resolution: (scenario.window.width, scenario.window.height).into(),
        resizable: false,
        ..default()
    };

    let tick_rate = scenario.physics.tick_rate;

    App::new()
        .insert_resource(scenario)
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(Time::<Fixed>::from_hz(tick_rate))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        .add_plugins(WorldPlugin)
        .add_systems(Startup, (setup_viewport, spawn_bodies, spawn_borders))
        .add_systems(First, attach_body_visuals)
        .add_systems(
            Update,
            (
                record_trails,
                recenter_camera.run_if(camera_centered),
                draw_trails,
                tint_bodies,
            )
                .chain(),
        )
        .run();
}

/// Startup system: 2D camera at the viewport center plus pixel-thin gizmo
/// lines for the trail squares
fn setup_viewport(
    scenario: Res<Scenario>,
    mut commands: Commands,
    mut config_store: ResMut<GizmoConfigStore>,
) {
    info!(
        "starting viewer with {} bodies, trail cap {}",
        scenario.bodies.count, scenario.trail_cap
    );

    commands.spawn(Camera2dBundle::default());

    let (gizmo_config, _) = config_store.config_mut::<DefaultGizmoConfigGroup>();
    gizmo_config.line_width = 1.0;
}

/// Attaches a filled disc to every newly spawned body
fn attach_body_visuals(
    scenario: Res<Scenario>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    new_bodies: Query<Entity, Added<SimBody>>,
) {
    for entity in &new_bodies {
        let color = match scenario.render.body_paint {
            BodyPaint::Speed => speed_color(0.0, 1.0),
            BodyPaint::Fixed => {
                let [r, g, b] = scenario.render.fixed_color;
                Color::rgb(r, g, b)
            }
        };

        commands.entity(entity).insert((
            Mesh2dHandle(meshes.add(Circle::new(scenario.bodies.radius))),
            materials.add(color),
        ));
    }
}

/// Appends one sample per body per rendered frame
///
/// Speed is recorded as distance per physics tick so the hue ramp's [0, 1]
/// range matches the configured initial speeds
fn record_trails(
    scenario: Res<Scenario>,
    mut bodies: Query<(&Transform, &Velocity, &mut Trail), With<SimBody>>,
) {
    for (transform, velocity, mut trail) in &mut bodies {
        let speed = velocity.linvel.length() * scenario.dt;
        trail.record(transform.translation.truncate(), speed, scenario.trail_cap);
    }
}

/// Paints every trail sample as a single-pixel square, hue from the sample's
/// speed, alpha from its age
fn draw_trails(
    scenario: Res<Scenario>,
    mut gizmos: Gizmos,
    bodies: Query<&Trail, With<SimBody>>,
) {
    for trail in &bodies {
        let len = trail.len();
        for (index, sample) in trail.iter().enumerate() {
            let alpha = match scenario.trail.fade {
                TrailFade::Uniform => scenario.trail.uniform_alpha,
                TrailFade::Ramp => ramp_alpha(index, len),
            };
            gizmos.rect_2d(
                sample.position,
                0.0,
                Vec2::ONE,
                speed_color(sample.speed, alpha),
            );
        }
    }
}

/// Recolors the body discs by their current speed in the speed-paint
/// variants. Fixed-paint variants keep the color set at spawn
fn tint_bodies(
    scenario: Res<Scenario>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    bodies: Query<(&Velocity, &Handle<ColorMaterial>), With<SimBody>>,
) {
    if scenario.render.body_paint != BodyPaint::Speed {
        return;
    }

    for (velocity, material) in &bodies {
        let speed = velocity.linvel.length() * scenario.dt;
        if let Some(material) = materials.get_mut(material) {
            material.color = speed_color(speed, 1.0);
        }
    }
}

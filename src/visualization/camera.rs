//! Center-of-mass camera tracking
//!
//! Centering variants keep the bodies' mean position pinned to the viewport
//! center. The translation is a pure function of the current body positions,
//! recomputed from scratch every frame with no smoothing or accumulated
//! state

use bevy::prelude::*;

use crate::simulation::scenario::Scenario;
use crate::simulation::spawn::SimBody;

/// Offset that moves the bodies' center of mass onto `viewport_center`
///
/// Zero positions yield the identity translation rather than a division by
/// zero
pub fn compute_translation(positions: &[Vec2], viewport_center: Vec2) -> Vec2 {
    if positions.is_empty() {
        return Vec2::ZERO;
    }

    let center_of_mass = positions.iter().copied().sum::<Vec2>() / positions.len() as f32;

    viewport_center - center_of_mass
}

/// Run condition for [`recenter_camera`]
pub fn camera_centered(scenario: Res<Scenario>) -> bool {
    scenario.render.centered
}

/// Per-frame system: move the 2D camera opposite to the computed translation
/// so the center of mass lands on the viewport center
pub fn recenter_camera(
    scenario: Res<Scenario>,
    bodies: Query<&Transform, (With<SimBody>, Without<Camera>)>,
    mut camera: Query<&mut Transform, With<Camera>>,
) {
    let positions: Vec<Vec2> = bodies
        .iter()
        .map(|transform| transform.translation.truncate())
        .collect();

    let translation = compute_translation(&positions, scenario.viewport_center());

    let Ok(mut camera_transform) = camera.get_single_mut() else {
        return;
    };

    let focus = scenario.viewport_center() - translation;
    camera_transform.translation.x = focus.x;
    camera_transform.translation.y = focus.y;
}

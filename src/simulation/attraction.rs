//! Pairwise attraction between registered bodies
//!
//! Everything carrying an [`Attractor`] participates in mutual gravitational
//! attraction: the dynamic bodies and, in the border variants, the static
//! walls. This module only supplies positions and gravitational parameters;
//! the force law itself is `particular`'s, and the resulting velocity change
//! is handed to the rigid-body engine before each step

use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;
use particular::prelude::*;

use crate::simulation::scenario::Scenario;

/// Attraction capability of one body
///
/// `mu` is the standard gravitational parameter, `G * mass`. The force law
/// applied between attractor pairs is not defined here
#[derive(Component, Debug, Clone, Copy)]
pub struct Attractor {
    pub mu: f32,
}

/// Pairwise gravitational accelerations for a set of `(position, mu)` point
/// masses, returned in input order
pub fn attraction_accelerations(sources: &[(Vec2, f32)]) -> Vec<Vec2> {
    sources.iter().accelerations(sequential::BruteForce).collect()
}

/// Applies one tick worth of attraction to every dynamic body
///
/// Runs in the fixed schedule ahead of the rigid-body engine's sync step.
/// Static attractors (the border walls) contribute to the field but receive
/// no velocity change
pub fn apply_attraction(
    scenario: Res<Scenario>,
    mut movers: Query<(&Transform, &Attractor, &mut Velocity)>,
    anchors: Query<(&Transform, &Attractor), Without<Velocity>>,
) {
    // Collecting into a vector first is faster than iterating the query
    // directly, and fixes the order used to zip the results back
    let sources: Vec<(Vec2, f32)> = movers
        .iter()
        .map(|(transform, attractor, _)| (transform.translation.truncate(), attractor.mu))
        .chain(
            anchors
                .iter()
                .map(|(transform, attractor)| (transform.translation.truncate(), attractor.mu)),
        )
        .collect();

    if sources.len() < 2 {
        return;
    }

    let accelerations = attraction_accelerations(&sources);

    for ((.., mut velocity), acceleration) in movers.iter_mut().zip(&accelerations) {
        velocity.linvel += *acceleration * scenario.dt;
    }
}

//! Bounded per-body trail history
//!
//! Each dynamic body owns one [`Trail`]: an insertion-ordered, capped
//! sequence of [`Sample`]s recorded once per rendered frame. The trail is a
//! component on the body entity, so its lifetime is exactly the body's

use std::collections::VecDeque;

use bevy::prelude::*;

/// One recorded snapshot of a body: position and distance covered per
/// physics tick. Never mutated once stored, only eventually evicted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub position: Vec2,
    pub speed: f32,
}

/// Chronological history of a body's recent samples, oldest first
#[derive(Component, Debug, Clone, Default)]
pub struct Trail {
    samples: VecDeque<Sample>,
}

impl Trail {
    /// Appends a sample at the newest end, then evicts from the oldest end
    /// until the trail fits `cap` again
    ///
    /// In steady state exactly one sample is evicted per overflowing call;
    /// the loop also restores the invariant if the cap shrank. A cap of zero
    /// leaves the trail empty
    pub fn record(&mut self, position: Vec2, speed: f32, cap: usize) {
        self.samples.push_back(Sample { position, speed });
        while self.samples.len() > cap {
            self.samples.pop_front();
        }
    }

    /// Samples in chronological order, oldest first
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Sample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

//! Speed-to-color mapping shared by trails and body discs

use bevy::prelude::Color;

/// Hue for a given speed: 250° (blue) at rest, rising to 420° at one unit
/// of distance per tick and clamped there. Values past 360° wrap around to
/// the red end when painted
pub fn speed_hue(speed: f32) -> f32 {
    250.0 + (speed.min(1.0) * 170.0).round()
}

/// Fill color for something moving at `speed`: the speed hue at full
/// saturation and half lightness
pub fn speed_color(speed: f32, alpha: f32) -> Color {
    Color::hsla(speed_hue(speed) % 360.0, 1.0, 0.5, alpha)
}

/// Age fade for the ramp variant: `min(index, len/4) / (len/4)`
///
/// The oldest quarter of the trail ramps up from transparent; everything
/// newer is fully opaque. `index` counts from the oldest sample
pub fn ramp_alpha(index: usize, len: usize) -> f32 {
    let max = len as f32 / 4.0;
    if max <= 0.0 {
        return 1.0;
    }
    (index as f32).min(max) / max
}

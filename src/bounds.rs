//! The `MinMaxSlider` field attribute.
//!
//! Attach it to a `Vec2` or `IVec2` field of a reflected component to have the
//! inspector render that field as a dual-handle range slider:
//!
//! ```
//! use bevy::prelude::*;
//! use feathers_min_max_slider::MinMaxSlider;
//!
//! #[derive(Component, Reflect, Default)]
//! #[reflect(Component)]
//! struct Spawner {
//!     #[reflect(@MinMaxSlider::new(0.0, 10.0))]
//!     delay: Vec2,
//! }
//! ```

use bevy::prelude::*;

/// Bounds for a two-component range field.
///
/// `min <= max` is expected but not checked.
#[derive(Reflect, Clone, Copy, Debug, PartialEq)]
pub struct MinMaxSlider {
    /// Lower bound of the slider.
    pub min: f32,
    /// Upper bound of the slider.
    pub max: f32,
}

impl MinMaxSlider {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Hover text for the field label, e.g. `"0.00 to 10.00"`.
    pub fn tooltip(&self) -> String {
        format!("{:.2} to {:.2}", self.min, self.max)
    }

    /// Span covered by the slider track.
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Clamps a raw `(low, high)` pair into the bounds and orders it.
    ///
    /// `high` is clamped into `[min, max]` and kept. `low` is raised to at least `min`
    /// and, if it then lies above `high`, collapses onto `high`. An inverted pair is never
    /// fixed by raising `high`.
    pub fn clamp_and_order(&self, low: f32, high: f32) -> Vec2 {
        let low = self.min.max(low);
        let high = self.max.min(high).max(self.min);

        Vec2::new(if low > high { high } else { low }, high)
    }

    /// Maps a value onto the track, `0.0` at `min` and `1.0` at `max`.
    pub fn normalize(&self, value: f32) -> f32 {
        let span = self.span();
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

impl Default for MinMaxSlider {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

//! One pass of the min/max slider drawer.
//!
//! The drawer is written against two capabilities supplied by the host: a [`RangeGui`] that
//! places and runs the widgets, and a [`RangeProperty`] that reads and writes the edited
//! field. The Bevy inspector provides both; tests provide recording fakes.

use bevy::log::error;
use bevy::math::Rect;

use crate::bounds::MinMaxSlider;
use crate::error::MinMaxSliderError;
use crate::layout::{MinMaxLayout, SplitPadding};
use crate::property::RangeProperty;
use crate::range::{RangeValue, round_for_display};

/// Which of the two numeric fields a call refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldSlot {
    Low,
    High,
}

/// The immediate-mode widgets the drawer needs from its host.
pub trait RangeGui {
    /// Draws the field label and returns the area left for the control.
    fn prefix_label(&mut self, position: Rect, label: &str, tooltip: &str) -> Rect;

    /// A numeric entry field showing `value`. Returns the value after user input.
    fn float_field(&mut self, slot: FieldSlot, rect: Rect, value: f32) -> f32;

    /// A dual-handle slider over `[min, max]`.
    fn min_max_slider(&mut self, rect: Rect, low: &mut f32, high: &mut f32, min: f32, max: f32);

    /// Starts tracking whether any widget changed.
    fn begin_change_check(&mut self);

    /// Whether any widget changed since [`RangeGui::begin_change_check`].
    fn end_change_check(&mut self) -> bool;
}

/// Draws a `Vec2`/`IVec2` field as two numeric fields around a min/max slider.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinMaxSliderDrawer {
    pub padding: SplitPadding,
}

impl MinMaxSliderDrawer {
    pub fn new(padding: SplitPadding) -> Self {
        Self { padding }
    }

    /// Runs one pass for `property` inside `position`.
    ///
    /// Changes are written back only when the GUI reports one. A field that is neither a
    /// `Vec2` nor an `IVec2` is logged and left untouched, and nothing is drawn.
    pub fn on_gui(
        &self,
        gui: &mut impl RangeGui,
        position: Rect,
        property: &mut impl RangeProperty,
        label: &str,
        bounds: &MinMaxSlider,
    ) -> Result<MinMaxLayout, MinMaxSliderError> {
        let tooltip = bounds.tooltip();

        let Some(kind) = property.range_kind() else {
            let err = MinMaxSliderError::UnsupportedFieldType {
                path: property.path().to_string(),
                type_path: property.type_path().to_string(),
            };
            error!("{err}");
            return Err(err);
        };

        let control = gui.prefix_label(position, label, &tooltip);
        let layout = MinMaxLayout::split(control, self.padding);

        gui.begin_change_check();

        let current = property.get().as_vec2();
        let mut low = gui.float_field(FieldSlot::Low, layout.left, round_for_display(current.x));
        let mut high = gui.float_field(FieldSlot::High, layout.right, round_for_display(current.y));

        gui.min_max_slider(layout.slider, &mut low, &mut high, bounds.min, bounds.max);

        let clamped = bounds.clamp_and_order(low, high);

        if gui.end_change_check() {
            property.set(RangeValue::from_clamped(kind, clamped));
        }

        Ok(layout)
    }
}

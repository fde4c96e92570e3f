//! Inspector UI widgets.
//!
//! Provides the editable range widget for the inspector:
//! - MinMaxSlider: two numeric fields around a dual-handle slider
//!   - Drag a handle to move that end of the range
//!   - Click a field to type a value

pub mod min_max_slider;

pub use min_max_slider::{
    EditOutcome, MinMaxSliderPart, MinMaxSliderPlugin, MinMaxSliderRejected, MinMaxSliderState,
    MinMaxSliderSystems, MinMaxSliderWidget, RetainedRangeGui, SliderFrame, SliderPart,
    apply_edit_key, draw_min_max_sliders, dragged_value, spawn_min_max_slider,
    sync_min_max_slider_nodes,
};

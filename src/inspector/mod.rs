//! Inspector UI module.
//!
//! Provides a separate window listing every reflected component field marked with
//! `MinMaxSlider`, each drawn as a range slider, using bevy_ui and bevy_experimental_feathers.

pub mod config;
pub mod panels;
pub mod plugin;
pub mod state;
pub mod widgets;

pub use config::InspectorConfig;
pub use plugin::{InspectorSet, RangeInspectorPlugin};
pub use state::{InspectorCache, InspectorInternal, InspectorWindowState, RangeTarget};
pub use widgets::{MinMaxSliderPlugin, MinMaxSliderState, MinMaxSliderWidget, SliderFrame};

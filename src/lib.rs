//! A min/max range slider for the Bevy inspector.
//!
//! Mark a `Vec2` or `IVec2` field of a reflected component with
//! `#[reflect(@MinMaxSlider::new(min, max))]` and the inspector window edits it with two
//! numeric fields around a dual-handle slider. Built using bevy_feathers, powered by
//! bevy_reflect.

pub mod bounds;
pub mod drawer;
pub mod error;
pub mod inspector;
pub mod layout;
pub mod property;
pub mod range;
pub mod reflection_tools;

pub use bounds::MinMaxSlider;
pub use drawer::{FieldSlot, MinMaxSliderDrawer, RangeGui};
pub use error::MinMaxSliderError;
pub use layout::{MinMaxLayout, SplitPadding, split_rect};
pub use property::{MinMaxField, RangeProperty, ReflectedRangeProperty, discover_min_max_fields};
pub use range::{RangeKind, RangeValue};

// Re-export the main plugins for convenience
pub use inspector::{InspectorConfig, MinMaxSliderPlugin, RangeInspectorPlugin};

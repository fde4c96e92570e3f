//! Central UI state for the inspector.

use bevy::prelude::*;
use core::any::TypeId;

use crate::property::MinMaxField;

/// Marker component for inspector-internal entities that are never scanned for range fields.
/// Applied to the inspector window and its camera.
#[derive(Component)]
pub struct InspectorInternal;

/// A component instance with at least one `MinMaxSlider` field.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeTarget {
    pub entity: Entity,
    /// Display name for the entity.
    pub entity_name: String,
    pub component_type_id: TypeId,
    /// Short type name of the component.
    pub component_name: String,
    pub fields: Vec<MinMaxField>,
}

/// What the inspector currently shows.
#[derive(Resource, Default)]
pub struct InspectorCache {
    /// Components shown in the panel, in display order.
    pub targets: Vec<RangeTarget>,
    /// Whether the panel must be rebuilt from `targets`.
    pub rebuild: bool,
    /// Whether the next refresh must scan regardless of the interval.
    pub stale: bool,
    /// Elapsed seconds at the last scan.
    pub last_refresh: Option<f32>,
}

/// Tracks the inspector window.
#[derive(Resource, Default)]
pub struct InspectorWindowState {
    /// The inspector window, while it is open. Wheel input is only taken from this window.
    pub window_entity: Option<Entity>,
}

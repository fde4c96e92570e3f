//! The serialized-property side of the drawer: reading and writing a range field.

use bevy::reflect::{PartialReflect, TypeInfo};

use crate::bounds::MinMaxSlider;
use crate::range::{RangeKind, RangeValue};

/// Generic access to the field being edited.
pub trait RangeProperty {
    /// Human-readable path of the field, used in diagnostics.
    fn path(&self) -> &str;

    /// Declared type of the field.
    fn type_path(&self) -> &str;

    /// The range variant of the field, if it is one.
    fn range_kind(&self) -> Option<RangeKind>;

    /// Current value. Only called once `range_kind` returned `Some`.
    fn get(&self) -> RangeValue;

    fn set(&mut self, value: RangeValue);
}

/// A [`RangeProperty`] over a reflected field.
pub struct ReflectedRangeProperty<'a> {
    path: String,
    field: &'a mut dyn PartialReflect,
    written: bool,
}

impl<'a> ReflectedRangeProperty<'a> {
    pub fn new(path: impl Into<String>, field: &'a mut dyn PartialReflect) -> Self {
        Self {
            path: path.into(),
            field,
            written: false,
        }
    }

    /// Whether [`RangeProperty::set`] stored a value.
    pub fn written(&self) -> bool {
        self.written
    }
}

impl RangeProperty for ReflectedRangeProperty<'_> {
    fn path(&self) -> &str {
        &self.path
    }

    fn type_path(&self) -> &str {
        self.field.reflect_type_path()
    }

    fn range_kind(&self) -> Option<RangeKind> {
        RangeKind::of(&*self.field)
    }

    fn get(&self) -> RangeValue {
        RangeValue::read(&*self.field).unwrap_or(RangeValue::Float(Default::default()))
    }

    fn set(&mut self, value: RangeValue) {
        if RangeValue::read(&*self.field) == Some(value) {
            return;
        }
        self.written |= value.write(&mut *self.field);
    }
}

/// A struct field carrying the [`MinMaxSlider`] attribute.
#[derive(Clone, Debug, PartialEq)]
pub struct MinMaxField {
    pub name: &'static str,
    pub type_path: &'static str,
    /// `None` when the field is not a `Vec2` or `IVec2`.
    pub kind: Option<RangeKind>,
    pub bounds: MinMaxSlider,
}

/// Lists the named fields of `type_info` that carry the [`MinMaxSlider`] attribute.
///
/// Non-struct types have no such fields.
pub fn discover_min_max_fields(type_info: &TypeInfo) -> Vec<MinMaxField> {
    let Ok(struct_info) = type_info.as_struct() else {
        return Vec::new();
    };

    struct_info
        .iter()
        .filter_map(|field| {
            let bounds = *field.get_attribute::<MinMaxSlider>()?;
            let kind = if field.is::<bevy::math::Vec2>() {
                Some(RangeKind::Float)
            } else if field.is::<bevy::math::IVec2>() {
                Some(RangeKind::Int)
            } else {
                None
            };
            Some(MinMaxField {
                name: field.name(),
                type_path: field.type_path(),
                kind,
                bounds,
            })
        })
        .collect()
}

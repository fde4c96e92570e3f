//! Two-component range values edited by the slider.

use bevy::math::{IVec2, Vec2};
use bevy::reflect::PartialReflect;

/// Which numeric variant a range field is declared as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeKind {
    /// `Vec2`
    Float,
    /// `IVec2`
    Int,
}

impl RangeKind {
    /// Detects the range kind of a reflected value.
    pub fn of(reflected: &dyn PartialReflect) -> Option<Self> {
        if reflected.try_downcast_ref::<Vec2>().is_some() {
            Some(Self::Float)
        } else if reflected.try_downcast_ref::<IVec2>().is_some() {
            Some(Self::Int)
        } else {
            None
        }
    }
}

/// A `(low, high)` pair. `x` is the low end, `y` the high end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RangeValue {
    Float(Vec2),
    Int(IVec2),
}

impl RangeValue {
    /// Builds the stored value from a clamped float pair.
    ///
    /// Integer ranges round each component to the nearest whole number, ties to even.
    pub fn from_clamped(kind: RangeKind, pair: Vec2) -> Self {
        match kind {
            RangeKind::Float => Self::Float(pair),
            RangeKind::Int => Self::Int(round_to_ivec2(pair)),
        }
    }

    pub fn kind(&self) -> RangeKind {
        match self {
            Self::Float(_) => RangeKind::Float,
            Self::Int(_) => RangeKind::Int,
        }
    }

    /// The pair as floats, as the slider works on it.
    pub fn as_vec2(&self) -> Vec2 {
        match *self {
            Self::Float(v) => v,
            Self::Int(v) => v.as_vec2(),
        }
    }

    /// Reads a range value out of a reflected `Vec2` or `IVec2`.
    pub fn read(reflected: &dyn PartialReflect) -> Option<Self> {
        if let Some(v) = reflected.try_downcast_ref::<Vec2>() {
            return Some(Self::Float(*v));
        }
        if let Some(v) = reflected.try_downcast_ref::<IVec2>() {
            return Some(Self::Int(*v));
        }
        None
    }

    /// Writes into a reflected `Vec2` or `IVec2`, converting between variants if needed.
    ///
    /// Returns false if the target is neither.
    pub fn write(&self, reflected: &mut dyn PartialReflect) -> bool {
        if let Some(v) = reflected.try_downcast_mut::<Vec2>() {
            *v = self.as_vec2();
            return true;
        }
        if let Some(v) = reflected.try_downcast_mut::<IVec2>() {
            *v = match *self {
                Self::Int(i) => i,
                Self::Float(f) => round_to_ivec2(f),
            };
            return true;
        }
        false
    }
}

fn round_to_ivec2(pair: Vec2) -> IVec2 {
    IVec2::new(pair.x.round_ties_even() as i32, pair.y.round_ties_even() as i32)
}

/// Number of decimals shown in the numeric fields.
pub const DISPLAY_DECIMALS: usize = 2;

/// Formats a field value the way the numeric fields show it.
pub fn format_for_display(value: f32) -> String {
    format!("{:.prec$}", value, prec = DISPLAY_DECIMALS)
}

/// Rounds a value through its displayed text.
///
/// The fields are fed this reparsed value every pass, so edits settle on the hundredths.
pub fn round_for_display(value: f32) -> f32 {
    format_for_display(value).parse().unwrap_or(value)
}

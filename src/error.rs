//! Errors raised while drawing a min/max slider field.

use bevy::prelude::Entity;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MinMaxSliderError {
    /// The annotated field is neither a `Vec2` nor an `IVec2`.
    #[error("{path} is not compatible with the MinMaxSlider drawer (found {type_path})")]
    UnsupportedFieldType { path: String, type_path: String },
    #[error("type {0} is not registered in the AppTypeRegistry")]
    ComponentNotRegistered(String),
    #[error("type {0} is registered without ReflectComponent")]
    ComponentNotReflected(String),
    #[error("entity {0} does not exist or lacks the component")]
    EntityNotFound(Entity),
    #[error("no field at {0}")]
    FieldNotFound(String),
}

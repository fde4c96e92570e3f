//! Reflection helpers for reaching component fields by path.

use bevy::ecs::reflect::ReflectComponent;
use bevy::prelude::*;
use bevy::reflect::ReflectMut;
use core::any::TypeId;

use crate::error::MinMaxSliderError;

/// Describes how to locate a field within a component for write-back.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldPath {
    /// The entity containing the component.
    pub entity: Entity,
    /// The TypeId of the component.
    pub component_type_id: TypeId,
    /// The path segments to navigate to the field.
    pub path: Vec<FieldPathSegment>,
}

/// A segment in a field path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldPathSegment {
    /// Named struct field: e.g., "delay"
    Named(String),
    /// Indexed tuple/array field: e.g., 0, 1, 2
    Index(usize),
}

impl FieldPath {
    pub fn named(entity: Entity, component_type_id: TypeId, field: impl Into<String>) -> Self {
        Self {
            entity,
            component_type_id,
            path: vec![FieldPathSegment::Named(field.into())],
        }
    }
}

fn reflect_component_for(
    world: &World,
    type_id: TypeId,
) -> Result<ReflectComponent, MinMaxSliderError> {
    let Some(registry) = world.get_resource::<AppTypeRegistry>() else {
        return Err(MinMaxSliderError::ComponentNotRegistered(format!(
            "{type_id:?}"
        )));
    };
    let registry = registry.read();
    let registration = registry
        .get(type_id)
        .ok_or_else(|| MinMaxSliderError::ComponentNotRegistered(format!("{type_id:?}")))?;

    registration
        .data::<ReflectComponent>()
        .cloned()
        .ok_or_else(|| {
            MinMaxSliderError::ComponentNotReflected(
                registration.type_info().type_path().to_string(),
            )
        })
}

/// Returns the component of `entity` identified by `type_id` with change detection attached.
pub fn get_reflected_component_mut(
    world: &mut World,
    entity: Entity,
    type_id: TypeId,
) -> Result<Mut<'_, dyn Reflect>, MinMaxSliderError> {
    let reflect_component = reflect_component_for(world, type_id)?;
    let entity_mut = world
        .get_entity_mut(entity)
        .map_err(|_| MinMaxSliderError::EntityNotFound(entity))?;

    reflect_component
        .reflect_mut(entity_mut)
        .ok_or(MinMaxSliderError::EntityNotFound(entity))
}

/// Navigates a field path for writing.
pub fn field_at_path_mut<'a>(
    reflected: &'a mut dyn PartialReflect,
    path: &[FieldPathSegment],
) -> Option<&'a mut dyn PartialReflect> {
    let Some((segment, remaining)) = path.split_first() else {
        return Some(reflected);
    };

    let field = match (reflected.reflect_mut(), segment) {
        (ReflectMut::Struct(s), FieldPathSegment::Named(name)) => s.field_mut(name),
        (ReflectMut::TupleStruct(ts), FieldPathSegment::Index(idx)) => ts.field_mut(*idx),
        (ReflectMut::Tuple(t), FieldPathSegment::Index(idx)) => t.field_mut(*idx),
        _ => None,
    }?;

    field_at_path_mut(field, remaining)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Component, Reflect, Default)]
    #[reflect(Component)]
    struct Emitter {
        rate: Vec2,
        burst: (u32, IVec2),
    }

    fn world_with_emitter() -> (World, Entity) {
        let mut world = World::new();
        world.init_resource::<AppTypeRegistry>();
        world.resource::<AppTypeRegistry>().write().register::<Emitter>();
        let entity = world
            .spawn(Emitter {
                rate: Vec2::new(1.0, 2.0),
                burst: (3, IVec2::new(4, 5)),
            })
            .id();
        (world, entity)
    }

    #[test]
    fn reaches_nested_field() {
        let (mut world, entity) = world_with_emitter();
        let mut reflected =
            get_reflected_component_mut(&mut world, entity, TypeId::of::<Emitter>()).unwrap();

        let path = [
            FieldPathSegment::Named("burst".into()),
            FieldPathSegment::Index(1),
        ];
        let field = field_at_path_mut(reflected.as_partial_reflect_mut(), &path).unwrap();
        assert_eq!(field.try_downcast_ref::<IVec2>(), Some(&IVec2::new(4, 5)));
    }

    #[test]
    fn writes_named_field() {
        let (mut world, entity) = world_with_emitter();
        {
            let mut reflected =
                get_reflected_component_mut(&mut world, entity, TypeId::of::<Emitter>())
                    .unwrap();
            let path = [FieldPathSegment::Named("rate".into())];
            let field = field_at_path_mut(reflected.as_partial_reflect_mut(), &path).unwrap();
            *field.try_downcast_mut::<Vec2>().unwrap() = Vec2::new(7.0, 8.0);
        }
        assert_eq!(world.get::<Emitter>(entity).unwrap().rate, Vec2::new(7.0, 8.0));
    }

    #[test]
    fn missing_field_is_none() {
        let (mut world, entity) = world_with_emitter();
        let mut reflected =
            get_reflected_component_mut(&mut world, entity, TypeId::of::<Emitter>()).unwrap();
        let path = [FieldPathSegment::Named("nope".into())];
        assert!(field_at_path_mut(reflected.as_partial_reflect_mut(), &path).is_none());

        // Index segments do not apply to named structs
        let path = [FieldPathSegment::Index(0)];
        assert!(field_at_path_mut(reflected.as_partial_reflect_mut(), &path).is_none());
    }

    #[test]
    fn unregistered_component_is_an_error() {
        let (mut world, entity) = world_with_emitter();
        let result = get_reflected_component_mut(&mut world, entity, TypeId::of::<Transform>());
        assert!(matches!(
            result,
            Err(MinMaxSliderError::ComponentNotRegistered(_))
        ));
    }

    #[test]
    fn despawned_entity_is_an_error() {
        let (mut world, entity) = world_with_emitter();
        world.despawn(entity);
        let result = get_reflected_component_mut(&mut world, entity, TypeId::of::<Emitter>());
        assert!(matches!(result, Err(MinMaxSliderError::EntityNotFound(e)) if e == entity));
    }
}

//! Panel listing every component field that carries a `MinMaxSlider` attribute.
//! Contains one card per (entity, component), one slider row per field.

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::ecs::reflect::ReflectComponent;
use bevy::feathers::theme::ThemeBackgroundColor;
use bevy::feathers::tokens;
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::ui::Val::*;
use bevy::ui_widgets::{ControlOrientation, CoreScrollbarThumb, Scrollbar};
use core::any::TypeId;

use crate::inspector::config::InspectorConfig;
use crate::inspector::state::{InspectorCache, InspectorInternal, InspectorWindowState, RangeTarget};
use crate::inspector::widgets::{MinMaxSliderWidget, spawn_min_max_slider};
use crate::property::{MinMaxField, discover_min_max_fields};
use crate::reflection_tools::FieldPath;

/// Marker component for the panel container.
#[derive(Component)]
pub struct RangePanel;

/// Marker for the scrollable content area.
#[derive(Component)]
pub struct RangeContent;

/// Logical pixels scrolled per wheel line.
const WHEEL_LINE_HEIGHT: f32 = 20.0;

/// Marker for component cards.
#[derive(Component)]
pub struct RangeCard(pub Entity);

/// Registered components with at least one `MinMaxSlider` field.
fn registered_range_components(world: &World) -> Vec<(TypeId, String, Vec<MinMaxField>)> {
    let Some(registry) = world.get_resource::<AppTypeRegistry>() else {
        return Vec::new();
    };
    let registry = registry.read();

    registry
        .iter()
        .filter(|registration| registration.data::<ReflectComponent>().is_some())
        .filter_map(|registration| {
            let type_info = registration.type_info();
            let fields = discover_min_max_fields(type_info);
            (!fields.is_empty()).then(|| {
                (
                    registration.type_id(),
                    type_info.type_path_table().short_path().to_string(),
                    fields,
                )
            })
        })
        .collect()
}

/// Finds every entity carrying a component with `MinMaxSlider` fields.
///
/// UI nodes and inspector-internal entities are skipped.
pub fn scan_range_targets(world: &mut World) -> Vec<RangeTarget> {
    let components = registered_range_components(world);
    if components.is_empty() {
        return Vec::new();
    }

    let mut query = world.query::<EntityRef>();
    let mut targets: Vec<RangeTarget> = Vec::new();

    for entity_ref in query.iter(world) {
        if entity_ref.contains::<Node>() || entity_ref.contains::<InspectorInternal>() {
            continue;
        }

        for (type_id, component_name, fields) in &components {
            if !entity_ref.contains_type_id(*type_id) {
                continue;
            }
            targets.push(RangeTarget {
                entity: entity_ref.id(),
                entity_name: entity_ref
                    .get::<Name>()
                    .map(|n| n.as_str().to_string())
                    .unwrap_or_else(|| format!("Entity {:?}", entity_ref.id())),
                component_type_id: *type_id,
                component_name: component_name.clone(),
                fields: fields.clone(),
            });
        }
    }

    targets.sort_by(|a, b| {
        a.entity
            .cmp(&b.entity)
            .then_with(|| a.component_name.cmp(&b.component_name))
    });
    targets
}

/// Exclusive system that rescans for targets once per refresh interval.
/// Flags the panel for a rebuild only when the target list changed.
pub fn refresh_range_targets(world: &mut World) {
    let now = world.get_resource::<Time>().map(|time| time.elapsed_secs());
    let interval = world.resource::<InspectorConfig>().refresh_interval;

    let cache = world.resource::<InspectorCache>();
    let was_stale = cache.stale;
    let due = was_stale
        || match (cache.last_refresh, now) {
            (Some(last), Some(now)) => now - last >= interval,
            _ => true,
        };
    if !due {
        return;
    }

    let targets = scan_range_targets(world);

    let mut cache = world.resource_mut::<InspectorCache>();
    cache.stale = false;
    cache.last_refresh = now;
    if was_stale || cache.targets != targets {
        cache.targets = targets;
        cache.rebuild = true;
    }
}

/// Exclusive system that rebuilds the panel content from the cached targets.
pub fn sync_range_panel(world: &mut World) {
    if !world.resource::<InspectorCache>().rebuild {
        return;
    }

    // Find the content entity
    let mut query = world.query_filtered::<Entity, With<RangeContent>>();
    let Some(content_entity) = query.iter(world).next() else {
        return;
    };

    world.resource_mut::<InspectorCache>().rebuild = false;

    // Despawning a parent with ChildOf relationship automatically despawns descendants
    let children_to_despawn: Vec<Entity> = world
        .get::<Children>(content_entity)
        .map(|c| c.iter().collect())
        .unwrap_or_default();
    for child in children_to_despawn {
        if world.entities().contains(child) {
            world.entity_mut(child).despawn();
        }
    }

    let config = world.resource::<InspectorConfig>().clone();
    let targets = world.resource::<InspectorCache>().targets.clone();

    if targets.is_empty() {
        spawn_empty_state_exclusive(world, content_entity, &config);
        return;
    }

    world.entity_mut(content_entity).with_children(|p| {
        for target in targets {
            p.spawn((
                Node {
                    width: Percent(100.0),
                    padding: config.panel_padding,
                    margin: UiRect::bottom(config.item_gap),
                    display: Display::Flex,
                    flex_direction: FlexDirection::Column,
                    row_gap: config.item_gap,
                    border: UiRect::all(Px(1.0)),
                    ..default()
                },
                ThemeBackgroundColor(tokens::WINDOW_BG),
                BorderColor::all(config.border_color),
                RangeCard(target.entity),
            ))
            .with_children(|card| {
                card.spawn((
                    Text::new(format!("{} | {}", target.entity_name, target.component_name)),
                    TextFont {
                        font_size: config.body_font_size,
                        ..default()
                    },
                    TextColor(Color::srgba(0.9, 0.9, 0.9, 1.0)),
                    Node {
                        margin: UiRect::bottom(Px(4.0)),
                        ..default()
                    },
                ));

                for field in &target.fields {
                    let widget = MinMaxSliderWidget {
                        field_path: FieldPath::named(
                            target.entity,
                            target.component_type_id,
                            field.name,
                        ),
                        display_path: format!("{}.{}", target.component_name, field.name),
                        label: field.name.to_string(),
                        bounds: field.bounds,
                    };
                    spawn_min_max_slider(card, widget, &config);
                }
            });
        }
    });
}

fn spawn_empty_state_exclusive(world: &mut World, parent: Entity, config: &InspectorConfig) {
    let body_font_size = config.body_font_size;
    let muted_text_color = config.muted_text_color;

    world.entity_mut(parent).with_children(|p| {
        p.spawn((
            Text::new("No components with MinMaxSlider fields"),
            TextFont {
                font_size: body_font_size,
                ..default()
            },
            TextColor(muted_text_color),
            Node {
                padding: UiRect::all(Px(16.0)),
                ..default()
            },
        ));
    });
}

/// Spawns the panel structure: a scrollable content column with a scrollbar.
pub fn spawn_range_panel(parent: &mut ChildSpawnerCommands<'_>, config: &InspectorConfig) {
    let scrollbar_width = 8.0;

    parent
        .spawn((
            Node {
                flex_grow: 1.0,
                min_height: Px(0.0),
                margin: config.panel_padding,
                display: Display::Grid,
                grid_template_columns: vec![GridTrack::fr(1.0), GridTrack::px(scrollbar_width)],
                border: UiRect::all(Px(1.0)),
                ..default()
            },
            BorderColor::all(config.border_color),
            RangePanel,
        ))
        .with_children(|scroll_area| {
            // Scroll content
            let content_id = scroll_area
                .spawn((
                    Node {
                        display: Display::Flex,
                        flex_direction: FlexDirection::Column,
                        row_gap: config.item_gap,
                        padding: config.panel_padding,
                        overflow: Overflow::scroll_y(),
                        ..default()
                    },
                    ScrollPosition::default(),
                    RangeContent,
                ))
                .id();

            // Scrollbar
            scroll_area
                .spawn((
                    Scrollbar {
                        target: content_id,
                        orientation: ControlOrientation::Vertical,
                        min_thumb_length: 20.0,
                    },
                    Node {
                        width: Px(scrollbar_width),
                        height: Percent(100.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.15, 0.15, 0.15, 0.5)),
                ))
                .with_children(|sb| {
                    sb.spawn((
                        CoreScrollbarThumb,
                        Node {
                            width: Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(Color::srgba(0.5, 0.5, 0.5, 0.8)),
                    ));
                });
        });
}

/// Scrolls the panel content with wheel input received by the inspector window.
pub fn scroll_range_content(
    mut wheel: MessageReader<MouseWheel>,
    window_state: Res<InspectorWindowState>,
    mut q_content: Query<(&mut ScrollPosition, &ComputedNode), With<RangeContent>>,
) {
    for event in wheel.read() {
        if window_state.window_entity != Some(event.window) {
            continue;
        }
        let dy = match event.unit {
            MouseScrollUnit::Line => event.y * WHEEL_LINE_HEIGHT,
            MouseScrollUnit::Pixel => event.y,
        };
        for (mut scroll, node) in &mut q_content {
            let max = (node.content_size().y - node.size().y).max(0.0) * node.inverse_scale_factor();
            scroll.y = scrolled_offset(scroll.y, dy, max);
        }
    }
}

/// Wheel up moves the content down, never past either end.
fn scrolled_offset(current: f32, wheel_y: f32, max: f32) -> f32 {
    (current - wheel_y).clamp(0.0, max)
}

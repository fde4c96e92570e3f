//! Inspector window plugin and UI scaffold.

use bevy::camera::RenderTarget;
use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::feathers::FeathersPlugins;
use bevy::feathers::dark_theme::create_dark_theme;
use bevy::feathers::theme::{ThemeBackgroundColor, UiTheme};
use bevy::feathers::tokens;
use bevy::prelude::*;
use bevy::ui::Val::*;
use bevy::window::{WindowRef, WindowResolution};

use super::config::InspectorConfig;
use super::panels::{refresh_range_targets, scroll_range_content, spawn_range_panel, sync_range_panel};
use super::state::{InspectorCache, InspectorInternal, InspectorWindowState};
use super::widgets::{MinMaxSliderPlugin, MinMaxSliderSystems};

/// System sets for organizing inspector systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum InspectorSet {
    /// Rescan for range targets.
    RefreshCache,
    /// Rebuild and scroll the panel.
    SyncUI,
}

/// Plugin that opens the range inspector window.
pub struct RangeInspectorPlugin;

impl Plugin for RangeInspectorPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(FeathersPlugins)
            .add_plugins(MinMaxSliderPlugin)
            .insert_resource(UiTheme(create_dark_theme()))
            .init_resource::<InspectorCache>()
            .init_resource::<InspectorConfig>()
            .init_resource::<InspectorWindowState>()
            .configure_sets(
                Update,
                (
                    InspectorSet::RefreshCache,
                    InspectorSet::SyncUI,
                    MinMaxSliderSystems,
                )
                    .chain(),
            )
            .add_systems(Startup, setup_inspector)
            .add_systems(
                Update,
                (
                    refresh_range_targets.in_set(InspectorSet::RefreshCache),
                    (sync_range_panel, scroll_range_content)
                        .chain()
                        .in_set(InspectorSet::SyncUI),
                    handle_window_close,
                ),
            );
    }
}

/// Spawns the inspector window, its camera and the panel scaffold.
fn setup_inspector(
    mut commands: Commands,
    config: Res<InspectorConfig>,
    mut window_state: ResMut<InspectorWindowState>,
    mut cache: ResMut<InspectorCache>,
) {
    let (width, height) = config.window_resolution;
    let window_entity = commands
        .spawn((
            Window {
                title: config.window_title.clone(),
                resolution: WindowResolution::new(width, height),
                ..default()
            },
            InspectorInternal,
        ))
        .id();
    window_state.window_entity = Some(window_entity);

    let camera_entity = commands
        .spawn((
            Camera2d,
            Camera {
                target: RenderTarget::Window(WindowRef::Entity(window_entity)),
                ..default()
            },
            InspectorInternal,
        ))
        .id();

    commands
        .spawn((
            Node {
                width: Percent(100.0),
                height: Percent(100.0),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            ThemeBackgroundColor(tokens::WINDOW_BG),
            UiTargetCamera(camera_entity),
        ))
        .with_children(|root| {
            spawn_title_bar(root, &config);
            spawn_range_panel(root, &config);
        });

    cache.stale = true;
    info!("Range inspector opened: {:?}", window_entity);
}

fn spawn_title_bar(parent: &mut ChildSpawnerCommands<'_>, config: &InspectorConfig) {
    parent
        .spawn((
            Node {
                height: config.title_bar_height,
                align_items: AlignItems::Center,
                padding: config.panel_padding,
                border: UiRect::bottom(Px(1.0)),
                ..default()
            },
            BorderColor::all(config.border_color),
        ))
        .with_children(|bar| {
            bar.spawn((
                Text::new(config.window_title.clone()),
                TextFont {
                    font_size: config.title_font_size,
                    ..default()
                },
            ));
        });
}

/// Forgets the inspector window once it has been closed.
fn handle_window_close(
    mut window_state: ResMut<InspectorWindowState>,
    mut removed_windows: RemovedComponents<Window>,
) {
    for entity in removed_windows.read() {
        if window_state.window_entity == Some(entity) {
            window_state.window_entity = None;
            info!("Range inspector closed");
        }
    }
}

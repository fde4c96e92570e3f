//! Demonstrates the MinMaxSlider attribute in the range inspector window.
//!
//! Every reflected component field marked with `#[reflect(@MinMaxSlider::new(..))]`
//! shows up in a separate window as two numeric fields around a dual-handle slider.

use bevy::prelude::*;
use feathers_min_max_slider::{MinMaxSlider, RangeInspectorPlugin};

/// Spawns particles at a random interval and in random batch sizes.
#[derive(Component, Reflect)]
#[reflect(Component)]
struct ParticleSpawner {
    /// Seconds between bursts.
    #[reflect(@MinMaxSlider::new(0.0, 5.0))]
    interval: Vec2,
    /// Particles per burst.
    #[reflect(@MinMaxSlider::new(1.0, 50.0))]
    burst: IVec2,
    /// Not a range: the inspector reports it as unsupported.
    #[reflect(@MinMaxSlider::new(0.0, 1.0))]
    strength: f32,
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .register_type::<ParticleSpawner>()
        .add_plugins(RangeInspectorPlugin)
        .add_systems(Startup, setup)
        .add_systems(Update, log_changes)
        .run();
}

fn setup(mut commands: Commands) {
    commands.spawn(Camera2d);

    commands.spawn((
        ParticleSpawner {
            interval: Vec2::new(0.5, 2.0),
            burst: IVec2::new(5, 20),
            strength: 0.3,
        },
        Name::new("Sparks"),
    ));

    commands.spawn((
        Text::new("Edit the ranges in the Range Inspector window."),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
    ));
}

fn log_changes(spawners: Query<(&Name, &ParticleSpawner), Changed<ParticleSpawner>>) {
    for (name, spawner) in &spawners {
        info!(
            "{}: interval {:?}, burst {:?}",
            name, spawner.interval, spawner.burst
        );
    }
}

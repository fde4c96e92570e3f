//! Configuration constants for the inspector UI.

use bevy::prelude::*;
use bevy::ui::Val;

use crate::layout::SplitPadding;

/// Configuration for inspector UI layout and styling.
#[derive(Resource, Clone)]
pub struct InspectorConfig {
    // Window
    /// Title of the inspector window.
    pub window_title: String,
    /// Initial window size in logical pixels.
    pub window_resolution: (u32, u32),
    /// Seconds between scans for components with min/max fields.
    pub refresh_interval: f32,

    // Layout
    /// Height of the title bar.
    pub title_bar_height: Val,

    // Spacing
    /// Padding inside panels.
    pub panel_padding: UiRect,
    /// Gap between items in lists.
    pub item_gap: Val,

    // Min/max slider geometry
    /// Width reserved for the field label in front of the control.
    pub label_width: f32,
    /// Height of one slider row.
    pub row_height: f32,
    /// Width of a slider handle.
    pub handle_width: f32,
    /// Thickness of the slider track.
    pub track_height: f32,
    /// Numeric field width and spacing around the slider.
    pub split_padding: SplitPadding,

    // Typography
    /// Font size for titles.
    pub title_font_size: f32,
    /// Font size for body text.
    pub body_font_size: f32,
    /// Font size for small/secondary text.
    pub small_font_size: f32,

    // Colors (for non-themed elements)
    /// Border color.
    pub border_color: Color,
    /// Muted text color.
    pub muted_text_color: Color,
    /// Error text color.
    pub error_text_color: Color,
    /// Field label color.
    pub field_name_color: Color,
    /// Numeric field text color.
    pub field_text_color: Color,
    /// Numeric field background.
    pub field_background_color: Color,
    /// Slider track color.
    pub track_color: Color,
    /// Color of the selected span between the handles.
    pub fill_color: Color,
    /// Slider handle color.
    pub handle_color: Color,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            // Window
            window_title: "Range Inspector".to_string(),
            window_resolution: (640, 480),
            refresh_interval: 0.5,

            // Layout
            title_bar_height: Val::Px(40.0),

            // Spacing
            panel_padding: UiRect::all(Val::Px(8.0)),
            item_gap: Val::Px(4.0),

            // Min/max slider geometry
            label_width: 120.0,
            row_height: 18.0,
            handle_width: 8.0,
            track_height: 4.0,
            split_padding: SplitPadding::default(),

            // Typography
            title_font_size: 16.0,
            body_font_size: 13.0,
            small_font_size: 11.0,

            // Colors
            border_color: Color::srgba(0.3, 0.3, 0.3, 1.0),
            muted_text_color: Color::srgba(0.6, 0.6, 0.6, 1.0),
            error_text_color: Color::srgba(0.8, 0.3, 0.3, 1.0),
            field_name_color: Color::srgba(0.6, 0.8, 1.0, 1.0),
            field_text_color: Color::srgba(0.9, 0.9, 0.6, 1.0),
            field_background_color: Color::srgba(0.15, 0.15, 0.15, 1.0),
            track_color: Color::srgba(0.25, 0.25, 0.25, 1.0),
            fill_color: Color::srgba(0.35, 0.55, 0.85, 1.0),
            handle_color: Color::srgba(0.85, 0.85, 0.85, 1.0),
        }
    }
}

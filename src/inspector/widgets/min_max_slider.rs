//! Min/max slider widget - two numeric fields around a dual-handle slider.
//!
//! The widget is retained in the ECS but drawn immediate-mode style: every frame
//! [`draw_min_max_sliders`] runs [`MinMaxSliderDrawer::on_gui`] against the reflected field,
//! feeding it whatever the user did since the last frame, and stores the resulting
//! [`SliderFrame`]. [`sync_min_max_slider_nodes`] then places the child nodes from it.
//!
//! Interaction:
//! 1. Drag either handle to move that end of the range
//! 2. Click a numeric field to type a value, Enter to commit, Escape to cancel

use bevy::ecs::entity::Entity;
use bevy::ecs::hierarchy::ChildSpawner;
use bevy::ecs::observer::On;
use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input_focus::{FocusedInput, InputFocus};
use bevy::picking::Pickable;
use bevy::picking::events::{Click, Drag, DragEnd, DragStart, Pointer};
use bevy::prelude::*;
use bevy::ui::Val::*;

use crate::bounds::MinMaxSlider;
use crate::drawer::{FieldSlot, MinMaxSliderDrawer, RangeGui};
use crate::error::MinMaxSliderError;
use crate::inspector::config::InspectorConfig;
use crate::layout::MinMaxLayout;
use crate::property::ReflectedRangeProperty;
use crate::range::format_for_display;
use crate::reflection_tools::{FieldPath, field_at_path_mut, get_reflected_component_mut};

/// A min/max slider bound to one reflected `Vec2`/`IVec2` field.
#[derive(Component, Clone, Debug)]
#[require(MinMaxSliderState)]
pub struct MinMaxSliderWidget {
    /// The field path for write-back.
    pub field_path: FieldPath,
    /// `Component.field`, used in diagnostics.
    pub display_path: String,
    pub label: String,
    pub bounds: MinMaxSlider,
}

/// Marks a widget whose field turned out not to be a range. It is no longer drawn.
#[derive(Component)]
pub struct MinMaxSliderRejected;

/// The child nodes making up a widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderPart {
    Label,
    LowField,
    HighField,
    Track,
    Fill,
    LowHandle,
    HighHandle,
}

impl SliderPart {
    fn slot(self) -> Option<FieldSlot> {
        match self {
            Self::LowField | Self::LowHandle => Some(FieldSlot::Low),
            Self::HighField | Self::HighHandle => Some(FieldSlot::High),
            _ => None,
        }
    }

    fn is_handle(self) -> bool {
        matches!(self, Self::LowHandle | Self::HighHandle)
    }

    fn is_field(self) -> bool {
        matches!(self, Self::LowField | Self::HighField)
    }
}

/// A child node of a [`MinMaxSliderWidget`].
#[derive(Component, Clone, Copy, Debug)]
pub struct MinMaxSliderPart {
    /// The widget entity.
    pub owner: Entity,
    pub part: SliderPart,
}

/// What the last drawer pass produced, in widget-local logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SliderFrame {
    pub label: Rect,
    pub layout: MinMaxLayout,
    /// Values shown in the numeric fields.
    pub low: f32,
    pub high: f32,
    /// Handle positions along the track, `0.0..=1.0`.
    pub low_t: f32,
    pub high_t: f32,
}

impl SliderFrame {
    fn value(&self, slot: FieldSlot) -> f32 {
        match slot {
            FieldSlot::Low => self.low,
            FieldSlot::High => self.high,
        }
    }

    fn handle_x(&self, slot: FieldSlot) -> f32 {
        let t = match slot {
            FieldSlot::Low => self.low_t,
            FieldSlot::High => self.high_t,
        };
        self.layout.slider.min.x + t * self.layout.slider.width()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct HandleDrag {
    slot: FieldSlot,
    start_value: f32,
}

/// Interaction state between two drawer passes.
#[derive(Component, Default, Debug)]
pub struct MinMaxSliderState {
    /// A committed text edit, consumed by the next pass.
    pending_field: Option<(FieldSlot, f32)>,
    /// The latest handle position, consumed by the next pass.
    pending_handle: Option<(FieldSlot, f32)>,
    drag: Option<HandleDrag>,
    editing: Option<FieldSlot>,
    edit_buffer: String,
    frame: Option<SliderFrame>,
}

impl MinMaxSliderState {
    pub fn frame(&self) -> Option<&SliderFrame> {
        self.frame.as_ref()
    }

    pub fn editing(&self) -> Option<FieldSlot> {
        self.editing
    }

    fn field_text(&self, slot: FieldSlot, frame: &SliderFrame) -> String {
        if self.editing == Some(slot) {
            // Show edit buffer with cursor indicator
            format!("{}|", self.edit_buffer)
        } else {
            format_for_display(frame.value(slot))
        }
    }
}

/// [`RangeGui`] backed by a widget's [`MinMaxSliderState`].
///
/// Fields and handles return the pending user input, if any, and every call records its
/// rect and value into a [`SliderFrame`].
pub struct RetainedRangeGui<'s> {
    state: &'s mut MinMaxSliderState,
    label_width: f32,
    changed: bool,
    frame: SliderFrame,
}

impl<'s> RetainedRangeGui<'s> {
    pub fn new(state: &'s mut MinMaxSliderState, label_width: f32) -> Self {
        Self {
            state,
            label_width,
            changed: false,
            frame: SliderFrame::default(),
        }
    }

    pub fn into_frame(self) -> SliderFrame {
        self.frame
    }
}

impl RangeGui for RetainedRangeGui<'_> {
    fn prefix_label(&mut self, position: Rect, _label: &str, _tooltip: &str) -> Rect {
        let split = (position.min.x + self.label_width).min(position.max.x);
        self.frame.label = Rect::new(position.min.x, position.min.y, split, position.max.y);
        Rect::new(split, position.min.y, position.max.x, position.max.y)
    }

    fn float_field(&mut self, slot: FieldSlot, _rect: Rect, value: f32) -> f32 {
        match slot {
            FieldSlot::Low => self.frame.low = value,
            FieldSlot::High => self.frame.high = value,
        }

        match self.state.pending_field.take_if(|(s, _)| *s == slot) {
            Some((_, typed)) => {
                self.changed = true;
                typed
            }
            None => value,
        }
    }

    fn min_max_slider(&mut self, _rect: Rect, low: &mut f32, high: &mut f32, min: f32, max: f32) {
        *low = low.max(min).min(max);
        *high = high.max(min).min(max);

        if let Some((slot, value)) = self.state.pending_handle.take() {
            match slot {
                FieldSlot::Low => *low = value.max(min).min(*high),
                FieldSlot::High => *high = value.min(max).max(*low),
            }
            self.changed = true;
        }

        let bounds = MinMaxSlider::new(min, max);
        self.frame.low_t = bounds.normalize(*low);
        self.frame.high_t = bounds.normalize(*high);
    }

    fn begin_change_check(&mut self) {
        self.changed = false;
    }

    fn end_change_check(&mut self) -> bool {
        self.changed
    }
}

/// Value of a handle dragged `distance_x` pixels along a track `track_width` pixels wide.
pub fn dragged_value(bounds: &MinMaxSlider, start_value: f32, distance_x: f32, track_width: f32) -> f32 {
    if track_width <= 0.0 {
        return start_value;
    }
    start_value + distance_x * bounds.span() / track_width
}

/// Result of a key press in a field's edit mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EditOutcome {
    /// Still editing.
    Continue,
    /// Enter with a parsable buffer.
    Commit(f32),
    /// Escape, or Enter with an unparsable buffer.
    Cancel,
}

/// Applies one key press to the edit buffer.
pub fn apply_edit_key(buffer: &mut String, key: &Key) -> EditOutcome {
    match key {
        Key::Enter => match buffer.trim().parse::<f32>() {
            Ok(value) => EditOutcome::Commit(value),
            Err(_) => EditOutcome::Cancel,
        },
        Key::Escape => EditOutcome::Cancel,
        Key::Backspace => {
            buffer.pop();
            EditOutcome::Continue
        }
        Key::Character(c) => {
            // Only allow numeric characters, decimal point, and minus sign
            if c.chars().all(|ch| ch.is_ascii_digit() || ch == '.' || ch == '-') {
                buffer.push_str(c);
            }
            EditOutcome::Continue
        }
        _ => EditOutcome::Continue,
    }
}

// Observer: start dragging a handle from the value it currently shows
fn handle_on_drag_start(
    mut drag_start: On<Pointer<DragStart>>,
    q_part: Query<&MinMaxSliderPart>,
    mut q_state: Query<&mut MinMaxSliderState>,
) {
    let Ok(part) = q_part.get(drag_start.entity) else {
        return;
    };
    let Some(slot) = part.part.slot().filter(|_| part.part.is_handle()) else {
        return;
    };
    drag_start.propagate(false);

    if let Ok(mut state) = q_state.get_mut(part.owner)
        && let Some(frame) = state.frame
    {
        state.drag = Some(HandleDrag {
            slot,
            start_value: frame.value(slot),
        });
    }
}

// Observer: handle drag
fn handle_on_drag(
    mut drag: On<Pointer<Drag>>,
    q_part: Query<&MinMaxSliderPart>,
    mut q_widget: Query<(&MinMaxSliderWidget, &mut MinMaxSliderState)>,
) {
    let Ok(part) = q_part.get(drag.entity) else {
        return;
    };
    if !part.part.is_handle() {
        return;
    }
    drag.propagate(false);

    if let Ok((widget, mut state)) = q_widget.get_mut(part.owner)
        && let (Some(handle), Some(frame)) = (state.drag, state.frame)
    {
        let value = dragged_value(
            &widget.bounds,
            handle.start_value,
            drag.distance.x,
            frame.layout.slider.width(),
        );
        state.pending_handle = Some((handle.slot, value));
    }
}

// Observer: handle drag end
fn handle_on_drag_end(
    mut drag_end: On<Pointer<DragEnd>>,
    q_part: Query<&MinMaxSliderPart>,
    mut q_state: Query<&mut MinMaxSliderState>,
) {
    let Ok(part) = q_part.get(drag_end.entity) else {
        return;
    };
    if !part.part.is_handle() {
        return;
    }
    drag_end.propagate(false);

    if let Ok(mut state) = q_state.get_mut(part.owner) {
        state.drag = None;
    }
}

// Observer: click a numeric field to enter edit mode
fn field_on_click(
    mut click: On<Pointer<Click>>,
    q_part: Query<&MinMaxSliderPart>,
    mut q_state: Query<&mut MinMaxSliderState>,
    mut input_focus: ResMut<InputFocus>,
) {
    let Ok(part) = q_part.get(click.entity) else {
        return;
    };
    let Some(slot) = part.part.slot().filter(|_| part.part.is_field()) else {
        return;
    };
    click.propagate(false);

    if let Ok(mut state) = q_state.get_mut(part.owner)
        && state.editing.is_none()
        && let Some(frame) = state.frame
    {
        state.editing = Some(slot);
        state.edit_buffer = format_for_display(frame.value(slot));
        input_focus.set(click.entity);
    }
}

/// Observer: handle keyboard input during text edit mode
fn field_on_keyboard_input(
    trigger: On<FocusedInput<KeyboardInput>>,
    q_part: Query<&MinMaxSliderPart>,
    mut q_state: Query<&mut MinMaxSliderState>,
    mut input_focus: ResMut<InputFocus>,
) {
    // Only process key presses
    if trigger.input.state != ButtonState::Pressed {
        return;
    }

    let Ok(part) = q_part.get(trigger.focused_entity) else {
        return;
    };
    let Ok(mut state) = q_state.get_mut(part.owner) else {
        return;
    };
    let Some(slot) = state.editing else {
        return;
    };

    let outcome = apply_edit_key(&mut state.edit_buffer, &trigger.input.logical_key);
    match outcome {
        EditOutcome::Continue => {}
        EditOutcome::Commit(value) => {
            state.pending_field = Some((slot, value));
            exit_edit_mode(&mut state, &mut input_focus);
        }
        EditOutcome::Cancel => exit_edit_mode(&mut state, &mut input_focus),
    }
}

/// Helper: exit edit mode
fn exit_edit_mode(state: &mut MinMaxSliderState, input_focus: &mut InputFocus) {
    state.editing = None;
    state.edit_buffer.clear();
    input_focus.clear();
}

/// Exclusive system running one drawer pass per widget.
pub fn draw_min_max_sliders(world: &mut World) {
    let config = world.resource::<InspectorConfig>().clone();
    let drawer = MinMaxSliderDrawer::new(config.split_padding);

    let mut query = world.query_filtered::<(Entity, &MinMaxSliderWidget, Option<&ComputedNode>), Without<MinMaxSliderRejected>>();
    let widgets: Vec<(Entity, MinMaxSliderWidget, Vec2)> = query
        .iter(world)
        .map(|(entity, widget, node)| {
            let size = node
                .map(|n| n.size() * n.inverse_scale_factor())
                .unwrap_or_default();
            (entity, widget.clone(), size)
        })
        .collect();

    for (entity, widget, size) in widgets {
        // Take the state out to avoid borrow conflicts with the reflected component
        let Some(mut state) = world
            .get_mut::<MinMaxSliderState>(entity)
            .map(|mut s| std::mem::take(s.bypass_change_detection()))
        else {
            continue;
        };

        let position = Rect::from_corners(Vec2::ZERO, size);
        let result = draw_widget(world, &drawer, &widget, position, &mut state, config.label_width);

        let rejected = match result {
            Ok(frame) => {
                state.frame = Some(frame);
                false
            }
            // Already logged by the drawer
            Err(MinMaxSliderError::UnsupportedFieldType { .. }) => {
                state.frame = None;
                true
            }
            Err(err) => {
                warn!("Skipping min/max slider {}: {}", widget.display_path, err);
                state.frame = None;
                false
            }
        };

        if let Some(mut slot) = world.get_mut::<MinMaxSliderState>(entity) {
            *slot.bypass_change_detection() = state;
        }
        if rejected {
            world.entity_mut(entity).insert(MinMaxSliderRejected);
        }
    }
}

fn draw_widget(
    world: &mut World,
    drawer: &MinMaxSliderDrawer,
    widget: &MinMaxSliderWidget,
    position: Rect,
    state: &mut MinMaxSliderState,
    label_width: f32,
) -> Result<SliderFrame, MinMaxSliderError> {
    let path = &widget.field_path;
    let mut component = get_reflected_component_mut(world, path.entity, path.component_type_id)?;

    let (result, written, frame) = {
        let root = component.bypass_change_detection().as_partial_reflect_mut();
        let field = field_at_path_mut(root, &path.path)
            .ok_or_else(|| MinMaxSliderError::FieldNotFound(widget.display_path.clone()))?;

        let mut property = ReflectedRangeProperty::new(widget.display_path.clone(), field);
        let mut gui = RetainedRangeGui::new(state, label_width);
        let result = drawer.on_gui(&mut gui, position, &mut property, &widget.label, &widget.bounds);
        (result, property.written(), gui.into_frame())
    };

    // Only flag the component when the pass actually stored a new value
    if written {
        component.set_changed();
    }

    result.map(|layout| SliderFrame { layout, ..frame })
}

fn part_rect(part: SliderPart, frame: &SliderFrame, handle_width: f32) -> Rect {
    let slider = frame.layout.slider;
    match part {
        SliderPart::Label => frame.label,
        SliderPart::LowField => frame.layout.left,
        SliderPart::HighField => frame.layout.right,
        SliderPart::Track => slider,
        SliderPart::Fill => Rect::new(
            frame.handle_x(FieldSlot::Low),
            slider.min.y,
            frame.handle_x(FieldSlot::High),
            slider.max.y,
        ),
        SliderPart::LowHandle | SliderPart::HighHandle => {
            let slot = part.slot().unwrap_or(FieldSlot::Low);
            let x = frame.handle_x(slot) - handle_width / 2.0;
            Rect::new(x, slider.min.y, x + handle_width, slider.max.y)
        }
    }
}

/// Places every part node from its widget's last frame and refreshes the field text.
pub fn sync_min_max_slider_nodes(
    config: Res<InspectorConfig>,
    q_widget: Query<(&MinMaxSliderWidget, &MinMaxSliderState, Has<MinMaxSliderRejected>)>,
    mut q_part: Query<(
        &MinMaxSliderPart,
        &mut Node,
        Option<&mut Text>,
        Option<&mut TextColor>,
    )>,
) {
    for (part, mut node, mut text, color) in &mut q_part {
        let Ok((widget, state, rejected)) = q_widget.get(part.owner) else {
            continue;
        };

        if part.part == SliderPart::Label {
            if let Some(text) = text.as_mut() {
                let label = if rejected {
                    format!("{} (unsupported type)", widget.label)
                } else {
                    widget.label.clone()
                };
                if text.0 != label {
                    text.0 = label;
                }
            }
            if rejected && node.width != Auto {
                node.width = Auto;
            }
            if rejected && let Some(mut color) = color {
                color.set_if_neq(TextColor(config.error_text_color));
            }
        }

        let frame = match state.frame {
            Some(frame) if !rejected => frame,
            _ => {
                if part.part != SliderPart::Label && node.display != Display::None {
                    node.display = Display::None;
                }
                continue;
            }
        };

        let rect = part_rect(part.part, &frame, config.handle_width);
        let display = if rect.width() > 0.0 {
            Display::Flex
        } else {
            Display::None
        };
        if node.display != display {
            node.display = display;
        }
        if node.left != Px(rect.min.x) {
            node.left = Px(rect.min.x);
        }
        if node.width != Px(rect.width()) {
            node.width = Px(rect.width());
        }

        if let (Some(slot), Some(text)) = (part.part.slot().filter(|_| part.part.is_field()), text.as_mut()) {
            let value = state.field_text(slot, &frame);
            if text.0 != value {
                text.0 = value;
            }
        }
    }
}

/// Spawns a widget row under `parent` and returns the widget entity.
pub fn spawn_min_max_slider(
    parent: &mut ChildSpawner<'_>,
    widget: MinMaxSliderWidget,
    config: &InspectorConfig,
) -> Entity {
    let label = widget.label.clone();
    let row_height = config.row_height;
    let track_top = (row_height - config.track_height) / 2.0;
    let small_font_size = config.small_font_size;

    let mut root = parent.spawn((
        Node {
            width: Percent(100.0),
            height: Px(row_height),
            ..default()
        },
        widget,
    ));
    let owner = root.id();

    let absolute = |top: f32, height: Val| Node {
        position_type: PositionType::Absolute,
        top: Px(top),
        height,
        display: Display::None,
        ..default()
    };

    root.with_children(|row| {
        row.spawn((
            Text::new(label),
            TextFont {
                font_size: small_font_size,
                ..default()
            },
            TextColor(config.field_name_color),
            Node {
                position_type: PositionType::Absolute,
                top: Px(0.0),
                ..default()
            },
            MinMaxSliderPart {
                owner,
                part: SliderPart::Label,
            },
        ));

        for part in [SliderPart::LowField, SliderPart::HighField] {
            row.spawn((
                Text::new(""),
                TextFont {
                    font_size: small_font_size,
                    ..default()
                },
                TextColor(config.field_text_color),
                Node {
                    padding: UiRect::horizontal(Px(2.0)),
                    border: UiRect::all(Px(1.0)),
                    ..absolute(0.0, Percent(100.0))
                },
                BorderColor::all(config.border_color),
                BackgroundColor(config.field_background_color),
                Interaction::default(),
                MinMaxSliderPart { owner, part },
            ));
        }

        row.spawn((
            absolute(track_top, Px(config.track_height)),
            BackgroundColor(config.track_color),
            Pickable::IGNORE,
            MinMaxSliderPart {
                owner,
                part: SliderPart::Track,
            },
        ));

        row.spawn((
            absolute(track_top, Px(config.track_height)),
            BackgroundColor(config.fill_color),
            Pickable::IGNORE,
            MinMaxSliderPart {
                owner,
                part: SliderPart::Fill,
            },
        ));

        for part in [SliderPart::LowHandle, SliderPart::HighHandle] {
            row.spawn((
                absolute(1.0, Px(row_height - 2.0)),
                BackgroundColor(config.handle_color),
                Interaction::default(),
                MinMaxSliderPart { owner, part },
            ));
        }
    });

    owner
}

/// System set for the min/max slider pass.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MinMaxSliderSystems;

/// Plugin that adds the min/max slider observers and draw systems.
pub struct MinMaxSliderPlugin;

impl Plugin for MinMaxSliderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InspectorConfig>()
            // Handle dragging
            .add_observer(handle_on_drag_start)
            .add_observer(handle_on_drag)
            .add_observer(handle_on_drag_end)
            // Text entry
            .add_observer(field_on_click)
            .add_observer(field_on_keyboard_input)
            .add_systems(
                Update,
                (draw_min_max_sliders, sync_min_max_slider_nodes)
                    .chain()
                    .in_set(MinMaxSliderSystems),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::log::Level;
    use bevy::log::tracing::{self, Event, Subscriber};
    use bevy::log::tracing_subscriber::Registry;
    use bevy::log::tracing_subscriber::layer::{Context, Layer, SubscriberExt};
    use core::any::TypeId;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts error-level log events.
    struct ErrorCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for ErrorCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn count_errors(f: impl FnOnce()) -> usize {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = Registry::default().with(ErrorCounter(count.clone()));
        tracing::subscriber::with_default(subscriber, f);
        count.load(Ordering::SeqCst)
    }

    #[derive(Component, Reflect, Default)]
    #[reflect(Component)]
    struct Spawner {
        #[reflect(@MinMaxSlider::new(0.0, 10.0))]
        delay: Vec2,
        #[reflect(@MinMaxSlider::new(0.0, 10.0))]
        count: IVec2,
        #[reflect(@MinMaxSlider::new(0.0, 10.0))]
        weight: i32,
    }

    fn setup() -> (World, Entity) {
        let mut world = World::new();
        world.init_resource::<AppTypeRegistry>();
        world.init_resource::<InspectorConfig>();
        world.resource::<AppTypeRegistry>().write().register::<Spawner>();
        let target = world
            .spawn(Spawner {
                delay: Vec2::new(1.0, 7.25),
                count: IVec2::new(2, 4),
                weight: 3,
            })
            .id();
        (world, target)
    }

    fn spawn_widget(world: &mut World, target: Entity, field: &str) -> Entity {
        world
            .spawn(MinMaxSliderWidget {
                field_path: FieldPath::named(target, TypeId::of::<Spawner>(), field),
                display_path: format!("Spawner.{field}"),
                label: field.to_string(),
                bounds: MinMaxSlider::new(0.0, 10.0),
            })
            .id()
    }

    #[test]
    fn idle_pass_records_frame_without_writing() {
        let (mut world, target) = setup();
        let widget = spawn_widget(&mut world, target, "delay");

        draw_min_max_sliders(&mut world);

        let state = world.get::<MinMaxSliderState>(widget).unwrap();
        let frame = state.frame().unwrap();
        assert_eq!(frame.low, 1.0);
        assert_eq!(frame.high, 7.25);
        assert_eq!(frame.low_t, 0.1);
        assert_eq!(world.get::<Spawner>(target).unwrap().delay, Vec2::new(1.0, 7.25));
    }

    #[test]
    fn committed_field_edit_is_clamped_and_written() {
        let (mut world, target) = setup();
        let widget = spawn_widget(&mut world, target, "delay");
        world
            .get_mut::<MinMaxSliderState>(widget)
            .unwrap()
            .pending_field = Some((FieldSlot::Low, -3.4));

        draw_min_max_sliders(&mut world);

        assert_eq!(world.get::<Spawner>(target).unwrap().delay, Vec2::new(0.0, 7.25));
        let state = world.get::<MinMaxSliderState>(widget).unwrap();
        assert!(state.pending_field.is_none());
    }

    #[test]
    fn handle_drag_is_rounded_for_int_ranges() {
        let (mut world, target) = setup();
        let widget = spawn_widget(&mut world, target, "count");
        world
            .get_mut::<MinMaxSliderState>(widget)
            .unwrap()
            .pending_handle = Some((FieldSlot::High, 8.6));

        draw_min_max_sliders(&mut world);

        assert_eq!(world.get::<Spawner>(target).unwrap().count, IVec2::new(2, 9));
    }

    #[test]
    fn low_handle_cannot_pass_high_handle() {
        let (mut world, target) = setup();
        let widget = spawn_widget(&mut world, target, "delay");
        world
            .get_mut::<MinMaxSliderState>(widget)
            .unwrap()
            .pending_handle = Some((FieldSlot::Low, 9.5));

        draw_min_max_sliders(&mut world);

        assert_eq!(world.get::<Spawner>(target).unwrap().delay, Vec2::new(7.25, 7.25));
    }

    #[test]
    fn unsupported_field_is_rejected_once() {
        let (mut world, target) = setup();
        let widget = spawn_widget(&mut world, target, "weight");
        world
            .get_mut::<MinMaxSliderState>(widget)
            .unwrap()
            .pending_handle = Some((FieldSlot::Low, 5.0));

        let errors = count_errors(|| {
            draw_min_max_sliders(&mut world);
            // Rejected widgets are skipped from then on
            draw_min_max_sliders(&mut world);
            draw_min_max_sliders(&mut world);
        });

        assert_eq!(errors, 1);
        assert!(world.get::<MinMaxSliderRejected>(widget).is_some());
        assert!(world.get::<MinMaxSliderState>(widget).unwrap().frame().is_none());
        assert_eq!(world.get::<Spawner>(target).unwrap().weight, 3);
    }

    #[test]
    fn supported_fields_log_no_errors() {
        let (mut world, target) = setup();
        spawn_widget(&mut world, target, "delay");
        spawn_widget(&mut world, target, "count");

        let errors = count_errors(|| {
            draw_min_max_sliders(&mut world);
            draw_min_max_sliders(&mut world);
        });

        assert_eq!(errors, 0);
    }

    #[test]
    fn idle_pass_leaves_change_ticks_alone() {
        let (mut world, target) = setup();
        let widget = spawn_widget(&mut world, target, "delay");
        draw_min_max_sliders(&mut world);
        world.clear_trackers();

        draw_min_max_sliders(&mut world);

        let entity = world.entity(widget);
        assert!(!entity.get_ref::<MinMaxSliderState>().unwrap().is_changed());
        assert!(!world.entity(target).get_ref::<Spawner>().unwrap().is_changed());
        assert!(world.get::<MinMaxSliderState>(widget).unwrap().frame().is_some());
    }

    #[test]
    fn committed_edit_marks_the_component_changed() {
        let (mut world, target) = setup();
        let widget = spawn_widget(&mut world, target, "delay");
        draw_min_max_sliders(&mut world);
        world.clear_trackers();

        world
            .get_mut::<MinMaxSliderState>(widget)
            .unwrap()
            .bypass_change_detection()
            .pending_field = Some((FieldSlot::High, 9.0));
        draw_min_max_sliders(&mut world);

        assert!(world.entity(target).get_ref::<Spawner>().unwrap().is_changed());
        assert_eq!(world.get::<Spawner>(target).unwrap().delay, Vec2::new(1.0, 9.0));
    }

    #[test]
    fn missing_target_keeps_widget_alive() {
        let (mut world, target) = setup();
        let widget = spawn_widget(&mut world, target, "delay");
        world.despawn(target);

        draw_min_max_sliders(&mut world);

        assert!(world.get::<MinMaxSliderRejected>(widget).is_none());
        assert!(world.get::<MinMaxSliderState>(widget).unwrap().frame().is_none());
    }

    #[test]
    fn drag_distance_scales_with_track_width() {
        let bounds = MinMaxSlider::new(0.0, 10.0);
        assert_eq!(dragged_value(&bounds, 2.0, 50.0, 200.0), 4.5);
        assert_eq!(dragged_value(&bounds, 2.0, -20.0, 200.0), 1.0);
        assert_eq!(dragged_value(&bounds, 2.0, 50.0, 0.0), 2.0);
    }

    #[test]
    fn edit_keys_build_and_commit_a_value() {
        let mut buffer = String::from("1.2");
        assert_eq!(
            apply_edit_key(&mut buffer, &Key::Character("5".into())),
            EditOutcome::Continue
        );
        assert_eq!(
            apply_edit_key(&mut buffer, &Key::Character("x".into())),
            EditOutcome::Continue
        );
        assert_eq!(buffer, "1.25");
        assert_eq!(apply_edit_key(&mut buffer, &Key::Backspace), EditOutcome::Continue);
        assert_eq!(apply_edit_key(&mut buffer, &Key::Enter), EditOutcome::Commit(1.2));
    }

    #[test]
    fn escape_and_garbage_cancel() {
        let mut buffer = String::from("3");
        assert_eq!(apply_edit_key(&mut buffer, &Key::Escape), EditOutcome::Cancel);

        let mut buffer = String::from("-.");
        assert_eq!(apply_edit_key(&mut buffer, &Key::Enter), EditOutcome::Cancel);
    }

    #[test]
    fn parts_follow_the_frame() {
        let frame = SliderFrame {
            label: Rect::new(0.0, 0.0, 100.0, 18.0),
            layout: MinMaxLayout::split(Rect::new(100.0, 0.0, 400.0, 18.0), Default::default()),
            low: 2.5,
            high: 5.0,
            low_t: 0.25,
            high_t: 0.5,
        };

        // slider = [140, 360]
        let fill = part_rect(SliderPart::Fill, &frame, 8.0);
        assert_eq!(fill.min.x, 195.0);
        assert_eq!(fill.max.x, 250.0);

        let handle = part_rect(SliderPart::HighHandle, &frame, 8.0);
        assert_eq!(handle.min.x, 246.0);
        assert_eq!(handle.width(), 8.0);

        assert_eq!(part_rect(SliderPart::LowField, &frame, 8.0), frame.layout.left);
    }
}

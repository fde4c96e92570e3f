//! Splits a control rectangle into the left field, the slider and the right field.

use bevy::math::{Rect, Vec2};

/// Geometry constants for the three-way split.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitPadding {
    /// Target width of each numeric field.
    pub field_width: f32,
    /// Gap between a numeric field and the slider.
    pub space: f32,
}

impl Default for SplitPadding {
    fn default() -> Self {
        Self {
            field_width: 40.0,
            space: 5.0,
        }
    }
}

/// Splits `rect` into `n` equal-width rectangles, left to right.
///
/// Each piece keeps the source height and y-offset.
pub fn split_rect(rect: Rect, n: usize) -> Vec<Rect> {
    if n == 0 {
        return Vec::new();
    }

    let width = rect.width() / n as f32;
    (0..n)
        .map(|i| {
            let min = Vec2::new(rect.min.x + i as f32 * width, rect.min.y);
            Rect::from_corners(min, Vec2::new(min.x + width, rect.max.y))
        })
        .collect()
}

/// The three regions of a min/max slider control.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MinMaxLayout {
    pub left: Rect,
    pub slider: Rect,
    pub right: Rect,
}

impl MinMaxLayout {
    /// Splits `control` in thirds, then narrows both fields to about
    /// `padding.field_width` and widens the slider by what they gave up.
    ///
    /// The padding is held at zero for controls narrower than three field widths.
    pub fn split(control: Rect, padding: SplitPadding) -> Self {
        let thirds = split_rect(control, 3);
        let (mut left, mut slider, mut right) = (thirds[0], thirds[1], thirds[2]);

        let pad = (left.width().floor() - padding.field_width).max(0.0);
        let space = padding.space;

        let left_width = left.width() - (pad + space);
        set_width(&mut left, left_width);
        let right_width = right.width() - (pad + space);
        set_width(&mut right, right_width);

        shift_x(&mut slider, -pad);
        let slider_width = slider.width() + pad * 2.0;
        set_width(&mut slider, slider_width);

        shift_x(&mut right, pad + space);

        Self {
            left,
            slider,
            right,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slider.width() <= 0.0
    }
}

fn set_width(rect: &mut Rect, width: f32) {
    rect.max.x = rect.min.x + width.max(0.0);
}

fn shift_x(rect: &mut Rect, dx: f32) {
    rect.min.x += dx;
    rect.max.x += dx;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control(width: f32) -> Rect {
        Rect::new(10.0, 4.0, 10.0 + width, 22.0)
    }

    #[test]
    fn split_is_contiguous() {
        let parts = split_rect(control(300.0), 3);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].min.x, 10.0);
        assert_eq!(parts[0].max.x, parts[1].min.x);
        assert_eq!(parts[1].max.x, parts[2].min.x);
        assert_eq!(parts[2].max.x, 310.0);
        for part in &parts {
            assert_eq!(part.min.y, 4.0);
            assert_eq!(part.height(), 18.0);
        }
    }

    #[test]
    fn split_zero_is_empty() {
        assert!(split_rect(control(300.0), 0).is_empty());
    }

    #[test]
    fn fields_shrink_to_target_width() {
        // 300 / 3 = 100, padding = 60
        let layout = MinMaxLayout::split(control(300.0), SplitPadding::default());

        assert_eq!(layout.left.min.x, 10.0);
        assert_eq!(layout.left.width(), 35.0);

        assert_eq!(layout.slider.min.x, 50.0);
        assert_eq!(layout.slider.width(), 220.0);

        assert_eq!(layout.right.min.x, 275.0);
        assert_eq!(layout.right.width(), 35.0);
        assert_eq!(layout.right.max.x, 310.0);
    }

    #[test]
    fn fractional_third_uses_floored_padding() {
        // 200 / 3 = 66.67, padding = 26
        let layout = MinMaxLayout::split(Rect::new(0.0, 0.0, 200.0, 18.0), SplitPadding::default());
        let third = 200.0 / 3.0;

        assert!((layout.left.width() - (third - 31.0)).abs() < 1e-4);
        assert!((layout.slider.min.x - (third - 26.0)).abs() < 1e-4);
        assert!((layout.slider.width() - (third + 52.0)).abs() < 1e-4);
        assert!((layout.right.min.x - (third * 2.0 + 31.0)).abs() < 1e-4);
    }

    #[test]
    fn narrow_control_keeps_equal_thirds() {
        let layout = MinMaxLayout::split(Rect::new(0.0, 0.0, 90.0, 18.0), SplitPadding::default());

        assert_eq!(layout.left.width(), 25.0);
        assert_eq!(layout.slider.min.x, 30.0);
        assert_eq!(layout.slider.width(), 30.0);
        assert_eq!(layout.right.min.x, 65.0);
        assert_eq!(layout.right.width(), 25.0);
    }

    #[test]
    fn zero_width_control_is_empty() {
        let layout = MinMaxLayout::split(Rect::new(0.0, 0.0, 0.0, 18.0), SplitPadding::default());
        assert!(layout.is_empty());
    }
}

//! Drawing surface of an hour slot.
//!
//! The surface is never a data store: it is recomputed from the slot's
//! [`TaskBlock`](crate::TaskBlock) every time it is asked for.

use crate::color::Rgb;
use crate::task::TaskBlock;

/// Height of one hour row in surface units.
pub const ROW_HEIGHT: i64 = 50;
/// Width of a task rectangle in surface units.
pub const SURFACE_WIDTH: i64 = 200;

/// A primitive drawn onto a slot surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// Filled rectangle from `(x0, y0)` to `(x1, y1)`.
    Rect {
        x0: i64,
        y0: i64,
        x1: i64,
        y1: i64,
        fill: Rgb,
    },
    /// Text centered on `(x, y)`.
    Text { x: i64, y: i64, text: String },
}

/// The shapes a task occupies: one rectangle, height proportional to the
/// duration, with the label centered inside. Heights saturate at the `i64`
/// range.
pub(crate) fn draw_task(block: &TaskBlock) -> Vec<Shape> {
    let height = ROW_HEIGHT.saturating_mul(block.duration_hours);
    vec![
        Shape::Rect {
            x0: 0,
            y0: 0,
            x1: SURFACE_WIDTH,
            y1: height,
            fill: block.color,
        },
        Shape::Text {
            x: SURFACE_WIDTH / 2,
            y: height / 2,
            text: block.label.clone(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_scales_with_duration() {
        let shapes = draw_task(&TaskBlock::new("Review", 3, Rgb::BLACK));
        assert_eq!(
            shapes,
            vec![
                Shape::Rect {
                    x0: 0,
                    y0: 0,
                    x1: 200,
                    y1: 150,
                    fill: Rgb::BLACK
                },
                Shape::Text {
                    x: 100,
                    y: 75,
                    text: "Review".to_string()
                },
            ]
        );
    }

    #[test]
    fn extreme_durations_saturate() {
        let shapes = draw_task(&TaskBlock::new("Forever", i64::MAX, Rgb::WHITE));
        assert!(matches!(shapes[0], Shape::Rect { y1: i64::MAX, .. }));
        assert!(matches!(shapes[1], Shape::Text { y, .. } if y == i64::MAX / 2));

        let shapes = draw_task(&TaskBlock::new("Never", i64::MIN, Rgb::WHITE));
        assert!(matches!(shapes[0], Shape::Rect { y1: i64::MIN, .. }));
        assert!(matches!(shapes[1], Shape::Text { y, .. } if y == i64::MIN / 2));
    }
}

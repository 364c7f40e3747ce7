use super::{RectangleShape, ShapeState, VertexShape, arc_fraction};
use crate::canvas::Canvas;
use crate::defaults::{self, keys};
use crate::types::{Direction, Rectangle, clamp};

/// Rectangle with two vertical guide lines inset from the sides.
///
/// `size` is a fraction of the width, or an absolute inset with `fixedSize`.
#[derive(Debug, Clone)]
pub struct ProcessShape<'a> {
    base: RectangleShape<'a>,
}

impl<'a> ProcessShape<'a> {
    pub const DEFAULT_SIZE: f64 = defaults::PROCESS_SIZE;
    pub const DEFAULT_FIXED_SIZE: bool = defaults::PROCESS_FIXED_SIZE;

    pub fn new(state: ShapeState<'a>) -> Self {
        Self {
            base: RectangleShape::new(state),
        }
    }

    /// Distance from each side to its guide line, a whole number in `[0, w]`.
    pub fn inset(&self, w: f64, h: f64) -> f64 {
        self.scaled_inset(w, h, 1.0)
    }

    /// `fixedSize` insets are absolute, so they follow the display scale.
    fn scaled_inset(&self, w: f64, h: f64, scale: f64) -> f64 {
        let state = self.state();
        let style = state.style;

        let mut inset = if style.flag(keys::FIXED_SIZE, Self::DEFAULT_FIXED_SIZE) {
            let size = style.clamped(keys::SIZE, Self::DEFAULT_SIZE, 0.0, f64::MAX);
            clamp(size * scale, 0.0, w)
        } else {
            w * style.clamped(keys::SIZE, Self::DEFAULT_SIZE, 0.0, 1.0)
        };

        if state.is_rounded {
            let f = arc_fraction(style);
            inset = inset.max((w * f).min(h * f));
        }

        clamp(inset.round(), 0.0, w.floor().max(0.0))
    }
}

impl VertexShape for ProcessShape<'_> {
    fn state(&self) -> &ShapeState<'_> {
        self.base.state()
    }

    fn paint_background(&self, c: &mut dyn Canvas, x: f64, y: f64, w: f64, h: f64) {
        self.base.paint_background(c, x, y, w, h);
    }

    fn paint_foreground(&self, c: &mut dyn Canvas, x: f64, y: f64, w: f64, h: f64) {
        let inset = self.inset(w, h);

        c.begin();
        c.move_to(x + inset, y);
        c.line_to(x + inset, y + h);
        c.move_to(x + w - inset, y);
        c.line_to(x + w - inset, y + h);
        c.end();
        c.stroke();

        self.base.paint_foreground(c, x, y, w, h);
    }

    fn label_bounds(&self, rect: &Rectangle) -> Rectangle {
        let state = self.state();
        let horizontal = state.style.flag(keys::HORIZONTAL, true);
        if horizontal != Direction::is_horizontal(state.direction) {
            return *rect;
        }

        let inset = self.scaled_inset(rect.width, rect.height, state.scale);
        Rectangle::new(
            rect.x + inset,
            rect.y,
            (rect.width - 2.0 * inset).max(0.0),
            rect.height,
        )
    }
}

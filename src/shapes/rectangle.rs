use super::{ShapeState, VertexShape, arc_size};
use crate::canvas::{Canvas, Gradient};
use crate::types::{Direction, Rectangle};

/// Plain or rounded rectangle; the default shape.
#[derive(Debug, Clone)]
pub struct RectangleShape<'a> {
    state: ShapeState<'a>,
}

impl<'a> RectangleShape<'a> {
    pub fn new(state: ShapeState<'a>) -> Self {
        Self { state }
    }

    /// Glossy highlight over the top of the shape.
    fn paint_glass_effect(&self, c: &mut dyn Canvas, x: f64, y: f64, w: f64, h: f64, arc: f64) {
        let sw = (self.state.stroke_width / 2.0).ceil();
        let size = 0.4;

        c.set_gradient(&Gradient {
            color1: "#ffffff".to_string(),
            color2: "#ffffff".to_string(),
            area: Rectangle::new(x, y, w, h * 0.6),
            direction: Direction::South,
            alpha1: 0.9,
            alpha2: 0.1,
        });
        c.begin();
        let arc = arc + 2.0 * sw;

        if self.state.is_rounded {
            c.move_to(x - sw + arc, y - sw);
            c.quad_to(x - sw, y - sw, x - sw, y - sw + arc);
            c.line_to(x - sw, y + h * size);
            c.quad_to(x + w * 0.5, y + h * 0.7, x + w + sw, y + h * size);
            c.line_to(x + w + sw, y - sw + arc);
            c.quad_to(x + w + sw, y - sw, x + w + sw - arc, y - sw);
        } else {
            c.move_to(x - sw, y - sw);
            c.line_to(x - sw, y + h * size);
            c.quad_to(x + w * 0.5, y + h * 0.7, x + w + sw, y + h * size);
            c.line_to(x + w + sw, y - sw);
        }

        c.close();
        c.fill();
    }
}

impl VertexShape for RectangleShape<'_> {
    fn state(&self) -> &ShapeState<'_> {
        &self.state
    }

    fn paint_background(&self, c: &mut dyn Canvas, x: f64, y: f64, w: f64, h: f64) {
        if self.state.is_rounded {
            let r = arc_size(self.state.style, w, h);
            c.round_rect(x, y, w, h, r, r);
        } else {
            c.rect(x, y, w, h);
        }
        c.fill_and_stroke();
    }

    fn paint_foreground(&self, c: &mut dyn Canvas, x: f64, y: f64, w: f64, h: f64) {
        if self.state.glass && !self.state.outline && self.state.has_fill {
            let sw = self.state.stroke_width;
            let arc = arc_size(self.state.style, w + sw, h + sw);
            self.paint_glass_effect(c, x, y, w, h, arc);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{CanvasOp, RecordingCanvas};
    use crate::style::Style;

    #[test]
    fn plain_rectangle() {
        let style = Style::new();
        let shape = RectangleShape::new(ShapeState::new(&style));
        let mut c = RecordingCanvas::new();
        shape.paint_vertex_shape(&mut c, 1.0, 2.0, 30.0, 20.0);
        assert_eq!(c.log(), "rect (1, 2, 30, 20)\nfill-stroke\nshadow false\n");
    }

    #[test]
    fn rounded_rectangle_uses_arc_size() {
        let style = Style::new().with("rounded", 1.0);
        let shape = RectangleShape::new(ShapeState::new(&style));
        let mut c = RecordingCanvas::new();
        shape.paint_background(&mut c, 0.0, 0.0, 100.0, 40.0);
        assert_eq!(
            c.ops()[0],
            CanvasOp::RoundRect(Rectangle::new(0.0, 0.0, 100.0, 40.0), glam::dvec2(6.0, 6.0))
        );
    }

    #[test]
    fn glass_needs_fill_and_no_outline() {
        let style = Style::new().with("glass", 1.0).with("fillColor", "#dae8fc");
        let mut c = RecordingCanvas::new();
        RectangleShape::new(ShapeState::new(&style)).paint_foreground(&mut c, 0.0, 0.0, 50.0, 50.0);
        assert!(matches!(c.ops()[0], CanvasOp::Gradient(_)));
        assert_eq!(c.paths().len(), 1);

        let mut c = RecordingCanvas::new();
        RectangleShape::new(ShapeState::new(&style).with_outline(true))
            .paint_foreground(&mut c, 0.0, 0.0, 50.0, 50.0);
        assert!(c.ops().is_empty());

        let unfilled = Style::new().with("glass", 1.0);
        let mut c = RecordingCanvas::new();
        RectangleShape::new(ShapeState::new(&unfilled)).paint_foreground(&mut c, 0.0, 0.0, 50.0, 50.0);
        assert!(c.ops().is_empty());
    }
}

use super::{ShapeState, VertexShape};
use crate::canvas::Canvas;
use crate::defaults::{self, keys};
use crate::types::clamp;

/// Upright cylinder with a visible top cap.
#[derive(Debug, Clone)]
pub struct CylinderShape<'a> {
    state: ShapeState<'a>,
}

impl<'a> CylinderShape<'a> {
    pub const MAX_HEIGHT: f64 = defaults::CYLINDER_MAX_HEIGHT;

    pub fn new(state: ShapeState<'a>) -> Self {
        Self { state }
    }

    /// Height of the elliptical cap for a body of height `h`.
    pub fn cylinder_size(&self, h: f64) -> f64 {
        clamp((h / 5.0).round().min(Self::MAX_HEIGHT), 0.0, h / 2.0)
    }

    /// Body outline (`foreground == false`) or front rim of the cap.
    fn redraw_path(&self, c: &mut dyn Canvas, w: f64, h: f64, foreground: bool) {
        let dy = self.cylinder_size(h);
        let has_fill = self.state.has_fill;

        // Without a fill the rim is part of the background stroke.
        if foreground == has_fill {
            c.move_to(0.0, dy);
            c.curve_to(0.0, 2.0 * dy, w, 2.0 * dy, w, dy);

            if !foreground {
                c.stroke();
                c.begin();
            }
        }

        if !foreground {
            c.move_to(0.0, dy);
            c.curve_to(0.0, -dy / 3.0, w, -dy / 3.0, w, dy);
            c.line_to(w, h - dy);
            c.curve_to(w, h + dy / 3.0, 0.0, h + dy / 3.0, 0.0, h - dy);
            c.close();
        }
    }
}

impl VertexShape for CylinderShape<'_> {
    fn state(&self) -> &ShapeState<'_> {
        &self.state
    }

    fn paint_vertex_shape(&self, c: &mut dyn Canvas, x: f64, y: f64, w: f64, h: f64) {
        c.translate(x, y);
        c.begin();
        self.redraw_path(c, w, h, false);
        c.fill_and_stroke();

        if !self.state.outline || !self.state.style.flag(keys::BACKGROUND_OUTLINE, false) {
            c.set_shadow(false);
            c.begin();
            self.redraw_path(c, w, h, true);
            c.stroke();
        }
    }
}

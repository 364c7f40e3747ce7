use super::{CylinderShape, ShapeState, VertexShape};
use crate::canvas::Canvas;
use crate::defaults::{self, keys};
use crate::types::{Rectangle, clamp};

/// Box with a folded top-left corner and two optional shaded faces.
///
/// Geometry comes from the style keys `size` (fold depth, default 20),
/// `darkOpacity` (top face) and `darkOpacity2` (left face). Opacities lie in
/// `[-1, 1]`: negative values lighten with white, positive darken with black.
#[derive(Debug, Clone)]
pub struct CubeShape<'a> {
    base: CylinderShape<'a>,
}

impl<'a> CubeShape<'a> {
    pub const DEFAULT_SIZE: f64 = defaults::CUBE_SIZE;
    pub const DEFAULT_DARK_OPACITY: f64 = defaults::CUBE_DARK_OPACITY;
    pub const DEFAULT_DARK_OPACITY2: f64 = defaults::CUBE_DARK_OPACITY2;

    pub fn new(state: ShapeState<'a>) -> Self {
        Self {
            base: CylinderShape::new(state),
        }
    }

    /// Fold depth for a `w` by `h` box, within `[0, min(w, h)]`.
    pub fn fold_size(&self, w: f64, h: f64) -> f64 {
        self.state()
            .style
            .clamped(keys::SIZE, Self::DEFAULT_SIZE, 0.0, w.min(h))
    }

    /// Shading of the top face, within `[-1, 1]`.
    pub fn dark_opacity(&self) -> f64 {
        self.state()
            .style
            .clamped(keys::DARK_OPACITY, Self::DEFAULT_DARK_OPACITY, -1.0, 1.0)
    }

    /// Shading of the left face, within `[-1, 1]`.
    pub fn dark_opacity2(&self) -> f64 {
        self.state()
            .style
            .clamped(keys::DARK_OPACITY2, Self::DEFAULT_DARK_OPACITY2, -1.0, 1.0)
    }
}

fn shade_color(opacity: f64) -> &'static str {
    if opacity < 0.0 { "#FFFFFF" } else { "#000000" }
}

impl VertexShape for CubeShape<'_> {
    fn state(&self) -> &ShapeState<'_> {
        self.base.state()
    }

    fn paint_vertex_shape(&self, c: &mut dyn Canvas, x: f64, y: f64, w: f64, h: f64) {
        let s = self.fold_size(w, h);
        let op = self.dark_opacity();
        let op2 = self.dark_opacity2();
        c.translate(x, y);

        c.begin();
        c.move_to(0.0, 0.0);
        c.line_to(w - s, 0.0);
        c.line_to(w, s);
        c.line_to(w, h);
        c.line_to(s, h);
        c.line_to(0.0, h - s);
        c.line_to(0.0, 0.0);
        c.close();
        c.end();
        c.fill_and_stroke();

        if self.state().outline {
            return;
        }
        c.set_shadow(false);

        if op != 0.0 {
            c.set_fill_alpha(op.abs());
            c.set_fill_color(Some(shade_color(op)));
            c.begin();
            c.move_to(0.0, 0.0);
            c.line_to(w - s, 0.0);
            c.line_to(w, s);
            c.line_to(s, s);
            c.close();
            c.fill();
        }

        if op2 != 0.0 {
            c.set_fill_alpha(op2.abs());
            c.set_fill_color(Some(shade_color(op2)));
            c.begin();
            c.move_to(0.0, 0.0);
            c.line_to(s, s);
            c.line_to(s, h);
            c.line_to(0.0, h - s);
            c.close();
            c.fill();
        }

        // Fold lines
        c.begin();
        c.move_to(s, h);
        c.line_to(s, s);
        c.line_to(0.0, 0.0);
        c.move_to(s, s);
        c.line_to(w, s);
        c.end();
        c.stroke();
    }

    /// With `boundedLbl`, keep the label clear of the fold.
    fn label_margins(&self, rect: &Rectangle) -> Option<Rectangle> {
        let state = self.state();
        if !state.style.flag(keys::BOUNDED_LBL, false) {
            return None;
        }
        let size = state.style.clamped(keys::SIZE, Self::DEFAULT_SIZE, 0.0, f64::MAX);
        let s = clamp(size * state.scale, 0.0, rect.width.min(rect.height));
        Some(Rectangle::new(s, s, 0.0, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;

    fn cube(style: &Style) -> CubeShape<'_> {
        CubeShape::new(ShapeState::new(style))
    }

    #[test]
    fn fold_size_is_clamped() {
        assert_eq!(cube(&Style::new()).fold_size(100.0, 60.0), 20.0);
        assert_eq!(cube(&Style::new()).fold_size(10.0, 60.0), 10.0);
        assert_eq!(cube(&Style::new().with("size", -4.0)).fold_size(100.0, 60.0), 0.0);
        assert_eq!(cube(&Style::new().with("size", 500.0)).fold_size(100.0, 60.0), 60.0);
        assert_eq!(cube(&Style::new().with("size", "deep")).fold_size(100.0, 60.0), 20.0);
    }

    #[test]
    fn opacities_are_clamped() {
        let style = Style::new().with("darkOpacity", 3.0).with("darkOpacity2", -7.5);
        assert_eq!(cube(&style).dark_opacity(), 1.0);
        assert_eq!(cube(&style).dark_opacity2(), -1.0);
    }

    #[test]
    fn label_margins_need_bounded_label() {
        let rect = Rectangle::new(0.0, 0.0, 100.0, 60.0);
        assert_eq!(cube(&Style::new()).label_margins(&rect), None);

        let bounded = Style::new().with("boundedLbl", 1.0);
        assert_eq!(
            cube(&bounded).label_margins(&rect),
            Some(Rectangle::new(20.0, 20.0, 0.0, 0.0))
        );

        let scaled = CubeShape::new(ShapeState::new(&bounded).with_scale(2.0));
        assert_eq!(
            scaled.label_margins(&Rectangle::new(0.0, 0.0, 200.0, 120.0)),
            Some(Rectangle::new(40.0, 40.0, 0.0, 0.0))
        );
    }

    #[test]
    fn label_bounds_without_margins_is_unchanged() {
        let rect = Rectangle::new(5.0, 5.0, 100.0, 60.0);
        assert_eq!(cube(&Style::new()).label_bounds(&rect), rect);

        let bounded = Style::new().with("boundedLbl", true);
        assert_eq!(
            cube(&bounded).label_bounds(&rect),
            Rectangle::new(25.0, 25.0, 80.0, 40.0)
        );
    }
}

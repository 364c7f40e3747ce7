//! Drawing surfaces that shapes paint onto.
//!
//! - [`Canvas`]: the imperative path/paint capability every shape consumes
//! - [`RecordingCanvas`]: logs calls, used for inspection and tests
//! - [`SvgCanvas`]: turns paths into SVG markup

mod recording;
mod svg;

pub use recording::{CanvasOp, PaintOp, RecordedPath, RecordingCanvas};
pub use svg::SvgCanvas;

use glam::{DAffine2, DMat2, DVec2, dvec2};

use crate::types::{Direction, Rectangle};

/// Linear gradient fill, running from `color1` toward `direction`.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub color1: String,
    pub color2: String,
    pub area: Rectangle,
    pub direction: Direction,
    pub alpha1: f64,
    pub alpha2: f64,
}

/// Imperative drawing context.
///
/// Paths are built between `begin` and one of the paint calls (`fill`,
/// `stroke`, `fill_and_stroke`); `end` marks the path as complete without
/// painting it. Colors of `None` paint nothing.
pub trait Canvas {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f64, dy: f64);
    /// Mirror what follows about `(cx, cy)`, then turn it `theta` degrees
    /// clockwise around the same point.
    fn rotate(&mut self, theta: f64, flip_h: bool, flip_v: bool, cx: f64, cy: f64);

    fn set_alpha(&mut self, alpha: f64);
    fn set_fill_alpha(&mut self, alpha: f64);
    fn set_stroke_alpha(&mut self, alpha: f64);
    fn set_fill_color(&mut self, color: Option<&str>);
    fn set_gradient(&mut self, gradient: &Gradient);
    fn set_stroke_color(&mut self, color: Option<&str>);
    fn set_stroke_width(&mut self, width: f64);
    fn set_dashed(&mut self, dashed: bool);
    fn set_shadow(&mut self, enabled: bool);

    fn begin(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn quad_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);
    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64);
    fn close(&mut self);
    fn end(&mut self);

    fn fill(&mut self);
    fn stroke(&mut self);
    fn fill_and_stroke(&mut self);

    /// Start a new path holding a closed rectangle.
    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.begin();
        self.move_to(x, y);
        self.line_to(x + w, y);
        self.line_to(x + w, y + h);
        self.line_to(x, y + h);
        self.close();
    }

    /// Start a new path holding a rectangle with quadratic corners of size `dx` by `dy`.
    fn round_rect(&mut self, x: f64, y: f64, w: f64, h: f64, dx: f64, dy: f64) {
        self.begin();
        self.move_to(x + dx, y);
        self.line_to(x + w - dx, y);
        self.quad_to(x + w, y, x + w, y + dy);
        self.line_to(x + w, y + h - dy);
        self.quad_to(x + w, y + h, x + w - dx, y + h);
        self.line_to(x + dx, y + h);
        self.quad_to(x, y + h, x, y + h - dy);
        self.line_to(x, y + dy);
        self.quad_to(x, y, x + dx, y);
        self.close();
    }
}

/// Transform matching [`Canvas::rotate`].
///
/// Quarter turns use exact matrices so axis-aligned geometry stays on whole
/// coordinates.
pub fn rotation_transform(theta: f64, flip_h: bool, flip_v: bool, center: DVec2) -> DAffine2 {
    let turn = theta.rem_euclid(360.0);
    let (sin, cos) = if turn == 0.0 {
        (0.0, 1.0)
    } else if turn == 90.0 {
        (1.0, 0.0)
    } else if turn == 180.0 {
        (0.0, -1.0)
    } else if turn == 270.0 {
        (-1.0, 0.0)
    } else {
        turn.to_radians().sin_cos()
    };
    let rotate = DMat2::from_cols(dvec2(cos, sin), dvec2(-sin, cos));
    let flip = DMat2::from_diagonal(dvec2(
        if flip_h { -1.0 } else { 1.0 },
        if flip_v { -1.0 } else { 1.0 },
    ));
    DAffine2::from_translation(center)
        * DAffine2::from_mat2(rotate * flip)
        * DAffine2::from_translation(-center)
}

//! Vertex shapes.
//!
//! Each shape is its own type that knows how to:
//! - Paint itself into a [`Canvas`] for a given bounding box
//! - Report label margins and label bounds
//!
//! Custom shapes reuse a base shape by holding one and calling it at the
//! point they want its behavior: [`CubeShape`] wraps a [`CylinderShape`],
//! [`ProcessShape`] wraps a [`RectangleShape`].

mod cube;
mod cylinder;
mod process;
mod rectangle;

pub use cube::CubeShape;
pub use cylinder::CylinderShape;
pub use process::ProcessShape;
pub use rectangle::RectangleShape;

use crate::canvas::Canvas;
use crate::defaults::{self, keys};
use crate::style::Style;
use crate::types::{Direction, Rectangle, clamp};

/// Attributes every shape carries for the duration of one render.
#[derive(Debug, Clone, Copy)]
pub struct ShapeState<'a> {
    /// Style of the element being painted. Never mutated by a shape.
    pub style: &'a Style,
    /// Lightweight preview mode: shading overlays are skipped.
    pub outline: bool,
    pub scale: f64,
    pub direction: Option<Direction>,
    pub is_rounded: bool,
    pub glass: bool,
    pub flip_h: bool,
    pub flip_v: bool,
    pub stroke_width: f64,
    pub has_fill: bool,
}

impl<'a> ShapeState<'a> {
    pub fn new(style: &'a Style) -> Self {
        Self {
            style,
            outline: false,
            scale: 1.0,
            direction: style.direction(),
            is_rounded: style.flag(keys::ROUNDED, false),
            glass: style.flag(keys::GLASS, false),
            flip_h: style.flag(keys::FLIP_H, false),
            flip_v: style.flag(keys::FLIP_V, false),
            stroke_width: style.clamped(keys::STROKE_WIDTH, defaults::STROKE_WIDTH, 0.0, f64::MAX),
            has_fill: style.color(keys::FILL_COLOR).is_some(),
        }
    }

    /// Set the display scale; non-positive or non-finite scales read as 1.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
        self
    }

    pub fn with_outline(mut self, outline: bool) -> Self {
        self.outline = outline;
        self
    }
}

/// Common behavior for all vertex shapes
pub trait VertexShape {
    fn state(&self) -> &ShapeState<'_>;

    /// Paint the shape into the box at `(x, y)` of size `w` by `h`.
    ///
    /// The default paints the background, then (unless an outline preview
    /// asked to skip it) turns the shadow off and paints the foreground.
    fn paint_vertex_shape(&self, c: &mut dyn Canvas, x: f64, y: f64, w: f64, h: f64) {
        self.paint_background(c, x, y, w, h);

        let state = self.state();
        if !state.outline || !state.style.flag(keys::BACKGROUND_OUTLINE, false) {
            c.set_shadow(false);
            self.paint_foreground(c, x, y, w, h);
        }
    }

    fn paint_background(&self, _c: &mut dyn Canvas, _x: f64, _y: f64, _w: f64, _h: f64) {}

    fn paint_foreground(&self, _c: &mut dyn Canvas, _x: f64, _y: f64, _w: f64, _h: f64) {}

    /// Margins to keep the label away from, or `None` to keep the caller's default.
    fn label_margins(&self, _rect: &Rectangle) -> Option<Rectangle> {
        None
    }

    /// Where the label goes inside `rect` (scaled view coordinates).
    fn label_bounds(&self, rect: &Rectangle) -> Rectangle {
        match self.label_margins(rect) {
            Some(margins) => {
                let state = self.state();
                directed_bounds(rect, margins, state.direction, state.flip_h, state.flip_v)
            }
            None => *rect,
        }
    }
}

/// Corner arc as a fraction of the smaller side, from `arcSize` (a percentage).
pub fn arc_fraction(style: &Style) -> f64 {
    style.clamped(
        keys::ARC_SIZE,
        defaults::RECTANGLE_ROUNDING_FACTOR * 100.0,
        0.0,
        100.0,
    ) / 100.0
}

/// Corner radius for a rounded shape of size `w` by `h`.
pub fn arc_size(style: &Style, w: f64, h: f64) -> f64 {
    if style.flag(keys::ABSOLUTE_ARC_SIZE, false) {
        let diameter = style.clamped(keys::ARC_SIZE, defaults::LINE_ARCSIZE, 0.0, f64::MAX);
        (w / 2.0).min(h / 2.0).min(diameter / 2.0).max(0.0)
    } else {
        let f = arc_fraction(style);
        (w * f).min(h * f).max(0.0)
    }
}

/// Shrink `rect` by `margins` expressed for an east-facing, unflipped shape.
///
/// Margins are clamped into the rectangle and rounded, swapped for flips,
/// then rotated to match `direction`.
pub fn directed_bounds(
    rect: &Rectangle,
    margins: Rectangle,
    direction: Option<Direction>,
    flip_h: bool,
    flip_v: bool,
) -> Rectangle {
    let d = direction.unwrap_or(Direction::East);
    let vertical = matches!(d, Direction::North | Direction::South);

    let mut m = Rectangle::new(
        clamp(margins.x, 0.0, rect.width).round(),
        clamp(margins.y, 0.0, rect.height).round(),
        clamp(margins.width, 0.0, rect.width).round(),
        clamp(margins.height, 0.0, rect.height).round(),
    );

    if (flip_v && vertical) || (flip_h && !vertical) {
        std::mem::swap(&mut m.x, &mut m.width);
    }
    if (flip_h && vertical) || (flip_v && !vertical) {
        std::mem::swap(&mut m.y, &mut m.height);
    }

    let m2 = match d {
        Direction::East => m,
        Direction::South => Rectangle::new(m.height, m.x, m.y, m.width),
        Direction::West => Rectangle::new(m.width, m.height, m.x, m.y),
        Direction::North => Rectangle::new(m.y, m.width, m.height, m.x),
    };

    Rectangle::new(
        rect.x + m2.x,
        rect.y + m2.y,
        rect.width - m2.width - m2.x,
        rect.height - m2.height - m2.y,
    )
}

// ============================================================================
// Shape Enum
// ============================================================================

/// A shape enum wrapping all shape types, as produced by the registry.
#[derive(Debug, Clone)]
pub enum ShapeKind<'a> {
    Rectangle(RectangleShape<'a>),
    Cylinder(CylinderShape<'a>),
    Cube(CubeShape<'a>),
    Process(ProcessShape<'a>),
}

macro_rules! dispatch {
    ($self:ident, $s:ident => $body:expr) => {
        match $self {
            ShapeKind::Rectangle($s) => $body,
            ShapeKind::Cylinder($s) => $body,
            ShapeKind::Cube($s) => $body,
            ShapeKind::Process($s) => $body,
        }
    };
}

impl ShapeKind<'_> {
    /// Short name of the variant, for logs and tests.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle(_) => defaults::names::RECTANGLE,
            ShapeKind::Cylinder(_) => defaults::names::CYLINDER,
            ShapeKind::Cube(_) => defaults::names::CUBE,
            ShapeKind::Process(_) => defaults::names::PROCESS,
        }
    }
}

impl VertexShape for ShapeKind<'_> {
    fn state(&self) -> &ShapeState<'_> {
        dispatch!(self, s => s.state())
    }

    fn paint_vertex_shape(&self, c: &mut dyn Canvas, x: f64, y: f64, w: f64, h: f64) {
        dispatch!(self, s => s.paint_vertex_shape(c, x, y, w, h))
    }

    fn paint_background(&self, c: &mut dyn Canvas, x: f64, y: f64, w: f64, h: f64) {
        dispatch!(self, s => s.paint_background(c, x, y, w, h))
    }

    fn paint_foreground(&self, c: &mut dyn Canvas, x: f64, y: f64, w: f64, h: f64) {
        dispatch!(self, s => s.paint_foreground(c, x, y, w, h))
    }

    fn label_margins(&self, rect: &Rectangle) -> Option<Rectangle> {
        dispatch!(self, s => s.label_margins(rect))
    }

    fn label_bounds(&self, rect: &Rectangle) -> Rectangle {
        dispatch!(self, s => s.label_bounds(rect))
    }
}

impl<'a> From<RectangleShape<'a>> for ShapeKind<'a> {
    fn from(s: RectangleShape<'a>) -> Self { ShapeKind::Rectangle(s) }
}

impl<'a> From<CylinderShape<'a>> for ShapeKind<'a> {
    fn from(s: CylinderShape<'a>) -> Self { ShapeKind::Cylinder(s) }
}

impl<'a> From<CubeShape<'a>> for ShapeKind<'a> {
    fn from(s: CubeShape<'a>) -> Self { ShapeKind::Cube(s) }
}

impl<'a> From<ProcessShape<'a>> for ShapeKind<'a> {
    fn from(s: ProcessShape<'a>) -> Self { ShapeKind::Process(s) }
}

// ============================================================================
// Tests
// ============================================================================

//! Per-element render pipeline.
//!
//! For each element the renderer looks up the shape named by the style,
//! applies the style's paint settings to the canvas, turns the canvas to
//! the style's direction, and lets the shape paint itself. Shapes are
//! created per call and dropped afterwards.

use crate::canvas::{Canvas, Gradient};
use crate::defaults::{self, keys};
use crate::registry::ShapeRegistry;
use crate::shapes::{ShapeKind, ShapeState, VertexShape};
use crate::style::Style;
use crate::types::{Direction, Rectangle};

/// Paints elements through a [`ShapeRegistry`].
#[derive(Debug, Clone)]
pub struct Renderer {
    registry: ShapeRegistry,
    scale: f64,
    outline: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            registry: ShapeRegistry::with_builtins(),
            scale: 1.0,
            outline: false,
        }
    }
}

impl Renderer {
    /// A renderer with the built-in shapes registered.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(mut self, registry: ShapeRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Display scale applied to label geometry.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
        self
    }

    /// Render previews: shading overlays are skipped.
    pub fn with_outline(mut self, outline: bool) -> Self {
        self.outline = outline;
        self
    }

    pub fn registry(&self) -> &ShapeRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ShapeRegistry {
        &mut self.registry
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Instantiate the shape for `style`.
    pub fn shape<'a>(&self, style: &'a Style) -> ShapeKind<'a> {
        let state = ShapeState::new(style)
            .with_scale(self.scale)
            .with_outline(self.outline);
        self.registry.create(style.shape_name(), state)
    }

    /// Paint one element into `bounds`.
    ///
    /// Shapes always paint facing east. North and south shapes paint into
    /// the box with width and height swapped, and the canvas turns them
    /// into place around the center of `bounds`.
    pub fn paint(&self, c: &mut dyn Canvas, bounds: &Rectangle, style: &Style) {
        let shape = self.shape(style);
        let state = shape.state();
        let painted = painted_box(bounds, state.direction);

        c.save();
        configure_canvas(c, style, bounds);

        let theta = match state.direction {
            Some(Direction::South) => 90.0,
            Some(Direction::West) => 180.0,
            Some(Direction::North) => 270.0,
            Some(Direction::East) | None => 0.0,
        };
        // Flips name screen axes; before the turn they apply to the other axis.
        let (flip_h, flip_v) = if Direction::is_horizontal(state.direction) {
            (state.flip_h, state.flip_v)
        } else {
            (state.flip_v, state.flip_h)
        };
        if theta != 0.0 || flip_h || flip_v {
            let cx = bounds.x + bounds.width / 2.0;
            let cy = bounds.y + bounds.height / 2.0;
            c.rotate(theta, flip_h, flip_v, cx, cy);
        }

        shape.paint_vertex_shape(c, painted.x, painted.y, painted.width, painted.height);
        c.restore();
    }

    /// Label rectangle for an element, in scaled view coordinates.
    pub fn label_bounds(&self, bounds: &Rectangle, style: &Style) -> Rectangle {
        self.shape(style).label_bounds(&bounds.scaled(self.scale))
    }
}

/// Box a shape paints into before it is turned to `direction`.
fn painted_box(bounds: &Rectangle, direction: Option<Direction>) -> Rectangle {
    if Direction::is_horizontal(direction) {
        return *bounds;
    }
    let (w, h) = (bounds.width, bounds.height);
    Rectangle::new(bounds.x + (w - h) / 2.0, bounds.y + (h - w) / 2.0, h, w)
}

/// Apply the style's opacity, colors, stroke and shadow settings.
fn configure_canvas(c: &mut dyn Canvas, style: &Style, bounds: &Rectangle) {
    let percent = |key| style.clamped(key, 100.0, 0.0, 100.0) / 100.0;
    let fill_opacity = percent(keys::FILL_OPACITY);

    c.set_alpha(percent(keys::OPACITY));
    c.set_fill_alpha(fill_opacity);
    c.set_stroke_alpha(percent(keys::STROKE_OPACITY));

    c.set_stroke_width(style.clamped(keys::STROKE_WIDTH, defaults::STROKE_WIDTH, 0.0, f64::MAX));
    c.set_stroke_color(style.color(keys::STROKE_COLOR));

    match (style.color(keys::FILL_COLOR), style.color(keys::GRADIENT_COLOR)) {
        (Some(fill), Some(gradient)) => {
            let direction = style
                .text(keys::GRADIENT_DIRECTION)
                .and_then(|d| d.parse().ok())
                .unwrap_or(Direction::South);
            c.set_gradient(&Gradient {
                color1: fill.to_string(),
                color2: gradient.to_string(),
                area: *bounds,
                direction,
                alpha1: fill_opacity,
                alpha2: fill_opacity,
            });
        }
        (fill, _) => c.set_fill_color(fill),
    }

    c.set_dashed(style.flag(keys::DASHED, false));
    c.set_shadow(style.flag(keys::SHADOW, false));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{CanvasOp, RecordingCanvas};

    #[test]
    fn paint_is_wrapped_in_save_restore() {
        let style = Style::new().with("shape", "cube");
        let mut c = RecordingCanvas::new();
        Renderer::new().paint(&mut c, &Rectangle::new(0.0, 0.0, 40.0, 40.0), &style);
        assert_eq!(c.ops().first(), Some(&CanvasOp::Save));
        assert_eq!(c.ops().last(), Some(&CanvasOp::Restore));
    }

    #[test]
    fn configures_canvas_from_style() {
        let style = Style::new()
            .with("fillColor", "#dae8fc")
            .with("strokeColor", "#6c8ebf")
            .with("opacity", 50.0)
            .with("strokeWidth", 2.0)
            .with("shadow", 1.0);
        let mut c = RecordingCanvas::new();
        Renderer::new().paint(&mut c, &Rectangle::new(0.0, 0.0, 10.0, 10.0), &style);

        let ops = c.ops();
        assert!(ops.contains(&CanvasOp::Alpha(0.5)));
        assert!(ops.contains(&CanvasOp::StrokeWidth(2.0)));
        assert!(ops.contains(&CanvasOp::FillColor(Some("#dae8fc".into()))));
        assert!(ops.contains(&CanvasOp::StrokeColor(Some("#6c8ebf".into()))));
        assert!(ops.contains(&CanvasOp::Shadow(true)));
    }

    #[test]
    fn gradient_replaces_plain_fill() {
        let style = Style::new()
            .with("fillColor", "#FFFFFF")
            .with("gradientColor", "#7ea6e0")
            .with("gradientDirection", "east");
        let mut c = RecordingCanvas::new();
        Renderer::new().paint(&mut c, &Rectangle::new(0.0, 0.0, 10.0, 10.0), &style);
        let gradient = c.ops().iter().find_map(|op| match op {
            CanvasOp::Gradient(g) => Some(g.clone()),
            _ => None,
        });
        let gradient = gradient.expect("gradient set");
        assert_eq!(gradient.direction, Direction::East);
        assert_eq!(gradient.color2, "#7ea6e0");
    }

    #[test]
    fn vertical_shapes_paint_swapped_and_turned() {
        let style = Style::new().with("shape", "cube").with("direction", "north");
        let mut c = RecordingCanvas::new();
        Renderer::new().paint(&mut c, &Rectangle::new(0.0, 0.0, 100.0, 60.0), &style);
        assert!(c.ops().contains(&CanvasOp::Rotate {
            theta: 270.0,
            flip_h: false,
            flip_v: false,
            center: glam::dvec2(50.0, 30.0),
        }));
        assert!(c.ops().contains(&CanvasOp::Translate(glam::dvec2(20.0, -20.0))));
    }

    #[test]
    fn flips_swap_for_vertical_directions() {
        let style = Style::new().with("direction", "south").with("flipH", 1.0);
        let mut c = RecordingCanvas::new();
        Renderer::new().paint(&mut c, &Rectangle::new(0.0, 0.0, 10.0, 10.0), &style);
        assert!(c.ops().contains(&CanvasOp::Rotate {
            theta: 90.0,
            flip_h: false,
            flip_v: true,
            center: glam::dvec2(5.0, 5.0),
        }));
    }

    #[test]
    fn east_unflipped_shapes_are_not_turned() {
        let mut c = RecordingCanvas::new();
        Renderer::new().paint(&mut c, &Rectangle::new(0.0, 0.0, 10.0, 10.0), &Style::new());
        assert!(!c.ops().iter().any(|op| matches!(op, CanvasOp::Rotate { .. })));
    }

    #[test]
    fn stroke_width_is_never_negative() {
        let style = Style::new().with("strokeWidth", -4.0);
        let mut c = RecordingCanvas::new();
        Renderer::new().paint(&mut c, &Rectangle::new(0.0, 0.0, 10.0, 10.0), &style);
        assert!(c.ops().contains(&CanvasOp::StrokeWidth(0.0)));
    }

    #[test]
    fn label_bounds_use_scale() {
        let style = Style::new().with("shape", "process");
        let renderer = Renderer::new().with_scale(2.0);
        let b = renderer.label_bounds(&Rectangle::new(0.0, 0.0, 100.0, 25.0), &style);
        assert_eq!(b, Rectangle::new(20.0, 0.0, 160.0, 50.0));
    }
}

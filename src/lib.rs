//! Parametric vertex shapes for diagram canvases.
//!
//! Shapes compute their own outline, shading and label bounds from a
//! per-element [`Style`]. Two custom shapes build on the base ones:
//!
//! - `cube`: a box with a folded corner and optional shaded faces
//! - `process`: a rectangle with inset vertical guide lines
//!
//! ```
//! use shapewright::{Rectangle, Renderer, Stylesheet, canvas::SvgCanvas};
//!
//! let style = Stylesheet::new().resolve("cube;size=20;darkOpacity=0.5").unwrap();
//! let mut canvas = SvgCanvas::new();
//! Renderer::new().paint(&mut canvas, &Rectangle::new(10.0, 10.0, 100.0, 60.0), &style);
//! let svg = canvas.finish(120.0, 80.0);
//! assert!(svg.starts_with("<svg"));
//! ```

use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "style.pest"]
pub struct StyleParser;

pub mod canvas;
pub mod defaults;
pub mod errors;
pub mod log;
pub mod parse;
pub mod registry;
pub mod render;
pub mod shapes;
pub mod style;
pub mod stylesheet;
pub mod types;

pub use errors::StyleError;
pub use registry::{ShapeFactory, ShapeRegistry};
pub use render::Renderer;
pub use shapes::{
    CubeShape, CylinderShape, ProcessShape, RectangleShape, ShapeKind, ShapeState, VertexShape,
};
pub use style::{Style, StyleValue};
pub use stylesheet::Stylesheet;
pub use types::{Direction, Rectangle};

/// Render a single element to a standalone SVG document.
///
/// The style string is resolved against the default stylesheet and the
/// shape fills a `width` by `height` box, with a small margin for strokes.
pub fn render_svg(style: &str, width: f64, height: f64) -> Result<String, StyleError> {
    const MARGIN: f64 = 4.0;

    let style = Stylesheet::new().resolve(style)?;
    let mut canvas = canvas::SvgCanvas::new();
    Renderer::new().paint(
        &mut canvas,
        &Rectangle::new(MARGIN, MARGIN, width, height),
        &style,
    );
    Ok(canvas.finish(width + 2.0 * MARGIN, height + 2.0 * MARGIN))
}

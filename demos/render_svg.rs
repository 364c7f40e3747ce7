//! Render a small sheet of shapes to SVG on stdout.
//!
//! ```sh
//! RUST_LOG=shapewright=debug cargo run --example render_svg --features tracing > sheet.svg
//! ```

use shapewright::canvas::SvgCanvas;
use shapewright::{Rectangle, Renderer, Style, Stylesheet};
use tracing_subscriber::EnvFilter;

const CELLS: &[(&str, f64, f64)] = &[
    ("cube;size=20;darkOpacity=0.05;darkOpacity2=0.1;boundedLbl=1", 120.0, 80.0),
    ("cube;size=10;darkOpacity=-0.4;fillColor=#dae8fc;strokeColor=#6c8ebf", 80.0, 80.0),
    ("process;size=0.1", 160.0, 60.0),
    ("process;rounded=1;fixedSize=1;size=24;shadow=1", 160.0, 60.0),
    ("cylinder;fillColor=#f5f5f5", 60.0, 80.0),
    ("rounded=1;glass=1;fillColor=#d5e8d4;gradientColor=#97d077", 120.0, 60.0),
    ("hexagon;dashed=1", 80.0, 50.0),
];

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut sheet = Stylesheet::new();
    sheet.put("note", Style::new().with("shape", "cube").with("size", 12.0));

    let renderer = Renderer::new();
    let mut canvas = SvgCanvas::new();
    let mut x = 10.0;
    let mut height: f64 = 0.0;

    for (source, w, h) in CELLS {
        let style = sheet.resolve(source)?;
        let bounds = Rectangle::new(x, 10.0, *w, *h);
        renderer.paint(&mut canvas, &bounds, &style);
        tracing::info!(%source, label = %renderer.label_bounds(&bounds, &style), "painted");
        x += w + 20.0;
        height = height.max(*h);
    }

    println!("{}", canvas.finish(x, height + 20.0));
    Ok(())
}

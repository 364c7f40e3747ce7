use glam::dvec2;
use shapewright::canvas::{CanvasOp, PaintOp, RecordingCanvas};
use shapewright::registry::{self, ShapeRegistry};
use shapewright::{
    CubeShape, ProcessShape, Rectangle, Renderer, ShapeState, Style, Stylesheet, VertexShape,
    render_svg,
};

const SIZES: [f64; 9] = [-50.0, -1.0, 0.0, 0.05, 0.5, 1.0, 20.0, 75.0, 1e6];
const BOXES: [(f64, f64); 5] = [(1.0, 1.0), (100.0, 60.0), (60.0, 100.0), (10.6, 3.0), (500.0, 20.0)];

fn paint(style: &Style, w: f64, h: f64) -> RecordingCanvas {
    let mut c = RecordingCanvas::new();
    Renderer::new().paint(&mut c, &Rectangle::new(0.0, 0.0, w, h), style);
    c
}

// =============================================================================
// Cube
// =============================================================================

#[test]
fn cube_fold_stays_inside_box() {
    for size in SIZES {
        for (w, h) in BOXES {
            let style = Style::new().with("size", size);
            let s = CubeShape::new(ShapeState::new(&style)).fold_size(w, h);
            assert!((0.0..=w.min(h)).contains(&s), "size={size} w={w} h={h} s={s}");
        }
    }
}

#[test]
fn cube_opacity_beyond_range_uses_boundary_alpha() {
    for (value, alpha, color) in [(2.5, 1.0, "#000000"), (-9.0, 1.0, "#FFFFFF"), (-0.25, 0.25, "#FFFFFF")] {
        let style = Style::new().with("shape", "cube").with("darkOpacity", value);
        let shade = &paint(&style, 100.0, 60.0).paths()[1];
        assert_eq!(shade.paint, PaintOp::Fill);
        assert_eq!(shade.fill_alpha, alpha);
        assert_eq!(shade.fill_color.as_deref(), Some(color));

        let style = Style::new().with("shape", "cube").with("darkOpacity2", value);
        let shade = &paint(&style, 100.0, 60.0).paths()[1];
        assert_eq!(shade.fill_alpha, alpha);
        assert_eq!(
            shade.points,
            vec![dvec2(0.0, 0.0), dvec2(20.0, 20.0), dvec2(20.0, 60.0), dvec2(0.0, 40.0)]
        );
    }
}

#[test]
fn cube_scenario_outline_and_top_shade() {
    let style = Style::new()
        .with("shape", "cube")
        .with("size", 20.0)
        .with("darkOpacity", 0.5);
    let paths = paint(&style, 100.0, 60.0).paths();
    assert_eq!(paths.len(), 3);

    let outline = &paths[0];
    assert_eq!(outline.paint, PaintOp::FillAndStroke);
    assert!(outline.closed);
    assert_eq!(
        outline.points,
        vec![
            dvec2(0.0, 0.0),
            dvec2(80.0, 0.0),
            dvec2(100.0, 20.0),
            dvec2(100.0, 60.0),
            dvec2(20.0, 60.0),
            dvec2(0.0, 40.0),
            dvec2(0.0, 0.0),
        ]
    );

    let top = &paths[1];
    assert_eq!(top.paint, PaintOp::Fill);
    assert_eq!(top.fill_alpha, 0.5);
    assert_eq!(top.fill_color.as_deref(), Some("#000000"));
    assert_eq!(
        top.points,
        vec![dvec2(0.0, 0.0), dvec2(80.0, 0.0), dvec2(100.0, 20.0), dvec2(20.0, 20.0)]
    );

    assert_eq!(paths[2].paint, PaintOp::Stroke);
}

#[test]
fn cube_paint_log() {
    let style = Style::new().with("size", 20.0).with("darkOpacity", 0.5);
    let mut c = RecordingCanvas::new();
    CubeShape::new(ShapeState::new(&style)).paint_vertex_shape(&mut c, 0.0, 0.0, 100.0, 60.0);
    insta::assert_snapshot!(c.log().trim_end(), @r"
    translate 0,0
    begin
    move 0,0
    line 80,0
    line 100,20
    line 100,60
    line 20,60
    line 0,40
    line 0,0
    close
    end
    fill-stroke
    shadow false
    fill-alpha 0.5
    fill-color #000000
    begin
    move 0,0
    line 80,0
    line 100,20
    line 20,20
    close
    fill
    begin
    move 20,60
    line 20,20
    line 0,0
    move 20,20
    line 100,20
    end
    stroke
    ");
}

#[test]
fn cube_outline_mode_skips_shading_and_folds() {
    let style = Style::new().with("shape", "cube").with("darkOpacity", 0.5).with("darkOpacity2", 0.5);
    let mut c = RecordingCanvas::new();
    Renderer::new()
        .with_outline(true)
        .paint(&mut c, &Rectangle::new(0.0, 0.0, 100.0, 60.0), &style);
    assert_eq!(c.paths().len(), 1);
    assert!(!c.ops().contains(&CanvasOp::FillAlpha(0.5)));
}

#[test]
fn cube_label_margins() {
    let rect = Rectangle::new(0.0, 0.0, 100.0, 60.0);

    let plain = Style::new().with("boundedLbl", false);
    assert_eq!(CubeShape::new(ShapeState::new(&plain)).label_margins(&rect), None);

    let bounded = Style::new().with("boundedLbl", true).with("size", 20.0);
    let shape = CubeShape::new(ShapeState::new(&bounded).with_scale(1.0));
    assert_eq!(shape.label_margins(&rect), Some(Rectangle::new(20.0, 20.0, 0.0, 0.0)));
}

#[test]
fn cube_facing_south_keeps_label_clear_of_folds() {
    let style = Stylesheet::new()
        .resolve("cube;size=20;darkOpacity=0.5;boundedLbl=1;direction=south")
        .unwrap();
    let bounds = Rectangle::new(0.0, 0.0, 100.0, 60.0);
    let renderer = Renderer::new();
    let mut c = RecordingCanvas::new();
    renderer.paint(&mut c, &bounds, &style);
    let paths = c.paths();

    // The top face turns into the right-hand strip.
    let shade: Vec<_> = paths[1].absolute_points().collect();
    assert_eq!(
        shade,
        vec![dvec2(100.0, 0.0), dvec2(100.0, 40.0), dvec2(80.0, 60.0), dvec2(80.0, 20.0)]
    );

    // Fold lines run along the label's top and right edges.
    let folds: Vec<_> = paths[2].absolute_points().collect();
    assert_eq!(
        folds,
        vec![
            dvec2(0.0, 20.0),
            dvec2(80.0, 20.0),
            dvec2(100.0, 0.0),
            dvec2(80.0, 20.0),
            dvec2(80.0, 60.0),
        ]
    );

    let label = renderer.label_bounds(&bounds, &style);
    assert_eq!(label, Rectangle::new(0.0, 20.0, 80.0, 40.0));
}

#[test]
fn cube_flipped_horizontally_mirrors_fold_and_label() {
    let style = Stylesheet::new().resolve("cube;size=20;boundedLbl=1;flipH=1").unwrap();
    let bounds = Rectangle::new(0.0, 0.0, 100.0, 60.0);
    let renderer = Renderer::new();
    let mut c = RecordingCanvas::new();
    renderer.paint(&mut c, &bounds, &style);

    let folds: Vec<_> = c.paths()[1].absolute_points().collect();
    assert_eq!(
        folds,
        vec![
            dvec2(80.0, 60.0),
            dvec2(80.0, 20.0),
            dvec2(100.0, 0.0),
            dvec2(80.0, 20.0),
            dvec2(0.0, 20.0),
        ]
    );
    assert_eq!(renderer.label_bounds(&bounds, &style), Rectangle::new(0.0, 20.0, 80.0, 40.0));
}

// =============================================================================
// Process
// =============================================================================

#[test]
fn process_inset_stays_inside_box() {
    for size in SIZES {
        for fixed in [false, true] {
            for rounded in [false, true] {
                for (w, h) in BOXES {
                    let style = Style::new()
                        .with("size", size)
                        .with("fixedSize", fixed)
                        .with("rounded", rounded);
                    let inset = ProcessShape::new(ShapeState::new(&style)).inset(w, h);
                    assert!(
                        (0.0..=w).contains(&inset),
                        "size={size} fixed={fixed} rounded={rounded} w={w} inset={inset}"
                    );
                    assert_eq!(inset, inset.round(), "inset {inset} is not whole");
                }
            }
        }
    }
}

#[test]
fn process_scenario() {
    let style = Style::new()
        .with("shape", "process")
        .with("size", 0.1)
        .with("fixedSize", false);
    let x = 7.0;
    let y = 3.0;
    let mut c = RecordingCanvas::new();
    let renderer = Renderer::new();
    renderer.paint(&mut c, &Rectangle::new(x, y, 200.0, 50.0), &style);

    let paths = c.paths();
    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0].paint, PaintOp::FillAndStroke);
    let guides = &paths[1];
    assert_eq!(guides.paint, PaintOp::Stroke);
    assert_eq!(
        guides.points,
        vec![
            dvec2(x + 20.0, y),
            dvec2(x + 20.0, y + 50.0),
            dvec2(x + 180.0, y),
            dvec2(x + 180.0, y + 50.0),
        ]
    );

    let label = renderer.label_bounds(&Rectangle::new(x, y, 200.0, 50.0), &style);
    assert_eq!(label, Rectangle::new(x + 20.0, y, 160.0, 50.0));
}

#[test]
fn process_svg_snapshot() {
    let svg = render_svg("process", 200.0, 50.0).unwrap();
    insta::assert_snapshot!(svg, @r##"<svg xmlns="http://www.w3.org/2000/svg" width="208" height="58" viewBox="0 0 208 58"><path d="M 4 4 L 204 4 L 204 54 L 4 54 Z" fill="#FFFFFF" stroke="#000000" stroke-width="1"/><path d="M 24 4 L 24 54 M 184 4 L 184 54" fill="none" stroke="#000000" stroke-width="1"/></svg>"##);
}

#[test]
fn svg_colors_cannot_break_out_of_attributes() {
    let svg = render_svg(r#"rectangle;fillColor=red" onload="alert(1)"#, 20.0, 20.0).unwrap();
    assert!(svg.contains(r#"fill="red&quot; onload=&quot;alert(1)""#), "{svg}");
    assert!(!svg.contains(r#" onload=""#), "{svg}");
}

// =============================================================================
// Registry and pipeline
// =============================================================================

#[test]
fn later_registration_wins() {
    let mut registry = ShapeRegistry::with_builtins();
    registry.register("process", registry::cube);
    registry.register("process", registry::cylinder);
    assert_eq!(registry.names().filter(|n| *n == "process").count(), 1);

    let renderer = Renderer::new().with_registry(registry);
    let style = Style::new().with("shape", "process");
    assert_eq!(renderer.shape(&style).kind_name(), "cylinder");
}

#[test]
fn overlay_comes_after_base_paint() {
    let style = Stylesheet::new().resolve("cube;darkOpacity=0.3;darkOpacity2=-0.3").unwrap();
    let paints: Vec<_> = paint(&style, 80.0, 80.0).paths().iter().map(|p| p.paint).collect();
    assert_eq!(
        paints,
        vec![PaintOp::FillAndStroke, PaintOp::Fill, PaintOp::Fill, PaintOp::Stroke]
    );
}

#[test]
fn style_is_not_mutated_by_painting() {
    let style = Stylesheet::new().resolve("process;size=abc;rounded=1").unwrap();
    let before = style.clone();
    let _ = paint(&style, 120.0, 40.0);
    assert_eq!(style, before);
}

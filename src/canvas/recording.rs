//! A canvas that records every call it receives.

use std::fmt;

use glam::{DAffine2, DVec2, dvec2};

use super::{Canvas, Gradient, rotation_transform};
use crate::types::Rectangle;

/// One recorded canvas call.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasOp {
    Save,
    Restore,
    Translate(DVec2),
    Rotate {
        theta: f64,
        flip_h: bool,
        flip_v: bool,
        center: DVec2,
    },
    Alpha(f64),
    FillAlpha(f64),
    StrokeAlpha(f64),
    FillColor(Option<String>),
    Gradient(Gradient),
    StrokeColor(Option<String>),
    StrokeWidth(f64),
    Dashed(bool),
    Shadow(bool),
    Begin,
    MoveTo(DVec2),
    LineTo(DVec2),
    QuadTo(DVec2, DVec2),
    CurveTo(DVec2, DVec2, DVec2),
    Close,
    End,
    Fill,
    Stroke,
    FillAndStroke,
    Rect(Rectangle),
    RoundRect(Rectangle, DVec2),
}

/// How a recorded path was painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintOp {
    Fill,
    Stroke,
    FillAndStroke,
}

/// A painted path reconstructed from the log, with the fill state in effect.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPath {
    /// Path vertices (segment end points) in the coordinates they were drawn in.
    pub points: Vec<DVec2>,
    /// Translation and rotation in effect when the path was painted.
    pub transform: DAffine2,
    pub closed: bool,
    pub paint: PaintOp,
    pub fill_color: Option<String>,
    pub fill_alpha: f64,
    pub shadow: bool,
}

impl RecordedPath {
    pub fn absolute_points(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.points.iter().map(|p| self.transform.transform_point2(*p))
    }
}

/// Canvas that keeps an ordered log of [`CanvasOp`]s.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    ops: Vec<CanvasOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<CanvasOp> {
        self.ops
    }

    /// The log, one call per line.
    pub fn log(&self) -> String {
        let mut out = String::new();
        for op in &self.ops {
            out.push_str(&op.to_string());
            out.push('\n');
        }
        out
    }

    /// Replay the log and return every painted path in order.
    pub fn paths(&self) -> Vec<RecordedPath> {
        #[derive(Clone)]
        struct Replay {
            transform: DAffine2,
            fill_color: Option<String>,
            fill_alpha: f64,
            shadow: bool,
        }

        let mut state = Replay {
            transform: DAffine2::IDENTITY,
            fill_color: None,
            fill_alpha: 1.0,
            shadow: false,
        };
        let mut stack = Vec::new();
        let mut points = Vec::new();
        let mut closed = false;
        let mut paths = Vec::new();

        for op in &self.ops {
            let paint = match op {
                CanvasOp::Save => {
                    stack.push(state.clone());
                    None
                }
                CanvasOp::Restore => {
                    if let Some(saved) = stack.pop() {
                        state = saved;
                    }
                    None
                }
                CanvasOp::Translate(d) => {
                    state.transform = state.transform * DAffine2::from_translation(*d);
                    None
                }
                CanvasOp::Rotate {
                    theta,
                    flip_h,
                    flip_v,
                    center,
                } => {
                    state.transform =
                        state.transform * rotation_transform(*theta, *flip_h, *flip_v, *center);
                    None
                }
                CanvasOp::FillAlpha(a) => {
                    state.fill_alpha = *a;
                    None
                }
                CanvasOp::FillColor(c) => {
                    state.fill_color = c.clone();
                    None
                }
                CanvasOp::Gradient(g) => {
                    state.fill_color = Some(g.color1.clone());
                    None
                }
                CanvasOp::Shadow(s) => {
                    state.shadow = *s;
                    None
                }
                CanvasOp::Begin => {
                    points.clear();
                    closed = false;
                    None
                }
                CanvasOp::MoveTo(p) | CanvasOp::LineTo(p) => {
                    points.push(*p);
                    None
                }
                CanvasOp::QuadTo(_, p) | CanvasOp::CurveTo(_, _, p) => {
                    points.push(*p);
                    None
                }
                CanvasOp::Close => {
                    closed = true;
                    None
                }
                CanvasOp::Rect(r) | CanvasOp::RoundRect(r, _) => {
                    points = vec![
                        dvec2(r.x, r.y),
                        dvec2(r.x + r.width, r.y),
                        dvec2(r.x + r.width, r.y + r.height),
                        dvec2(r.x, r.y + r.height),
                    ];
                    closed = true;
                    None
                }
                CanvasOp::Fill => Some(PaintOp::Fill),
                CanvasOp::Stroke => Some(PaintOp::Stroke),
                CanvasOp::FillAndStroke => Some(PaintOp::FillAndStroke),
                CanvasOp::Alpha(_)
                | CanvasOp::StrokeAlpha(_)
                | CanvasOp::StrokeColor(_)
                | CanvasOp::StrokeWidth(_)
                | CanvasOp::Dashed(_)
                | CanvasOp::End => None,
            };

            if let Some(paint) = paint {
                paths.push(RecordedPath {
                    points: std::mem::take(&mut points),
                    transform: state.transform,
                    closed,
                    paint,
                    fill_color: state.fill_color.clone(),
                    fill_alpha: state.fill_alpha,
                    shadow: state.shadow,
                });
                closed = false;
            }
        }
        paths
    }

    fn push(&mut self, op: CanvasOp) {
        self.ops.push(op);
    }
}

impl Canvas for RecordingCanvas {
    fn save(&mut self) {
        self.push(CanvasOp::Save);
    }

    fn restore(&mut self) {
        self.push(CanvasOp::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.push(CanvasOp::Translate(dvec2(dx, dy)));
    }

    fn rotate(&mut self, theta: f64, flip_h: bool, flip_v: bool, cx: f64, cy: f64) {
        self.push(CanvasOp::Rotate {
            theta,
            flip_h,
            flip_v,
            center: dvec2(cx, cy),
        });
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.push(CanvasOp::Alpha(alpha));
    }

    fn set_fill_alpha(&mut self, alpha: f64) {
        self.push(CanvasOp::FillAlpha(alpha));
    }

    fn set_stroke_alpha(&mut self, alpha: f64) {
        self.push(CanvasOp::StrokeAlpha(alpha));
    }

    fn set_fill_color(&mut self, color: Option<&str>) {
        self.push(CanvasOp::FillColor(color.map(str::to_string)));
    }

    fn set_gradient(&mut self, gradient: &Gradient) {
        self.push(CanvasOp::Gradient(gradient.clone()));
    }

    fn set_stroke_color(&mut self, color: Option<&str>) {
        self.push(CanvasOp::StrokeColor(color.map(str::to_string)));
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.push(CanvasOp::StrokeWidth(width));
    }

    fn set_dashed(&mut self, dashed: bool) {
        self.push(CanvasOp::Dashed(dashed));
    }

    fn set_shadow(&mut self, enabled: bool) {
        self.push(CanvasOp::Shadow(enabled));
    }

    fn begin(&mut self) {
        self.push(CanvasOp::Begin);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push(CanvasOp::MoveTo(dvec2(x, y)));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(CanvasOp::LineTo(dvec2(x, y)));
    }

    fn quad_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.push(CanvasOp::QuadTo(dvec2(x1, y1), dvec2(x2, y2)));
    }

    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        self.push(CanvasOp::CurveTo(dvec2(x1, y1), dvec2(x2, y2), dvec2(x3, y3)));
    }

    fn close(&mut self) {
        self.push(CanvasOp::Close);
    }

    fn end(&mut self) {
        self.push(CanvasOp::End);
    }

    fn fill(&mut self) {
        self.push(CanvasOp::Fill);
    }

    fn stroke(&mut self) {
        self.push(CanvasOp::Stroke);
    }

    fn fill_and_stroke(&mut self) {
        self.push(CanvasOp::FillAndStroke);
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.push(CanvasOp::Rect(Rectangle::new(x, y, w, h)));
    }

    fn round_rect(&mut self, x: f64, y: f64, w: f64, h: f64, dx: f64, dy: f64) {
        self.push(CanvasOp::RoundRect(Rectangle::new(x, y, w, h), dvec2(dx, dy)));
    }
}

fn pt(p: DVec2) -> String {
    format!("{},{}", p.x, p.y)
}

fn color(c: &Option<String>) -> &str {
    c.as_deref().unwrap_or("none")
}

impl fmt::Display for CanvasOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanvasOp::Save => f.write_str("save"),
            CanvasOp::Restore => f.write_str("restore"),
            CanvasOp::Translate(d) => write!(f, "translate {}", pt(*d)),
            CanvasOp::Rotate {
                theta,
                flip_h,
                flip_v,
                center,
            } => write!(f, "rotate {theta} flip {flip_h},{flip_v} about {}", pt(*center)),
            CanvasOp::Alpha(a) => write!(f, "alpha {a}"),
            CanvasOp::FillAlpha(a) => write!(f, "fill-alpha {a}"),
            CanvasOp::StrokeAlpha(a) => write!(f, "stroke-alpha {a}"),
            CanvasOp::FillColor(c) => write!(f, "fill-color {}", color(c)),
            CanvasOp::Gradient(g) => write!(
                f,
                "gradient {} {} {:?} {}",
                g.color1, g.color2, g.direction, g.area
            ),
            CanvasOp::StrokeColor(c) => write!(f, "stroke-color {}", color(c)),
            CanvasOp::StrokeWidth(w) => write!(f, "stroke-width {w}"),
            CanvasOp::Dashed(d) => write!(f, "dashed {d}"),
            CanvasOp::Shadow(s) => write!(f, "shadow {s}"),
            CanvasOp::Begin => f.write_str("begin"),
            CanvasOp::MoveTo(p) => write!(f, "move {}", pt(*p)),
            CanvasOp::LineTo(p) => write!(f, "line {}", pt(*p)),
            CanvasOp::QuadTo(c, p) => write!(f, "quad {} {}", pt(*c), pt(*p)),
            CanvasOp::CurveTo(c1, c2, p) => write!(f, "curve {} {} {}", pt(*c1), pt(*c2), pt(*p)),
            CanvasOp::Close => f.write_str("close"),
            CanvasOp::End => f.write_str("end"),
            CanvasOp::Fill => f.write_str("fill"),
            CanvasOp::Stroke => f.write_str("stroke"),
            CanvasOp::FillAndStroke => f.write_str("fill-stroke"),
            CanvasOp::Rect(r) => write!(f, "rect {r}"),
            CanvasOp::RoundRect(r, d) => write!(f, "round-rect {r} {}", pt(*d)),
        }
    }
}

//! SVG output for painted shapes.

use std::fmt::Write as _;

use glam::{DAffine2, dvec2};

use super::{Canvas, Gradient, rotation_transform};
use crate::defaults;
use crate::types::Direction;

#[derive(Debug, Clone)]
struct State {
    transform: DAffine2,
    alpha: f64,
    fill_alpha: f64,
    stroke_alpha: f64,
    fill: Option<String>,
    gradient: Option<Gradient>,
    stroke: Option<String>,
    stroke_width: f64,
    dashed: bool,
    shadow: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            transform: DAffine2::IDENTITY,
            alpha: 1.0,
            fill_alpha: 1.0,
            stroke_alpha: 1.0,
            fill: None,
            gradient: None,
            stroke: Some(defaults::DEFAULT_STROKE_COLOR.to_string()),
            stroke_width: defaults::STROKE_WIDTH,
            dashed: false,
            shadow: false,
        }
    }
}

/// Canvas that writes each painted path as an SVG `<path>` element.
#[derive(Debug, Default)]
pub struct SvgCanvas {
    state: State,
    stack: Vec<State>,
    path: String,
    defs: Vec<String>,
    body: Vec<String>,
}

/// Format a coordinate with at most two decimals.
fn num(v: f64) -> String {
    let rounded = (v * 100.0).round() / 100.0 + 0.0;
    format!("{rounded}")
}

/// Escape text for use inside a double-quoted attribute.
fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

impl SvgCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// The `<path>` elements written so far.
    pub fn elements(&self) -> &[String] {
        &self.body
    }

    /// Wrap everything painted so far in an `<svg>` document.
    pub fn finish(self, width: f64, height: f64) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = num(width),
            h = num(height)
        );
        if !self.defs.is_empty() {
            out.push_str("<defs>");
            for def in &self.defs {
                out.push_str(def);
            }
            out.push_str("</defs>");
        }
        for element in &self.body {
            out.push_str(element);
        }
        out.push_str("</svg>");
        out
    }

    fn point(&self, x: f64, y: f64) -> String {
        let p = self.state.transform.transform_point2(dvec2(x, y));
        format!("{} {}", num(p.x), num(p.y))
    }

    fn push_cmd(&mut self, cmd: &str, points: &[(f64, f64)]) {
        if !self.path.is_empty() {
            self.path.push(' ');
        }
        self.path.push_str(cmd);
        for &(x, y) in points {
            self.path.push(' ');
            let p = self.point(x, y);
            self.path.push_str(&p);
        }
    }

    fn gradient_ref(&mut self, g: &Gradient) -> String {
        let id = format!("gradient-{}", self.defs.len());
        let (x1, y1, x2, y2) = match g.direction {
            Direction::South => ("0%", "0%", "0%", "100%"),
            Direction::North => ("0%", "100%", "0%", "0%"),
            Direction::East => ("0%", "0%", "100%", "0%"),
            Direction::West => ("100%", "0%", "0%", "0%"),
        };
        self.defs.push(format!(
            r#"<linearGradient id="{id}" x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}"><stop offset="0%" stop-color="{}" stop-opacity="{}"/><stop offset="100%" stop-color="{}" stop-opacity="{}"/></linearGradient>"#,
            escape_attr(&g.color1),
            num(g.alpha1),
            escape_attr(&g.color2),
            num(g.alpha2)
        ));
        format!("url(#{id})")
    }

    fn paint(&mut self, fill: bool, stroke: bool) {
        if self.path.is_empty() {
            return;
        }
        let d = std::mem::take(&mut self.path);

        let fill_attr = if fill {
            match self.state.gradient.clone() {
                Some(g) => Some(self.gradient_ref(&g)),
                None => self.state.fill.as_deref().map(escape_attr),
            }
        } else {
            None
        };
        let stroke_attr = if stroke {
            self.state.stroke.as_deref().map(escape_attr)
        } else {
            None
        };
        if fill_attr.is_none() && stroke_attr.is_none() {
            return;
        }

        if self.state.shadow {
            let shadow_fill = if fill_attr.is_some() { defaults::SHADOW_COLOR } else { "none" };
            let shadow_stroke = if stroke_attr.is_some() { defaults::SHADOW_COLOR } else { "none" };
            self.body.push(format!(
                r#"<path d="{d}" fill="{shadow_fill}" stroke="{shadow_stroke}" stroke-width="{}" opacity="{}" transform="translate({},{})"/>"#,
                num(self.state.stroke_width),
                num(defaults::SHADOW_OPACITY * self.state.alpha),
                num(defaults::SHADOW_OFFSET_X),
                num(defaults::SHADOW_OFFSET_Y)
            ));
        }

        let mut element = format!(
            r#"<path d="{d}" fill="{}""#,
            fill_attr.as_deref().unwrap_or("none")
        );
        let fill_opacity = self.state.alpha * self.state.fill_alpha;
        if fill_attr.is_some() && fill_opacity < 1.0 {
            let _ = write!(element, r#" fill-opacity="{}""#, num(fill_opacity));
        }
        match &stroke_attr {
            Some(color) => {
                let _ = write!(
                    element,
                    r#" stroke="{color}" stroke-width="{}""#,
                    num(self.state.stroke_width)
                );
                let stroke_opacity = self.state.alpha * self.state.stroke_alpha;
                if stroke_opacity < 1.0 {
                    let _ = write!(element, r#" stroke-opacity="{}""#, num(stroke_opacity));
                }
                if self.state.dashed {
                    let dash = num(3.0 * self.state.stroke_width);
                    let _ = write!(element, r#" stroke-dasharray="{dash} {dash}""#);
                }
            }
            None => element.push_str(r#" stroke="none""#),
        }
        element.push_str("/>");
        self.body.push(element);
    }
}

impl Canvas for SvgCanvas {
    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.state.transform = self.state.transform * DAffine2::from_translation(dvec2(dx, dy));
    }

    fn rotate(&mut self, theta: f64, flip_h: bool, flip_v: bool, cx: f64, cy: f64) {
        self.state.transform =
            self.state.transform * rotation_transform(theta, flip_h, flip_v, dvec2(cx, cy));
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.state.alpha = alpha;
    }

    fn set_fill_alpha(&mut self, alpha: f64) {
        self.state.fill_alpha = alpha;
    }

    fn set_stroke_alpha(&mut self, alpha: f64) {
        self.state.stroke_alpha = alpha;
    }

    fn set_fill_color(&mut self, color: Option<&str>) {
        self.state.fill = color.map(str::to_string);
        self.state.gradient = None;
    }

    fn set_gradient(&mut self, gradient: &Gradient) {
        self.state.fill = Some(gradient.color1.clone());
        self.state.gradient = Some(gradient.clone());
    }

    fn set_stroke_color(&mut self, color: Option<&str>) {
        self.state.stroke = color.map(str::to_string);
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.state.stroke_width = width;
    }

    fn set_dashed(&mut self, dashed: bool) {
        self.state.dashed = dashed;
    }

    fn set_shadow(&mut self, enabled: bool) {
        self.state.shadow = enabled;
    }

    fn begin(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push_cmd("M", &[(x, y)]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push_cmd("L", &[(x, y)]);
    }

    fn quad_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.push_cmd("Q", &[(x1, y1), (x2, y2)]);
    }

    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        self.push_cmd("C", &[(x1, y1), (x2, y2), (x3, y3)]);
    }

    fn close(&mut self) {
        self.push_cmd("Z", &[]);
    }

    fn end(&mut self) {}

    fn fill(&mut self) {
        self.paint(true, false);
    }

    fn stroke(&mut self) {
        self.paint(false, true);
    }

    fn fill_and_stroke(&mut self) {
        self.paint(true, true);
    }
}

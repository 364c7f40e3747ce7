//! Geometry value types shared by shapes, canvases and the renderer.

use std::fmt;
use std::str::FromStr;

/// Axis-aligned rectangle, used for cell bounds and label bounds.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Scale every component, as done when mapping model bounds to the view.
    pub fn scaled(self, scale: f64) -> Self {
        Self::new(
            self.x * scale,
            self.y * scale,
            self.width * scale,
            self.height * scale,
        )
    }

    /// True when every component is a finite number.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.width, self.height)
    }
}

/// Orientation of a shape's content. A shape without a direction behaves as east.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    East,
    West,
    North,
    South,
}

impl Direction {
    /// Whether text flows horizontally for this (optional) direction.
    pub fn is_horizontal(direction: Option<Direction>) -> bool {
        matches!(direction, None | Some(Direction::East) | Some(Direction::West))
    }
}

impl FromStr for Direction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "east" => Ok(Direction::East),
            "west" => Ok(Direction::West),
            "north" => Ok(Direction::North),
            "south" => Ok(Direction::South),
            _ => Err(()),
        }
    }
}

/// Clamp `value` into `[lo, hi]`.
///
/// Unlike `f64::clamp` this never panics: an empty range collapses to `lo`,
/// and a NaN `value` also resolves to `lo`.
#[inline]
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() || hi < lo {
        return lo;
    }
    value.max(lo).min(hi)
}

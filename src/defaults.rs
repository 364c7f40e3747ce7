//! Style keys and compiled-in defaults shared by every shape.

/// Style keys understood by the built-in shapes and the renderer.
pub mod keys {
    pub const SHAPE: &str = "shape";
    pub const SIZE: &str = "size";
    pub const FIXED_SIZE: &str = "fixedSize";
    pub const DARK_OPACITY: &str = "darkOpacity";
    pub const DARK_OPACITY2: &str = "darkOpacity2";
    pub const BOUNDED_LBL: &str = "boundedLbl";
    pub const HORIZONTAL: &str = "horizontal";
    pub const DIRECTION: &str = "direction";
    pub const ROUNDED: &str = "rounded";
    pub const ARC_SIZE: &str = "arcSize";
    pub const ABSOLUTE_ARC_SIZE: &str = "absoluteArcSize";
    pub const GLASS: &str = "glass";
    pub const FLIP_H: &str = "flipH";
    pub const FLIP_V: &str = "flipV";
    pub const BACKGROUND_OUTLINE: &str = "backgroundOutline";
    pub const FILL_COLOR: &str = "fillColor";
    pub const GRADIENT_COLOR: &str = "gradientColor";
    pub const GRADIENT_DIRECTION: &str = "gradientDirection";
    pub const STROKE_COLOR: &str = "strokeColor";
    pub const STROKE_WIDTH: &str = "strokeWidth";
    pub const OPACITY: &str = "opacity";
    pub const FILL_OPACITY: &str = "fillOpacity";
    pub const STROKE_OPACITY: &str = "strokeOpacity";
    pub const DASHED: &str = "dashed";
    pub const SHADOW: &str = "shadow";
}

/// Shape type names registered by `Renderer::new`.
pub mod names {
    pub const RECTANGLE: &str = "rectangle";
    pub const CYLINDER: &str = "cylinder";
    pub const CUBE: &str = "cube";
    pub const PROCESS: &str = "process";
}

/// Color keyword meaning "paint nothing".
pub const NONE: &str = "none";

pub const CUBE_SIZE: f64 = 20.0;
pub const CUBE_DARK_OPACITY: f64 = 0.0;
pub const CUBE_DARK_OPACITY2: f64 = 0.0;
pub const PROCESS_SIZE: f64 = 0.1;
pub const PROCESS_FIXED_SIZE: bool = false;

/// Corner radius as a fraction of the smaller side for rounded rectangles.
pub const RECTANGLE_ROUNDING_FACTOR: f64 = 0.15;
/// Corner diameter used when `absoluteArcSize` is set.
pub const LINE_ARCSIZE: f64 = 20.0;
pub const CYLINDER_MAX_HEIGHT: f64 = 40.0;

pub const STROKE_WIDTH: f64 = 1.0;
pub const SHADOW_OFFSET_X: f64 = 2.0;
pub const SHADOW_OFFSET_Y: f64 = 3.0;
pub const SHADOW_COLOR: &str = "gray";
pub const SHADOW_OPACITY: f64 = 1.0;

pub const DEFAULT_FILL_COLOR: &str = "#FFFFFF";
pub const DEFAULT_STROKE_COLOR: &str = "#000000";

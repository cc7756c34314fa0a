// File: crates/radar-core/src/types.rs
// Summary: Shared types and constants (surface sizing, chart geometry).

/// Largest allowed surface side length in pixels.
pub const MAX_SIDE: f32 = 500.0;
/// Outer radius as a fraction of the surface side.
pub const OUTER_RADIUS_RATIO: f32 = 0.4;
/// Number of concentric background rings.
pub const RING_COUNT: usize = 4;
/// Side length of the filled square marker on each outer-ring vertex.
pub const MARKER_SIZE: f32 = 6.0;
/// Label font size in pixels.
pub const LABEL_FONT_SIZE: f32 = 18.0;
/// Horizontal gap between an outer vertex and its label, in pixels.
pub const LABEL_GAP: f32 = 5.0;
/// Stroke width of the background grid and spokes.
pub const GRID_STROKE_WIDTH: f32 = 1.0;
/// Stroke width of the data polygon.
pub const POLYGON_STROKE_WIDTH: f32 = 2.0;

/// A point on the drawing surface, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned rectangle, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Square of side `size` centered on `center`. Used for vertex markers.
    pub fn centered_square(center: Point, size: f32) -> Self {
        Self::from_xywh(center.x - size / 2.0, center.y - size / 2.0, size, size)
    }
}

/// Resize contract: the surface is square, sized to the container width and
/// capped at [`MAX_SIDE`].
pub fn fit_side(container_width: f32) -> f32 {
    container_width.clamp(0.0, MAX_SIDE)
}

// File: crates/radar-core/src/layout.rs
// Summary: Polar layout: sector angles, ring and polygon vertices, label anchoring.

use crate::types::{Point, LABEL_FONT_SIZE, LABEL_GAP, OUTER_RADIUS_RATIO, RING_COUNT};

/// Geometry of one radar chart on a square surface of side `side`:
/// center, outer radius, and the angular position of each of the `n` sectors.
#[derive(Clone, Debug)]
pub struct RadarLayout {
    pub side: f32,
    pub center: Point,
    pub outer_radius: f32,
    angles: Vec<f32>,
}

impl RadarLayout {
    pub fn new(side: f32, n: usize) -> Self {
        Self {
            side,
            center: Point::new(side / 2.0, side / 2.0),
            outer_radius: side * OUTER_RADIUS_RATIO,
            angles: sector_angles(n),
        }
    }

    /// Angular positions in degrees, clockwise from north.
    pub fn angles(&self) -> &[f32] {
        &self.angles
    }

    /// Point at `angle_deg` (clockwise from north) and `radius` from center.
    #[inline]
    pub fn point_at(&self, angle_deg: f32, radius: f32) -> Point {
        let rad = angle_deg.to_radians();
        Point::new(
            self.center.x + rad.sin() * radius,
            self.center.y - rad.cos() * radius,
        )
    }

    /// Vertices of background ring `k`, for `k` in `1..=RING_COUNT`;
    /// `k == RING_COUNT` is the outermost ring at the full outer radius.
    pub fn ring(&self, k: usize) -> Vec<Point> {
        debug_assert!(k >= 1 && k <= RING_COUNT);
        let radius = self.outer_radius * (k as f32 / RING_COUNT as f32);
        self.angles.iter().map(|&a| self.point_at(a, radius)).collect()
    }

    /// Vertices of the outermost ring, where markers and labels sit.
    pub fn outer_vertices(&self) -> Vec<Point> {
        self.ring(RING_COUNT)
    }

    /// Data polygon vertices: vertex `i` at radius
    /// `outer_radius * values[i] / divisor`, same angle as sector `i`.
    /// Caller guarantees `divisor > 0` and `values.len() == n`.
    pub fn polygon(&self, values: &[f64], divisor: f64) -> Vec<Point> {
        debug_assert_eq!(values.len(), self.angles.len());
        self.angles
            .iter()
            .zip(values)
            .map(|(&a, &v)| self.point_at(a, self.outer_radius * (v / divisor) as f32))
            .collect()
    }
}

/// Evenly spaced sector angles for `n` points: `i * 360 / n` degrees,
/// starting at north.
pub fn sector_angles(n: usize) -> Vec<f32> {
    (0..n).map(|i| i as f32 * (360.0 / n as f32)).collect()
}

/// Which side of its vertex a label is laid out on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelAlign {
    /// Vertex on the right half: text starts right of the vertex.
    Right,
    /// Vertex on the left half: text ends left of the vertex.
    Left,
    /// Vertex exactly on the vertical center line: text centered on it.
    Center,
}

/// Pick the label side from the vertex x. The x is rounded first so the
/// float noise at the exact top/bottom vertices still resolves to center.
pub fn label_align(vertex_x: f32, center_x: f32) -> LabelAlign {
    let d = vertex_x.round() - center_x;
    if d > 0.0 {
        LabelAlign::Right
    } else if d < 0.0 {
        LabelAlign::Left
    } else {
        LabelAlign::Center
    }
}

/// Baseline origin for a label of measured `text_width` at an outer `vertex`.
/// The vertical offset grows with the vertex's distance from the center line
/// so top/bottom labels clear the vertex markers; the formula is kept as-is
/// for visual parity with the established layout.
pub fn label_origin(vertex: Point, layout: &RadarLayout, text_width: f32) -> Point {
    let x = match label_align(vertex.x, layout.center.x) {
        LabelAlign::Right => vertex.x + LABEL_GAP,
        LabelAlign::Left => vertex.x - text_width - LABEL_GAP,
        LabelAlign::Center => vertex.x - text_width / 2.0,
    };
    let dy = (vertex.y - layout.center.y) / (layout.side / (LABEL_FONT_SIZE * 2.0))
        + LABEL_FONT_SIZE * 0.25;
    Point::new(x, vertex.y + dy)
}

// File: crates/radar-core/src/chart.rs
// Summary: RadarChart model and the render pipeline over an abstract surface.

use crate::data::DataSet;
use crate::layout::{label_origin, RadarLayout};
use crate::surface::{Path, Stroke, Surface};
use crate::theme::Theme;
use crate::types::{
    Point, Rect, GRID_STROKE_WIDTH, LABEL_FONT_SIZE, MARKER_SIZE, MAX_SIDE,
    POLYGON_STROKE_WIDTH, RING_COUNT,
};

/// Per-render settings: surface side, theme, label toggle.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Side length of the square surface, in pixels.
    pub side: f32,
    pub theme: Theme,
    /// Disable to render without text (pixel tests avoid font variance).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            side: MAX_SIDE,
            theme: Theme::classic(),
            draw_labels: true,
        }
    }
}

/// A radar chart over a validated dataset plus its normalization mode.
#[derive(Clone, Debug)]
pub struct RadarChart {
    pub data: DataSet,
    /// `true`: divisor is the maximum value; `false`: the sum of values.
    pub by_max: bool,
}

impl RadarChart {
    pub fn new(data: DataSet) -> Self {
        Self { data, by_max: false }
    }

    pub fn with_by_max(mut self, by_max: bool) -> Self {
        self.by_max = by_max;
        self
    }

    /// Whether a render call will actually paint: requires a nonzero divisor.
    /// An all-zero dataset is valid but not drawable.
    pub fn is_drawable(&self) -> bool {
        self.data.divisor(self.by_max).is_some()
    }

    /// Repaint the whole surface: clear, background grid with spokes and
    /// vertex markers, data polygon, then labels. A full no-op when the
    /// dataset is not drawable, so a frame is never partially painted.
    pub fn render(&self, opts: &RenderOptions, surface: &mut dyn Surface) {
        let Some(divisor) = self.data.divisor(self.by_max) else {
            return;
        };
        let layout = RadarLayout::new(opts.side, self.data.len());

        surface.clear(opts.theme.background);
        draw_grid(surface, &layout, &opts.theme);

        let values: Vec<f64> = self.data.values().collect();
        draw_polygon(surface, &layout, &values, divisor, &opts.theme);

        if opts.draw_labels {
            draw_labels(surface, &layout, &self.data, &opts.theme);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(surface: &mut dyn Surface, layout: &RadarLayout, theme: &Theme) {
    let outer = layout.outer_vertices();

    // Square markers on the outermost ring, drawn before the strokes.
    for &v in &outer {
        surface.fill_rect(Rect::centered_square(v, MARKER_SIZE), theme.marker);
    }

    // Spokes and all rings stroked as one path.
    let mut path = Path::new();
    for &v in &outer {
        path.move_to(layout.center);
        path.line_to(v);
    }
    for k in 1..=RING_COUNT {
        path.add_polygon(&layout.ring(k));
    }
    surface.stroke_path(
        &path,
        Stroke {
            color: theme.grid,
            width: GRID_STROKE_WIDTH,
        },
    );
}

fn draw_polygon(
    surface: &mut dyn Surface,
    layout: &RadarLayout,
    values: &[f64],
    divisor: f64,
    theme: &Theme,
) {
    let mut path = Path::new();
    path.add_polygon(&layout.polygon(values, divisor));
    surface.stroke_path(
        &path,
        Stroke {
            color: theme.polygon,
            width: POLYGON_STROKE_WIDTH,
        },
    );
}

fn draw_labels(surface: &mut dyn Surface, layout: &RadarLayout, data: &DataSet, theme: &Theme) {
    for (&vertex, point) in layout.outer_vertices().iter().zip(data.points()) {
        let width = surface.measure_text(&point.label, LABEL_FONT_SIZE);
        let origin: Point = label_origin(vertex, layout, width);
        surface.fill_text(&point.label, origin, LABEL_FONT_SIZE, theme.label);
    }
}

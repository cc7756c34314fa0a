// File: crates/radar-core/src/surface.rs
// Summary: Drawing-surface abstraction: primitive call set, paths, command recorder.

use crate::theme::Color;
use crate::types::{Point, Rect};

/// One path segment. Paths are polygonal only: move, line, close.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// A stroke-able path built from move/line/close commands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    cmds: Vec<PathCmd>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.cmds.push(PathCmd::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.cmds.push(PathCmd::LineTo(p));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.cmds.push(PathCmd::Close);
        self
    }

    /// Append a closed polygon through `vertices` (no-op for empty input).
    pub fn add_polygon(&mut self, vertices: &[Point]) -> &mut Self {
        let Some((first, rest)) = vertices.split_first() else {
            return self;
        };
        self.move_to(*first);
        for &v in rest {
            self.line_to(v);
        }
        self.line_to(*first);
        self
    }

    pub fn cmds(&self) -> &[PathCmd] {
        &self.cmds
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }
}

/// Stroke style for a path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

/// The minimal 2D call set the renderer needs from a backend: clear, filled
/// rects, stroked paths, filled text, and text-width measurement. One render
/// call issues these in a deterministic order, starting with `clear`.
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_path(&mut self, path: &Path, stroke: Stroke);
    fn fill_text(&mut self, text: &str, origin: Point, size: f32, color: Color);
    /// Width of `text` when rendered at font `size`.
    fn measure_text(&self, text: &str, size: f32) -> f32;
}

/// One recorded drawing command.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Clear { color: Color },
    FillRect { rect: Rect, color: Color },
    StrokePath { path: Path, stroke: Stroke },
    FillText { text: String, origin: Point, size: f32, color: Color },
}

/// A surface that records the command sequence instead of rasterizing.
/// Text measurement is a fixed per-glyph advance so recorded label positions
/// are deterministic without a font stack.
#[derive(Debug, Default)]
pub struct Recorder {
    commands: Vec<DrawCmd>,
}

impl Recorder {
    /// Width of one glyph as a fraction of the font size.
    pub const GLYPH_ADVANCE: f32 = 0.6;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Surface for Recorder {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCmd::Clear { color });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCmd::FillRect { rect, color });
    }

    fn stroke_path(&mut self, path: &Path, stroke: Stroke) {
        self.commands.push(DrawCmd::StrokePath {
            path: path.clone(),
            stroke,
        });
    }

    fn fill_text(&mut self, text: &str, origin: Point, size: f32, color: Color) {
        self.commands.push(DrawCmd::FillText {
            text: text.to_owned(),
            origin,
            size,
            color,
        });
    }

    fn measure_text(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * Self::GLYPH_ADVANCE
    }
}

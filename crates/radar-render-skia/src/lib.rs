// File: crates/radar-render-skia/src/lib.rs
// Summary: Skia CPU raster backend for the radar chart Surface trait, plus
//          headless PNG/RGBA entry points.

use anyhow::Result;
use skia_safe as skia;

use radar_core::surface::{Path, PathCmd, Stroke, Surface};
use radar_core::theme::Color;
use radar_core::types::{Point, Rect};
use radar_core::{RadarChart, RenderOptions};

/// A square CPU raster surface backed by Skia. Implements the core `Surface`
/// call set; labels use the default typeface at the requested size.
pub struct RasterSurface {
    surface: skia::Surface,
    side: i32,
}

impl RasterSurface {
    /// Allocate a `side` x `side` premultiplied N32 raster surface.
    pub fn new(side: f32) -> Result<Self> {
        let px = side.round().max(1.0) as i32;
        let surface = skia::surfaces::raster_n32_premul((px, px))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        Ok(Self { surface, side: px })
    }

    pub fn side(&self) -> i32 {
        self.side
    }

    /// Encode the current pixels as PNG bytes.
    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Copy the current pixels out as tightly packed RGBA8.
    /// Returns `(pixels, width, height, stride)`.
    pub fn rgba8(&mut self) -> Result<(Vec<u8>, i32, i32, usize)> {
        let (w, h) = (self.side, self.side);
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((pixels, w, h, stride))
    }
}

impl Surface for RasterSurface {
    fn clear(&mut self, color: Color) {
        self.surface.canvas().clear(to_skia_color(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(to_skia_color(color));
        paint.set_style(skia::paint::Style::Fill);
        self.surface.canvas().draw_rect(to_skia_rect(rect), &paint);
    }

    fn stroke_path(&mut self, path: &Path, stroke: Stroke) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(stroke.width);
        paint.set_color(to_skia_color(stroke.color));
        self.surface.canvas().draw_path(&to_skia_path(path), &paint);
    }

    fn fill_text(&mut self, text: &str, origin: Point, size: f32, color: Color) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(to_skia_color(color));
        let font = label_font(size);
        self.surface
            .canvas()
            .draw_str(text, (origin.x, origin.y), &font, &paint);
    }

    fn measure_text(&self, text: &str, size: f32) -> f32 {
        let font = label_font(size);
        let (width, _bounds) = font.measure_str(text, None);
        width
    }
}

/// Render `chart` and write a PNG at `output_png_path`.
pub fn render_to_png(
    chart: &RadarChart,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_to_png_bytes(chart, opts)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}

/// Render `chart` and return the encoded PNG bytes.
pub fn render_to_png_bytes(chart: &RadarChart, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = RasterSurface::new(opts.side)?;
    chart.render(opts, &mut surface);
    surface.png_bytes()
}

/// Render `chart` and return the raw RGBA8 pixels as
/// `(pixels, width, height, stride)`.
pub fn render_to_rgba8(
    chart: &RadarChart,
    opts: &RenderOptions,
) -> Result<(Vec<u8>, i32, i32, usize)> {
    let mut surface = RasterSurface::new(opts.side)?;
    chart.render(opts, &mut surface);
    surface.rgba8()
}

// ---- helpers ----------------------------------------------------------------

fn label_font(size: f32) -> skia::Font {
    let mut font = skia::Font::default();
    font.set_size(size.max(1.0));
    font
}

fn to_skia_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_skia_rect(r: Rect) -> skia::Rect {
    skia::Rect::from_xywh(r.x, r.y, r.width, r.height)
}

fn to_skia_path(path: &Path) -> skia::Path {
    let mut out = skia::Path::new();
    for cmd in path.cmds() {
        match *cmd {
            PathCmd::MoveTo(p) => {
                out.move_to((p.x, p.y));
            }
            PathCmd::LineTo(p) => {
                out.line_to((p.x, p.y));
            }
            PathCmd::Close => {
                out.close();
            }
        }
    }
    out
}

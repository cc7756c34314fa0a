// File: crates/radar-demo/src/main.rs
// Summary: Demo loads label/value CSV rows and renders radar chart PNGs in
//          both normalization modes and at a resized surface.

use anyhow::{Context, Result};
use radar_core::{fit_side, theme, ChartItem, Editor, RenderOptions};
use radar_render_skia::render_to_png;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Accept a CSV path from the CLI or fall back to the bundled sample.
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("crates/radar-demo/data/sample.csv"));

    let items = load_items_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Using input file: {}", path.display());
    println!("Loaded {} rows", items.len());

    // Feed the rows through the editor, the same path an input form takes.
    let mut editor = Editor::new();
    for (i, item) in items.iter().enumerate() {
        let id = if i == 0 { editor.rows()[0].id } else { editor.add_row() };
        editor.set_label(id, &item.label);
        let raw = match item.value {
            Some(v) => format!("{v:.0}"),
            None => String::new(),
        };
        editor.set_value(id, &raw);
    }
    if !editor.can_draw() {
        anyhow::bail!("input is not drawable: need >= 2 rows, all values numeric, not all zero");
    }

    let out_dir = PathBuf::from("target/out");

    // 1) Normalized by the sum of values (default)
    let chart = editor.chart().context("chart for sum mode")?;
    let opts = RenderOptions::default();
    let out = out_dir.join("radar_sum.png");
    render_to_png(&chart, &opts, &out)?;
    println!("Wrote {}", out.display());

    // 2) Normalized by the maximum value
    editor.toggle_by_max();
    let chart = editor.chart().context("chart for max mode")?;
    let out = out_dir.join("radar_max.png");
    render_to_png(&chart, &opts, &out)?;
    println!("Wrote {}", out.display());

    // 3) Resized surface: a 300-unit container, same data
    let opts = RenderOptions {
        side: fit_side(300.0),
        ..RenderOptions::default()
    };
    let out = out_dir.join("radar_max_300.png");
    render_to_png(&chart, &opts, &out)?;
    println!("Wrote {}", out.display());

    // 4) Dark theme variant
    let opts = RenderOptions {
        theme: theme::find("dark"),
        ..RenderOptions::default()
    };
    let out = out_dir.join("radar_max_dark.png");
    render_to_png(&chart, &opts, &out)?;
    println!("Wrote {}", out.display());

    Ok(())
}

/// Read `label,value` rows (with a header line) into chart items. Values are
/// parsed with the chart's own rule, so bad cells become absent values and
/// surface later as a non-drawable editor state.
fn load_items_csv(path: &Path) -> Result<Vec<ChartItem>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let mut items = Vec::new();
    for record in reader.records() {
        let record = record?;
        let label = record.get(0).unwrap_or("");
        let value = record.get(1).unwrap_or("");
        items.push(ChartItem::parse(label, value));
    }
    Ok(items)
}

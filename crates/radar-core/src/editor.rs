// File: crates/radar-core/src/editor.rs
// Summary: Headless data-editor state: rows of raw text, validity, draw gate.

use crate::chart::RadarChart;
use crate::data::{self, ChartItem, DataSet};

/// One editable row: raw text fields as the user typed them, plus a stable id
/// so rows can be removed without disturbing their order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorRow {
    pub id: u64,
    pub label: String,
    pub value: String,
}

/// Editor state for the chart's input form. Every mutation replaces the
/// derived item list wholesale; nothing downstream aliases the rows.
#[derive(Clone, Debug)]
pub struct Editor {
    rows: Vec<EditorRow>,
    next_id: u64,
    pub by_max: bool,
}

impl Editor {
    /// A new editor starts with a single empty row.
    pub fn new() -> Self {
        let mut editor = Self {
            rows: Vec::new(),
            next_id: 1,
            by_max: false,
        };
        editor.add_row();
        editor
    }

    pub fn rows(&self) -> &[EditorRow] {
        &self.rows
    }

    /// Append an empty row and return its id.
    pub fn add_row(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push(EditorRow {
            id,
            label: String::new(),
            value: "0".to_owned(),
        });
        id
    }

    /// Remove the row with `id`; unknown ids are ignored.
    pub fn remove_row(&mut self, id: u64) {
        self.rows.retain(|row| row.id != id);
    }

    pub fn set_label(&mut self, id: u64, label: &str) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == id) {
            label.clone_into(&mut row.label);
        }
    }

    pub fn set_value(&mut self, id: u64, value: &str) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == id) {
            value.clone_into(&mut row.value);
        }
    }

    pub fn toggle_by_max(&mut self) {
        self.by_max = !self.by_max;
    }

    /// Current rows parsed into chart items, in entry order.
    pub fn snapshot(&self) -> Vec<ChartItem> {
        self.rows
            .iter()
            .map(|row| ChartItem::parse(&row.label, &row.value))
            .collect()
    }

    /// Validity invariant: at least two rows, every value parseable.
    pub fn is_valid(&self) -> bool {
        data::is_valid(&self.snapshot())
    }

    /// Gate for the draw action: valid and with a nonzero divisor, so a
    /// triggered render always paints.
    pub fn can_draw(&self) -> bool {
        self.chart().is_some()
    }

    /// Build the chart for the current state, or `None` when it would not
    /// draw anything.
    pub fn chart(&self) -> Option<RadarChart> {
        let data = DataSet::new(&self.snapshot()).ok()?;
        let chart = RadarChart::new(data).with_by_max(self.by_max);
        chart.is_drawable().then_some(chart)
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

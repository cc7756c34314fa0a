// File: crates/radar-core/src/data.rs
// Summary: Data model: editable items, value parsing, validated datasets, divisor.
// Notes:
// - A value that fails to parse is an explicit absence (`None`), never zero.
//   One absent value makes the whole list non-drawable.
// - `DataSet::new` enforces the validity invariant so rendering code only
//   ever sees defined, non-negative values.

use thiserror::Error;

/// Errors raised while turning editor items into a drawable dataset.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("at least two data points are required, got {0}")]
    TooFewPoints(usize),
    #[error("data point {index} has no numeric value")]
    UndefinedValue { index: usize },
}

/// One item as produced by the editor: a label plus a parsed value, where
/// `None` marks unparseable input.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartItem {
    pub label: String,
    pub value: Option<f64>,
}

impl ChartItem {
    /// Build an item from raw text fields, parsing the value.
    pub fn parse(label: &str, raw_value: &str) -> Self {
        Self {
            label: label.to_owned(),
            value: parse_value(raw_value),
        }
    }
}

/// Parse a value string to a non-negative integer, or `None` when the text is
/// empty, non-numeric, or negative (negative values are out of the chart's
/// domain).
pub fn parse_value(raw: &str) -> Option<f64> {
    match raw.trim().parse::<i64>() {
        Ok(v) if v >= 0 => Some(v as f64),
        _ => None,
    }
}

/// Validity invariant: at least two items and every value defined.
pub fn is_valid(items: &[ChartItem]) -> bool {
    items.len() >= 2 && items.iter().all(|item| item.value.is_some())
}

/// A single labeled, defined value.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

/// A validated, ordered list of data points. Order determines angular
/// position, so it is preserved exactly as entered.
#[derive(Clone, Debug, PartialEq)]
pub struct DataSet {
    points: Vec<DataPoint>,
}

impl DataSet {
    /// Validate `items` into a dataset, rejecting short or incomplete lists.
    pub fn new(items: &[ChartItem]) -> Result<Self, DataError> {
        if items.len() < 2 {
            return Err(DataError::TooFewPoints(items.len()));
        }
        let mut points = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let value = item.value.ok_or(DataError::UndefinedValue { index })?;
            points.push(DataPoint {
                label: item.label.clone(),
                value,
            });
        }
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    /// Normalization denominator: `max(values)` when `by_max`, otherwise
    /// `sum(values)`. Returns `None` when the result would be zero (all
    /// values zero), which marks the dataset as non-drawable.
    pub fn divisor(&self, by_max: bool) -> Option<f64> {
        let d = if by_max {
            self.values().fold(0.0f64, f64::max)
        } else {
            self.values().sum()
        };
        if d > 0.0 { Some(d) } else { None }
    }
}

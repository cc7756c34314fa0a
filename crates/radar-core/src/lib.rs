// File: crates/radar-core/src/lib.rs
// Summary: Core library entry point; exports the radar chart API.

pub mod chart;
pub mod data;
pub mod editor;
pub mod layout;
pub mod surface;
pub mod theme;
pub mod types;

pub use chart::{RadarChart, RenderOptions};
pub use data::{ChartItem, DataError, DataPoint, DataSet};
pub use editor::{Editor, EditorRow};
pub use layout::{LabelAlign, RadarLayout};
pub use surface::{DrawCmd, Path, Recorder, Stroke, Surface};
pub use theme::{Color, Theme};
pub use types::{fit_side, Point, Rect};

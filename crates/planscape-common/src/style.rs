//! Raster style descriptors.
//!
//! A style descriptor is produced by the backend's layer-styling API and
//! describes how raw raster pixel values map to display colors:
//!
//! ```json
//! {
//!   "map_type": "INTERVALS",
//!   "entries": [
//!     {"value": 10, "color": "#ffffcc", "label": "Low"},
//!     {"value": 20, "color": "#41b6c4", "opacity": 0.8}
//!   ],
//!   "no_data": {"values": [-9999]}
//! }
//! ```
//!
//! Descriptors are read-only inputs; nothing in this workspace mutates them.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::PlanscapeResult;

/// How entry values are matched against pixel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MapType {
    /// Exact value match
    Values,
    /// Step function over ascending thresholds
    Intervals,
    /// Continuous interpolation between entries
    Ramp,
    /// Anything the backend sends that we don't recognize
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for MapType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MapType::Values => "VALUES",
            MapType::Intervals => "INTERVALS",
            MapType::Ramp => "RAMP",
            MapType::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}

/// A single color stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorEntry {
    /// Raw pixel value this entry applies to
    pub value: f64,

    /// CSS-like color string
    pub color: String,

    /// Opacity in [0, 1]; treated as 1.0 when absent
    #[serde(default)]
    pub opacity: Option<f64>,

    /// Optional label for legends
    #[serde(default)]
    pub label: Option<String>,
}

impl ColorEntry {
    pub fn new(value: f64, color: impl Into<String>) -> Self {
        Self {
            value,
            color: color.into(),
            opacity: None,
            label: None,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Opacity with the default applied.
    pub fn opacity_or_default(&self) -> f64 {
        self.opacity.unwrap_or(1.0)
    }
}

/// Pixel values that always render transparent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoData {
    #[serde(default)]
    pub values: Vec<f64>,
}

/// Complete styling for one raster layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDescriptor {
    pub map_type: MapType,

    #[serde(default)]
    pub entries: Vec<ColorEntry>,

    #[serde(default)]
    pub no_data: Option<NoData>,
}

impl StyleDescriptor {
    pub fn new(map_type: MapType, entries: Vec<ColorEntry>) -> Self {
        Self {
            map_type,
            entries,
            no_data: None,
        }
    }

    pub fn with_no_data(mut self, values: Vec<f64>) -> Self {
        self.no_data = Some(NoData { values });
        self
    }

    /// Parse a style descriptor from a JSON string.
    pub fn from_json(json: &str) -> PlanscapeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a style descriptor from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> PlanscapeResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Entries ordered ascending by value.
    ///
    /// The backend does not guarantee entry order. Uses IEEE total order:
    /// positive NaN sorts last, negative NaN first.
    pub fn sorted_entries(&self) -> Vec<ColorEntry> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| a.value.total_cmp(&b.value));
        entries
    }

    /// No-data values, empty when the descriptor has none.
    pub fn no_data_values(&self) -> &[f64] {
        self.no_data
            .as_ref()
            .map(|nd| nd.values.as_slice())
            .unwrap_or(&[])
    }
}

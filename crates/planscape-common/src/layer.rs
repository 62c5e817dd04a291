//! Data layer definitions as served by the Planscape backend.

use serde::{Deserialize, Serialize};

use crate::error::PlanscapeResult;
use crate::style::StyleDescriptor;

/// A raster data layer with its styling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataLayer {
    /// Backend identifier
    pub id: i64,

    /// Human-readable name
    pub name: String,

    /// How pixel values are colored
    pub style: StyleDescriptor,

    /// Descriptive metadata
    #[serde(default)]
    pub metadata: DataLayerMetadata,
}

/// Descriptive metadata for a data layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataLayerMetadata {
    /// Unit label for display, e.g. "tons/acre"
    #[serde(default)]
    pub units: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Data provider / citation
    #[serde(default)]
    pub source: Option<String>,
}

impl DataLayer {
    /// Parse a data layer from a JSON string.
    pub fn from_json(json: &str) -> PlanscapeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a data layer from a JSON file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> PlanscapeResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Title for legends: the name, with units in parentheses when known.
    pub fn display_title(&self) -> String {
        match self.metadata.units.as_deref() {
            Some(units) if !units.trim().is_empty() => format!("{} ({})", self.name, units),
            _ => self.name.clone(),
        }
    }
}

impl std::fmt::Display for DataLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.name, self.id)
    }
}

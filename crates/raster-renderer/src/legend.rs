//! Legend extraction for data layers.

use planscape_common::{DataLayer, MapType, PlanscapeResult};
use serde::Serialize;

use crate::color::parse_color;

/// Human-readable legend for a data layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: String,
    #[serde(rename = "type")]
    pub map_type: MapType,
    pub entries: Vec<LegendEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub color_hex: String,
    pub entry_label: String,
}

impl Legend {
    pub fn to_json(&self) -> PlanscapeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Build a legend from a layer's style entries, ascending by value.
pub fn extract_legend(layer: &DataLayer) -> Legend {
    let entries = layer
        .style
        .sorted_entries()
        .iter()
        .map(|entry| {
            let parsed = parse_color(&entry.color, 1.0);
            let color_hex = if parsed.is_transparent() {
                entry.color.clone()
            } else {
                parsed.to_hex()
            };

            let entry_label = entry
                .label
                .clone()
                .unwrap_or_else(|| format_value(entry.value));

            LegendEntry {
                color_hex,
                entry_label,
            }
        })
        .collect();

    Legend {
        title: layer.display_title(),
        map_type: layer.style.map_type,
        entries,
    }
}

/// `12.50` → "12.5", `3.0` → "3".
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(3.0), "3");
        assert_eq!(format_value(-40.0), "-40");
        assert_eq!(format_value(12.5), "12.5");
        assert_eq!(format_value(0.25), "0.25");
    }
}

//! Tests for legend extraction.

use planscape_common::{DataLayer, MapType};
use raster_renderer::{extract_legend, LegendEntry};

fn layer(json: &str) -> DataLayer {
    DataLayer::from_json(json).unwrap()
}

#[test]
fn test_legend_sorted_by_value() {
    let layer = layer(
        r##"{
            "id": 7,
            "name": "Probability of Fire",
            "style": {
                "map_type": "INTERVALS",
                "entries": [
                    {"value": 0.75, "color": "#BD0026", "label": "High"},
                    {"value": 0.25, "color": "#ffffb2", "label": "Low"},
                    {"value": 0.5, "color": "rgb(253, 141, 60)", "label": "Moderate"}
                ]
            }
        }"##,
    );

    let legend = extract_legend(&layer);

    assert_eq!(legend.title, "Probability of Fire");
    assert_eq!(legend.map_type, MapType::Intervals);
    assert_eq!(
        legend.entries,
        vec![
            LegendEntry {
                color_hex: "#ffffb2".to_string(),
                entry_label: "Low".to_string(),
            },
            LegendEntry {
                color_hex: "#fd8d3c".to_string(),
                entry_label: "Moderate".to_string(),
            },
            LegendEntry {
                color_hex: "#bd0026".to_string(),
                entry_label: "High".to_string(),
            },
        ]
    );
}

#[test]
fn test_legend_labels_default_to_values() {
    let layer = layer(
        r##"{
            "id": 1,
            "name": "Canopy Cover",
            "style": {
                "map_type": "RAMP",
                "entries": [
                    {"value": 100, "color": "darkgreen"},
                    {"value": 12.5, "color": "wheat"}
                ]
            },
            "metadata": {"units": "%"}
        }"##,
    );

    let legend = extract_legend(&layer);

    assert_eq!(legend.title, "Canopy Cover (%)");
    assert_eq!(legend.entries[0].entry_label, "12.5");
    assert_eq!(legend.entries[0].color_hex, "#f5deb3");
    assert_eq!(legend.entries[1].entry_label, "100");
    assert_eq!(legend.entries[1].color_hex, "#006400");
}

#[test]
fn test_legend_keeps_unparseable_color_text() {
    let layer = layer(
        r##"{
            "id": 2,
            "name": "Ownership",
            "style": {
                "map_type": "VALUES",
                "entries": [{"value": 3, "color": "var(--federal)", "label": "Federal"}]
            }
        }"##,
    );

    let legend = extract_legend(&layer);
    assert_eq!(legend.entries[0].color_hex, "var(--federal)");
}

#[test]
fn test_legend_fully_transparent_entry_keeps_hex() {
    let layer = layer(
        r##"{
            "id": 3,
            "name": "Mask",
            "style": {
                "map_type": "VALUES",
                "entries": [{"value": 1, "color": "#336699", "opacity": 0}]
            }
        }"##,
    );

    let legend = extract_legend(&layer);
    assert_eq!(legend.entries[0].color_hex, "#336699");
}

#[test]
fn test_legend_empty_style() {
    let layer = layer(r##"{"id": 4, "name": "Empty", "style": {"map_type": "RAMP"}}"##);
    let legend = extract_legend(&layer);
    assert!(legend.entries.is_empty());
}

#[test]
fn test_legend_json_shape() {
    let layer = layer(
        r##"{
            "id": 5,
            "name": "Slope",
            "style": {
                "map_type": "VALUES",
                "entries": [{"value": 1, "color": "#ff0000", "label": "Steep"}]
            }
        }"##,
    );

    let json = extract_legend(&layer).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["title"], "Slope");
    assert_eq!(value["type"], "VALUES");
    assert_eq!(value["entries"][0]["colorHex"], "#ff0000");
    assert_eq!(value["entries"][0]["entryLabel"], "Steep");
}

//! Per-map-type color mappers.
//!
//! Each builder turns a style's color entries into a [`ColorMapper`], a
//! pure `value -> Rgba` function. Every lookup that can't resolve a color
//! (no exact match, NaN input, unknown map type) answers
//! [`Rgba::TRANSPARENT`].

use planscape_common::ColorEntry;
use std::collections::HashMap;

use crate::color::{parse_color, Rgba};

/// Hashable key for an exact `f64` match. `-0.0` and `0.0` share a key.
pub(crate) fn value_key(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

fn entry_color(entry: &ColorEntry) -> Rgba {
    parse_color(&entry.color, entry.opacity_or_default())
}

/// A built color mapping function.
#[derive(Debug, Clone)]
pub enum ColorMapper {
    /// No entries: nothing is ever drawn
    Empty,

    /// One entry: the same color for every value
    Single(Rgba),

    /// Exact value lookup
    Values(HashMap<u64, Rgba>),

    /// Ascending thresholds; first threshold `>= value` wins
    Intervals(Vec<(f64, Rgba)>),

    /// Linear, clamped interpolation between ascending stops
    Ramp(Vec<(f64, Rgba)>),

    /// Unrecognized map type with several entries
    Unknown,
}

impl ColorMapper {
    pub fn single(entry: &ColorEntry) -> Self {
        ColorMapper::Single(entry_color(entry))
    }

    /// Later entries win when two share a value.
    pub fn values(entries: &[ColorEntry]) -> Self {
        let table = entries
            .iter()
            .map(|e| (value_key(e.value), entry_color(e)))
            .collect();
        ColorMapper::Values(table)
    }

    /// `entries` must already be sorted ascending by value.
    pub fn intervals(sorted_entries: &[ColorEntry]) -> Self {
        if sorted_entries.is_empty() {
            return ColorMapper::Empty;
        }
        ColorMapper::Intervals(stops(sorted_entries))
    }

    /// `entries` must already be sorted ascending by value.
    ///
    /// Color channels and opacity are interpolated independently, so a stop
    /// whose color fails to parse contributes transparent black.
    pub fn ramp(sorted_entries: &[ColorEntry]) -> Self {
        if sorted_entries.is_empty() {
            return ColorMapper::Empty;
        }
        ColorMapper::Ramp(stops(sorted_entries))
    }

    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ColorMapper::Empty => "empty",
            ColorMapper::Single(_) => "single",
            ColorMapper::Values(_) => "values",
            ColorMapper::Intervals(_) => "intervals",
            ColorMapper::Ramp(_) => "ramp",
            ColorMapper::Unknown => "unknown",
        }
    }

    /// Color for a raw pixel value.
    pub fn color_for(&self, value: f64) -> Rgba {
        match self {
            ColorMapper::Empty | ColorMapper::Unknown => Rgba::TRANSPARENT,
            ColorMapper::Single(color) => *color,
            _ if value.is_nan() => Rgba::TRANSPARENT,
            ColorMapper::Values(table) => table
                .get(&value_key(value))
                .copied()
                .unwrap_or(Rgba::TRANSPARENT),
            ColorMapper::Intervals(thresholds) => threshold_color(thresholds, value),
            ColorMapper::Ramp(stops) => ramp_color(stops, value),
        }
    }
}

fn stops(sorted_entries: &[ColorEntry]) -> Vec<(f64, Rgba)> {
    sorted_entries
        .iter()
        .map(|e| (e.value, entry_color(e)))
        .collect()
}

fn threshold_color(thresholds: &[(f64, Rgba)], value: f64) -> Rgba {
    let idx = thresholds.partition_point(|(threshold, _)| *threshold < value);
    match thresholds.get(idx).or_else(|| thresholds.last()) {
        Some((_, color)) => *color,
        None => Rgba::TRANSPARENT,
    }
}

fn ramp_color(stops: &[(f64, Rgba)], value: f64) -> Rgba {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Rgba::TRANSPARENT,
    };

    if value <= first.0 {
        return first.1;
    }
    if value >= last.0 {
        return last.1;
    }

    // first.0 < value < last.0, so 1 <= idx < len
    let idx = stops.partition_point(|(stop, _)| *stop <= value);
    let (low_value, low_color) = stops[idx - 1];
    let (high_value, high_color) = stops[idx];

    let t = (value - low_value) / (high_value - low_value);
    low_color.lerp(&high_color, t)
}

//! Builds a complete color mapping from a style descriptor.

use planscape_common::{MapType, StyleDescriptor};
use std::collections::HashSet;
use tracing::debug;

use crate::color::Rgba;
use crate::mapper::{value_key, ColorMapper};
use crate::pixel::write_color_to_buffer;

/// Raw values that always render transparent.
#[derive(Debug, Clone, Default)]
pub struct NoDataSet {
    keys: HashSet<u64>,
}

impl NoDataSet {
    pub fn new(values: &[f64]) -> Self {
        Self {
            keys: values.iter().map(|v| value_key(*v)).collect(),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        !self.keys.is_empty() && self.keys.contains(&value_key(value))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// A style's no-data set together with its color mapper.
#[derive(Debug, Clone)]
pub struct ColorMapping {
    pub no_data: NoDataSet,
    pub mapper: ColorMapper,
}

impl ColorMapping {
    /// Color for a raw pixel value, honoring no-data values.
    #[inline]
    pub fn color_for(&self, value: f64) -> Rgba {
        if self.no_data.contains(value) {
            return Rgba::TRANSPARENT;
        }
        self.mapper.color_for(value)
    }

    /// Color one pixel into `out` (at least 4 bytes, RGBA).
    #[inline]
    pub fn write_pixel(&self, value: f64, out: &mut [u8]) {
        write_color_to_buffer(self.color_for(value), out);
    }
}

/// Select and build the mapper for a style.
///
/// Entry count decides first (none → empty, one → constant), then the
/// map type.
pub fn build_color_mapping(style: &StyleDescriptor) -> ColorMapping {
    let no_data = NoDataSet::new(style.no_data_values());

    let mapper = match (style.entries.as_slice(), style.map_type) {
        ([], _) => ColorMapper::Empty,
        ([entry], _) => ColorMapper::single(entry),
        (entries, MapType::Values) => ColorMapper::values(entries),
        (_, MapType::Intervals) => ColorMapper::intervals(&style.sorted_entries()),
        (_, MapType::Ramp) => ColorMapper::ramp(&style.sorted_entries()),
        (_, MapType::Unknown) => ColorMapper::Unknown,
    };

    debug!(
        map_type = %style.map_type,
        entries = style.entries.len(),
        no_data = no_data.len(),
        mapper = mapper.kind(),
        "Built color mapping"
    );

    ColorMapping { no_data, mapper }
}

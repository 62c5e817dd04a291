//! Common types and utilities shared across Planscape raster services.

pub mod error;
pub mod layer;
pub mod style;

pub use error::{PlanscapeError, PlanscapeResult};
pub use layer::{DataLayer, DataLayerMetadata};
pub use style::{ColorEntry, MapType, NoData, StyleDescriptor};

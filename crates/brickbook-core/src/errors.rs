//! Error types for the Brickbook layout engine.

use thiserror::Error;

/// Malformed geometry, rejected when a primitive is constructed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("Negative size: {width}x{height}")]
    NegativeSize { width: f64, height: f64 },

    #[error("Non-finite geometry value: {value}")]
    NonFinite { value: f64 },
}

/// Errors raised while laying out pages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// An item that can never be placed, because it does not fit in an
    /// empty column of an empty page.
    #[error(
        "Item #{position} ({width}x{height}) does not fit in a {region_width}x{region_height} page region"
    )]
    DegenerateItem {
        /// Position of the item in the sorted packing order.
        position: usize,
        width: f64,
        height: f64,
        region_width: f64,
        region_height: f64,
    },

    #[error("Invalid layout configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Unknown layout node: #{index}")]
    UnknownNode { index: usize },

    #[error("Layout node #{index} is a {found}, expected {expected}")]
    WrongNodeKind {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
}

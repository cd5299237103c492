//! Core types for the Brickbook page layout engine.
//!
//! This crate provides the value types shared by the layout crates:
//! - Geometry primitives (points, sizes, rectangles, margins)
//! - Part colours and their sort weights
//! - Error types

pub mod color;
pub mod errors;
pub mod geometry;

pub use color::*;
pub use errors::*;
pub use geometry::*;

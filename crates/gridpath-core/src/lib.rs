//! **gridpath-core** — core types for grid path search.
//!
//! This crate provides the foundational types shared by the search engine
//! and its front-ends: `(row, col)` geometry, cell markers, an owned
//! rectangular grid, the plain-text grid format, and the error taxonomy
//! for rejecting bad grids and coordinates before a search starts.

pub mod error;
pub mod geom;
pub mod grid;
pub mod marker;
pub mod text;

pub use error::GridError;
pub use geom::{CARDINALS, Point, Range};
pub use grid::Grid;
pub use marker::{Marker, UnknownMarker};

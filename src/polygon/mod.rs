// src/polygon/mod.rs
pub mod boundary;
pub mod exchange;
pub mod grid_polygon;
pub mod validate;

pub use boundary::{Boundary, Edge, GridPoint, VertexId};
pub use exchange::{AxisConvention, RecordLayout};
pub use grid_polygon::GridPolygon;

// src/generator/mod.rs
pub mod batch;
pub mod cell;
pub mod inflate_cut;
pub mod rectangle;
mod row_area;

pub use batch::generate_batch;
pub use inflate_cut::{CutAttempt, GenerationStats, InflateCutGenerator};
pub use row_area::RowAreaIndex;

/// Smallest vertex count the generator accepts: the unit square.
pub const MIN_VERTICES: usize = 4;

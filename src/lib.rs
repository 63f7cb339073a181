// src/lib.rs

pub mod config;
pub mod error;
pub mod generator;
pub mod polygon;

pub use config::GeneratorConfig;
pub use error::{BatchError, ConfigError, ExchangeError, GenerationError, PolygonDefect};
pub use generator::{generate_batch, InflateCutGenerator};
pub use polygon::{AxisConvention, GridPoint, GridPolygon, RecordLayout};

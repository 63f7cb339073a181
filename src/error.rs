// src/error.rs

use thiserror::Error;

/// Errors raised while generating a polygon.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("invalid vertex count {requested}: must be even and at least 4")]
    InvalidVertexCount { requested: usize },

    /// Every occupied cell was tried for one step and none admitted a cut.
    /// This cannot happen on a consistent polygon.
    #[error("no cell admits a cut ({vertices} vertices, area {area})")]
    ExhaustedCandidates { vertices: usize, area: usize },

    #[error("cell rank {rank} does not map to a cell (area {area})")]
    InconsistentIndex { rank: usize, area: usize },
}

/// Failure of one polygon in a batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("polygon {index} failed verification: {defect}")]
    Defect { index: usize, defect: PolygonDefect },
}

/// Structural defects reported by `polygon::validate`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolygonDefect {
    #[error("expected {expected} vertices, found {found}")]
    VertexCount { expected: usize, found: usize },

    #[error("polygon has {0} vertices; an orthogonal polygon needs an even count of at least 4")]
    Degenerate(usize),

    #[error("edge {index} is not axis-aligned or has zero length")]
    NotOrthogonal { index: usize },

    #[error("edges {index} and {next} are collinear")]
    Collinear { index: usize, next: usize },

    #[error("edges {first} and {second} touch or cross")]
    SelfIntersecting { first: usize, second: usize },

    #[error("boundary is not counter-clockwise (doubled area {double_area})")]
    WrongOrientation { double_area: i64 },

    #[error("row counters sum to {counted} but the boundary encloses {enclosed}")]
    AreaMismatch { counted: usize, enclosed: usize },
}

/// Errors reading or writing the polygon exchange format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    #[error("empty record")]
    Empty,

    #[error("invalid integer {token:?}")]
    InvalidNumber { token: String },

    #[error("record announces {announced} vertices but carries {found} coordinates")]
    CoordinateCount { announced: usize, found: usize },

    #[error("request must contain a polygon count and a vertex count")]
    IncompleteRequest,
}

/// Errors loading a `GeneratorConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

// src/polygon/grid_polygon.rs

use crate::polygon::exchange::{self, AxisConvention, RecordLayout};
use crate::polygon::GridPoint;

/// A finished polygon in grid coordinates, counter-clockwise in the grid
/// frame, together with its enclosed cell count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPolygon {
    vertices: Vec<GridPoint>,
    area: usize,
}

impl GridPolygon {
    pub fn new(vertices: Vec<GridPoint>, area: usize) -> Self {
        GridPolygon { vertices, area }
    }

    pub fn vertices(&self) -> &[GridPoint] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn area(&self) -> usize {
        self.area
    }

    pub fn to_points(&self, convention: AxisConvention) -> Vec<GridPoint> {
        exchange::apply_convention(&self.vertices, convention)
    }

    /// The polygon as one exchange-format record.
    pub fn to_record(&self, convention: AxisConvention, layout: RecordLayout) -> String {
        exchange::format_record(&self.to_points(convention), layout)
    }
}

// src/generator/cell.rs
// Maps a cell rank to its grid position and the boundary edges around it.

use crate::generator::RowAreaIndex;
use crate::polygon::{Boundary, Edge};

/// A located cell. `left` and `right` are the nearest vertical edges on
/// either side of the cell within its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSite {
    pub row: i32,
    pub column: i32,
    pub left: Edge,
    pub right: Edge,
}

/// Horizontal edges crossing a cell's column, top to bottom, with the pair
/// directly above and below the cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnEdges {
    pub edges: Vec<Edge>,
    pub up: Edge,
    pub down: Edge,
}

/// Finds the cell of 1-based `rank` in row-major order of occupied cells.
pub fn locate_cell(boundary: &Boundary, index: &RowAreaIndex, rank: usize) -> Option<CellSite> {
    let (row, mut before) = index.locate(rank)?;
    let verticals = boundary.vertical_edges_crossing_row(row);
    // Interior runs lie between consecutive pairs of crossing edges.
    for pair in verticals.chunks_exact(2) {
        let width = (pair[1].line - pair[0].line) as usize;
        if before + width >= rank {
            return Some(CellSite {
                row,
                column: pair[0].line + (rank - before - 1) as i32,
                left: pair[0],
                right: pair[1],
            });
        }
        before += width;
    }
    None
}

/// Collects the horizontal edges crossing the cell's column and picks the
/// pair enclosing its row.
pub fn enclosing_edges(boundary: &Boundary, site: &CellSite) -> Option<ColumnEdges> {
    let edges = boundary.horizontal_edges_crossing_column(site.column);
    let (up, down) = edges
        .chunks_exact(2)
        .find(|pair| pair[1].line > site.row)
        .map(|pair| (pair[0], pair[1]))?;
    Some(ColumnEdges { edges, up, down })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::GridPoint;

    /// (2,1),(2,2),(1,2),(1,3),(3,3),(3,1): one cell in row 1, two in row 2.
    fn l_tromino() -> (Boundary, RowAreaIndex) {
        let mut boundary = Boundary::unit_square();
        boundary.shift_beyond(1, 1);
        boundary.carve_notch(0, GridPoint::new(2, 2));
        let mut index = RowAreaIndex::unit();
        index.duplicate_row(1);
        index.add_cells(2, 1);
        assert_eq!(index.counts(), &[1, 2]);
        (boundary, index)
    }

    #[test]
    fn test_locate_in_unit_square() {
        let boundary = Boundary::unit_square();
        let index = RowAreaIndex::unit();
        let site = locate_cell(&boundary, &index, 1).unwrap();
        assert_eq!((site.row, site.column), (1, 1));
        assert_eq!(site.left.line, 1);
        assert_eq!(site.right.line, 2);
        assert!(locate_cell(&boundary, &index, 2).is_none());

        let column = enclosing_edges(&boundary, &site).unwrap();
        assert_eq!(column.edges.len(), 2);
        assert_eq!((column.up.line, column.down.line), (1, 2));
    }

    #[test]
    fn test_locate_in_l_tromino() {
        let (boundary, index) = l_tromino();
        let cells: Vec<(i32, i32)> = (1..=3)
            .map(|rank| {
                let site = locate_cell(&boundary, &index, rank).unwrap();
                (site.row, site.column)
            })
            .collect();
        assert_eq!(cells, vec![(1, 2), (2, 1), (2, 2)]);

        let site = locate_cell(&boundary, &index, 2).unwrap();
        assert_eq!((site.left.line, site.right.line), (1, 3));
    }

    #[test]
    fn test_enclosing_edges_in_l_tromino() {
        let (boundary, index) = l_tromino();
        let site = locate_cell(&boundary, &index, 3).unwrap();
        let column = enclosing_edges(&boundary, &site).unwrap();
        assert_eq!(column.edges.iter().map(|e| e.line).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(boundary.point(column.up.start), GridPoint::new(3, 1));
        assert_eq!(boundary.point(column.down.start), GridPoint::new(1, 3));

        let site = locate_cell(&boundary, &index, 2).unwrap();
        let column = enclosing_edges(&boundary, &site).unwrap();
        assert_eq!((column.up.line, column.down.line), (2, 3));
    }
}

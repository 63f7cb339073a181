// src/generator/row_area.rs

/// Occupied-cell count for every grid row, top to bottom in the grid frame.
/// Row `r` is the band y ∈ [r, r+1]; rows are numbered from 1.
///
/// The running total always equals the enclosed area of the polygon the
/// index describes, which lets the generator rank cells without scanning
/// the plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAreaIndex {
    counts: Vec<usize>,
    total: usize,
}

fn slot(row: i32) -> usize {
    debug_assert!(row >= 1, "grid rows start at 1");
    (row - 1) as usize
}

impl RowAreaIndex {
    /// The index of the unit square: one row holding one cell.
    pub fn unit() -> Self {
        RowAreaIndex {
            counts: vec![1],
            total: 1,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn rows(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, row: i32) -> usize {
        self.counts[slot(row)]
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Finds the row holding the cell of 1-based `rank`. Returns the row and
    /// the number of cells ranked before that row.
    pub fn locate(&self, rank: usize) -> Option<(i32, usize)> {
        if rank == 0 || rank > self.total {
            return None;
        }
        let mut before = 0;
        for (i, &count) in self.counts.iter().enumerate() {
            if before + count >= rank {
                return Some((i as i32 + 1, before));
            }
            before += count;
        }
        None
    }

    /// Inserts a copy of `row` directly after it.
    pub fn duplicate_row(&mut self, row: i32) {
        let at = slot(row);
        let count = self.counts[at];
        self.counts.insert(at + 1, count);
        self.total += count;
    }

    pub fn add_cells(&mut self, row: i32, cells: usize) {
        self.counts[slot(row)] += cells;
        self.total += cells;
    }

    pub fn remove_cells(&mut self, row: i32, cells: usize) {
        let at = slot(row);
        debug_assert!(self.counts[at] >= cells, "row {} holds fewer than {} cells", row, cells);
        self.counts[at] -= cells;
        self.total -= cells;
    }
}

// src/generator/inflate_cut.rs
// The Inflate-Cut engine.

use std::time::Instant;

use log::{debug, error, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::GenerationError;
use crate::generator::cell::{self, CellSite};
use crate::generator::rectangle::CandidateSet;
use crate::generator::{RowAreaIndex, MIN_VERTICES};
use crate::polygon::{Boundary, Edge, GridPoint, GridPolygon, VertexId};

/// Outcome of trying to cut at one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutAttempt {
    /// The polygon gained two vertices.
    Cut,
    /// No candidate rectangle at this cell can be removed.
    NoValidCut,
}

#[derive(Default, Debug, Clone)]
pub struct GenerationStats {
    pub generation_time: f64,
    pub steps: usize,
    pub attempts: usize,
    pub failed_attempts: usize,
}

/// Grows a grid polygon two vertices at a time from the unit square.
///
/// Each step ranks every occupied cell in a random order and takes the first
/// cell that admits a cut. The grid is refined (inflated) along the cell's row
/// and column, then a rectangle between the cell centre and a boundary vertex
/// is removed.
pub struct InflateCutGenerator {
    rng: StdRng,
    boundary: Boundary,
    rows: RowAreaIndex,
    stats: GenerationStats,
}

/// Checks that `n` is a vertex count the generator can reach.
pub fn check_vertex_count(n: usize) -> Result<(), GenerationError> {
    if n < MIN_VERTICES || n % 2 != 0 {
        return Err(GenerationError::InvalidVertexCount { requested: n });
    }
    Ok(())
}

impl InflateCutGenerator {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        InflateCutGenerator {
            rng,
            boundary: Boundary::unit_square(),
            rows: RowAreaIndex::unit(),
            stats: GenerationStats::default(),
        }
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub fn rows(&self) -> &RowAreaIndex {
        &self.rows
    }

    pub fn area(&self) -> usize {
        self.rows.total()
    }

    pub fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    /// Returns the engine to the unit square. The random stream continues.
    pub fn reset(&mut self) {
        self.boundary = Boundary::unit_square();
        self.rows = RowAreaIndex::unit();
        self.stats = GenerationStats::default();
    }

    /// Generates a simple orthogonal polygon with exactly `n` vertices.
    pub fn generate(&mut self, n: usize) -> Result<GridPolygon, GenerationError> {
        check_vertex_count(n)?;
        let started = Instant::now();
        self.reset();
        for _ in 0..n / 2 - 2 {
            self.step()?;
        }
        self.stats.generation_time = started.elapsed().as_secs_f64();
        debug!(
            "generated {}-gon: area {}, {} attempts ({} without a cut) in {:.3}s",
            n,
            self.area(),
            self.stats.attempts,
            self.stats.failed_attempts,
            self.stats.generation_time
        );
        Ok(self.snapshot())
    }

    /// The current polygon, read from the head.
    pub fn snapshot(&self) -> GridPolygon {
        GridPolygon::new(self.boundary.points().collect(), self.area())
    }

    /// Performs one Inflate-Cut transformation, adding two vertices.
    pub fn step(&mut self) -> Result<(), GenerationError> {
        let mut order: Vec<usize> = (1..=self.area()).collect();
        order.shuffle(&mut self.rng);

        for rank in order {
            self.stats.attempts += 1;
            match self.attempt(rank)? {
                CutAttempt::Cut => {
                    self.stats.steps += 1;
                    return Ok(());
                }
                CutAttempt::NoValidCut => {
                    self.stats.failed_attempts += 1;
                    trace!("no valid cut at cell {}", rank);
                }
            }
        }

        error!(
            "every cell rejected a cut: {} vertices, area {}",
            self.boundary.len(),
            self.area()
        );
        Err(GenerationError::ExhaustedCandidates {
            vertices: self.boundary.len(),
            area: self.area(),
        })
    }

    /// Tries to inflate and cut at the cell of rank `rank`.
    pub fn attempt(&mut self, rank: usize) -> Result<CutAttempt, GenerationError> {
        let area = self.area();
        let inconsistent = || GenerationError::InconsistentIndex { rank, area };
        let site = cell::locate_cell(&self.boundary, &self.rows, rank).ok_or_else(inconsistent)?;
        let column = cell::enclosing_edges(&self.boundary, &site).ok_or_else(inconsistent)?;

        let mut candidates = CandidateSet::gather(&self.boundary, &site, &column);
        candidates.resolve();
        let Some(corner) = candidates.choose(&mut self.rng) else {
            return Ok(CutAttempt::NoValidCut);
        };

        trace!(
            "cutting at cell ({}, {}) towards {:?}",
            site.row,
            site.column,
            self.boundary.point(corner)
        );
        self.inflate(&site, &column.edges);
        self.cut(corner, &site);
        Ok(CutAttempt::Cut)
    }

    /// Duplicates the cell's row and column. `horizontals` are the edges
    /// crossing the column, top to bottom, collected before the shift.
    fn inflate(&mut self, site: &CellSite, horizontals: &[Edge]) {
        self.rows.duplicate_row(site.row);
        self.boundary.shift_beyond(site.row, site.column);
        // The new column copies the old one: one more cell in every row it
        // had interior in. Edge lines are read back after the shift.
        for pair in horizontals.chunks_exact(2) {
            let top = self.boundary.point(pair[0].start).y;
            let bottom = self.boundary.point(pair[1].start).y;
            for row in top..bottom {
                self.rows.add_cells(row, 1);
            }
        }
    }

    /// Removes the rectangle between the inflated cell centre and `corner`.
    fn cut(&mut self, corner: VertexId, site: &CellSite) {
        let near = GridPoint::new(site.column + 1, site.row + 1);
        let far = self.boundary.point(corner);
        let width = (near.x - far.x).unsigned_abs() as usize;
        for row in near.y.min(far.y)..near.y.max(far.y) {
            self.rows.remove_cells(row, width);
        }
        self.boundary.carve_notch(corner, near);
    }
}

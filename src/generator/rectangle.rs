// src/generator/rectangle.rs
// Candidate rectangles for one cut attempt.
//
// Coordinates here are doubled so the pivot, the centre of the chosen cell,
// lands on integers: vertices sit on even values, the pivot on odd ones.

use rand::Rng;

use crate::generator::cell::{CellSite, ColumnEdges};
use crate::polygon::{Boundary, Edge, VertexId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid,
    Unknown,
}

/// The rectangle spanned by the pivot and `corner`, with its verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub corner: VertexId,
    pub validity: Validity,
}

impl Candidate {
    fn unknown(corner: VertexId) -> Self {
        Candidate {
            corner,
            validity: Validity::Unknown,
        }
    }
}

/// Up to eight candidates gathered by walking counter-clockwise around the
/// cell: the right edge, then the up, left and down edges.
#[derive(Debug, Clone)]
pub struct CandidateSet<'a> {
    boundary: &'a Boundary,
    pivot: (i32, i32),
    candidates: Vec<Candidate>,
}

fn within(value: i32, a: i32, b: i32) -> bool {
    a.min(b) <= value && value <= a.max(b)
}

impl<'a> CandidateSet<'a> {
    pub fn gather(boundary: &'a Boundary, site: &CellSite, column: &ColumnEdges) -> Self {
        let right = site.right.start;
        let mut set = CandidateSet {
            boundary,
            pivot: (2 * site.column + 1, 2 * site.row + 1),
            candidates: Vec::with_capacity(8),
        };
        set.candidates.push(Candidate::unknown(right));
        set.candidates.push(Candidate::unknown(boundary.next(right)));
        set.follow(column.up, false);
        set.follow(site.left, false);
        set.follow(column.down, true);
        set
    }

    /// Whether vertex `probe` lies in the closed rectangle spanned by the
    /// pivot and `corner`.
    fn encloses(&self, probe: VertexId, corner: VertexId) -> bool {
        let p = self.boundary.point(probe);
        let c = self.boundary.point(corner);
        within(2 * p.x, self.pivot.0, 2 * c.x) && within(2 * p.y, self.pivot.1, 2 * c.y)
    }

    /// Adds the endpoints of the next bounding edge. A vertex shared with the
    /// previous edge is a corner seen directly from the cell; two distinct
    /// endpoints may rule each other out.
    fn follow(&mut self, edge: Edge, closing: bool) {
        let start = edge.start;
        let end = self.boundary.next(start);
        let last = self.candidates.len() - 1;

        let previous = self.candidates[last].corner;
        if previous != start {
            let validity = if self.encloses(previous, start) {
                Validity::Invalid
            } else {
                Validity::Unknown
            };
            if self.encloses(start, previous) {
                self.candidates[last].validity = Validity::Invalid;
            }
            self.candidates.push(Candidate { corner: start, validity });
        } else {
            self.candidates[last].validity = Validity::Valid;
        }

        if !closing {
            self.candidates.push(Candidate::unknown(end));
            return;
        }
        let first = self.candidates[0].corner;
        if first != end {
            let validity = if self.encloses(first, end) {
                Validity::Invalid
            } else {
                Validity::Unknown
            };
            if self.encloses(end, first) {
                self.candidates[0].validity = Validity::Invalid;
            }
            self.candidates.push(Candidate { corner: end, validity });
        } else {
            self.candidates[0].validity = Validity::Valid;
        }
    }

    /// No vertex other than `corner` lies in its rectangle.
    fn is_clear(&self, corner: VertexId) -> bool {
        self.boundary
            .ids()
            .all(|id| id == corner || !self.encloses(id, corner))
    }

    /// Settles every undecided candidate with a scan over all vertices.
    pub fn resolve(&mut self) {
        for i in 0..self.candidates.len() {
            if self.candidates[i].validity == Validity::Unknown {
                let corner = self.candidates[i].corner;
                self.candidates[i].validity = if self.is_clear(corner) {
                    Validity::Valid
                } else {
                    Validity::Invalid
                };
            }
        }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn valid_count(&self) -> usize {
        self.candidates
            .iter()
            .filter(|c| c.validity == Validity::Valid)
            .count()
    }

    /// Picks one valid corner uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<VertexId> {
        let count = self.valid_count();
        if count == 0 {
            return None;
        }
        let pick = rng.random_range(0..count);
        self.candidates
            .iter()
            .filter(|c| c.validity == Validity::Valid)
            .nth(pick)
            .map(|c| c.corner)
    }
}

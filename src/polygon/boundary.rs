// src/polygon/boundary.rs
// Arena-backed cyclic boundary of a grid polygon.

use crate::error::PolygonDefect;
use crate::polygon::validate;

/// Index of a vertex record inside a `Boundary` arena.
pub type VertexId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub fn new(x: i32, y: i32) -> Self {
        GridPoint { x, y }
    }
}

#[derive(Debug, Clone)]
struct VertexNode {
    point: GridPoint,
    prev: VertexId,
    next: VertexId,
}

/// A boundary edge, named by the vertex it leaves from. `line` is the x of a
/// vertical edge or the y of a horizontal one, captured when the edge was
/// collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub start: VertexId,
    pub line: i32,
}

/// The polygon boundary as a doubly-linked cycle stored in a dense arena.
///
/// Vertices run counter-clockwise in the grid frame (x east, y south). The
/// edge leaving `head` is always vertical, so edges alternate
/// vertical/horizontal starting from the head.
#[derive(Debug, Clone)]
pub struct Boundary {
    nodes: Vec<VertexNode>,
    head: VertexId,
}

/// True when the half-open span between `a` and `b` covers the unit interval
/// starting at `c`.
fn spans(a: i32, b: i32, c: i32) -> bool {
    a.min(b) <= c && c < a.max(b)
}

impl Boundary {
    /// The unit square (1,1),(1,2),(2,2),(2,1).
    pub fn unit_square() -> Self {
        let corners = [
            GridPoint::new(1, 1),
            GridPoint::new(1, 2),
            GridPoint::new(2, 2),
            GridPoint::new(2, 1),
        ];
        let count = corners.len();
        let nodes = corners
            .iter()
            .enumerate()
            .map(|(i, &point)| VertexNode {
                point,
                prev: (i + count - 1) % count,
                next: (i + 1) % count,
            })
            .collect();
        Boundary { nodes, head: 0 }
    }

    /// Builds a boundary from a closed orthogonal vertex list given in
    /// counter-clockwise grid order.
    pub fn from_points(points: &[GridPoint]) -> Result<Self, PolygonDefect> {
        validate::check_orthogonal(points)?;
        let count = points.len();
        let nodes = points
            .iter()
            .enumerate()
            .map(|(i, &point)| VertexNode {
                point,
                prev: (i + count - 1) % count,
                next: (i + 1) % count,
            })
            .collect();
        let head = if points[0].x == points[1].x { 0 } else { 1 };
        Ok(Boundary { nodes, head })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn head(&self) -> VertexId {
        self.head
    }

    pub fn point(&self, id: VertexId) -> GridPoint {
        self.nodes[id].point
    }

    pub fn next(&self, id: VertexId) -> VertexId {
        self.nodes[id].next
    }

    pub fn prev(&self, id: VertexId) -> VertexId {
        self.nodes[id].prev
    }

    /// Vertex ids in boundary order, starting at the head.
    pub fn ids(&self) -> BoundaryIds<'_> {
        BoundaryIds {
            boundary: self,
            current: self.head,
            remaining: self.nodes.len(),
        }
    }

    /// Vertex coordinates in boundary order, starting at the head.
    pub fn points(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.ids().map(move |id| self.point(id))
    }

    /// Whether the edge arriving at `id` is horizontal.
    pub fn enters_horizontally(&self, id: VertexId) -> bool {
        self.point(self.prev(id)).y == self.point(id).y
    }

    /// Vertical edges covering grid row `row` (the band y ∈ [row, row+1]),
    /// ordered left to right.
    pub fn vertical_edges_crossing_row(&self, row: i32) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self
            .ids()
            .filter_map(|id| {
                let p = self.point(id);
                let q = self.point(self.next(id));
                (p.x == q.x && spans(p.y, q.y, row)).then_some(Edge { start: id, line: p.x })
            })
            .collect();
        edges.sort_by_key(|e| e.line);
        edges
    }

    /// Horizontal edges covering grid column `column` (the band
    /// x ∈ [column, column+1]), ordered top to bottom in the grid frame.
    pub fn horizontal_edges_crossing_column(&self, column: i32) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self
            .ids()
            .filter_map(|id| {
                let p = self.point(id);
                let q = self.point(self.next(id));
                (p.y == q.y && spans(p.x, q.x, column)).then_some(Edge { start: id, line: p.y })
            })
            .collect();
        edges.sort_by_key(|e| e.line);
        edges
    }

    /// Opens an empty grid line after `row` and after `column`: every vertex
    /// beyond them moves one unit further. The shape is unchanged.
    pub fn shift_beyond(&mut self, row: i32, column: i32) {
        for node in &mut self.nodes {
            if node.point.x > column {
                node.point.x += 1;
            }
            if node.point.y > row {
                node.point.y += 1;
            }
        }
    }

    /// Moves `corner` to `near` and inserts the two vertices that close the
    /// rectangular notch between the old and new corner positions.
    ///
    /// `near` must lie on grid lines carrying no other vertex, so the notch
    /// edges cannot overlap existing ones. Returns the ids of the vertex
    /// inserted before and after the corner.
    pub fn carve_notch(&mut self, corner: VertexId, near: GridPoint) -> (VertexId, VertexId) {
        let far = self.point(corner);
        let prev = self.prev(corner);
        let next = self.next(corner);
        let horizontal_in = self.enters_horizontally(corner);

        let along_row = GridPoint::new(near.x, far.y);
        let along_column = GridPoint::new(far.x, near.y);
        let (before, after) = if horizontal_in {
            (along_row, along_column)
        } else {
            (along_column, along_row)
        };

        let s0 = self.push_node(before, prev, corner);
        let s1 = self.push_node(after, corner, next);
        self.nodes[prev].next = s0;
        self.nodes[next].prev = s1;

        let node = &mut self.nodes[corner];
        node.point = near;
        node.prev = s0;
        node.next = s1;

        // The corner now leaves horizontally; s0 leaves vertically.
        if horizontal_in && self.head == corner {
            self.head = s0;
        }
        (s0, s1)
    }

    fn push_node(&mut self, point: GridPoint, prev: VertexId, next: VertexId) -> VertexId {
        self.nodes.push(VertexNode { point, prev, next });
        self.nodes.len() - 1
    }
}

/// Iterator over vertex ids in boundary order.
pub struct BoundaryIds<'a> {
    boundary: &'a Boundary,
    current: VertexId,
    remaining: usize,
}

impl<'a> Iterator for BoundaryIds<'a> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.current;
        self.current = self.boundary.next(id);
        self.remaining -= 1;
        Some(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> ExactSizeIterator for BoundaryIds<'a> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(pairs: &[(i32, i32)]) -> Vec<GridPoint> {
        pairs.iter().map(|&(x, y)| GridPoint::new(x, y)).collect()
    }

    #[test]
    fn test_unit_square_links() {
        let b = Boundary::unit_square();
        assert_eq!(b.len(), 4);
        assert_eq!(b.points().collect::<Vec<_>>(), pts(&[(1, 1), (1, 2), (2, 2), (2, 1)]));
        for id in b.ids() {
            assert_eq!(b.prev(b.next(id)), id);
        }
        // The head leaves along a vertical edge.
        assert_eq!(b.point(b.head()).x, b.point(b.next(b.head())).x);
    }

    #[test]
    fn test_from_points_picks_vertical_head() {
        let b = Boundary::from_points(&pts(&[(1, 2), (2, 2), (2, 1), (1, 1)])).unwrap();
        assert_eq!(b.head(), 1);
        assert_eq!(b.points().collect::<Vec<_>>(), pts(&[(2, 2), (2, 1), (1, 1), (1, 2)]));

        let bad = Boundary::from_points(&pts(&[(1, 1), (1, 2), (2, 2)]));
        assert_eq!(bad.err(), Some(PolygonDefect::Degenerate(3)));
    }

    #[test]
    fn test_edges_crossing_unit_square() {
        let b = Boundary::unit_square();
        let verticals = b.vertical_edges_crossing_row(1);
        assert_eq!(verticals.iter().map(|e| e.line).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(verticals[0].start, 0);
        assert_eq!(verticals[1].start, 2);

        let horizontals = b.horizontal_edges_crossing_column(1);
        assert_eq!(horizontals.iter().map(|e| e.line).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(horizontals[0].start, 3);
        assert_eq!(horizontals[1].start, 1);

        assert!(b.vertical_edges_crossing_row(2).is_empty());
        assert!(b.horizontal_edges_crossing_column(0).is_empty());
    }

    #[test]
    fn test_shift_beyond() {
        let mut b = Boundary::unit_square();
        b.shift_beyond(1, 1);
        assert_eq!(b.points().collect::<Vec<_>>(), pts(&[(1, 1), (1, 3), (3, 3), (3, 1)]));
    }

    #[test]
    fn test_carve_notch_at_head_moves_head() {
        let mut b = Boundary::unit_square();
        b.shift_beyond(1, 1);
        // The head (1,1) is entered by the horizontal edge from (3,1).
        assert!(b.enters_horizontally(0));
        let (s0, s1) = b.carve_notch(0, GridPoint::new(2, 2));
        assert_eq!(b.head(), s0);
        assert_eq!(b.point(s1), GridPoint::new(1, 2));
        assert_eq!(
            b.points().collect::<Vec<_>>(),
            pts(&[(2, 1), (2, 2), (1, 2), (1, 3), (3, 3), (3, 1)])
        );
    }

    #[test]
    fn test_carve_notch_vertical_entry() {
        let mut b = Boundary::unit_square();
        b.shift_beyond(1, 1);
        // (1,3) is entered by the vertical edge from (1,1).
        assert!(!b.enters_horizontally(1));
        let (s0, s1) = b.carve_notch(1, GridPoint::new(2, 2));
        assert_eq!(b.head(), 0);
        assert_eq!(b.point(s0), GridPoint::new(1, 2));
        assert_eq!(b.point(s1), GridPoint::new(2, 3));
        assert_eq!(
            b.points().collect::<Vec<_>>(),
            pts(&[(1, 1), (1, 2), (2, 2), (2, 3), (3, 3), (3, 1)])
        );
        for id in b.ids() {
            assert_eq!(b.next(b.prev(id)), id);
        }
    }
}

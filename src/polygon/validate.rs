// src/polygon/validate.rs
// Structural checks for orthogonal polygons given as closed vertex lists.

use crate::error::PolygonDefect;
use crate::polygon::GridPoint;

/// Twice the signed area by the shoelace formula, in the usual Cartesian
/// sense (positive for counter-clockwise with y pointing up).
pub fn shoelace_double_area(points: &[GridPoint]) -> i64 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let p = points[i];
            let q = points[(i + 1) % n];
            p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64
        })
        .sum()
}

/// Twice the signed area in the grid frame, where y points south. Positive
/// when the boundary runs counter-clockwise in that frame.
pub fn grid_double_area(points: &[GridPoint]) -> i64 {
    -shoelace_double_area(points)
}

/// Number of unit cells enclosed by the boundary.
pub fn enclosed_area(points: &[GridPoint]) -> usize {
    (shoelace_double_area(points).unsigned_abs() / 2) as usize
}

fn edge(points: &[GridPoint], i: usize) -> (GridPoint, GridPoint) {
    (points[i], points[(i + 1) % points.len()])
}

/// Every edge is axis-aligned with non-zero length and turns at every vertex.
pub fn check_orthogonal(points: &[GridPoint]) -> Result<(), PolygonDefect> {
    let n = points.len();
    if n < 4 || n % 2 != 0 {
        return Err(PolygonDefect::Degenerate(n));
    }
    let vertical = |i: usize| {
        let (p, q) = edge(points, i);
        p.x == q.x
    };
    for index in 0..n {
        let (p, q) = edge(points, index);
        if (p.x == q.x) == (p.y == q.y) {
            return Err(PolygonDefect::NotOrthogonal { index });
        }
    }
    for index in 0..n {
        let next = (index + 1) % n;
        if vertical(index) == vertical(next) {
            return Err(PolygonDefect::Collinear { index, next });
        }
    }
    Ok(())
}

/// Closed axis-aligned segments meet iff their bounding boxes overlap.
fn segments_meet(a: (GridPoint, GridPoint), b: (GridPoint, GridPoint)) -> bool {
    let (a_min_x, a_max_x) = (a.0.x.min(a.1.x), a.0.x.max(a.1.x));
    let (a_min_y, a_max_y) = (a.0.y.min(a.1.y), a.0.y.max(a.1.y));
    let (b_min_x, b_max_x) = (b.0.x.min(b.1.x), b.0.x.max(b.1.x));
    let (b_min_y, b_max_y) = (b.0.y.min(b.1.y), b.0.y.max(b.1.y));
    a_min_x <= b_max_x && b_min_x <= a_max_x && a_min_y <= b_max_y && b_min_y <= a_max_y
}

/// No two non-adjacent edges touch. Assumes `check_orthogonal` passed.
pub fn check_simple(points: &[GridPoint]) -> Result<(), PolygonDefect> {
    let n = points.len();
    for first in 0..n {
        for second in first + 2..n {
            if first == 0 && second == n - 1 {
                continue;
            }
            if segments_meet(edge(points, first), edge(points, second)) {
                return Err(PolygonDefect::SelfIntersecting { first, second });
            }
        }
    }
    Ok(())
}

/// Counter-clockwise in the grid frame.
pub fn check_grid_orientation(points: &[GridPoint]) -> Result<(), PolygonDefect> {
    let double_area = grid_double_area(points);
    if double_area <= 0 {
        return Err(PolygonDefect::WrongOrientation { double_area });
    }
    Ok(())
}

/// Full check of a generated boundary in grid coordinates.
pub fn verify_grid_polygon(points: &[GridPoint], expected: usize) -> Result<(), PolygonDefect> {
    if points.len() != expected {
        return Err(PolygonDefect::VertexCount {
            expected,
            found: points.len(),
        });
    }
    check_orthogonal(points)?;
    check_simple(points)?;
    check_grid_orientation(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(pairs: &[(i32, i32)]) -> Vec<GridPoint> {
        pairs.iter().map(|&(x, y)| GridPoint::new(x, y)).collect()
    }

    #[test]
    fn test_unit_square_area_and_orientation() {
        let square = pts(&[(1, 1), (1, 2), (2, 2), (2, 1)]);
        assert_eq!(grid_double_area(&square), 2);
        assert_eq!(shoelace_double_area(&square), -2);
        assert_eq!(enclosed_area(&square), 1);
        assert!(verify_grid_polygon(&square, 4).is_ok());
    }

    #[test]
    fn test_l_tromino() {
        let l = pts(&[(1, 1), (1, 3), (2, 3), (2, 2), (3, 2), (3, 1)]);
        assert_eq!(enclosed_area(&l), 3);
        assert!(verify_grid_polygon(&l, 6).is_ok());
    }

    #[test]
    fn test_clockwise_rejected() {
        let square = pts(&[(1, 1), (2, 1), (2, 2), (1, 2)]);
        assert_eq!(
            check_grid_orientation(&square),
            Err(PolygonDefect::WrongOrientation { double_area: -2 })
        );
    }

    #[test]
    fn test_diagonal_edge_rejected() {
        let bad = pts(&[(1, 1), (1, 2), (2, 3), (2, 1)]);
        assert_eq!(check_orthogonal(&bad), Err(PolygonDefect::NotOrthogonal { index: 1 }));
    }

    #[test]
    fn test_collinear_edges_rejected() {
        let bad = pts(&[(1, 1), (1, 2), (1, 3), (2, 3), (2, 2), (2, 1)]);
        assert_eq!(
            check_orthogonal(&bad),
            Err(PolygonDefect::Collinear { index: 0, next: 1 })
        );
    }

    #[test]
    fn test_odd_count_rejected() {
        let bad = pts(&[(1, 1), (1, 2), (2, 2)]);
        assert_eq!(check_orthogonal(&bad), Err(PolygonDefect::Degenerate(3)));
    }

    #[test]
    fn test_touching_edges_rejected() {
        // Two squares sharing the corner (2,2), traced as one figure-eight cycle.
        let bow = pts(&[
            (1, 1),
            (1, 2),
            (2, 2),
            (2, 3),
            (3, 3),
            (3, 2),
            (2, 2),
            (2, 1),
        ]);
        assert!(check_orthogonal(&bow).is_ok());
        assert!(matches!(
            check_simple(&bow),
            Err(PolygonDefect::SelfIntersecting { .. })
        ));
    }

    #[test]
    fn test_wrong_vertex_count() {
        let square = pts(&[(1, 1), (1, 2), (2, 2), (2, 1)]);
        assert_eq!(
            verify_grid_polygon(&square, 6),
            Err(PolygonDefect::VertexCount { expected: 6, found: 4 })
        );
    }
}

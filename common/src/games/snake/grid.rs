//! Wrap-around arithmetic on the toroidal grid. The grid has no edges.

use super::types::{Direction, GridSize, Point};

/// Folds a coordinate that stepped at most one cell past an edge back onto the grid.
pub fn wrap(coordinate: i32, dimension: i32) -> i32 {
    if coordinate < 0 {
        dimension - 1
    } else if coordinate >= dimension {
        0
    } else {
        coordinate
    }
}

pub fn next_cell(cell: Point, direction: Direction, grid: GridSize) -> Point {
    let (dx, dy) = direction.delta();
    Point::new(wrap(cell.x + dx, grid.width), wrap(cell.y + dy, grid.height))
}

/// Manhattan distance under the wrap-around metric.
pub fn toroidal_distance(a: Point, b: Point, grid: GridSize) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    dx.min(grid.width - dx) + dy.min(grid.height - dy)
}

use std::collections::HashSet;

use crate::games::SessionRng;
use super::snake::Snake;
use super::types::{GridSize, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoodFill {
    /// Food was already at the target count.
    Full,
    Spawned(usize),
    /// No free cell is left anywhere on the board.
    Saturated,
}

/// Tops `food` up to `target` on randomly chosen free cells.
pub fn fill_food(
    grid: GridSize,
    snakes: &[&Snake],
    food: &mut HashSet<Point>,
    target: usize,
    rng: &mut SessionRng,
) -> FoodFill {
    if food.len() >= target {
        return FoodFill::Full;
    }

    let mut empty_cells: Vec<Point> = grid
        .cells()
        .filter(|cell| !food.contains(cell) && !snakes.iter().any(|s| s.contains(cell)))
        .collect();

    if empty_cells.is_empty() {
        return FoodFill::Saturated;
    }

    rng.shuffle(&mut empty_cells);
    let spawn_count = empty_cells.len().min(target - food.len());
    food.extend(empty_cells.into_iter().take(spawn_count));
    FoodFill::Spawned(spawn_count)
}

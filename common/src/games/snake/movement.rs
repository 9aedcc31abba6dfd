use std::collections::HashSet;

use super::grid::next_cell;
use super::snake::Snake;
use super::types::{Direction, GridSize, Point, ResetReason};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Advance {
    pub new_head: Point,
    pub collision: Option<ResetReason>,
}

impl Advance {
    pub fn collided(&self) -> bool {
        self.collision.is_some()
    }
}

/// Computes where `snake` moves next and whether that move is fatal. The own
/// body check includes the tail because the tail has not moved yet.
pub fn advance(
    snake: &Snake,
    direction: Direction,
    opponent: Option<&Snake>,
    grid: GridSize,
) -> Advance {
    let new_head = next_cell(snake.head(), direction, grid);

    let collision = if snake.contains(&new_head) {
        Some(ResetReason::SelfCollision)
    } else if opponent.is_some_and(|other| other.contains(&new_head)) {
        Some(ResetReason::OpponentCollision)
    } else {
        None
    };

    Advance {
        new_head,
        collision,
    }
}

/// Finishes a move whose head is already in place: eats the food under the
/// head, otherwise drops the tail. Returns whether food was eaten.
pub fn settle_tail(snake: &mut Snake, food: &mut HashSet<Point>) -> bool {
    if food.remove(&snake.head()) {
        true
    } else {
        snake.pop_tail();
        false
    }
}

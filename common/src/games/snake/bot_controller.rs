use std::collections::HashSet;

use super::grid::{next_cell, toroidal_distance};
use super::snake::Snake;
use super::types::{Direction, GridSize, Point};

/// Greedy single-step steering: move toward the nearest food without looking
/// further ahead than the next cell.
pub struct BotController;

impl BotController {
    /// Picks the direction whose next cell is free and closest to any food.
    /// Ties go to the earlier entry of `Direction::ALL`. When every candidate
    /// is blocked the current direction is returned unchanged.
    pub fn choose_direction(
        snake: &Snake,
        opponent: Option<&Snake>,
        food: &HashSet<Point>,
        current_direction: Direction,
        grid: GridSize,
    ) -> Direction {
        let head = snake.head();

        let mut best_direction = current_direction;
        let mut best_distance = i32::MAX;

        for direction in Self::candidate_directions(snake, current_direction) {
            let next_pos = next_cell(head, direction, grid);
            if !Self::is_safe_position(next_pos, snake, opponent) {
                continue;
            }

            let distance = Self::nearest_food_distance(next_pos, food, grid);
            if distance < best_distance {
                best_distance = distance;
                best_direction = direction;
            }
        }

        best_direction
    }

    fn candidate_directions(snake: &Snake, current: Direction) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| snake.len() <= 1 || !d.is_opposite(&current))
            .collect()
    }

    fn is_safe_position(pos: Point, snake: &Snake, opponent: Option<&Snake>) -> bool {
        !snake.contains(&pos) && !opponent.is_some_and(|other| other.contains(&pos))
    }

    fn nearest_food_distance(from: Point, food: &HashSet<Point>, grid: GridSize) -> i32 {
        food.iter()
            .map(|f| toroidal_distance(from, *f, grid))
            .min()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake(cells: &[(i32, i32)], direction: Direction) -> Snake {
        Snake::from_cells(cells.iter().map(|&(x, y)| Point::new(x, y)), direction)
    }

    fn food(cells: &[(i32, i32)]) -> HashSet<Point> {
        cells.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_moves_toward_nearest_food() {
        let grid = GridSize::new(10, 10);
        let bot = snake(&[(5, 5), (6, 5), (7, 5)], Direction::Left);
        let direction =
            BotController::choose_direction(&bot, None, &food(&[(5, 8)]), Direction::Left, grid);
        assert_eq!(direction, Direction::Up);
    }

    #[test]
    fn test_uses_wrap_around_distance() {
        let grid = GridSize::new(10, 10);
        let bot = snake(&[(5, 1), (6, 1), (7, 1)], Direction::Left);
        let direction =
            BotController::choose_direction(&bot, None, &food(&[(5, 9)]), Direction::Left, grid);
        assert_eq!(direction, Direction::Down);
    }

    #[test]
    fn test_equal_distance_prefers_earlier_direction() {
        let grid = GridSize::new(10, 10);
        let bot = snake(&[(5, 5), (6, 5), (7, 5)], Direction::Left);
        let direction = BotController::choose_direction(
            &bot,
            None,
            &food(&[(5, 7), (5, 3)]),
            Direction::Left,
            grid,
        );
        assert_eq!(direction, Direction::Up);

        let direction = BotController::choose_direction(
            &bot,
            None,
            &food(&[(3, 5)]),
            Direction::Left,
            grid,
        );
        assert_eq!(direction, Direction::Left);
    }

    #[test]
    fn test_no_food_picks_first_safe_direction() {
        let grid = GridSize::new(10, 10);
        let bot = snake(&[(5, 5), (6, 5), (7, 5)], Direction::Left);
        let direction =
            BotController::choose_direction(&bot, None, &HashSet::new(), Direction::Left, grid);
        assert_eq!(direction, Direction::Up);
    }

    #[test]
    fn test_never_reverses_long_snake() {
        let grid = GridSize::new(10, 10);
        let bot = snake(&[(5, 5), (4, 5), (3, 5)], Direction::Right);
        let direction =
            BotController::choose_direction(&bot, None, &food(&[(2, 5)]), Direction::Right, grid);
        assert_ne!(direction, Direction::Left);
    }

    #[test]
    fn test_single_segment_may_reverse() {
        let grid = GridSize::new(10, 10);
        let bot = snake(&[(5, 5)], Direction::Right);
        let direction =
            BotController::choose_direction(&bot, None, &food(&[(3, 5)]), Direction::Right, grid);
        assert_eq!(direction, Direction::Left);
    }

    #[test]
    fn test_skips_cells_occupied_by_opponent() {
        let grid = GridSize::new(10, 10);
        let bot = snake(&[(5, 5), (6, 5), (7, 5)], Direction::Left);
        let player = snake(&[(5, 6), (4, 6), (3, 6)], Direction::Right);
        let direction = BotController::choose_direction(
            &bot,
            Some(&player),
            &food(&[(5, 8)]),
            Direction::Left,
            grid,
        );
        assert_eq!(direction, Direction::Down);
    }

    #[test]
    fn test_boxed_in_keeps_current_direction() {
        let grid = GridSize::new(10, 10);
        let bot = snake(&[(5, 5), (6, 5), (7, 5)], Direction::Left);
        let player = snake(&[(5, 6), (4, 6), (4, 5), (4, 4), (5, 4)], Direction::Up);
        let direction = BotController::choose_direction(
            &bot,
            Some(&player),
            &food(&[(0, 0)]),
            Direction::Left,
            grid,
        );
        assert_eq!(direction, Direction::Left);
    }
}

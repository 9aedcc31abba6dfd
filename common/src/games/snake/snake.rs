use std::collections::{HashSet, VecDeque};

use super::types::{Direction, GridSize, Point};

pub const START_LENGTH: usize = 3;

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
    pub direction: Direction,
    pub queued_direction: Direction,
}

impl Snake {
    /// Lays out `START_LENGTH` segments from `head`, each one step further in `trail`.
    pub fn new(head: Point, trail: Direction, direction: Direction, grid: GridSize) -> Self {
        let (dx, dy) = trail.delta();
        let cells = (0..START_LENGTH as i32).map(|i| {
            Point::new(
                (head.x + dx * i).rem_euclid(grid.width),
                (head.y + dy * i).rem_euclid(grid.height),
            )
        });
        Self::from_cells(cells, direction)
    }

    /// Builds a snake from cells ordered head first.
    pub fn from_cells(cells: impl IntoIterator<Item = Point>, direction: Direction) -> Self {
        let body: VecDeque<Point> = cells.into_iter().collect();
        let body_set = body.iter().copied().collect();
        Self {
            body,
            body_set,
            direction,
            queued_direction: direction,
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, cell: &Point) -> bool {
        self.body_set.contains(cell)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub fn push_head(&mut self, head: Point) {
        self.body.push_front(head);
        self.body_set.insert(head);
    }

    /// Drops the tail unless it is the only segment left.
    pub fn pop_tail(&mut self) {
        if self.body.len() <= 1 {
            return;
        }
        if let Some(tail) = self.body.pop_back() {
            self.body_set.remove(&tail);
        }
    }

    /// A single-segment snake may reverse, it cannot run into its vacated tail.
    pub fn accepts_turn(&self, requested: Direction) -> bool {
        !requested.is_opposite(&self.direction) || self.len() <= 1
    }

    pub fn queue_direction(&mut self, requested: Direction) -> bool {
        if !self.accepts_turn(requested) {
            return false;
        }
        self.queued_direction = requested;
        true
    }

    /// Promotes the queued direction, re-checked against the current one.
    pub fn commit_queued_direction(&mut self) {
        if self.accepts_turn(self.queued_direction) {
            self.direction = self.queued_direction;
        }
    }
}

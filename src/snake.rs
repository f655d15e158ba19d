use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::utils::Point;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    /// Opposite direction (180°).
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step (dx, dy) in grid cells; y grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// The snake body, head first.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
}

impl Snake {
    /// Builds a straight snake trailing behind `head` opposite to `direction`.
    pub fn new(head: Point, init_length: usize, direction: Direction, block: i32) -> Snake {
        let (dx, dy) = direction.opposite().delta();
        let body = (0..init_length.max(1) as i32)
            .map(|i| head.offset(dx * block * i, dy * block * i))
            .collect();
        Snake { body }
    }

    /// Snake from explicit cells, head first. Used to set up scenarios.
    pub fn from_cells(cells: impl IntoIterator<Item = Point>) -> Snake {
        let body: VecDeque<Point> = cells.into_iter().collect();
        assert!(!body.is_empty(), "snake needs at least a head");
        Snake { body }
    }

    /// current head coordinates
    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    pub fn contains(&self, cell: Point) -> bool {
        self.body.contains(&cell)
    }

    /// Whether `cell` is on the body, ignoring the head.
    pub fn hits_body(&self, cell: Point) -> bool {
        self.body.iter().skip(1).any(|&p| p == cell)
    }

    /// The cell one block away from the head in `direction`. No clamping.
    pub fn advance(&self, direction: Direction, block: i32) -> Point {
        let (dx, dy) = direction.delta();
        self.head().offset(dx * block, dy * block)
    }

    pub fn push_head(&mut self, cell: Point) {
        self.body.push_front(cell);
    }

    pub fn pop_tail(&mut self) -> Option<Point> {
        self.body.pop_back()
    }
}

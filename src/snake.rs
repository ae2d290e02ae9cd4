use std::collections::VecDeque;

use crate::config::GRID_COUNT;
use crate::pos::{Dir, Pos};

pub const INITIAL_LENGTH: usize = 5;

/// The player's snake. Head is at the front of the deque; the body never
/// grows past `length`, and its cells stay distinct while alive.
pub struct Snake {
    positions: VecDeque<Pos>,
    direction: Dir,
    length: usize,
}

impl Snake {
    pub fn new() -> Self {
        let mut snake = Self {
            positions: VecDeque::new(),
            direction: Dir::Right,
            length: INITIAL_LENGTH,
        };
        snake.reset();
        snake
    }

    /// Back to the canonical start: five segments centered on the grid,
    /// trailing left of the head, facing right.
    pub fn reset(&mut self) {
        let cx = GRID_COUNT as i32 / 2;
        let cy = GRID_COUNT as i32 / 2;
        self.positions.clear();
        for i in 0..INITIAL_LENGTH as i32 {
            self.positions.push_back(Pos::new(cx - i, cy));
        }
        self.direction = Dir::Right;
        self.length = INITIAL_LENGTH;
    }

    /// Move one cell in the current direction, wrapping at the edges.
    /// Returns false on self-collision and leaves the body untouched.
    pub fn advance(&mut self) -> bool {
        let new_head = self.head().stepped(self.direction);
        if self.positions.contains(&new_head) {
            return false;
        }
        self.positions.push_front(new_head);
        while self.positions.len() > self.length {
            self.positions.pop_back();
        }
        true
    }

    /// Turn, unless the turn would reverse straight into the neck.
    pub fn set_direction(&mut self, dir: Dir) {
        if dir != self.direction.opposite() {
            self.direction = dir;
        }
    }

    /// Raise the target length; the tail catches up over the next advances.
    pub fn grow(&mut self) {
        self.length += 1;
    }

    pub fn head(&self) -> Pos {
        self.positions[0]
    }

    pub fn direction(&self) -> Dir {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Never true after construction; `reset` always rebuilds the body.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn target_length(&self) -> usize {
        self.length
    }

    pub fn segments(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions.iter().copied()
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

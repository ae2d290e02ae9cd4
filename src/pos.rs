use crate::config::GRID_COUNT;

/// A cell on the grid. Both axes live in `[0, GRID_COUNT)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// One step in `dir`, wrapping at the grid edges.
    pub fn stepped(self, dir: Dir) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: (self.x + dx).rem_euclid(GRID_COUNT as i32),
            y: (self.y + dy).rem_euclid(GRID_COUNT as i32),
        }
    }
}

impl Dir {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_moves_one_cell() {
        let p = Pos::new(5, 5);
        assert_eq!(p.stepped(Dir::Up), Pos::new(5, 4));
        assert_eq!(p.stepped(Dir::Down), Pos::new(5, 6));
        assert_eq!(p.stepped(Dir::Left), Pos::new(4, 5));
        assert_eq!(p.stepped(Dir::Right), Pos::new(6, 5));
    }

    #[test]
    fn stepping_wraps_all_four_edges() {
        let last = GRID_COUNT as i32 - 1;
        assert_eq!(Pos::new(last, 5).stepped(Dir::Right), Pos::new(0, 5));
        assert_eq!(Pos::new(0, 5).stepped(Dir::Left), Pos::new(last, 5));
        assert_eq!(Pos::new(5, last).stepped(Dir::Down), Pos::new(5, 0));
        assert_eq!(Pos::new(5, 0).stepped(Dir::Up), Pos::new(5, last));
    }

    #[test]
    fn opposites_pair_up() {
        for dir in [Dir::Up, Dir::Down, Dir::Left, Dir::Right] {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }
}

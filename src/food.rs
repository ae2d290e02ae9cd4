use rand::Rng;

use crate::config::{Rgba, FOOD_PALETTE, GRID_COUNT};
use crate::pos::Pos;

/// The single food pellet. May land on the snake; the update phase only
/// cares whether the head reaches it.
pub struct Food {
    pub position: Pos,
    pub color: Rgba,
}

impl Food {
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut food = Self {
            position: Pos::new(0, 0),
            color: FOOD_PALETTE[0],
        };
        food.randomize(rng);
        food
    }

    /// Uniform cell over the whole grid, uniform palette color.
    pub fn randomize(&mut self, rng: &mut impl Rng) {
        self.position = Pos::new(
            rng.gen_range(0..GRID_COUNT as i32),
            rng.gen_range(0..GRID_COUNT as i32),
        );
        self.color = FOOD_PALETTE[rng.gen_range(0..FOOD_PALETTE.len())];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn randomize_stays_on_the_grid() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut food = Food::new(&mut rng);
        for _ in 0..200 {
            food.randomize(&mut rng);
            assert!((0..GRID_COUNT as i32).contains(&food.position.x));
            assert!((0..GRID_COUNT as i32).contains(&food.position.y));
            assert!(FOOD_PALETTE.contains(&food.color));
        }
    }

    #[test]
    fn same_seed_same_placement() {
        let mut a = SmallRng::seed_from_u64(42);
        let mut b = SmallRng::seed_from_u64(42);
        let fa = Food::new(&mut a);
        let fb = Food::new(&mut b);
        assert_eq!(fa.position, fb.position);
        assert_eq!(fa.color, fb.color);
    }
}

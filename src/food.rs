use log::trace;
use rand::Rng;

use crate::border::Field;
use crate::snake::Snake;
use crate::utils::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Point,
}

impl Food {
    /// Picks a random free cell, retrying while the pick lands on the snake.
    ///
    /// Returns `None` only when the snake covers the whole field, where the
    /// retry loop could never finish.
    pub fn place<R: Rng + ?Sized>(snake: &Snake, field: &Field, rng: &mut R) -> Option<Food> {
        if snake.len() >= field.cell_count() {
            return None;
        }
        loop {
            let pos = field.random_cell(rng);
            if !snake.contains(pos) {
                return Some(Food { position: pos });
            }
            trace!("food pick {:?} on snake, retrying", pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn food_never_lands_on_snake() {
        let field = Field::new(200, 200, 20);
        let mut rng = StdRng::seed_from_u64(11);
        // fill all rows but the last one
        let cells = (0..9).flat_map(|row| {
            let y = row * 20;
            (0..10).map(move |col| Point::new(col * 20, y))
        });
        let snake = Snake::from_cells(cells);
        for _ in 0..200 {
            let food = Food::place(&snake, &field, &mut rng).unwrap();
            assert!(!snake.contains(food.position));
            assert_eq!(food.position.y, 180);
            assert_eq!(food.position.x % 20, 0);
        }
    }

    #[test]
    fn food_is_inside_field() {
        let field = Field::new(640, 480, 20);
        let snake = Snake::new(Point::new(320, 240), 3, Direction::Right, 20);
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..500 {
            let food = Food::place(&snake, &field, &mut rng).unwrap();
            assert!(field.is_inside(food.position));
        }
    }

    #[test]
    fn full_board_has_no_food() {
        let field = Field::new(60, 20, 20);
        let snake = Snake::from_cells([Point::new(0, 0), Point::new(20, 0), Point::new(40, 0)]);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(Food::place(&snake, &field, &mut rng).is_none());
    }
}

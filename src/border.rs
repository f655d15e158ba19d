use rand::Rng;

use crate::utils::Point;

/// Playing field in pixels, divided into square blocks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub width: i32,
    pub height: i32,
    pub block: i32,
}

impl Field {
    pub fn new(width: i32, height: i32, block: i32) -> Self {
        Self { width, height, block }
    }

    /// A head at `p` is inside when `0 <= x <= width - block` and likewise for y.
    pub fn is_inside(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x <= self.width - self.block && p.y <= self.height - self.block
    }

    pub fn columns(&self) -> i32 {
        (self.width - self.block) / self.block + 1
    }

    pub fn rows(&self) -> i32 {
        (self.height - self.block) / self.block + 1
    }

    pub fn cell_count(&self) -> usize {
        (self.columns() * self.rows()) as usize
    }

    /// Uniformly random block-aligned cell.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        let x = rng.gen_range(0..self.columns()) * self.block;
        let y = rng.gen_range(0..self.rows()) * self.block;
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn inside_bounds_are_inclusive_of_last_block() {
        let field = Field::new(640, 480, 20);
        assert!(field.is_inside(Point::new(0, 0)));
        assert!(field.is_inside(Point::new(620, 460)));
        assert!(!field.is_inside(Point::new(640, 0)));
        assert!(!field.is_inside(Point::new(0, 480)));
        assert!(!field.is_inside(Point::new(-20, 0)));
        assert!(!field.is_inside(Point::new(0, -20)));
    }

    #[test]
    fn random_cells_are_aligned_and_inside() {
        let field = Field::new(200, 200, 20);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let p = field.random_cell(&mut rng);
            assert!(field.is_inside(p));
            assert_eq!(p.x % 20, 0);
            assert_eq!(p.y % 20, 0);
        }
        assert_eq!(field.cell_count(), 100);
    }
}

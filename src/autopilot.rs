//! Coin-flip steering for the demo variant.
//!
//! The field is split into 2x2-block tiles. Where the head sits inside its
//! tile decides which two directions are on offer; a fair coin picks one of
//! them and a one-step lookahead swaps to the other if the pick would crash.
//! Food is never considered, so the snake wanders.

use rand::Rng;

use crate::snake::Direction;
use crate::utils::Point;

/// Position of a block inside its 2x2 tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PhaseClass {
    /// even column, even row
    EvenEven,
    /// even column, odd row
    EvenOdd,
    /// odd column, even row
    OddEven,
    /// odd column, odd row
    OddOdd,
}

impl PhaseClass {
    /// Phase of `head`, or `None` when it is not aligned to the block grid.
    pub fn of(head: Point, block: i32) -> Option<PhaseClass> {
        let tile = 2 * block;
        let column = head.x.rem_euclid(tile);
        let row = head.y.rem_euclid(tile);
        match (column == 0, column == block, row == 0, row == block) {
            (true, _, true, _) => Some(PhaseClass::EvenEven),
            (true, _, _, true) => Some(PhaseClass::EvenOdd),
            (_, true, true, _) => Some(PhaseClass::OddEven),
            (_, true, _, true) => Some(PhaseClass::OddOdd),
            _ => None,
        }
    }

    /// The coin's two outcomes for this phase.
    pub fn candidates(self) -> (Direction, Direction) {
        match self {
            PhaseClass::EvenEven => (Direction::Left, Direction::Down),
            PhaseClass::EvenOdd => (Direction::Right, Direction::Down),
            PhaseClass::OddEven => (Direction::Left, Direction::Up),
            PhaseClass::OddOdd => (Direction::Right, Direction::Up),
        }
    }
}

/// Picks the next direction given the coin result.
///
/// `heads` selects the first candidate of the phase, otherwise the second.
/// If the chosen one would collide the other is returned unchecked.
pub fn decide(
    head: Point,
    current: Direction,
    block: i32,
    heads: bool,
    would_collide: impl Fn(Direction) -> bool,
) -> Direction {
    let Some(phase) = PhaseClass::of(head, block) else {
        return current;
    };
    let (first, second) = phase.candidates();
    let (pick, other) = if heads { (first, second) } else { (second, first) };
    if would_collide(pick) { other } else { pick }
}

/// Flips a fair coin and steers.
pub fn steer<R: Rng + ?Sized>(
    rng: &mut R,
    head: Point,
    current: Direction,
    block: i32,
    would_collide: impl Fn(Direction) -> bool,
) -> Direction {
    let heads = rng.gen_bool(0.5);
    decide(head, current, block, heads, would_collide)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_classes_follow_tile_parity() {
        assert_eq!(PhaseClass::of(Point::new(0, 0), 20), Some(PhaseClass::EvenEven));
        assert_eq!(PhaseClass::of(Point::new(40, 20), 20), Some(PhaseClass::EvenOdd));
        assert_eq!(PhaseClass::of(Point::new(100, 120), 20), Some(PhaseClass::OddEven));
        assert_eq!(PhaseClass::of(Point::new(60, 180), 20), Some(PhaseClass::OddOdd));
        assert_eq!(PhaseClass::of(Point::new(10, 0), 20), None);
    }

    #[test]
    fn coin_selects_candidate() {
        let head = Point::new(100, 100); // odd, odd
        let never = |_| false;
        assert_eq!(decide(head, Direction::Right, 20, true, never), Direction::Right);
        assert_eq!(decide(head, Direction::Right, 20, false, never), Direction::Up);
    }

    #[test]
    fn lookahead_forces_alternate() {
        let head = Point::new(0, 0); // even, even: Left or Down
        let left_blocked = |d| d == Direction::Left;
        assert_eq!(decide(head, Direction::Right, 20, true, left_blocked), Direction::Down);
        // alternate is forced even when it collides too
        let all_blocked = |_| true;
        assert_eq!(decide(head, Direction::Right, 20, false, all_blocked), Direction::Left);
    }

    #[test]
    fn unaligned_head_keeps_direction() {
        let head = Point::new(5, 5);
        assert_eq!(decide(head, Direction::Up, 20, true, |_| false), Direction::Up);
    }
}

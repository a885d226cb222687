use crate::grid::Grid;
use crate::snake::{Body, Position};

/// Outcome of checking a proposed head move.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    Clear,
    Wall,
    SelfHit,
}

/// Classifies `new_head` against the walls and the current body.
///
/// Walls are checked first. The tail (index 0) is excluded from the body
/// check because it normally moves away this step; when the same step also
/// eats food the tail stays put, so a head landing on it is still admitted.
#[must_use]
pub fn classify(new_head: Position, body: &Body, grid: Grid) -> Collision {
    if !grid.in_bounds(new_head) {
        return Collision::Wall;
    }

    if body.segments().skip(1).any(|segment| *segment == new_head) {
        return Collision::SelfHit;
    }

    Collision::Clear
}

#[cfg(test)]
mod tests {
    use super::{classify, Collision};
    use crate::grid::Grid;
    use crate::snake::{Body, Position};

    fn grid() -> Grid {
        Grid::new(20, 20).expect("valid grid")
    }

    fn loop_body() -> Body {
        Body::from_segments(vec![
            Position::new(10, 10),
            Position::new(10, 11),
            Position::new(10, 12),
            Position::new(9, 12),
            Position::new(9, 11),
            Position::new(9, 10),
        ])
    }

    #[test]
    fn moving_past_the_edge_is_a_wall_hit() {
        let body = Body::from_segments(vec![Position::new(18, 10), Position::new(19, 10)]);

        assert_eq!(classify(Position::new(20, 10), &body, grid()), Collision::Wall);
        assert_eq!(classify(Position::new(5, -1), &body, grid()), Collision::Wall);
    }

    #[test]
    fn landing_on_a_non_tail_segment_is_a_self_hit() {
        assert_eq!(
            classify(Position::new(10, 11), &loop_body(), grid()),
            Collision::SelfHit
        );
    }

    #[test]
    fn landing_on_the_tail_is_allowed() {
        assert_eq!(
            classify(Position::new(10, 10), &loop_body(), grid()),
            Collision::Clear
        );
    }

    #[test]
    fn wall_wins_over_self() {
        let body = Body::from_segments(vec![Position::new(0, 0), Position::new(0, 1)]);

        assert_eq!(classify(Position::new(-1, 0), &body, grid()), Collision::Wall);
    }

    #[test]
    fn classification_is_repeatable() {
        let body = loop_body();
        let head = Position::new(10, 12);

        let first = classify(head, &body, grid());
        for _ in 0..10 {
            assert_eq!(classify(head, &body, grid()), first);
        }
    }
}

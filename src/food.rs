use crate::grid::Grid;
use crate::rng::SeededRandom;
use crate::snake::{Body, Position};

/// No free cell is left for food; the round is complete.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BoardFull;

/// Picks a uniformly random cell not covered by `body`.
///
/// Candidates are taken in the grid's x-outer, y-inner order and indexed
/// with a single draw from `rng`.
pub fn spawn(body: &Body, grid: Grid, rng: &mut SeededRandom) -> Result<Position, BoardFull> {
    let mut candidates = Vec::with_capacity(grid.total_cells().saturating_sub(body.len()));
    candidates.extend(grid.cells().filter(|position| !body.occupies(*position)));

    if candidates.is_empty() {
        return Err(BoardFull);
    }

    let index = rng.next(candidates.len());
    Ok(candidates[index])
}

#[cfg(test)]
mod tests {
    use super::{spawn, BoardFull};
    use crate::grid::Grid;
    use crate::rng::SeededRandom;
    use crate::snake::{Body, Position};

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut rng = SeededRandom::new(7);
        let grid = Grid::new(8, 6).expect("valid grid");
        let body = Body::from_segments(vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(2, 0),
        ]);

        for _ in 0..100 {
            let food = spawn(&body, grid, &mut rng).expect("board has room");
            assert!(!body.occupies(food));
            assert!(grid.in_bounds(food));
        }
    }

    #[test]
    fn single_free_cell_is_always_chosen() {
        let mut rng = SeededRandom::new(99);
        let grid = Grid::new(3, 1).expect("valid grid");
        let body = Body::from_segments(vec![Position::new(0, 0), Position::new(2, 0)]);

        assert_eq!(spawn(&body, grid, &mut rng), Ok(Position::new(1, 0)));
    }

    #[test]
    fn full_board_reports_board_full() {
        let mut rng = SeededRandom::new(1);
        let grid = Grid::new(3, 1).expect("valid grid");
        let body = Body::from_segments(vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(2, 0),
        ]);

        assert_eq!(spawn(&body, grid, &mut rng), Err(BoardFull));
    }

    #[test]
    fn pick_follows_lcg_index_into_x_outer_order() {
        let grid = Grid::new(4, 4).expect("valid grid");
        let body = Body::default();
        let mut rng = SeededRandom::new(1);

        // First draw from seed 1 is 1103527590; 1103527590 % 16 = 6 -> (1, 2).
        assert_eq!(spawn(&body, grid, &mut rng), Ok(Position::new(1, 2)));
    }
}

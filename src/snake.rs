use std::collections::VecDeque;

use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Ordered snake segments, tail at index 0 and head at the back.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Body {
    segments: VecDeque<Position>,
}

impl Body {
    /// Creates a body from segments ordered tail to head.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        Self {
            segments: VecDeque::from(segments),
        }
    }

    /// Builds the canonical three-segment start body centred on the grid, facing right.
    #[must_use]
    pub fn canonical(width: i32, height: i32) -> Self {
        let head = Position::new(width / 2, height / 2);
        Self::from_segments(vec![
            Position::new(head.x - 2, head.y),
            Position::new(head.x - 1, head.y),
            head,
        ])
    }

    /// Returns the head position, or `None` for an empty body.
    #[must_use]
    pub fn head(&self) -> Option<Position> {
        self.segments.back().copied()
    }

    /// Returns the tail position, or `None` for an empty body.
    #[must_use]
    pub fn tail(&self) -> Option<Position> {
        self.segments.front().copied()
    }

    /// Appends a new head.
    pub fn push_head(&mut self, position: Position) {
        self.segments.push_back(position);
    }

    /// Removes and returns the tail segment.
    pub fn pop_tail(&mut self) -> Option<Position> {
        self.segments.pop_front()
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.segments.contains(&position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over segments from tail to head.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &Position> + ExactSizeIterator {
        self.segments.iter()
    }

    /// Removes every segment, returning them tail to head.
    pub fn clear(&mut self) -> Vec<Position> {
        self.segments.drain(..).collect()
    }
}

use crate::error::ConfigError;
use crate::snake::Position;

/// Fixed `width` x `height` integer lattice.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    /// Creates a grid, rejecting non-positive dimensions.
    pub fn new(width: i32, height: i32) -> Result<Self, ConfigError> {
        if width <= 0 {
            return Err(ConfigError::NonPositiveWidth(width));
        }
        if height <= 0 {
            return Err(ConfigError::NonPositiveHeight(height));
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> i32 {
        self.height
    }

    /// Returns true when `position` lies inside the lattice.
    #[must_use]
    pub fn in_bounds(self, position: Position) -> bool {
        position.x >= 0 && position.y >= 0 && position.x < self.width && position.y < self.height
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Iterates every cell, x outer and y inner.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        (0..self.width).flat_map(move |x| (0..self.height).map(move |y| Position { x, y }))
    }
}

use std::fmt;

use thiserror::Error;

/// Largest grid the editor will allocate cell buffers for.
pub const MAX_CELLS: usize = 1 << 20;

/// A grid cell, addressed as (column, row).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Steps by `(dx, dy)`, returning `None` if that would leave the first quadrant.
    pub fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Self { x, y })
    }

    pub fn is_adjacent(self, other: Coordinate) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("cell size must be a positive number, got {0}")]
    InvalidCellSize(f32),
    #[error("a {width}x{height} surface cannot hold a single {cell_size}-unit cell")]
    Empty {
        width: f32,
        height: f32,
        cell_size: f32,
    },
    #[error("a grid needs at least one row and one column, got {rows}x{cols}")]
    ZeroDimension { rows: usize, cols: usize },
    #[error("a {rows}x{cols} grid is larger than the {max} cell limit")]
    TooLarge { rows: usize, cols: usize, max: usize },
}

/// Fixed-size grid. Holds no cell data, only the range of valid coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::ZeroDimension { rows, cols });
        }

        Self::checked(rows, cols)
    }

    /// Sizes the grid to fit a rendering surface: `rows = floor(height / cell_size)`,
    /// `cols = floor(width / cell_size)`.
    pub fn from_surface(width: f32, height: f32, cell_size: f32) -> Result<Self, GridError> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(GridError::InvalidCellSize(cell_size));
        }

        let fit = |length: f32| {
            if length.is_finite() && length > 0.0 {
                (length / cell_size).floor() as usize
            } else {
                0
            }
        };
        let rows = fit(height);
        let cols = fit(width);

        if rows == 0 || cols == 0 {
            return Err(GridError::Empty {
                width,
                height,
                cell_size,
            });
        }

        Self::checked(rows, cols)
    }

    fn checked(rows: usize, cols: usize) -> Result<Self, GridError> {
        match rows.checked_mul(cols) {
            Some(cells) if cells <= MAX_CELLS => Ok(Self { rows, cols }),
            _ => Err(GridError::TooLarge {
                rows,
                cols,
                max: MAX_CELLS,
            }),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        // Bounded by MAX_CELLS at construction.
        self.rows.saturating_mul(self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_valid(&self, coordinate: Coordinate) -> bool {
        coordinate.x < self.cols && coordinate.y < self.rows
    }

    pub fn index(&self, coordinate: Coordinate) -> Option<usize> {
        self.is_valid(coordinate)
            .then(|| coordinate.y * self.cols + coordinate.x)
    }

    /// Converts a position on the surface to the cell under it. The result may
    /// still be outside the grid; callers check it with `is_valid`.
    pub fn coordinate_from_pixel(x: f32, y: f32, cell_size: f32) -> Option<Coordinate> {
        if !(x.is_finite() && y.is_finite()) || x < 0.0 || y < 0.0 || cell_size <= 0.0 {
            return None;
        }

        let col = (x / cell_size).floor() as usize;
        let row = (y / cell_size).floor() as usize;

        Some(Coordinate::new(col, row))
    }

    /// Every valid coordinate, row by row.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |y| (0..cols).map(move |x| Coordinate::new(x, y)))
    }
}

use super::Cell;
use thiserror::Error;

/// Construction-time contract violations for [`Grid`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    #[error("literal has {actual} columns, expected {expected}")]
    ColumnCount { expected: usize, actual: usize },

    #[error("literal column {column} has {actual} cells, expected {expected}")]
    ColumnHeight {
        column: usize,
        expected: usize,
        actual: usize,
    },
}

/// Grid is a fixed-size, hard-edged 2D board of cells.
///
/// Cells are addressed by `(x, y)` with `0 <= x < width` and `0 <= y < height`.
/// Operations that change the shape (`rotate`, `resize`) return a new grid;
/// `set` and `paste` are the only in-place mutators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        Self::try_new(width, height).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Fallible form of [`Grid::new`] for dimensions that come from outside the program.
    pub fn try_new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        })
    }

    /// Build a grid from a column-major literal: `columns[x][y]`.
    ///
    /// # Panics
    /// Panics if the literal's extents don't match `width` x `height`.
    pub fn from_columns(width: usize, height: usize, columns: &[&[u8]]) -> Self {
        Self::try_from_columns(width, height, columns).unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn try_from_columns(
        width: usize,
        height: usize,
        columns: &[&[u8]],
    ) -> Result<Self, GridError> {
        if columns.len() != width {
            return Err(GridError::ColumnCount {
                expected: width,
                actual: columns.len(),
            });
        }
        if let Some((column, col)) = columns.iter().enumerate().find(|(_, c)| c.len() != height) {
            return Err(GridError::ColumnHeight {
                column,
                expected: height,
                actual: col.len(),
            });
        }

        let mut grid = Self::try_new(width, height)?;
        for (x, column) in columns.iter().enumerate() {
            for (y, &value) in column.iter().enumerate() {
                grid.set(x, y, Cell::from(value));
            }
        }
        Ok(grid)
    }

    /// Build a grid by evaluating `f` at every coordinate.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Cell) -> Self {
        let mut grid = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let idx = grid.get_index(x, y);
                grid.cells[idx] = f(x, y);
            }
        }
        grid
    }

    /// Wrap an already computed row-major cell buffer.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        assert_eq!(cells.len(), width * height, "cell buffer does not match {width}x{height}");
        Self { width, height, cells }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// `0 <= x < width && 0 <= y < height`. Signed so callers can probe past the edges.
    pub fn is_in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Get the cell at `(x, y)`.
    ///
    /// # Panics
    /// Panics if the coordinate is out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) is outside a {}x{} grid",
            self.width,
            self.height
        );
        self.cells[self.get_index(x, y)]
    }

    /// Set the cell at `(x, y)`.
    ///
    /// # Panics
    /// Panics if the coordinate is out of bounds.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) is outside a {}x{} grid",
            self.width,
            self.height
        );
        let idx = self.get_index(x, y);
        self.cells[idx] = cell;
    }

    /// Copy every cell of `source` into this grid, offset by `(offset_x, offset_y)`.
    /// Source cells landing outside this grid are dropped.
    pub fn paste(&mut self, source: &Grid, offset_x: isize, offset_y: isize) {
        for (x, y, cell) in source.iter_cells() {
            // Offsets too large to add land off the board
            let (Some(dx), Some(dy)) = (
                offset_x.checked_add(x as isize),
                offset_y.checked_add(y as isize),
            ) else {
                continue;
            };
            if self.is_in_bounds(dx, dy) {
                self.set(dx as usize, dy as usize, cell);
            }
        }
    }

    /// New grid rotated clockwise by `turns` quarter turns (normalized mod 4).
    /// Odd turns swap width and height.
    pub fn rotate(&self, turns: i32) -> Self {
        let turns = turns.rem_euclid(4);
        let (w, h) = (self.width, self.height);
        let mut rotated = if turns % 2 == 0 {
            Self::new(w, h)
        } else {
            Self::new(h, w)
        };

        for (x, y, cell) in self.iter_cells() {
            let (nx, ny) = match turns {
                0 => (x, y),
                1 => (y, w - 1 - x),
                2 => (w - 1 - x, h - 1 - y),
                _ => (h - 1 - y, x),
            };
            rotated.set(nx, ny, cell);
        }
        rotated
    }

    /// New grid of the requested size holding this grid's content at the origin.
    pub fn resize(&self, new_width: usize, new_height: usize) -> Self {
        let mut resized = Self::new(new_width, new_height);
        resized.paste(self, 0, 0);
        resized
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Coordinates of live cells in row-major order
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect()
    }
}

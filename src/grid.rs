//! The cost field that searches run on.

use crate::error::{GridError, GridResult};
use crate::{Cost, Point};

use std::fmt;
use std::str::FromStr;

/// The repetition factor commonly used with [`Grid::tile`].
pub const DEFAULT_REPEAT: usize = 5;

/// The highest cost a single cell may have. Costs wrap back to `1` after this.
pub const MAX_CELL_COST: u8 = 9;

/// A rectangular field of traversal costs.
///
/// Every cell holds the cost of *entering* it, a value in `1..=9`. The shape of a Grid never
/// changes after construction, and [`PathSearch`](crate::PathSearch) only ever borrows it
/// immutably.
///
/// ## Examples
/// ```
/// use stepwise_pathfinding::Grid;
///
/// let grid: Grid = "116\n138\n213".parse().unwrap();
///
/// assert_eq!(grid.size(), (3, 3));
/// assert_eq!(grid.get((2, 1)), 8);
/// assert!(!grid.contains((3, 0)));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Creates a Grid from row-major cell costs.
    ///
    /// Fails if `width * height` overflows, if `cells` does not hold exactly that many values,
    /// if that number is zero, or if any value lies outside of `1..=9`.
    pub fn new(width: usize, height: usize, cells: Vec<u8>) -> GridResult<Grid> {
        let expected = width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })?;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                width,
                height,
                expected,
                actual: cells.len(),
            });
        }
        if expected == 0 {
            return Err(GridError::Empty);
        }
        if let Some(i) = cells.iter().position(|&c| c == 0 || c > MAX_CELL_COST) {
            return Err(GridError::InvalidCost {
                x: i % width,
                y: i / width,
                value: cells[i],
            });
        }
        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    /// Parses a Grid from rows of digits, one row per item.
    ///
    /// All rows must have the same, non-zero length and consist only of the digits `1` to `9`.
    ///
    /// ## Examples
    /// ```
    /// use stepwise_pathfinding::{Grid, GridError};
    ///
    /// let grid = Grid::from_rows(["1163", "1381"]).unwrap();
    /// assert_eq!(grid.size(), (4, 2));
    ///
    /// let ragged = Grid::from_rows(["1163", "138"]);
    /// assert_eq!(
    ///     ragged,
    ///     Err(GridError::RaggedRow { row: 1, expected: 4, actual: 3 })
    /// );
    /// ```
    pub fn from_rows<I, S>(rows: I) -> GridResult<Grid>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut width = None;
        let mut height = 0;
        let mut cells = vec![];

        for (row, line) in rows.into_iter().enumerate() {
            let line = line.as_ref();
            let mut len = 0;
            for (column, c) in line.chars().enumerate() {
                match c.to_digit(10) {
                    Some(d @ 1..=9) => cells.push(d as u8),
                    _ => {
                        return Err(GridError::InvalidDigit {
                            row,
                            column,
                            found: c,
                        })
                    }
                }
                len += 1;
            }
            if len == 0 {
                return Err(GridError::EmptyRow { row });
            }

            let expected = *width.get_or_insert(len);
            if len != expected {
                return Err(GridError::RaggedRow {
                    row,
                    expected,
                    actual: len,
                });
            }
            height += 1;
        }

        Grid::new(width.unwrap_or(0), height, cells)
    }

    /// The number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`, since construction rejects empty Grids.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The top-left corner, where searches start by default.
    pub fn start(&self) -> Point {
        (0, 0)
    }

    /// The bottom-right corner, where searches end by default.
    pub fn goal(&self) -> Point {
        (self.width - 1, self.height - 1)
    }

    /// Checks whether `point` lies within the Grid.
    pub fn contains(&self, (x, y): Point) -> bool {
        x < self.width && y < self.height
    }

    /// Returns the cost of entering the cell at `point`.
    ///
    /// ## Panics
    /// if `point` lies outside the Grid. Use [`get_checked`](Grid::get_checked) if that can
    /// happen.
    #[track_caller]
    pub fn get(&self, point: Point) -> Cost {
        match self.get_checked(point) {
            Some(cost) => cost,
            None => panic!(
                "point {:?} is out of bounds for a {}x{} grid",
                point, self.width, self.height
            ),
        }
    }

    /// Returns the cost of entering the cell at `point`, or `None` if `point` lies outside
    /// the Grid.
    pub fn get_checked(&self, point: Point) -> Option<Cost> {
        if self.contains(point) {
            Some(self.cells[point.1 * self.width + point.0] as Cost)
        } else {
            None
        }
    }

    /// Iterates over all points of the Grid in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| (x, y)))
    }

    /// Creates a Grid made of `repeat × repeat` copies of this one.
    ///
    /// Each copy has its costs raised by its tile distance from the top-left copy
    /// (`tile_x + tile_y`), wrapping from `9` back to `1`.
    ///
    /// ## Panics
    /// if `repeat` is zero.
    ///
    /// ## Examples
    /// ```
    /// use stepwise_pathfinding::Grid;
    ///
    /// let grid = Grid::new(1, 1, vec![8]).unwrap();
    /// let tiled = grid.tile(3);
    ///
    /// assert_eq!(tiled.to_string(), "891\n912\n123");
    /// ```
    #[track_caller]
    pub fn tile(&self, repeat: usize) -> Grid {
        assert!(repeat > 0, "cannot tile a grid zero times");
        let (width, height) = (self.width * repeat, self.height * repeat);

        let cells = timed!("tile grid", {
            let mut cells = Vec::with_capacity(width * height);
            for y in 0..height {
                for x in 0..width {
                    cells.push(self.tiled_value((x, y)));
                }
            }
            cells
        });

        Grid {
            width,
            height,
            cells,
        }
    }

    /// Same as [`tile`](Grid::tile), but fills the rows of the result in parallel.
    ///
    /// ## Panics
    /// if `repeat` is zero.
    #[cfg(feature = "parallel")]
    #[track_caller]
    pub fn tile_parallel(&self, repeat: usize) -> Grid {
        use rayon::prelude::*;

        assert!(repeat > 0, "cannot tile a grid zero times");
        let (width, height) = (self.width * repeat, self.height * repeat);

        let cells = timed!("tile grid in parallel", {
            let mut cells = vec![0; width * height];
            cells
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| {
                    for (x, cell) in row.iter_mut().enumerate() {
                        *cell = self.tiled_value((x, y));
                    }
                });
            cells
        });

        Grid {
            width,
            height,
            cells,
        }
    }

    fn tiled_value(&self, (x, y): Point) -> u8 {
        let (tile_x, local_x) = (x / self.width, x % self.width);
        let (tile_y, local_y) = (y / self.height, y % self.height);
        let source = self.cells[local_y * self.width + local_x];
        wrap_cost(source, tile_x + tile_y)
    }
}

/// Raises `cost` by `offset`, wrapping around within `1..=9`.
fn wrap_cost(cost: u8, offset: usize) -> u8 {
    let max = MAX_CELL_COST as usize;
    (1 + (cost as usize - 1 + offset) % max) as u8
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parses one row per line. Trailing whitespace on each line and at the end of the input
    /// is ignored.
    fn from_str(s: &str) -> GridResult<Grid> {
        Grid::from_rows(s.trim_end().lines().map(str::trim_end))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width).enumerate() {
            if y > 0 {
                writeln!(fmt)?;
            }
            for cell in row {
                write!(fmt, "{}", cell)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        writeln!(fmt, "Grid {}x{}:", self.width, self.height)?;
        write!(fmt, "{}", self)
    }
}

#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find the cheapest Path across a Grid of cell costs, one step at a time.
//!
//! ## Introduction
//! Every cell of a [`Grid`] holds the cost of entering it, a digit from `1` to `9`. A
//! [`PathSearch`] finds the cheapest way from the top-left to the bottom-right corner, moving up,
//! down, left or right. Only the cells that are entered count: the start is free.
//!
//! The search is an [A* search](https://en.wikipedia.org/wiki/A*_search_algorithm) guided by
//! the Manhattan distance to the goal. Since every cell costs at least `1`, that distance never
//! overestimates the remaining Cost, so the Paths found are always optimal.
//!
//! Unlike most implementations, the search does not have to run in one go. Each call to
//! [`step`](PathSearch::step) finalizes a single Point, and the progress can be inspected in
//! between, for example to animate it. Or simply call
//! [`run_to_completion`](PathSearch::run_to_completion).
//!
//! Grids can also be enlarged with [`Grid::tile`], which lays out copies of a Grid next to
//! each other, raising the costs of each copy by its distance from the first one.
//!
//! ## Examples
//! Parsing a Grid and searching it:
//! ```
//! use stepwise_pathfinding::prelude::*;
//!
//! let grid: Grid = "\
//! 1163751742
//! 1381373672
//! 2136511328
//! 3694931569
//! 7463417111
//! 1319128137
//! 1359912421
//! 3125421639
//! 1293138521
//! 2311944581"
//!     .parse()
//!     .unwrap();
//!
//! let mut search = PathSearch::new(&grid);
//! let path = search.run_to_completion().unwrap();
//!
//! assert_eq!(path.cost(), 40);
//! assert_eq!(path.first(), Some(&(0, 0)));
//! assert_eq!(path.last(), Some(&(9, 9)));
//! ```
//!
//! ### Tiling
//! ```
//! # use stepwise_pathfinding::prelude::*;
//! # let grid: Grid = "\
//! # 1163751742
//! # 1381373672
//! # 2136511328
//! # 3694931569
//! # 7463417111
//! # 1319128137
//! # 1359912421
//! # 3125421639
//! # 1293138521
//! # 2311944581"
//! #     .parse()
//! #     .unwrap();
//! #
//! let tiled = grid.tile(DEFAULT_REPEAT);
//! assert_eq!(tiled.size(), (50, 50));
//!
//! let path = find_path(&tiled).unwrap();
//! assert_eq!(path.cost(), 315);
//! ```
//!
//! ### Stepping
//! ```
//! use stepwise_pathfinding::prelude::*;
//!
//! let grid: Grid = "19\n11".parse().unwrap();
//! let mut search = PathSearch::new(&grid);
//!
//! assert_eq!(search.step(), SearchState::Running);
//! assert_eq!(search.cell_state((0, 0)), CellState::Closed(0));
//! assert_eq!(search.cell_state((1, 0)), CellState::Open(9));
//! assert_eq!(search.cell_state((0, 1)), CellState::Open(1));
//!
//! while !search.is_finished() {
//!     search.step();
//! }
//! assert_eq!(search.result().unwrap().cost(), 2);
//! ```
//!
//! ## Features
//! - `parallel` (default): adds [`Grid::tile_parallel`], backed by `rayon`.
//! - `log`: reports finished searches and internal timings through the `log` crate.

#[cfg(feature = "log")]
macro_rules! timed {
    ($name:expr, $body:expr) => {{
        let start = std::time::Instant::now();
        let ret = $body;
        log::trace!("time to {}: {:?}", $name, start.elapsed());
        ret
    }};
}
#[cfg(not(feature = "log"))]
macro_rules! timed {
    ($name:expr, $body:expr) => {
        $body
    };
}

#[cfg(feature = "log")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}
#[cfg(not(feature = "log"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

/// The Type used to reference a node of a search
pub type NodeID = usize;

/// A shorthand for Points on the grid, as `(x, y)`
pub type Point = (usize, usize);

/// A Type to represent the Cost of entering a Point, or of walking a whole Path
pub type Cost = usize;

/// A [`HashMap`](hashbrown::HashMap) keyed by Points
pub type PointMap<V> = hashbrown::HashMap<Point, V>;

mod error;
pub use self::error::{GridError, GridResult, SearchError, SearchResult};

mod grid;
pub use self::grid::{Grid, DEFAULT_REPEAT, MAX_CELL_COST};

mod path;
pub use self::path::Path;

mod search;
pub use self::search::{
    find_path, CellState, PathSearch, SearchConfig, SearchSnapshot, SearchState,
};

pub mod neighbors;

/// The most commonly used items, for glob imports
pub mod prelude {
    pub use crate::neighbors::{ManhattanNeighborhood, Neighborhood};
    pub use crate::{
        find_path, CellState, Cost, Grid, GridError, Path, PathSearch, Point, SearchConfig,
        SearchError, SearchSnapshot, SearchState, DEFAULT_REPEAT,
    };
}

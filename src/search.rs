use crate::error::{SearchError, SearchResult};
use crate::neighbors::{ManhattanNeighborhood, Neighborhood};
use crate::{Cost, Grid, NodeID, Path, Point, PointMap};

mod node;
use self::node::PathNode;

mod open_list;
use self::open_list::OpenList;

mod config;
pub use self::config::SearchConfig;

mod snapshot;
pub use self::snapshot::{CellState, SearchSnapshot};

use slab::Slab;

/// Whether a [`PathSearch`] can make further progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchState {
    /// The goal has not been reached and there are Points left to explore.
    Running,
    /// Either the goal was reached, or every reachable Point was explored without finding it.
    Finished,
}

/// A stepwise [A* search](https://en.wikipedia.org/wiki/A*_search_algorithm) over a [`Grid`].
///
/// Entering a Point costs the value of its cell; the start itself is free. The search keeps an
/// open set of discovered Points and a closed set of Points whose cheapest Cost is final. Each
/// call to [`step`](PathSearch::step) closes the open Point with the lowest estimated total
/// Cost (`cost so far + heuristic`). Among equal estimates, the Point discovered first wins,
/// where a Point whose Cost was lowered counts as rediscovered.
///
/// The search borrows its Grid, so the Grid cannot change while a search exists.
///
/// ## Examples
/// Running to completion:
/// ```
/// use stepwise_pathfinding::{Grid, PathSearch};
///
/// let grid: Grid = "131\n191\n111".parse().unwrap();
///
/// let mut search = PathSearch::new(&grid);
/// let path = search.run_to_completion().unwrap();
///
/// assert_eq!(path.cost(), 4);
/// assert_eq!(path, vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]);
/// ```
///
/// Driving the search one step at a time:
/// ```
/// use stepwise_pathfinding::{Grid, PathSearch, SearchState};
///
/// let grid: Grid = "11\n11".parse().unwrap();
/// let mut search = PathSearch::new(&grid);
///
/// while search.step() == SearchState::Running {
///     println!("{}\n", search.snapshot());
/// }
///
/// assert!(search.is_finished());
/// assert_eq!(search.cost(), Some(2));
/// ```
#[derive(Clone, Debug)]
pub struct PathSearch<'a, N: Neighborhood = ManhattanNeighborhood> {
    grid: &'a Grid,
    neighborhood: N,
    start: Point,
    goal: Point,
    nodes: Slab<PathNode>,
    open: OpenList,
    closed: PointMap<NodeID>,
    state: SearchState,
    steps: usize,
    neighbors: Vec<Point>,
}

impl<'a> PathSearch<'a> {
    /// Creates a search from the top-left to the bottom-right corner of `grid`, moving in
    /// the 4 cardinal directions.
    pub fn new(grid: &'a Grid) -> PathSearch<'a> {
        let neighborhood = ManhattanNeighborhood::new(grid.width(), grid.height());
        PathSearch::start_search(grid, neighborhood, grid.start(), grid.goal(), grid.len())
    }
}

impl<'a, N: Neighborhood> PathSearch<'a, N> {
    /// Creates a search with a custom Neighborhood and [`SearchConfig`].
    ///
    /// Fails if the configured start or goal lies outside of `grid`.
    ///
    /// ## Examples
    /// ```
    /// use stepwise_pathfinding::prelude::*;
    ///
    /// let grid: Grid = "1191\n9111\n1111".parse().unwrap();
    /// let neighborhood = ManhattanNeighborhood::new(grid.width(), grid.height());
    ///
    /// let config = SearchConfig::default().with_goal((3, 0));
    /// let mut search = PathSearch::with_config(&grid, neighborhood, config).unwrap();
    ///
    /// assert_eq!(search.run_to_completion().unwrap().cost(), 5);
    ///
    /// let config = SearchConfig::default().with_start((4, 0));
    /// assert_eq!(
    ///     PathSearch::with_config(&grid, neighborhood, config).unwrap_err(),
    ///     SearchError::StartOutOfBounds((4, 0)),
    /// );
    /// ```
    pub fn with_config(
        grid: &'a Grid,
        neighborhood: N,
        config: SearchConfig,
    ) -> SearchResult<PathSearch<'a, N>> {
        let start = config.start.unwrap_or_else(|| grid.start());
        if !grid.contains(start) {
            return Err(SearchError::StartOutOfBounds(start));
        }
        let goal = config.goal.unwrap_or_else(|| grid.goal());
        if !grid.contains(goal) {
            return Err(SearchError::GoalOutOfBounds(goal));
        }
        let size_hint = config.size_hint.unwrap_or_else(|| grid.len());

        Ok(PathSearch::start_search(
            grid,
            neighborhood,
            start,
            goal,
            size_hint,
        ))
    }

    fn start_search(
        grid: &'a Grid,
        neighborhood: N,
        start: Point,
        goal: Point,
        size_hint: usize,
    ) -> PathSearch<'a, N> {
        let mut nodes = Slab::with_capacity(size_hint);
        let mut open = OpenList::with_capacity(size_hint / 2);

        let id = nodes.insert(PathNode::new(start, None, 0));
        open.push(start, id, neighborhood.heuristic(start, goal));

        PathSearch {
            grid,
            neighborhood,
            start,
            goal,
            nodes,
            open,
            closed: PointMap::with_capacity(size_hint),
            state: SearchState::Running,
            steps: 0,
            neighbors: Vec::with_capacity(8),
        }
    }

    /// Performs a single iteration of the search and returns the resulting state.
    ///
    /// Closes the most promising open Point. If that Point is the goal, or if there was no open
    /// Point left, the search is [`Finished`](SearchState::Finished). Otherwise every neighbor
    /// that is not closed yet is opened, or has its Cost lowered if the new route is strictly
    /// cheaper.
    ///
    /// Calling this on a finished search does nothing.
    pub fn step(&mut self) -> SearchState {
        if self.state == SearchState::Finished {
            return self.state;
        }

        let Some(current_id) = self.open.pop() else {
            debug_log!(
                "frontier exhausted after {} steps, {:?} is unreachable from {:?}",
                self.steps,
                self.goal,
                self.start
            );
            self.state = SearchState::Finished;
            return self.state;
        };
        self.steps += 1;

        let PathNode {
            pos: current,
            cost: current_cost,
            ..
        } = self.nodes[current_id];
        self.closed.insert(current, current_id);

        if current == self.goal {
            debug_log!(
                "reached {:?} at cost {} after {} steps",
                current,
                current_cost,
                self.steps
            );
            self.state = SearchState::Finished;
            return self.state;
        }

        self.neighbors.clear();
        self.neighborhood
            .get_all_neighbors(current, &mut self.neighbors);

        for &other in self.neighbors.iter() {
            if self.closed.contains_key(&other) {
                continue;
            }
            let Some(delta_cost) = self.grid.get_checked(other) else {
                continue;
            };
            let other_cost = current_cost + delta_cost;

            if let Some(existing) = self.open.get(other) {
                if self.nodes[existing].cost <= other_cost {
                    continue;
                }
                // open nodes have no children yet, so nothing links to it
                self.nodes.remove(existing);
            }

            let id = self
                .nodes
                .insert(PathNode::new(other, Some(current_id), other_cost));
            let estimate = other_cost + self.neighborhood.heuristic(other, self.goal);
            self.open.push(other, id, estimate);
        }

        self.state
    }

    /// Steps until the search is finished and returns the [`result`](PathSearch::result).
    pub fn run_to_completion(&mut self) -> Option<Path<Point>> {
        timed!(
            "run search to completion",
            while self.step() == SearchState::Running {}
        );
        self.result()
    }

    /// The cheapest Path from the start to the goal, if the goal has been reached.
    ///
    /// The first Point of the Path is always the start and the last is the goal.
    pub fn result(&self) -> Option<Path<Point>> {
        let &goal_id = self.closed.get(&self.goal)?;

        let steps = {
            let mut steps = vec![];
            let mut current = Some(goal_id);

            while let Some(id) = current {
                let node = &self.nodes[id];
                steps.push(node.pos);
                current = node.parent;
            }
            steps.reverse();
            steps
        };

        Some(Path::new(steps, self.nodes[goal_id].cost))
    }

    /// The Cost of the cheapest Path to the goal, if the goal has been reached.
    pub fn cost(&self) -> Option<Cost> {
        self.closed.get(&self.goal).map(|&id| self.nodes[id].cost)
    }

    /// The current state of the search
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// `true` once no further [`step`](PathSearch::step) can make progress.
    pub fn is_finished(&self) -> bool {
        self.state == SearchState::Finished
    }

    /// The number of Points closed so far
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The number of open Points
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    /// The number of closed Points
    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }

    /// Where the search starts
    pub fn start(&self) -> Point {
        self.start
    }

    /// Where the search ends
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// The Grid being searched
    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    /// What the search currently knows about `point`.
    pub fn cell_state(&self, point: Point) -> CellState {
        if let Some(&id) = self.closed.get(&point) {
            CellState::Closed(self.nodes[id].cost)
        } else if let Some(id) = self.open.get(point) {
            CellState::Open(self.nodes[id].cost)
        } else {
            CellState::Unvisited
        }
    }

    /// Copies the state of every Point of the Grid into a [`SearchSnapshot`].
    pub fn snapshot(&self) -> SearchSnapshot {
        let (width, height) = self.grid.size();
        let mut cells = vec![CellState::Unvisited; self.grid.len()];

        for (pos, id) in self.open.iter() {
            cells[pos.1 * width + pos.0] = CellState::Open(self.nodes[id].cost);
        }
        for (&pos, &id) in self.closed.iter() {
            cells[pos.1 * width + pos.0] = CellState::Closed(self.nodes[id].cost);
        }

        SearchSnapshot {
            width,
            height,
            cells,
            steps: self.steps,
            state: self.state,
        }
    }
}

/// Finds the cheapest Path from the top-left to the bottom-right corner of `grid`.
///
/// Shorthand for `PathSearch::new(grid).run_to_completion()`.
///
/// ## Examples
/// ```
/// use stepwise_pathfinding::{find_path, Grid};
///
/// let grid: Grid = "19\n11".parse().unwrap();
/// let path = find_path(&grid).unwrap();
///
/// assert_eq!(path.cost(), 2);
/// assert_eq!(path, vec![(0, 0), (0, 1), (1, 1)]);
/// ```
pub fn find_path(grid: &Grid) -> Option<Path<Point>> {
    PathSearch::new(grid).run_to_completion()
}

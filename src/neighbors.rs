//! A Module with the Neighborhoods a search can move in

use crate::{Cost, Point};
use std::fmt::Debug;

/// Defines how a Path can move along the Grid.
///
/// It provides a function to query all neighboring Points of an existing Point and a Heuristic
/// for how expensive it might be to reach a goal from a Point.
///
/// [`PathSearch`](crate::PathSearch) only finds optimal Paths if the Heuristic never
/// overestimates the remaining cost. Since every cell costs at least `1` to enter, the number
/// of steps to the goal is always a safe choice.
///
/// The default implementation is [`ManhattanNeighborhood`], for Paths that move up, down,
/// left or right.
pub trait Neighborhood: Clone + Debug {
    /// Pushes all Neighbors of `point` onto `target`.
    ///
    /// The search checks the Neighbors against the bounds of the Grid, so returning Points
    /// outside of it is harmless.
    fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>);
    /// Gives a Heuristic for how expensive it is to reach `goal` from `point`.
    ///
    /// If there is no proper way of calculating that, simply return 0. The search then
    /// degrades to Dijkstra, which is slower but still correct.
    fn heuristic(&self, point: Point, goal: Point) -> Cost;
}

/// A Neighborhood for Paths moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
///
/// Neighbors are produced in the order up, right, down, left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManhattanNeighborhood {
    width: usize,
    height: usize,
}

impl ManhattanNeighborhood {
    /// Creates a new ManhattanNeighborhood.
    ///
    /// `width` and `height` are the size of the Grid to move on.
    pub fn new(width: usize, height: usize) -> ManhattanNeighborhood {
        ManhattanNeighborhood { width, height }
    }
}

impl Neighborhood for ManhattanNeighborhood {
    fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>) {
        let (width, height) = (self.width, self.height);

        let iter = [(0isize, -1isize), (1, 0), (0, 1), (-1, 0)]
            .iter()
            .map(|(dx, dy)| (point.0 as isize + dx, point.1 as isize + dy))
            .filter(|&(x, y)| x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < height)
            .map(|(x, y)| (x as usize, y as usize));

        target.extend(iter);
    }
    fn heuristic(&self, point: Point, goal: Point) -> Cost {
        point.0.abs_diff(goal.0) + point.1.abs_diff(goal.1)
    }
}

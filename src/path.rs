use crate::Cost;

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Deref, Index};

/// A Path found by a search
///
/// Stores the sequence of visited Points, from start to goal (both inclusive), and the total
/// Cost of walking it. The start itself is free to occupy, so the Cost is the sum of the costs
/// of every other Point on the Path.
///
/// A Path dereferences to a slice of its Points.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use stepwise_pathfinding::Path;
/// let path = Path::new(vec![(0, 0), (1, 0), (1, 1)], 7);
///
/// assert_eq!(path.cost(), 7);
/// assert_eq!(path.len(), 3);
/// assert_eq!(path[2], (1, 1));
/// assert_eq!(path.to_string(), "Path[Cost = 7]: (0, 0) -> (1, 0) -> (1, 1)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path<P> {
    path: Vec<P>,
    cost: Cost,
}

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Points and total Cost
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path { path, cost }
    }

    /// the total Cost of the Path
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// the Points of the Path
    pub fn points(&self) -> &[P] {
        &self.path
    }

    /// consumes the Path, returning its Points
    pub fn into_points(self) -> Vec<P> {
        self.path
    }
}

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<P> Deref for Path<P> {
    type Target = [P];
    fn deref(&self) -> &[P] {
        &self.path
    }
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
    fn eq(&self, rhs: &Vec<P>) -> bool {
        self.path == *rhs
    }
}

impl<P: Eq> Ord for Path<P> {
    fn cmp(&self, other: &Path<P>) -> Ordering {
        self.cost.cmp(&other.cost)
    }
}

impl<P: Eq> PartialOrd for Path<P> {
    fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: fmt::Debug> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        match self.path.split_first() {
            None => write!(fmt, "<empty>"),
            Some((first, rest)) => {
                write!(fmt, "{:?}", first)?;
                for p in rest {
                    write!(fmt, " -> {:?}", p)?;
                }
                Ok(())
            }
        }
    }
}

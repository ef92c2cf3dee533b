use crate::{Cost, NodeID, Point};

/// One step of a candidate Path: a Point, the step before it and the Cost from the start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PathNode {
    pub pos: Point,
    pub parent: Option<NodeID>,
    pub cost: Cost,
}

impl PathNode {
    pub fn new(pos: Point, parent: Option<NodeID>, cost: Cost) -> PathNode {
        PathNode { pos, parent, cost }
    }
}

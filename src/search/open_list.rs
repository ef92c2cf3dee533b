use crate::{Cost, NodeID, Point, PointMap};

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A heap entry. Entries whose `seq` no longer matches the live entry of their Point are
/// stale and get skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct HeuristicElement {
    id: NodeID,
    pos: Point,
    estimate: Cost,
    seq: u64,
}

impl PartialOrd for HeuristicElement {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Ord for HeuristicElement {
    // BinaryHeap is a max-heap: lowest estimate first, then earliest discovery
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.estimate
            .cmp(&self.estimate)
            .then_with(|| rhs.seq.cmp(&self.seq))
    }
}

/// The open set of a search: at most one live candidate per Point, popped in order of
/// lowest estimated total Cost.
#[derive(Clone, Debug, Default)]
pub(crate) struct OpenList {
    heap: BinaryHeap<HeuristicElement>,
    live: PointMap<(NodeID, u64)>,
    next_seq: u64,
}

impl OpenList {
    pub fn with_capacity(capacity: usize) -> OpenList {
        OpenList {
            heap: BinaryHeap::with_capacity(capacity),
            live: PointMap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// The live candidate at `pos`, if any.
    pub fn get(&self, pos: Point) -> Option<NodeID> {
        self.live.get(&pos).map(|&(id, _)| id)
    }

    /// Makes `id` the candidate for `pos`, superseding any previous one.
    pub fn push(&mut self, pos: Point, id: NodeID, estimate: Cost) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.live.insert(pos, (id, seq));
        self.heap.push(HeuristicElement {
            id,
            pos,
            estimate,
            seq,
        });
    }

    /// Removes and returns the candidate with the lowest estimate.
    pub fn pop(&mut self) -> Option<NodeID> {
        while let Some(element) = self.heap.pop() {
            if self.live.get(&element.pos) == Some(&(element.id, element.seq)) {
                self.live.remove(&element.pos);
                return Some(element.id);
            }
        }
        None
    }

    /// Iterates over the live candidates, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, NodeID)> + '_ {
        self.live.iter().map(|(&pos, &(id, _))| (pos, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_estimate_first() {
        let mut open = OpenList::default();
        open.push((0, 0), 0, 5);
        open.push((1, 0), 1, 3);
        open.push((2, 0), 2, 4);

        assert_eq!(open.pop(), Some(1));
        assert_eq!(open.pop(), Some(2));
        assert_eq!(open.pop(), Some(0));
        assert_eq!(open.pop(), None);
        assert_eq!(open.len(), 0);
    }

    #[test]
    fn ties_pop_in_discovery_order() {
        let mut open = OpenList::default();
        open.push((3, 0), 7, 4);
        open.push((0, 3), 8, 4);
        open.push((1, 1), 9, 4);

        assert_eq!(open.pop(), Some(7));
        assert_eq!(open.pop(), Some(8));
        assert_eq!(open.pop(), Some(9));
    }

    #[test]
    fn replaced_candidates_are_skipped() {
        let mut open = OpenList::default();
        open.push((0, 0), 0, 10);
        open.push((1, 0), 1, 6);
        open.push((0, 0), 2, 4);

        assert_eq!(open.len(), 2);
        assert_eq!(open.get((0, 0)), Some(2));

        assert_eq!(open.pop(), Some(2));
        assert_eq!(open.pop(), Some(1));
        assert_eq!(open.pop(), None);
    }

    #[test]
    fn reused_id_does_not_revive_stale_entry() {
        let mut open = OpenList::default();
        open.push((0, 0), 0, 10);
        open.push((0, 0), 1, 8);
        // id 0 handed out again for the same Point, at a worse estimate than the stale entry
        open.push((0, 0), 0, 12);

        assert_eq!(open.len(), 1);
        assert_eq!(open.pop(), Some(0));
        assert_eq!(open.pop(), None);
    }
}

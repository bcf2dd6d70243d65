use super::{GraphNodeMap, Search};

use std::{
    collections::BinaryHeap,
    hash::Hash,
    fmt::Debug,
    cmp::Ordering,
};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};
use tracing::trace;


/// Frontier entry
/// - for ordering we only need the priority and a way to identify the node
/// - `seq` is the push order, equal priorities pop first-in first-out
#[derive(Debug)]
struct Node<T> {
    index: usize, // index in the node map
    cost: T, // Cost to reach this node
    f_cost: T, // Priority = cost + h(n)
    seq: u64,
}

impl<T: PartialOrd> Ord for Node<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed so the BinaryHeap pops the smallest priority first
        other.f_cost
            .partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl<T: PartialOrd> PartialOrd for Node<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialOrd> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<T: PartialOrd> Eq for Node<T> {}


/// Best-first traversal shared by Dijkstra and A*
/// From start Node, expand the lowest priority node until one meets the goal criteria.
/// Priority is the accumulated cost plus `heuristic_fn(node)`; a zero heuristic gives Dijkstra.
pub(crate) fn best_first<N, C, IT, NN, H, G>(start: N, neighbors: NN, heuristic_fn: H, goal_fn: G) -> Search<N, C>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + PartialOrd + Copy + Debug,
    H: Fn(&N) -> C, // estimated remaining cost to the goal
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    // Nodes that need to be evaluated, sorted by f_cost
    let mut open_list: BinaryHeap<Node<C>> = BinaryHeap::new();
    let mut seq: u64 = 0;

    // Every discovered node with its best known (parent_index, cost)
    // for the start node, parent_index is set to usize::MAX to indicate it has no parent
    let mut node_map: GraphNodeMap<N, C> = GraphNodeMap::default();

    let start_h = heuristic_fn(&start);
    let start_index = node_map.insert_full(start, (usize::MAX, Zero::zero())).0;
    open_list.push(Node {
        index: start_index,
        cost: Zero::zero(),
        f_cost: start_h,
        seq,
    });

    let mut expanded = 0;

    while let Some(Node { index, cost, .. }) = open_list.pop() {

        // fetch current best cost for node
        let Some((node, &(_, c))) = node_map.get_index(index) else {
            continue;
        };

        // A cheaper entry for this node was pushed after this one
        if cost > c {
            continue;
        }
        expanded += 1;

        if goal_fn(node) {
            trace!(?node, expanded, "goal reached");
            return Search { node_map, goal_index: Some(index), expanded };
        }

        // loop over neighbors
        for (neighbor, edge_cost) in neighbors(node) {

            // new cost to reach this node = edge cost + node cost
            let new_cost = c + edge_cost;

            // calculate heuristic cost
            let h_cost: C = heuristic_fn(&neighbor);

            let neighbor_index = match node_map.entry(neighbor) {
                Vacant(e) => {
                    // This is the first time we're seeing this neighbor
                    let neighbor_index = e.index();
                    e.insert((index, new_cost));
                    neighbor_index
                }
                Occupied(mut e) => {
                    if new_cost < e.get().1 {
                        // We've found a better path to this neighbor
                        e.insert((index, new_cost));
                        e.index()
                    } else {
                        // The existing path is at least as good, do nothing
                        continue;
                    }
                }
            };

            // Only add to the queue if we've found a better path
            seq += 1;
            open_list.push(Node {
                index: neighbor_index,
                cost: new_cost,
                f_cost: new_cost + h_cost,
                seq,
            });
        }
    }

    Search { node_map, goal_index: None, expanded }
}

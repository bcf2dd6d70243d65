pub mod dijkstra;
pub mod a_star;
mod best_first;
mod shortest_path;

pub use a_star::a_star;
pub use dijkstra::dijkstra;

use best_first::best_first;
use shortest_path::shortest_path;

use crate::collections::FxIndexMap;

/// Type alias for the node map used in path planning algorithms
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map
/// - cost is the total cost to reach this node from the start
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;


/// Result of a best-first traversal
#[derive(Debug)]
pub struct Search<N, C> {
    node_map: GraphNodeMap<N, C>,
    goal_index: Option<usize>,
    expanded: usize,
}

impl<N: Clone, C: Copy> Search<N, C> {

    /// Ordered path from start to goal, `None` when the goal was never reached
    pub fn path(&self) -> Option<Vec<N>> {
        self.goal_index.map(|goal_index| shortest_path(&self.node_map, goal_index))
    }

    /// Accumulated cost of the goal as tracked by the search
    pub fn cost(&self) -> Option<C> {
        let goal_index = self.goal_index?;
        self.node_map.get_index(goal_index).map(|(_, &(_, cost))| cost)
    }

    /// Number of nodes popped from the frontier and expanded
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Every node discovered during the search with its (parent_index, cost)
    pub fn node_map(&self) -> &GraphNodeMap<N, C> {
        &self.node_map
    }
}

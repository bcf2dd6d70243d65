use super::{best_first, Search};

use std::{hash::Hash, fmt::Debug};
use num_traits::Zero;


/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// From start Node, traverse through graph until node meets goal criteria.
/// The result is optimal when:
/// 1. The heuristic function is admissible (never overestimates the true cost to reach the goal)
/// 2. A path actually exists between the start and goal nodes
pub fn a_star<N, C, IT, NN, H, G>(start: N, neighbors: NN, heuristic_fn: H, goal_fn: G) -> Search<N, C>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    H: Fn(&N) -> C, // heuristic function
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + PartialOrd + Copy + Debug,
    G: Fn(&N) -> bool, // node qualifier for goal
    {
    best_first(start, neighbors, heuristic_fn, goal_fn)
}

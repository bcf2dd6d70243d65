use super::{best_first, Search};

use std::{hash::Hash, fmt::Debug};
use num_traits::Zero;


/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start Node, traverse through graph until node meets goal criteria.
/// Uniform-cost: the frontier is keyed by accumulated cost only.
pub fn dijkstra<N, C, IT, NN, G>(start: N, neighbors: NN, goal: G) -> Search<N, C>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + PartialOrd + Copy + Debug,
    G: Fn(&N) -> bool, // node qualifier for goal
    {
    best_first(start, neighbors, |_| Zero::zero(), goal)
}

use crate::errors::GraphError;
use crate::graph::CampusGraph;


/// Great-circle lower bound between two locations, the A* heuristic.
///
/// Admissible as long as every connection weighs at least the great-circle
/// distance between its endpoints; see [`CampusGraph::admissibility_violations`].
#[derive(Clone, Copy, Debug)]
pub struct HaversineHeuristic<'g> {
    graph: &'g CampusGraph,
}

impl<'g> HaversineHeuristic<'g> {

    pub fn new(graph: &'g CampusGraph) -> Self {
        Self { graph }
    }

    /// Haversine distance in meters between locations `a` and `b`
    pub fn estimate(&self, a: &str, b: &str) -> Result<f64, GraphError> {
        let a = self.graph.coordinate(a)?;
        let b = self.graph.coordinate(b)?;
        Ok(a.haversine_distance(&b))
    }

    /// Estimate by node id, zero for ids outside the graph
    pub(crate) fn estimate_ids(&self, a: usize, b: usize) -> f64 {
        match (self.graph.coordinate_at(a), self.graph.coordinate_at(b)) {
            (Some(a), Some(b)) => a.haversine_distance(b),
            _ => 0.0,
        }
    }

    /// Heuristic closure measuring the distance to a fixed goal
    pub(crate) fn towards(self, goal: usize) -> impl Fn(&usize) -> f64 + 'g {
        move |&node| self.estimate_ids(node, goal)
    }
}

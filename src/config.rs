use serde::Deserialize;


/// Options applied while building a [`CampusGraph`](crate::graph::CampusGraph)
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    /// Slack in meters before an edge shorter than its great-circle distance counts as a violation
    pub admissibility_tolerance_m: f64,
    /// Fail the build on admissibility violations instead of logging them
    pub strict_admissibility: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            admissibility_tolerance_m: 1e-6,
            strict_admissibility: false,
        }
    }
}

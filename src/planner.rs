//! Shortest-path queries against a built [`CampusGraph`].
//!
//! Both algorithms run the same best-first relaxation over node ids; they
//! differ only in the heuristic added to the frontier priority. Reported
//! distances always come from [`total_distance`], never from the search's
//! own running total.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distance::total_distance;
use crate::errors::PathPlannerError;
use crate::graph::CampusGraph;
use crate::graph_algos::{a_star, dijkstra, Search};
use crate::heuristic::HaversineHeuristic;


/// Supported search algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Uniform-cost search
    #[default]
    Dijkstra,
    /// Heuristic search guided by great-circle distance
    #[serde(rename = "astar", alias = "a*", alias = "a-star")]
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Dijkstra, Algorithm::AStar];
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
        };
        f.write_str(value)
    }
}

impl FromStr for Algorithm {
    type Err = PathPlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Algorithm::AStar),
            _ => Err(PathPlannerError::UnsupportedAlgorithm { name: s.to_string() }),
        }
    }
}


/// A resolved route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Location names from start to end inclusive
    pub path: Vec<String>,
    /// Sum of edge weights along `path`
    pub distance_meters: f64,
    pub algorithm: Algorithm,
    /// Frontier expansions performed, zero when start == end
    pub expanded: usize,
}

impl Route {

    /// Number of connections traversed
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The shortest path is: {}", self.path.join(" → "))?;
        write!(f, "Total distance: {:.2} meters", self.distance_meters)
    }
}


/// Side-by-side run of both algorithms for one query
#[derive(Debug, Clone)]
pub struct AlgorithmComparison {
    pub dijkstra: Route,
    pub dijkstra_elapsed: Duration,
    pub astar: Route,
    pub astar_elapsed: Duration,
}

impl AlgorithmComparison {

    /// Both algorithms reported the same distance
    pub fn distances_agree(&self) -> bool {
        (self.dijkstra.distance_meters - self.astar.distance_meters).abs() <= f64::EPSILON * self.dijkstra.distance_meters.max(1.0)
    }
}


/// Path queries over a borrowed, read-only graph.
/// Cheap to create; every query keeps its own frontier and predecessor map.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'g> {
    graph: &'g CampusGraph,
}

impl<'g> PathFinder<'g> {

    pub fn new(graph: &'g CampusGraph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &'g CampusGraph {
        self.graph
    }

    /// Find the lowest-cost route from `start` to `end`
    pub fn find_path(&self, start: &str, end: &str, algorithm: Algorithm) -> Result<Route, PathPlannerError> {
        let start_id = self.resolve(start)?;
        let end_id = self.resolve(end)?;

        if start_id == end_id {
            return Ok(Route {
                path: vec![start.to_string()],
                distance_meters: 0.0,
                algorithm,
                expanded: 0,
            });
        }

        let neighbors = |&node: &usize| self.graph.neighbor_ids(node);
        let goal = |&node: &usize| node == end_id;

        let search: Search<usize, f64> = match algorithm {
            Algorithm::Dijkstra => dijkstra(start_id, neighbors, goal),
            Algorithm::AStar => {
                let heuristic = HaversineHeuristic::new(self.graph).towards(end_id);
                a_star(start_id, neighbors, heuristic, goal)
            }
        };

        let ids = search.path().ok_or_else(|| PathPlannerError::NoPathFound {
            start: start.to_string(),
            goal: end.to_string(),
        })?;

        let path: Vec<String> = ids.iter().map(|&id| self.graph.name_at(id).to_string()).collect();
        let distance_meters = total_distance(self.graph, &path);

        debug!(
            %algorithm,
            start,
            end,
            hops = path.len() - 1,
            expanded = search.expanded(),
            distance_meters,
            "path found"
        );

        Ok(Route {
            path,
            distance_meters,
            algorithm,
            expanded: search.expanded(),
        })
    }

    /// Same as [`find_path`](Self::find_path) with the algorithm given by name
    /// (`"dijkstra"` or `"astar"`)
    pub fn find_path_named(&self, start: &str, end: &str, algorithm: &str) -> Result<Route, PathPlannerError> {
        let algorithm = algorithm.parse::<Algorithm>()?;
        self.find_path(start, end, algorithm)
    }

    /// Run both algorithms on the same query and time them
    pub fn compare(&self, start: &str, end: &str) -> Result<AlgorithmComparison, PathPlannerError> {
        let timer = Instant::now();
        let dijkstra = self.find_path(start, end, Algorithm::Dijkstra)?;
        let dijkstra_elapsed = timer.elapsed();

        let timer = Instant::now();
        let astar = self.find_path(start, end, Algorithm::AStar)?;
        let astar_elapsed = timer.elapsed();

        Ok(AlgorithmComparison { dijkstra, dijkstra_elapsed, astar, astar_elapsed })
    }

    fn resolve(&self, name: &str) -> Result<usize, PathPlannerError> {
        self.graph
            .index_of(name)
            .ok_or_else(|| PathPlannerError::UnknownLocation { name: name.to_string() })
    }
}

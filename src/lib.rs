//! Shortest-path routing over a small, static, geocoded campus map.
//!
//! Build a [`CampusGraph`] once from loader records, then ask a
//! [`PathFinder`] for routes using Dijkstra or A* (great-circle heuristic).
//!
//! ```
//! use campus_navigate::{Algorithm, CampusGraph, ConnectionRecord, LocationRecord, PathFinder};
//!
//! let graph = CampusGraph::build(
//!     &[
//!         LocationRecord::new("Main Gate", 34.0660, 72.6430),
//!         LocationRecord::new("Library", 34.0680, 72.6440),
//!     ],
//!     &[ConnectionRecord::new("Main Gate", "Library", 300.0)],
//! )?;
//!
//! let route = PathFinder::new(&graph).find_path("Main Gate", "Library", Algorithm::AStar)?;
//! assert_eq!(route.path, ["Main Gate", "Library"]);
//! assert_eq!(route.distance_meters, 300.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod collections;
pub mod config;
pub mod distance;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod heuristic;
pub mod planner;
pub mod records;
pub mod shared;

pub use config::GraphOptions;
pub use distance::total_distance;
pub use errors::{GraphError, PathPlannerError};
pub use geometry::{haversine, GeoCoordinate};
pub use graph::{AdmissibilityViolation, CampusGraph};
pub use heuristic::HaversineHeuristic;
pub use planner::{Algorithm, AlgorithmComparison, PathFinder, Route};
pub use records::{ConnectionRecord, LocationRecord, MapData};
pub use shared::SharedGraph;

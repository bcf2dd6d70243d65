//! Immutable, undirected campus graph built once from loader records.
//!
//! Locations keep the order in which the loader supplied them, so node
//! listings and neighbour iteration are deterministic for a given input.

use indexmap::map::Entry::{Occupied, Vacant};
use tracing::{debug, info, warn};

use crate::collections::FxIndexMap;
use crate::config::GraphOptions;
use crate::errors::GraphError;
use crate::geometry::GeoCoordinate;
use crate::records::{ConnectionRecord, LocationRecord, MapData};


/// Edge whose weight is below the great-circle distance between its endpoints.
/// A* may return a suboptimal route while such edges exist.
///
/// `from` is whichever endpoint the loader listed first among the locations,
/// not necessarily the `from` of the original [`ConnectionRecord`].
#[derive(Clone, Debug, PartialEq)]
pub struct AdmissibilityViolation {
    pub from: String,
    pub to: String,
    pub weight: f64,
    pub great_circle: f64,
}


/// Weighted undirected graph of named campus locations
#[derive(Clone, Debug, Default)]
pub struct CampusGraph {
    // name -> coordinate, index doubles as node id
    locations: FxIndexMap<String, GeoCoordinate>,
    // adjacency[node id] -> neighbour id -> weight in meters
    adjacency: Vec<FxIndexMap<usize, f64>>,
    edge_count: usize,
    // slack applied by admissibility_violations(), taken from the build options
    admissibility_tolerance_m: f64,
}

impl CampusGraph {

    /// Build the graph with default [`GraphOptions`]
    pub fn build(locations: &[LocationRecord], connections: &[ConnectionRecord]) -> Result<Self, GraphError> {
        Self::build_with(locations, connections, &GraphOptions::default())
    }

    /// Build the graph from a bundled loader payload
    pub fn from_map_data(data: &MapData, options: &GraphOptions) -> Result<Self, GraphError> {
        Self::build_with(&data.locations, &data.connections, options)
    }

    /// Build the graph, validating every record.
    /// Duplicate connections keep the last weight supplied, self-loops are dropped.
    pub fn build_with(locations: &[LocationRecord], connections: &[ConnectionRecord], options: &GraphOptions) -> Result<Self, GraphError> {

        let mut graph = CampusGraph {
            admissibility_tolerance_m: options.admissibility_tolerance_m,
            ..CampusGraph::default()
        };

        for record in locations {
            let coordinate = record.coordinate();
            if !coordinate.is_valid() {
                return Err(GraphError::InvalidCoordinate {
                    name: record.name.clone(),
                    latitude: record.latitude,
                    longitude: record.longitude,
                });
            }

            match graph.locations.entry(record.name.clone()) {
                Occupied(_) => {
                    return Err(GraphError::DuplicateLocation { name: record.name.clone() });
                }
                Vacant(e) => {
                    e.insert(coordinate);
                    graph.adjacency.push(FxIndexMap::default());
                }
            }
        }

        for record in connections {
            graph.add_connection(record)?;
        }

        let violations = graph.admissibility_violations();
        if let Some(first) = violations.first() {
            if options.strict_admissibility {
                return Err(GraphError::InadmissibleEdge {
                    from: first.from.clone(),
                    to: first.to.clone(),
                    weight: first.weight,
                    great_circle: first.great_circle,
                });
            }
            for violation in &violations {
                warn!(
                    from = %violation.from,
                    to = %violation.to,
                    weight = violation.weight,
                    great_circle = violation.great_circle,
                    "edge weight below great-circle distance; A* results may be suboptimal"
                );
            }
        }

        info!(
            locations = graph.len(),
            connections = graph.edge_count,
            "campus graph built"
        );

        Ok(graph)
    }

    fn add_connection(&mut self, record: &ConnectionRecord) -> Result<(), GraphError> {
        let lookup = |name: &str| {
            self.locations.get_index_of(name).ok_or_else(|| GraphError::UnknownLocationReference {
                from: record.from.clone(),
                to: record.to.clone(),
                missing: name.to_string(),
            })
        };
        let a = lookup(&record.from)?;
        let b = lookup(&record.to)?;

        let weight = record.weight_meters;
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                from: record.from.clone(),
                to: record.to.clone(),
                weight,
            });
        }

        if a == b {
            warn!(location = %record.from, "ignoring self-loop connection");
            return Ok(());
        }

        // last write wins, in either orientation
        if let Some(previous) = self.adjacency[a].insert(b, weight) {
            debug!(from = %record.from, to = %record.to, previous, weight, "overwriting duplicate connection");
        } else {
            self.edge_count += 1;
        }
        self.adjacency[b].insert(a, weight);

        Ok(())
    }

    /// Number of locations
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Number of undirected connections
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains(&self, name: &str) -> bool {
        self.locations.contains_key(name)
    }

    /// All location names in loader order
    pub fn nodes(&self) -> Vec<&str> {
        self.locations.keys().map(String::as_str).collect()
    }

    /// Adjacent locations with their edge weights
    pub fn neighbors(&self, name: &str) -> Result<Vec<(&str, f64)>, GraphError> {
        let index = self.require(name)?;
        Ok(self.neighbor_ids(index)
            .map(|(neighbor, weight)| (self.name_at(neighbor), weight))
            .collect())
    }

    /// Coordinate of a location
    pub fn coordinate(&self, name: &str) -> Result<GeoCoordinate, GraphError> {
        self.locations
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownLocation { name: name.to_string() })
    }

    /// Weight of the connection between two locations, if any
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<f64> {
        let a = self.index_of(a)?;
        let b = self.index_of(b)?;
        self.adjacency[a].get(&b).copied()
    }

    /// Every connection exactly once, ordered by first endpoint then neighbour insertion
    pub fn edges(&self) -> Vec<(&str, &str, f64)> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(a, neighbors)| {
                neighbors
                    .iter()
                    .filter(move |(b, _)| a < **b)
                    .map(move |(&b, &weight)| (a, b, weight))
            })
            .map(|(a, b, weight)| (self.name_at(a), self.name_at(b), weight))
            .collect()
    }

    /// Mean coordinate of all locations, used to centre a rendered map
    pub fn center(&self) -> Option<GeoCoordinate> {
        if self.is_empty() {
            return None;
        }
        let n = self.len() as f64;
        let (lat, lon) = self.locations
            .values()
            .fold((0.0, 0.0), |(lat, lon), c| (lat + c.latitude, lon + c.longitude));
        Some(GeoCoordinate::new(lat / n, lon / n))
    }

    /// Edges that break A* admissibility (weight < great-circle distance),
    /// using the tolerance the graph was built with
    pub fn admissibility_violations(&self) -> Vec<AdmissibilityViolation> {
        let tolerance = self.admissibility_tolerance_m;
        self.edges()
            .into_iter()
            .filter_map(|(from, to, weight)| {
                let great_circle = self.locations[from].haversine_distance(&self.locations[to]);
                (weight + tolerance < great_circle).then(|| AdmissibilityViolation {
                    from: from.to_string(),
                    to: to.to_string(),
                    weight,
                    great_circle,
                })
            })
            .collect()
    }

    pub(crate) fn index_of(&self, name: &str) -> Option<usize> {
        self.locations.get_index_of(name)
    }

    fn require(&self, name: &str) -> Result<usize, GraphError> {
        self.index_of(name).ok_or_else(|| GraphError::UnknownLocation { name: name.to_string() })
    }

    /// Name of the location stored at `index`.
    /// Indices only come from this graph, so they are always in range.
    pub(crate) fn name_at(&self, index: usize) -> &str {
        self.locations
            .get_index(index)
            .map(|(name, _)| name.as_str())
            .unwrap_or_default()
    }

    pub(crate) fn coordinate_at(&self, index: usize) -> Option<&GeoCoordinate> {
        self.locations.get_index(index).map(|(_, c)| c)
    }

    pub(crate) fn neighbor_ids(&self, index: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.adjacency
            .get(index)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().map(|(&n, &w)| (n, w)))
    }
}

use thiserror::Error;


/// Errors raised while building or querying the campus graph
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// Two location records share a name
    #[error("duplicate location: {name}")]
    DuplicateLocation { name: String },

    /// A connection references a location that was never declared
    #[error("connection {from} - {to} references unknown location {missing}")]
    UnknownLocationReference { from: String, to: String, missing: String },

    /// Edge weight is negative, NaN or infinite
    #[error("invalid weight {weight} on connection {from} - {to}")]
    InvalidWeight { from: String, to: String, weight: f64 },

    /// Latitude/longitude is non-finite or outside the geographic range
    #[error("invalid coordinate ({latitude}, {longitude}) for location {name}")]
    InvalidCoordinate { name: String, latitude: f64, longitude: f64 },

    /// Edge weight is shorter than the straight-line distance between its endpoints.
    /// Only raised when strict admissibility is enabled.
    #[error("connection {from} - {to} weighs {weight} m, below the great-circle distance of {great_circle} m")]
    InadmissibleEdge { from: String, to: String, weight: f64, great_circle: f64 },

    /// Name is not a location in the graph
    #[error("unknown location: {name}")]
    UnknownLocation { name: String },
}


/// Errors returned by path queries
#[derive(Debug, Error, PartialEq)]
pub enum PathPlannerError {
    /// Start or end is not a location in the graph
    #[error("unknown location: {name}")]
    UnknownLocation { name: String },

    /// Start and goal are not connected
    #[error("no path found between {start} and {goal}")]
    NoPathFound { start: String, goal: String },

    /// Algorithm selector outside `dijkstra` / `astar`
    #[error("unsupported algorithm: {name}")]
    UnsupportedAlgorithm { name: String },

    /// Graph failure that is not a location lookup
    #[error(transparent)]
    Graph(GraphError),
}

impl From<GraphError> for PathPlannerError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::UnknownLocation { name } => PathPlannerError::UnknownLocation { name },
            GraphError::UnknownLocationReference { missing, .. } => PathPlannerError::UnknownLocation { name: missing },
            other => PathPlannerError::Graph(other),
        }
    }
}

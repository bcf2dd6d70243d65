use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use crate::graph::CampusGraph;


/// Process-wide handle to the current campus graph.
///
/// Queries take a [`snapshot`](Self::snapshot) and search it without holding
/// the lock. A rebuild constructs a fresh graph and [`replace`](Self::replace)s
/// the reference; in-flight queries keep the graph they started with.
#[derive(Debug, Default)]
pub struct SharedGraph {
    current: RwLock<Arc<CampusGraph>>,
}

impl SharedGraph {

    pub fn new(graph: CampusGraph) -> Self {
        Self { current: RwLock::new(Arc::new(graph)) }
    }

    /// The graph queries should run against right now
    pub fn snapshot(&self) -> Arc<CampusGraph> {
        // the guarded value is a plain Arc swap, a poisoned lock still holds a valid graph
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Swap in a rebuilt graph, returning the previous one
    pub fn replace(&self, graph: CampusGraph) -> Arc<CampusGraph> {
        let next = Arc::new(graph);
        info!(locations = next.len(), connections = next.edge_count(), "replacing campus graph");

        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, next)
    }
}

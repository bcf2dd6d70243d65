use crate::graph::CampusGraph;


/// Sum of the edge weights along `path`, in meters. Zero for a single location.
///
/// # Panics
///
/// Panics if two consecutive locations are not connected. Paths produced by
/// [`PathFinder`](crate::planner::PathFinder) always satisfy this.
pub fn total_distance<S: AsRef<str>>(graph: &CampusGraph, path: &[S]) -> f64 {
    path.windows(2)
        .map(|pair| {
            let (a, b) = (pair[0].as_ref(), pair[1].as_ref());
            graph
                .edge_weight(a, b)
                .unwrap_or_else(|| panic!("path steps between unconnected locations {a} and {b}"))
        })
        .fold(0.0, |total, weight| total + weight)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{ConnectionRecord, LocationRecord};

    fn line() -> CampusGraph {
        CampusGraph::build(
            &[
                LocationRecord::new("A", 34.0000, 72.0000),
                LocationRecord::new("B", 34.0001, 72.0000),
                LocationRecord::new("C", 34.0002, 72.0000),
            ],
            &[
                ConnectionRecord::new("A", "B", 12.5),
                ConnectionRecord::new("B", "C", 30.25),
            ],
        ).unwrap()
    }

    #[test]
    fn test_single_location_is_zero() {
        assert_eq!(total_distance(&line(), &["B"]), 0.0);
    }

    #[test]
    fn test_sums_consecutive_edges() {
        let graph = line();
        assert_eq!(total_distance(&graph, &["A", "B", "C"]), 42.75);
        assert_eq!(total_distance(&graph, &["C", "B", "A"]), 42.75);
        assert_eq!(total_distance(&graph, &["A", "B", "A"]), 25.0);
    }

    #[test]
    #[should_panic(expected = "unconnected locations A and C")]
    fn test_non_adjacent_steps_panic() {
        total_distance(&line(), &["A", "C"]);
    }

    #[test]
    #[should_panic]
    fn test_unknown_location_panics() {
        total_distance(&line(), &["A", "Z"]);
    }
}

mod common;

use campus_navigate::{
    total_distance, Algorithm, CampusGraph, ConnectionRecord, GraphError, GraphOptions,
    HaversineHeuristic, PathFinder, PathPlannerError,
};

use common::{campus, campus_data};

#[test]
fn fixture_loads_all_locations() {
    let graph = campus();

    assert_eq!(graph.len(), 8);
    assert_eq!(graph.edge_count(), 11);
    assert_eq!(graph.nodes()[0], "Main Gate");
    assert!(graph.contains("Hostel 9"));
    assert!(graph.admissibility_violations().is_empty());
}

#[test]
fn main_gate_to_hostel() {
    let graph = campus();
    let finder = PathFinder::new(&graph);

    for algorithm in Algorithm::ALL {
        let route = finder.find_path("Main Gate", "Hostel 9", algorithm).unwrap();
        assert_eq!(
            route.path,
            ["Main Gate", "Faculty Block", "Central Block", "Cafe", "Tuck Shop", "Hostel 9"]
        );
        assert_eq!(route.distance_meters, 761.0);
    }
}

#[test]
fn direct_edge_beats_detour() {
    let graph = campus();
    let route = PathFinder::new(&graph)
        .find_path("Main Gate", "Sports Complex", Algorithm::AStar)
        .unwrap();

    assert_eq!(route.path, ["Main Gate", "Sports Complex"]);
    assert_eq!(route.distance_meters, 640.0);
}

#[test]
fn dijkstra_and_astar_agree_on_every_pair() {
    let graph = campus();
    let finder = PathFinder::new(&graph);

    for start in graph.nodes() {
        for end in graph.nodes() {
            let d = finder.find_path(start, end, Algorithm::Dijkstra).unwrap();
            let a = finder.find_path(start, end, Algorithm::AStar).unwrap();
            assert_eq!(d.distance_meters, a.distance_meters, "{start} -> {end}");
            assert!(a.expanded <= d.expanded, "{start} -> {end}: A* expanded more nodes");
        }
    }
}

#[test]
fn reported_distance_matches_edge_sum() {
    let graph = campus();
    let finder = PathFinder::new(&graph);

    for start in graph.nodes() {
        for end in graph.nodes() {
            for algorithm in Algorithm::ALL {
                let route = finder.find_path(start, end, algorithm).unwrap();
                assert_eq!(route.path.first().map(String::as_str), Some(start));
                assert_eq!(route.path.last().map(String::as_str), Some(end));

                let summed: f64 = route
                    .path
                    .windows(2)
                    .map(|pair| graph.edge_weight(&pair[0], &pair[1]).expect("consecutive nodes connected"))
                    .sum();
                assert_eq!(route.distance_meters, summed);
                assert_eq!(total_distance(&graph, &route.path), summed);
            }
        }
    }
}

#[test]
fn same_start_and_end() {
    let graph = campus();
    let finder = PathFinder::new(&graph);

    for node in graph.nodes() {
        for algorithm in Algorithm::ALL {
            let route = finder.find_path(node, node, algorithm).unwrap();
            assert_eq!(route.path, [node]);
            assert_eq!(route.distance_meters, 0.0);
        }
    }
}

#[test]
fn heuristic_is_admissible_on_fixture() {
    let graph = campus();
    let heuristic = HaversineHeuristic::new(&graph);

    for (a, b, weight) in graph.edges() {
        assert!(heuristic.estimate(a, b).unwrap() <= weight, "{a} - {b}");
    }

    // and against full shortest paths, not only single edges
    let finder = PathFinder::new(&graph);
    for start in graph.nodes() {
        for end in graph.nodes() {
            let route = finder.find_path(start, end, Algorithm::Dijkstra).unwrap();
            assert!(heuristic.estimate(start, end).unwrap() <= route.distance_meters);
        }
    }
}

#[test]
fn unknown_location_for_both_algorithms() {
    let graph = campus();
    let finder = PathFinder::new(&graph);

    for algorithm in Algorithm::ALL {
        let err = finder.find_path("Main Gate", "Swimming Pool", algorithm).unwrap_err();
        assert_eq!(err, PathPlannerError::UnknownLocation { name: "Swimming Pool".to_string() });
        assert_eq!(err.to_string(), "unknown location: Swimming Pool");
    }
}

#[test]
fn unsupported_algorithm_name() {
    let graph = campus();
    let finder = PathFinder::new(&graph);

    let err = finder.find_path_named("Main Gate", "Library", "bellman-ford").unwrap_err();
    assert!(matches!(err, PathPlannerError::UnsupportedAlgorithm { .. }));

    // store still answers queries afterwards
    assert_eq!(finder.find_path_named("Main Gate", "Library", "astar").unwrap().distance_meters, 366.0);
}

#[test]
fn disconnected_component() {
    let mut data = campus_data();
    // drop every connection touching Hostel 9
    data.connections.retain(|c| c.from != "Hostel 9" && c.to != "Hostel 9");
    let graph = CampusGraph::from_map_data(&data, &GraphOptions::default()).unwrap();
    let finder = PathFinder::new(&graph);

    for algorithm in Algorithm::ALL {
        let err = finder.find_path("Main Gate", "Hostel 9", algorithm).unwrap_err();
        assert_eq!(
            err,
            PathPlannerError::NoPathFound { start: "Main Gate".to_string(), goal: "Hostel 9".to_string() }
        );
    }
}

#[test]
fn build_errors_surface_before_queries() {
    let mut data = campus_data();
    data.connections.push(ConnectionRecord::new("Cafe", "Mosque", 80.0));

    let err = CampusGraph::from_map_data(&data, &GraphOptions::default()).unwrap_err();
    assert_eq!(
        err,
        GraphError::UnknownLocationReference {
            from: "Cafe".to_string(),
            to: "Mosque".to_string(),
            missing: "Mosque".to_string(),
        }
    );
}

#[test]
fn route_serializes_for_presentation() {
    let graph = campus();
    let route = PathFinder::new(&graph)
        .find_path("Cafe", "Tuck Shop", Algorithm::Dijkstra)
        .unwrap();

    let json: serde_json::Value = serde_json::to_value(&route).unwrap();
    assert_eq!(json["path"], serde_json::json!(["Cafe", "Tuck Shop"]));
    assert_eq!(json["distance_meters"], 102.0);
    assert_eq!(json["algorithm"], "dijkstra");
}

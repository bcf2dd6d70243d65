use campus_navigate::{CampusGraph, GraphOptions, MapData};

pub const CAMPUS_JSON: &str = include_str!("../fixtures/campus.json");

pub fn campus_data() -> MapData {
    serde_json::from_str(CAMPUS_JSON).expect("fixture parses")
}

pub fn campus() -> CampusGraph {
    CampusGraph::from_map_data(&campus_data(), &GraphOptions::default()).expect("fixture builds")
}

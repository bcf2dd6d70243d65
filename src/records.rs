use serde::{Deserialize, Serialize};

use crate::geometry::GeoCoordinate;


/// Location as handed over by the map-data loader
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationRecord {

    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self { name: name.into(), latitude, longitude }
    }

    pub fn coordinate(&self) -> GeoCoordinate {
        GeoCoordinate::new(self.latitude, self.longitude)
    }
}


/// Undirected, weighted connection between two named locations
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub from: String,
    pub to: String,
    pub weight_meters: f64,
}

impl ConnectionRecord {

    pub fn new(from: impl Into<String>, to: impl Into<String>, weight_meters: f64) -> Self {
        Self { from: from.into(), to: to.into(), weight_meters }
    }
}


/// Complete loader output
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapData {
    #[serde(default)]
    pub locations: Vec<LocationRecord>,
    #[serde(default)]
    pub connections: Vec<ConnectionRecord>,
}

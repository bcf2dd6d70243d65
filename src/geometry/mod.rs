use num_traits::Float;
use serde::{Deserialize, Serialize};


/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;


/// Haversine (great-circle) distance in meters between two lat/lon points given in degrees
/// https://en.wikipedia.org/wiki/Haversine_formula
pub fn haversine<T>(lat1: T, lon1: T, lat2: T, lon2: T) -> T
where
    T: Float,
    {
    let two = T::one() + T::one();
    let radius = T::from(EARTH_RADIUS_M).unwrap_or_else(T::zero);

    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let a = (delta_phi / two).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / two).sin().powi(2);

    // rounding can push `a` a hair past 1 for antipodal points
    let a = a.min(T::one());
    let c = two * a.sqrt().atan2((T::one() - a).sqrt());

    radius * c
}


/// Geographic coordinate in degrees
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Both components finite and inside [-90, 90] x [-180, 180]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance to another coordinate, in meters
    pub fn haversine_distance(&self, other: &GeoCoordinate) -> f64 {
        haversine(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

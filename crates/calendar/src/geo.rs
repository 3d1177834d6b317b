//! Great-circle distance and coordinate parsing.

use crate::error::CalendarError;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in meters between two points given in degrees.
///
/// Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_M`].
/// The haversine term is clamped to `[0, 1]` so antipodal points yield
/// `π · R` rather than `NaN`.
pub fn haversine_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lng2 - lng1).to_radians();

    let a = ((d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// A validated latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    /// Creates a coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::CoordinateOutOfRange`] if either value is
    /// non-finite, latitude is outside `[-90, 90]` or longitude is outside
    /// `[-180, 180]`.
    pub fn new(lat: f64, lng: f64) -> Result<Self, CalendarError> {
        let valid = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);
        if !valid {
            return Err(CalendarError::CoordinateOutOfRange { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    /// Returns the latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Returns the longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Great-circle distance to `other` in meters.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        haversine_distance(self.lat, self.lng, other.lat, other.lng)
    }
}

/// Parses a `"<lat>°, <lng>°"` string into a [`Coordinate`].
///
/// Degree symbols are optional. Exactly two comma-separated fields are
/// required.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidCoordinate`] on a wrong field count or a
/// non-numeric field, and [`CalendarError::CoordinateOutOfRange`] if the
/// numbers are not a valid position.
pub fn parse_lat_lng(input: &str) -> Result<Coordinate, CalendarError> {
    let invalid = || CalendarError::InvalidCoordinate {
        input: input.to_string(),
    };

    let cleaned = input.replace('°', "");
    let mut parts = cleaned.split(',');
    let (Some(lat), Some(lng), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };

    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lng: f64 = lng.trim().parse().map_err(|_| invalid())?;
    Coordinate::new(lat, lng)
}

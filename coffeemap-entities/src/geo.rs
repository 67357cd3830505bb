use ::geo::{GeodesicDistance as _, Point};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Invalid latitude degrees: {0}")]
    Latitude(String),
    #[error("Invalid longitude degrees: {0}")]
    Longitude(String),
}

/// Latitude in WGS-84 degrees.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    const DEG_MAX: f64 = 90.0;
    const DEG_MIN: f64 = -90.0;

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let deg = deg.into();
        debug_assert!(deg >= Self::DEG_MIN);
        debug_assert!(deg <= Self::DEG_MAX);
        Self(deg)
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        if (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }
}

impl fmt::Display for LatCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_deg())
    }
}

/// Longitude in WGS-84 degrees.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    const DEG_MAX: f64 = 180.0;
    const DEG_MIN: f64 = -180.0;

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let deg = deg.into();
        debug_assert!(deg >= Self::DEG_MIN);
        debug_assert!(deg <= Self::DEG_MAX);
        Self(deg)
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        if (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }
}

impl fmt::Display for LngCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_deg())
    }
}

/// A geographical location on the WGS-84 ellipsoid.
///
/// Points are always constructed with an explicit coordinate order:
/// [`MapPoint::from_lat_lng_deg`] for the usual `(lat, lng)` order and
/// [`MapPoint::try_from_lng_lat_deg`] for the `(lng, lat)` order of GeoJSON
/// and of most geocoding services.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        match (LatCoord::try_from_deg(lat), LngCoord::try_from_deg(lng)) {
            (Some(lat), Some(lng)) => Some(Self::new(lat, lng)),
            _ => None,
        }
    }

    /// Reversed argument order, as in GeoJSON `[lng, lat]` pairs.
    pub fn try_from_lng_lat_deg<LNG: Into<f64>, LAT: Into<f64>>(
        lng: LNG,
        lat: LAT,
    ) -> Option<Self> {
        Self::try_from_lat_lng_deg(lat, lng)
    }

    pub fn parse_lat_lng_deg(lat_deg_str: &str, lng_deg_str: &str) -> Result<Self, ParseError> {
        let lat_deg = lat_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|_| ParseError::Latitude(lat_deg_str.to_owned()))?;
        let lng_deg = lng_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|_| ParseError::Longitude(lng_deg_str.to_owned()))?;
        let lat = LatCoord::try_from_deg(lat_deg)
            .ok_or_else(|| ParseError::Latitude(lat_deg_str.to_owned()))?;
        let lng = LngCoord::try_from_deg(lng_deg)
            .ok_or_else(|| ParseError::Longitude(lng_deg_str.to_owned()))?;
        Ok(Self::new(lat, lng))
    }

    // The geo crate uses x = longitude and y = latitude.
    fn to_geo_point(self) -> Point<f64> {
        Point::new(self.lng.to_deg(), self.lat.to_deg())
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(pub f64);

impl Distance {
    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn to_kilometers(self) -> f64 {
        self.0 / 1_000.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} km", self.to_kilometers())
    }
}

impl MapPoint {
    /// Geodesic distance on the WGS-84 ellipsoid (Karney's algorithm).
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Distance {
        let meters = p1.to_geo_point().geodesic_distance(&p2.to_geo_point());
        Distance::from_meters(meters)
    }
}

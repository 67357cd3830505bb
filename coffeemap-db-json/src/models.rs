use coffeemap_core::{
    entities::{CoffeeShop, MapPoint},
    repositories::Error as RepoError,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CoffeeShopRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Latitude_WGS84", default)]
    pub latitude: Option<Degrees>,
    #[serde(rename = "Longitude_WGS84", default)]
    pub longitude: Option<Degrees>,
    #[serde(rename = "geoData")]
    pub geo_data: Option<GeoData>,
}

/// GeoJSON point geometry.
#[derive(Debug, Deserialize)]
pub struct GeoData {
    /// `[lng, lat]`
    pub coordinates: (f64, f64),
}

// Open data exports often encode numbers as strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Degrees {
    Number(f64),
    Text(String),
}

impl Degrees {
    fn to_deg(&self) -> Option<f64> {
        match self {
            Self::Number(deg) => Some(*deg),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl CoffeeShopRecord {
    pub fn try_into_coffee_shop(self, index: usize) -> Result<CoffeeShop, RepoError> {
        let Self {
            name,
            latitude,
            longitude,
            geo_data,
        } = self;
        let invalid = |reason: String| RepoError::InvalidRecord { index, reason };
        let pos = match (geo_data, latitude, longitude) {
            (Some(GeoData { coordinates: (lng, lat) }), _, _) => {
                MapPoint::try_from_lng_lat_deg(lng, lat)
            }
            (None, Some(lat), Some(lng)) => {
                let lat = lat
                    .to_deg()
                    .ok_or_else(|| invalid(format!("'{name}' has an invalid latitude {lat:?}")))?;
                let lng = lng
                    .to_deg()
                    .ok_or_else(|| invalid(format!("'{name}' has an invalid longitude {lng:?}")))?;
                MapPoint::try_from_lat_lng_deg(lat, lng)
            }
            _ => return Err(invalid(format!("'{name}' has no coordinates"))),
        };
        let pos =
            pos.ok_or_else(|| invalid(format!("'{name}' has coordinates out of range")))?;
        Ok(CoffeeShop { name, pos })
    }
}

use coffeemap_core::{
    entities::MapPoint,
    gateways::geocode::{Error, GeoCodingGateway},
};
use itertools::Itertools;
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "https://geocode-maps.yandex.ru/1.x";

/// Forward geocoding with the Yandex HTTP geocoder.
#[derive(Debug, Clone)]
pub struct Yandex {
    api_key: String,
    api_url: String,
    client: reqwest::blocking::Client,
}

impl Yandex {
    pub fn with_api_url(api_key: String, api_url: String) -> Self {
        Self {
            api_key,
            api_url,
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl GeoCodingGateway for Yandex {
    fn resolve_address(&self, address: &str) -> Result<MapPoint, Error> {
        log::debug!("Resolving location of '{address}'");
        let params = [
            ("geocode", address),
            ("apikey", self.api_key.as_str()),
            ("format", "json"),
        ];
        let response = self
            .client
            .get(&self.api_url)
            .query(&params)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            // The URL contains the API key
            .map_err(|err| Error::Http(err.without_url().into()))?;
        let response: GeocodeResponse = response
            .json()
            .map_err(|err| Error::MalformedResponse(err.without_url().to_string()))?;
        most_relevant_position(address, response)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    response: ResponseBody,
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    #[serde(rename = "GeoObjectCollection")]
    geo_object_collection: GeoObjectCollection,
}

#[derive(Debug, Deserialize)]
struct GeoObjectCollection {
    #[serde(rename = "featureMember")]
    feature_member: Vec<FeatureMember>,
}

#[derive(Debug, Deserialize)]
struct FeatureMember {
    #[serde(rename = "GeoObject")]
    geo_object: GeoObject,
}

#[derive(Debug, Deserialize)]
struct GeoObject {
    #[serde(rename = "Point")]
    point: Point,
}

#[derive(Debug, Deserialize)]
struct Point {
    /// `"<lng> <lat>"`
    pos: String,
}

fn most_relevant_position(address: &str, response: GeocodeResponse) -> Result<MapPoint, Error> {
    let Some(most_relevant) = response
        .response
        .geo_object_collection
        .feature_member
        .into_iter()
        .next()
    else {
        return Err(Error::NotFound {
            address: address.to_owned(),
        });
    };
    parse_pos(&most_relevant.geo_object.point.pos)
}

fn parse_pos(pos: &str) -> Result<MapPoint, Error> {
    let (lng, lat) = pos
        .split_whitespace()
        .collect_tuple()
        .ok_or_else(|| Error::MalformedResponse(format!("Invalid position '{pos}'")))?;
    MapPoint::parse_lat_lng_deg(lat, lng).map_err(|err| Error::MalformedResponse(err.to_string()))
}

use serde::{Deserialize, Serialize};
use std::{net::IpAddr, path::PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = include_str!("coffeemap.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub catalog: Option<Catalog>,
    pub location: Option<Location>,
    pub geocoding: Option<Geocoding>,
    pub gateway: Option<Gateway>,
    pub map: Option<Map>,
    pub webserver: Option<WebServer>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Catalog {
    pub file: PathBuf,
}

impl Default for Catalog {
    fn default() -> Self {
        Config::default().catalog.expect("Catalog configuration")
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Location {
    pub address: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

impl Default for Geocoding {
    fn default() -> Self {
        Config::default().geocoding.expect("Geocoding configuration")
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    Yandex,
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub yandex: Option<Yandex>,
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Yandex {
    pub api_key: Option<String>,
    pub api_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Map {
    pub file: PathBuf,
    pub zoom: u8,
    pub limit: usize,
}

impl Default for Map {
    fn default() -> Self {
        Config::default().map.expect("Map configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.catalog.is_some());
        assert!(cfg.geocoding.is_some());
        assert!(cfg.map.is_some());
        assert!(cfg.webserver.is_some());
        assert!(cfg.location.unwrap().address.is_none());
    }

    #[test]
    fn default_config_has_no_api_key() {
        let cfg = Config::default();
        let yandex = cfg.gateway.unwrap().yandex.unwrap();
        assert!(yandex.api_key.is_none());
        assert!(yandex.api_url.is_some());
    }

    #[test]
    fn default_map_config() {
        let cfg = Map::default();
        assert_eq!(PathBuf::from("coffee.html"), cfg.file);
        assert_eq!(15, cfg.zoom);
        assert_eq!(5, cfg.limit);
    }

    #[test]
    fn default_webserver_listens_on_all_interfaces() {
        let cfg = WebServer::default();
        assert!(cfg.address.is_unspecified());
        assert_eq!(8000, cfg.port);
    }
}

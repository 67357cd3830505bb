use anyhow::{anyhow, bail, Context as _, Result};
use coffeemap_gateways::yandex;
use std::{
    env, fs,
    io::ErrorKind,
    net::IpAddr,
    ops::RangeInclusive,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "coffeemap.toml";

const ENV_NAME_API_KEY: &str = "API_KEY";

const VALID_ZOOM_LEVELS: RangeInclusive<u8> = 1..=19;

pub struct Config {
    pub catalog: Catalog,
    pub location: Location,
    pub geocoding: Geocoding,
    pub map: Map,
    pub webserver: WebServer,
}

impl Config {
    /// Load the configuration file if it exists and apply
    /// the environment on top of it.
    ///
    /// An explicitly requested file must exist, the default
    /// file is optional.
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let explicit = file_path.is_some();
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => {
                log::info!("Load configuration from {}", file_path.display());
                toml::from_str(&cfg_string)
                    .with_context(|| format!("Invalid configuration file {}", file_path.display()))?
            }
            Err(err) if err.kind() == ErrorKind::NotFound && !explicit => {
                log::info!("{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration.");
                raw::Config::default()
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Unable to read configuration file {}", file_path.display())
                })
            }
        };
        Self::try_from_raw(raw_config, env::var(ENV_NAME_API_KEY).ok())
    }

    fn try_from_raw(mut raw_config: raw::Config, api_key: Option<String>) -> Result<Self> {
        if let Some(api_key) = api_key {
            log::debug!("Use geocoding API key from {ENV_NAME_API_KEY}");
            raw_config
                .gateway
                .get_or_insert_with(Default::default)
                .yandex
                .get_or_insert_with(Default::default)
                .api_key = Some(api_key);
        }
        Self::try_from(raw_config)
    }
}

pub struct Catalog {
    /// JSON file with the known coffee shops.
    pub file: PathBuf,
}

pub struct Location {
    /// The user is asked for an address if none is configured.
    pub address: Option<String>,
}

pub struct Geocoding {
    pub gateway: GeocodingGateway,
}

#[derive(Clone)]
pub enum GeocodingGateway {
    Yandex { api_key: String, api_url: String },
}

pub struct Map {
    /// The rendered HTML file.
    pub file: PathBuf,
    pub zoom: u8,
    /// Maximum number of coffee shops to show.
    pub limit: usize,
}

pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            catalog,
            location,
            geocoding,
            gateway,
            map,
            webserver,
        } = from;

        let raw::Catalog { file } = catalog.unwrap_or_default();
        let catalog = Catalog { file };

        let raw::Location { address } = location.unwrap_or_default();
        let address = address
            .map(|a| a.trim().to_owned())
            .filter(|a| !a.is_empty());
        let location = Location { address };

        let gw_name = geocoding
            .unwrap_or_default()
            .gateway
            .ok_or_else(|| anyhow!("No geocoding gateway configured"))?;
        let toml_name = toml::Value::try_from(gw_name)
            .ok()
            .and_then(|v| v.as_str().map(ToOwned::to_owned))
            .unwrap_or_default();
        let gateway = gateway.unwrap_or_default();
        let geo_gateway = match gw_name {
            raw::GeocodingGateway::Yandex => {
                let raw::Yandex { api_key, api_url } = gateway.yandex.unwrap_or_default();
                let api_key = api_key
                    .map(|k| k.trim().to_owned())
                    .filter(|k| !k.is_empty())
                    .ok_or_else(|| {
                        anyhow!(
                            "Missing API key of the '{toml_name}' gateway \
                            (set {ENV_NAME_API_KEY} or [gateway.{toml_name}] api-key)"
                        )
                    })?;
                let api_url = api_url.unwrap_or_else(|| yandex::DEFAULT_API_URL.to_owned());
                log::info!("Use Yandex geocoding gateway");
                GeocodingGateway::Yandex { api_key, api_url }
            }
        };
        let geocoding = Geocoding {
            gateway: geo_gateway,
        };

        let raw::Map { file, zoom, limit } = map.unwrap_or_default();
        if limit == 0 {
            bail!("The map must show at least one coffee shop");
        }
        if !VALID_ZOOM_LEVELS.contains(&zoom) {
            bail!(
                "Invalid zoom level {zoom} (expected {}..={})",
                VALID_ZOOM_LEVELS.start(),
                VALID_ZOOM_LEVELS.end()
            );
        }
        let map = Map { file, zoom, limit };

        let raw::WebServer { address, port } = webserver.unwrap_or_default();
        let webserver = WebServer { address, port };

        Ok(Self {
            catalog,
            location,
            geocoding,
            map,
            webserver,
        })
    }
}

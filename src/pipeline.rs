use anyhow::{Context as _, Result};
use coffeemap_core::{
    entities::RankedShop, gateways::geocode::GeoCodingGateway, repositories::CoffeeShopRepo,
    usecases,
};
use coffeemap_db_json::JsonCatalog;
use coffeemap_webserver::{view, Cfg as WebCfg, MapArtifact};

use crate::{config::Config, gateways};

/// Load, geocode, rank and render, then serve the map
/// until the process is stopped.
///
/// The address is requested once the catalog is available.
pub fn run<A>(cfg: Config, address: A, serve: bool) -> Result<()>
where
    A: FnOnce() -> Result<String>,
{
    let Config {
        catalog,
        geocoding,
        map,
        webserver,
        ..
    } = cfg;

    let catalog = JsonCatalog::load(&catalog.file)?;
    let address = address()?;
    let geocoding = gateways::geocoding_gateway(&geocoding);
    let artifact = MapArtifact::new(map.file);

    render_nearest_coffee_shops(
        &catalog,
        &*geocoding,
        &address,
        map.limit,
        map.zoom,
        &artifact,
    )?;

    if !serve {
        return Ok(());
    }
    let web_cfg = WebCfg {
        address: webserver.address,
        port: webserver.port,
    };
    // The blocking geocoding client must not run within the async runtime
    tokio::runtime::Runtime::new()
        .context("Unable to start the async runtime")?
        .block_on(coffeemap_webserver::run(web_cfg, artifact))
}

pub fn render_nearest_coffee_shops<R, G>(
    catalog: &R,
    geocoding: &G,
    address: &str,
    limit: usize,
    zoom: u8,
    artifact: &MapArtifact,
) -> Result<Vec<RankedShop>>
where
    R: CoffeeShopRepo + ?Sized,
    G: GeoCodingGateway + ?Sized,
{
    let user = usecases::locate_user(geocoding, address)?;
    let shops = usecases::find_nearest_coffee_shops(catalog, user.pos, limit)?;
    for (i, shop) in shops.iter().enumerate() {
        log::info!("{}. {} ({})", i + 1, shop.title, shop.distance);
    }
    view::render_map(artifact, &user, &shops, zoom).with_context(|| {
        format!("Unable to save the map to {}", artifact.path().display())
    })?;
    Ok(shops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use coffeemap_core::{entities::MapPoint, gateways::geocode};
    use std::fs;

    const CATALOG: &str = r#"[
        {
            "Name": "A",
            "Latitude_WGS84": "55.75",
            "Longitude_WGS84": "37.61",
            "geoData": { "type": "Point", "coordinates": [37.61, 55.75] }
        },
        {
            "Name": "B",
            "Latitude_WGS84": 55.80,
            "Longitude_WGS84": 37.70
        }
    ]"#;

    struct FixedLocation(Option<MapPoint>);

    impl GeoCodingGateway for FixedLocation {
        fn resolve_address(&self, address: &str) -> Result<MapPoint, geocode::Error> {
            self.0.ok_or_else(|| geocode::Error::NotFound {
                address: address.to_owned(),
            })
        }
    }

    #[test]
    fn render_nearest_coffee_shops_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = MapArtifact::new(dir.path().join("coffee.html"));
        let catalog = JsonCatalog::from_json_str(CATALOG).unwrap();
        let geocoding = FixedLocation(Some(MapPoint::from_lat_lng_deg(55.751, 37.618)));

        let shops =
            render_nearest_coffee_shops(&catalog, &geocoding, "Red Square", 5, 15, &artifact)
                .unwrap();
        let titles: Vec<_> = shops.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(vec!["A", "B"], titles);

        let html = fs::read_to_string(artifact.path()).unwrap();
        assert!(html.contains("Red Square"));
        assert!(html.contains("\"A\""));
        assert!(html.contains("\"B\""));
    }

    #[test]
    fn unknown_address_renders_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = MapArtifact::new(dir.path().join("coffee.html"));
        let catalog = JsonCatalog::from_json_str(CATALOG).unwrap();
        let geocoding = FixedLocation(None);

        let err = render_nearest_coffee_shops(&catalog, &geocoding, "Nowhere", 5, 15, &artifact)
            .err()
            .unwrap();
        assert!(matches!(
            err.downcast_ref::<usecases::Error>(),
            Some(usecases::Error::AddressNotFound(_))
        ));
        assert!(!artifact.path().exists());
    }

    #[test]
    fn respect_limit() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = MapArtifact::new(dir.path().join("coffee.html"));
        let catalog = JsonCatalog::from_json_str(CATALOG).unwrap();
        let geocoding = FixedLocation(Some(MapPoint::from_lat_lng_deg(55.80, 37.70)));

        let shops =
            render_nearest_coffee_shops(&catalog, &geocoding, "B", 1, 15, &artifact).unwrap();
        assert_eq!(1, shops.len());
        assert_eq!("B", shops[0].title);
    }

    #[test]
    fn load_catalog_before_asking_for_address() {
        use crate::config::{self, GeocodingGateway};
        use std::cell::Cell;

        let dir = tempfile::tempdir().unwrap();
        let cfg = Config {
            catalog: config::Catalog {
                file: dir.path().join("missing.json"),
            },
            location: config::Location { address: None },
            geocoding: config::Geocoding {
                gateway: GeocodingGateway::Yandex {
                    api_key: "key".into(),
                    api_url: "http://127.0.0.1:9/".into(),
                },
            },
            map: config::Map {
                file: dir.path().join("coffee.html"),
                zoom: 15,
                limit: 5,
            },
            webserver: config::WebServer {
                address: [127, 0, 0, 1].into(),
                port: 0,
            },
        };
        let asked = Cell::new(false);
        let res = run(
            cfg,
            || {
                asked.set(true);
                Ok("Red Square".to_owned())
            },
            false,
        );
        assert!(res.is_err());
        assert!(!asked.get());
    }
}

use crate::config;
use coffeemap_core::gateways::geocode::GeoCodingGateway;
use coffeemap_gateways::yandex::Yandex;

pub fn geocoding_gateway(cfg: &config::Geocoding) -> Box<dyn GeoCodingGateway> {
    match &cfg.gateway {
        config::GeocodingGateway::Yandex { api_key, api_url } => {
            log::debug!("Geocoding with {api_url}");
            Box::new(Yandex::with_api_url(api_key.clone(), api_url.clone()))
        }
    }
}

use maud::{html, Markup, PreEscaped, DOCTYPE};
use serde::Serialize;
use std::io;

use crate::MapArtifact;
use coffeemap_core::entities::*;

const LEAFLET_CSS_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.4.0/leaflet.css";
const LEAFLET_CSS_SHA512: &str = "sha512-puBpdR0798OZvTTbP4A8Ix/l+A4dHDD0DGqYW6RQ+9jxkRFclaxxQb/SJAWZfWAkuyeQUytO7+7N4QKrDh+drA==";
const LEAFLET_JS_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.4.0/leaflet.js";
const LEAFLET_JS_SHA512: &str = "sha512-QVftwZFqvtRNi0ZyCtsznlKSWOStnDORoefr1enyq5mVL4tmKB3S/EnC3rRJcxCPavG10IcrVGSmPh6Qw5lwrg==";

// Inlined to keep the map a single self-contained file.
const MAP_JS: &str = include_str!("map.js");

const MAP_CSS: &str = "html,body{height:100%;margin:0;font-family:sans-serif}\
    #map{height:75%}\
    .shops{padding:0 1em}";

pub const DEFAULT_ZOOM: u8 = 15;

/// Render the map and persist it, replacing any previous rendering.
pub fn render_map(
    artifact: &MapArtifact,
    user: &UserLocation,
    shops: &[RankedShop],
    zoom: u8,
) -> io::Result<()> {
    let markup = coffee_map(user, shops, zoom);
    artifact.write(&markup.into_string())?;
    info!(
        "Saved map with {} coffee shops to {}",
        shops.len(),
        artifact.path().display()
    );
    Ok(())
}

pub fn coffee_map(user: &UserLocation, shops: &[RankedShop], zoom: u8) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no";
                title { "Coffee shops near " (user.address) }
                (leaflet_css_link())
                style { (PreEscaped(MAP_CSS)) }
            }
            body {
                div id="map" {}
                div class="shops" {
                    h3 { "Nearest coffee shops to " em { (user.address) } }
                    ol {
                        @for shop in shops {
                            li { (shop.title) " (" (shop.distance) ")" }
                        }
                    }
                }
                (map_scripts(user, shops, zoom))
            }
        }
    }
}

fn leaflet_css_link() -> Markup {
    html! {
        link
            rel="stylesheet"
            href=(LEAFLET_CSS_URL)
            integrity=(LEAFLET_CSS_SHA512)
            crossorigin="anonymous";
    }
}

/// A marker as it is passed to the map script.
///
/// `tooltip` and `popup` are inserted as HTML by Leaflet
/// and must therefore already be escaped.
#[derive(Debug, Serialize)]
struct MapPin {
    lat: f64,
    lng: f64,
    tooltip: String,
    popup: String,
}

impl MapPin {
    fn user(user: &UserLocation) -> Self {
        let (lat, lng) = user.pos.to_lat_lng_deg();
        Self {
            lat,
            lng,
            tooltip: "You are here".to_owned(),
            popup: format!("Latitude: {lat}<br>Longitude: {lng}"),
        }
    }
}

impl From<&RankedShop> for MapPin {
    fn from(shop: &RankedShop) -> Self {
        let (lat, lng) = shop.pos.to_lat_lng_deg();
        Self {
            lat,
            lng,
            tooltip: escape_html(&shop.title),
            popup: format!("Distance to the coffee shop: {}", shop.distance),
        }
    }
}

fn escape_html(s: &str) -> String {
    html! { (s) }.into_string()
}

fn to_js_value<T: Serialize>(value: &T) -> String {
    // Serializing plain structs with string and number fields cannot fail
    let json = serde_json::to_string(value).unwrap_or_else(|_| "null".to_owned());
    // Never close the surrounding <script> element
    json.replace("</", "<\\/")
}

fn map_scripts(user: &UserLocation, shops: &[RankedShop], zoom: u8) -> Markup {
    let user_pin = MapPin::user(user);
    let shop_pins: Vec<MapPin> = shops.iter().map(MapPin::from).collect();
    html! {
      script {
        (PreEscaped(format!(
            "window.COFFEEMAP_USER={};window.COFFEEMAP_SHOPS={};window.COFFEEMAP_ZOOM={};",
            to_js_value(&user_pin),
            to_js_value(&shop_pins),
            zoom
        )))
      }
      script
        src=(LEAFLET_JS_URL)
        integrity=(LEAFLET_JS_SHA512)
        crossorigin="anonymous" {}
      script { (PreEscaped(MAP_JS)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coffeemap_entities::builders::*;

    fn user() -> UserLocation {
        UserLocation {
            address: "Red Square".into(),
            pos: MapPoint::from_lat_lng_deg(55.751, 37.618),
        }
    }

    fn ranked(names: &[&str]) -> Vec<RankedShop> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let shop = CoffeeShop::build()
                    .name(name)
                    .lat_lng(55.75 + i as f64 * 0.01, 37.61)
                    .finish();
                RankedShop::new(&shop, user().pos)
            })
            .collect()
    }

    #[test]
    fn render_all_ranked_shops_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = MapArtifact::new(dir.path().join("coffee.html"));
        let titles = ["Cofix", "Double B", "Surf Coffee", "Coffee Bean", "Shokoladnitsa"];
        let shops = ranked(&titles);
        render_map(&artifact, &user(), &shops, DEFAULT_ZOOM).unwrap();

        let html = String::from_utf8(artifact.read().unwrap()).unwrap();
        assert!(!html.is_empty());
        for title in titles {
            assert!(html.contains(title), "missing {title}");
        }
    }

    #[test]
    fn annotate_distances_rounded_to_two_decimals() {
        let shops = ranked(&["Cofix"]);
        let km = shops[0].distance.to_kilometers();
        let html = coffee_map(&user(), &shops, DEFAULT_ZOOM).into_string();
        assert!(html.contains(&format!("Distance to the coffee shop: {km:.2} km")));
    }

    #[test]
    fn mark_user_location() {
        let html = coffee_map(&user(), &[], 12).into_string();
        assert!(html.contains("You are here"));
        assert!(html.contains("Latitude: 55.751<br>Longitude: 37.618"));
        assert!(html.contains("window.COFFEEMAP_ZOOM=12;"));
        assert!(html.contains("window.COFFEEMAP_SHOPS=[];"));
    }

    #[test]
    fn escape_shop_titles() {
        let shops = ranked(&["<b>Bold</b> & </script><script>alert(1)</script>"]);
        let html = coffee_map(&user(), &shops, DEFAULT_ZOOM).into_string();
        assert!(!html.contains("<b>Bold</b>"));
        assert!(!html.contains("</script><script>alert(1)"));
        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt; &amp;"));
    }

    #[test]
    fn escape_address() {
        let user = UserLocation {
            address: "<i>nowhere</i>".into(),
            ..user()
        };
        let html = coffee_map(&user, &[], DEFAULT_ZOOM).into_string();
        assert!(!html.contains("<i>nowhere</i>"));
    }
}

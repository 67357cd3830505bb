use std::net::IpAddr;

use rocket::{config::Config as RocketCfg, get, response::content::RawHtml, routes, Rocket, Route, State};

use crate::MapArtifact;

mod error;

pub use error::Error;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone)]
pub struct Cfg {
    pub address: IpAddr,
    pub port: u16,
}

#[get("/")]
pub fn get_index(artifact: &State<MapArtifact>) -> Result<RawHtml<Vec<u8>>> {
    debug!("Serving map from {}", artifact.path().display());
    let content = artifact.read()?;
    Ok(RawHtml(content))
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", routes![get_index])]
}

pub(crate) fn rocket_instance(
    rocket_cfg: Option<RocketCfg>,
    artifact: MapArtifact,
) -> Rocket<rocket::Build> {
    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };
    let mut instance = r.manage(artifact);
    for (m, r) in mounts() {
        instance = instance.mount(m, r);
    }
    instance
}

pub async fn run(cfg: Cfg, artifact: MapArtifact) -> anyhow::Result<()> {
    let Cfg { address, port } = cfg;
    let mut rocket_cfg = RocketCfg::default();
    rocket_cfg.address = address;
    rocket_cfg.port = port;

    info!("Serving {} on http://{address}:{port}/", artifact.path().display());
    rocket_instance(Some(rocket_cfg), artifact)
        .launch()
        .await
        .map_err(|err| anyhow::anyhow!("Unable to run web server: {err}"))?;
    Ok(())
}

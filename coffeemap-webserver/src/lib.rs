#[macro_use]
extern crate log;

mod artifact;
pub mod view;
mod web;

pub use artifact::MapArtifact;
pub use web::Cfg;

pub async fn run(cfg: Cfg, artifact: MapArtifact) -> anyhow::Result<()> {
    web::run(cfg, artifact).await
}

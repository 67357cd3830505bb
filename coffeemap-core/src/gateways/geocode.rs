use crate::entities::MapPoint;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No location found for '{address}'")]
    NotFound { address: String },
    #[error("Geocoding request failed: {0}")]
    Http(#[source] anyhow::Error),
    #[error("Malformed geocoding response: {0}")]
    MalformedResponse(String),
}

pub trait GeoCodingGateway {
    /// Resolve a free-text address to the most relevant position.
    ///
    /// An address without any match results in [`Error::NotFound`].
    fn resolve_address(&self, address: &str) -> Result<MapPoint, Error>;
}

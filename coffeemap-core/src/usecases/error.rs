use crate::{gateways::geocode, repositories};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The address is empty")]
    EmptyAddress,
    #[error("Address not found: '{0}'")]
    AddressNotFound(String),
    #[error("The coffee shop catalog is empty")]
    EmptyCatalog,
    #[error("Invalid limit")]
    InvalidLimit,
    #[error(transparent)]
    Geocoding(geocode::Error),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<geocode::Error> for Error {
    fn from(err: geocode::Error) -> Self {
        match err {
            geocode::Error::NotFound { address } => Self::AddressNotFound(address),
            err => Self::Geocoding(err),
        }
    }
}

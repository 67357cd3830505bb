// Low-level data access traits.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid record #{index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait CoffeeShopRepo {
    fn all_coffee_shops(&self) -> Result<Vec<CoffeeShop>>;

    fn count_coffee_shops(&self) -> Result<usize> {
        Ok(self.all_coffee_shops()?.len())
    }
}

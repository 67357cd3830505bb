use anyhow::Context as _;
use coffeemap_core::{
    entities::CoffeeShop,
    repositories::{CoffeeShopRepo, Error as RepoError},
};
use std::{fs, io::Read, path::Path};

mod models;

type Result<T> = std::result::Result<T, RepoError>;

/// A read-only coffee shop catalog that is backed by a JSON file.
///
/// The file is read once when loading the catalog.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    shops: Vec<CoffeeShop>,
}

impl JsonCatalog {
    pub fn load<P: AsRef<Path>>(file_path: P) -> Result<Self> {
        let file_path = file_path.as_ref();
        log::info!("Loading coffee shops from {}", file_path.display());
        let file = fs::File::open(file_path)
            .with_context(|| format!("Unable to open catalog file {}", file_path.display()))?;
        let catalog = Self::from_reader(file)?;
        log::info!("Loaded {} coffee shops", catalog.shops.len());
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<models::CoffeeShopRecord> =
            serde_json::from_reader(reader).context("Unable to parse catalog")?;
        let shops = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.try_into_coffee_shop(index))
            .collect::<Result<_>>()?;
        Ok(Self { shops })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_reader(json.as_bytes())
    }
}

impl CoffeeShopRepo for JsonCatalog {
    fn all_coffee_shops(&self) -> Result<Vec<CoffeeShop>> {
        Ok(self.shops.clone())
    }

    fn count_coffee_shops(&self) -> Result<usize> {
        Ok(self.shops.len())
    }
}

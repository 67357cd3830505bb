use super::prelude::*;
use crate::util::sort::SortByDistance;

/// The number of coffee shops that are shown by default.
pub const DEFAULT_LIMIT: usize = 5;

/// Load the catalog and select up to `limit` coffee shops
/// nearest to `origin`, ordered by ascending distance.
pub fn find_nearest_coffee_shops<R>(repo: &R, origin: MapPoint, limit: usize) -> Result<Vec<RankedShop>>
where
    R: CoffeeShopRepo + ?Sized,
{
    let shops = repo.all_coffee_shops()?;
    log::debug!("Ranking {} coffee shops around {origin}", shops.len());
    rank_by_distance(&shops, origin, limit)
}

pub fn rank_by_distance(
    shops: &[CoffeeShop],
    origin: MapPoint,
    limit: usize,
) -> Result<Vec<RankedShop>> {
    if limit == 0 {
        return Err(Error::InvalidLimit);
    }
    if shops.is_empty() {
        return Err(Error::EmptyCatalog);
    }
    let mut ranked: Vec<_> = shops
        .iter()
        .map(|shop| RankedShop::new(shop, origin))
        .collect();
    ranked.sort_by_distance();
    if ranked.len() < limit {
        log::warn!(
            "Only {} of {limit} requested coffee shops are available",
            ranked.len()
        );
    }
    ranked.truncate(limit);
    Ok(ranked)
}

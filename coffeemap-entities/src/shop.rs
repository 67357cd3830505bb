use crate::geo::*;

/// A known coffee shop from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CoffeeShop {
    pub name: String,
    pub pos: MapPoint,
}

/// A coffee shop annotated with its distance to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedShop {
    pub title: String,
    pub pos: MapPoint,
    pub distance: Distance,
}

impl RankedShop {
    pub fn new(shop: &CoffeeShop, origin: MapPoint) -> Self {
        Self {
            title: shop.name.clone(),
            pos: shop.pos,
            distance: MapPoint::distance(origin, shop.pos),
        }
    }
}

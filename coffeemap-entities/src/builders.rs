pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::coffee_shop_builder::*;

pub mod coffee_shop_builder {

    use super::*;
    use crate::{geo::*, shop::*};

    #[derive(Debug)]
    pub struct CoffeeShopBuild {
        shop: CoffeeShop,
    }

    impl CoffeeShopBuild {
        pub fn name(mut self, name: &str) -> Self {
            self.shop.name = name.into();
            self
        }
        pub fn lat_lng(mut self, lat: f64, lng: f64) -> Self {
            self.shop.pos = MapPoint::from_lat_lng_deg(lat, lng);
            self
        }
        pub fn finish(self) -> CoffeeShop {
            self.shop
        }
    }

    impl Builder for CoffeeShop {
        type Build = CoffeeShopBuild;
        fn build() -> CoffeeShopBuild {
            CoffeeShopBuild {
                shop: CoffeeShop {
                    name: String::new(),
                    pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                },
            }
        }
    }
}

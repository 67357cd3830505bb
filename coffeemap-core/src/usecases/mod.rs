mod error;
mod find_nearest_coffee_shops;
mod locate_user;


pub use self::{error::Error, find_nearest_coffee_shops::*, locate_user::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::geocode::GeoCodingGateway, repositories::*};
}

pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use coffeemap_entities::{geo::*, location::*, shop::*};
}

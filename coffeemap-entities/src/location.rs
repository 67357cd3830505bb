use crate::geo::*;

/// The resolved position of the user's free-text address.
#[derive(Debug, Clone, PartialEq)]
pub struct UserLocation {
    pub address: String,
    pub pos: MapPoint,
}

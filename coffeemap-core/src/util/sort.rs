use crate::entities::*;

pub trait SortByDistance {
    /// Stable ascending sort, entries with equal distance keep their order.
    fn sort_by_distance(&mut self);
}

impl SortByDistance for [RankedShop] {
    fn sort_by_distance(&mut self) {
        self.sort_by(|a, b| a.distance.to_meters().total_cmp(&b.distance.to_meters()));
    }
}

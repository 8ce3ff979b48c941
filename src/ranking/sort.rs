use crate::listing::types::known;
use crate::scoring::{parse_minutes, SORT_DISTANCE_DEFAULT};
use serde::{Deserialize, Serialize};

use super::ScoredListing;

/// Ordering applied to the scored listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Highest score first
    #[default]
    Score,
    /// Cheapest first
    Price,
    /// Closest first
    Distance,
    /// Available listings before sold ones
    Sold,
}

/// Sort in place. `sort_by` is stable, so equal keys keep their input order.
pub fn sort_listings(listings: &mut [ScoredListing<'_>], key: SortKey) {
    match key {
        SortKey::Score => listings.sort_by(|a, b| b.score.total_cmp(&a.score)),
        // Missing or non-finite prices sort as 0
        SortKey::Price => listings.sort_by(|a, b| {
            let a_price = known(a.listing.price).unwrap_or(0.0);
            let b_price = known(b.listing.price).unwrap_or(0.0);
            a_price.total_cmp(&b_price)
        }),
        SortKey::Distance => listings.sort_by(|a, b| {
            let a_minutes = parse_minutes(a.listing.distance_text(), SORT_DISTANCE_DEFAULT);
            let b_minutes = parse_minutes(b.listing.distance_text(), SORT_DISTANCE_DEFAULT);
            a_minutes.total_cmp(&b_minutes)
        }),
        // false < true puts unsold first
        SortKey::Sold => listings.sort_by_key(|s| s.listing.sold),
    }
}

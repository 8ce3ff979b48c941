use crate::listing::types::Listing;

/// Budget limit used when the config does not set one
pub const DEFAULT_BUDGET_LIMIT: f64 = 500_000.0;

/// True when the asking price is above the budget limit.
/// A missing price counts as 0 and never flags. Display only, never affects score.
pub fn is_over_budget(listing: &Listing, budget_limit: f64) -> bool {
    listing.price.unwrap_or(0.0) > budget_limit
}

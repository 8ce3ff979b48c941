pub mod filter;
pub mod sort;

pub use filter::matches_search;
pub use sort::{sort_listings, SortKey};

use crate::budget::{is_over_budget, DEFAULT_BUDGET_LIMIT};
use crate::listing::Listing;
use crate::scoring::{calculate_score, ScoreBreakdown, WeightConfig};

/// Everything besides the listings and weights that shapes one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluateOptions {
    pub search_term: Option<String>,
    pub sort_by: SortKey,
    pub budget_limit: f64,
}

impl Default for EvaluateOptions {
    fn default() -> Self {
        Self {
            search_term: None,
            sort_by: SortKey::Score,
            budget_limit: DEFAULT_BUDGET_LIMIT,
        }
    }
}

/// A listing with the values derived for it in one evaluation.
/// Not meant to outlive the inputs it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredListing<'a> {
    pub listing: &'a Listing,
    pub score: f64,
    pub over_budget: bool,
    pub breakdown: ScoreBreakdown,
}

/// Score, filter and order a listing collection.
///
/// Every call recomputes from scratch, so the result always reflects the
/// weights and options passed in. Listings are only read.
pub fn evaluate<'a>(
    listings: &'a [Listing],
    weights: &WeightConfig,
    opts: &EvaluateOptions,
) -> Vec<ScoredListing<'a>> {
    let search_term = opts.search_term.as_deref().unwrap_or("");

    let mut scored: Vec<ScoredListing<'a>> = listings
        .iter()
        .map(|listing| {
            let result = calculate_score(listing, weights);
            ScoredListing {
                listing,
                score: result.score,
                over_budget: is_over_budget(listing, opts.budget_limit),
                breakdown: result.breakdown,
            }
        })
        .filter(|scored| matches_search(scored.listing, search_term))
        .collect();

    sort_listings(&mut scored, opts.sort_by);
    scored
}

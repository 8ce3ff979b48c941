use super::types::Listing;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load listings from a JSON array on disk.
///
/// Records without an address are skipped with a warning. When the same id
/// appears more than once only the first record is kept.
pub fn load_listings(path: &Path) -> Result<Vec<Listing>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open listings file at {}", path.display()))?;

    let records: Vec<Listing> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse listings: invalid JSON in {}", path.display()))?;

    let total = records.len();
    let listings = accept_listings(records);

    tracing::debug!(
        path = %path.display(),
        total,
        accepted = listings.len(),
        "Loaded listings"
    );

    Ok(listings)
}

/// Apply the listing-source contract to already parsed records
pub fn accept_listings(records: Vec<Listing>) -> Vec<Listing> {
    let mut seen_ids = HashSet::new();
    records
        .into_iter()
        .filter(|listing| {
            if listing.address.trim().is_empty() {
                tracing::warn!(id = %listing.id, "Skipping listing without an address");
                return false;
            }
            if !seen_ids.insert(listing.id.clone()) {
                tracing::warn!(id = %listing.id, "Skipping duplicate listing id");
                return false;
            }
            true
        })
        .collect()
}

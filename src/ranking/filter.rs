use crate::listing::Listing;

/// Check a listing against a search term.
///
/// The term is trimmed; an empty term matches everything. Otherwise the term
/// must appear, ignoring case, in the address, city or style.
pub fn matches_search(listing: &Listing, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }

    let needle = term.to_lowercase();
    [&listing.address, &listing.city, &listing.style]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

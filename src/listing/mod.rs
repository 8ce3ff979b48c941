pub mod source;
pub mod types;

pub use source::load_listings;
pub use types::Listing;

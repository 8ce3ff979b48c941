pub mod formatter;

pub use formatter::{
    format_json, format_listing_detail, format_price, format_score, format_scored_table,
    format_tsv, should_use_colors,
};

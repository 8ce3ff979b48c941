use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::ranking::ScoredListing;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score with one decimal, e.g. "89.8"
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// Format a price with thousands separators ("$450,000"), "-" when missing
pub fn format_price(price: Option<f64>) -> String {
    let Some(price) = price.filter(|p| p.is_finite() && *p != 0.0) else {
        return "-".to_string();
    };

    let whole = price.abs().round() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if price < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Status tags shown after the price, e.g. "over budget, sold"
fn status_tags(scored: &ScoredListing) -> String {
    let mut tags = Vec::new();
    if scored.over_budget {
        tags.push("over budget");
    }
    if scored.listing.sold {
        tags.push("sold");
    }
    tags.join(", ")
}

/// Format listings as a table with columns: Index, Score, Location, Price, Status
/// No headers.
/// Index column: 3 chars (fits "99."), right-aligned
/// Score column: 5 chars (fits "100.0"), right-aligned
/// Price column: 11 chars (fits "$10,000,000"), right-aligned
pub fn format_scored_table(listings: &[ScoredListing], use_colors: bool) -> String {
    if listings.is_empty() {
        return "No listings found.".to_string();
    }

    let term_width = get_terminal_width();

    let index_width = 3;
    let score_width = 5;
    let price_width = 11;
    let separator = "  ";

    listings
        .iter()
        .enumerate()
        .map(|(idx, scored)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_str = format!("{:>width$}", format_score(scored.score), width = score_width);
            let price_str = format!(
                "{:>width$}",
                format_price(scored.listing.price),
                width = price_width
            );
            let tags = status_tags(scored);

            let fixed_width = index_width
                + 1
                + score_width
                + price_width
                + separator.len() * 3
                + tags.chars().count();
            let location = scored.listing.location();
            let location = match term_width {
                Some(width) if width > fixed_width + 10 => truncate(&location, width - fixed_width),
                Some(_) => truncate(&location, 20),
                None => location,
            };

            if use_colors {
                let score_colored = if scored.score >= 70.0 {
                    score_str.green().bold().to_string()
                } else if scored.score >= 40.0 {
                    score_str.yellow().bold().to_string()
                } else {
                    score_str.red().bold().to_string()
                };
                let price_colored = if scored.over_budget {
                    price_str.red().to_string()
                } else {
                    price_str
                };
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    score_colored,
                    separator,
                    location,
                    separator,
                    price_colored,
                    separator,
                    tags.dimmed()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str, score_str, separator, location, separator, price_str, separator, tags
                )
                .trim_end()
                .to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single listing with its score breakdown (for verbose mode)
pub fn format_listing_detail(scored: &ScoredListing, use_colors: bool) -> String {
    let listing = scored.listing;
    let mut lines = Vec::new();

    let heading = format!("{} ({})", listing.location(), listing.id);
    if use_colors {
        lines.push(heading.bold().to_string());
    } else {
        lines.push(heading);
    }

    lines.push(format!(
        "  Score: {}  Price: {}{}",
        format_score(scored.score),
        format_price(listing.price),
        if scored.over_budget { " (over budget)" } else { "" }
    ));
    if !listing.style.trim().is_empty() {
        lines.push(format!("  Style: {}", listing.style));
    }
    lines.push(format!(
        "  Beds/Baths: {}/{}",
        listing
            .bedrooms
            .map(|b| b.to_string())
            .unwrap_or_else(|| "-".to_string()),
        listing
            .bathrooms
            .map(|b| b.to_string())
            .unwrap_or_else(|| "-".to_string())
    ));
    if listing.sold {
        lines.push("  Status: sold".to_string());
    }

    lines.push(format!(
        "  Breakdown (total weight {}):",
        scored.breakdown.total_weight
    ));
    for factor in &scored.breakdown.factors {
        let row = format!(
            "    {:<22}{:<16}{:>6.1} x {:<5}= {:.2}",
            factor.attribute.label(),
            factor.description,
            factor.sub_score,
            factor.weight,
            factor.contribution
        );
        if use_colors && factor.weight == 0.0 {
            lines.push(row.dimmed().to_string());
        } else {
            lines.push(row);
        }
    }

    lines.join("\n")
}

/// Format listings as tab-separated values for scripting
/// Columns: score, id, address, city, price, over_budget, sold (no headers, no colors)
pub fn format_tsv(listings: &[ScoredListing]) -> String {
    listings
        .iter()
        .map(|scored| {
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                format_score(scored.score),
                scored.listing.id,
                scored.listing.address,
                scored.listing.city,
                scored.listing.price.map(|p| p.to_string()).unwrap_or_default(),
                scored.over_budget,
                scored.listing.sold
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
struct JsonRow<'a> {
    id: &'a str,
    address: &'a str,
    city: &'a str,
    style: &'a str,
    price: Option<f64>,
    distance: Option<&'a str>,
    score: f64,
    over_budget: bool,
    sold: bool,
}

/// Format listings as a pretty-printed JSON array
pub fn format_json(listings: &[ScoredListing]) -> Result<String> {
    let rows: Vec<JsonRow> = listings
        .iter()
        .map(|scored| JsonRow {
            id: &scored.listing.id,
            address: &scored.listing.address,
            city: &scored.listing.city,
            style: &scored.listing.style,
            price: scored.listing.price,
            distance: scored.listing.distance.as_deref(),
            score: scored.score,
            over_budget: scored.over_budget,
            sold: scored.listing.sold,
        })
        .collect();

    serde_json::to_string_pretty(&rows).context("Failed to serialize listings as JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::Listing;
    use crate::ranking::{evaluate, EvaluateOptions};
    use crate::scoring::WeightConfig;

    fn sample_listings() -> Vec<Listing> {
        vec![
            Listing {
                id: "a1".to_string(),
                address: "1 Oak St".to_string(),
                city: "Maplewood".to_string(),
                style: "Craftsman".to_string(),
                price: Some(450_000.0),
                garage_spaces: Some(2.0),
                distance: Some("15 min".to_string()),
                ..Default::default()
            },
            Listing {
                id: "b2".to_string(),
                address: "9 Far Rd".to_string(),
                city: "Outskirts".to_string(),
                price: Some(750_000.0),
                sold: true,
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(89.787), "89.8");
        assert_eq!(format_score(0.0), "0.0");
        assert_eq!(format_score(100.0), "100.0");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some(450_000.0)), "$450,000");
        assert_eq!(format_price(Some(1_250_000.0)), "$1,250,000");
        assert_eq!(format_price(Some(999.0)), "$999");
        assert_eq!(format_price(Some(1000.0)), "$1,000");
        assert_eq!(format_price(None), "-");
        assert_eq!(format_price(Some(0.0)), "-");
    }

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate("Short", 20), "Short");
    }

    #[test]
    fn test_truncate_long() {
        assert_eq!(truncate("1234 Very Long Street Name", 15), "1234 Very Lo...");
    }

    #[test]
    fn test_truncate_very_narrow() {
        assert_eq!(truncate("Hello world", 3), "Hel");
    }

    #[test]
    fn test_format_scored_table_empty() {
        assert_eq!(format_scored_table(&[], false), "No listings found.");
    }

    #[test]
    fn test_format_scored_table_rows() {
        let listings = sample_listings();
        let scored = evaluate(&listings, &WeightConfig::default(), &EvaluateOptions::default());
        let result = format_scored_table(&scored, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" 1."));
        assert!(lines[0].contains("1 Oak St"));
        assert!(lines[0].contains("$450,000"));
        assert!(lines[1].starts_with(" 2."));
        assert!(lines[1].contains("over budget, sold"));
    }

    #[test]
    fn test_format_listing_detail_has_breakdown() {
        let listings = sample_listings();
        let scored = evaluate(&listings, &WeightConfig::default(), &EvaluateOptions::default());
        let result = format_listing_detail(&scored[0], false);
        assert!(result.contains("1 Oak St, Maplewood (a1)"));
        assert!(result.contains("Style: Craftsman"));
        assert!(result.contains("total weight 56"));
        assert!(result.contains("Distance"));
        assert!(result.contains("'15 min'"));
    }

    #[test]
    fn test_format_tsv() {
        let listings = sample_listings();
        let scored = evaluate(&listings, &WeightConfig::default(), &EvaluateOptions::default());
        let result = format_tsv(&scored);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].split('\t').count(), 7);
        assert!(lines[0].contains("\ta1\t1 Oak St\tMaplewood\t450000\tfalse\tfalse"));
        assert!(lines[1].ends_with("\ttrue\ttrue"));
    }

    #[test]
    fn test_format_tsv_empty() {
        assert_eq!(format_tsv(&[]), "");
    }

    #[test]
    fn test_format_json() {
        let listings = sample_listings();
        let scored = evaluate(&listings, &WeightConfig::default(), &EvaluateOptions::default());
        let json = format_json(&scored).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["id"], "a1");
        assert_eq!(rows[1]["over_budget"], true);
        assert!(rows[0]["score"].as_f64().unwrap() > rows[1]["score"].as_f64().unwrap());
    }
}

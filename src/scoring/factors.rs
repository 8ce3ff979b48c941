use crate::listing::types::{known, Listing};

/// Minutes assumed when the distance text carries no number (scoring)
pub const SCORE_DISTANCE_DEFAULT: f64 = 50.0;
/// Minutes assumed when the distance text carries no number (ordering)
pub const SORT_DISTANCE_DEFAULT: f64 = 99.0;

const DEFAULT_SIZE: f64 = 1500.0;
const DEFAULT_YEAR_BUILT: f64 = 1950.0;
const DEFAULT_PRICE: f64 = 600_000.0;

/// One scored attribute of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    GarageSpaces,
    WalkInCloset,
    KitchenIsland,
    Distance,
    YardMaintenance,
    HoaFees,
    Size,
    YearBuilt,
    Price,
}

impl Attribute {
    /// Every attribute, in the order contributions are summed
    pub const ALL: [Attribute; 9] = [
        Attribute::GarageSpaces,
        Attribute::WalkInCloset,
        Attribute::KitchenIsland,
        Attribute::Distance,
        Attribute::YardMaintenance,
        Attribute::HoaFees,
        Attribute::Size,
        Attribute::YearBuilt,
        Attribute::Price,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Attribute::GarageSpaces => "Garage",
            Attribute::WalkInCloset => "Walk-in closet",
            Attribute::KitchenIsland => "Kitchen island",
            Attribute::Distance => "Distance",
            Attribute::YardMaintenance => "Low-maintenance yard",
            Attribute::HoaFees => "HOA fees",
            Attribute::Size => "Size",
            Attribute::YearBuilt => "Year built",
            Attribute::Price => "Price",
        }
    }

    /// Normalized 0-100 value of this attribute for a listing.
    /// Never fails: missing or malformed data falls back to the rule's default.
    pub fn sub_score(&self, listing: &Listing) -> f64 {
        match self {
            Attribute::GarageSpaces => garage_score(known(listing.garage_spaces).unwrap_or(0.0)),
            Attribute::WalkInCloset => flag_score(listing.walk_in_closet),
            Attribute::KitchenIsland => flag_score(listing.kitchen_island),
            Attribute::Distance => distance_score(parse_minutes(
                listing.distance_text(),
                SCORE_DISTANCE_DEFAULT,
            )),
            Attribute::YardMaintenance => flag_score(!listing.yard_maintenance),
            Attribute::HoaFees => hoa_score(known(listing.hoa_fee).unwrap_or(0.0)),
            Attribute::Size => size_score(known(listing.size).unwrap_or(DEFAULT_SIZE)),
            Attribute::YearBuilt => {
                year_score(known(listing.year_built).unwrap_or(DEFAULT_YEAR_BUILT))
            }
            Attribute::Price => price_score(known(listing.price).unwrap_or(DEFAULT_PRICE)),
        }
    }

    /// Human-readable raw value, for score breakdowns
    pub fn describe(&self, listing: &Listing) -> String {
        fn yes_no(flag: bool) -> String {
            let text = if flag { "yes" } else { "no" };
            text.to_string()
        }

        match self {
            Attribute::GarageSpaces => {
                format!("{} spaces", known(listing.garage_spaces).unwrap_or(0.0))
            }
            Attribute::WalkInCloset => yes_no(listing.walk_in_closet),
            Attribute::KitchenIsland => yes_no(listing.kitchen_island),
            Attribute::Distance => match listing.distance.as_deref() {
                Some(text) if !text.trim().is_empty() => format!("'{}'", text),
                _ => "unknown".to_string(),
            },
            Attribute::YardMaintenance => yes_no(!listing.yard_maintenance),
            Attribute::HoaFees => format!("${:.0}/mo", known(listing.hoa_fee).unwrap_or(0.0)),
            Attribute::Size => match known(listing.size) {
                Some(size) => format!("{:.0} sqft", size),
                None => "unknown".to_string(),
            },
            Attribute::YearBuilt => match known(listing.year_built) {
                Some(year) => format!("{:.0}", year),
                None => "unknown".to_string(),
            },
            Attribute::Price => match known(listing.price) {
                Some(price) => format!("${:.0}", price),
                None => "unknown".to_string(),
            },
        }
    }
}

/// Extract the first run of ASCII digits anywhere in `text` as minutes.
///
/// "15 min" -> 15, "about 20-25 minutes" -> 20, "walkable" -> `default`.
/// Scoring and ordering call this with different defaults; keep both.
pub fn parse_minutes(text: &str, default: f64) -> f64 {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        return default;
    }
    digits.parse().unwrap_or(default)
}

pub fn garage_score(spaces: f64) -> f64 {
    if spaces >= 2.0 {
        100.0
    } else if spaces >= 1.0 {
        50.0
    } else {
        0.0
    }
}

pub fn flag_score(flag: bool) -> f64 {
    if flag {
        100.0
    } else {
        0.0
    }
}

pub fn distance_score(minutes: f64) -> f64 {
    (100.0 - 2.0 * minutes).clamp(0.0, 100.0)
}

pub fn hoa_score(fee: f64) -> f64 {
    if fee == 0.0 {
        100.0
    } else {
        (100.0 - fee / 5.0).clamp(0.0, 100.0)
    }
}

pub fn size_score(size: f64) -> f64 {
    ((size - 1000.0) / 2500.0 * 100.0).clamp(0.0, 100.0)
}

pub fn year_score(year: f64) -> f64 {
    ((year - 1920.0) / 105.0 * 100.0).clamp(0.0, 100.0)
}

pub fn price_score(price: f64) -> f64 {
    (100.0 - (price - 400_000.0) / 300_000.0 * 100.0).clamp(0.0, 100.0)
}

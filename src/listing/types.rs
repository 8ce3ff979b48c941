use serde::{Deserialize, Serialize};

/// A candidate property as handed over by the listing source.
///
/// Numeric fields are optional `f64`s so a store that writes `2.0` or `-1`
/// still loads: absent, null, zero or non-finite values all count as missing
/// and the scoring rules substitute their own defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Listing {
    pub id: String,
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub bedrooms: Option<f64>,
    #[serde(default)]
    pub bathrooms: Option<f64>, // Half baths allowed, e.g. 2.5
    #[serde(default)]
    pub size: Option<f64>, // Living area in square feet
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub year_built: Option<f64>,
    #[serde(default)]
    pub garage_spaces: Option<f64>,
    #[serde(default)]
    pub walk_in_closet: bool,
    #[serde(default)]
    pub kitchen_island: bool,
    #[serde(default)]
    pub yard_maintenance: bool, // true = yard needs a lot of upkeep
    #[serde(default)]
    pub hoa_fee: Option<f64>, // Monthly
    #[serde(default)]
    pub distance: Option<String>, // Free text, e.g. "15 min"
    #[serde(default)]
    pub sold: bool,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl Listing {
    /// Return "address, city", or just the address when the city is blank
    pub fn location(&self) -> String {
        if self.city.trim().is_empty() {
            self.address.clone()
        } else {
            format!("{}, {}", self.address, self.city)
        }
    }

    /// Distance text, empty when missing
    pub fn distance_text(&self) -> &str {
        self.distance.as_deref().unwrap_or("")
    }
}

/// Treat zero and non-finite numbers the same as an absent field.
pub fn known(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}

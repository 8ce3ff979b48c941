use crate::ranking::SortKey;
use crate::scoring::WeightConfig;
use serde::{Deserialize, Serialize};

/// Contents of the YAML config file. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the listings JSON file; `~/` is expanded
    #[serde(default)]
    pub listings: Option<String>,

    /// Listings priced above this are flagged (default: 500000)
    #[serde(default)]
    pub budget_limit: Option<f64>,

    /// Default ordering: score, price, distance or sold
    #[serde(default)]
    pub sort_by: Option<SortKey>,

    /// Default search term
    #[serde(default)]
    pub search: Option<String>,

    #[serde(default)]
    pub weights: Option<WeightConfig>,
}

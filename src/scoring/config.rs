use super::factors::Attribute;
use serde::{Deserialize, Serialize};

/// Preference weights, one per scored attribute.
///
/// The UI keeps each weight in 0..=10, but the engine applies the same linear
/// formula to any value. Keys left out of the config fall back to the defaults.
///
/// Example YAML:
/// ```yaml
/// weights:
///   garage_spaces: 9
///   distance: 9
///   price: 5
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WeightConfig {
    pub garage_spaces: f64,
    pub walk_in_closet: f64,
    pub kitchen_island: f64,
    pub distance: f64,
    pub yard_maintenance: f64,
    pub hoa_fees: f64,
    pub size: f64,
    pub year_built: f64,
    pub price: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            garage_spaces: 9.0,
            walk_in_closet: 8.0,
            kitchen_island: 8.0,
            distance: 9.0,
            yard_maintenance: 8.0,
            hoa_fees: 6.0,
            size: 4.0,
            year_built: 2.0,
            price: 2.0,
        }
    }
}

impl WeightConfig {
    /// All weights set to zero
    pub fn zero() -> Self {
        Self {
            garage_spaces: 0.0,
            walk_in_closet: 0.0,
            kitchen_island: 0.0,
            distance: 0.0,
            yard_maintenance: 0.0,
            hoa_fees: 0.0,
            size: 0.0,
            year_built: 0.0,
            price: 0.0,
        }
    }

    pub fn weight(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::GarageSpaces => self.garage_spaces,
            Attribute::WalkInCloset => self.walk_in_closet,
            Attribute::KitchenIsland => self.kitchen_island,
            Attribute::Distance => self.distance,
            Attribute::YardMaintenance => self.yard_maintenance,
            Attribute::HoaFees => self.hoa_fees,
            Attribute::Size => self.size,
            Attribute::YearBuilt => self.year_built,
            Attribute::Price => self.price,
        }
    }

    /// Sum of all nine weights, in attribute order
    pub fn total(&self) -> f64 {
        Attribute::ALL.iter().map(|a| self.weight(*a)).sum()
    }
}

use super::config::WeightConfig;
use super::factors::Attribute;

/// Largest weight the configuration accepts.
pub const MAX_WEIGHT: f64 = 10.0;

/// Validate weight configuration at startup.
/// Returns all validation errors at once (not just the first).
///
/// The scoring engine handles any value; this only enforces the 0-10 range
/// users are allowed to configure.
pub fn validate_weights(weights: &WeightConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for attribute in Attribute::ALL {
        let value = weights.weight(attribute);
        let key = config_key(attribute);
        if !value.is_finite() {
            errors.push(format!("weights.{}: must be a finite number", key));
        } else if !(0.0..=MAX_WEIGHT).contains(&value) {
            errors.push(format!(
                "weights.{}: must be between 0 and {} (got {})",
                key, MAX_WEIGHT, value
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate the budget threshold.
pub fn validate_budget(limit: f64) -> Result<(), String> {
    if !limit.is_finite() || limit < 0.0 {
        Err(format!("budget_limit: must be a non-negative number (got {})", limit))
    } else {
        Ok(())
    }
}

/// YAML key of an attribute's weight
fn config_key(attribute: Attribute) -> &'static str {
    match attribute {
        Attribute::GarageSpaces => "garage_spaces",
        Attribute::WalkInCloset => "walk_in_closet",
        Attribute::KitchenIsland => "kitchen_island",
        Attribute::Distance => "distance",
        Attribute::YardMaintenance => "yard_maintenance",
        Attribute::HoaFees => "hoa_fees",
        Attribute::Size => "size",
        Attribute::YearBuilt => "year_built",
        Attribute::Price => "price",
    }
}

use super::config::WeightConfig;
use super::factors::Attribute;
use crate::listing::types::Listing;

#[derive(Debug, Clone, PartialEq)]
pub struct FactorContribution {
    pub attribute: Attribute,
    pub description: String, // e.g. "'15 min'", "2 spaces"
    pub sub_score: f64,      // 0-100, independent of weight
    pub weight: f64,
    pub contribution: f64, // sub_score / 100 * weight
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub total_weight: f64,
    pub factors: Vec<FactorContribution>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Score a listing as a percentage of the best possible weighted outcome.
///
/// `score = sum(sub_score / 100 * weight) / sum(weight) * 100`. A zero total
/// weight yields 0 rather than NaN.
pub fn calculate_score(listing: &Listing, weights: &WeightConfig) -> ScoreResult {
    let mut earned = 0.0;
    let mut total_weight = 0.0;
    let mut factors = Vec::with_capacity(Attribute::ALL.len());

    for attribute in Attribute::ALL {
        let weight = weights.weight(attribute);
        let sub_score = attribute.sub_score(listing);
        let contribution = sub_score / 100.0 * weight;

        earned += contribution;
        total_weight += weight;

        factors.push(FactorContribution {
            attribute,
            description: attribute.describe(listing),
            sub_score,
            weight,
            contribution,
        });
    }

    let score = if total_weight == 0.0 {
        0.0
    } else {
        earned / total_weight * 100.0
    };

    ScoreResult {
        score: if score.is_finite() { score } else { 0.0 },
        breakdown: ScoreBreakdown {
            total_weight,
            factors,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ideal_listing() -> Listing {
        Listing {
            id: "1".to_string(),
            address: "1 Main St".to_string(),
            garage_spaces: Some(2.0),
            walk_in_closet: true,
            kitchen_island: true,
            distance: Some("15 min".to_string()),
            yard_maintenance: false,
            hoa_fee: Some(0.0),
            size: Some(2000.0),
            year_built: Some(2010.0),
            price: Some(450_000.0),
            ..Default::default()
        }
    }

    fn poor_listing() -> Listing {
        Listing {
            id: "2".to_string(),
            address: "2 Far Rd".to_string(),
            garage_spaces: Some(0.0),
            walk_in_closet: false,
            kitchen_island: false,
            distance: Some("60 min".to_string()),
            yard_maintenance: true,
            hoa_fee: Some(300.0),
            size: Some(800.0),
            year_built: Some(1900.0),
            price: Some(750_000.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_well_matched_listing() {
        let result = calculate_score(&ideal_listing(), &WeightConfig::default());
        // (9 + 8 + 8 + 6.3 + 8 + 6 + 1.6 + 1.714 + 1.667) / 56 * 100
        assert!((result.score - 89.8).abs() < 0.05, "score was {}", result.score);
        assert_eq!(result.breakdown.total_weight, 56.0);
    }

    #[test]
    fn test_poor_listing_scores_low() {
        let result = calculate_score(&poor_listing(), &WeightConfig::default());
        // Only the HOA fee earns anything: 40% of 6
        assert!(result.score < 20.0);
        assert!((result.score - 2.4 / 56.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_total_weight_scores_zero() {
        let result = calculate_score(&ideal_listing(), &WeightConfig::zero());
        assert_eq!(result.score, 0.0);
        assert!(!result.score.is_nan());
    }

    #[test]
    fn test_cancelling_weights_score_zero() {
        let weights = WeightConfig {
            garage_spaces: 5.0,
            price: -5.0,
            ..WeightConfig::zero()
        };
        let result = calculate_score(&ideal_listing(), &weights);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_single_weight_equals_sub_score() {
        let weights = WeightConfig {
            distance: 3.0,
            ..WeightConfig::zero()
        };
        let result = calculate_score(&ideal_listing(), &weights);
        assert!((result.score - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_weights_above_ten_use_same_formula() {
        let small = WeightConfig {
            garage_spaces: 1.0,
            distance: 1.0,
            ..WeightConfig::zero()
        };
        let large = WeightConfig {
            garage_spaces: 100.0,
            distance: 100.0,
            ..WeightConfig::zero()
        };
        let a = calculate_score(&ideal_listing(), &small).score;
        let b = calculate_score(&ideal_listing(), &large).score;
        // Only the ratio between weights matters: (100 + 70) / 2
        assert!((a - 85.0).abs() < 1e-9);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_binary_features_contribute_full_weight_or_none() {
        let weights = WeightConfig {
            walk_in_closet: 8.0,
            ..WeightConfig::zero()
        };
        let with = calculate_score(&ideal_listing(), &weights);
        let without = calculate_score(&poor_listing(), &weights);
        assert_eq!(with.score, 100.0);
        assert_eq!(without.score, 0.0);
        assert_eq!(with.breakdown.factors[1].contribution, 8.0);
    }

    #[test]
    fn test_breakdown_lists_every_attribute_in_order() {
        let result = calculate_score(&ideal_listing(), &WeightConfig::default());
        let attributes: Vec<Attribute> = result
            .breakdown
            .factors
            .iter()
            .map(|f| f.attribute)
            .collect();
        assert_eq!(attributes, Attribute::ALL.to_vec());

        let distance = &result.breakdown.factors[3];
        assert_eq!(distance.sub_score, 70.0);
        assert!((distance.contribution - 6.3).abs() < 1e-9);
        assert_eq!(distance.description, "'15 min'");
    }

    #[test]
    fn test_empty_listing_uses_defaults() {
        let weights = WeightConfig {
            distance: 1.0,
            ..WeightConfig::zero()
        };
        // Missing distance scores as 50 minutes -> 0
        let result = calculate_score(&Listing::default(), &weights);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_score_in_range_for_non_negative_weights() {
        let weight_sets = [
            WeightConfig::default(),
            WeightConfig {
                price: 10.0,
                size: 0.0,
                ..WeightConfig::default()
            },
            WeightConfig {
                hoa_fees: 0.5,
                ..WeightConfig::zero()
            },
        ];
        for weights in &weight_sets {
            for listing in [ideal_listing(), poor_listing(), Listing::default()] {
                let score = calculate_score(&listing, weights).score;
                assert!((0.0..=100.0).contains(&score), "score was {}", score);
            }
        }
    }

    #[test]
    fn test_calculate_is_deterministic() {
        let weights = WeightConfig::default();
        let a = calculate_score(&ideal_listing(), &weights);
        let b = calculate_score(&ideal_listing(), &weights);
        assert_eq!(a, b);
    }
}

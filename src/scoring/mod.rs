pub mod config;
pub mod engine;
pub mod factors;
pub mod validation;

pub use config::WeightConfig;
pub use engine::{calculate_score, FactorContribution, ScoreBreakdown, ScoreResult};
pub use factors::{parse_minutes, Attribute, SCORE_DISTANCE_DEFAULT, SORT_DISTANCE_DEFAULT};
pub use validation::{validate_budget, validate_weights};

//! Keyword and pattern based email classification.
//!
//! Every email flows through:
//! 1. `extract_features()` — keyword hit counts and pattern flags
//! 2. `score()` — per-category raw scores
//! 3. `select_category()` — fixed cascade: spam, important, social, promotional, general
//! 4. `calculate_priority()` — category base plus clamped adjustments

pub mod clock;
pub mod engine;
pub mod features;
pub mod keywords;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::{Classifier, calculate_priority};
pub use features::extract_features;
pub use types::{
    BatchEntry, BatchOutcome, Category, CategorySummary, ClassificationResult, EmailInput,
    FeatureFlags, FeatureSet, Scores,
};

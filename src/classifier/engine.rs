//! Scoring, category cascade and priority rules.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use super::clock::{Clock, SystemClock, derive_email_id};
use super::features::extract_features;
use super::types::{
    BatchEntry, BatchOutcome, Category, ClassificationResult, EmailInput, FeatureFlags,
    FeatureSet, Scores,
};
use crate::error::ClassifyError;

/// Bonus added to the spam score when the body is link-heavy.
const LINK_SPAM_BONUS: u32 = 3;

const MIN_PRIORITY: u8 = 1;
const MAX_PRIORITY: u8 = 10;

/// Keyword-based email classifier.
///
/// Stateless apart from its clock; safe to share across requests.
#[derive(Clone)]
pub struct Classifier {
    clock: Arc<dyn Clock>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    /// Classifier stamping results with wall-clock time.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Classify a raw JSON payload.
    ///
    /// Fails with `MissingSubject` unless the payload is an object with a
    /// `subject` key.
    pub fn classify(&self, payload: &Value) -> Result<ClassificationResult, ClassifyError> {
        let input = EmailInput::from_json(payload)?;
        Ok(self.classify_email(&input))
    }

    /// Classify an already validated email.
    pub fn classify_email(&self, input: &EmailInput) -> ClassificationResult {
        let features = extract_features(input);
        let scores = score(&features);
        let (category, confidence) = select_category(&scores);
        let priority = calculate_priority(category, &features);
        let recommendation = recommendation(category, priority);

        let now = self.clock.now();
        let email_id = derive_email_id(&input.sender, &input.subject, now);

        debug!(
            email_id = %email_id,
            sender = %features.sender,
            category = %category,
            confidence,
            priority,
            "Email classified"
        );

        ClassificationResult {
            email_id,
            category,
            confidence,
            priority,
            scores,
            features: FeatureFlags::from(&features),
            recommendation: recommendation.to_string(),
            timestamp: now,
        }
    }

    /// Classify each payload independently, preserving order.
    ///
    /// A payload that fails validation becomes an error entry; the rest of
    /// the batch is unaffected.
    pub fn classify_batch(&self, payloads: &[Value]) -> BatchOutcome {
        let results: Vec<BatchEntry> = payloads
            .iter()
            .map(|payload| BatchEntry::from(self.classify(payload)))
            .collect();
        BatchOutcome::new(results)
    }
}

/// Raw per-category scores for a feature set.
pub fn score(features: &FeatureSet) -> Scores {
    let link_bonus = if features.has_multiple_links {
        LINK_SPAM_BONUS
    } else {
        0
    };
    Scores {
        spam: features.spam_hits * 2 + link_bonus,
        promotional: features.promo_hits,
        important: features.important_hits,
        social: features.social_hits,
    }
}

/// Pick the category and confidence. First matching rule wins.
pub fn select_category(scores: &Scores) -> (Category, u32) {
    if scores.spam > 3 {
        (Category::Spam, (scores.spam * 10).min(95))
    } else if scores.important > 1 {
        (Category::Important, (scores.important * 15).min(90))
    } else if scores.social > 1 {
        (Category::Social, (scores.social * 12).min(85))
    } else if scores.promotional > 1 {
        (Category::Promotional, (scores.promotional * 10).min(80))
    } else {
        (Category::General, 60)
    }
}

/// Priority in `1..=10` for a category and its features.
///
/// The important-keyword boost and the shouting penalty are clamped one
/// after the other, so a base of 9 with both ends at 9, not 10.
pub fn calculate_priority(category: Category, features: &FeatureSet) -> u8 {
    let mut priority = category.base_priority();

    if features.important_hits > 2 {
        priority = (priority + 2).min(MAX_PRIORITY);
    }
    if features.has_all_caps || features.has_excessive_punctuation {
        priority = priority.saturating_sub(1).max(MIN_PRIORITY);
    }

    priority
}

/// Suggested mailbox action.
pub fn recommendation(category: Category, priority: u8) -> &'static str {
    match category {
        Category::Spam => "Move to spam folder",
        Category::Important if priority >= 8 => "Flag for immediate attention",
        Category::Promotional => "Move to promotions folder",
        Category::Social => "Move to social folder",
        _ => "Keep in inbox",
    }
}

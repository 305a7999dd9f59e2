//! Shared types for email classification.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ClassifyError;

// ── Email input ─────────────────────────────────────────────────────

/// Email fields supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailInput {
    pub subject: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub sender: String,
}

impl EmailInput {
    pub fn new(subject: &str, body: &str, sender: &str) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
            sender: sender.into(),
        }
    }

    /// Build an input from an arbitrary JSON payload.
    ///
    /// Anything that is not an object carrying a `subject` key is a
    /// `MissingSubject` validation failure. Present fields must be strings.
    pub fn from_json(value: &Value) -> Result<Self, ClassifyError> {
        let Some(obj) = value.as_object() else {
            return Err(ClassifyError::MissingSubject);
        };
        if !obj.contains_key("subject") {
            return Err(ClassifyError::MissingSubject);
        }

        let field = |name: &str| -> Result<String, ClassifyError> {
            match obj.get(name) {
                None => Ok(String::new()),
                Some(Value::String(s)) => Ok(s.clone()),
                Some(_) => Err(ClassifyError::InvalidField { field: name.into() }),
            }
        };

        Ok(Self {
            subject: field("subject")?,
            body: field("body")?,
            sender: field("sender")?,
        })
    }
}

// ── Category ────────────────────────────────────────────────────────

/// Classification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Spam,
    Important,
    Social,
    Promotional,
    General,
}

/// Base priority for a category label that isn't recognized.
pub const DEFAULT_BASE_PRIORITY: u8 = 5;

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Spam,
        Self::Important,
        Self::Promotional,
        Self::Social,
        Self::General,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Spam => "spam",
            Self::Important => "important",
            Self::Social => "social",
            Self::Promotional => "promotional",
            Self::General => "general",
        }
    }

    /// Starting priority before feature adjustments.
    pub fn base_priority(&self) -> u8 {
        match self {
            Self::Important => 9,
            Self::Spam => 1,
            Self::Promotional => 3,
            Self::Social => 5,
            Self::General => 6,
        }
    }

    /// Base priority for a free-form label, `DEFAULT_BASE_PRIORITY` if unknown.
    pub fn base_priority_for_label(label: &str) -> u8 {
        label
            .parse::<Category>()
            .map_or(DEFAULT_BASE_PRIORITY, |c| c.base_priority())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

// ── Features ────────────────────────────────────────────────────────

/// Signals extracted from an email before scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSet {
    /// Distinct spam keywords found.
    pub spam_hits: u32,
    pub promo_hits: u32,
    pub important_hits: u32,
    pub social_hits: u32,
    /// More than three URL schemes in the body.
    pub has_multiple_links: bool,
    /// Subject contains a 4+ letter all-caps token.
    pub has_all_caps: bool,
    /// Subject contains a run of `!`/`?`.
    pub has_excessive_punctuation: bool,
    /// Lowercased sender address.
    pub sender: String,
}

/// Per-category raw scores. Always carries all four keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub spam: u32,
    pub promotional: u32,
    pub important: u32,
    pub social: u32,
}

/// Pattern flags exposed in the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    pub has_multiple_links: bool,
    pub has_all_caps: bool,
    /// Excessive punctuation in the subject.
    pub suspicious_patterns: bool,
}

impl From<&FeatureSet> for FeatureFlags {
    fn from(features: &FeatureSet) -> Self {
        Self {
            has_multiple_links: features.has_multiple_links,
            has_all_caps: features.has_all_caps,
            suspicious_patterns: features.has_excessive_punctuation,
        }
    }
}

// ── Result ──────────────────────────────────────────────────────────

/// Classification of a single email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub email_id: String,
    pub category: Category,
    pub confidence: u32,
    pub priority: u8,
    pub scores: Scores,
    pub features: FeatureFlags,
    pub recommendation: String,
    pub timestamp: DateTime<Utc>,
}

/// One entry of a batch: a classification or the error that replaced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BatchEntry {
    Classified(ClassificationResult),
    Failed { error: String },
}

impl BatchEntry {
    pub fn category(&self) -> Option<Category> {
        match self {
            Self::Classified(result) => Some(result.category),
            Self::Failed { .. } => None,
        }
    }
}

impl From<Result<ClassificationResult, ClassifyError>> for BatchEntry {
    fn from(result: Result<ClassificationResult, ClassifyError>) -> Self {
        match result {
            Ok(r) => Self::Classified(r),
            Err(e) => Self::Failed {
                error: e.to_string(),
            },
        }
    }
}

/// Per-category counts over the classified entries of a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub spam: usize,
    pub important: usize,
    pub promotional: usize,
    pub social: usize,
    pub general: usize,
}

impl CategorySummary {
    pub fn from_entries(entries: &[BatchEntry]) -> Self {
        let mut summary = Self::default();
        for category in entries.iter().filter_map(BatchEntry::category) {
            *summary.slot(category) += 1;
        }
        summary
    }

    /// Entries that received a category.
    pub fn classified(&self) -> usize {
        self.spam + self.important + self.promotional + self.social + self.general
    }

    fn slot(&mut self, category: Category) -> &mut usize {
        match category {
            Category::Spam => &mut self.spam,
            Category::Important => &mut self.important,
            Category::Promotional => &mut self.promotional,
            Category::Social => &mut self.social,
            Category::General => &mut self.general,
        }
    }
}

/// Output of a batch classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchOutcome {
    pub total: usize,
    pub results: Vec<BatchEntry>,
    pub summary: CategorySummary,
}

impl BatchOutcome {
    pub fn new(results: Vec<BatchEntry>) -> Self {
        Self {
            total: results.len(),
            summary: CategorySummary::from_entries(&results),
            results,
        }
    }
}

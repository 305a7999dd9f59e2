//! Feature extraction: keyword hit counts and suspicious-pattern flags.

use std::sync::LazyLock;

use regex::Regex;

use super::keywords::{
    IMPORTANT_KEYWORDS, PROMOTIONAL_KEYWORDS, SOCIAL_KEYWORDS, SPAM_KEYWORDS, count_hits,
};
use super::types::{EmailInput, FeatureSet};

/// Links beyond this count set `has_multiple_links`.
const MAX_LINKS: usize = 3;

static URL_SCHEME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://").unwrap());

static ALL_CAPS_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[A-Z]{4,}\b").unwrap());

static PUNCTUATION_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[!?]{2,}").unwrap());

/// Extract the feature set for an email.
///
/// Keywords are matched against the lowercased `subject + " " + body`.
/// The caps check runs on the subject as written; the link and punctuation
/// checks run on lowercased text.
pub fn extract_features(input: &EmailInput) -> FeatureSet {
    let subject = input.subject.to_lowercase();
    let body = input.body.to_lowercase();
    let sender = input.sender.to_lowercase();

    let combined = format!("{subject} {body}");

    FeatureSet {
        spam_hits: count_hits(&SPAM_KEYWORDS, &combined),
        promo_hits: count_hits(&PROMOTIONAL_KEYWORDS, &combined),
        important_hits: count_hits(&IMPORTANT_KEYWORDS, &combined),
        social_hits: count_hits(&SOCIAL_KEYWORDS, &combined),
        has_multiple_links: URL_SCHEME.find_iter(&body).count() > MAX_LINKS,
        has_all_caps: ALL_CAPS_TOKEN.is_match(&input.subject),
        has_excessive_punctuation: PUNCTUATION_RUN.is_match(&subject),
        sender,
    }
}

//! Fixed keyword sets, one per scored category.
//!
//! All entries are lowercase and match as substrings of the lowercased
//! subject + body, so "urgent" also hits "urgently".

use std::collections::HashSet;
use std::sync::LazyLock;

/// Phishing, scam and prize-bait phrases.
pub static SPAM_KEYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "winner",
        "congratulations",
        "claim",
        "prize",
        "free",
        "urgent",
        "act now",
        "limited time",
        "click here",
        "verify account",
        "suspended",
        "confirm identity",
        "nigerian prince",
        "inheritance",
        "lottery",
    ])
});

/// Marketing and commerce vocabulary.
pub static PROMOTIONAL_KEYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "sale",
        "discount",
        "offer",
        "deal",
        "coupon",
        "save",
        "shop",
        "buy",
        "order",
        "purchase",
        "unsubscribe",
        "newsletter",
        "promotion",
    ])
});

/// Business, legal and financial terms.
pub static IMPORTANT_KEYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "invoice",
        "payment",
        "urgent",
        "deadline",
        "meeting",
        "interview",
        "contract",
        "agreement",
        "legal",
        "tax",
        "bank",
        "security alert",
    ])
});

/// Social network notification phrases.
pub static SOCIAL_KEYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "liked",
        "commented",
        "shared",
        "followed",
        "tagged",
        "mentioned",
        "friend request",
        "connection",
        "notification",
        "activity",
    ])
});

/// Number of distinct keywords from `set` contained in `text`.
///
/// `text` must already be lowercased.
pub fn count_hits(set: &HashSet<&'static str>, text: &str) -> u32 {
    set.iter().filter(|kw| text.contains(**kw)).count() as u32
}

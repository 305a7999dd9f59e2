//! Time source and identifier derivation.

use chrono::{DateTime, SecondsFormat, Utc};
use sha2::{Digest, Sha256};

/// Length of a derived email id in hex characters.
pub const EMAIL_ID_LEN: usize = 12;

/// Source of the current time for ids and timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Derive an email id from sender, subject and the classification instant.
///
/// First `EMAIL_ID_LEN` hex chars of SHA-256 over `sender + subject + at`.
pub fn derive_email_id(sender: &str, subject: &str, at: DateTime<Utc>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(sender.as_bytes());
    hasher.update(subject.as_bytes());
    hasher.update(at.to_rfc3339_opts(SecondsFormat::Micros, true).as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest[..EMAIL_ID_LEN].to_string()
}

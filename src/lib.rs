//! Email Classifier — keyword and pattern based triage service.

pub mod api;
pub mod classifier;
pub mod config;
pub mod error;

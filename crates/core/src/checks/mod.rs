//! Page checks behind the measured report categories.
//!
//! Each check yields its category (metrics in report order) together with the
//! recommendations it raised. Missing DOM elements lower scores; they never
//! cause an error.

pub mod content;
pub mod seo;
pub mod social;
pub mod visual;

use crate::report::{Category, Metric, Recommendation};

/// A scored category and the issues found while scoring it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub category: Category,
    pub issues: Vec<Recommendation>,
}

impl CheckResult {
    pub fn new(metrics: Vec<Metric>, issues: Vec<Recommendation>) -> Self {
        Self { category: Category::from_metrics(metrics), issues }
    }

    /// Value of the named metric, 0 when absent.
    pub fn metric(&self, name: &str) -> u32 {
        self.category.metric(name).unwrap_or(0)
    }
}

/// Leading `max` characters of `text`.
pub(crate) fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

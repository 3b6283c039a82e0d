//! Check statuses and run summaries for the setup scripts.
//!
//! The setup and maintenance scripts report their results through a small
//! set of tags. This module gives those tags real types:
//!
//! - [`CheckStatus`]: the result of one check (PASS/FAIL/WARN/INFO)
//! - [`StatusTier`]: the overall classification of a run
//! - [`RunSummary`]: aggregate counts with derived success rate and tier

use serde::{Deserialize, Serialize};

/// Result status of a single setup check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    /// Check passed
    Pass,
    /// Check failed
    Fail,
    /// Check passed with warnings
    Warn,
    /// Informational result
    Info,
}

impl CheckStatus {
    /// Parse a status tag as the scripts emit it.
    ///
    /// Matching is exact; anything other than `PASS`, `FAIL`, `WARN` or
    /// `INFO` is `None` and renders with the fallback icon and color.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "PASS" => Some(CheckStatus::Pass),
            "FAIL" => Some(CheckStatus::Fail),
            "WARN" => Some(CheckStatus::Warn),
            "INFO" => Some(CheckStatus::Info),
            _ => None,
        }
    }
}

/// Three-level classification of an overall run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusTier {
    /// No failures, no warnings
    Excellent,
    /// Minor issues
    Good,
    /// Multiple failures
    NeedsAttention,
}

impl StatusTier {
    /// Parse an overall-status tag.
    ///
    /// Total over its input: any tag that is not `EXCELLENT` or `GOOD`
    /// classifies as [`StatusTier::NeedsAttention`], so a caller-supplied
    /// tier never errors.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "EXCELLENT" => StatusTier::Excellent,
            "GOOD" => StatusTier::Good,
            _ => StatusTier::NeedsAttention,
        }
    }
}

/// Aggregate statistics for a run of checks.
///
/// `rate` and `overall` are optional caller overrides; when absent the
/// success rate and tier are derived from the counts by
/// [`RunSummary::success_rate`] and [`RunSummary::tier`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Total number of check categories
    pub total: u32,
    /// Checks that passed
    pub passed: u32,
    /// Checks that produced warnings
    pub warnings: u32,
    /// Checks that failed
    pub failed: u32,
    /// Externally supplied success-rate percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<u32>,
    /// Externally supplied overall tier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<StatusTier>,
}

impl RunSummary {
    /// Create a summary from raw counts.
    #[must_use]
    pub fn new(total: u32, passed: u32, warnings: u32, failed: u32) -> Self {
        Self {
            total,
            passed,
            warnings,
            failed,
            rate: None,
            overall: None,
        }
    }

    /// Override the computed success rate.
    #[must_use]
    pub fn with_rate(mut self, rate: u32) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Override the derived overall tier.
    #[must_use]
    pub fn with_overall(mut self, overall: StatusTier) -> Self {
        self.overall = Some(overall);
        self
    }

    /// Success rate as a percentage.
    ///
    /// The supplied `rate` wins when present; otherwise
    /// `passed / total * 100` rounded half-to-even, or `0` when `total`
    /// is zero.
    #[must_use]
    pub fn success_rate(&self) -> u32 {
        if let Some(rate) = self.rate {
            return rate;
        }
        if self.total == 0 {
            return 0;
        }
        (f64::from(self.passed) / f64::from(self.total) * 100.0).round_ties_even() as u32
    }

    /// Overall tier for the run.
    ///
    /// The supplied `overall` wins when present; otherwise derived from the
    /// counts: no failures and no warnings is excellent, up to three
    /// failures is good, more needs attention.
    #[must_use]
    pub fn tier(&self) -> StatusTier {
        if let Some(overall) = self.overall {
            return overall;
        }
        if self.failed == 0 && self.warnings == 0 {
            StatusTier::Excellent
        } else if self.failed <= 3 {
            StatusTier::Good
        } else {
            StatusTier::NeedsAttention
        }
    }
}

//! Core types for Death Star Pi terminal tools
//!
//! This crate provides the shared vocabulary of the setup and maintenance
//! scripts:
//!
//! - **Check statuses**: the PASS/FAIL/WARN/INFO tags the scripts emit
//! - **Run summaries**: aggregate counts with derived success rate and
//!   overall tier
//! - **Error handling**: error type, `Result` alias, and CLI exit codes
//!
//! # Example
//!
//! ```rust
//! use deathstar_core::report::{RunSummary, StatusTier};
//!
//! let summary = RunSummary::new(10, 7, 0, 3);
//! assert_eq!(summary.success_rate(), 70);
//! assert_eq!(summary.tier(), StatusTier::Good);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod report;

pub use error::{Error, Result};
pub use report::{CheckStatus, RunSummary, StatusTier};

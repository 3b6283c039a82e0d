//! Terminal output utilities for Death Star Pi scripts
//!
//! Provides the rendering facade the setup and maintenance scripts call
//! through `ds-rich`:
//! - Headers, section banners, status and check lines
//! - Bordered panels and tables
//! - Cosmetic progress bars
//! - Disclaimer panels
//!
//! All output goes through a [`Renderer`] over an injected sink, so the
//! same code path serves the terminal and captured test buffers.

#![warn(missing_docs)]

pub mod disclaimer;
pub mod output;
pub mod panel;
pub mod progress;
pub mod table;
pub mod theme;

pub use output::{RenderOptions, Renderer};

//! Public API for the color-histogram crate.
//!
//! This module provides [`AnalysisConfig`] and the [`ColorAnalyzer`] builder.

mod builder;
mod config;

pub use builder::ColorAnalyzer;
pub use config::AnalysisConfig;

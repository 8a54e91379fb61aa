//! huecount - dominant color report for images
//!
//! Decodes image files or pasted data URLs, runs them through the
//! `color-histogram` engine and renders or exports the result.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod export;
pub mod models;
pub mod rendering;
pub mod services;

//! Shared utilities, configuration, and error handling for Chatline
//!
//! This crate provides common functionality used across the Chatline application:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Request extractors
//! - Markdown rendering

pub mod config;
pub mod error;
pub mod extractors;
pub mod markdown;

pub use config::Config;
pub use error::{Error, Result};
pub use extractors::ValidatedJson;
pub use markdown::render_markdown;

//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules of the bridge.
//!
//! # Utilities
//!
//! - Logging setup
//! - Log level parsing
//! - Form body parsing
//!
//! # Data Structures
//!
//! - `CustomError` - Custom error type used during startup
//!
//! # Example
//!
//! ```rust,ignore
//! use qbtagarr::common::common::{parse_form_body, setup_logging};
//!
//! // Parse a form encoded webhook body
//! let fields = parse_form_body(b"infoHash=abc123");
//! ```

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

/// Unit tests for the common helpers.
pub mod tests;

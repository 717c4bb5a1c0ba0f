//! Common error handling utilities for GameForge Engine
//!
//! This module provides the standardized error types and utilities used
//! across all GameForge Engine crates. It ensures consistent error handling
//! and a single taxonomy that caller layers (HTTP, CLI, tooling) can map to
//! their own responses.
//!
//! # Error Categories
//!
//! - **NotFound**: referenced entity does not exist or is owned by another user
//! - **IoFailure**: filesystem write/remove failures surfaced with the underlying message
//! - **DatabaseError**: connection pool and query errors
//! - **TemplateError**: template processing errors
//! - **ConfigError**: engine configuration errors
//!
//! # Example
//!
//! ```rust
//! use error_common::{GameForgeError, Result};
//!
//! fn find_widget(id: i64) -> Result<String> {
//!     if id == 0 {
//!         return Err(GameForgeError::NotFound(format!("widget {}", id)));
//!     }
//!     Ok("widget".to_string())
//! }
//!
//! assert!(find_widget(0).is_err());
//! ```

pub mod types;

pub use types::*;

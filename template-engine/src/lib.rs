//! Template placeholder extraction and rendering for GameForge Engine
//!
//! This crate implements the two-part core of the configuration generator:
//!
//! - **Placeholder Extractor**: scans template text for `{{ name }}` tokens,
//!   deduplicates them in first-seen order, and synthesizes a descriptive
//!   schema entry ([`ConfigItem`]) per unique name from a curated vocabulary
//!   of game server settings.
//! - **Renderer / Path Materializer**: substitutes caller-supplied values
//!   into template text and computes deterministic on-disk locations from
//!   the project/game/server hierarchy and a template's declared relative
//!   path.
//!
//! Extraction and rendering are pure functions of their inputs; only the
//! materialization helpers in [`paths`] touch the filesystem.
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use template_engine::{extract_config_items, render_template};
//!
//! let content = "host={{ db_host }}\nport={{ db_port }}\n";
//!
//! let items = extract_config_items(content);
//! assert_eq!(items.len(), 2);
//! assert_eq!(items[0].key, "db_host");
//! assert_eq!(items[0].label, "Database Host");
//!
//! let mut values = BTreeMap::new();
//! values.insert("db_host".to_string(), "10.0.0.5".to_string());
//! values.insert("db_port".to_string(), "3306".to_string());
//! assert_eq!(render_template(content, &values), "host=10.0.0.5\nport=3306\n");
//! ```

pub mod error;
pub mod extract;
pub mod paths;
pub mod render;
pub mod vocabulary;

pub use error::*;
pub use extract::*;
pub use paths::*;
pub use render::*;

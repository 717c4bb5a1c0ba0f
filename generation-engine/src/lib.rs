//! Configuration generation services for GameForge Engine
//!
//! This crate wires the template core to the storage layer:
//!
//! - [`TemplateService`] owns the template lifecycle: on every create or
//!   update it extracts the placeholder schema, materializes the template's
//!   source file under the template root, and persists the row; on a
//!   declared-path change the previously materialized file is removed.
//! - [`GenerationService`] serves generation requests: it resolves the
//!   template and the server's deploy target, renders the content with the
//!   caller's values, writes the result beneath the generated root, and
//!   records a history row.
//!
//! Each call is self-contained: failures surface immediately as
//! [`error_common::GameForgeError`] values, nothing is retried, and partial
//! effects (a created directory before a failed write) are left in place.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::collections::BTreeMap;
//! use database_layer::{
//!     DatabasePool, GeneratedFileRepository, ServerRepository, TemplateRepository,
//! };
//! use generation_engine::{EngineSettings, GenerationRequest, GenerationService};
//!
//! # async fn demo() -> error_common::Result<()> {
//! let settings = EngineSettings::from_env();
//! let pool = DatabasePool::new(&settings.database_url).await?;
//!
//! let service = GenerationService::new(
//!     TemplateRepository::new(pool.clone()),
//!     ServerRepository::new(pool.clone()),
//!     GeneratedFileRepository::new(pool),
//!     settings.generated_root,
//! );
//!
//! let mut values = BTreeMap::new();
//! values.insert("server_port".to_string(), "9001".to_string());
//! let artifact = service
//!     .generate(1, GenerationRequest { server_id: 3, template_id: 7, values })
//!     .await?;
//! println!("wrote {}", artifact.output_path.display());
//! # Ok(())
//! # }
//! ```

pub mod generation_service;
pub mod settings;
pub mod telemetry;
pub mod template_service;

pub use generation_service::*;
pub use settings::*;
pub use telemetry::*;
pub use template_service::*;

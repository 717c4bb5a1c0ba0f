//! Storage layer for GameForge Engine
//!
//! Pooled SQLite access plus one repository per entity in the deployment
//! hierarchy (projects, games, servers, config templates, generated-file
//! history). Every read and write is scoped by the owning `user_id`: an
//! entity that belongs to another user is indistinguishable from one that
//! does not exist.
//!
//! Schema management is owned by the deployment layer; this crate assumes
//! its tables exist. Test suites create their own schema fixtures.
//!
//! # Example
//!
//! ```rust,no_run
//! use database_layer::{CreateProject, DatabasePool, ProjectRepository};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DatabasePool::new("sqlite://gameforge.db").await?;
//! let projects = ProjectRepository::new(pool.clone());
//!
//! let project = projects
//!     .create(1, CreateProject {
//!         name: "Space MMO".to_string(),
//!         description: "Launch environments".to_string(),
//!     })
//!     .await?;
//! println!("created project {}", project.id);
//! # Ok(())
//! # }
//! ```

pub mod connection;
pub mod error;
pub mod game_repository;
pub mod generated_repository;
pub mod models;
pub mod project_repository;
pub mod server_repository;
pub mod template_repository;

pub use connection::*;
pub use error::*;
pub use game_repository::*;
pub use generated_repository::*;
pub use models::*;
pub use project_repository::*;
pub use server_repository::*;
pub use template_repository::*;

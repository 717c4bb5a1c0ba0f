use std::env;
use std::path::PathBuf;

/// Engine configuration, read from `GAMEFORGE_*` environment variables
/// with `.env` file support.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// SQLite connection string
    pub database_url: String,
    /// Root directory for materialized template source files
    pub template_root: PathBuf,
    /// Root directory for generated configuration files
    pub generated_root: PathBuf,
}

impl EngineSettings {
    /// Load settings from the environment, falling back to local defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let database_url = env::var("GAMEFORGE_DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://gameforge.db".to_string());
        let template_root =
            env::var("GAMEFORGE_TEMPLATE_ROOT").unwrap_or_else(|_| "templates".to_string());
        let generated_root =
            env::var("GAMEFORGE_GENERATED_ROOT").unwrap_or_else(|_| "generated".to_string());

        Self {
            database_url,
            template_root: PathBuf::from(template_root),
            generated_root: PathBuf::from(generated_root),
        }
    }
}

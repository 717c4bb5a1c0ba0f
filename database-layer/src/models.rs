// Database models
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ============================================================================
// ROW MODELS
// ============================================================================

/// Top of the deployment hierarchy; owns games.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A game within a project; owns servers and templates.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Game {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub description: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A deployable server (realm/shard) within a game.
///
/// `server_code` is the operator-assigned identifier (e.g. `server_001`),
/// distinct from the row id; it doubles as the output directory name when
/// the display name is empty.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GameServer {
    pub id: i64,
    pub game_id: i64,
    pub name: String,
    pub server_code: String,
    pub description: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A configuration template owned by a project+game pair.
///
/// `file_path` is the declared relative path (e.g. `conf/server.yaml`);
/// `config_items` is the extracted placeholder schema as a JSON string.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ConfigTemplate {
    pub id: i64,
    pub project_id: i64,
    pub game_id: i64,
    pub name: String,
    pub file_path: String,
    pub template_content: String,
    pub config_items: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Historical record of one generated configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GeneratedFile {
    pub id: i64,
    pub server_id: i64,
    pub file_name: String,
    pub file_path: String,
    pub template_content: String,
    pub generated_content: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// JOINED VIEWS
// ============================================================================

/// Game row with its owning project name, for flat listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GameOverview {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub project_name: Option<String>,
}

/// Server row with its owning game and project names, for flat listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ServerOverview {
    pub id: i64,
    pub game_id: i64,
    pub name: String,
    pub server_code: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub game_name: Option<String>,
    pub project_name: Option<String>,
}

/// Template row with its owning game and project names, for flat listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TemplateOverview {
    pub id: i64,
    pub project_id: i64,
    pub game_id: i64,
    pub name: String,
    pub file_path: String,
    pub config_items: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub game_name: Option<String>,
    pub project_name: Option<String>,
}

/// The name tuple resolved for path composition at generation time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DeployTarget {
    pub server_name: String,
    pub server_code: String,
    pub game_name: String,
    pub project_name: String,
}

// ============================================================================
// REQUEST MODELS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub description: String,
}

/// Partial update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGame {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateGame {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateServer {
    pub name: String,
    pub server_code: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateServer {
    pub name: String,
    pub server_code: String,
    pub description: String,
}

/// Shared fixtures for service tests: a temporary SQLite database with the
/// schema the engine expects (owned by the deployment layer in production)
/// and a seeded project/game/server hierarchy.
use database_layer::{
    CreateGame, CreateProject, CreateServer, DatabasePool, Game, GameRepository, GameServer,
    Project, ProjectRepository, ServerRepository,
};
use tempfile::TempDir;

pub const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE projects (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        user_id INTEGER NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE games (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        project_id INTEGER NOT NULL,
        name TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        user_id INTEGER NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE servers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        game_id INTEGER NOT NULL,
        name TEXT NOT NULL,
        server_code TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        user_id INTEGER NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE config_templates (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        project_id INTEGER NOT NULL,
        game_id INTEGER NOT NULL,
        name TEXT NOT NULL,
        file_path TEXT NOT NULL,
        template_content TEXT NOT NULL DEFAULT '',
        config_items TEXT NOT NULL DEFAULT '[]',
        user_id INTEGER NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE config_files (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        server_id INTEGER NOT NULL,
        file_name TEXT NOT NULL,
        file_path TEXT NOT NULL,
        template_content TEXT NOT NULL DEFAULT '',
        generated_content TEXT NOT NULL DEFAULT '',
        created_at TEXT NOT NULL
    )
    "#,
];

pub async fn test_pool(dir: &TempDir) -> DatabasePool {
    let url = format!("sqlite://{}", dir.path().join("test.db").display());
    let pool = DatabasePool::new(&url).await.unwrap();
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool.pool()).await.unwrap();
    }
    pool
}

pub struct Fixture {
    pub pool: DatabasePool,
    pub project: Project,
    pub game: Game,
    pub server: GameServer,
}

/// Seed one project ("My Game"), one game ("Core/X"), and one server
/// ("S1" / server_001) owned by `user_id`.
pub async fn seeded(dir: &TempDir, user_id: i64) -> Fixture {
    let pool = test_pool(dir).await;

    let project = ProjectRepository::new(pool.clone())
        .create(
            user_id,
            CreateProject {
                name: "My Game".to_string(),
                description: String::new(),
            },
        )
        .await
        .unwrap();

    let game = GameRepository::new(pool.clone())
        .create(
            user_id,
            project.id,
            CreateGame {
                name: "Core/X".to_string(),
                description: String::new(),
            },
        )
        .await
        .unwrap();

    let server = ServerRepository::new(pool.clone())
        .create(
            user_id,
            game.id,
            CreateServer {
                name: "S1".to_string(),
                server_code: "server_001".to_string(),
                description: String::new(),
            },
        )
        .await
        .unwrap();

    Fixture {
        pool,
        project,
        game,
        server,
    }
}

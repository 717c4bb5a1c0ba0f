/// Repository tests over a temporary SQLite database
///
/// Tests cover:
/// - CRUD per repository
/// - Tenant isolation (user-scoped reads, updates, and deletes)
/// - The generation-time deploy target join
/// - Generated-file history records
///
/// Schema management is owned by the deployment layer, so these tests
/// create their own schema fixture.
use database_layer::{
    CreateGame, CreateProject, CreateServer, DatabasePool, GameRepository,
    GeneratedFileRepository, ProjectRepository, ServerRepository, TemplateRepository,
    UpdateGame, UpdateProject, UpdateServer,
};
use tempfile::TempDir;

const SCHEMA: &[&str] = &[
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

async fn test_pool(dir: &TempDir) -> DatabasePool {
    let url = format!("sqlite://{}", dir.path().join("test.db").display());
    let pool = DatabasePool::new(&url).await.unwrap();
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool.pool()).await.unwrap();
    }
    pool
}

// ============================================================================
// PROJECTS
// ============================================================================

#[tokio::test]
async fn test_project_crud() {
    let dir = TempDir::new().unwrap();
    let repo = ProjectRepository::new(test_pool(&dir).await);

    let created = repo
        .create(
            1,
            CreateProject {
                name: "Space MMO".to_string(),
                description: "launch envs".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(created.user_id, 1);

    let found = repo.find_by_id(created.id, 1).await.unwrap().unwrap();
    assert_eq!(found.name, "Space MMO");

    let updated = repo
        .update(
            created.id,
            1,
            UpdateProject {
                name: Some("Space MMO 2".to_string()),
                description: None,
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Space MMO 2");
    // Absent fields are left unchanged.
    assert_eq!(updated.description, "launch envs");

    assert!(repo.delete(created.id, 1).await.unwrap());
    assert!(repo.find_by_id(created.id, 1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_project_tenant_isolation() {
    let dir = TempDir::new().unwrap();
    let repo = ProjectRepository::new(test_pool(&dir).await);

    let mine = repo
        .create(
            1,
            CreateProject {
                name: "Private".to_string(),
                description: String::new(),
            },
        )
        .await
        .unwrap();

    // Another user cannot see, change, or remove it.
    assert!(repo.find_by_id(mine.id, 2).await.unwrap().is_none());
    assert!(repo.list(2).await.unwrap().is_empty());
    assert!(repo
        .update(mine.id, 2, UpdateProject::default())
        .await
        .unwrap()
        .is_none());
    assert!(!repo.delete(mine.id, 2).await.unwrap());
    assert!(repo.find_by_id(mine.id, 1).await.unwrap().is_some());
}

// ============================================================================
// GAMES
// ============================================================================

#[tokio::test]
async fn test_game_crud_and_overview() {
    let dir = TempDir::new().unwrap();
    let pool = test_pool(&dir).await;
    let projects = ProjectRepository::new(pool.clone());
    let games = GameRepository::new(pool);

    let project = projects
        .create(
            1,
            CreateProject {
                name: "Proj".to_string(),
                description: String::new(),
            },
        )
        .await
        .unwrap();

    let game = games
        .create(
            1,
            project.id,
            CreateGame {
                name: "Core".to_string(),
                description: "main game".to_string(),
            },
        )
        .await
        .unwrap();

    let listed = games.list_for_project(project.id, 1).await.unwrap();
    assert_eq!(listed.len(), 1);

    let overview = games.list_all(1).await.unwrap();
    assert_eq!(overview[0].project_name.as_deref(), Some("Proj"));

    let updated = games
        .update(
            game.id,
            1,
            UpdateGame {
                name: "Core X".to_string(),
                description: "renamed".to_string(),
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Core X");

    assert!(games.delete(game.id, 1).await.unwrap());
    assert!(games.list_for_project(project.id, 1).await.unwrap().is_empty());
}

// ============================================================================
// SERVERS
// ============================================================================

#[tokio::test]
async fn test_server_crud_and_deploy_target() {
    let dir = TempDir::new().unwrap();
    let pool = test_pool(&dir).await;
    let projects = ProjectRepository::new(pool.clone());
    let games = GameRepository::new(pool.clone());
    let servers = ServerRepository::new(pool);

    let project = projects
        .create(
            1,
            CreateProject {
                name: "My Game".to_string(),
                description: String::new(),
            },
        )
        .await
        .unwrap();
    let game = games
        .create(
            1,
            project.id,
            CreateGame {
                name: "Core/X".to_string(),
                description: String::new(),
            },
        )
        .await
        .unwrap();

    let server = servers
        .create(
            1,
            game.id,
            CreateServer {
                name: "S1".to_string(),
                server_code: "server_001".to_string(),
                description: String::new(),
            },
        )
        .await
        .unwrap();

    let target = servers
        .find_deploy_target(server.id, 1)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(target.server_name, "S1");
    assert_eq!(target.server_code, "server_001");
    assert_eq!(target.game_name, "Core/X");
    assert_eq!(target.project_name, "My Game");

    // Invisible to another user.
    assert!(servers.find_deploy_target(server.id, 2).await.unwrap().is_none());

    let updated = servers
        .update(
            server.id,
            1,
            UpdateServer {
                name: "S1 East".to_string(),
                server_code: "server_001".to_string(),
                description: String::new(),
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "S1 East");

    let overview = servers.list_all(1).await.unwrap();
    assert_eq!(overview[0].game_name.as_deref(), Some("Core/X"));
    assert_eq!(overview[0].project_name.as_deref(), Some("My Game"));

    assert!(servers.delete(server.id, 1).await.unwrap());
}

// ============================================================================
// TEMPLATES
// ============================================================================

#[tokio::test]
async fn test_template_crud() {
    let dir = TempDir::new().unwrap();
    let pool = test_pool(&dir).await;
    let templates = TemplateRepository::new(pool);

    let items = r#"[{"key":"server_port","label":"Game Port","type":"text","default_value":"8080"}]"#;
    let created = templates
        .create(1, 10, 20, "Server config", "conf/server.yaml", "port={{ server_port }}", items)
        .await
        .unwrap();
    assert_eq!(created.file_path, "conf/server.yaml");
    assert_eq!(created.config_items, items);

    let listed = templates.list_for_game(10, 20, 1).await.unwrap();
    assert_eq!(listed.len(), 1);

    // Wrong owner: reads and writes miss.
    assert!(templates.find_by_id(created.id, 2).await.unwrap().is_none());
    assert!(templates
        .update(created.id, 2, "x", "y", "z", "[]")
        .await
        .unwrap()
        .is_none());

    let updated = templates
        .update(created.id, 1, "Server config", "conf/app.yaml", "a={{ b }}", "[]")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.file_path, "conf/app.yaml");
    assert_eq!(updated.template_content, "a={{ b }}");

    assert!(templates.delete(created.id, 1).await.unwrap());
    assert!(!templates.delete(created.id, 1).await.unwrap());
}

// ============================================================================
// GENERATED FILE HISTORY
// ============================================================================

#[tokio::test]
async fn test_generated_file_history() {
    let dir = TempDir::new().unwrap();
    let pool = test_pool(&dir).await;
    let generated = GeneratedFileRepository::new(pool);

    let record = generated
        .record(7, "server.yaml", "conf/server.yaml", "port={{ p }}", "port=1")
        .await
        .unwrap();
    assert_eq!(record.server_id, 7);
    assert_eq!(record.file_name, "server.yaml");

    generated
        .record(7, "app.yaml", "conf/app.yaml", "a={{ b }}", "a=2")
        .await
        .unwrap();

    let history = generated.list_for_server(7).await.unwrap();
    assert_eq!(history.len(), 2);
    assert!(generated.list_for_server(8).await.unwrap().is_empty());
}

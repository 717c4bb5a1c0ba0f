use chrono::Utc;

use crate::connection::DatabasePool;
use crate::error::DbResult;
use crate::models::{CreateGame, Game, GameOverview, UpdateGame};

/// Repository for games within a project.
#[derive(Debug, Clone)]
pub struct GameRepository {
    pool: DatabasePool,
}

impl GameRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Create a game under `project_id`, owned by `user_id`.
    pub async fn create(&self, user_id: i64, project_id: i64, game: CreateGame) -> DbResult<Game> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, Game>(
            r#"
            INSERT INTO games (project_id, name, description, user_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, project_id, name, description, user_id, created_at, updated_at
            "#,
        )
        .bind(project_id)
        .bind(&game.name)
        .bind(&game.description)
        .bind(user_id)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool.pool())
        .await?;

        Ok(row)
    }

    /// Find a game by id, scoped to its owner.
    pub async fn find_by_id(&self, id: i64, user_id: i64) -> DbResult<Option<Game>> {
        let row = sqlx::query_as::<_, Game>(
            r#"
            SELECT id, project_id, name, description, user_id, created_at, updated_at
            FROM games
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool.pool())
        .await?;

        Ok(row)
    }

    /// List the games of one project, newest first.
    pub async fn list_for_project(&self, project_id: i64, user_id: i64) -> DbResult<Vec<Game>> {
        let rows = sqlx::query_as::<_, Game>(
            r#"
            SELECT id, project_id, name, description, user_id, created_at, updated_at
            FROM games
            WHERE project_id = ? AND user_id = ?
            ORDER BY created_at DESC
            "#,
        )
        .bind(project_id)
        .bind(user_id)
        .fetch_all(self.pool.pool())
        .await?;

        Ok(rows)
    }

    /// List every game the user owns with its project name attached.
    pub async fn list_all(&self, user_id: i64) -> DbResult<Vec<GameOverview>> {
        let rows = sqlx::query_as::<_, GameOverview>(
            r#"
            SELECT g.id, g.project_id, g.name, g.description, g.created_at, g.updated_at,
                   p.name AS project_name
            FROM games g
            LEFT JOIN projects p ON g.project_id = p.id
            WHERE g.user_id = ?
            ORDER BY g.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.pool())
        .await?;

        Ok(rows)
    }

    /// Full-replace update. Returns `None` when the game does not exist
    /// for this user.
    pub async fn update(&self, id: i64, user_id: i64, update: UpdateGame) -> DbResult<Option<Game>> {
        let row = sqlx::query_as::<_, Game>(
            r#"
            UPDATE games
            SET name = ?, description = ?, updated_at = ?
            WHERE id = ? AND user_id = ?
            RETURNING id, project_id, name, description, user_id, created_at, updated_at
            "#,
        )
        .bind(&update.name)
        .bind(&update.description)
        .bind(Utc::now())
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool.pool())
        .await?;

        Ok(row)
    }

    /// Delete a game; returns whether a row matched.
    pub async fn delete(&self, id: i64, user_id: i64) -> DbResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM games
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(self.pool.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

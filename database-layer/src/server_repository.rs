use chrono::Utc;

use crate::connection::DatabasePool;
use crate::error::DbResult;
use crate::models::{CreateServer, DeployTarget, GameServer, ServerOverview, UpdateServer};

/// Repository for game servers (realms/shards) within a game.
#[derive(Debug, Clone)]
pub struct ServerRepository {
    pool: DatabasePool,
}

impl ServerRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Create a server under `game_id`, owned by `user_id`.
    pub async fn create(
        &self,
        user_id: i64,
        game_id: i64,
        server: CreateServer,
    ) -> DbResult<GameServer> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, GameServer>(
            r#"
            INSERT INTO servers (game_id, name, server_code, description, user_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id, game_id, name, server_code, description, user_id, created_at, updated_at
            "#,
        )
        .bind(game_id)
        .bind(&server.name)
        .bind(&server.server_code)
        .bind(&server.description)
        .bind(user_id)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool.pool())
        .await?;

        Ok(row)
    }

    /// Find a server by id, scoped to its owner.
    pub async fn find_by_id(&self, id: i64, user_id: i64) -> DbResult<Option<GameServer>> {
        let row = sqlx::query_as::<_, GameServer>(
            r#"
            SELECT id, game_id, name, server_code, description, user_id, created_at, updated_at
            FROM servers
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool.pool())
        .await?;

        Ok(row)
    }

    /// List the servers of one game, newest first.
    pub async fn list_for_game(&self, game_id: i64, user_id: i64) -> DbResult<Vec<GameServer>> {
        let rows = sqlx::query_as::<_, GameServer>(
            r#"
            SELECT id, game_id, name, server_code, description, user_id, created_at, updated_at
            FROM servers
            WHERE game_id = ? AND user_id = ?
            ORDER BY created_at DESC
            "#,
        )
        .bind(game_id)
        .bind(user_id)
        .fetch_all(self.pool.pool())
        .await?;

        Ok(rows)
    }

    /// List every server the user owns with game and project names attached.
    pub async fn list_all(&self, user_id: i64) -> DbResult<Vec<ServerOverview>> {
        let rows = sqlx::query_as::<_, ServerOverview>(
            r#"
            SELECT s.id, s.game_id, s.name, s.server_code, s.description,
                   s.created_at, s.updated_at,
                   g.name AS game_name, p.name AS project_name
            FROM servers s
            LEFT JOIN games g ON s.game_id = g.id
            LEFT JOIN projects p ON g.project_id = p.id
            WHERE s.user_id = ?
            ORDER BY s.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.pool())
        .await?;

        Ok(rows)
    }

    /// Resolve the name tuple used for output path composition: server
    /// display name, server code, game name, project name. `None` when the
    /// server does not exist for this user or its hierarchy is broken.
    pub async fn find_deploy_target(&self, id: i64, user_id: i64) -> DbResult<Option<DeployTarget>> {
        let row = sqlx::query_as::<_, DeployTarget>(
            r#"
            SELECT s.name AS server_name, s.server_code,
                   g.name AS game_name, p.name AS project_name
            FROM servers s
            JOIN games g ON s.game_id = g.id
            JOIN projects p ON g.project_id = p.id
            WHERE s.id = ? AND s.user_id = ?
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool.pool())
        .await?;

        Ok(row)
    }

    /// Full-replace update. Returns `None` when the server does not exist
    /// for this user.
    pub async fn update(
        &self,
        id: i64,
        user_id: i64,
        update: UpdateServer,
    ) -> DbResult<Option<GameServer>> {
        let row = sqlx::query_as::<_, GameServer>(
            r#"
            UPDATE servers
            SET name = ?, server_code = ?, description = ?, updated_at = ?
            WHERE id = ? AND user_id = ?
            RETURNING id, game_id, name, server_code, description, user_id, created_at, updated_at
            "#,
        )
        .bind(&update.name)
        .bind(&update.server_code)
        .bind(&update.description)
        .bind(Utc::now())
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool.pool())
        .await?;

        Ok(row)
    }

    /// Delete a server; returns whether a row matched.
    pub async fn delete(&self, id: i64, user_id: i64) -> DbResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM servers
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

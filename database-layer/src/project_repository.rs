use chrono::Utc;

use crate::connection::DatabasePool;
use crate::error::DbResult;
use crate::models::{CreateProject, Project, UpdateProject};

/// Repository for projects, the top of the deployment hierarchy.
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: DatabasePool,
}

impl ProjectRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Create a project owned by `user_id`.
    pub async fn create(&self, user_id: i64, project: CreateProject) -> DbResult<Project> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (name, description, user_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, description, user_id, created_at, updated_at
            "#,
        )
        .bind(&project.name)
        .bind(&project.description)
        .bind(user_id)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool.pool())
        .await?;

        Ok(row)
    }

    /// Find a project by id, scoped to its owner.
    pub async fn find_by_id(&self, id: i64, user_id: i64) -> DbResult<Option<Project>> {
        let row = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, name, description, user_id, created_at, updated_at
            FROM projects
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool.pool())
        .await?;

        Ok(row)
    }

    /// List the user's projects, most recently updated first.
    pub async fn list(&self, user_id: i64) -> DbResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, name, description, user_id, created_at, updated_at
            FROM projects
            WHERE user_id = ?
            ORDER BY updated_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.pool())
        .await?;

        Ok(rows)
    }

    /// Partial update; absent fields are left unchanged. Returns `None`
    /// when the project does not exist for this user.
    pub async fn update(
        &self,
        id: i64,
        user_id: i64,
        update: UpdateProject,
    ) -> DbResult<Option<Project>> {
        let row = sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects
            SET name = COALESCE(?, name),
                description = COALESCE(?, description),
                updated_at = ?
            WHERE id = ? AND user_id = ?
            RETURNING id, name, description, user_id, created_at, updated_at
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

    /// Delete a project; returns whether a row matched.
    pub async fn delete(&self, id: i64, user_id: i64) -> DbResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM projects
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

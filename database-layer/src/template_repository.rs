use chrono::Utc;

use crate::connection::DatabasePool;
use crate::error::DbResult;
use crate::models::{ConfigTemplate, TemplateOverview};

/// Repository for configuration templates, owned by a project+game pair.
///
/// The extracted placeholder schema travels through this layer as an opaque
/// JSON string (`config_items`); extraction itself happens in the service
/// layer.
#[derive(Debug, Clone)]
pub struct TemplateRepository {
    pool: DatabasePool,
}

impl TemplateRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Insert a template row.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        user_id: i64,
        project_id: i64,
        game_id: i64,
        name: &str,
        file_path: &str,
        template_content: &str,
        config_items: &str,
    ) -> DbResult<ConfigTemplate> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, ConfigTemplate>(
            r#"
            INSERT INTO config_templates
                (project_id, game_id, name, file_path, template_content, config_items,
                 user_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, project_id, game_id, name, file_path, template_content,
                      config_items, user_id, created_at, updated_at
            "#,
        )
        .bind(project_id)
        .bind(game_id)
        .bind(name)
        .bind(file_path)
        .bind(template_content)
        .bind(config_items)
        .bind(user_id)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool.pool())
        .await?;

        Ok(row)
    }

    /// Find a template by id, scoped to its owner.
    pub async fn find_by_id(&self, id: i64, user_id: i64) -> DbResult<Option<ConfigTemplate>> {
        let row = sqlx::query_as::<_, ConfigTemplate>(
            r#"
            SELECT id, project_id, game_id, name, file_path, template_content,
                   config_items, user_id, created_at, updated_at
            FROM config_templates
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool.pool())
        .await?;

        Ok(row)
    }

    /// List the templates of one project+game pair, newest first.
    pub async fn list_for_game(
        &self,
        project_id: i64,
        game_id: i64,
        user_id: i64,
    ) -> DbResult<Vec<ConfigTemplate>> {
        let rows = sqlx::query_as::<_, ConfigTemplate>(
            r#"
            SELECT id, project_id, game_id, name, file_path, template_content,
                   config_items, user_id, created_at, updated_at
            FROM config_templates
            WHERE project_id = ? AND game_id = ? AND user_id = ?
            ORDER BY created_at DESC
            "#,
        )
        .bind(project_id)
        .bind(game_id)
        .bind(user_id)
        .fetch_all(self.pool.pool())
        .await?;

        Ok(rows)
    }

    /// List every template the user owns with game and project names attached.
    pub async fn list_all(&self, user_id: i64) -> DbResult<Vec<TemplateOverview>> {
        let rows = sqlx::query_as::<_, TemplateOverview>(
            r#"
            SELECT t.id, t.project_id, t.game_id, t.name, t.file_path, t.config_items,
                   t.created_at, t.updated_at,
                   g.name AS game_name, p.name AS project_name
            FROM config_templates t
            LEFT JOIN games g ON t.game_id = g.id
            LEFT JOIN projects p ON t.project_id = p.id
            WHERE t.user_id = ?
            ORDER BY t.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.pool())
        .await?;

        Ok(rows)
    }

    /// Full-replace update of a template row. Returns `None` when the
    /// template does not exist for this user.
    pub async fn update(
        &self,
        id: i64,
        user_id: i64,
        name: &str,
        file_path: &str,
        template_content: &str,
        config_items: &str,
    ) -> DbResult<Option<ConfigTemplate>> {
        let row = sqlx::query_as::<_, ConfigTemplate>(
            r#"
            UPDATE config_templates
            SET name = ?, file_path = ?, template_content = ?, config_items = ?,
                updated_at = ?
            WHERE id = ? AND user_id = ?
            RETURNING id, project_id, game_id, name, file_path, template_content,
                      config_items, user_id, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(file_path)
        .bind(template_content)
        .bind(config_items)
        .bind(Utc::now())
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool.pool())
        .await?;

        Ok(row)
    }

    /// Delete a template row; returns whether a row matched.
    pub async fn delete(&self, id: i64, user_id: i64) -> DbResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM config_templates
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

use chrono::Utc;

use crate::connection::DatabasePool;
use crate::error::DbResult;
use crate::models::GeneratedFile;

/// Repository for the generated-file history.
///
/// One row per generation request: the file name, the template's relative
/// path, the source content at generation time, and the rendered output.
#[derive(Debug, Clone)]
pub struct GeneratedFileRepository {
    pool: DatabasePool,
}

impl GeneratedFileRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Record one generated file for a server.
    pub async fn record(
        &self,
        server_id: i64,
        file_name: &str,
        file_path: &str,
        template_content: &str,
        generated_content: &str,
    ) -> DbResult<GeneratedFile> {
        let row = sqlx::query_as::<_, GeneratedFile>(
            r#"
            INSERT INTO config_files
                (server_id, file_name, file_path, template_content, generated_content, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, server_id, file_name, file_path, template_content,
                      generated_content, created_at
            "#,
        )
        .bind(server_id)
        .bind(file_name)
        .bind(file_path)
        .bind(template_content)
        .bind(generated_content)
        .bind(Utc::now())
        .fetch_one(self.pool.pool())
        .await?;

        Ok(row)
    }

    /// List a server's generation history, newest first.
    pub async fn list_for_server(&self, server_id: i64) -> DbResult<Vec<GeneratedFile>> {
        let rows = sqlx::query_as::<_, GeneratedFile>(
            r#"
            SELECT id, server_id, file_name, file_path, template_content,
                   generated_content, created_at
            FROM config_files
            WHERE server_id = ?
            ORDER BY created_at DESC
            "#,
        )
        .bind(server_id)
        .fetch_all(self.pool.pool())
        .await?;

        Ok(rows)
    }
}

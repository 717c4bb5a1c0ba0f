use std::path::PathBuf;

use database_layer::{ConfigTemplate, GameRepository, ProjectRepository, TemplateRepository};
use error_common::{GameForgeError, Result};
use serde::{Deserialize, Serialize};
use template_engine::{
    extract_config_items, remove_materialized, template_storage_path, write_materialized,
};
use tracing::{info, warn};

/// Caller-supplied template fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateDraft {
    pub name: String,
    /// Declared relative path, e.g. `conf/server.yaml`
    pub file_path: String,
    pub template_content: String,
}

/// Template lifecycle orchestration.
///
/// Every create and update extracts the placeholder schema from the
/// content, materializes the template's source file beneath the template
/// root, and persists the row. Ownership checks run against the requesting
/// user; a miss anywhere is reported as NotFound.
pub struct TemplateService {
    projects: ProjectRepository,
    games: GameRepository,
    templates: TemplateRepository,
    template_root: PathBuf,
}

impl TemplateService {
    pub fn new(
        projects: ProjectRepository,
        games: GameRepository,
        templates: TemplateRepository,
        template_root: PathBuf,
    ) -> Self {
        Self {
            projects,
            games,
            templates,
            template_root,
        }
    }

    /// Create a template under a project+game pair.
    pub async fn create_template(
        &self,
        user_id: i64,
        project_id: i64,
        game_id: i64,
        draft: TemplateDraft,
    ) -> Result<ConfigTemplate> {
        let project = self
            .projects
            .find_by_id(project_id, user_id)
            .await?
            .ok_or_else(|| GameForgeError::NotFound(format!("project {}", project_id)))?;
        let game = self
            .games
            .find_by_id(game_id, user_id)
            .await?
            .ok_or_else(|| GameForgeError::NotFound(format!("game {}", game_id)))?;

        let source_path = template_storage_path(
            &self.template_root,
            &project.name,
            &game.name,
            &draft.file_path,
        );
        write_materialized(&source_path, &draft.template_content)?;

        let config_items = extracted_items_json(&draft.template_content)?;
        let template = self
            .templates
            .create(
                user_id,
                project_id,
                game_id,
                &draft.name,
                &draft.file_path,
                &draft.template_content,
                &config_items,
            )
            .await?;

        info!(
            template_id = template.id,
            path = %source_path.display(),
            "Template created"
        );

        Ok(template)
    }

    /// Update a template, re-extracting its schema and re-materializing its
    /// source file. When the declared path changes, the previously
    /// materialized file is removed (best-effort).
    pub async fn update_template(
        &self,
        user_id: i64,
        template_id: i64,
        draft: TemplateDraft,
    ) -> Result<ConfigTemplate> {
        let existing = self
            .templates
            .find_by_id(template_id, user_id)
            .await?
            .ok_or_else(|| GameForgeError::NotFound(format!("template {}", template_id)))?;

        let project = self
            .projects
            .find_by_id(existing.project_id, user_id)
            .await?
            .ok_or_else(|| GameForgeError::NotFound(format!("project {}", existing.project_id)))?;
        let game = self
            .games
            .find_by_id(existing.game_id, user_id)
            .await?
            .ok_or_else(|| GameForgeError::NotFound(format!("game {}", existing.game_id)))?;

        if existing.file_path != draft.file_path {
            let old_path = template_storage_path(
                &self.template_root,
                &project.name,
                &game.name,
                &existing.file_path,
            );
            if let Err(e) = remove_materialized(&old_path) {
                warn!(
                    path = %old_path.display(),
                    error = %e,
                    "Failed to remove previous template file"
                );
            }
        }

        let source_path = template_storage_path(
            &self.template_root,
            &project.name,
            &game.name,
            &draft.file_path,
        );
        write_materialized(&source_path, &draft.template_content)?;

        let config_items = extracted_items_json(&draft.template_content)?;
        let template = self
            .templates
            .update(
                template_id,
                user_id,
                &draft.name,
                &draft.file_path,
                &draft.template_content,
                &config_items,
            )
            .await?
            .ok_or_else(|| GameForgeError::NotFound(format!("template {}", template_id)))?;

        info!(
            template_id = template.id,
            path = %source_path.display(),
            "Template updated"
        );

        Ok(template)
    }

    /// Delete a template and its materialized source file. File removal is
    /// best-effort; the row is removed regardless.
    pub async fn delete_template(&self, user_id: i64, template_id: i64) -> Result<()> {
        let existing = self
            .templates
            .find_by_id(template_id, user_id)
            .await?
            .ok_or_else(|| GameForgeError::NotFound(format!("template {}", template_id)))?;

        let project = self.projects.find_by_id(existing.project_id, user_id).await?;
        let game = self.games.find_by_id(existing.game_id, user_id).await?;
        if let (Some(project), Some(game)) = (project, game) {
            let source_path = template_storage_path(
                &self.template_root,
                &project.name,
                &game.name,
                &existing.file_path,
            );
            if let Err(e) = remove_materialized(&source_path) {
                warn!(
                    path = %source_path.display(),
                    error = %e,
                    "Failed to remove template file"
                );
            }
        }

        self.templates.delete(template_id, user_id).await?;

        info!(template_id = template_id, "Template deleted");

        Ok(())
    }
}

fn extracted_items_json(content: &str) -> Result<String> {
    let items = extract_config_items(content);
    serde_json::to_string(&items).map_err(|e| GameForgeError::InternalError(e.to_string()))
}

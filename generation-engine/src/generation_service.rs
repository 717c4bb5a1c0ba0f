use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use database_layer::{GeneratedFileRepository, ServerRepository, TemplateRepository};
use error_common::{GameForgeError, Result};
use serde::{Deserialize, Serialize};
use template_engine::{
    generated_directory, render_template, resolve_output_path, server_directory_name,
    write_materialized,
};
use tracing::info;

/// One request to render a template for a server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub server_id: i64,
    pub template_id: i64,
    /// Placeholder values supplied by the caller. Keys without a matching
    /// placeholder are ignored; placeholders without a value stay literal.
    pub values: BTreeMap<String, String>,
}

/// The rendered result: generated text plus its resolved on-disk location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    pub content: String,
    pub output_path: PathBuf,
}

/// Generation request orchestration.
///
/// Resolves the template and the server's deploy target, renders the
/// content, writes it beneath the generated root, and records a history
/// row. Two requests for the same output path are not coordinated; the
/// last writer wins.
pub struct GenerationService {
    templates: TemplateRepository,
    servers: ServerRepository,
    generated: GeneratedFileRepository,
    generated_root: PathBuf,
}

impl GenerationService {
    pub fn new(
        templates: TemplateRepository,
        servers: ServerRepository,
        generated: GeneratedFileRepository,
        generated_root: PathBuf,
    ) -> Self {
        Self {
            templates,
            servers,
            generated,
            generated_root,
        }
    }

    /// Render a template for a server and materialize the result.
    ///
    /// The output lands at
    /// `generated_root / project / game / server / <template relative path>`,
    /// where the server segment is the display name as-is (or the server
    /// code when the name is empty).
    pub async fn generate(
        &self,
        user_id: i64,
        request: GenerationRequest,
    ) -> Result<GeneratedArtifact> {
        let template = self
            .templates
            .find_by_id(request.template_id, user_id)
            .await?
            .ok_or_else(|| GameForgeError::NotFound(format!("template {}", request.template_id)))?;

        let target = self
            .servers
            .find_deploy_target(request.server_id, user_id)
            .await?
            .ok_or_else(|| GameForgeError::NotFound(format!("server {}", request.server_id)))?;

        let content = render_template(&template.template_content, &request.values);

        let server_dir = server_directory_name(&target.server_name, &target.server_code);
        let output_path = resolve_output_path(
            &self.generated_root,
            &target.project_name,
            &target.game_name,
            &server_dir,
            &template.file_path,
        );

        write_materialized(&output_path, &content)?;

        let file_name = Path::new(&template.file_path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| template.file_path.clone());
        self.generated
            .record(
                request.server_id,
                &file_name,
                &template.file_path,
                &template.template_content,
                &content,
            )
            .await?;

        info!(
            server_id = request.server_id,
            template_id = request.template_id,
            path = %output_path.display(),
            "Configuration file generated"
        );

        Ok(GeneratedArtifact {
            content,
            output_path,
        })
    }

    /// Per-server generated directory with every segment sanitized,
    /// including the server name. This is where download tooling looks for
    /// a server's output tree.
    pub fn generated_path(
        &self,
        project_name: &str,
        game_name: &str,
        server_name: &str,
    ) -> PathBuf {
        generated_directory(&self.generated_root, project_name, game_name, server_name)
    }
}

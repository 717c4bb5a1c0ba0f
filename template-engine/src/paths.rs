//! Hierarchical path materialization for templates and generated files.
//!
//! Logical entities map onto disk as
//! `root / project / game [/ server] / <template relative path>`, with
//! project and game names sanitized into single directory segments. The
//! server segment is the display name as-is (or the server code when the
//! name is empty); only the directory-lookup helper sanitizes it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::Result;

/// Make a name safe as a single directory segment by replacing spaces and
/// path separators with underscores.
pub fn sanitize_component(name: &str) -> String {
    name.replace([' ', '/', '\\'], "_")
}

/// Directory segment for a server: the display name when non-empty,
/// otherwise the operator-assigned server code. Not sanitized.
pub fn server_directory_name(name: &str, server_code: &str) -> String {
    if name.is_empty() {
        server_code.to_string()
    } else {
        name.to_string()
    }
}

/// Absolute output path for a generated file:
/// `root / project / game / server / <relative dir> / <file name>`.
///
/// The template's own relative directory structure is preserved beneath the
/// server directory.
pub fn resolve_output_path(
    root: &Path,
    project_name: &str,
    game_name: &str,
    server_dir_name: &str,
    relative_path: &str,
) -> PathBuf {
    let rel = Path::new(relative_path);
    let mut path = root
        .join(sanitize_component(project_name))
        .join(sanitize_component(game_name))
        .join(server_dir_name);
    if let Some(parent) = rel.parent() {
        path = path.join(parent);
    }
    match rel.file_name() {
        Some(name) => path.join(name),
        None => path,
    }
}

/// Storage path for a template's source file:
/// `root / project / game / <relative path>`.
pub fn template_storage_path(
    root: &Path,
    project_name: &str,
    game_name: &str,
    relative_path: &str,
) -> PathBuf {
    root.join(sanitize_component(project_name))
        .join(sanitize_component(game_name))
        .join(relative_path)
}

/// Per-server generated directory with every segment sanitized, including
/// the server name. Used to locate a server's output tree for download
/// tooling rather than to write individual files.
pub fn generated_directory(
    root: &Path,
    project_name: &str,
    game_name: &str,
    server_name: &str,
) -> PathBuf {
    root.join(sanitize_component(project_name))
        .join(sanitize_component(game_name))
        .join(sanitize_component(server_name))
}

/// Write `contents` at `path`, creating parent directories as needed.
///
/// Directory creation is idempotent; an existing file at `path` is
/// overwritten with no backup.
pub fn write_materialized(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    debug!(path = %path.display(), bytes = contents.len(), "Materialized file written");
    Ok(())
}

/// Remove the file at `path`; a missing file is not an error.
pub fn remove_materialized(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!(path = %path.display(), "Materialized file removed");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

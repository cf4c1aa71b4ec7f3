//! Design file loading
//!
//! Resolves the paths given on the command line into [`DesignFile`]s.
//! Directories contribute their image files sorted by name.

use std::path::{Path, PathBuf};

use podpublish_domain::constants::DESIGN_EXTENSIONS;
use podpublish_domain::{DesignFile, PublishError, Result};
use tracing::{debug, info};

/// Whether `path` has an accepted image extension (case-insensitive).
pub fn is_design_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| DESIGN_EXTENSIONS.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)))
}

/// Expand directories and validate extensions, preserving argument order.
pub fn collect_design_paths(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let mut found: Vec<PathBuf> = std::fs::read_dir(input)
                .map_err(|err| io_error(input, err))?
                .filter_map(|entry| entry.ok().map(|entry| entry.path()))
                .filter(|path| path.is_file() && is_design_path(path))
                .collect();
            found.sort();
            debug!(dir = %input.display(), files = found.len(), "Expanded design directory");
            paths.extend(found);
        } else if is_design_path(input) {
            paths.push(input.clone());
        } else {
            return Err(PublishError::InvalidInput(format!(
                "{} is not a PNG or JPG design",
                input.display()
            )));
        }
    }

    if paths.is_empty() {
        return Err(PublishError::InvalidInput(
            "No design files found; pass at least one PNG/JPG".to_string(),
        ));
    }
    Ok(paths)
}

/// Read every design into memory.
pub fn load_design_files(inputs: &[PathBuf]) -> Result<Vec<DesignFile>> {
    let paths = collect_design_paths(inputs)?;
    let mut files = Vec::with_capacity(paths.len());

    for path in paths {
        let bytes = std::fs::read(&path).map_err(|err| io_error(&path, err))?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        files.push(DesignFile::new(file_name, bytes));
    }

    info!(count = files.len(), "Design files loaded");
    Ok(files)
}

fn io_error(path: &Path, err: std::io::Error) -> PublishError {
    PublishError::Io(format!("{}: {err}", path.display()))
}

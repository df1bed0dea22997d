//! Design file loading, saving, and validation.

use std::path::Path;

use sf_project::DesignFile;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

/// Load a design from a YAML or JSON file.
pub fn load_design(path: &Path) -> AppResult<DesignFile> {
    debug!(path = %path.display(), "loading design file");
    let design = sf_project::load(path).map_err(|e| AppError::DesignFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(name = %design.name, "loaded design");
    Ok(design)
}

/// Save a design; the format follows the file extension.
pub fn save_design(path: &Path, design: &DesignFile) -> AppResult<()> {
    sf_project::save(path, design).map_err(|e| AppError::DesignFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(path = %path.display(), "saved design");
    Ok(())
}

/// Check a design against the input rules.
pub fn validate_design(design: &DesignFile) -> AppResult<()> {
    sf_project::validate_design(design)?;
    Ok(())
}

/// Design a new user starts from.
pub fn starter_design() -> DesignFile {
    DesignFile::default()
}

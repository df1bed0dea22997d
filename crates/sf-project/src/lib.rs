//! sf-project: design file format and boundary validation.
//!
//! The sizing and layout engines trust their inputs. Everything read from a
//! design file passes through [`validate_design`] first.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{
    MAX_HEADS_PER_CLASS, ValidationError, validate_design, validate_head_count, validate_tank,
};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown design file extension: {0}")]
    UnknownFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<DesignFile> {
    let content = std::fs::read_to_string(path)?;
    let design: DesignFile = serde_yaml::from_str(&content)?;
    validate_design(&design)?;
    Ok(design)
}

pub fn save_yaml(path: &std::path::Path, design: &DesignFile) -> ProjectResult<()> {
    validate_design(design)?;
    let content = serde_yaml::to_string(design)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<DesignFile> {
    let content = std::fs::read_to_string(path)?;
    let design: DesignFile = serde_json::from_str(&content)?;
    validate_design(&design)?;
    Ok(design)
}

pub fn save_json(path: &std::path::Path, design: &DesignFile) -> ProjectResult<()> {
    validate_design(design)?;
    let content = serde_json::to_string_pretty(design)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` is JSON, `.yaml`/`.yml` is YAML.
pub fn load(path: &std::path::Path) -> ProjectResult<DesignFile> {
    match extension(path).as_str() {
        "json" => load_json(path),
        "yaml" | "yml" => load_yaml(path),
        other => Err(ProjectError::UnknownFormat(other.to_string())),
    }
}

pub fn save(path: &std::path::Path, design: &DesignFile) -> ProjectResult<()> {
    match extension(path).as_str() {
        "json" => save_json(path, design),
        "yaml" | "yml" => save_yaml(path, design),
        other => Err(ProjectError::UnknownFormat(other.to_string())),
    }
}

fn extension(path: &std::path::Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase()
}

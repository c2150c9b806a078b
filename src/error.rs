use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LarderError {
    #[error("Config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid config: {message}")]
    ConfigInvalid { message: String },

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Recipe error: {0}")]
    Recipe(String),

    #[error("Recipes directory not found: {path}")]
    RecipesDirNotFound { path: PathBuf },

    #[error("Index error in {path}: {message}")]
    Index { path: PathBuf, message: String },

    #[error("Server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, LarderError>;

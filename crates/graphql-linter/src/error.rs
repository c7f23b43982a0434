use thiserror::Error;

pub type Result<T> = std::result::Result<T, LintError>;

#[derive(Debug, Error)]
pub enum LintError {
    #[error("Invalid lint configuration: {0}")]
    InvalidLintConfig(String),

    #[error("Unknown lint rule '{0}'")]
    UnknownRule(String),

    #[error("Invalid options for rule '{rule}': {message}")]
    InvalidOptions { rule: &'static str, message: String },

    #[error("Document loading error: {0}")]
    DocumentLoad(String),
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// Position in a document (0-indexed)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

/// Range in a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// Empty range at the first character of a document
    #[must_use]
    pub fn document_start() -> Self {
        Self::default()
    }
}

/// A diagnostic message (error, warning)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,

    /// Range where the diagnostic applies
    pub range: Range,

    /// Rendered message
    pub message: String,

    /// Stable diagnostic code (e.g., `MATCH_STYLE`)
    pub code: Option<String>,

    /// Lint rule that produced the diagnostic
    pub rule: Option<String>,

    /// Source of the diagnostic (e.g., "graphql-linter")
    pub source: String,

    /// Named values interpolated into the message
    pub params: BTreeMap<String, String>,
}

impl Diagnostic {
    pub fn error(range: Range, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, range, message)
    }

    fn new(severity: Severity, range: Range, message: impl Into<String>) -> Self {
        Self {
            severity,
            range,
            message: message.into(),
            code: None,
            rule: None,
            source: "graphql-linter".to_string(),
            params: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    #[must_use]
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }
}

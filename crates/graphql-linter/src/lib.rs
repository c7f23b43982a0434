mod case;
mod diagnostics;
mod document;
mod error;
mod lint;
mod loader;

pub use case::{convert_case, CaseStyle};
pub use diagnostics::{Diagnostic, Position, Range, Severity};
pub use document::{Definition, Document, DocumentType, GoverningDefinition, OperationKind};
pub use error::{LintError, Result};
pub use lint::{
    rule_catalog, FileExtension, LintConfig, LintRuleConfig, LintSeverity, Linter,
    MatchDocumentFilenameOptions, PropertySchema, RuleInfo, StyleOption,
};
pub use loader::DocumentLoader;

// Re-export common types from dependencies
pub use graphql_config::{GraphQLConfig, ProjectConfig};

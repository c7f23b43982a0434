mod match_document_filename;

pub use match_document_filename::{
    FileExtension, MatchDocumentFilenameOptions, MatchDocumentFilenameRule, PropertySchema,
    StyleOption,
};

use crate::{Diagnostic, Document, LintError, Result};
use std::path::Path;

/// What a per-document rule gets to look at
pub struct DocumentContext<'a> {
    /// Path of the file holding the document
    pub file_path: &'a Path,
    /// Top-level definitions of the document
    pub document: &'a Document,
}

/// Trait for implementing per-document lint rules
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule (e.g., `"match_document_filename"`)
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Run the lint check on a document
    fn check(&self, ctx: &DocumentContext<'_>) -> Vec<Diagnostic>;
}

/// Name and description of an available rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Every available rule in its unconfigured form
fn all_rules() -> Vec<Box<dyn LintRule>> {
    vec![Box::new(MatchDocumentFilenameRule::default())]
}

/// All rules that can be enabled
#[must_use]
pub fn rule_catalog() -> Vec<RuleInfo> {
    all_rules()
        .iter()
        .map(|rule| RuleInfo {
            name: rule.name(),
            description: rule.description(),
        })
        .collect()
}

/// Construct a rule by name from its configured options
pub fn build_rule(name: &str, options: Option<&serde_json::Value>) -> Result<Box<dyn LintRule>> {
    match name {
        MatchDocumentFilenameRule::NAME => {
            Ok(Box::new(MatchDocumentFilenameRule::from_options(options)?))
        }
        _ => Err(LintError::UnknownRule(name.to_string())),
    }
}

use crate::{Diagnostic, Document, Result, Severity};
use apollo_parser::Parser;
use std::path::Path;

use super::config::{LintConfig, LintSeverity};
use super::rules::{self, DocumentContext, LintRule};

struct EnabledRule {
    rule: Box<dyn LintRule>,
    severity: Severity,
}

/// Linter that runs configured lint rules
pub struct Linter {
    rules: Vec<EnabledRule>,
}

impl Linter {
    /// Build every enabled rule from its configured options.
    /// Unknown rule names and invalid options are rejected even for rules turned off.
    pub fn new(config: &LintConfig) -> Result<Self> {
        let mut rules = Vec::new();

        for (name, rule_config) in &config.rules {
            let rule = rules::build_rule(name, rule_config.options())?;

            let severity = match rule_config.severity() {
                LintSeverity::Off => continue,
                LintSeverity::Warn => Severity::Warning,
                LintSeverity::Error => Severity::Error,
            };

            tracing::debug!(rule = name.as_str(), ?severity, "Enabled lint rule");
            rules.push(EnabledRule { rule, severity });
        }

        Ok(Self { rules })
    }

    /// Names of the rules that will run
    #[must_use]
    pub fn enabled_rules(&self) -> Vec<&'static str> {
        self.rules.iter().map(|enabled| enabled.rule.name()).collect()
    }

    /// Run all enabled lints on a document
    #[must_use]
    pub fn lint_document(&self, source: &str, file_path: &Path) -> Vec<Diagnostic> {
        if self.rules.is_empty() {
            return Vec::new();
        }

        let tree = Parser::new(source).parse();

        // Rules can't reason about a document that didn't parse
        if tree.errors().len() > 0 {
            tracing::debug!(
                file = %file_path.display(),
                errors = tree.errors().len(),
                "Skipping document with syntax errors"
            );
            return Vec::new();
        }

        let document = Document::from_cst(&tree.document());
        let ctx = DocumentContext {
            file_path,
            document: &document,
        };

        let mut diagnostics = Vec::new();
        for enabled in &self.rules {
            let mut rule_diagnostics = enabled.rule.check(&ctx);

            for diag in &mut rule_diagnostics {
                diag.severity = enabled.severity;
            }

            diagnostics.extend(rule_diagnostics);
        }

        diagnostics
    }
}

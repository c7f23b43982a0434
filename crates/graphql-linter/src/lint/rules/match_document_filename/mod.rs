mod filename;
mod options;

pub use options::{FileExtension, MatchDocumentFilenameOptions, PropertySchema, StyleOption};

use crate::{Diagnostic, Range, Result};
use filename::{expected_filename, FileName};
use options::ResolvedOptions;

use super::{DocumentContext, LintRule};

const MATCH_EXTENSION: &str = "MATCH_EXTENSION";
const MATCH_STYLE: &str = "MATCH_STYLE";

/// Lint rule that checks a document's filename against a naming convention
/// derived from the document's own operation or fragment name.
///
/// ```yaml
/// match_document_filename:
///   severity: error
///   options:
///     fileExtension: .graphql
///     query: snake_case
///     fragment: { style: kebab-case, suffix: .fragment }
/// ```
///
/// With this configuration `query UserById` belongs in `user_by_id.graphql`
/// and `fragment UserFields` in `user-fields.fragment.graphql`.
#[derive(Debug, Clone, Default)]
pub struct MatchDocumentFilenameRule {
    options: ResolvedOptions,
}

impl MatchDocumentFilenameRule {
    pub const NAME: &'static str = "match_document_filename";
    pub const DESCRIPTION: &'static str =
        "Requires document filenames to follow a convention derived from the operation or fragment name";

    #[must_use]
    pub fn new(options: MatchDocumentFilenameOptions) -> Self {
        Self {
            options: options.resolve(),
        }
    }

    /// Build the rule from raw configuration; missing options configure nothing
    pub fn from_options(options: Option<&serde_json::Value>) -> Result<Self> {
        let options = options
            .map(MatchDocumentFilenameOptions::from_value)
            .transpose()?
            .unwrap_or_default();
        Ok(Self::new(options))
    }
}

impl LintRule for MatchDocumentFilenameRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn check(&self, ctx: &DocumentContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        let Some(governing) = ctx.document.classify() else {
            return diagnostics;
        };

        let actual = FileName::from_path(ctx.file_path);

        if let Some(expected_extension) = self.options.file_extension {
            if expected_extension.as_str() != actual.extension {
                let message = format!(
                    "File extension \"{}\" doesn't match extension \"{expected_extension}\"",
                    actual.extension
                );
                diagnostics.push(
                    Diagnostic::error(Range::document_start(), message)
                        .with_code(MATCH_EXTENSION)
                        .with_rule(Self::NAME)
                        .with_param("fileExtension", actual.extension.as_str())
                        .with_param("expectedFileExtension", expected_extension.as_str()),
                );
            }
        }

        if let Some(policy) = self.options.policy(governing.document_type) {
            let expected = expected_filename(
                governing.name,
                policy,
                &actual,
                self.options.file_extension,
            );
            let filename = actual.full();

            if expected != filename {
                let message =
                    format!("Unexpected filename \"{filename}\". Rename it to \"{expected}\"");
                diagnostics.push(
                    Diagnostic::error(Range::document_start(), message)
                        .with_code(MATCH_STYLE)
                        .with_rule(Self::NAME)
                        .with_param("filename", filename)
                        .with_param("expectedFilename", expected),
                );
            }
        }

        diagnostics
    }
}

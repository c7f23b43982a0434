use crate::case::{convert_case, CaseStyle};
use std::path::Path;

use super::options::{FileExtension, PropertySchema};

/// A filename split the way the rule compares it
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct FileName {
    /// Filename without its extension
    pub base: String,
    /// Extension with its leading dot, or empty
    pub extension: String,
}

impl FileName {
    /// Split the last path component at its final dot.
    /// A leading dot does not start an extension (`.graphql` has none).
    pub fn from_path(path: &Path) -> Self {
        let base = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        Self { base, extension }
    }

    pub fn full(&self) -> String {
        format!("{}{}", self.base, self.extension)
    }
}

/// Compose the filename a document is expected to live in.
///
/// Without a configured style the existing basename is kept as is, so a
/// prefix or suffix alone never forces a case rewrite.
pub(super) fn expected_filename(
    document_name: &str,
    policy: &PropertySchema,
    actual: &FileName,
    configured_extension: Option<FileExtension>,
) -> String {
    let extension = configured_extension.map_or(actual.extension.as_str(), |ext| ext.as_str());

    let base = match policy.style {
        Some(CaseStyle::MatchDocument) => document_name.to_string(),
        Some(style) => convert_case(style, document_name),
        None => actual.base.clone(),
    };

    format!(
        "{}{base}{}{extension}",
        policy.prefix.as_deref().unwrap_or_default(),
        policy.suffix.as_deref().unwrap_or_default(),
    )
}

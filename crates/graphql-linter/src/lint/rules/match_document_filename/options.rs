use crate::case::CaseStyle;
use crate::document::DocumentType;
use crate::{LintError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::MatchDocumentFilenameRule;

/// File extension a document file may be required to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileExtension {
    #[serde(rename = ".gql")]
    Gql,
    #[serde(rename = ".graphql")]
    Graphql,
}

impl FileExtension {
    /// Every accepted extension, in the order they are documented
    pub const ALL: [Self; 2] = [Self::Gql, Self::Graphql];

    /// The extension including its leading dot
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gql => ".gql",
            Self::Graphql => ".graphql",
        }
    }
}

impl fmt::Display for FileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filename policy for one document type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertySchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<CaseStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl PropertySchema {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.style.is_none() && self.prefix.is_none() && self.suffix.is_none()
    }
}

/// A per-type policy as written in configuration: a bare style name or an object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleOption {
    Style(CaseStyle),
    Schema(PropertySchema),
}

impl StyleOption {
    /// Unify both configuration shapes into a policy
    #[must_use]
    pub fn normalize(self) -> PropertySchema {
        match self {
            Self::Style(style) => PropertySchema {
                style: Some(style),
                ..PropertySchema::default()
            },
            Self::Schema(schema) => schema,
        }
    }
}

impl From<CaseStyle> for StyleOption {
    fn from(style: CaseStyle) -> Self {
        Self::Style(style)
    }
}

impl From<PropertySchema> for StyleOption {
    fn from(schema: PropertySchema) -> Self {
        Self::Schema(schema)
    }
}

/// Options of the `match_document_filename` rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MatchDocumentFilenameOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_extension: Option<FileExtension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<StyleOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutation: Option<StyleOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<StyleOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fragment: Option<StyleOption>,
}

impl MatchDocumentFilenameOptions {
    /// Deserialize and check options taken from configuration
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        let options: Self = serde_json::from_value(value.clone())
            .map_err(|e| invalid_options(e.to_string()))?;

        for (key, option) in [
            ("query", &options.query),
            ("mutation", &options.mutation),
            ("subscription", &options.subscription),
            ("fragment", &options.fragment),
        ] {
            if let Some(StyleOption::Schema(schema)) = option {
                if schema.is_empty() {
                    return Err(invalid_options(format!(
                        "`{key}` must set at least one of `style`, `prefix`, `suffix`"
                    )));
                }
            }
        }

        Ok(options)
    }

    pub(super) fn resolve(self) -> ResolvedOptions {
        ResolvedOptions {
            file_extension: self.file_extension,
            query: self.query.map(StyleOption::normalize),
            mutation: self.mutation.map(StyleOption::normalize),
            subscription: self.subscription.map(StyleOption::normalize),
            fragment: self.fragment.map(StyleOption::normalize),
        }
    }
}

fn invalid_options(message: String) -> LintError {
    LintError::InvalidOptions {
        rule: MatchDocumentFilenameRule::NAME,
        message,
    }
}

/// Options with every per-type value normalized to a policy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct ResolvedOptions {
    pub file_extension: Option<FileExtension>,
    query: Option<PropertySchema>,
    mutation: Option<PropertySchema>,
    subscription: Option<PropertySchema>,
    fragment: Option<PropertySchema>,
}

impl ResolvedOptions {
    pub fn policy(&self, document_type: DocumentType) -> Option<&PropertySchema> {
        match document_type {
            DocumentType::Query => self.query.as_ref(),
            DocumentType::Mutation => self.mutation.as_ref(),
            DocumentType::Subscription => self.subscription.as_ref(),
            DocumentType::Fragment => self.fragment.as_ref(),
        }
    }
}

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Top-level configuration file contents.
/// Either a single project or multiple named projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GraphQLConfig {
    /// Single project configuration
    Single(ProjectConfig),
    /// Multi-project configuration
    Multi {
        projects: HashMap<String, ProjectConfig>,
    },
}

impl GraphQLConfig {
    /// Iterate over all projects.
    /// A single project config yields one item named "default".
    /// Named projects are yielded in name order so output is stable.
    #[must_use]
    pub fn projects(&self) -> Vec<(&str, &ProjectConfig)> {
        match self {
            Self::Single(config) => vec![("default", config)],
            Self::Multi { projects } => {
                let mut named: Vec<_> = projects
                    .iter()
                    .map(|(name, config)| (name.as_str(), config))
                    .collect();
                named.sort_by_key(|(name, _)| *name);
                named
            }
        }
    }

    /// Get a specific project by name.
    /// For single project configs, returns the project if name is "default".
    #[must_use]
    pub fn get_project(&self, name: &str) -> Option<&ProjectConfig> {
        match self {
            Self::Single(config) if name == "default" => Some(config),
            Self::Single(_) => None,
            Self::Multi { projects } => projects.get(name),
        }
    }

    #[must_use]
    pub const fn is_multi_project(&self) -> bool {
        matches!(self, Self::Multi { .. })
    }
}

/// Configuration for a single project of GraphQL documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Document patterns (queries, mutations, subscriptions, fragments)
    pub documents: DocumentsConfig,

    /// File patterns to exclude from the matched documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,

    /// Tool-specific extensions. The linter reads its rules from `lint`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<HashMap<String, serde_json::Value>>,
}

impl ProjectConfig {
    /// Raw value of a tool extension, if configured
    #[must_use]
    pub fn extension(&self, name: &str) -> Option<&serde_json::Value> {
        self.extensions.as_ref().and_then(|ext| ext.get(name))
    }

    /// Exclusion patterns, empty when none are configured
    #[must_use]
    pub fn exclude_patterns(&self) -> &[String] {
        self.exclude.as_deref().unwrap_or_default()
    }
}

/// Documents source configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentsConfig {
    /// Single pattern
    Pattern(String),
    /// Multiple patterns
    Patterns(Vec<String>),
}

impl DocumentsConfig {
    #[must_use]
    pub fn patterns(&self) -> Vec<&str> {
        match self {
            Self::Pattern(pattern) => vec![pattern.as_str()],
            Self::Patterns(patterns) => patterns.iter().map(String::as_str).collect(),
        }
    }
}

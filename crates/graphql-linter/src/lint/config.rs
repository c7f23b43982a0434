use crate::{LintError, ProjectConfig, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Severity level for a lint rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LintSeverity {
    Off,
    Warn,
    Error,
}

/// Configuration for a single lint rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LintRuleConfig {
    /// Just a severity level
    Severity(LintSeverity),

    /// Severity plus rule-specific options
    Detailed {
        severity: LintSeverity,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        options: Option<serde_json::Value>,
    },
}

impl LintRuleConfig {
    #[must_use]
    pub const fn severity(&self) -> LintSeverity {
        match self {
            Self::Severity(severity) | Self::Detailed { severity, .. } => *severity,
        }
    }

    #[must_use]
    pub const fn options(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Severity(_) => None,
            Self::Detailed { options, .. } => options.as_ref(),
        }
    }
}

/// Rule name to rule configuration. Rules are opt-in: unlisted rules never run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LintConfig {
    pub rules: BTreeMap<String, LintRuleConfig>,
}

impl LintConfig {
    /// Read the `lint` extension of a project; a project without one lints nothing
    pub fn from_project(project: &ProjectConfig) -> Result<Self> {
        project
            .extension("lint")
            .map_or_else(|| Ok(Self::default()), Self::from_value)
    }

    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        serde_json::from_value(value.clone())
            .map_err(|e| LintError::InvalidLintConfig(e.to_string()))
    }

    /// Get the configured severity for a rule
    #[must_use]
    pub fn get_severity(&self, rule_name: &str) -> Option<LintSeverity> {
        self.rules.get(rule_name).map(LintRuleConfig::severity)
    }

    /// Check if a rule is enabled (not Off and not absent)
    #[must_use]
    pub fn is_enabled(&self, rule_name: &str) -> bool {
        matches!(
            self.get_severity(rule_name),
            Some(LintSeverity::Warn | LintSeverity::Error)
        )
    }
}

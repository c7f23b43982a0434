use crate::{FileExtension, LintError, ProjectConfig, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Finds the GraphQL document files a project's patterns point at
pub struct DocumentLoader {
    patterns: Vec<String>,
    exclude: Vec<glob::Pattern>,
    base_path: Option<PathBuf>,
}

impl DocumentLoader {
    /// Loader for a project's `documents` and `exclude` patterns
    pub fn from_project(project: &ProjectConfig) -> Result<Self> {
        let patterns = project
            .documents
            .patterns()
            .into_iter()
            .map(str::to_string)
            .collect();
        Self::new(patterns).with_exclude(project.exclude_patterns())
    }

    #[must_use]
    pub const fn new(patterns: Vec<String>) -> Self {
        Self {
            patterns,
            exclude: Vec::new(),
            base_path: None,
        }
    }

    /// Resolve patterns relative to `path`
    #[must_use]
    pub fn with_base_path(mut self, path: impl AsRef<Path>) -> Self {
        self.base_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Skip files whose path (relative to the base path) matches any of `patterns`
    pub fn with_exclude(mut self, patterns: &[String]) -> Result<Self> {
        for pattern in patterns {
            let compiled = glob::Pattern::new(pattern).map_err(|e| {
                LintError::DocumentLoad(format!("Invalid exclude pattern '{pattern}': {e}"))
            })?;
            self.exclude.push(compiled);
        }
        Ok(self)
    }

    /// Every existing `.graphql`/`.gql` file matched, sorted and without duplicates.
    /// A pattern naming a directory matches the documents anywhere below it.
    pub fn find_documents(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for pattern in &self.patterns {
            for expanded_pattern in Self::expand_braces(pattern) {
                let full_pattern = self.base_path.as_ref().map_or_else(
                    || PathBuf::from(&expanded_pattern),
                    |base| base.join(&expanded_pattern),
                );

                if full_pattern.is_dir() {
                    Self::walk_dir(&full_pattern, &mut files);
                } else {
                    Self::glob_files(&full_pattern.display().to_string(), &mut files)?;
                }
            }
        }

        files.retain(|path| Self::is_document(path) && !self.is_excluded(path));
        files.sort();
        files.dedup();

        tracing::debug!(count = files.len(), "Found document files");
        Ok(files)
    }

    fn glob_files(pattern: &str, files: &mut Vec<PathBuf>) -> Result<()> {
        let entries = glob::glob(pattern)
            .map_err(|e| LintError::DocumentLoad(format!("Invalid glob pattern: {e}")))?;

        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(_) => {} // Skip directories
                Err(e) => {
                    tracing::warn!(path = %e.path().display(), "Unreadable path: {}", e.error());
                }
            }
        }

        Ok(())
    }

    fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) {
        for entry in WalkDir::new(dir).follow_links(false) {
            match entry {
                Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
                Ok(_) => {}
                Err(e) => tracing::warn!("Failed to walk {}: {e}", dir.display()),
            }
        }
    }

    /// Expand brace patterns like {graphql,gql} into multiple patterns
    fn expand_braces(pattern: &str) -> Vec<String> {
        if let Some(start) = pattern.find('{') {
            if let Some(end) = pattern[start..].find('}').map(|offset| start + offset) {
                let before = &pattern[..start];
                let after = &pattern[end + 1..];
                let options = &pattern[start + 1..end];

                return options
                    .split(',')
                    .flat_map(|opt| Self::expand_braces(&format!("{before}{opt}{after}")))
                    .collect();
            }
        }

        vec![pattern.to_string()]
    }

    fn is_document(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                FileExtension::ALL
                    .iter()
                    .any(|accepted| accepted.as_str().trim_start_matches('.') == ext)
            })
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let relative = self
            .base_path
            .as_ref()
            .and_then(|base| path.strip_prefix(base).ok())
            .unwrap_or(path);

        self.exclude
            .iter()
            .any(|pattern| pattern.matches_path(relative))
    }
}

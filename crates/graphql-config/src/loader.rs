use crate::{ConfigError, GraphQLConfig, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names to search for, in order of preference
const CONFIG_FILES: &[&str] = &[
    ".graphqlrc.yml",
    ".graphqlrc.yaml",
    ".graphqlrc.json",
    ".graphqlrc",
    "graphql.config.yml",
    "graphql.config.yaml",
    "graphql.config.json",
];

/// Find a config file by walking up the directory tree from `start_dir`.
pub fn find_config(start_dir: &Path) -> Result<Option<PathBuf>> {
    let mut current_dir = start_dir.to_path_buf();

    loop {
        for file_name in CONFIG_FILES {
            let config_path = current_dir.join(file_name);
            if config_path.is_file() {
                return Ok(Some(config_path));
            }
        }

        if !current_dir.pop() {
            break;
        }
    }

    Ok(None)
}

/// Load a config from the specified path.
/// The format is picked from the file extension.
pub fn load_config(path: &Path) -> Result<GraphQLConfig> {
    let contents = fs::read_to_string(path)?;
    load_config_from_str(&contents, path)
}

/// Load a config from a string.
/// The path is used for error messages and format detection.
pub fn load_config_from_str(contents: &str, path: &Path) -> Result<GraphQLConfig> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    let file_name = path.file_name().and_then(|name| name.to_str()).unwrap_or("");

    let config = match extension {
        "yml" | "yaml" => parse_yaml(contents, path)?,
        "json" => parse_json(contents, path)?,
        // .graphqlrc without extension: try YAML first, then JSON
        "" if file_name == ".graphqlrc" => {
            parse_yaml(contents, path).or_else(|_| parse_json(contents, path))?
        }
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };

    validate_config(&config, path)?;

    Ok(config)
}

fn parse_yaml(contents: &str, path: &Path) -> Result<GraphQLConfig> {
    serde_yaml::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("YAML parse error: {e}"),
    })
}

fn parse_json(contents: &str, path: &Path) -> Result<GraphQLConfig> {
    serde_json::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("JSON parse error: {e}"),
    })
}

/// Every project needs at least one usable document pattern
fn validate_config(config: &GraphQLConfig, path: &Path) -> Result<()> {
    for (project_name, project_config) in config.projects() {
        let patterns = project_config.documents.patterns();
        if patterns.is_empty() {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                message: format!("Project '{project_name}' has empty documents configuration"),
            });
        }

        if patterns.iter().any(|pattern| pattern.trim().is_empty()) {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                message: format!("Project '{project_name}' has empty document pattern"),
            });
        }

        if let Some(lint) = project_config.extension("lint") {
            if !lint.is_object() {
                return Err(ConfigError::Invalid {
                    path: path.to_path_buf(),
                    message: format!(
                        "Project '{project_name}' has a lint extension that is not a mapping of rule names"
                    ),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(suffix).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_yaml_single_project_with_lint_extension() {
        let yaml = r"
documents: 'src/**/*.graphql'
extensions:
  lint:
    match_document_filename:
      severity: error
      options:
        query: PascalCase
";
        let file = write_temp(".yml", yaml);

        let config = load_config(file.path()).unwrap();
        assert!(!config.is_multi_project());

        let project = config.get_project("default").unwrap();
        let lint = project.extension("lint").unwrap();
        assert_eq!(
            lint["match_document_filename"]["options"]["query"],
            serde_json::json!("PascalCase")
        );
    }

    #[test]
    fn test_load_yaml_multi_project() {
        let yaml = r"
projects:
  web:
    documents: 'web/**/*.graphql'
  admin:
    documents:
      - 'admin/**/*.gql'
      - 'shared/**/*.gql'
    exclude: ['shared/generated/**']
";
        let file = write_temp(".yaml", yaml);

        let config = load_config(file.path()).unwrap();
        assert!(config.is_multi_project());
        assert_eq!(config.projects().len(), 2);

        let admin = config.get_project("admin").unwrap();
        assert_eq!(admin.documents.patterns().len(), 2);
        assert_eq!(admin.exclude_patterns(), ["shared/generated/**".to_string()]);
    }

    #[test]
    fn test_load_json_single_project() {
        let json = r#"{ "documents": "**/*.gql" }"#;
        let file = write_temp(".json", json);

        let config = load_config(file.path()).unwrap();
        assert!(!config.is_multi_project());
    }

    #[test]
    fn test_extensionless_rc_accepts_json() {
        let config = load_config_from_str(
            r#"{ "documents": ["a/*.graphql"] }"#,
            Path::new(".graphqlrc"),
        )
        .unwrap();
        assert!(config.get_project("default").is_some());
    }

    #[test]
    fn test_unsupported_format() {
        let result = load_config_from_str("documents: x", Path::new("graphql.config.toml"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_validation_empty_document_pattern() {
        let file = write_temp(".yml", "documents: '  '\n");

        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_validation_empty_document_list() {
        let file = write_temp(".yml", "documents: []\n");

        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("empty documents configuration"));
    }

    #[test]
    fn test_validation_lint_extension_must_be_mapping() {
        let yaml = "documents: '*.graphql'\nextensions:\n  lint: recommended\n";
        let file = write_temp(".yml", yaml);

        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("not a mapping"));
    }

    #[test]
    fn test_find_config_in_current_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join(".graphqlrc.yml");
        fs::write(&config_path, "documents: '*.graphql'").unwrap();

        let found = find_config(temp_dir.path()).unwrap();
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join(".graphqlrc.yml");
        fs::write(&config_path, "documents: '*.graphql'").unwrap();

        let sub_dir = temp_dir.path().join("queries");
        fs::create_dir(&sub_dir).unwrap();

        let found = find_config(&sub_dir).unwrap();
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_config_file_priority() {
        let temp_dir = tempfile::tempdir().unwrap();

        fs::write(
            temp_dir.path().join(".graphqlrc.yml"),
            "documents: '*.graphql'",
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("graphql.config.json"),
            r#"{"documents": "*.gql"}"#,
        )
        .unwrap();

        let found = find_config(temp_dir.path()).unwrap().unwrap();

        assert_eq!(found.file_name().unwrap(), ".graphqlrc.yml");
    }
}

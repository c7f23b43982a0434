use graphql_config::load_config;
use graphql_linter::{Diagnostic, DocumentLoader, LintConfig, Linter};
use insta::assert_snapshot;
use std::fs;
use std::path::{Path, PathBuf};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Lint every fixture document with the given linter
fn lint_fixtures(linter: &Linter, loader: &DocumentLoader) -> Vec<(String, Diagnostic)> {
    let root = fixtures_dir();
    let mut results = Vec::new();

    for path in loader.find_documents().expect("Failed to find documents") {
        let source = fs::read_to_string(&path).expect("Failed to read document");
        let relative = path
            .strip_prefix(&root)
            .expect("Document outside fixtures")
            .display()
            .to_string()
            .replace('\\', "/");

        for diagnostic in linter.lint_document(&source, &path) {
            results.push((relative.clone(), diagnostic));
        }
    }

    results
}

/// Format diagnostics for snapshot testing
fn format_diagnostics(results: &[(String, Diagnostic)]) -> String {
    results
        .iter()
        .map(|(file, d)| {
            format!(
                "{file}:{}:{} {} {}",
                d.range.start.line + 1,
                d.range.start.character + 1,
                d.code.as_deref().unwrap_or("-"),
                d.message
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_project_config_snapshot() {
    let config = load_config(&fixtures_dir().join(".graphqlrc.yml")).expect("Failed to load config");
    let project = config.get_project("default").expect("Missing default project");

    let linter = Linter::new(&LintConfig::from_project(project).unwrap()).unwrap();
    let loader = DocumentLoader::from_project(project)
        .unwrap()
        .with_base_path(fixtures_dir());

    let results = lint_fixtures(&linter, &loader);

    assert_snapshot!(format_diagnostics(&results), @r#"
    fragments/user-fields.fragment.gql:1:1 MATCH_EXTENSION File extension ".gql" doesn't match extension ".graphql"
    fragments/user-fields.fragment.gql:1:1 MATCH_STYLE Unexpected filename "user-fields.fragment.gql". Rename it to "user-fields.fragment.graphql"
    mixed/query.me.graphql:1:1 MATCH_STYLE Unexpected filename "query.me.graphql". Rename it to "Me.graphql"
    queries/user-by-id.gql:1:1 MATCH_EXTENSION File extension ".gql" doesn't match extension ".graphql"
    queries/user-by-id.gql:1:1 MATCH_STYLE Unexpected filename "user-by-id.gql". Rename it to "UserById.graphql"
    "#);
}

#[test]
fn test_diagnostic_params() {
    let config = load_config(&fixtures_dir().join(".graphqlrc.yml")).expect("Failed to load config");
    let project = config.get_project("default").expect("Missing default project");
    let linter = Linter::new(&LintConfig::from_project(project).unwrap()).unwrap();

    let path = fixtures_dir().join("queries").join("user-by-id.gql");
    let source = fs::read_to_string(&path).expect("Failed to read document");
    let diagnostics = linter.lint_document(&source, &path);

    let params = serde_json::to_value(
        diagnostics
            .iter()
            .map(|d| (d.code.clone(), d.params.clone()))
            .collect::<Vec<_>>(),
    )
    .unwrap();

    assert_snapshot!(params.to_string(), @r#"[["MATCH_EXTENSION",{"expectedFileExtension":".graphql","fileExtension":".gql"}],["MATCH_STYLE",{"expectedFilename":"UserById.graphql","filename":"user-by-id.gql"}]]"#);
}

#[test]
fn test_operation_governs_mixed_document() {
    // The query `me` names the document, and queries have no policy
    let lint_config: LintConfig = serde_yaml::from_str(
        r"
match_document_filename:
  severity: error
  options:
    fragment:
      prefix: query.
",
    )
    .unwrap();
    let linter = Linter::new(&lint_config).unwrap();
    let loader = DocumentLoader::new(vec!["mixed".to_string()]).with_base_path(fixtures_dir());

    assert!(lint_fixtures(&linter, &loader).is_empty());
}

#[test]
fn test_unconfigured_types_and_extension_are_accepted() {
    let lint_config: LintConfig = serde_yaml::from_str(
        r"
match_document_filename:
  severity: warn
  options:
    mutation: snake_case
    subscription: snake_case
",
    )
    .unwrap();
    let linter = Linter::new(&lint_config).unwrap();
    let loader = DocumentLoader::new(vec!["**/*.{graphql,gql}".to_string()])
        .with_base_path(fixtures_dir())
        .with_exclude(&["ignored/**".to_string()])
        .unwrap();

    let results = lint_fixtures(&linter, &loader);
    assert!(results.is_empty(), "unexpected diagnostics: {results:?}");
}

#[test]
fn test_match_document_style_snapshot() {
    let lint_config: LintConfig = serde_yaml::from_str(
        r"
match_document_filename:
  severity: warn
  options:
    query: matchDocumentStyle
    mutation: matchDocumentStyle
    fragment:
      style: matchDocumentStyle
      suffix: .fragment
",
    )
    .unwrap();
    let linter = Linter::new(&lint_config).unwrap();
    let loader = DocumentLoader::new(vec!["**/*.{graphql,gql}".to_string()])
        .with_base_path(fixtures_dir());

    let results = lint_fixtures(&linter, &loader);

    assert_snapshot!(format_diagnostics(&results), @r#"
    fragments/user-fields.fragment.gql:1:1 MATCH_STYLE Unexpected filename "user-fields.fragment.gql". Rename it to "user_fields.fragment.gql"
    fragments/user-fields.fragment.graphql:1:1 MATCH_STYLE Unexpected filename "user-fields.fragment.graphql". Rename it to "user_fields.fragment.graphql"
    ignored/Whatever.gql:1:1 MATCH_STYLE Unexpected filename "Whatever.gql". Rename it to "delete_everything.gql"
    mixed/query.me.graphql:1:1 MATCH_STYLE Unexpected filename "query.me.graphql". Rename it to "me.graphql"
    queries/user-by-id.gql:1:1 MATCH_STYLE Unexpected filename "user-by-id.gql". Rename it to "UserById.gql"
    "#);
}

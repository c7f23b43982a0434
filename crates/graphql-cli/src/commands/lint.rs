use crate::OutputFormat;
use anyhow::{Context, Result};
use colored::Colorize;
use graphql_config::{find_config, load_config};
use graphql_linter::{Diagnostic, DocumentLoader, LintConfig, Linter, Severity};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

pub fn run(
    config_path: Option<PathBuf>,
    project_name: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let config_path = if let Some(path) = config_path {
        path
    } else {
        let current_dir = std::env::current_dir()?;
        find_config(&current_dir)
            .context("Failed to search for config")?
            .context("No GraphQL config file found")?
    };

    let config = load_config(&config_path).context("Failed to load config")?;

    // Document patterns are relative to the config file
    let base_dir = config_path
        .parent()
        .context("Failed to get config directory")?
        .to_path_buf();

    let projects_to_lint = if let Some(name) = project_name.as_deref() {
        let Some(project) = config.get_project(name) else {
            eprintln!("{}", format!("Project '{name}' not found").red());
            process::exit(1);
        };
        vec![(name, project)]
    } else {
        config.projects()
    };

    let mut total_errors = 0;
    let mut total_warnings = 0;

    for (name, project) in &projects_to_lint {
        if config.is_multi_project() && matches!(format, OutputFormat::Human) {
            println!("\n{}", format!("=== Project: {name} ===").bold().cyan());
        }

        let lint_config = LintConfig::from_project(project)
            .with_context(|| format!("Invalid lint configuration for project '{name}'"))?;
        let linter = Linter::new(&lint_config)
            .with_context(|| format!("Invalid lint configuration for project '{name}'"))?;

        let files = DocumentLoader::from_project(project)?
            .with_base_path(&base_dir)
            .find_documents()
            .with_context(|| format!("Failed to find documents for project '{name}'"))?;

        tracing::info!(project = *name, files = files.len(), "Linting documents");

        for path in &files {
            let source = match fs::read_to_string(path) {
                Ok(source) => source,
                Err(e) => {
                    tracing::warn!(file = %path.display(), "Failed to read document: {e}");
                    continue;
                }
            };

            let shown_path = display_path(path, &base_dir);
            for diag in linter.lint_document(&source, path) {
                match diag.severity {
                    Severity::Error => total_errors += 1,
                    Severity::Warning => total_warnings += 1,
                }
                print_diagnostic(&shown_path, &diag, format);
            }
        }
    }

    if matches!(format, OutputFormat::Human) {
        println!();
        if total_errors == 0 && total_warnings == 0 {
            println!("{}", "✓ No linting issues found!".green().bold());
        } else if total_errors == 0 {
            println!(
                "{}",
                format!("✓ Linting passed with {total_warnings} warning(s)")
                    .yellow()
                    .bold()
            );
        } else if total_warnings == 0 {
            println!("{}", format!("✗ Found {total_errors} error(s)").red());
        } else {
            println!(
                "{}",
                format!("✗ Found {total_errors} error(s) and {total_warnings} warning(s)").red()
            );
        }
    }

    if total_errors > 0 {
        process::exit(1);
    }

    Ok(())
}

fn display_path(path: &Path, base_dir: &Path) -> String {
    path.strip_prefix(base_dir)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn print_diagnostic(file_path: &str, diag: &Diagnostic, format: OutputFormat) {
    // Convert from 0-based to 1-based for display
    let line = diag.range.start.line + 1;
    let column = diag.range.start.character + 1;

    match format {
        OutputFormat::Human => {
            let (label, message) = match diag.severity {
                Severity::Error => ("error:".red().bold(), diag.message.red()),
                Severity::Warning => ("warning:".yellow().bold(), diag.message.yellow()),
            };
            println!("\n{file_path}:{line}:{column}: {label} {message}");
            if let Some(ref rule) = diag.rule {
                println!("  {}: {}", "rule".dimmed(), rule.dimmed());
            }
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "file": file_path,
                    "severity": diag.severity.as_str(),
                    "rule": diag.rule,
                    "code": diag.code,
                    "message": diag.message,
                    "params": diag.params,
                    "location": {
                        "start": {
                            "line": line,
                            "column": column
                        },
                        "end": {
                            "line": diag.range.end.line + 1,
                            "column": diag.range.end.character + 1
                        }
                    }
                })
            );
        }
    }
}

use colored::Colorize;
use graphql_linter::{rule_catalog, CaseStyle, FileExtension};

pub fn run() {
    for rule in rule_catalog() {
        println!("{} {}", rule.name.bold(), rule.description.dimmed());
    }

    let extensions: Vec<_> = FileExtension::ALL.iter().map(|ext| ext.as_str()).collect();
    let styles: Vec<_> = CaseStyle::ALL.iter().map(|style| style.as_str()).collect();

    println!();
    println!("  {}: {}", "fileExtension".cyan(), extensions.join(", "));
    println!(
        "  {}: {}",
        "query, mutation, subscription, fragment".cyan(),
        styles.join(", ")
    );
    println!(
        "    {}",
        "or an object with at least one of style, prefix, suffix".dimmed()
    );
}

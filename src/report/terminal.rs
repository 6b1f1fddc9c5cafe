use std::path::Path;

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{ArtifactLicenses, Classification};

/// Render a colored terminal report.
///
/// `configs` are the license config files, named in the hint printed below
/// the restricted table.
pub fn render(
    classification: &Classification,
    report: &Path,
    configs: &[&Path],
    verbose: bool,
    quiet: bool,
) {
    let total = classification.all_artifacts.len();
    let warn_count = classification.warned.len();
    let restricted_count = classification.restricted.len();
    let pass_count = classification.accepted_count();

    if quiet {
        println!(
            "Total: {}  Pass: {}  Warn: {}  Restricted: {}  Result: {}",
            total,
            pass_count.to_string().green(),
            warn_count.to_string().yellow(),
            restricted_count.to_string().red(),
            verdict_label(classification),
        );
        return;
    }

    println!(
        "\n {} v{}",
        "license-gate".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Report: {}\n", report.display());

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(" │  {:<48} │", format!("Artifacts checked : {}", total));
    println!(
        " │  {:<48} │",
        format!("{}  Accepted        : {:>4}", "✓".green(), pass_count)
    );
    println!(
        " │  {:<48} │",
        format!("{}  With warnings   : {:>4}", "⚠".yellow(), warn_count)
    );
    println!(
        " │  {:<48} │",
        format!("{}  Restricted      : {:>4}", "✗".red(), restricted_count)
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    if !classification.warnings.is_empty() {
        println!(" {} License warnings:\n", "[WARN]".yellow().bold());
        for line in classification.warning_lines() {
            println!("   {}", line.yellow());
        }
        println!();
    }

    if restricted_count > 0 {
        println!(
            " {} Artifacts with restricted licenses:\n",
            "[RESTRICTED]".red().bold()
        );
        render_table(&classification.restricted, |_| ("✗ restricted", Color::Red));
        println!();
        println!(" {}\n", restricted_hint(configs));
    }

    if verbose && total > 0 {
        println!(" {} All checked artifacts:\n", "[ALL]".bold());
        render_table(&classification.all_artifacts, |artifact| {
            if classification.restricted.contains_key(artifact) {
                ("✗ restricted", Color::Red)
            } else if classification.warned.contains(artifact) {
                ("⚠ warning", Color::Yellow)
            } else {
                ("✓ accepted", Color::Green)
            }
        });
        println!();
    }

    println!(" Result: {}\n", verdict_label(classification));
}

fn restricted_hint(configs: &[&Path]) -> String {
    let files: Vec<String> = configs
        .iter()
        .map(|path| path.display().to_string())
        .collect();
    format!(
        "If a restricted license is acceptable, add it to `permitted` or `permitted-with-warning` in one of: {}",
        files.join(", ")
    )
}

fn verdict_label(classification: &Classification) -> ColoredString {
    let label = classification.verdict.to_string();
    if classification.verdict.is_valid() {
        label.green().bold()
    } else {
        label.red().bold()
    }
}

fn render_table<F>(artifacts: &ArtifactLicenses, status: F)
where
    F: Fn(&str) -> (&'static str, Color),
{
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Artifact").add_attribute(Attribute::Bold),
            Cell::new("Licenses").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
        ]);

    for (artifact, licenses) in artifacts {
        let (label, color) = status(artifact.as_str());
        let licenses = if licenses.is_empty() {
            "none".to_string()
        } else {
            licenses.join(", ")
        };

        table.add_row(vec![
            Cell::new(artifact),
            Cell::new(licenses),
            Cell::new(label).fg(color).set_alignment(CellAlignment::Center),
        ]);
    }

    println!("{}", table);
}

//! Terminal output for the configurator
//!
//! Everything user-facing that isn't a prompt or an error goes through here:
//! the dry-run preview and the summary printed after a successful run.

use std::path::{Path, PathBuf};

use console::Style;

use crate::rewrite::{RewriteSummary, Rewritten};

/// Print the rewritten files without writing them
pub fn display_preview(manifest_path: &Path, manifest: &str, template: Option<(&Path, &str)>) {
    print_file(manifest_path, manifest);
    if let Some((path, text)) = template {
        print_file(path, text);
    }
    println!(
        "{}",
        Style::new()
            .yellow()
            .apply_to("Dry run: no files were written")
    );
}

fn print_file(path: &Path, contents: &str) {
    println!(
        "{} {}",
        Style::new().bold().green().apply_to("==>"),
        Style::new().bold().apply_to(path.display())
    );
    print!("{contents}");
    if !contents.ends_with('\n') {
        println!();
    }
    println!();
}

/// Print what a completed run did
pub fn display_summary(rewritten: &Rewritten, written: &[PathBuf], removed: &[PathBuf]) {
    let package = rewritten
        .manifest
        .get("name")
        .and_then(|name| name.as_str())
        .unwrap_or(rewritten.identity.raw_name.as_str());

    println!(
        "{} {} {}",
        Style::new().bold().green().apply_to("Configured"),
        Style::new().bold().yellow().apply_to(package),
        Style::new()
            .dim()
            .apply_to(format!("({})", rewritten.identity.studly_name))
    );

    for path in written {
        println!(
            "  {} {}",
            Style::new().cyan().apply_to("updated"),
            path.display()
        );
    }
    for path in removed {
        println!(
            "  {} {}",
            Style::new().red().apply_to("removed"),
            path.display()
        );
    }

    display_counts(&rewritten.summary);
}

fn display_counts(summary: &RewriteSummary) {
    let lines = [
        ("namespace keys", summary.namespace_keys),
        ("providers", summary.providers),
        ("aliases", summary.aliases),
        ("template tokens", summary.template_tokens),
    ];
    for (label, count) in lines {
        if count > 0 {
            println!(
                "    {} {}",
                Style::new().bold().apply_to(format!("{label}:")),
                count
            );
        }
    }
}

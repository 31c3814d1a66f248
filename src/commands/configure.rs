//! Configure command implementation
//!
//! Reads the skeleton, asks for the package details, rewrites everything in
//! memory, then writes the manifest and template in one transaction. The
//! bootstrap files are removed only after the writes were committed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::ConfigureArgs;
use crate::config::{KeyOrder, Settings};
use crate::error::Result;
use crate::project::{self, Project};
use crate::prompt::{self, Defaults, Provided};
use crate::rewrite;
use crate::transaction::Transaction;
use crate::ui;

/// Run configure command
pub fn run(dir: Option<PathBuf>, config: Option<PathBuf>, args: ConfigureArgs) -> Result<()> {
    let project_dir = match dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let mut settings = Settings::load(&project_dir, config.as_deref())?;
    if args.keep_key_order {
        settings.key_order = KeyOrder::InPlace;
    }

    let project = Project::open(&project_dir, &settings)?;
    let manifest = project.read_manifest()?;
    let template = project.read_template()?;

    let interactive = !args.no_interaction && console::user_attended();
    let defaults = Defaults {
        package_name: project.default_package_name().unwrap_or_default(),
        description: String::new(),
        author_username: settings.default_username.clone(),
    };
    let provided = Provided {
        package_name: args.name.clone(),
        description: args.description.clone(),
        author_username: args.username.clone(),
    };
    let answers = prompt::collect_answers(provided, &defaults, interactive)?;

    let rewritten = rewrite::run(
        manifest,
        template.as_deref().unwrap_or_default(),
        &answers,
        &settings,
    )?;
    let manifest_text = project::render_manifest(&rewritten.manifest)?;
    let template_text = template.as_ref().map(|_| rewritten.template.as_str());

    if args.dry_run {
        ui::display_preview(
            &project.manifest_path,
            &manifest_text,
            template_text.map(|text| (project.template_path.as_path(), text)),
        );
        return Ok(());
    }

    let written = write_outputs(&project, &manifest_text, template_text)?;

    let removed = if args.keep {
        Vec::new()
    } else {
        remove_bootstrap_files(&project, &cleanup_targets(&settings, &args))
    };

    ui::display_summary(&rewritten, &written, &removed);
    Ok(())
}

/// Write the manifest and template together, or not at all
fn write_outputs(
    project: &Project,
    manifest: &str,
    template: Option<&str>,
) -> Result<Vec<PathBuf>> {
    let mut transaction = Transaction::new();
    let mut written = Vec::new();

    transaction.write(&project.manifest_path, manifest)?;
    written.push(project.manifest_path.clone());

    if let Some(template) = template {
        transaction.write(&project.template_path, template)?;
        written.push(project.template_path.clone());
    }

    tracing::debug!("committing {} file(s)", transaction.touched());
    transaction.commit();
    Ok(written)
}

/// Bootstrap files from settings and flags, without duplicates
fn cleanup_targets(settings: &Settings, args: &ConfigureArgs) -> Vec<PathBuf> {
    let mut targets: Vec<PathBuf> = Vec::new();
    for path in settings.cleanup.iter().chain(&args.remove) {
        if !targets.contains(path) {
            targets.push(path.clone());
        }
    }
    targets
}

/// Delete bootstrap files, never the files that were just written
///
/// Failures are reported but do not fail the run; the package is already
/// configured at this point.
fn remove_bootstrap_files(project: &Project, targets: &[PathBuf]) -> Vec<PathBuf> {
    let mut removed = Vec::new();

    for target in targets {
        let path = project.resolve(target);
        let written = [&project.manifest_path, &project.template_path];
        if written.iter().any(|file| is_same_file(&path, file)) {
            tracing::warn!("refusing to remove {}", path.display());
            continue;
        }
        if !path.is_file() {
            tracing::debug!("{} not present, nothing to remove", path.display());
            continue;
        }

        match fs::remove_file(&path) {
            Ok(()) => removed.push(path),
            Err(e) => eprintln!("Warning: Failed to remove {}: {}", path.display(), e),
        }
    }

    removed
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

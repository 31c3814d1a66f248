//! Full rewrite of a skeleton's manifest and template

use serde_json::Value;

use super::manifest::{ALIASES, NAMESPACE_MAPS, PROVIDERS, set_author, set_package_info};
use super::rule::RewriteRule;
use super::template::{count_matches, rewrite_template};
use super::{rewrite_keys, rewrite_values};
use crate::config::{Settings, TemplateTokens, VendorIdentity};
use crate::error::{self, Result};
use crate::identity::PackageIdentity;

/// What the user answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub package_name: String,
    pub description: String,
    pub author_username: String,
}

/// How much each step changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    pub namespace_keys: usize,
    pub providers: usize,
    pub aliases: usize,
    pub template_tokens: usize,
}

/// Output of a run, ready to be persisted
#[derive(Debug, Clone)]
pub struct Rewritten {
    pub identity: PackageIdentity,
    pub manifest: Value,
    pub template: String,
    pub summary: RewriteSummary,
}

/// Rewrite `manifest` and `template` for the package described by `answers`
///
/// Steps run in a fixed order: author block, name and description, autoload
/// namespaces, Laravel providers and aliases, then the template. Sections the
/// manifest does not have are skipped. The only hard requirement is that the
/// manifest is a JSON object.
pub fn run(
    mut manifest: Value,
    template: &str,
    answers: &Answers,
    settings: &Settings,
) -> Result<Rewritten> {
    let identity = PackageIdentity::derive(&answers.package_name)?;
    tracing::debug!(
        "package {} ({})",
        identity.raw_name,
        identity.studly_name
    );

    let Some(root) = manifest.as_object_mut() else {
        return Err(error::manifest::malformed(
            settings.manifest.display().to_string(),
            "top-level value must be a JSON object",
        ));
    };
    set_author(root, &settings.vendor);
    set_package_info(root, &settings.vendor, &identity, &answers.description);

    let vendor = settings.vendor.name.as_str();
    let studly = identity.studly_name.as_str();
    let mut summary = RewriteSummary::default();

    for pointer in NAMESPACE_MAPS {
        match manifest.pointer_mut(pointer) {
            Some(map) => {
                summary.namespace_keys += rewrite_keys(
                    map,
                    &settings.placeholders.namespace,
                    vendor,
                    studly,
                    settings.key_order,
                );
            }
            None => tracing::debug!("manifest has no {pointer}, skipping"),
        }
    }

    if let Some(providers) = manifest.pointer_mut(PROVIDERS) {
        summary.providers = rewrite_values(providers, &settings.placeholders, vendor, studly);
    }
    if let Some(aliases) = manifest.pointer_mut(ALIASES) {
        summary.aliases = rewrite_values(aliases, &settings.placeholders, vendor, studly);
    }

    let rules = template_rules(
        &settings.template_tokens,
        &settings.vendor,
        &identity,
        answers,
    );
    summary.template_tokens = count_matches(template, &rules);
    let template = rewrite_template(template, &rules);

    Ok(Rewritten {
        identity,
        manifest,
        template,
        summary,
    })
}

/// Template rules in application order
///
/// The description token goes first since the package token is a prefix of it.
pub fn template_rules(
    tokens: &TemplateTokens,
    vendor: &VendorIdentity,
    identity: &PackageIdentity,
    answers: &Answers,
) -> Vec<RewriteRule> {
    vec![
        RewriteRule::new(tokens.description.as_str(), answers.description.as_str()),
        RewriteRule::new(tokens.vendor.as_str(), vendor.slug()),
        RewriteRule::new(tokens.package.as_str(), identity.raw_name.as_str()),
        RewriteRule::new(tokens.author_name.as_str(), vendor.name.as_str()),
        RewriteRule::new(
            tokens.author_username.as_str(),
            answers.author_username.as_str(),
        ),
    ]
}

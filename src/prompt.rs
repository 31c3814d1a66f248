//! Interactive questions for the package details
//!
//! Values already given on the command line are never asked for. An empty
//! answer falls back to the question's default.

use inquire::Text;

use crate::error::{self, Result};
use crate::rewrite::Answers;

/// Values provided up front, e.g. from command-line flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Provided {
    pub package_name: Option<String>,
    pub description: Option<String>,
    pub author_username: Option<String>,
}

/// Defaults applied to empty answers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Defaults {
    pub package_name: String,
    pub description: String,
    pub author_username: String,
}

/// Collect answers, prompting for missing values when `interactive`
///
/// Without interaction, missing values take their defaults. A package name is
/// required either way.
pub fn collect_answers(
    provided: Provided,
    defaults: &Defaults,
    interactive: bool,
) -> Result<Answers> {
    let package_name = match provided.package_name {
        Some(name) => or_default(&name, &defaults.package_name),
        None if interactive => ask("Package Name", &defaults.package_name)?,
        None => defaults.package_name.clone(),
    };
    if package_name.trim().is_empty() {
        return Err(error::prompt::failed(
            "no package name given and no default available",
        ));
    }

    let description = match provided.description {
        Some(description) => or_default(&description, &defaults.description),
        None if interactive => ask("Package Description", &defaults.description)?,
        None => defaults.description.clone(),
    };

    let author_username = match provided.author_username {
        Some(username) => or_default(&username, &defaults.author_username),
        None if interactive => ask("Author Username", &defaults.author_username)?,
        None => defaults.author_username.clone(),
    };

    Ok(Answers {
        package_name,
        description,
        author_username,
    })
}

/// Ask a single question on the terminal
fn ask(question: &str, default: &str) -> Result<String> {
    let mut prompt = Text::new(question);
    if !default.is_empty() {
        prompt = prompt.with_default(default);
    }
    let answer = prompt.prompt()?;
    Ok(or_default(&answer, default))
}

/// Trimmed `answer`, or `default` when the answer is blank
fn or_default(answer: &str, default: &str) -> String {
    let answer = answer.trim();
    if answer.is_empty() {
        default.to_string()
    } else {
        answer.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Defaults {
        Defaults {
            package_name: "skeleton-dir".to_string(),
            description: String::new(),
            author_username: "barista-php".to_string(),
        }
    }

    #[test]
    fn test_provided_values_are_used() {
        let provided = Provided {
            package_name: Some("cool-tool".to_string()),
            description: Some("does things".to_string()),
            author_username: Some("octocat".to_string()),
        };
        let answers = collect_answers(provided, &defaults(), false).unwrap();

        assert_eq!(
            answers,
            Answers {
                package_name: "cool-tool".to_string(),
                description: "does things".to_string(),
                author_username: "octocat".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_values_take_defaults_without_interaction() {
        let answers = collect_answers(Provided::default(), &defaults(), false).unwrap();

        assert_eq!(answers.package_name, "skeleton-dir");
        assert_eq!(answers.description, "");
        assert_eq!(answers.author_username, "barista-php");
    }

    #[test]
    fn test_blank_values_take_defaults() {
        let provided = Provided {
            package_name: Some("  ".to_string()),
            description: None,
            author_username: Some(String::new()),
        };
        let answers = collect_answers(provided, &defaults(), false).unwrap();

        assert_eq!(answers.package_name, "skeleton-dir");
        assert_eq!(answers.author_username, "barista-php");
    }

    #[test]
    fn test_no_package_name_and_no_default_fails() {
        let defaults = Defaults::default();
        let result = collect_answers(Provided::default(), &defaults, false);
        assert!(matches!(
            result,
            Err(crate::error::ConfigureError::PromptFailed { .. })
        ));
    }

    #[test]
    fn test_or_default_trims() {
        assert_eq!(or_default("  cool-tool ", "x"), "cool-tool");
        assert_eq!(or_default("", "x"), "x");
    }
}

//! Block input collection
//!
//! Turns an optional block name plus answers from a [`Prompter`] into a
//! validated [`BlockSpec`]. Nothing here touches the file system.

use crate::block::{
    name_to_title, normalize_block_name, parse_keywords, validate_block_name, BlockIcon,
    BlockSpec,
};
use crate::error::{ParkourError, ParkourResult};
use crate::prompt::{Prompter, TextQuestion};

/// How descriptive fields are obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectMode {
    /// Ask for every field and confirm before returning
    Interactive,
    /// Use defaults for every field; the name must be supplied
    NonInteractive,
}

impl CollectMode {
    /// `--skip-prompts` maps to [`CollectMode::NonInteractive`].
    #[must_use]
    pub const fn from_skip_prompts(skip_prompts: bool) -> Self {
        if skip_prompts {
            Self::NonInteractive
        } else {
            Self::Interactive
        }
    }
}

/// Gathers everything needed to describe one block.
pub struct InputCollector<'p, P: Prompter> {
    prompter: &'p mut P,
    project_slug: String,
    mode: CollectMode,
}

impl<'p, P: Prompter> InputCollector<'p, P> {
    /// Create a collector for blocks owned by `project_slug`.
    pub fn new(prompter: &'p mut P, project_slug: impl Into<String>, mode: CollectMode) -> Self {
        Self {
            prompter,
            project_slug: project_slug.into(),
            mode,
        }
    }

    /// Collect a complete block spec.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - a validation error if the name is missing or malformed
    /// - [`ParkourError::UserAbort`] if the final confirmation is declined
    /// - a prompt error if the terminal interaction fails
    pub fn collect(&mut self, name: Option<&str>) -> ParkourResult<BlockSpec> {
        let name = self.block_name(name)?;
        tracing::debug!(block = %name, mode = ?self.mode, "collecting block data");

        let spec = match self.mode {
            CollectMode::NonInteractive => BlockSpec::new(&name, &self.project_slug)?,
            CollectMode::Interactive => {
                // Fails fast on a bad project slug before asking anything else.
                let base = BlockSpec::new(&name, &self.project_slug)?;
                let spec = self.ask_details(base)?;
                self.confirm(&spec)?;
                spec
            }
        };

        Ok(spec)
    }

    fn block_name(&mut self, supplied: Option<&str>) -> ParkourResult<String> {
        let raw = match (supplied, self.mode) {
            (Some(name), _) => name.to_string(),
            (None, CollectMode::Interactive) => self.prompter.ask_text(&TextQuestion {
                placeholder: Some("hero-section"),
                required: true,
                validate: Some(validate_block_name),
                ..TextQuestion::new("What is the block name?")
            })?,
            (None, CollectMode::NonInteractive) => {
                return Err(ParkourError::validation(
                    "Block name is required when using --skip-prompts",
                ));
            }
        };

        let name = normalize_block_name(&raw);
        validate_block_name(&name)?;
        Ok(name)
    }

    fn ask_details(&mut self, base: BlockSpec) -> ParkourResult<BlockSpec> {
        let default_title = name_to_title(base.name());
        let title = self.prompter.ask_text(&TextQuestion {
            default: Some(&default_title),
            required: true,
            ..TextQuestion::new("Block title (human-readable)")
        })?;

        let description = self.prompter.ask_text(&TextQuestion {
            placeholder: Some("A brief description of what this block does..."),
            ..TextQuestion::new("Block description (optional)")
        })?;

        let category = self.prompter.ask_text(&TextQuestion {
            default: Some(&self.project_slug),
            hint: Some("The category slug (e.g., herdpress, custom, layout)"),
            ..TextQuestion::new("Block category")
        })?;
        let category = if category.is_empty() {
            self.project_slug.clone()
        } else {
            category
        };

        let labels: Vec<&str> = BlockIcon::ALL.iter().map(|icon| icon.label()).collect();
        let choice = self.prompter.ask_choice(
            "Choose an icon",
            &labels,
            BlockIcon::default().index(),
        )?;
        let icon = BlockIcon::ALL.get(choice).copied().unwrap_or_default();

        let keywords = self.prompter.ask_text(&TextQuestion {
            placeholder: Some("accordion, faq, toggle"),
            ..TextQuestion::new("Keywords (comma-separated, optional)")
        })?;

        let include_script = self.prompter.ask_yes_no("Include JavaScript file?", false)?;
        let include_style = self.prompter.ask_yes_no("Include CSS file?", false)?;

        Ok(base
            .with_title(title)
            .with_description(description)
            .with_category(category)
            .with_icon(icon)
            .with_keywords(parse_keywords(&keywords))
            .with_assets(include_script, include_style))
    }

    fn confirm(&mut self, spec: &BlockSpec) -> ParkourResult<()> {
        let summary = [
            ("Name", spec.name().to_string()),
            ("Title", spec.title().to_string()),
            ("Function", spec.function_name()),
        ];

        if self.prompter.confirm(&summary, "Create this block?")? {
            Ok(())
        } else {
            tracing::warn!(block = %spec.name(), "block creation declined");
            Err(ParkourError::UserAbort)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{Answer, ScriptedPrompter};

    fn defaults_then(confirm: bool) -> Vec<Answer> {
        vec![
            Answer::Default,     // title
            Answer::Default,     // description
            Answer::Default,     // category
            Answer::Default,     // icon
            Answer::Default,     // keywords
            Answer::Default,     // script
            Answer::Default,     // style
            Answer::YesNo(confirm),
        ]
    }

    #[test]
    fn test_non_interactive_defaults() {
        let mut prompter = ScriptedPrompter::default();
        let spec = InputCollector::new(&mut prompter, "herdpress", CollectMode::NonInteractive)
            .collect(Some("hero-section"))
            .unwrap();

        assert_eq!(spec.name(), "hero-section");
        assert_eq!(spec.title(), "Hero Section");
        assert_eq!(spec.category(), "herdpress");
        assert_eq!(spec.icon(), BlockIcon::AdminCustomizer);
        assert!(spec.keywords().is_empty());
        assert!(!spec.include_script() && !spec.include_style());
        assert!(prompter.asked().is_empty());
    }

    #[test]
    fn test_non_interactive_requires_name() {
        let mut prompter = ScriptedPrompter::default();
        let err = InputCollector::new(&mut prompter, "herdpress", CollectMode::NonInteractive)
            .collect(None)
            .unwrap_err();

        assert!(matches!(err, ParkourError::Validation(_)));
        assert!(err.to_string().contains("--skip-prompts"));
    }

    #[test]
    fn test_supplied_name_is_normalized() {
        let mut prompter = ScriptedPrompter::default();
        let spec = InputCollector::new(&mut prompter, "herdpress", CollectMode::NonInteractive)
            .collect(Some("  Hero Section "))
            .unwrap();
        assert_eq!(spec.name(), "hero-section");
    }

    #[test]
    fn test_supplied_name_that_normalizes_to_nothing() {
        let mut prompter = ScriptedPrompter::default();
        let err = InputCollector::new(&mut prompter, "herdpress", CollectMode::NonInteractive)
            .collect(Some("   "))
            .unwrap_err();
        assert_eq!(err.to_string(), "Block name is required");
    }

    #[test]
    fn test_interactive_prompts_for_name() {
        let mut answers = vec![Answer::Text("faq-list".into())];
        answers.extend(defaults_then(true));
        let mut prompter = ScriptedPrompter::new(answers);

        let spec = InputCollector::new(&mut prompter, "herdpress", CollectMode::Interactive)
            .collect(None)
            .unwrap();

        assert_eq!(spec.name(), "faq-list");
        assert_eq!(spec.title(), "Faq List");
        assert_eq!(prompter.asked()[0], "What is the block name?");
        assert_eq!(prompter.asked().last().unwrap(), "Create this block?");
        assert_eq!(prompter.remaining(), 0);
    }

    #[test]
    fn test_interactive_rejects_bad_name() {
        let mut prompter = ScriptedPrompter::new([Answer::Text("FAQ list!".into())]);
        let err = InputCollector::new(&mut prompter, "herdpress", CollectMode::Interactive)
            .collect(None)
            .unwrap_err();
        assert!(matches!(err, ParkourError::Validation(_)));
    }

    #[test]
    fn test_interactive_custom_answers() {
        let mut prompter = ScriptedPrompter::new([
            Answer::Text("Big Hero".into()),
            Answer::Text("Top of the page".into()),
            Answer::Text("layout".into()),
            Answer::Choice(2),
            Answer::Text("accordion, faq, toggle".into()),
            Answer::YesNo(true),
            Answer::YesNo(false),
            Answer::YesNo(true),
        ]);

        let spec = InputCollector::new(&mut prompter, "herdpress", CollectMode::Interactive)
            .collect(Some("hero-section"))
            .unwrap();

        assert_eq!(spec.title(), "Big Hero");
        assert_eq!(spec.description(), "Top of the page");
        assert_eq!(spec.category(), "layout");
        assert_eq!(spec.icon(), BlockIcon::GridView);
        assert_eq!(spec.keywords(), ["accordion", "faq", "toggle"]);
        assert!(spec.include_script());
        assert!(!spec.include_style());
        assert_eq!(spec.function_name(), "herdpress_hero_section_block");
    }

    #[test]
    fn test_declined_confirmation_aborts() {
        let mut prompter = ScriptedPrompter::new(defaults_then(false));
        let err = InputCollector::new(&mut prompter, "herdpress", CollectMode::Interactive)
            .collect(Some("hero-section"))
            .unwrap_err();
        assert!(err.is_abort());
    }

    #[test]
    fn test_bad_project_slug_fails_before_prompting() {
        let mut prompter = ScriptedPrompter::default();
        let err = InputCollector::new(&mut prompter, "my-theme", CollectMode::Interactive)
            .collect(Some("hero"))
            .unwrap_err();
        assert!(matches!(err, ParkourError::Validation(_)));
        assert!(prompter.asked().is_empty());
    }
}

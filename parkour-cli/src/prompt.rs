//! Interactive prompting
//!
//! The collector only talks to a [`Prompter`], so it can be driven by the
//! terminal or by a queue of scripted answers.

use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::collections::VecDeque;

use crate::error::{ParkourError, ParkourResult};

/// Validation hook run against text input before it is accepted.
pub type TextValidator = fn(&str) -> ParkourResult<()>;

/// A free-text question.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextQuestion<'a> {
    /// Question shown to the user
    pub label: &'a str,
    /// Value used when the user just presses enter
    pub default: Option<&'a str>,
    /// Example value shown next to the prompt
    pub placeholder: Option<&'a str>,
    /// Extra guidance printed before the prompt
    pub hint: Option<&'a str>,
    /// Reject empty answers
    pub required: bool,
    /// Reject answers this returns an error for
    pub validate: Option<TextValidator>,
}

impl<'a> TextQuestion<'a> {
    /// Optional question with no default.
    #[must_use]
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            ..Self::default()
        }
    }

    /// Check an answer against `required` and `validate`.
    ///
    /// # Errors
    ///
    /// Returns a validation error describing why the answer was rejected.
    pub fn check(&self, answer: &str) -> ParkourResult<()> {
        check_answer(self.label, self.required, self.validate, answer)
    }
}

fn check_answer(
    label: &str,
    required: bool,
    validate: Option<TextValidator>,
    answer: &str,
) -> ParkourResult<()> {
    if required && answer.trim().is_empty() {
        return Err(ParkourError::validation(format!(
            "{} is required",
            label.trim_end_matches('?')
        )));
    }
    validate.map_or(Ok(()), |validate| validate(answer))
}

/// Capability interface for the questions the collector asks.
pub trait Prompter {
    /// Ask for a line of text.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal interaction fails.
    fn ask_text(&mut self, question: &TextQuestion<'_>) -> ParkourResult<String>;

    /// Ask the user to pick one of `options`, returning its index.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal interaction fails.
    fn ask_choice(&mut self, label: &str, options: &[&str], default: usize) -> ParkourResult<usize>;

    /// Ask a yes/no question.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal interaction fails.
    fn ask_yes_no(&mut self, label: &str, default: bool) -> ParkourResult<bool>;

    /// Present `summary` and ask for final confirmation.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal interaction fails.
    fn confirm(&mut self, summary: &[(&str, String)], label: &str) -> ParkourResult<bool>;
}

/// [`Prompter`] backed by the user's terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    /// Create a prompter using the colorful dialoguer theme.
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn ask_text(&mut self, question: &TextQuestion<'_>) -> ParkourResult<String> {
        if let Some(hint) = question.hint {
            println!("  {}", style(hint).dim());
        }

        let prompt = match question.placeholder {
            Some(placeholder) => format!("{} {}", question.label, style(format!("({placeholder})")).dim()),
            None => question.label.to_string(),
        };

        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(!question.required);
        if let Some(default) = question.default {
            input = input.default(default.to_string());
        }

        let label = question.label.to_string();
        let (required, validate) = (question.required, question.validate);
        let answer = input
            .validate_with(move |value: &String| -> Result<(), String> {
                check_answer(&label, required, validate, value).map_err(|e| e.to_string())
            })
            .interact_text()?;

        Ok(answer.trim().to_string())
    }

    fn ask_choice(&mut self, label: &str, options: &[&str], default: usize) -> ParkourResult<usize> {
        let selection = Select::with_theme(&self.theme)
            .with_prompt(label)
            .items(options)
            .default(default)
            .interact()?;
        Ok(selection)
    }

    fn ask_yes_no(&mut self, label: &str, default: bool) -> ParkourResult<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(label)
            .default(default)
            .interact()?;
        Ok(answer)
    }

    fn confirm(&mut self, summary: &[(&str, String)], label: &str) -> ParkourResult<bool> {
        println!();
        println!("{}", style("📦 Block Summary:").bold());
        for (key, value) in summary {
            println!("  {} {}", style(format!("{key}:")).dim(), style(value).cyan());
        }
        println!();

        self.ask_yes_no(label, true)
    }
}

/// One queued answer for a [`ScriptedPrompter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Accept the question's default
    Default,
    /// Type this text
    Text(String),
    /// Pick the option at this index
    Choice(usize),
    /// Answer yes or no
    YesNo(bool),
}

/// [`Prompter`] that replays queued answers and records every question asked.
///
/// Rejected text answers surface as the validator's error instead of
/// re-prompting.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    /// Queue `answers` in the order the questions will be asked.
    #[must_use]
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Labels of every question asked so far
    #[must_use]
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Answers not yet consumed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, label: &str) -> ParkourResult<Answer> {
        self.asked.push(label.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| ParkourError::Prompt(format!("no scripted answer for '{label}'")))
    }

    fn unexpected(label: &str, answer: &Answer) -> ParkourError {
        ParkourError::Prompt(format!("scripted answer {answer:?} does not fit '{label}'"))
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_text(&mut self, question: &TextQuestion<'_>) -> ParkourResult<String> {
        let answer = match self.next(question.label)? {
            Answer::Default => question.default.unwrap_or_default().to_string(),
            Answer::Text(text) => text.trim().to_string(),
            other => return Err(Self::unexpected(question.label, &other)),
        };
        question.check(&answer)?;
        Ok(answer)
    }

    fn ask_choice(&mut self, label: &str, options: &[&str], default: usize) -> ParkourResult<usize> {
        match self.next(label)? {
            Answer::Default => Ok(default),
            Answer::Choice(index) if index < options.len() => Ok(index),
            other => Err(Self::unexpected(label, &other)),
        }
    }

    fn ask_yes_no(&mut self, label: &str, default: bool) -> ParkourResult<bool> {
        match self.next(label)? {
            Answer::Default => Ok(default),
            Answer::YesNo(answer) => Ok(answer),
            other => Err(Self::unexpected(label, &other)),
        }
    }

    fn confirm(&mut self, _summary: &[(&str, String)], label: &str) -> ParkourResult<bool> {
        self.ask_yes_no(label, true)
    }
}

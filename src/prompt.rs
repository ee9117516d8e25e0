//! User input and interaction handling.
//! The generator never talks to a terminal directly; it goes through the
//! `Prompter` trait, implemented by dialoguer for real runs and by a
//! scripted fixed-answer stub for non-interactive runs and tests.

use crate::error::{Error, Result};
use dialoguer::{Confirm, Input, Select};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Synchronous prompting capability, one method per question shape.
pub trait Prompter {
    /// Asks for a free-form string value.
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String>;

    /// Asks a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;

    /// Asks the user to pick one of `items`; returns the chosen index.
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;
}

/// Terminal-backed prompter.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .default(default)
            .items(items)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

/// Fixed-answer prompter for non-interactive runs.
///
/// Each method pops its next scripted answer. An exhausted queue is an
/// error rather than a hang; a non-interactive caller must script every
/// answer the run will ask for.
pub struct ScriptedPrompter {
    inputs: RefCell<VecDeque<String>>,
    confirms: RefCell<VecDeque<bool>>,
    selections: RefCell<VecDeque<usize>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self {
            inputs: RefCell::new(VecDeque::new()),
            confirms: RefCell::new(VecDeque::new()),
            selections: RefCell::new(VecDeque::new()),
        }
    }

    pub fn with_input(self, answer: &str) -> Self {
        self.inputs.borrow_mut().push_back(answer.to_string());
        self
    }

    pub fn with_confirm(self, answer: bool) -> Self {
        self.confirms.borrow_mut().push_back(answer);
        self
    }

    pub fn with_selection(self, answer: usize) -> Self {
        self.selections.borrow_mut().push_back(answer);
        self
    }
}

impl Default for ScriptedPrompter {
    fn default() -> Self {
        ScriptedPrompter::new()
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str, _default: Option<&str>) -> Result<String> {
        self.inputs.borrow_mut().pop_front().ok_or_else(|| {
            Error::PromptError(format!("no scripted answer left for: {}", prompt))
        })
    }

    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool> {
        self.confirms.borrow_mut().pop_front().ok_or_else(|| {
            Error::PromptError(format!("no scripted answer left for: {}", prompt))
        })
    }

    fn select(&self, prompt: &str, _items: &[&str], _default: usize) -> Result<usize> {
        self.selections.borrow_mut().pop_front().ok_or_else(|| {
            Error::PromptError(format!("no scripted answer left for: {}", prompt))
        })
    }
}

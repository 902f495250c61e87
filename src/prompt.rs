//! User input and interaction handling.
//! The [`Prompter`] trait keeps the answer collection independent from the
//! terminal so it can be driven by scripted answers in tests.

use dialoguer::{Confirm, Input, Select};

use crate::error::Result;

pub trait Prompter {
    /// Asks for free-form text, offering `default`.
    fn input(&self, prompt: &str, default: String) -> Result<String>;

    /// Asks to pick one of `choices`; returns the selected index.
    fn select(&self, prompt: &str, choices: &[&str], default: usize) -> Result<usize>;

    /// Asks a yes/no question. Returns `true` without asking when `skip` is set.
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool>;
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: String) -> Result<String> {
        Ok(Input::new().with_prompt(prompt).default(default).interact_text()?)
    }

    fn select(&self, prompt: &str, choices: &[&str], default: usize) -> Result<usize> {
        Ok(Select::new().with_prompt(prompt).default(default).items(choices).interact()?)
    }

    fn confirm(&self, skip: bool, prompt: String) -> Result<bool> {
        if skip {
            return Ok(true);
        }
        Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
    }
}

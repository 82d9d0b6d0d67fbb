use crate::error::Result;

use dialoguer::Confirm;

/// Answers the yes/no questions asked before anything is written
pub trait Confirmer {
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Asks on the terminal, answering yes on empty input
pub struct TerminalConfirmer {
    skip: bool,
}

impl TerminalConfirmer {
    /// With `skip` set every question is accepted without prompting.
    pub fn new(skip: bool) -> Self {
        Self { skip }
    }
}

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        confirm(self.skip, prompt.to_string())
    }
}

/// Asks a yes/no question, answering yes on empty input.
///
/// Returns `Ok(true)` without prompting when `skip` is set.
pub fn confirm(skip: bool, prompt: String) -> Result<bool> {
    if skip {
        return Ok(true);
    }
    Ok(Confirm::new().with_prompt(prompt).default(true).interact()?)
}

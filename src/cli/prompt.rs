//! Interactive prompts for connection details
//!
//! Values still missing after the config file, the environment and the
//! command line are asked for on the terminal.

use crate::config::{secret_string, PiiScoutConfig};
use anyhow::Context;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password};

/// Source of interactive answers
pub trait Prompter {
    /// Asks for a visible value
    fn text(&mut self, prompt: &str) -> anyhow::Result<String>;

    /// Asks for a hidden value
    fn secret(&mut self, prompt: &str) -> anyhow::Result<String>;
}

/// Terminal prompter backed by dialoguer
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    /// Create a new terminal prompter
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
    fn text(&mut self, prompt: &str) -> anyhow::Result<String> {
        Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text()
            .with_context(|| format!("Failed to read answer to '{prompt}'"))
    }

    fn secret(&mut self, prompt: &str) -> anyhow::Result<String> {
        Password::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .with_context(|| format!("Failed to read answer to '{prompt}'"))
    }
}

/// Prompts for host, user, password and keyword list when they are unset
///
/// Returns the names of the settings that were prompted for.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read.
pub fn fill_missing(
    config: &mut PiiScoutConfig,
    prompter: &mut dyn Prompter,
) -> anyhow::Result<Vec<&'static str>> {
    let dialect = config.connection.dialect;
    let mut prompted = Vec::new();

    if config.connection.host.trim().is_empty() {
        config.connection.host = prompter
            .text(&format!("Enter the {dialect} server hostname"))?
            .trim()
            .to_string();
        prompted.push("connection.host");
    }

    if config.connection.user.trim().is_empty() {
        config.connection.user = prompter
            .text(&format!("Enter the {dialect} username"))?
            .trim()
            .to_string();
        prompted.push("connection.user");
    }

    if config.connection.password.is_none() {
        let password = prompter.secret(&format!("Enter the {dialect} password"))?;
        config.connection.password = Some(secret_string(password));
        prompted.push("connection.password");
    }

    if config
        .scan
        .keywords_path
        .as_deref()
        .map_or(true, |p| p.trim().is_empty())
    {
        let path = prompter.text("Enter the keyword list file name")?;
        config.scan.keywords_path = Some(path.trim().to_string());
        prompted.push("scan.keywords_path");
    }

    Ok(prompted)
}

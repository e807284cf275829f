use crate::cloud::CloudSession;
use anyhow::{Context, Result};

/// How the deployer asks the user to confirm destructive steps
pub trait Prompter {
    fn confirm(&self, message: &str, default: bool) -> Result<bool>;
}

/// Never asks; always takes the default answer
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrompt;

impl Prompter for NoPrompt {
    fn confirm(&self, _message: &str, default: bool) -> Result<bool> {
        Ok(default)
    }
}

/// Asks on the terminal, falling back to the default without a TTY
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    fn is_tty() -> bool {
        use std::io::IsTerminal;
        std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        if !Self::is_tty() {
            return Ok(default);
        }

        dialoguer::Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact()
            .context("Failed to read confirmation")
    }
}

/// Deployment engine entry point; owns its session
pub struct Deployer {
    session: CloudSession,
    prompter: Box<dyn Prompter>,
}

impl Deployer {
    pub fn session(&self) -> &CloudSession {
        &self.session
    }

    pub fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        self.prompter.confirm(message, default)
    }
}

pub fn create_default_deployer(session: CloudSession, prompter: Box<dyn Prompter>) -> Deployer {
    tracing::debug!(user_agent = %session.user_agent(), "Creating default deployer");
    Deployer { session, prompter }
}

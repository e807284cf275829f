//! Engines that consume a session or a resolved config

pub mod deployer;
pub mod logs;
pub mod packager;

pub use deployer::{Deployer, NoPrompt, Prompter, TerminalPrompter, create_default_deployer};
pub use logs::{LogRetriever, LogRetrieverError};
pub use packager::{AppPackager, create_app_packager};

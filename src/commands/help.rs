// src/commands/help.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, Reply};

/// Renders the usage line of every registered verb. The lines are captured
/// at registry construction time, so the listing always matches what is
/// actually wired up.
pub struct HelpCommand {
    usages: Vec<String>,
}

impl HelpCommand {
    pub const USAGE: &'static str = "/help - this list";

    pub fn new(usages: Vec<String>) -> Self {
        Self { usages }
    }
}

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn usage(&self) -> &'static str {
        Self::USAGE
    }

    async fn execute(&self, _ctx: CommandContext<'_>) -> Reply {
        Reply::success(format!("Available commands:\n{}", self.usages.join("\n")))
    }
}

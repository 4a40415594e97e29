// src/commands/cd.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, Reply};
use crate::fs::FsError;

pub struct CdCommand;

#[async_trait]
impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn usage(&self) -> &'static str {
        "/cd <name|../> - enter a directory, or go up one level"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Reply {
        let Some(segment) = ctx.args.first() else {
            return Reply::failure(format!("Missing directory name.\nUsage: {}", self.usage()));
        };

        match ctx.session.change_directory(segment) {
            Ok(()) => Reply::success(format!("Now in {}.", ctx.session.current_path())),
            // Informational, not an error: there is simply nowhere to go.
            Err(FsError::AtRoot) => Reply::success("Already at the root directory."),
            Err(e) => Reply::failure(e.to_string()),
        }
    }
}

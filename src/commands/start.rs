// src/commands/start.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, Reply};

/// First-contact greeting. The session itself is created lazily by the
/// store before any verb runs, so this only has to say hello.
pub struct StartCommand;

#[async_trait]
impl Command for StartCommand {
    fn name(&self) -> &'static str {
        "start"
    }

    fn usage(&self) -> &'static str {
        "/start - greeting and a short introduction"
    }

    async fn execute(&self, _ctx: CommandContext<'_>) -> Reply {
        Reply::success(
            "Hello! I'm a bot that keeps a private file system for you.\n\
             Use /mkdir, /cd and /ls to move around, /touch to upload a file, \
             and /get to fetch one back.\n\
             /history shows your past commands and uploads ('/history full' \
             re-sends the files). /help lists everything.",
        )
    }
}

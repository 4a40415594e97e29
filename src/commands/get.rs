// src/commands/get.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, Reply};

pub struct GetCommand;

#[async_trait]
impl Command for GetCommand {
    fn name(&self) -> &'static str {
        "get"
    }

    fn usage(&self) -> &'static str {
        "/get <file> - fetch a file from this directory"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Reply {
        let Some(file_name) = ctx.args.first() else {
            return Reply::failure(format!("Missing file name.\nUsage: {}", self.usage()));
        };

        match ctx.session.get_file(file_name) {
            Ok(blob) => Reply::with_forward(format!("Sending '{}'.", file_name), vec![blob]),
            Err(e) => Reply::failure(e.to_string()),
        }
    }
}

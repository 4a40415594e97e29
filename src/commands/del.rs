// src/commands/del.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, Reply};
use crate::fs::EntryKind;

pub struct DelCommand;

#[async_trait]
impl Command for DelCommand {
    fn name(&self) -> &'static str {
        "del"
    }

    fn usage(&self) -> &'static str {
        "/del <name> - delete a file, or a directory with everything in it"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Reply {
        let Some(name) = ctx.args.first() else {
            return Reply::failure(format!("Missing name.\nUsage: {}", self.usage()));
        };

        match ctx.session.delete_item(name) {
            Ok(EntryKind::File) => Reply::success(format!("File '{}' deleted.", name)),
            Ok(EntryKind::Directory) => {
                Reply::success(format!("Directory '{}' and its contents deleted.", name))
            }
            Err(e) => Reply::failure(e.to_string()),
        }
    }
}

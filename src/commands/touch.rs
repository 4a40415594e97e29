// src/commands/touch.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, Reply};

/// Arms the upload handshake: the next document the user sends lands in the
/// working directory. The document itself arrives as a separate transport
/// event, routed by the dispatcher.
pub struct TouchCommand;

#[async_trait]
impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn usage(&self) -> &'static str {
        "/touch - upload the next file you send into this directory"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Reply {
        ctx.session.begin_upload();
        Reply::success("Please upload a file.")
    }
}

// src/commands/ls.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, Reply};

pub struct LsCommand;

#[async_trait]
impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn usage(&self) -> &'static str {
        "/ls - list this directory"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Reply {
        let listing = ctx.session.list_directory();
        if listing.is_empty() {
            return Reply::success(format!("{} is empty.", ctx.session.current_path()));
        }

        let mut lines = Vec::with_capacity(listing.dirs.len() + listing.files.len());
        for dir in &listing.dirs {
            lines.push(format!("\u{1F4C1} {}", dir));
        }
        for file in &listing.files {
            lines.push(format!("\u{1F4C4} {}", file));
        }
        Reply::success(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::BlobRef;
    use crate::session::Session;

    async fn run(session: &mut Session) -> Reply {
        LsCommand.execute(CommandContext { args: &[], session }).await
    }

    #[tokio::test]
    async fn test_ls_empty_root() {
        let mut session = Session::default();
        let reply = run(&mut session).await;
        assert!(reply.is_success());
        assert_eq!(reply.text, "/ is empty.");
    }

    #[tokio::test]
    async fn test_ls_dirs_before_files() {
        let mut session = Session::default();
        session.register_file("notes.txt", BlobRef::from("b1")).unwrap();
        session.make_directory("docs").unwrap();

        let reply = run(&mut session).await;
        assert_eq!(reply.text, "\u{1F4C1} docs\n\u{1F4C4} notes.txt");
    }
}

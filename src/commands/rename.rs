// src/commands/rename.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, Reply};

pub struct RenameCommand;

#[async_trait]
impl Command for RenameCommand {
    fn name(&self) -> &'static str {
        "rename"
    }

    fn usage(&self) -> &'static str {
        "/rename <old> <new> - rename a file or directory"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Reply {
        let (Some(old_name), Some(new_name)) = (ctx.args.first(), ctx.args.get(1)) else {
            return Reply::failure(format!("Missing name(s).\nUsage: {}", self.usage()));
        };

        match ctx.session.rename_item(old_name, new_name) {
            Ok(_) => Reply::success(format!("Renamed '{}' to '{}'.", old_name, new_name)),
            Err(e) => Reply::failure(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::BlobRef;
    use crate::session::Session;

    async fn run(session: &mut Session, args: &[&str]) -> Reply {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        RenameCommand.execute(CommandContext { args: &args, session }).await
    }

    #[tokio::test]
    async fn test_rename_file() {
        let mut session = Session::default();
        session.register_file("old.txt", BlobRef::from("b1")).unwrap();

        let reply = run(&mut session, &["old.txt", "new.txt"]).await;
        assert!(reply.is_success());
        assert_eq!(session.list_directory().files, vec!["new.txt"]);
    }

    #[tokio::test]
    async fn test_rename_missing_source() {
        let mut session = Session::default();
        let reply = run(&mut session, &["old", "old"]).await;
        assert!(!reply.is_success());
        assert!(reply.text.contains("no such file or directory"));
    }

    #[tokio::test]
    async fn test_rename_collision() {
        let mut session = Session::default();
        session.make_directory("a").unwrap();
        session.make_directory("b").unwrap();

        let reply = run(&mut session, &["a", "b"]).await;
        assert!(!reply.is_success());
        assert!(reply.text.contains("already in use"));
    }

    #[tokio::test]
    async fn test_rename_missing_operand() {
        let mut session = Session::default();
        let reply = run(&mut session, &["only-one"]).await;
        assert!(!reply.is_success());
        assert!(reply.text.contains("Usage"));
    }
}

// src/commands/mkdir.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, Reply};

pub struct MkdirCommand;

#[async_trait]
impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn usage(&self) -> &'static str {
        "/mkdir <name> - create a directory here"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Reply {
        let Some(name) = ctx.args.first() else {
            return Reply::failure(format!("Missing directory name.\nUsage: {}", self.usage()));
        };

        match ctx.session.make_directory(name) {
            Ok(()) => Reply::success(format!("Directory '{}' created.", name)),
            Err(e) => Reply::failure(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    async fn run(session: &mut Session, args: &[&str]) -> Reply {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        MkdirCommand.execute(CommandContext { args: &args, session }).await
    }

    #[tokio::test]
    async fn test_mkdir_creates_directory() {
        let mut session = Session::default();
        let reply = run(&mut session, &["docs"]).await;
        assert!(reply.is_success());
        assert_eq!(session.list_directory().dirs, vec!["docs"]);
    }

    #[tokio::test]
    async fn test_mkdir_duplicate_fails() {
        let mut session = Session::default();
        run(&mut session, &["docs"]).await;
        let reply = run(&mut session, &["docs"]).await;
        assert!(!reply.is_success());
        assert!(reply.text.contains("already in use"));
    }

    #[tokio::test]
    async fn test_mkdir_missing_operand() {
        let mut session = Session::default();
        let reply = run(&mut session, &[]).await;
        assert!(!reply.is_success());
        assert!(reply.text.contains("Usage"));
    }
}

// src/commands/history.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, Reply};
use crate::session::HistoryEvent;

pub struct HistoryCommand;

#[async_trait]
impl Command for HistoryCommand {
    fn name(&self) -> &'static str {
        "history"
    }

    fn usage(&self) -> &'static str {
        "/history [full] - past commands and uploads; 'full' re-sends the files"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Reply {
        let full = ctx
            .args
            .first()
            .is_some_and(|a| a.eq_ignore_ascii_case("full"));

        if ctx.session.history().is_empty() {
            return Reply::success("History is empty.");
        }

        let mut lines = vec!["Command and file history:".to_string()];
        let mut forward = Vec::new();
        for entry in ctx.session.history() {
            let stamp = entry.at.format("%Y-%m-%d %H:%M");
            match &entry.event {
                HistoryEvent::Command(line) => {
                    lines.push(format!("{}  {}", stamp, line));
                }
                HistoryEvent::Upload { file_name, blob } => {
                    lines.push(format!("{}  uploaded '{}'", stamp, file_name));
                    if full {
                        forward.push(blob.clone());
                    }
                }
            }
        }

        Reply::with_forward(lines.join("\n"), forward)
    }
}

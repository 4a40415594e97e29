// src/commands/types.rs
use async_trait::async_trait;
use serde::Serialize;

use crate::fs::BlobRef;
use crate::session::Session;

/// Outcome class of one reply. Informational notices (e.g. navigating up
/// from the root) count as success; only real user-input problems are
/// failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyKind {
    Success,
    Failure,
}

/// What the transport should deliver back to the user: a text message plus
/// any blob references to relay as files.
#[derive(Debug, Clone, Serialize)]
pub struct Reply {
    pub kind: ReplyKind,
    pub text: String,
    pub forward: Vec<BlobRef>,
}

impl Reply {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: ReplyKind::Success, text: text.into(), forward: Vec::new() }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self { kind: ReplyKind::Failure, text: text.into(), forward: Vec::new() }
    }

    pub fn with_forward(text: impl Into<String>, forward: Vec<BlobRef>) -> Self {
        Self { kind: ReplyKind::Success, text: text.into(), forward }
    }

    pub fn is_success(&self) -> bool {
        self.kind == ReplyKind::Success
    }
}

/// Context handed to one verb execution. The dispatcher holds the session
/// mutex for the whole call, so the session is exclusively ours here.
pub struct CommandContext<'a> {
    pub args: &'a [String],
    pub session: &'a mut Session,
}

/// One chat verb.
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;

    /// One-line usage string, rendered by /help.
    fn usage(&self) -> &'static str;

    async fn execute(&self, ctx: CommandContext<'_>) -> Reply;
}

//! File Manager Dispatcher
//!
//! Main entry point for the file manager service. Ties together the
//! session store, the command registry and the upload handshake. The chat
//! transport hands every inbound event here as a (user id, event) pair and
//! delivers the returned reply; it owns message parsing and delivery, the
//! blob store owns the bytes.

use tracing::debug;

use crate::commands::{default_registry, CommandContext, CommandRegistry, Reply};
use crate::fs::BlobRef;
use crate::session::{Limits, SessionStore};

/// Options for creating a file manager.
#[derive(Default)]
pub struct ManagerOptions {
    /// Per-session bounds.
    pub limits: Option<Limits>,
}

/// A document attached to an inbound upload event.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub file_name: String,
    pub blob: BlobRef,
}

/// One inbound transport event.
#[derive(Debug, Clone)]
pub enum Inbound {
    /// A slash command, already split into verb and arguments.
    Command { verb: String, args: Vec<String> },
    /// A document message. `None` when the message carried no usable
    /// document (e.g. a photo where a file was expected).
    Upload { attachment: Option<Attachment> },
}

/// The file manager service.
pub struct FileManager {
    sessions: SessionStore,
    registry: CommandRegistry,
}

impl FileManager {
    pub fn new(options: ManagerOptions) -> Self {
        Self {
            sessions: SessionStore::new(options.limits.unwrap_or_default()),
            registry: default_registry(),
        }
    }

    /// Handle one inbound event for one user and produce the reply.
    ///
    /// The user's session mutex is held for the whole call, so events from
    /// the same user are serialized; different users proceed independently.
    pub async fn execute(&self, user_id: &str, inbound: Inbound) -> Reply {
        let session = self.sessions.get_or_create(user_id).await;
        let mut session = session.lock().await;

        match inbound {
            Inbound::Command { verb, args } => {
                debug!(user = user_id, verb = %verb, "dispatching command");
                match self.registry.get(&verb) {
                    Some(cmd) => {
                        session.record_command(render_command_line(&verb, &args));
                        cmd.execute(CommandContext { args: &args, session: &mut *session }).await
                    }
                    None => Reply::failure(format!("Unknown command '/{}'. Try /help.", verb)),
                }
            }
            Inbound::Upload { attachment } => {
                debug!(user = user_id, "handling document event");
                if !session.take_pending_upload() {
                    // Not a namespace error: the user just never asked.
                    return Reply::success("Use the /touch command to upload a file.");
                }
                match attachment {
                    Some(att) => match session.register_file(&att.file_name, att.blob.clone()) {
                        Ok(()) => {
                            session.record_upload(att.file_name.clone(), att.blob);
                            Reply::success(format!(
                                "File '{}' successfully uploaded.",
                                att.file_name
                            ))
                        }
                        Err(e) => Reply::failure(e.to_string()),
                    },
                    // The pending flag is already spent: one malformed
                    // upload consumes the handshake.
                    None => Reply::failure("Please upload a file (not a photo or video)."),
                }
            }
        }
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.len().await
    }
}

impl Default for FileManager {
    fn default() -> Self {
        Self::new(ManagerOptions::default())
    }
}

fn render_command_line(verb: &str, args: &[String]) -> String {
    if args.is_empty() {
        format!("/{}", verb)
    } else {
        format!("/{} {}", verb, args.join(" "))
    }
}

//! chatfs - a per-user simulated file system for chat bots
//!
//! Each user gets a private, in-memory directory tree manipulated through a
//! small verb set: /mkdir, /cd, /ls, /touch (upload), /get, /del, /rename,
//! plus /start, /help and /history. File content lives behind an external
//! blob store; the tree only holds opaque references and hands them back
//! for forwarding.

pub mod commands;
pub mod fs;
pub mod manager;
pub mod session;

pub use commands::{Reply, ReplyKind};
pub use fs::{BlobRef, FsError, Listing};
pub use manager::{Attachment, FileManager, Inbound, ManagerOptions};
pub use session::{Limits, Session, SessionStore};

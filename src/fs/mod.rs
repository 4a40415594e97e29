// src/fs/mod.rs
pub mod node;
pub mod ops;
pub mod types;

pub use node::{Node, NodeArena, NodeId};
pub use ops::{EntryKind, Lookup, Namespace, PARENT_TOKEN, ROOT_NAME};
pub use types::{BlobRef, FsError, Listing, Result};

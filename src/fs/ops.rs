//! Namespace Operations
//!
//! The operation set over one session's directory tree. Every invariant is
//! enforced here: sibling-name uniqueness across both child maps, subtree
//! teardown on delete, cursor relocation, and the file-before-directory
//! lookup policy shared by get/delete/rename.

use super::node::{Node, NodeArena, NodeId};
use super::types::{BlobRef, FsError, Listing, Result};

/// Token that navigates to the parent directory. The chat surface also
/// spells it with a trailing slash ("../"); both mean the same thing.
pub const PARENT_TOKEN: &str = "..";

/// Name given to every session root.
pub const ROOT_NAME: &str = "/";

/// Result of a name lookup within one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    File(BlobRef),
    Dir(NodeId),
    Missing,
}

/// What kind of entry an operation acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One user's directory tree: the arena plus its root.
#[derive(Debug, Clone)]
pub struct Namespace {
    arena: NodeArena,
    root: NodeId,
}

impl Namespace {
    pub fn new() -> Self {
        let mut arena = NodeArena::new();
        let root = arena.insert(ROOT_NAME, None);
        Self { arena, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.arena[id]
    }

    /// Number of live directories, the root included.
    pub fn dir_count(&self) -> usize {
        self.arena.len()
    }

    /// Look `name` up in `at`. Files shadow directories: get/delete/rename
    /// resolve a name held by both maps to the file entry. Trees built
    /// through these operations never hold such a collision; the priority
    /// exists so a hand-built one degrades predictably.
    pub fn lookup(&self, at: NodeId, name: &str) -> Lookup {
        let node = &self.arena[at];
        if let Some(blob) = node.files.get(name) {
            return Lookup::File(blob.clone());
        }
        if let Some(&id) = node.dirs.get(name) {
            return Lookup::Dir(id);
        }
        Lookup::Missing
    }

    /// Create a subdirectory of `at`. The name must be non-empty, must not
    /// be the parent token, and must not collide with an existing
    /// subdirectory or file.
    pub fn make_directory(&mut self, at: NodeId, name: &str) -> Result<NodeId> {
        validate_name(name)?;
        if self.lookup(at, name) != Lookup::Missing {
            return Err(FsError::AlreadyExists { name: name.to_string() });
        }
        let id = self.arena.insert(name, Some(at));
        self.arena[at].dirs.insert(name.to_string(), id);
        Ok(id)
    }

    /// Resolve one navigation step from `at`: the parent token moves up a
    /// level (`AtRoot` if there is none), anything else must name a
    /// subdirectory. Multi-segment paths are not part of the surface.
    pub fn change_directory(&self, at: NodeId, segment: &str) -> Result<NodeId> {
        if is_parent_token(segment) {
            return self.arena[at].parent.ok_or(FsError::AtRoot);
        }
        match self.lookup(at, segment) {
            Lookup::Dir(id) => Ok(id),
            _ => Err(FsError::NotFound { name: segment.to_string() }),
        }
    }

    /// Contents of `at`: subdirectories first, then files, insertion order.
    pub fn list(&self, at: NodeId) -> Listing {
        let node = &self.arena[at];
        Listing {
            dirs: node.dirs.keys().cloned().collect(),
            files: node.files.keys().cloned().collect(),
        }
    }

    /// Register a file in `at`. Re-registering an existing file name
    /// silently replaces its blob reference; a subdirectory already holding
    /// the name is a collision.
    pub fn insert_file(&mut self, at: NodeId, name: &str, blob: BlobRef) -> Result<()> {
        validate_name(name)?;
        if self.arena[at].dirs.contains_key(name) {
            return Err(FsError::AlreadyExists { name: name.to_string() });
        }
        self.arena[at].files.insert(name.to_string(), blob);
        Ok(())
    }

    /// Fetch the blob reference registered under `name` in `at`.
    pub fn file_blob(&self, at: NodeId, name: &str) -> Result<BlobRef> {
        match self.lookup(at, name) {
            Lookup::File(blob) => Ok(blob),
            _ => Err(FsError::NotFound { name: name.to_string() }),
        }
    }

    /// Delete the entry `name` in `at`, a file taking priority over a
    /// directory of the same name. Deleting a directory frees its whole
    /// subtree. `cursor` is the caller's working position; if it was inside
    /// the deleted subtree the returned cursor is relocated to the deleted
    /// node's parent, the nearest surviving ancestor, so it can never
    /// dangle.
    pub fn remove_entry(
        &mut self,
        at: NodeId,
        name: &str,
        cursor: NodeId,
    ) -> Result<(EntryKind, NodeId)> {
        match self.lookup(at, name) {
            Lookup::File(_) => {
                self.arena[at].files.shift_remove(name);
                Ok((EntryKind::File, cursor))
            }
            Lookup::Dir(id) => {
                let mut subtree = Vec::new();
                self.collect_subtree(id, &mut subtree);

                let cursor = if subtree.contains(&cursor) {
                    // Unreachable through the single-segment verb surface,
                    // where the cursor is always the parent of the deleted
                    // entry; holds for any cursor the core is handed.
                    match self.arena[id].parent {
                        Some(parent) => parent,
                        None => self.root,
                    }
                } else {
                    cursor
                };

                self.arena[at].dirs.shift_remove(name);
                for freed in subtree {
                    self.arena.remove(freed);
                }
                Ok((EntryKind::Directory, cursor))
            }
            Lookup::Missing => Err(FsError::NotFound { name: name.to_string() }),
        }
    }

    /// Rename the entry `old` in `at` to `new`, a file taking priority over
    /// a directory of the same name. Fails if `new` already names either a
    /// subdirectory or a file. A renamed directory keeps its identity and
    /// children; only its name and its key in the parent map change.
    pub fn rename_entry(&mut self, at: NodeId, old: &str, new: &str) -> Result<EntryKind> {
        validate_name(new)?;
        let target = match self.lookup(at, old) {
            Lookup::Missing => return Err(FsError::NotFound { name: old.to_string() }),
            found => found,
        };
        if self.lookup(at, new) != Lookup::Missing {
            return Err(FsError::AlreadyExists { name: new.to_string() });
        }

        match target {
            Lookup::File(_) => {
                let node = &mut self.arena[at];
                if let Some(blob) = node.files.shift_remove(old) {
                    node.files.insert(new.to_string(), blob);
                }
                Ok(EntryKind::File)
            }
            Lookup::Dir(id) => {
                self.arena[at].dirs.shift_remove(old);
                self.arena[at].dirs.insert(new.to_string(), id);
                self.arena[id].name = new.to_string();
                Ok(EntryKind::Directory)
            }
            Lookup::Missing => Err(FsError::NotFound { name: old.to_string() }),
        }
    }

    /// Absolute path of `at`, for prompts and logging.
    pub fn path_of(&self, at: NodeId) -> String {
        let mut segments = Vec::new();
        let mut walk = at;
        while let Some(parent) = self.arena[walk].parent {
            segments.push(self.arena[walk].name.clone());
            walk = parent;
        }
        if segments.is_empty() {
            return ROOT_NAME.to_string();
        }
        segments.reverse();
        format!("/{}", segments.join("/"))
    }

    fn collect_subtree(&self, id: NodeId, out: &mut Vec<NodeId>) {
        out.push(id);
        for &child in self.arena[id].dirs.values() {
            self.collect_subtree(child, out);
        }
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}

fn is_parent_token(segment: &str) -> bool {
    segment == PARENT_TOKEN || segment == "../"
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(FsError::MissingArgument { what: "a name".to_string() });
    }
    // The parent token is the one reserved name; everything else is opaque.
    if is_parent_token(name) {
        return Err(FsError::AlreadyExists { name: name.to_string() });
    }
    Ok(())
}

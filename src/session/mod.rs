//! Per-User Session
//!
//! One session per user identity: the namespace tree, the working-position
//! cursor, the one-shot pending-upload flag, and the command/upload history.
//! Sessions are created lazily by the [`store::SessionStore`] and live for
//! the process lifetime.

pub mod store;

pub use store::SessionStore;

use chrono::{DateTime, Utc};

use crate::fs::{BlobRef, EntryKind, Listing, Namespace, NodeId, Result};

/// Bounds on per-session state.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    /// History entries kept per session; the oldest are dropped first.
    pub max_history: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_history: 1000 }
    }
}

/// One recorded session event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEvent {
    /// A recognized command line, e.g. "/mkdir docs".
    Command(String),
    /// A successful upload and the blob it registered.
    Upload { file_name: String, blob: BlobRef },
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub at: DateTime<Utc>,
    pub event: HistoryEvent,
}

/// A user's private file system plus their position in it.
///
/// All namespace invariants are enforced one layer down in
/// [`Namespace`]; the session contributes the cursor, the upload
/// handshake, and the history log.
pub struct Session {
    ns: Namespace,
    current: NodeId,
    pending_upload: bool,
    history: Vec<HistoryEntry>,
    limits: Limits,
}

impl Session {
    pub fn new(limits: Limits) -> Self {
        let ns = Namespace::new();
        let current = ns.root();
        Self {
            ns,
            current,
            pending_upload: false,
            history: Vec::new(),
            limits,
        }
    }

    /// Absolute path of the working directory.
    pub fn current_path(&self) -> String {
        self.ns.path_of(self.current)
    }

    pub fn make_directory(&mut self, name: &str) -> Result<()> {
        self.ns.make_directory(self.current, name)?;
        Ok(())
    }

    pub fn change_directory(&mut self, segment: &str) -> Result<()> {
        self.current = self.ns.change_directory(self.current, segment)?;
        Ok(())
    }

    pub fn list_directory(&self) -> Listing {
        self.ns.list(self.current)
    }

    /// Arm the upload handshake. Idempotent.
    pub fn begin_upload(&mut self) {
        self.pending_upload = true;
    }

    pub fn upload_pending(&self) -> bool {
        self.pending_upload
    }

    /// Consume the pending-upload flag, returning whether it was set.
    /// One-shot: a single inbound document event, valid or not, spends it.
    pub fn take_pending_upload(&mut self) -> bool {
        std::mem::take(&mut self.pending_upload)
    }

    /// Register a file in the working directory. An existing file of the
    /// same name is silently replaced; a subdirectory holding the name is
    /// a collision.
    pub fn register_file(&mut self, file_name: &str, blob: BlobRef) -> Result<()> {
        self.ns.insert_file(self.current, file_name, blob)
    }

    pub fn get_file(&self, file_name: &str) -> Result<BlobRef> {
        self.ns.file_blob(self.current, file_name)
    }

    pub fn delete_item(&mut self, name: &str) -> Result<EntryKind> {
        let (kind, cursor) = self.ns.remove_entry(self.current, name, self.current)?;
        self.current = cursor;
        Ok(kind)
    }

    pub fn rename_item(&mut self, old_name: &str, new_name: &str) -> Result<EntryKind> {
        self.ns.rename_entry(self.current, old_name, new_name)
    }

    pub fn record_command(&mut self, line: impl Into<String>) {
        self.push_history(HistoryEvent::Command(line.into()));
    }

    pub fn record_upload(&mut self, file_name: impl Into<String>, blob: BlobRef) {
        self.push_history(HistoryEvent::Upload { file_name: file_name.into(), blob });
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    fn push_history(&mut self, event: HistoryEvent) {
        if self.limits.max_history == 0 {
            return;
        }
        if self.history.len() >= self.limits.max_history {
            let excess = self.history.len() + 1 - self.limits.max_history;
            self.history.drain(..excess);
        }
        self.history.push(HistoryEntry { at: Utc::now(), event });
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Limits::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::FsError;

    // Scenario: mkdir docs, cd docs, ls -> empty.
    #[test]
    fn test_fresh_directory_lists_empty() {
        let mut session = Session::default();
        session.make_directory("docs").unwrap();
        session.change_directory("docs").unwrap();
        assert!(session.list_directory().is_empty());
        assert_eq!(session.current_path(), "/docs");
    }

    #[test]
    fn test_fresh_session_lists_empty() {
        let session = Session::default();
        assert!(session.list_directory().is_empty());
        assert_eq!(session.current_path(), "/");
    }

    // Scenario: upload lands in the working directory, not its parent.
    #[test]
    fn test_file_belongs_to_upload_directory() {
        let mut session = Session::default();
        session.make_directory("docs").unwrap();
        session.change_directory("docs").unwrap();

        session.begin_upload();
        assert!(session.take_pending_upload());
        session.register_file("report.pdf", BlobRef::from("B1")).unwrap();

        session.change_directory("../").unwrap();
        assert_eq!(
            session.get_file("report.pdf"),
            Err(FsError::NotFound { name: "report.pdf".to_string() })
        );

        session.change_directory("docs").unwrap();
        assert_eq!(session.get_file("report.pdf").unwrap(), BlobRef::from("B1"));
    }

    // Scenario: cd into a directory, back out, delete it; cursor stays valid.
    #[test]
    fn test_delete_after_leaving_keeps_cursor_at_root() {
        let mut session = Session::default();
        session.make_directory("a").unwrap();
        session.change_directory("a").unwrap();
        session.change_directory("../").unwrap();

        assert_eq!(session.delete_item("a").unwrap(), EntryKind::Directory);
        assert_eq!(session.current_path(), "/");
        assert!(session.list_directory().is_empty());
    }

    #[test]
    fn test_pending_upload_is_one_shot() {
        let mut session = Session::default();
        assert!(!session.take_pending_upload());

        session.begin_upload();
        session.begin_upload(); // idempotent
        assert!(session.upload_pending());
        assert!(session.take_pending_upload());
        assert!(!session.take_pending_upload());
    }

    #[test]
    fn test_history_records_in_order() {
        let mut session = Session::default();
        session.record_command("/start");
        session.record_command("/touch");
        session.record_upload("report.pdf", BlobRef::from("B1"));

        let events: Vec<_> = session.history().iter().map(|e| e.event.clone()).collect();
        assert_eq!(
            events,
            vec![
                HistoryEvent::Command("/start".to_string()),
                HistoryEvent::Command("/touch".to_string()),
                HistoryEvent::Upload {
                    file_name: "report.pdf".to_string(),
                    blob: BlobRef::from("B1"),
                },
            ]
        );
    }

    #[test]
    fn test_history_drops_oldest_beyond_limit() {
        let mut session = Session::new(Limits { max_history: 3 });
        for i in 0..5 {
            session.record_command(format!("/cmd{}", i));
        }
        let events: Vec<_> = session.history().iter().map(|e| e.event.clone()).collect();
        assert_eq!(
            events,
            vec![
                HistoryEvent::Command("/cmd2".to_string()),
                HistoryEvent::Command("/cmd3".to_string()),
                HistoryEvent::Command("/cmd4".to_string()),
            ]
        );
    }
}

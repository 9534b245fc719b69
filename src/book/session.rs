//! Scoped auto-save sessions.

use super::AddressBook;
use crate::error::BookResult;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};
use tracing::error;

/// Snapshot file used when a session is started without an explicit path.
pub const DEFAULT_SNAPSHOT_FILE: &str = "SomeAddressBook.bin";

/// An address book bound to its snapshot file for the duration of a scope.
///
/// The book is saved on every exit path: explicitly through
/// [`close`](Self::close), or from `Drop` otherwise. `Drop` cannot
/// surface errors, so a failed drop-time save is only reported through
/// `tracing::error`; call [`close`](Self::close) when the outcome
/// matters. This is auto-save, not a transaction: whatever the book
/// holds at exit is what gets persisted.
///
/// The session derefs to [`AddressBook`], so every book operation is
/// available on it directly.
pub struct BookSession {
    book: AddressBook,
    path: PathBuf,
    closed: bool,
}

impl BookSession {
    /// Start a session over an empty book, saving to
    /// [`DEFAULT_SNAPSHOT_FILE`].
    pub fn new() -> Self {
        Self::with_book(AddressBook::new(), DEFAULT_SNAPSHOT_FILE)
    }

    /// Start a session over an empty book, saving to `path`.
    pub fn create(path: impl AsRef<Path>) -> Self {
        Self::with_book(AddressBook::new(), path)
    }

    /// Start a session over the book loaded from `path`, saving back
    /// there on exit.
    pub fn open(path: impl AsRef<Path>) -> BookResult<Self> {
        Ok(Self::with_book(AddressBook::open(&path)?, path))
    }

    fn with_book(book: AddressBook, path: impl AsRef<Path>) -> Self {
        Self {
            book,
            path: path.as_ref().to_path_buf(),
            closed: false,
        }
    }

    /// The snapshot path this session saves to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Save and end the session, surfacing any save error.
    pub fn close(mut self) -> BookResult<()> {
        self.closed = true;
        self.book.save(&self.path)
    }
}

impl Default for BookSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for BookSession {
    type Target = AddressBook;

    fn deref(&self) -> &AddressBook {
        &self.book
    }
}

impl DerefMut for BookSession {
    fn deref_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }
}

impl Drop for BookSession {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        if let Err(e) = self.book.save(&self.path) {
            error!(
                path = %self.path.display(),
                "failed to save address book on session exit: {}",
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    #[test]
    fn test_session_saves_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.bin");

        {
            let mut session = BookSession::create(&path);
            let mut record = Record::new("Kate");
            record.add_phone("1234567890").unwrap();
            session.add_record(record);
        }

        let book = AddressBook::open(&path).unwrap();
        assert_eq!(book.len(), 1);
        assert!(book.get("Kate").is_some());
    }

    #[test]
    fn test_session_close_surfaces_errors() {
        let dir = tempfile::tempdir().unwrap();
        let session = BookSession::create(dir.path().join("book.bin"));
        assert!(session.close().is_ok());

        let session = BookSession::create(dir.path().join("no/such/dir/book.bin"));
        assert!(session.close().is_err());
    }

    #[test]
    fn test_session_open_resumes_existing_book() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.bin");

        {
            let mut session = BookSession::create(&path);
            session.add_record(Record::new("Kate"));
        }
        {
            let mut session = BookSession::open(&path).unwrap();
            assert_eq!(session.len(), 1);
            session.add_record(Record::new("Don"));
        }

        let book = AddressBook::open(&path).unwrap();
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_session_default_path() {
        let session = BookSession::default();
        assert_eq!(session.path(), Path::new(DEFAULT_SNAPSHOT_FILE));
        // End the session without touching the working directory.
        std::mem::forget(session);
    }
}

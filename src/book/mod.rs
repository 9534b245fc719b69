//! The address book: a keyed collection of records with search, paging,
//! and whole-book persistence.

pub mod session;
pub mod snapshot;

pub use session::{BookSession, DEFAULT_SNAPSHOT_FILE};
pub use snapshot::{BookSnapshot, RecordSnapshot};

use crate::error::{BookError, BookResult};
use crate::models::Record;
use indexmap::map::Values;
use indexmap::IndexMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A collection of contact records keyed by contact name.
///
/// Keys are unique; inserting a record under an existing name silently
/// replaces the old one. Iteration follows insertion order, which makes
/// paging deterministic. The mapping itself is never exposed, so every
/// mutation goes through the book's own operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an address book pre-populated from a snapshot file.
    ///
    /// # Errors
    ///
    /// Fails with `Io` if the file cannot be read and `CorruptSnapshot`
    /// if its contents do not decode into records.
    pub fn open(path: impl AsRef<Path>) -> BookResult<Self> {
        let mut book = Self::new();
        book.load(path)?;
        Ok(book)
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert a record, keyed by its name. An existing record under the
    /// same name is replaced, not merged.
    pub fn add_record(&mut self, record: Record) {
        self.records
            .insert(record.name().as_str().to_string(), record);
    }

    /// Look up a record by exact name.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Search records by substring, returning display strings in
    /// iteration order.
    ///
    /// The query matches case-insensitively against names and exactly
    /// against phone values. A name match suppresses the phone scan, so
    /// each record appears at most once.
    pub fn find(&self, query: &str) -> Vec<String> {
        let query_lower = query.to_lowercase();
        let mut matches = Vec::new();

        for (name, record) in &self.records {
            if name.to_lowercase().contains(&query_lower) {
                matches.push(record.to_string());
            } else if record.phones().iter().any(|p| p.as_str().contains(query)) {
                matches.push(record.to_string());
            }
        }

        matches
    }

    /// Remove the record stored under `name`. Removing an absent name is
    /// a silent no-op.
    pub fn delete(&mut self, name: &str) {
        // shift_remove keeps the iteration order of the remaining records
        self.records.shift_remove(name);
    }

    /// Page through the book: a lazy iterator yielding one newline-joined
    /// string of `page_size` record renderings at a time, in iteration
    /// order. The last page may be shorter.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidPageSize` when `page_size` is zero.
    pub fn pages(&self, page_size: usize) -> BookResult<Pages<'_>> {
        if page_size == 0 {
            return Err(BookError::InvalidPageSize);
        }
        Ok(Pages {
            records: self.records.values(),
            page_size,
        })
    }

    /// Persist the whole book as a snapshot, overwriting `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> BookResult<()> {
        let path = path.as_ref();
        let snapshot = BookSnapshot::capture(self.iter());
        let data = serde_json::to_vec(&snapshot)?;
        fs::write(path, data)?;
        debug!(
            records = self.len(),
            path = %path.display(),
            "saved address book snapshot"
        );
        Ok(())
    }

    /// Replace the book's entire contents with a previously saved
    /// snapshot.
    ///
    /// # Errors
    ///
    /// Fails with `Io` if the file cannot be read and `CorruptSnapshot`
    /// if its contents do not decode; the in-memory book is left
    /// untouched on failure.
    pub fn load(&mut self, path: impl AsRef<Path>) -> BookResult<()> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        let snapshot: BookSnapshot = serde_json::from_slice(&data)?;
        self.records = snapshot.into_records();
        debug!(
            records = self.len(),
            path = %path.display(),
            "loaded address book snapshot"
        );
        Ok(())
    }
}

/// Lazy, one-shot iterator over record pages.
///
/// Produced by [`AddressBook::pages`]. Each item is the newline-joined
/// display strings of one chunk of records.
pub struct Pages<'a> {
    records: Values<'a, String, Record>,
    page_size: usize,
}

impl Iterator for Pages<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let page: Vec<String> = self
            .records
            .by_ref()
            .take(self.page_size)
            .map(|record| record.to_string())
            .collect();

        if page.is_empty() {
            None
        } else {
            Some(page.join("\n"))
        }
    }
}

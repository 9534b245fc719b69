//! On-disk snapshot schema.
//!
//! The snapshot is deliberately decoupled from the in-memory collection:
//! an ordered list of records, each carrying its name, phones, and
//! optional birthday. Decoding runs every value through the same
//! validation as live construction, so a snapshot cannot reintroduce
//! invalid data.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::models::Record;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One record as it appears on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordSnapshot {
    /// Contact name, the book's key
    pub name: ContactName,

    /// Phone numbers in insertion order
    #[serde(default)]
    pub phones: Vec<PhoneNumber>,

    /// Birthday, `null` when unset
    #[serde(default)]
    pub birthday: Birthday,
}

/// A whole address book at a point in time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookSnapshot {
    /// Records in book iteration order
    pub records: Vec<RecordSnapshot>,
}

impl From<&Record> for RecordSnapshot {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().clone(),
            phones: record.phones().to_vec(),
            birthday: *record.birthday(),
        }
    }
}

impl From<RecordSnapshot> for Record {
    fn from(snapshot: RecordSnapshot) -> Self {
        Record::from_parts(snapshot.name, snapshot.phones, snapshot.birthday)
    }
}

impl BookSnapshot {
    /// Capture every record of an iteration, in order.
    pub fn capture<'a>(records: impl Iterator<Item = &'a Record>) -> Self {
        Self {
            records: records.map(RecordSnapshot::from).collect(),
        }
    }

    /// Rebuild the keyed record mapping, keeping snapshot order.
    pub fn into_records(self) -> IndexMap<String, Record> {
        self.records
            .into_iter()
            .map(|snapshot| {
                let record = Record::from(snapshot);
                (record.name().as_str().to_string(), record)
            })
            .collect()
    }
}

//!
//! The Records module contains the course [Record] type and the [RecordID] key derived from it.
//! Both are re-exported to the public interface.
//!

use serde::{Serialize, Deserialize};

use crate::error::{TableError, Result};

/// The numeric key of a record within a [Table](crate::Table)
///
/// A RecordID is parsed from the `id` field of a [Record].  The key's identity is its numeric value,
/// so `"7"` and `"007"` both parse to `RecordID(7)` and name the same entry.
#[derive(Copy, Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, derive_more::Display, Serialize, Deserialize)]
pub struct RecordID(pub u64);

impl RecordID {

    /// Parses a RecordID from its textual form
    ///
    /// Surrounding ASCII whitespace is ignored.  What remains must be a non-empty run of ASCII digits
    /// that fits in a `u64`, otherwise [TableError::InvalidKey] is returned.  Signs are not accepted.
    pub fn parse(id : &str) -> Result<Self> {
        let trimmed = id.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(TableError::InvalidKey(id.to_string()));
        }

        //All digits, so the only way parsing can fail now is overflow
        trimmed.parse::<u64>()
            .map(RecordID)
            .map_err(|_| TableError::InvalidKey(id.to_string()))
    }
}

impl From<u64> for RecordID {
    fn from(id : u64) -> Self {
        RecordID(id)
    }
}

/// One course's field set, the unit of storage in a [Table](crate::Table)
///
/// A Record has no behavior of its own beyond parsing its key.  The `id` must parse as a [RecordID]
/// for the record to be inserted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id : String,
    pub title : String,
    pub prerequisite : String,
    pub description : String,
}

impl Record {
    pub fn new<S : Into<String>>(id : S, title : S, prerequisite : S, description : S) -> Self {
        Self {
            id : id.into(),
            title : title.into(),
            prerequisite : prerequisite.into(),
            description : description.into(),
        }
    }

    /// Returns the [RecordID] this record will be stored under
    pub fn record_id(&self) -> Result<RecordID> {
        RecordID::parse(&self.id)
    }
}

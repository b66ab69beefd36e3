//!
//! The Bucket module contains the chain of entries that lives in one slot of a table's bucket array.
//! Nothing from here should be re-exported
//!

use super::records::{*};

/// One link in a chain.  Each entry owns exactly one record and the rest of the chain after it
struct ChainEntry {
    id : RecordID,
    record : Record,
    next : Option<Box<ChainEntry>>,
}

/// What [Bucket::upsert] did with the record it was given
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Upsert {
    Added,
    Replaced,
}

/// A single slot of the bucket array, owning zero or more chained entries
///
/// An empty bucket is a real value with `len() == 0`, not an absent slot, so every index of the
/// bucket array is always valid to inspect.  Entries are kept in insertion order, oldest at the head.
#[derive(Default)]
pub struct Bucket {
    head : Option<Box<ChainEntry>>,
    len : usize,
}

impl Bucket {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Finds the record with the given id, along with the number of entries compared to find it
    pub fn find(&self, id : RecordID) -> (Option<&Record>, usize) {
        let mut visited = 0;
        for entry in self.entries() {
            visited += 1;
            if entry.id == id {
                return (Some(&entry.record), visited);
            }
        }
        (None, visited)
    }

    /// Overwrites the record in the entry with a matching id, or appends a new entry at the tail
    ///
    /// Returns what happened and the number of entries compared along the way
    pub fn upsert(&mut self, id : RecordID, record : Record) -> (Upsert, usize) {
        let mut visited = 0;
        let mut cursor = &mut self.head;
        while let Some(entry) = cursor {
            visited += 1;
            if entry.id == id {
                entry.record = record;
                return (Upsert::Replaced, visited);
            }
            cursor = &mut entry.next;
        }

        //The chain is exhausted, so cursor is the empty link after the tail (or the empty head)
        *cursor = Some(Box::new(ChainEntry{ id, record, next : None }));
        self.len += 1;
        (Upsert::Added, visited)
    }

    /// Unlinks the entry with the given id and returns its record
    ///
    /// The predecessor's link (or the head) takes over the removed entry's successor, so the rest of
    /// the chain is never detached.
    pub fn remove(&mut self, id : RecordID) -> (Option<Record>, usize) {
        let mut visited = 0;
        let mut cursor = &mut self.head;
        while cursor.as_ref().map_or(false, |entry| entry.id != id) {
            visited += 1;
            //The loop condition just checked the link is occupied
            cursor = &mut cursor.as_mut().unwrap().next;
        }

        match cursor.take() {
            Some(mut removed) => {
                visited += 1;
                *cursor = removed.next.take();
                self.len -= 1;
                (Some(removed.record), visited)
            },
            None => (None, visited),
        }
    }

    /// Drops every entry, leaving the bucket empty
    pub fn clear(&mut self) {
        //Unlink one entry at a time, so a long chain can't overflow the stack with recursive drops
        let mut next = self.head.take();
        while let Some(mut entry) = next {
            next = entry.next.take();
        }
        self.len = 0;
    }

    /// Returns an iterator over the records in chain order, head to tail
    pub fn iter(&self) -> impl Iterator<Item=&Record> + '_ {
        self.entries().map(|entry| &entry.record)
    }

    /// Returns an iterator over the ids in chain order, head to tail
    #[cfg(test)]
    pub fn ids(&self) -> impl Iterator<Item=RecordID> + '_ {
        self.entries().map(|entry| entry.id)
    }

    fn entries(&self) -> ChainIter<'_> {
        ChainIter{ next : self.head.as_deref() }
    }
}

impl Drop for Bucket {
    fn drop(&mut self) {
        self.clear();
    }
}

struct ChainIter<'a> {
    next : Option<&'a ChainEntry>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a ChainEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|entry| {
            self.next = entry.next.as_deref();
            entry
        })
    }
}

//!
//! The Table module contains the main [Table] object
//!

use core::marker::PhantomData;

use super::records::{*};
use super::table_config::{*};
use super::bucket::{*};
use super::perf_counters::{*};
use super::error::{TableError, Result};

/// What [Table::insert] did with the record it was given
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Insertion {
    /// No entry had the record's id, so a new one was appended to the end of its bucket's chain
    Added,
    /// An entry with the record's id already existed, and its fields were overwritten in place
    Replaced,
}

/// An in-memory collection of course [Record]s, stored in a fixed-size hash table with chaining
///
/// The table owns an array of [TABLE_SIZE](TableConfig::TABLE_SIZE) buckets.  A record whose id parses to
/// `k` lives in bucket `k % TABLE_SIZE`, in a chain with every other stored record that maps to the same
/// bucket.  Each id is stored at most once, so inserting a record whose id is already present is an update.
///
/// The bucket array never grows.  Every operation touches exactly one bucket, except for [list_all](Table::list_all),
/// [iter](Table::iter) and [reset](Table::reset) which visit all of them.
///
/// Records handed out by the table are either clones or shared references, so the chains can only
/// be changed through [insert](Table::insert), [delete](Table::delete) and [reset](Table::reset).
///
/// The table is not synchronized.  Callers needing shared mutable access must wrap the whole table
/// in a lock.
pub struct Table<ConfigT : TableConfig> {
    buckets : Vec<Bucket>,
    record_count : usize,
    perf_counters : PerfCounters,
    phantom : PhantomData<ConfigT>,
}

impl <ConfigT : TableConfig>Table<ConfigT> {

    /// Creates a new, empty Table with [TABLE_SIZE](TableConfig::TABLE_SIZE) buckets
    ///
    /// Returns [TableError::InvalidConfig] if the config asks for zero buckets.
    pub fn new(_config : ConfigT) -> Result<Self> {

        if ConfigT::TABLE_SIZE == 0 {
            return Err(TableError::InvalidConfig("TABLE_SIZE must be at least 1".to_string()));
        }

        let mut buckets = Vec::with_capacity(ConfigT::TABLE_SIZE);
        buckets.resize_with(ConfigT::TABLE_SIZE, Bucket::new);

        Ok(Self {
            buckets,
            record_count : 0,
            perf_counters : PerfCounters::new(),
            phantom : PhantomData,
        })
    }

    /// Returns the number of buckets, fixed for the life of the table
    pub fn table_size(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of records currently stored
    pub fn len(&self) -> usize {
        self.record_count
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    /// Returns the index of the bucket that holds (or would hold) the record with the given id
    ///
    /// This is `id % TABLE_SIZE`, with no mixing or randomization, so it is stable across runs.
    pub fn bucket_index(&self, id : RecordID) -> usize {
        (id.0 % self.buckets.len() as u64) as usize
    }

    /// Returns the number of entries chained in a bucket, or `None` if the index is past the end of
    /// the bucket array
    pub fn chain_len(&self, bucket_idx : usize) -> Option<usize> {
        self.buckets.get(bucket_idx).map(|bucket| bucket.len())
    }

    /// Inserts a record, or overwrites the fields of the stored record that has the same id
    ///
    /// A new record is appended at the tail of its bucket's chain.  A replaced record keeps its
    /// position in the chain.  The table holds its own copy of the record.
    ///
    /// Returns [TableError::InvalidKey] without touching the table if the record's id isn't a
    /// non-negative integer.
    pub fn insert(&mut self, record : &Record) -> Result<Insertion> {

        let id = record.record_id()?;
        let bucket_idx = self.bucket_index(id);

        let (result, visited) = self.buckets[bucket_idx].upsert(id, record.clone());
        match result {
            Upsert::Added => {
                self.record_count += 1;
                self.perf_counters.update(|fields| {
                    fields.insert_count += 1;
                    fields.chain_entries_visited += visited;
                });
                Ok(Insertion::Added)
            },
            Upsert::Replaced => {
                self.perf_counters.update(|fields| {
                    fields.replace_count += 1;
                    fields.chain_entries_visited += visited;
                });
                Ok(Insertion::Replaced)
            },
        }
    }

    /// Returns a copy of the record with the given id
    ///
    /// Only the bucket the id hashes to is searched.  Returns [TableError::NotFound] if there is no such
    /// record, and [TableError::InvalidKey] if `id` isn't a non-negative integer.
    pub fn lookup(&self, id : &str) -> Result<Record> {
        let id = RecordID::parse(id)?;
        self.lookup_internal(id)
            .cloned()
            .ok_or(TableError::NotFound(id))
    }

    /// Returns a reference to the record with the given id, or `None` if it isn't stored
    pub fn get(&self, id : RecordID) -> Option<&Record> {
        self.lookup_internal(id)
    }

    /// Returns `true` if a record with the given id is stored
    pub fn contains(&self, id : &str) -> Result<bool> {
        let id = RecordID::parse(id)?;
        Ok(self.lookup_internal(id).is_some())
    }

    fn lookup_internal(&self, id : RecordID) -> Option<&Record> {
        let (found, visited) = self.buckets[self.bucket_index(id)].find(id);

        self.perf_counters.update(|fields| {
            fields.lookup_count += 1;
            fields.chain_entries_visited += visited;
            if found.is_none() {
                fields.not_found_count += 1;
            }
        });

        found
    }

    /// Deletes the record with the given id from the table, and returns it
    ///
    /// The entry is unlinked from its chain and the rest of the chain is reattached to its
    /// predecessor.  Other buckets are never touched.  Returns [TableError::NotFound] if there is no
    /// such record, which includes deleting the same id a second time.
    pub fn delete(&mut self, id : &str) -> Result<Record> {
        let id = RecordID::parse(id)?;
        let bucket_idx = self.bucket_index(id);

        let (removed, visited) = self.buckets[bucket_idx].remove(id);
        self.perf_counters.update(|fields| {
            fields.chain_entries_visited += visited;
            if removed.is_some() {
                fields.delete_count += 1;
            } else {
                fields.not_found_count += 1;
            }
        });

        match removed {
            Some(record) => {
                self.record_count -= 1;
                Ok(record)
            },
            None => Err(TableError::NotFound(id)),
        }
    }

    /// Returns copies of every stored record, sorted by title
    ///
    /// Titles are compared case-sensitively, byte by byte.  Records with equal titles keep their
    /// relative order from [iter](Table::iter), i.e. ascending bucket and then head-to-tail within a chain.
    pub fn list_all(&self) -> Vec<Record> {

        //Gather every record in bucket order, then do a stable sort on title
        let mut records : Vec<&Record> = self.iter().collect();
        records.sort_by(|a, b| a.title.as_bytes().cmp(b.title.as_bytes()));

        records.into_iter().cloned().collect()
    }

    /// Returns an iterator over every stored record, in bucket order and then chain order
    pub fn iter(&self) -> impl Iterator<Item=&Record> + '_ {
        self.buckets.iter().flat_map(|bucket| bucket.iter())
    }

    /// Resets a Table, dropping every record in the table and restoring it to an empty state.
    ///
    /// The number of buckets is unchanged.
    pub fn reset(&mut self) {
        for bucket in self.buckets.iter_mut().filter(|bucket| !bucket.is_empty()) {
            bucket.clear();
        }
        self.record_count = 0;
    }

    /// Resets all values in the performance counters, so the information returned by [get_perf_counters](Table::get_perf_counters) only
    /// reflects activity since the last call to `reset_perf_counters`
    pub fn reset_perf_counters(&self) {
        self.perf_counters.reset();
    }

    /// Returns the values in the performance counters, which should reflect all activity since the previous call
    /// to [reset_perf_counters](Table::reset_perf_counters)
    pub fn get_perf_counters(&self) -> PerfCounterFields {
        self.perf_counters.get()
    }
}

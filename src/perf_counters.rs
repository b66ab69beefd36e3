//!
//! The PerfCounters module contains everything associated with the "perf_counters" feature
//!

/// Performance counters for observing how a [Table](crate::Table) behaves for a given key set.
///
/// These counters don't reflect totals across the whole life of the table, rather they can
/// be reset and therefore used to measure individual operations or sequences of operations.
#[cfg(feature = "perf_counters")]
use core::cell::Cell;

/// All of the performance counters to measure the behavior of the table
///
/// NOTE: In order to get valid data, you must enable the `perf_counters` feature in the `Cargo.toml` file
/// with an entry similar to this:
///
/// ```toml
/// [dependencies]
/// course_table = { version = "0.1.0", features = ["perf_counters"] }
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PerfCounterFields {

    /// The number of lookups performed, whether or not they found a record
    pub lookup_count : usize,

    /// The number of inserts that added a new entry to a chain
    pub insert_count : usize,

    /// The number of inserts that overwrote an entry with the same id
    pub replace_count : usize,

    /// The number of entries successfully deleted
    pub delete_count : usize,

    /// The number of lookups and deletes that didn't find their id
    pub not_found_count : usize,

    /// The total number of chain entries whose id was compared, across all operations
    ///
    /// The average chain walk is: `chain_entries_visited / (lookup_count + insert_count + replace_count + delete_count)`.
    /// A number well above 1 means many ids collide modulo [TABLE_SIZE](crate::TableConfig::TABLE_SIZE).
    pub chain_entries_visited : usize,
}

impl PerfCounterFields {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "perf_counters")]
pub struct PerfCounters(Cell<PerfCounterFields>);

#[cfg(feature = "perf_counters")]
impl PerfCounters {
    pub fn new() -> Self {
        Self(Cell::new(PerfCounterFields::new()))
    }
    pub fn reset(&self) {
        self.set(PerfCounterFields::new())
    }
    pub fn update<F : Fn(&mut PerfCounterFields)>(&self, func : F) {
        let mut fields = self.get();
        func(&mut fields);
        self.set(fields);
    }
    pub fn get(&self) -> PerfCounterFields {
        self.0.get()
    }
    pub fn set(&self, fields : PerfCounterFields) {
        self.0.set(fields);
    }
}

#[cfg(not(feature = "perf_counters"))]
pub struct PerfCounters();

#[cfg(not(feature = "perf_counters"))]
impl PerfCounters {
    pub fn new() -> Self {
        Self()
    }
    pub fn reset(&self) {
    }
    pub fn update<F : Fn(&mut PerfCounterFields)>(&self, _func : F) {
    }
    pub fn get(&self) -> PerfCounterFields {
        PerfCounterFields::new()
    }
}

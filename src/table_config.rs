//!
//! The TableConfig module contains the parameters for configuring a Table.  The TableConfig trait
//! is re-exported.
//!

/// The number of buckets in a [Table](crate::Table) created with [DefaultTableConfig]
pub const DEFAULT_TABLE_SIZE : usize = 1000;

/// The TableConfig trait specifies the compile-time parameters of a [Table](crate::Table)
///
/// ## An example creating a [Table](crate::Table) using a custom [TableConfig]
/// ```
/// use course_table::{*};
///
/// struct Config();
/// impl TableConfig for Config {
///     const TABLE_SIZE : usize = 10;
/// }
/// let table = Table::new(Config()).unwrap();
/// assert_eq!(table.table_size(), 10);
/// ```
///
pub trait TableConfig {

    /// The number of buckets in the table, which is also the range of the hash function.
    ///
    /// A record whose id parses to `k` always lives in bucket `k % TABLE_SIZE`.  The bucket array is
    /// allocated once when the [Table](crate::Table) is created and is never grown or rehashed, so
    /// lookups and deletes cost O(chain length) where the average chain length is `len / TABLE_SIZE`.
    ///
    /// If ids are dense small integers, a `TABLE_SIZE` at or above the largest expected id keeps
    /// every chain at length 1.  A `TABLE_SIZE` of 0 is rejected by [Table::new](crate::Table::new).
    const TABLE_SIZE : usize = DEFAULT_TABLE_SIZE;
}

/// A struct that implements [TableConfig] with default values.  This can be passed as a convenience
/// when a default configuration for [Table](crate::Table) is acceptable
pub struct DefaultTableConfig();

impl TableConfig for DefaultTableConfig {
    const TABLE_SIZE : usize = DEFAULT_TABLE_SIZE;
}

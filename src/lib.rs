//! # course_table Overview
//!
//! An in-memory course catalog, stored in a fixed-size hash table with chaining.
//!
//! A [Table] holds course [Record]s (id, title, prerequisite, description) and supports four
//! operations: [insert](Table::insert), point [lookup](Table::lookup) by id, [delete](Table::delete),
//! and [list_all](Table::list_all), which returns every record sorted by title.
//!
//! ## Records & Keys
//!
//! A record's `id` is a string of digits, and its parsed value, a [RecordID], is the key.  Each key is
//! stored at most once, so inserting a record with an id that is already present overwrites the stored
//! record rather than adding a second one.  Ids that aren't non-negative integers are rejected with
//! [TableError::InvalidKey].
//!
//! ## Usage Example
//!
//! ```
//! use course_table::{*};
//!
//! //Create a Table with a small number of buckets
//! struct Config();
//! impl TableConfig for Config {
//!     const TABLE_SIZE : usize = 10;
//! }
//! let mut table = Table::new(Config()).unwrap();
//!
//! //Insert some records.  All three ids land in bucket 5
//! table.insert(&Record::new("5", "Compilers", "CS 300", "Parsing and code generation")).unwrap();
//! table.insert(&Record::new("15", "Algorithms", "CS 200", "Sorting and searching")).unwrap();
//! table.insert(&Record::new("25", "Databases", "CS 200", "Storage and queries")).unwrap();
//!
//! //Look one up by id
//! assert_eq!(table.lookup("15").unwrap().title, "Algorithms");
//!
//! //List them all, ordered by title
//! let titles : Vec<String> = table.list_all().into_iter().map(|record| record.title).collect();
//! assert_eq!(titles, vec!["Algorithms", "Compilers", "Databases"]);
//!
//! //Delete one, and confirm it's gone
//! table.delete("15").unwrap();
//! assert!(matches!(table.lookup("15"), Err(TableError::NotFound(_))));
//! ```
//!
//! ## Table Configuration
//!
//! A [TableConfig] object is passed as an argument to [Table::new].  It fixes the number of buckets,
//! [TABLE_SIZE](TableConfig::TABLE_SIZE), for the life of the table.  [DefaultTableConfig] uses 1000 buckets.
//!
//! ## Algorithm Details
//!
//! A record with key `k` lives in bucket `k % TABLE_SIZE`.  Each bucket owns a singly-linked chain of
//! entries in insertion order.  Lookups and deletes walk only that one chain, so they cost O(chain length).
//! Deleting an entry relinks its predecessor (or the bucket head) to its successor.
//!
//! The table never resizes or rehashes.  If the number of records grows far beyond `TABLE_SIZE`, the
//! chains get long and every operation slows down proportionally.  The [perf_counters](PerfCounterFields)
//! report how many chain entries were compared, when the `perf_counters` feature is enabled.
//!
//! [list_all](Table::list_all) gathers every record in bucket order and then sorts by title with a stable
//! sort, so it costs O(n log n).
//!
//! ## Loading & the Interactive Menu
//!
//! The [loader] module reads records from a CSV file whose columns are title, id, prerequisite and
//! description.  Malformed rows are skipped and reported, without aborting the load.
//!
//! The [shell] module is a menu-driven front end over any input and output stream.  The `course_table`
//! binary runs it on stdin and stdout.
//!
//! ## Concurrency
//!
//! A Table is meant to be owned by a single thread.  Wrap it in a lock if it needs to be shared.
//!

mod error;
pub use error::{TableError, Result};
mod records;
pub use records::{Record, RecordID};
mod table_config;
pub use table_config::{TableConfig, DefaultTableConfig, DEFAULT_TABLE_SIZE};
mod bucket;
mod perf_counters;
pub use perf_counters::PerfCounterFields;
mod table;
pub use table::{Table, Insertion};
pub mod loader;
pub use loader::{load_csv, load_csv_reader, LoadReport, LoaderOptions};
pub mod shell;
pub use shell::{Shell, ShellOptions, MenuChoice};

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use crate::{*};

    struct Config();
    impl TableConfig for Config {
        const TABLE_SIZE : usize = 10;
    }

    fn course(id : &str, title : &str) -> Record {
        Record::new(id, title, "", "")
    }

    #[test]
    /// Three ids that collide in one bucket, with titles in the opposite order to their chain order
    fn colliding_chain_test() {

        let mut table = Table::new(Config()).unwrap();

        table.insert(&course("5", "C")).unwrap();
        table.insert(&course("15", "A")).unwrap();
        table.insert(&course("25", "B")).unwrap();
        assert_eq!(table.chain_len(5), Some(3));

        //Titles come out sorted, even though the chain holds them C, A, B
        let titles : Vec<String> = table.list_all().into_iter().map(|record| record.title).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);

        //Every one is independently retrievable
        assert_eq!(table.lookup("5").unwrap(), course("5", "C"));
        assert_eq!(table.lookup("15").unwrap(), course("15", "A"));
        assert_eq!(table.lookup("25").unwrap(), course("25", "B"));

        //Delete the middle of the chain, and make sure we didn't lose its neighbors
        assert_eq!(table.delete("15").unwrap(), course("15", "A"));
        assert!(matches!(table.lookup("15"), Err(TableError::NotFound(RecordID(15)))));
        assert_eq!(table.lookup("5").unwrap().title, "C");
        assert_eq!(table.lookup("25").unwrap().title, "B");

        //A second delete of the same id is NotFound, and changes nothing
        assert!(matches!(table.delete("15"), Err(TableError::NotFound(RecordID(15)))));
        assert_eq!(table.len(), 2);
        let titles : Vec<String> = table.list_all().into_iter().map(|record| record.title).collect();
        assert_eq!(titles, vec!["B", "C"]);
    }

    #[test]
    fn update_not_duplicate_test() {

        let mut table = Table::new(DefaultTableConfig()).unwrap();

        assert_eq!(table.insert(&course("100", "Old")).unwrap(), Insertion::Added);
        assert_eq!(table.insert(&course("100", "New")).unwrap(), Insertion::Replaced);

        let all = table.list_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "New");

        //Deleting it once removes it completely; there's no older copy left behind
        table.delete("100").unwrap();
        assert!(table.lookup("100").is_err());
        assert!(table.list_all().is_empty());
    }

    #[test]
    fn insert_then_lookup_returns_equal_record() {

        let mut table = Table::new(DefaultTableConfig()).unwrap();
        let record = Record::new("2040", "Operating Systems", "CS 2010, CS 2030", "Processes, memory, \"files\" and ünïcödé");
        table.insert(&record).unwrap();
        assert_eq!(table.lookup("2040").unwrap(), record);

        //The table holds its own copy, so changing the caller's record changes nothing
        let mut record = record;
        record.title = "Changed".to_string();
        assert_eq!(table.lookup("2040").unwrap().title, "Operating Systems");
    }

    #[test]
    /// Drives a Table and a BTreeMap with the same random operations, and checks they always agree
    fn randomized_model_test() {

        let mut rng = Pcg32::seed_from_u64(1);
        let mut table = Table::new(Config()).unwrap();
        let mut model : BTreeMap<u64, Record> = BTreeMap::new();
        let mut deleted = 0;

        for step in 0..5000 {
            let id = rng.gen_range(0..200u64);
            let id_str = id.to_string();

            match rng.gen_range(0..4) {
                0 | 1 => {
                    let record = course(&id_str, &format!("title {}", rng.gen_range(0..50)));
                    let expected = if model.insert(id, record.clone()).is_some() { Insertion::Replaced } else { Insertion::Added };
                    assert_eq!(table.insert(&record).unwrap(), expected);
                },
                2 => {
                    match (table.lookup(&id_str), model.get(&id)) {
                        (Ok(found), Some(expected)) => assert_eq!(&found, expected),
                        (Err(TableError::NotFound(not_found)), None) => assert_eq!(not_found, RecordID(id)),
                        (result, expected) => panic!("step {step}: lookup {id} gave {result:?}, expected {expected:?}"),
                    }
                },
                _ => {
                    match (table.delete(&id_str), model.remove(&id)) {
                        (Ok(removed), Some(expected)) => {
                            assert_eq!(removed, expected);
                            deleted += 1;
                        },
                        (Err(TableError::NotFound(_)), None) => {},
                        (result, expected) => panic!("step {step}: delete {id} gave {result:?}, expected {expected:?}"),
                    }
                },
            }

            assert_eq!(table.len(), model.len());
        }
        assert!(deleted > 0);

        //Every id lives in the bucket its hash names, and nowhere else
        for id in model.keys() {
            let bucket_idx = table.bucket_index(RecordID(*id));
            assert_eq!(bucket_idx, (*id % 10) as usize);
            assert!(table.get(RecordID(*id)).is_some());
        }
        let chain_total : usize = (0..table.table_size()).map(|idx| table.chain_len(idx).unwrap()).sum();
        assert_eq!(chain_total, model.len());

        //The listing has every record exactly once, ordered by title
        let listed = table.list_all();
        assert_eq!(listed.len(), model.len());
        assert!(listed.windows(2).all(|pair| pair[0].title <= pair[1].title));
        let mut listed_ids : Vec<u64> = listed.iter().map(|record| record.record_id().unwrap().0).collect();
        listed_ids.sort();
        assert_eq!(listed_ids, model.keys().copied().collect::<Vec<u64>>());
    }

    #[test]
    /// Loads the course file bundled with the crate
    fn course_file_test() {

        let mut courses_file_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        courses_file_path.push("ListofCourses.csv");

        let mut table = Table::new(DefaultTableConfig()).unwrap();
        let report = load_csv(&courses_file_path, &mut table, &LoaderOptions::default()).unwrap();

        assert_eq!(report.header, vec!["Course Title", "Course ID", "Prerequisite", "Description"]);
        assert!(report.skipped.is_empty());
        assert_eq!(table.len(), report.inserted);
        assert_eq!(table.len(), 12);

        let intro = table.lookup("100").unwrap();
        assert_eq!(intro.title, "Introduction to Computer Science");
        assert_eq!(intro.prerequisite, "None");

        let listed = table.list_all();
        assert!(listed.windows(2).all(|pair| pair[0].title <= pair[1].title));
        assert_eq!(listed[0].title, "Algorithms and Analysis");
    }
}

//!
//! The Loader module reads course records out of a CSV file and inserts them into a [Table].
//!
//! The expected file has a header row, then one course per row with the columns in this order:
//! title, id, prerequisite, description.  Columns are matched by position, not by header name.
//!

use std::fs::File;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info, warn};
use serde::Deserialize;

use crate::error::{TableError, Result};
use crate::records::{Record, RecordID};
use crate::table::{Insertion, Table};
use crate::table_config::TableConfig;

const ID_COLUMN : usize = 1;
const COLUMN_COUNT : usize = 4;

/// One row of the course file, with fields in column order
#[derive(Debug, Deserialize)]
struct CourseRow {
    title : String,
    id : String,
    prerequisite : String,
    description : String,
}

/// Options that control how a CSV file is parsed
#[derive(Clone, Debug)]
pub struct LoaderOptions {
    /// The field delimiter.  Defaults to `b','`
    pub delimiter : u8,
    /// A character removed from the id column before it is parsed, e.g. a thousands separator.
    /// Defaults to `Some(',')`, so a quoted `"1,200"` id is stored under 1200
    pub id_strip_char : Option<char>,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            delimiter : b',',
            id_strip_char : Some(','),
        }
    }
}

/// The outcome of a load
#[derive(Debug, Default)]
pub struct LoadReport {
    /// The column names from the header row
    pub header : Vec<String>,
    /// Rows that added a new record to the table
    pub inserted : usize,
    /// Rows whose id was already in the table, and overwrote that record
    pub replaced : usize,
    /// Rows that were not inserted.  Each one is a [TableError::MalformedRow]
    pub skipped : Vec<TableError>,
}

impl LoadReport {
    /// The number of data rows read, whether or not they were inserted
    pub fn total_rows(&self) -> usize {
        self.inserted + self.replaced + self.skipped.len()
    }
}

/// Loads every well-formed row of the CSV file at `path` into the table
///
/// Malformed rows are logged, recorded in the returned [LoadReport], and skipped.  Only a failure to
/// open or read the file itself aborts the load.
pub fn load_csv<P : AsRef<Path>, ConfigT : TableConfig>(path : P, table : &mut Table<ConfigT>, options : &LoaderOptions) -> Result<LoadReport> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let report = load_csv_reader(file, table, options)?;

    info!("loaded {} from {}: {} added, {} replaced, {} skipped",
        report.total_rows(), path.display(), report.inserted, report.replaced, report.skipped.len());
    Ok(report)
}

/// Loads every well-formed row of CSV data from `reader` into the table
///
/// The same as [load_csv], for data that doesn't come from a file
pub fn load_csv_reader<R : io::Read, ConfigT : TableConfig>(reader : R, table : &mut Table<ConfigT>, options : &LoaderOptions) -> Result<LoadReport> {

    let mut csv_reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true) //Short rows are reported individually, rather than failing the whole file
        .trim(Trim::All)
        .from_reader(reader);

    let mut report = LoadReport {
        header : csv_reader.headers()?.iter().map(|column| column.to_string()).collect(),
        ..LoadReport::default()
    };
    debug!("CSV header: {}", report.header.join(" | "));

    for (row_idx, result) in csv_reader.records().enumerate() {

        //Line 1 is the header, so data rows start at line 2
        let fallback_line = row_idx as u64 + 2;

        let row = match result {
            Ok(row) => row,
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                let line = err.position().map(|pos| pos.line()).unwrap_or(fallback_line);
                skip_row(&mut report, line, err.to_string());
                continue;
            }
        };
        let line = row.position().map(|pos| pos.line()).unwrap_or(fallback_line);

        let record = match row_to_record(&row, options) {
            Ok(record) => record,
            Err(reason) => {
                skip_row(&mut report, line, reason);
                continue;
            }
        };

        match table.insert(&record) {
            Ok(Insertion::Added) => report.inserted += 1,
            Ok(Insertion::Replaced) => {
                debug!("line {line}: course {} replaced an earlier row", record.id);
                report.replaced += 1;
            },
            Err(err) => skip_row(&mut report, line, err.to_string()),
        }
    }

    Ok(report)
}

fn skip_row(report : &mut LoadReport, line : u64, reason : String) {
    warn!("skipping line {line}: {reason}");
    report.skipped.push(TableError::MalformedRow { line, reason });
}

/// Converts one CSV row into a [Record], or explains why it can't be
fn row_to_record(row : &StringRecord, options : &LoaderOptions) -> std::result::Result<Record, String> {

    if row.len() <= ID_COLUMN {
        return Err(format!("expected at least {} columns (title, id), found {}", ID_COLUMN + 1, row.len()));
    }

    //Missing trailing columns become empty fields, and extra ones are dropped
    let padded : StringRecord = (0..COLUMN_COUNT).map(|idx| row.get(idx).unwrap_or("")).collect();
    let course : CourseRow = padded.deserialize(None).map_err(|err| err.to_string())?;

    let id = match options.id_strip_char {
        Some(strip) => clean_numeric(&course.id, strip),
        None => course.id,
    };
    RecordID::parse(&id).map_err(|err| err.to_string())?;

    Ok(Record {
        id,
        title : course.title,
        prerequisite : course.prerequisite,
        description : course.description,
    })
}

/// Returns `raw` with surrounding whitespace and every occurrence of `strip` removed
///
/// ```
/// use course_table::loader::clean_numeric;
///
/// assert_eq!(clean_numeric(" 1,200 ", ','), "1200");
/// assert_eq!(clean_numeric("$45", '$'), "45");
/// ```
pub fn clean_numeric(raw : &str, strip : char) -> String {
    raw.trim().chars().filter(|c| *c != strip).collect()
}

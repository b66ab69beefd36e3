//!
//! The Shell module contains the interactive, menu-driven front end for a [Table].
//!
//! Every menu choice maps onto one table operation, except "load" which is a series of inserts
//! done by the [loader](crate::loader).  The shell is responsible for turning console input into
//! valid course ids, and for turning table errors into messages.
//!

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use log::debug;

use crate::error::{TableError, Result};
use crate::loader::{self, LoaderOptions};
use crate::records::{Record, RecordID};
use crate::table::{Insertion, Table};
use crate::table_config::TableConfig;

/// The menu entries, with the numbers the user types to pick them
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    List,
    Lookup,
    Delete,
    Add,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s : &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Load),
            "2" => Ok(MenuChoice::List),
            "3" => Ok(MenuChoice::Lookup),
            "4" => Ok(MenuChoice::Delete),
            "5" => Ok(MenuChoice::Add),
            "9" => Ok(MenuChoice::Exit),
            other => Err(format!("{other:?} is not a menu choice")),
        }
    }
}

const MENU : &str = "\
Menu:
  1. Load Courses From CSV
  2. Print List of Courses
  3. Print information for a course
  4. Remove a course
  5. Add a Course
  9. Exit Program";

const ID_PROMPT : &str = "Please enter a course number without the letters";

/// Settings for a [Shell]
#[derive(Clone, Debug)]
pub struct ShellOptions {
    /// The file read by the "load" menu choice
    pub csv_path : PathBuf,
    /// The course id used when the lookup prompt is answered with an empty line
    pub default_key : String,
    pub loader : LoaderOptions,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            csv_path : PathBuf::from("ListofCourses.csv"),
            default_key : "100".to_string(),
            loader : LoaderOptions::default(),
        }
    }
}

/// An interactive menu over a [Table], reading commands from `input` and writing to `output`
pub struct Shell<R : BufRead, W : Write, ConfigT : TableConfig> {
    table : Table<ConfigT>,
    input : R,
    output : W,
    options : ShellOptions,
}

impl <R : BufRead, W : Write, ConfigT : TableConfig>Shell<R, W, ConfigT> {

    pub fn new(table : Table<ConfigT>, input : R, output : W, options : ShellOptions) -> Self {
        Self { table, input, output, options }
    }

    pub fn table(&self) -> &Table<ConfigT> {
        &self.table
    }

    /// Consumes the shell, returning the table with every change made through the menu
    pub fn into_table(self) -> Table<ConfigT> {
        self.table
    }

    /// Runs the menu loop until the user picks "Exit" or the input ends
    ///
    /// Only failures to read input or write output are returned as errors.  Everything else is
    /// reported to the user and the loop carries on.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let line = match self.prompt("Enter a choice: ")? {
                Some(line) => line,
                None => break,
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(message) => {
                    writeln!(self.output, "{message}")?;
                    continue;
                }
            };
            debug!("menu choice {choice:?}");

            match choice {
                MenuChoice::Load => self.load()?,
                MenuChoice::List => self.list()?,
                MenuChoice::Lookup => self.lookup()?,
                MenuChoice::Delete => self.delete()?,
                MenuChoice::Add => self.add()?,
                MenuChoice::Exit => break,
            }
        }

        writeln!(self.output, "Thank you for using this program :)")?;
        self.output.flush()?;
        Ok(())
    }

    fn load(&mut self) -> Result<()> {
        let path = self.options.csv_path.clone();
        writeln!(self.output, "Loading CSV file {}", path.display())?;

        let start = Instant::now();
        let result = loader::load_csv(&path, &mut self.table, &self.options.loader);
        let elapsed = start.elapsed();

        match result {
            Ok(report) => {
                writeln!(self.output, "{}", report.header.join(" | "))?;
                writeln!(self.output, "{} courses loaded, {} replaced, {} skipped",
                    report.inserted, report.replaced, report.skipped.len())?;
                for err in report.skipped.iter() {
                    writeln!(self.output, "  {err}")?;
                }
            },
            Err(err) => writeln!(self.output, "Could not load {}: {err}", path.display())?,
        }
        writeln!(self.output, "time: {:.6} seconds", elapsed.as_secs_f64())?;
        Ok(())
    }

    fn list(&mut self) -> Result<()> {
        let records = self.table.list_all();
        if records.is_empty() {
            writeln!(self.output, "No courses loaded.")?;
        }
        for record in records.iter() {
            writeln!(self.output, "{}, {}", record.id, record.title)?;
        }
        Ok(())
    }

    fn lookup(&mut self) -> Result<()> {
        let default_key = self.options.default_key.clone();
        let id = match self.prompt_id(ID_PROMPT, Some(&default_key))? {
            Some(id) => id,
            None => return Ok(()),
        };

        let start = Instant::now();
        let result = self.table.lookup(&id);
        let elapsed = start.elapsed();

        match result {
            Ok(record) => self.display_course(&record)?,
            Err(TableError::NotFound(_)) => writeln!(self.output, "The course number {id} was not found.")?,
            Err(err) => writeln!(self.output, "{err}")?,
        }
        writeln!(self.output, "time: {:.6} seconds", elapsed.as_secs_f64())?;
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        let id = match self.prompt_id(ID_PROMPT, None)? {
            Some(id) => id,
            None => return Ok(()),
        };

        match self.table.delete(&id) {
            Ok(record) => writeln!(self.output, "Removed course {}: {}", record.id, record.title)?,
            Err(TableError::NotFound(_)) => writeln!(self.output, "The course number {id} was not found.")?,
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }

    fn add(&mut self) -> Result<()> {
        let id = match self.prompt_id("Enter the course number after the letters", None)? {
            Some(id) => id,
            None => return Ok(()),
        };
        let mut fields = Vec::with_capacity(3);
        for label in ["Enter course title: ", "Enter course prerequisite: ", "Enter course description: "] {
            match self.prompt(label)? {
                Some(field) => fields.push(field),
                None => return Ok(()),
            }
        }
        let description = fields.pop().unwrap_or_default();
        let prerequisite = fields.pop().unwrap_or_default();
        let title = fields.pop().unwrap_or_default();

        let record = Record::new(id, title, prerequisite, description);
        match self.table.insert(&record) {
            Ok(Insertion::Added) => writeln!(self.output, "Added course {}", record.id)?,
            Ok(Insertion::Replaced) => writeln!(self.output, "Updated course {}", record.id)?,
            Err(err) => {
                writeln!(self.output, "{err}")?;
                return Ok(());
            }
        }
        self.display_course(&record)
    }

    fn display_course(&mut self, record : &Record) -> Result<()> {
        writeln!(self.output, "Title: {} | Description: {} | Prerequisite: {}",
            record.title, record.description, record.prerequisite)?;
        Ok(())
    }

    /// Writes a prompt and reads one line of input, without its line ending
    ///
    /// Returns `None` at the end of the input.
    fn prompt(&mut self, text : &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompts until the user types a valid course id, or the input ends
    ///
    /// An empty answer takes `default`, if there is one.
    fn prompt_id(&mut self, text : &str, default : Option<&str>) -> Result<Option<String>> {
        let text = match default {
            Some(default) => format!("{text} [{default}]: "),
            None => format!("{text}: "),
        };

        loop {
            let answer = match self.prompt(&text)? {
                Some(answer) => answer,
                None => return Ok(None),
            };
            let answer = match (answer.trim().is_empty(), default) {
                (true, Some(default)) => default.to_string(),
                _ => answer.trim().to_string(),
            };

            match RecordID::parse(&answer) {
                Ok(_) => return Ok(Some(answer)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }
}

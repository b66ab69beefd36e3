use std::io;
use std::path::PathBuf;
use std::process::exit;

use clap::{App, Arg};
use log::{error, LevelFilter};

use course_table::{DefaultTableConfig, LoaderOptions, RecordID, Result, Shell, ShellOptions, Table, TableError};

const DEFAULT_CSV_PATH: &str = "ListofCourses.csv";
const DEFAULT_COURSE_KEY: &str = "100";

fn main() {
    //Log to stderr so it doesn't interleave with the menu on stdout
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("CSV_PATH")
                .help("The course file loaded by menu choice 1")
                .index(1)
                .default_value(DEFAULT_CSV_PATH),
        )
        .arg(
            Arg::with_name("COURSE_KEY")
                .help("The course number looked up when the lookup prompt is left blank")
                .index(2)
                .default_value(DEFAULT_COURSE_KEY),
        )
        .arg(
            Arg::with_name("delimiter")
                .long("delimiter")
                .value_name("CHAR")
                .help("The field delimiter of the course file")
                .takes_value(true)
                .default_value(","),
        )
        .get_matches();

    //default_value guarantees these are present
    let csv_path = matches.value_of("CSV_PATH").unwrap_or(DEFAULT_CSV_PATH);
    let course_key = matches.value_of("COURSE_KEY").unwrap_or(DEFAULT_COURSE_KEY);
    let delimiter = matches.value_of("delimiter").unwrap_or(",");

    if let Err(e) = run(csv_path, course_key, delimiter) {
        error!("{}", e);
        exit(1);
    }
}

fn run(csv_path: &str, course_key: &str, delimiter: &str) -> Result<()> {
    let delimiter = match delimiter.as_bytes() {
        [byte] if byte.is_ascii() => *byte,
        _ => {
            return Err(TableError::InvalidConfig(format!(
                "delimiter must be a single ASCII character, got {:?}",
                delimiter
            )))
        }
    };

    //Blank answers to the lookup prompt fall back to this key
    RecordID::parse(course_key)?;

    let options = ShellOptions {
        csv_path: PathBuf::from(csv_path),
        default_key: course_key.to_string(),
        loader: LoaderOptions {
            delimiter,
            ..LoaderOptions::default()
        },
    };

    let table = Table::new(DefaultTableConfig())?;
    let stdin = io::stdin();
    let mut shell = Shell::new(table, stdin.lock(), io::stdout(), options);
    shell.run()
}

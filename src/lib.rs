//! The `run` function is the kernel of the application: load the input file,
//! drop blank lines, deduplicate what remains, write the report. The `args`
//! module parses the command line, the `input` module reads the file into
//! memory, the `set` module holds the order-preserving deduplication, and the
//! `report` module formats the output.
//!
//! Current Limitations:
//! * The input file is read into memory in its entirety, so files larger than
//!   memory are out of reach. The report's counts have to be complete before
//!   the first output line can be written, so there is no streaming rendition
//!   to fall back on.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

use anyhow::{Context, Result};
use std::{fs::File, io};

pub mod args;
pub mod input;
pub mod report;
pub mod set;

use crate::args::Args;
use crate::set::line_set_from;

/// Deduplicates `args.input` into `args.output`: reads the file, drops blank
/// lines, keeps the first occurrence of every distinct line, writes the
/// report plus the unique lines, and prints the same summary to the console.
///
/// A missing or effectively empty input file is reported on the console and
/// leaves the output file untouched; the run still counts as a success.
pub fn run(args: &Args) -> Result<()> {
    let contents = match input::contents_of(&args.input)? {
        Some(contents) => contents,
        None => {
            println!("[!] Файл {} не найден.", args.input.display());
            Vec::new()
        }
    };

    let lines = line_set_from(&contents);
    if lines.is_empty() {
        println!("[!] Нет данных для обработки.");
        return Ok(());
    }

    let file = File::create(&args.output)
        .with_context(|| format!("Can't write file: {}", args.output.display()))?;
    report::write_report(&lines, io::BufWriter::new(file))?;

    println!();
    report::print_summary(&lines)?;
    println!("Результат сохранён в: {}", args.output.display());
    Ok(())
}

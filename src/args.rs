//! Code to parse the command line using `clap`, and definitions of the parsed
//! result
use clap::Parser;
use std::path::PathBuf;

/// Returns the parsed command line: the input path to read and the output
/// path to write.
#[must_use]
pub fn parsed() -> Args {
    let parsed = CliArgs::parse();
    Args { input: parsed.input, output: parsed.output }
}

/// The parsed command line.
pub struct Args {
    /// `input` is the file whose lines are deduplicated
    pub input: PathBuf,
    /// `output` is the file the report and unique lines are written to
    pub output: PathBuf,
}

#[derive(Debug, Parser)]
#[command(name = "dedup-cleaner", version)]
#[command(about = "Duplicate Cleaner: удаление дублирующихся строк из текстового файла")]
struct CliArgs {
    /// Путь к входному файлу
    #[arg(short, long, default_value = "input.txt")]
    input: PathBuf,
    /// Путь к выходному файлу
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn paths_default_to_input_and_output_txt() {
        let parsed = CliArgs::parse_from(["dedup-cleaner"]);
        assert_eq!(parsed.input, PathBuf::from("input.txt"));
        assert_eq!(parsed.output, PathBuf::from("output.txt"));
    }

    #[test]
    fn short_and_long_flags_name_the_files() {
        let parsed = CliArgs::parse_from(["dedup-cleaner", "-i", "in.txt", "-o", "out.txt"]);
        assert_eq!(parsed.input, PathBuf::from("in.txt"));
        assert_eq!(parsed.output, PathBuf::from("out.txt"));

        let parsed =
            CliArgs::parse_from(["dedup-cleaner", "--input", "a.txt", "--output", "b.txt"]);
        assert_eq!(parsed.input, PathBuf::from("a.txt"));
        assert_eq!(parsed.output, PathBuf::from("b.txt"));
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }
}

use crate::editor::{DEFAULT_BINARY_PATTERN, DEFAULT_SELECTED_ROW};
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_file_argument(command);
        let command = Self::register_output_file_argument(command);
        let command = Self::register_row_argument(command);
        let command = Self::register_pattern_argument(command);
        Self::register_scratch_directory_argument(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_output_file_argument(command: Command) -> Command {
        command.arg(Self::create_output_file_argument())
    }

    fn register_row_argument(command: Command) -> Command {
        command.arg(Self::create_row_argument())
    }

    fn register_pattern_argument(command: Command) -> Command {
        command.arg(Self::create_pattern_argument())
    }

    fn register_scratch_directory_argument(command: Command) -> Command {
        command.arg(Self::create_scratch_directory_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path or file:// URI of the source image")
            .required(true)
    }

    fn create_output_file_argument() -> Arg {
        Arg::new("output_file")
            .help("Path of the modified image, the format follows the extension")
            .required(true)
    }

    fn create_row_argument() -> Arg {
        arg!(row: -r --row <ROW> "Index of the row to overwrite, counted from the top")
            .default_value(DEFAULT_SELECTED_ROW.to_string())
            .allow_negative_numbers(true)
            .value_parser(value_parser!(i64))
    }

    fn create_pattern_argument() -> Arg {
        arg!(pattern: -p --pattern <PATTERN> "Binary stripe pattern, 1 is white and 0 is black")
            .default_value(DEFAULT_BINARY_PATTERN)
    }

    fn create_scratch_directory_argument() -> Arg {
        arg!(scratch_directory: -s --scratch_directory <DIR> "Directory for the temporary modified image")
            .required(false)
            .value_parser(value_parser!(PathBuf))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_file: Self::extract_input_file_argument(matches),
            output_file: Self::extract_output_file_argument(matches),
            row: Self::extract_row_argument(matches),
            pattern: Self::extract_pattern_argument(matches),
            scratch_directory: Self::extract_scratch_directory_argument(matches),
        }
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("input_file")
            .expect("Required argument input_file not provided")
            .clone()
    }

    fn extract_output_file_argument(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("output_file")
            .expect("Required argument output_file not provided")
            .clone()
    }

    fn extract_row_argument(matches: &ArgMatches) -> i64 {
        matches
            .get_one::<i64>("row")
            .expect("Row must be provided, but was unset.")
            .to_owned()
    }

    fn extract_pattern_argument(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("pattern")
            .expect("Pattern must be provided, but was unset.")
            .clone()
    }

    fn extract_scratch_directory_argument(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one::<PathBuf>("scratch_directory").cloned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

pub use cli::CLIParser;
pub use editor::{EditorOptions, ImageEditor};
pub use error::Error;

mod cli;
pub mod editor;
mod error;
pub mod image;
mod logger;
pub mod pattern;
pub mod processor;
pub mod property;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: String,
    output_file: String,
    row: i64,
    pattern: String,
    scratch_directory: Option<std::path::PathBuf>,
}

/// Loads `input_file`, stripes the selected row and saves it to `output_file`.
pub fn stripe_image_row(arguments: &Arguments) -> Result<()> {
    let mut editor = ImageEditor::new(EditorOptions::from(arguments));
    editor.try_load_image(&arguments.input_file)?;
    editor.set_selected_row(arguments.row);
    editor.set_binary_pattern(&arguments.pattern);
    editor.try_process_image()?;
    editor.try_save_modified_image(&arguments.output_file)
}

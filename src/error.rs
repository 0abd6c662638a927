use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    InputFileNotFound(String),
    UnableToDecodeImage(String, ::image::ImageError),
    UnableToEncodeImage(String, ::image::ImageError),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    UnableToWriteOutputFile(String, std::io::Error),
    UnsupportedOutputFormat(String),
    EmptyPixelBuffer,
    NoImageLoaded,
    NoModifiedImage,
    SelectedRowOutOfBounds { row: i64, height: u32 },
    InvalidBinaryPattern(String),
}

impl Error {
    /// Errors raised by the row processing preconditions. None of them
    /// leave any trace in the editor state.
    pub fn is_precondition_failure(&self) -> bool {
        matches!(
            self,
            Self::NoImageLoaded
                | Self::SelectedRowOutOfBounds { .. }
                | Self::InvalidBinaryPattern(_)
        )
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputFileNotFound(path) => {
                write!(f, "Input file '{}' not found", path)
            }
            Self::UnableToDecodeImage(path, error) => {
                write!(f, "Unable to decode image '{}': {}", path, error)
            }
            Self::UnableToEncodeImage(path, error) => {
                write!(f, "Unable to encode image '{}': {}", path, error)
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::UnableToWriteOutputFile(path, error) => {
                write!(f, "Unable to write output file '{}': {}", path, error)
            }
            Self::UnsupportedOutputFormat(path) => {
                write!(
                    f,
                    "Unable to determine a supported image format from '{}'",
                    path
                )
            }
            Self::EmptyPixelBuffer => write!(f, "Pixel buffer is empty, nothing to encode"),
            Self::NoImageLoaded => write!(f, "No image loaded"),
            Self::NoModifiedImage => write!(f, "No modified image to save"),
            Self::SelectedRowOutOfBounds { row, height } => {
                write!(
                    f,
                    "Selected row {} is out of bounds (height: {})",
                    row, height
                )
            }
            Self::InvalidBinaryPattern(pattern) => {
                write!(
                    f,
                    "Invalid binary pattern '{}'. Must contain only 0 and 1",
                    pattern
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToDecodeImage(_, error) | Self::UnableToEncodeImage(_, error) => {
                Some(error)
            }
            Self::UnableToOpenOutputFileForWriting(_, error)
            | Self::UnableToWriteOutputFile(_, error) => Some(error),
            _ => None,
        }
    }
}

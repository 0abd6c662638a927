use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

use super::super::{ImageReader, PixelBuffer};
use crate::Error;

/// Decodes any raster format known to the `image` crate into an RGB buffer.
///
/// The format is guessed from the content, not from the file name. Alpha is
/// dropped, grayscale and palette images are expanded to three channels.
pub struct RasterImageReader<R: BufRead + Seek> {
    reader: R,
    source_name: String,
}

impl RasterImageReader<BufReader<File>> {
    pub fn open(file_path: &Path) -> crate::Result<Self> {
        let source_name = file_path.display().to_string();
        if !file_path.is_file() {
            return Err(Error::InputFileNotFound(source_name));
        }
        let file = File::open(file_path).map_err(|e| {
            Error::UnableToDecodeImage(source_name.clone(), ::image::ImageError::IoError(e))
        })?;
        Ok(Self::new(BufReader::new(file), source_name))
    }
}

impl<R: BufRead + Seek> RasterImageReader<R> {
    pub fn new(reader: R, source_name: impl Into<String>) -> Self {
        Self {
            reader,
            source_name: source_name.into(),
        }
    }
}

impl<R: BufRead + Seek> ImageReader for RasterImageReader<R> {
    fn read_image(&mut self) -> crate::Result<PixelBuffer> {
        let decoded = ::image::ImageReader::new(&mut self.reader)
            .with_guessed_format()
            .map_err(|e| {
                Error::UnableToDecodeImage(
                    self.source_name.clone(),
                    ::image::ImageError::IoError(e),
                )
            })?
            .decode()
            .map_err(|e| Error::UnableToDecodeImage(self.source_name.clone(), e))?;
        log::debug!(
            "Decoded '{}' with color type {:?}",
            self.source_name,
            decoded.color()
        );
        let rgb = decoded.into_rgb8();
        let (width, height) = rgb.dimensions();
        let values = rgb.into_raw().into_iter().map(i32::from).collect();
        Ok(PixelBuffer {
            width,
            height,
            values,
        })
    }
}

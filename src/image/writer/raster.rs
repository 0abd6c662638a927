use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use ::image::{ImageFormat, RgbImage};

use super::super::{ImageWriter, PixelBuffer};
use crate::Error;

/// Encodes a [`PixelBuffer`] as an 8 bit RGB raster image.
pub struct RasterImageWriter<'a, T: Write + Seek> {
    writer: T,
    image: &'a PixelBuffer,
    format: ImageFormat,
    target_name: String,
}

impl<'a> RasterImageWriter<'a, BufWriter<File>> {
    /// Creates (or truncates) `file_path`, picking the format from its extension.
    pub fn create(file_path: &Path, image: &'a PixelBuffer) -> crate::Result<Self> {
        let target_name = file_path.display().to_string();
        let format = ImageFormat::from_path(file_path)
            .map_err(|_| Error::UnsupportedOutputFormat(target_name.clone()))?;
        if !format.writing_enabled() {
            return Err(Error::UnsupportedOutputFormat(target_name));
        }
        let output_file = open_output_file(file_path)?;
        Ok(Self::new(
            BufWriter::new(output_file),
            image,
            format,
            target_name,
        ))
    }
}

impl<'a, T: Write + Seek> RasterImageWriter<'a, T> {
    pub fn new(
        writer: T,
        image: &'a PixelBuffer,
        format: ImageFormat,
        target_name: impl Into<String>,
    ) -> Self {
        Self {
            writer,
            image,
            format,
            target_name: target_name.into(),
        }
    }
}

impl<T: Write + Seek> ImageWriter for RasterImageWriter<'_, T> {
    fn write_image(&mut self) -> crate::Result<()> {
        if self.image.is_empty() {
            return Err(Error::EmptyPixelBuffer);
        }
        let raster = RgbImage::from_raw(
            self.image.width(),
            self.image.height(),
            self.image.to_rgb8(),
        )
        .ok_or(Error::EmptyPixelBuffer)?;
        raster
            .write_to(&mut self.writer, self.format)
            .map_err(|e| Error::UnableToEncodeImage(self.target_name.clone(), e))?;
        self.writer
            .flush()
            .map_err(|e| Error::UnableToWriteOutputFile(self.target_name.clone(), e))?;
        log::debug!(
            "Encoded {}x{} image as {:?} to '{}'",
            self.image.width(),
            self.image.height(),
            self.format,
            self.target_name
        );
        Ok(())
    }
}

fn open_output_file(file_path: &Path) -> crate::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| Error::UnableToOpenOutputFileForWriting(file_path.display().to_string(), e))
}

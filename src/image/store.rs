use std::path::Path;

use super::reader::RasterImageReader;
use super::writer::RasterImageWriter;
use super::{ImageReader, ImageWriter, PixelBuffer};

/// Owns the decoded original image and the result of the last row transform.
///
/// The modified buffer, when present, always has the dimensions of the
/// original one.
#[derive(Debug, Default)]
pub struct ImageStore {
    original: Option<PixelBuffer>,
    modified: Option<PixelBuffer>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes the file at `file_path` and makes it the new original image.
    ///
    /// Any previous modification is discarded on success. On failure the
    /// store is left exactly as it was.
    pub fn decode(&mut self, file_path: &Path) -> crate::Result<(u32, u32)> {
        let mut reader = RasterImageReader::open(file_path)?;
        let buffer = reader.read_image()?;
        let dimensions = buffer.dimensions();
        self.original = Some(buffer);
        self.modified = None;
        Ok(dimensions)
    }

    /// Writes `buffer` to `file_path`, the format follows the file extension.
    pub fn encode(buffer: &PixelBuffer, file_path: &Path) -> crate::Result<()> {
        let mut writer = RasterImageWriter::create(file_path, buffer)?;
        writer.write_image()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.original
            .as_ref()
            .map(PixelBuffer::dimensions)
            .unwrap_or((0, 0))
    }

    pub fn has_image(&self) -> bool {
        self.original.is_some()
    }

    pub fn original(&self) -> Option<&PixelBuffer> {
        self.original.as_ref()
    }

    pub fn modified(&self) -> Option<&PixelBuffer> {
        self.modified.as_ref()
    }

    /// Replaces the modified buffer. Buffers that do not match the original
    /// dimensions are refused and handed back.
    pub fn replace_modified(&mut self, buffer: PixelBuffer) -> Result<(), PixelBuffer> {
        match &self.original {
            Some(original) if original.has_same_dimensions(&buffer) => {
                self.modified = Some(buffer);
                Ok(())
            }
            _ => Err(buffer),
        }
    }
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use tempfile::TempDir;

    use super::ImageStore;
    use crate::image::PixelBuffer;
    use crate::Error;

    fn write_fixture(directory: &TempDir, name: &str, buffer: &PixelBuffer) -> std::path::PathBuf {
        let path = directory.path().join(name);
        ImageStore::encode(buffer, &path).expect("Writing fixture failed");
        path
    }

    #[test]
    fn empty_store_has_no_dimensions() {
        let store = ImageStore::new();
        assert_eq!(store.dimensions(), (0, 0));
        assert!(!store.has_image());
        assert!(store.modified().is_none());
    }

    #[test]
    fn decode_replaces_original_and_clears_modified() {
        let directory = TempDir::new().unwrap();
        let first = write_fixture(&directory, "first.png", &PixelBuffer::filled(2, 2, 10));
        let second = write_fixture(&directory, "second.bmp", &PixelBuffer::filled(5, 3, 20));
        let mut store = ImageStore::new();
        store.decode(&first).unwrap();
        store
            .replace_modified(PixelBuffer::filled(2, 2, 0))
            .expect("Dimensions match");
        assert_eq!(store.decode(&second).unwrap(), (5, 3));
        assert_eq!(store.dimensions(), (5, 3));
        assert!(store.modified().is_none());
    }

    #[test]
    fn failed_decode_keeps_previous_state() {
        let directory = TempDir::new().unwrap();
        let valid = write_fixture(&directory, "valid.png", &PixelBuffer::filled(3, 1, 99));
        let broken = directory.path().join("broken.png");
        std::fs::write(&broken, b"not a png").unwrap();
        let mut store = ImageStore::new();
        store.decode(&valid).unwrap();
        store
            .replace_modified(PixelBuffer::filled(3, 1, 0))
            .expect("Dimensions match");

        assert!(matches!(
            store.decode(&broken),
            Err(Error::UnableToDecodeImage(_, _))
        ));
        assert!(matches!(
            store.decode(Path::new("/does/not/exist.png")),
            Err(Error::InputFileNotFound(_))
        ));
        assert_eq!(store.dimensions(), (3, 1));
        assert_eq!(store.modified(), Some(&PixelBuffer::filled(3, 1, 0)));
    }

    #[test]
    fn modified_buffer_must_match_original() {
        let mut store = ImageStore::new();
        assert!(store.replace_modified(PixelBuffer::filled(1, 1, 0)).is_err());

        let directory = TempDir::new().unwrap();
        let path = write_fixture(&directory, "image.png", &PixelBuffer::filled(2, 2, 0));
        store.decode(&path).unwrap();
        assert!(store.replace_modified(PixelBuffer::filled(2, 3, 0)).is_err());
        assert!(store.modified().is_none());
    }

    #[test]
    fn encode_clamps_out_of_range_values() {
        let directory = TempDir::new().unwrap();
        let mut buffer = PixelBuffer::filled(1, 1, 0);
        buffer.values[0] = 1000;
        buffer.values[1] = -5;
        let path = write_fixture(&directory, "clamped.png", &buffer);
        let mut store = ImageStore::new();
        store.decode(&path).unwrap();
        assert_eq!(store.original().unwrap().dot(0, 0), [255, 0, 0]);
    }
}

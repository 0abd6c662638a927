use std::path::{Path, PathBuf};

use crate::image::path::clean_path_buf;
use crate::image::store::ImageStore;
use crate::image::PixelBuffer;
use crate::processor::RowProcessor;
use crate::property::Observable;
use crate::{Arguments, Error, Result};

pub const DEFAULT_BINARY_PATTERN: &str = "01010101";
pub const DEFAULT_SELECTED_ROW: i64 = 0;
const TEMPORARY_FILE_PREFIX: &str = "temp_modified_";
const TEMPORARY_FILE_EXTENSION: &str = "png";

pub struct EditorOptions {
    /// directory receiving the image written by [`ImageEditor::process_image`]
    pub scratch_directory: PathBuf,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            scratch_directory: std::env::temp_dir(),
        }
    }
}

impl From<&Arguments> for EditorOptions {
    fn from(value: &Arguments) -> Self {
        Self {
            scratch_directory: value
                .scratch_directory
                .clone()
                .unwrap_or_else(std::env::temp_dir),
        }
    }
}

/// Loads an image, stripes one of its rows and exports the result.
///
/// Setters never validate; the selected row and pattern are checked when
/// [`ImageEditor::process_image`] runs. Every failure leaves the editor as it
/// was before the call.
pub struct ImageEditor {
    store: ImageStore,
    options: EditorOptions,
    original_image_path: Observable<String>,
    modified_image_path: Observable<String>,
    selected_row: Observable<i64>,
    binary_pattern: Observable<String>,
    image_width: Observable<u32>,
    image_height: Observable<u32>,
    has_image: Observable<bool>,
}

impl ImageEditor {
    pub fn new(options: EditorOptions) -> Self {
        Self {
            store: ImageStore::new(),
            options,
            original_image_path: Observable::default(),
            modified_image_path: Observable::default(),
            selected_row: Observable::new(DEFAULT_SELECTED_ROW),
            binary_pattern: Observable::new(DEFAULT_BINARY_PATTERN.to_owned()),
            image_width: Observable::default(),
            image_height: Observable::default(),
            has_image: Observable::default(),
        }
    }

    pub fn load_image(&mut self, file_path: &str) -> bool {
        match self.try_load_image(file_path) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("{}", e);
                false
            }
        }
    }

    pub fn try_load_image(&mut self, file_path: &str) -> Result<()> {
        let clean_path = clean_path_buf(file_path);
        log::debug!("Loading image from: {}", clean_path.display());
        let (width, height) = self.store.decode(&clean_path)?;
        self.image_width.set(width);
        self.image_height.set(height);
        self.has_image.set(true);
        self.original_image_path
            .set(clean_path.display().to_string());
        self.modified_image_path.set(String::new());
        log::info!("Image loaded successfully: {}x{}", width, height);
        Ok(())
    }

    pub fn set_selected_row(&mut self, row: i64) {
        self.selected_row.set(row);
    }

    pub fn set_binary_pattern(&mut self, pattern: &str) {
        self.binary_pattern.set(pattern.to_owned());
    }

    pub fn process_image(&mut self) {
        if let Err(e) = self.try_process_image() {
            if e.is_precondition_failure() {
                log::warn!("{}", e);
            } else {
                log::error!("Processing failed: {}", e);
            }
        }
    }

    /// Stripes the selected row and writes the result to the scratch
    /// directory, returning the written path.
    pub fn try_process_image(&mut self) -> Result<PathBuf> {
        let processor = RowProcessor::new(&self.store);
        let modified = processor.process(*self.selected_row.get(), self.binary_pattern.get())?;
        let temporary_path = self.temporary_image_path();
        ImageStore::encode(&modified, &temporary_path)?;
        if self.store.replace_modified(modified).is_err() {
            return Err(Error::NoImageLoaded);
        }
        self.modified_image_path
            .set(temporary_path.display().to_string());
        log::info!(
            "Image processed and saved to: {}",
            temporary_path.display()
        );
        Ok(temporary_path)
    }

    pub fn save_modified_image(&self, file_path: &str) -> bool {
        match self.try_save_modified_image(file_path) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Failed to save image: {}", e);
                false
            }
        }
    }

    pub fn try_save_modified_image(&self, file_path: &str) -> Result<()> {
        let modified = self.store.modified().ok_or(Error::NoModifiedImage)?;
        let clean_path = clean_path_buf(file_path);
        ImageStore::encode(modified, &clean_path)?;
        log::info!("Image saved successfully: {}", clean_path.display());
        Ok(())
    }

    fn temporary_image_path(&self) -> PathBuf {
        let file_name = format!(
            "{}{}.{}",
            TEMPORARY_FILE_PREFIX,
            std::process::id(),
            TEMPORARY_FILE_EXTENSION
        );
        self.options.scratch_directory.join(file_name)
    }

    pub fn original_image_path(&self) -> &str {
        self.original_image_path.get()
    }

    pub fn modified_image_path(&self) -> &str {
        self.modified_image_path.get()
    }

    pub fn selected_row(&self) -> i64 {
        *self.selected_row.get()
    }

    pub fn binary_pattern(&self) -> &str {
        self.binary_pattern.get()
    }

    pub fn image_width(&self) -> u32 {
        *self.image_width.get()
    }

    pub fn image_height(&self) -> u32 {
        *self.image_height.get()
    }

    pub fn has_image(&self) -> bool {
        *self.has_image.get()
    }

    pub fn original_buffer(&self) -> Option<&PixelBuffer> {
        self.store.original()
    }

    pub fn modified_buffer(&self) -> Option<&PixelBuffer> {
        self.store.modified()
    }

    pub fn scratch_directory(&self) -> &Path {
        &self.options.scratch_directory
    }

    pub fn on_original_image_path_changed<F>(&mut self, listener: F)
    where
        F: FnMut(&String) + Send + 'static,
    {
        self.original_image_path.subscribe(listener);
    }

    pub fn on_modified_image_path_changed<F>(&mut self, listener: F)
    where
        F: FnMut(&String) + Send + 'static,
    {
        self.modified_image_path.subscribe(listener);
    }

    pub fn on_selected_row_changed<F>(&mut self, listener: F)
    where
        F: FnMut(&i64) + Send + 'static,
    {
        self.selected_row.subscribe(listener);
    }

    pub fn on_binary_pattern_changed<F>(&mut self, listener: F)
    where
        F: FnMut(&String) + Send + 'static,
    {
        self.binary_pattern.subscribe(listener);
    }

    pub fn on_image_width_changed<F>(&mut self, listener: F)
    where
        F: FnMut(&u32) + Send + 'static,
    {
        self.image_width.subscribe(listener);
    }

    pub fn on_image_height_changed<F>(&mut self, listener: F)
    where
        F: FnMut(&u32) + Send + 'static,
    {
        self.image_height.subscribe(listener);
    }

    pub fn on_has_image_changed<F>(&mut self, listener: F)
    where
        F: FnMut(&bool) + Send + 'static,
    {
        self.has_image.subscribe(listener);
    }
}

impl Default for ImageEditor {
    fn default() -> Self {
        Self::new(EditorOptions::default())
    }
}

use crate::image::store::ImageStore;
use crate::image::{PixelBuffer, MAX_CHANNEL_VALUE, MIN_CHANNEL_VALUE};
use crate::logger::log_row;
use crate::pattern::BinaryPattern;
use crate::{Error, Result};

/// Applies a stripe pattern to one row of the image held by an [`ImageStore`].
pub struct RowProcessor<'a> {
    store: &'a ImageStore,
}

impl<'a> RowProcessor<'a> {
    pub fn new(store: &'a ImageStore) -> Self {
        Self { store }
    }

    /// Returns a copy of the original image whose row `selected_row` is
    /// replaced by black (`'0'`) and white (`'1'`) dots taken cyclically from
    /// `pattern`.
    ///
    /// Checks run in order: image loaded, row in bounds, pattern valid. The
    /// store is never touched.
    pub fn process(&self, selected_row: i64, pattern: &str) -> Result<PixelBuffer> {
        let original = self.store.original().ok_or(Error::NoImageLoaded)?;
        let row_index = Self::check_row_in_bounds(selected_row, original.height())?;
        let pattern = BinaryPattern::parse(pattern)?;
        log::debug!("Processing row {} with pattern: {}", row_index, pattern);

        let mut modified = original.clone();
        apply_pattern_to_row(&mut modified, row_index, &pattern);
        log_row(row_index, modified.row(row_index));
        Ok(modified)
    }

    fn check_row_in_bounds(selected_row: i64, height: u32) -> Result<u32> {
        u32::try_from(selected_row)
            .ok()
            .filter(|&row_index| row_index < height)
            .ok_or(Error::SelectedRowOutOfBounds {
                row: selected_row,
                height,
            })
    }
}

pub fn apply_pattern_to_row(buffer: &mut PixelBuffer, row_index: u32, pattern: &BinaryPattern) {
    for (column_index, bit) in (0..buffer.width()).zip(pattern.cycle()) {
        let value = if bit {
            MAX_CHANNEL_VALUE
        } else {
            MIN_CHANNEL_VALUE
        };
        buffer.set_gray(column_index, row_index, value);
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::{apply_pattern_to_row, RowProcessor};
    use crate::image::store::ImageStore;
    use crate::image::PixelBuffer;
    use crate::pattern::BinaryPattern;
    use crate::Error;

    fn gradient(width: u32, height: u32) -> PixelBuffer {
        let samples: Vec<u8> = (0..width as usize * height as usize * 3)
            .map(|index| (index % 251) as u8)
            .collect();
        PixelBuffer::from_rgb8(width, height, &samples).unwrap()
    }

    fn store_with(buffer: &PixelBuffer) -> (tempfile::TempDir, ImageStore) {
        let directory = tempfile::TempDir::new().unwrap();
        let path = directory.path().join("source.png");
        ImageStore::encode(buffer, &path).unwrap();
        let mut store = ImageStore::new();
        store.decode(&path).unwrap();
        (directory, store)
    }

    #[test]
    fn alternating_pattern_on_black_image() {
        let (_directory, store) = store_with(&PixelBuffer::filled(4, 2, 0));
        let modified = RowProcessor::new(&store).process(0, "01").unwrap();
        let first_row: Vec<i32> = (0..4).map(|x| modified.dot(x, 0)[0]).collect();
        assert_eq!(first_row, [0, 255, 0, 255]);
        for x in 0..4 {
            let [r, g, b] = modified.dot(x, 0);
            assert!(r == g && g == b, "Dot {} is not gray", x);
        }
        assert!(modified.row(1).iter().all(|&value| value == 0));
    }

    #[test]
    fn long_pattern_is_truncated_to_width() {
        let (_directory, store) = store_with(&gradient(3, 3));
        let modified = RowProcessor::new(&store).process(1, "01010101").unwrap();
        assert_eq!(modified.dot(0, 1), [0, 0, 0]);
        assert_eq!(modified.dot(1, 1), [255, 255, 255]);
        assert_eq!(modified.dot(2, 1), [0, 0, 0]);
    }

    #[test]
    fn no_image_is_checked_first() {
        let store = ImageStore::new();
        let result = RowProcessor::new(&store).process(-3, "");
        assert!(matches!(result, Err(Error::NoImageLoaded)));
    }

    #[test]
    fn row_bounds_are_checked_before_pattern() {
        let (_directory, store) = store_with(&gradient(3, 3));
        let processor = RowProcessor::new(&store);
        for row in [-1, 3, 5, i64::MAX] {
            assert!(matches!(
                processor.process(row, "xyz"),
                Err(Error::SelectedRowOutOfBounds { height: 3, .. })
            ));
        }
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let (_directory, store) = store_with(&gradient(3, 3));
        let processor = RowProcessor::new(&store);
        assert!(matches!(
            processor.process(2, ""),
            Err(Error::InvalidBinaryPattern(_))
        ));
        assert!(matches!(
            processor.process(2, "01012"),
            Err(Error::InvalidBinaryPattern(_))
        ));
    }

    #[test]
    fn processing_starts_from_original_every_time() {
        let original = gradient(4, 4);
        let (_directory, store) = store_with(&original);
        let processor = RowProcessor::new(&store);
        processor.process(0, "1").unwrap();
        let second = processor.process(3, "1").unwrap();
        assert_eq!(second.row(0), original.row(0));
        assert_eq!(store.original(), Some(&original));
    }

    fn pattern_strategy() -> impl Strategy<Value = String> {
        proptest::collection::vec(prop_oneof![Just('0'), Just('1')], 1..20)
            .prop_map(|symbols| symbols.into_iter().collect())
    }

    proptest! {
        #[test]
        fn only_selected_row_changes(
            width in 1u32..24,
            height in 1u32..12,
            row_seed in any::<u32>(),
            pattern in pattern_strategy(),
        ) {
            let original = gradient(width, height);
            let row_index = row_seed % height;
            let mut modified = original.clone();
            apply_pattern_to_row(&mut modified, row_index, &BinaryPattern::parse(&pattern).unwrap());

            for y in (0..height).filter(|&y| y != row_index) {
                prop_assert_eq!(modified.row(y), original.row(y));
            }
            let symbols: Vec<char> = pattern.chars().collect();
            for x in 0..width {
                let expected = if symbols[x as usize % symbols.len()] == '1' { 255 } else { 0 };
                prop_assert_eq!(modified.dot(x, row_index), [expected; 3]);
            }
        }
    }
}

pub mod path;
pub mod reader;
pub mod store;
pub mod writer;

/// Number of color channels per dot (red, green, blue).
pub const CHANNELS: usize = 3;
pub const MAX_CHANNEL_VALUE: i32 = 255;
pub const MIN_CHANNEL_VALUE: i32 = 0;

pub trait ImageReader {
    fn read_image(&mut self) -> crate::Result<PixelBuffer>;
}

pub trait ImageWriter {
    fn write_image(&mut self) -> crate::Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; CHANNELS] = [Channel::Red, Channel::Green, Channel::Blue];

    fn offset(&self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }
}

/// RGB raster stored as one flat row-major vector.
///
/// The value of `channel` for the dot at column `x` and row `y` lives at
/// `(y * width + x) * 3 + channel`. Every stored value is within
/// `[MIN_CHANNEL_VALUE, MAX_CHANNEL_VALUE]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    values: Vec<i32>,
}

impl PixelBuffer {
    /// Buffer of the given size where every channel holds `value`.
    pub fn filled(width: u32, height: u32, value: i32) -> Self {
        let length = width as usize * height as usize * CHANNELS;
        Self {
            width,
            height,
            values: vec![clamp_channel_value(value); length],
        }
    }

    /// Builds a buffer from interleaved 8 bit RGB samples.
    ///
    /// Returns `None` when the sample count does not match `width * height * 3`.
    pub fn from_rgb8(width: u32, height: u32, samples: &[u8]) -> Option<Self> {
        let expected_length = width as usize * height as usize * CHANNELS;
        if samples.len() != expected_length {
            return None;
        }
        Some(Self {
            width,
            height,
            values: samples.iter().map(|&sample| sample as i32).collect(),
        })
    }

    /// Interleaved 8 bit RGB samples, every value clamped to the channel range.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.values
            .iter()
            .map(|&value| clamp_channel_value(value) as u8)
            .collect()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn has_same_dimensions(&self, other: &PixelBuffer) -> bool {
        self.dimensions() == other.dimensions()
    }

    fn index(&self, column_index: u32, row_index: u32, channel: Channel) -> usize {
        (row_index as usize * self.width as usize + column_index as usize) * CHANNELS
            + channel.offset()
    }

    pub fn channel(&self, column_index: u32, row_index: u32, channel: Channel) -> i32 {
        self.values[self.index(column_index, row_index, channel)]
    }

    pub fn dot(&self, column_index: u32, row_index: u32) -> [i32; CHANNELS] {
        let start = self.index(column_index, row_index, Channel::Red);
        [
            self.values[start],
            self.values[start + 1],
            self.values[start + 2],
        ]
    }

    /// Writes a channel value, clamping it into the valid range.
    pub fn set_channel(&mut self, column_index: u32, row_index: u32, channel: Channel, value: i32) {
        let index = self.index(column_index, row_index, channel);
        self.values[index] = clamp_channel_value(value);
    }

    /// Sets red, green and blue of one dot to the same value.
    pub fn set_gray(&mut self, column_index: u32, row_index: u32, value: i32) {
        for channel in Channel::ALL {
            self.set_channel(column_index, row_index, channel, value);
        }
    }

    /// Read-only view of the interleaved values of a single row.
    pub fn row(&self, row_index: u32) -> &[i32] {
        let row_length = self.width as usize * CHANNELS;
        let start = row_index as usize * row_length;
        &self.values[start..start + row_length]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        (0..self.height).map(move |row_index| self.row(row_index))
    }
}

pub fn clamp_channel_value(value: i32) -> i32 {
    value.clamp(MIN_CHANNEL_VALUE, MAX_CHANNEL_VALUE)
}

//! Encoded image record for the desktop notification bus

use image::DynamicImage;

use crate::domain::error::ImageDecodeError;

/// Number of channels in the encoded layout (R, G, B, A)
pub const CHANNELS: i32 = 4;

/// Bytes per encoded pixel
pub const BYTES_PER_PIXEL: i32 = 4;

/// Bits per channel sample
pub const BITS_PER_SAMPLE: i32 = 8;

/// Ordered wire fields: width, height, stride, has_alpha, bits_per_sample,
/// channels, data
pub type ImageFields = (i32, i32, i32, bool, i32, i32, Vec<u8>);

/// A bitmap re-packed as channel-interleaved RGBA bytes.
///
/// Rows are stored in the source image's scan order with no padding, so
/// `row_stride == width * 4` and `data.len() == height * row_stride`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub width: i32,
    pub height: i32,
    pub row_stride: i32,
    pub has_alpha: bool,
    pub channels: i32,
    pub bits_per_sample: i32,
    pub data: Vec<u8>,
}

impl EncodedImage {
    /// An encoded image with no pixels
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            row_stride: 0,
            has_alpha: true,
            channels: CHANNELS,
            bits_per_sample: BITS_PER_SAMPLE,
            data: Vec::new(),
        }
    }

    /// Encode any bitmap.
    ///
    /// The source is normalised to 32-bit `0xAARRGGBB` pixels first, then
    /// each channel is extracted by shift-and-mask so the output does not
    /// depend on host byte order.
    pub fn encode(img: &DynamicImage) -> Self {
        let (Ok(width), Ok(height)) = (i32::try_from(img.width()), i32::try_from(img.height()))
        else {
            return Self::empty();
        };
        let Some(row_stride) = width.checked_mul(BYTES_PER_PIXEL) else {
            return Self::empty();
        };

        Self {
            width,
            height,
            row_stride,
            has_alpha: true,
            channels: CHANNELS,
            bits_per_sample: BITS_PER_SAMPLE,
            data: pack_rgba(&to_argb32(img)),
        }
    }

    /// Whether the record carries no pixels
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flatten into the ordered wire fields
    pub fn into_fields(self) -> ImageFields {
        (
            self.width,
            self.height,
            self.row_stride,
            self.has_alpha,
            self.bits_per_sample,
            self.channels,
            self.data,
        )
    }

    /// Rebuild from ordered wire fields, validating the layout
    pub fn from_fields(fields: ImageFields) -> Result<Self, ImageDecodeError> {
        let (width, height, row_stride, has_alpha, bits_per_sample, channels, data) = fields;

        if width < 0 || height < 0 {
            return Err(ImageDecodeError::NegativeDimensions { width, height });
        }
        if channels != CHANNELS || bits_per_sample != BITS_PER_SAMPLE {
            return Err(ImageDecodeError::UnsupportedLayout {
                channels,
                bits_per_sample,
            });
        }
        if i64::from(row_stride) != i64::from(width) * i64::from(BYTES_PER_PIXEL) {
            return Err(ImageDecodeError::StrideMismatch { width, row_stride });
        }
        let expected = i64::from(height) * i64::from(row_stride);
        if data.len() as i64 != expected {
            return Err(ImageDecodeError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            row_stride,
            has_alpha,
            channels,
            bits_per_sample,
            data,
        })
    }
}

/// Normalise to one `0xAARRGGBB` word per pixel, in scan order
fn to_argb32(img: &DynamicImage) -> Vec<u32> {
    img.to_rgba8()
        .pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            (u32::from(a) << 24) | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
        })
        .collect()
}

/// Re-pack ARGB words into R, G, B, A bytes
fn pack_rgba(pixels: &[u32]) -> Vec<u8> {
    let mut data = Vec::with_capacity(pixels.len() * BYTES_PER_PIXEL as usize);
    for &argb in pixels {
        data.push(((argb >> 16) & 0xff) as u8); // R
        data.push(((argb >> 8) & 0xff) as u8); // G
        data.push((argb & 0xff) as u8); // B
        data.push(((argb >> 24) & 0xff) as u8); // A
    }
    data
}

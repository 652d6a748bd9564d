//! Icon domain module

mod encoded;
mod standard_icon;

pub use encoded::{EncodedImage, ImageFields, BITS_PER_SAMPLE, BYTES_PER_PIXEL, CHANNELS};
pub use standard_icon::StandardIcon;

use image::imageops::FilterType;
use image::DynamicImage;

/// Icon edge for the desktop notification bus (the Ubuntu notification
/// guidelines ask for at least 128)
pub const DESKTOP_ICON_SIZE: u32 = 128;

/// Icon edge for the third-party notifier
pub const THIRD_PARTY_ICON_SIZE: u32 = 48;

/// Scale an image down to fit within `max` × `max`, keeping its aspect ratio.
///
/// Images that already fit are returned unchanged; nothing is upscaled.
pub fn fit_within(img: &DynamicImage, max: u32) -> DynamicImage {
    if img.width() <= max && img.height() <= max {
        img.clone()
    } else {
        img.resize(max, max, FilterType::Lanczos3)
    }
}

/// The caller's icon fitted to `size`, or the severity's standard icon
pub fn icon_or_default(
    icon: Option<&DynamicImage>,
    fallback: StandardIcon,
    size: u32,
) -> DynamicImage {
    match icon {
        Some(img) => fit_within(img, size),
        None => fallback.render(size),
    }
}

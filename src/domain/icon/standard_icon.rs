//! Default severity iconography
//!
//! Icons are rasterised procedurally at the requested size so no image
//! assets need to ship with the crate.

use image::{DynamicImage, Rgba, RgbaImage};

use crate::domain::notification::Severity;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const CHARCOAL: Rgba<u8> = Rgba([46, 52, 54, 255]);

/// Built-in message box icons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardIcon {
    Information,
    Warning,
    Error,
    Question,
}

impl StandardIcon {
    /// Default icon for a severity
    pub const fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Information => Self::Information,
            Severity::Warning => Self::Warning,
            Severity::Critical => Self::Error,
            Severity::None => Self::Question,
        }
    }

    const fn background(&self) -> Rgba<u8> {
        match self {
            Self::Information => Rgba([52, 101, 164, 255]),
            Self::Warning => Rgba([237, 212, 0, 255]),
            Self::Error => Rgba([204, 0, 0, 255]),
            Self::Question => Rgba([78, 154, 6, 255]),
        }
    }

    const fn glyph(&self) -> Rgba<u8> {
        match self {
            Self::Warning => CHARCOAL,
            _ => WHITE,
        }
    }

    /// Rasterise a `size` × `size` RGBA icon
    pub fn render(&self, size: u32) -> DynamicImage {
        let img = RgbaImage::from_fn(size, size, |x, y| {
            // Pixel centre in [-1, 1] on both axes
            let u = (x as f32 + 0.5) / size as f32 * 2.0 - 1.0;
            let v = (y as f32 + 0.5) / size as f32 * 2.0 - 1.0;

            if !self.in_shape(u, v) {
                TRANSPARENT
            } else if self.in_glyph(u, v) {
                self.glyph()
            } else {
                self.background()
            }
        });
        DynamicImage::ImageRgba8(img)
    }

    fn in_shape(&self, u: f32, v: f32) -> bool {
        match self {
            Self::Warning => {
                // Upward triangle, apex at top
                let (top, bottom) = (-0.85, 0.8);
                v >= top && v <= bottom && u.abs() <= (v - top) / (bottom - top) * 0.95
            }
            _ => u * u + v * v <= 0.9 * 0.9,
        }
    }

    fn in_glyph(&self, u: f32, v: f32) -> bool {
        let dot = |cx: f32, cy: f32, r: f32| (u - cx).powi(2) + (v - cy).powi(2) <= r * r;
        let bar = |half: f32, from: f32, to: f32| u.abs() <= half && v >= from && v <= to;

        match self {
            Self::Information => dot(0.0, -0.45, 0.12) || bar(0.09, -0.2, 0.5),
            Self::Warning => bar(0.08, -0.4, 0.3) || dot(0.0, 0.52, 0.1),
            Self::Error => {
                let inside = u.abs() <= 0.45 && v.abs() <= 0.45;
                inside && ((u - v).abs() <= 0.14 || (u + v).abs() <= 0.14)
            }
            Self::Question => {
                let r = (u * u + (v + 0.2).powi(2)).sqrt();
                let arc = (0.2..=0.34).contains(&r) && !(u < 0.0 && v > -0.2);
                arc || bar(0.08, 0.05, 0.3) || dot(0.0, 0.5, 0.1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::ALL_SEVERITIES;
    use image::GenericImageView;

    #[test]
    fn severity_mapping_is_bijective() {
        assert_eq!(StandardIcon::for_severity(Severity::Information), StandardIcon::Information);
        assert_eq!(StandardIcon::for_severity(Severity::Warning), StandardIcon::Warning);
        assert_eq!(StandardIcon::for_severity(Severity::Critical), StandardIcon::Error);
        assert_eq!(StandardIcon::for_severity(Severity::None), StandardIcon::Question);

        let mut icons: Vec<_> = ALL_SEVERITIES
            .iter()
            .map(|s| StandardIcon::for_severity(*s))
            .collect();
        icons.dedup();
        assert_eq!(icons.len(), ALL_SEVERITIES.len());
    }

    #[test]
    fn renders_requested_size() {
        let icon = StandardIcon::Information.render(48);
        assert_eq!(icon.dimensions(), (48, 48));
    }

    #[test]
    fn corners_are_transparent() {
        for icon in [
            StandardIcon::Information,
            StandardIcon::Warning,
            StandardIcon::Error,
            StandardIcon::Question,
        ] {
            let img = icon.render(32);
            assert_eq!(img.get_pixel(0, 0), TRANSPARENT);
            assert_eq!(img.get_pixel(31, 31), TRANSPARENT);
        }
    }

    #[test]
    fn icons_are_distinguishable() {
        let info = StandardIcon::Information.render(32);
        let error = StandardIcon::Error.render(32);
        assert_ne!(info.to_rgba8().into_raw(), error.to_rgba8().into_raw());
    }

    #[test]
    fn rendering_is_deterministic() {
        let a = StandardIcon::Question.render(24);
        let b = StandardIcon::Question.render(24);
        assert_eq!(a.to_rgba8().into_raw(), b.to_rgba8().into_raw());
    }
}

//! Raster primitives: decode, resize, composite and encode.
//!
//! Raster sources go through the `image` crate; SVG sources are parsed with
//! usvg and rendered into a tiny-skia pixmap, since density-bucket drawables
//! and icon sets are raster-only. Resizing uses Lanczos3 throughout.

use crate::error::{ResizeError, Result};
use image::{imageops::FilterType, DynamicImage, ImageBuffer, ImageOutputFormat, Rgba, RgbaImage};
use resvg::{tiny_skia, usvg};
use std::{fs::File, path::Path, str::FromStr};

/// Allowed source extensions, dot included.
pub const ALLOWED_EXTENSIONS: [&str; 4] = [".png", ".jpg", ".jpeg", ".svg"];

/// Longest edge of a rasterised vector source. Variants are downscaled from
/// this, so it only needs to stay above the largest generated size (1024).
const VECTOR_RASTER_EDGE: f32 = 1024.0;

/// A decoded source image plus the naming metadata derived from its path.
#[derive(Debug, Clone)]
pub struct SourceImage {
    image: DynamicImage,
    stem: String,
    extension: String,
    vector: bool,
}

impl SourceImage {
    /// Decode the image at `path`. SVG files are rasterised immediately.
    pub fn open(path: &Path) -> Result<Self> {
        let extension = extension_of(path).ok_or(ResizeError::UnsupportedExtension)?;
        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(ResizeError::UnsupportedExtension);
        }
        let vector = extension == ".svg";
        let image = if vector {
            rasterize_svg(path)?
        } else {
            image::open(path)?
        };
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        Ok(Self {
            image,
            stem,
            extension,
            vector,
        })
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn is_vector(&self) -> bool {
        self.vector
    }

    /// Extension for resized raster output; vectors are forced to `.png`.
    pub fn raster_extension(&self) -> &str {
        if self.vector {
            ".png"
        } else {
            &self.extension
        }
    }

    /// Resize to the given dimensions. An absent dimension is inferred from
    /// the source aspect ratio; at least one must be present.
    pub fn resize(&self, width: Option<u32>, height: Option<u32>) -> Result<DynamicImage> {
        let (w, h) = match (width, height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => (w, infer_dimension(w, self.width(), self.height())),
            (None, Some(h)) => (infer_dimension(h, self.height(), self.width()), h),
            (None, None) => return Err(ResizeError::BothAuto),
        };
        Ok(self.image.resize_exact(w, h, FilterType::Lanczos3))
    }

    /// Resize to exact square dimensions, ignoring aspect.
    pub fn resize_exact(&self, size: u32) -> DynamicImage {
        self.image.resize_exact(size, size, FilterType::Lanczos3)
    }

    /// Resize to fit inside a square bounding box, preserving aspect.
    pub fn fit_within(&self, size: u32) -> DynamicImage {
        self.image.resize(size, size, FilterType::Lanczos3)
    }
}

fn infer_dimension(known: u32, known_src: u32, other_src: u32) -> u32 {
    let ratio = other_src as f64 / known_src as f64;
    ((known as f64 * ratio).round() as u32).max(1)
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
}

fn rasterize_svg(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(ResizeError::SourceMissing(path.to_path_buf()));
    }
    let svg_err = |message: String| ResizeError::Svg {
        path: path.to_path_buf(),
        message,
    };
    let data = std::fs::read(path)?;
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &options).map_err(|e| svg_err(e.to_string()))?;
    let size = tree.size();
    let scale = (VECTOR_RASTER_EDGE / size.width().max(size.height())).max(1.0);
    let width = (size.width() * scale).round() as u32;
    let height = (size.height() * scale).round() as u32;
    let mut pixmap = tiny_skia::Pixmap::new(width.max(1), height.max(1))
        .ok_or_else(|| svg_err("zero-sized canvas".to_string()))?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let mut rgba = Vec::with_capacity(pixmap.pixels().len() * 4);
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    let buffer = RgbaImage::from_raw(pixmap.width(), pixmap.height(), rgba)
        .ok_or_else(|| svg_err("pixmap size mismatch".to_string()))?;
    Ok(DynamicImage::ImageRgba8(buffer))
}

/// Fully transparent square canvas.
pub fn transparent_canvas(size: u32) -> RgbaImage {
    ImageBuffer::from_fn(size, size, |_, _| Rgba([0, 0, 0, 0]))
}

/// Opaque square canvas filled with `color`.
pub fn solid_canvas(size: u32, color: Rgba<u8>) -> RgbaImage {
    ImageBuffer::from_fn(size, size, |_, _| color)
}

/// Square canvas with a filled circle of `color`, antialiased one pixel at
/// the rim, transparent outside.
pub fn circle_canvas(size: u32, color: Rgba<u8>) -> RgbaImage {
    let center = size as f32 / 2.0;
    let radius = center;
    ImageBuffer::from_fn(size, size, |x, y| {
        let dx = x as f32 + 0.5 - center;
        let dy = y as f32 + 0.5 - center;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance > radius {
            Rgba([0, 0, 0, 0])
        } else if distance > radius - 1.0 {
            let alpha = (radius - distance).clamp(0.0, 1.0);
            Rgba([color[0], color[1], color[2], (color[3] as f32 * alpha) as u8])
        } else {
            color
        }
    })
}

/// Draw `layer` centred on `canvas`. Layers larger than the canvas are
/// clipped by the overlay primitive.
pub fn overlay_centered(canvas: &mut RgbaImage, layer: &DynamicImage) {
    let x = (canvas.width().saturating_sub(layer.width())) / 2;
    let y = (canvas.height().saturating_sub(layer.height())) / 2;
    image::imageops::overlay(canvas, layer, x.into(), y.into());
}

/// Parse a CSS colour or a bare hex triplet (the `FFFFFF` form the original
/// prompt accepted) into an opaque RGBA pixel.
pub fn parse_color(input: &str) -> Result<Rgba<u8>> {
    let trimmed = input.trim();
    let candidate = if trimmed.starts_with('#') {
        trimmed.to_string()
    } else {
        format!("#{trimmed}")
    };
    let srgb = css_color::Srgb::from_str(&candidate)
        .map_err(|_| ResizeError::InvalidColor(input.to_string()))?;
    Ok(Rgba([
        (srgb.red * 255.0) as u8,
        (srgb.green * 255.0) as u8,
        (srgb.blue * 255.0) as u8,
        255,
    ]))
}

/// Normalised hex representation without the `#` prefix, as stored in
/// Android colour resources.
pub fn normalize_hex(input: &str) -> String {
    input.trim().trim_start_matches('#').to_uppercase()
}

/// Encode to the format implied by the destination extension. JPEG output
/// drops the alpha channel; everything else is written as PNG.
pub fn save_image(image: &DynamicImage, path: &Path) -> Result<()> {
    let extension = extension_of(path).unwrap_or_else(|| ".png".to_string());
    let mut file = File::create(path)?;
    match extension.as_str() {
        ".jpg" | ".jpeg" => DynamicImage::ImageRgb8(image.to_rgb8())
            .write_to(&mut file, ImageOutputFormat::Jpeg(90))?,
        _ => image.write_to(&mut file, ImageOutputFormat::Png)?,
    }
    Ok(())
}

/// Whether a path has one of the allowed source extensions.
pub fn is_supported_image(path: &Path) -> bool {
    matches!(extension_of(path), Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()))
}

/// Check a source path exists and looks like a supported image.
pub fn validate_source_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ResizeError::SourceMissing(path.to_path_buf()));
    }
    if !is_supported_image(path) {
        return Err(ResizeError::UnsupportedExtension);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_source(width: u32, height: u32) -> SourceImage {
        let pixels = ImageBuffer::from_fn(width, height, |_, _| Rgba([10, 20, 30, 255]));
        SourceImage {
            image: DynamicImage::ImageRgba8(pixels),
            stem: "test".to_string(),
            extension: ".png".to_string(),
            vector: false,
        }
    }

    #[test]
    fn resize_infers_missing_dimension_from_aspect() {
        let source = test_source(200, 100);
        let resized = source.resize(Some(48), None).unwrap();
        assert_eq!((resized.width(), resized.height()), (48, 24));

        let resized = source.resize(None, Some(50)).unwrap();
        assert_eq!((resized.width(), resized.height()), (100, 50));
    }

    #[test]
    fn resize_with_both_dimensions_ignores_aspect() {
        let source = test_source(200, 100);
        let resized = source.resize(Some(10), Some(90)).unwrap();
        assert_eq!((resized.width(), resized.height()), (10, 90));
    }

    #[test]
    fn resize_with_neither_dimension_is_rejected() {
        let source = test_source(200, 100);
        assert!(matches!(
            source.resize(None, None),
            Err(ResizeError::BothAuto)
        ));
    }

    #[test]
    fn circle_canvas_is_transparent_at_corners_and_solid_at_center() {
        let canvas = circle_canvas(48, Rgba([255, 0, 0, 255]));
        assert_eq!(canvas.get_pixel(0, 0)[3], 0);
        assert_eq!(*canvas.get_pixel(24, 24), Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn parses_hex_with_and_without_prefix() {
        assert_eq!(parse_color("FFFFFF").unwrap(), Rgba([255, 255, 255, 255]));
        assert_eq!(parse_color("#000000").unwrap(), Rgba([0, 0, 0, 255]));
        assert!(matches!(
            parse_color("not-a-color"),
            Err(ResizeError::InvalidColor(_))
        ));
    }

    #[test]
    fn hex_normalization_strips_prefix_and_uppercases() {
        assert_eq!(normalize_hex("#a1b2c3"), "A1B2C3");
        assert_eq!(normalize_hex("FFFFFF"), "FFFFFF");
    }

    #[test]
    fn extension_checks() {
        assert!(is_supported_image(Path::new("a/b/logo.PNG")));
        assert!(is_supported_image(Path::new("logo.svg")));
        assert!(!is_supported_image(Path::new("logo.gif")));
        assert!(!is_supported_image(Path::new("logo")));
    }
}

//! Android asset generation: density-bucket drawables, adaptive app icons
//! and notification icons, plus the XML resources binding them.

use crate::error::{ResizeError, Result};
use crate::manifest::{adaptive_icon_xml, color_resource_xml};
use crate::raster::{
    self, circle_canvas, overlay_centered, parse_color, save_image, transparent_canvas,
    SourceImage,
};
use crate::report::Reporter;
use crate::scale::AndroidDensity;
use crate::size::Dimension;
use image::DynamicImage;
use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;

/// Adaptive icon canvas edge in dp. The outer ring beyond the 66dp safe zone
/// is reserved for mask effects applied by the launcher.
pub const ADAPTIVE_CANVAS_DP: f32 = 108.0;

/// Legacy launcher icon canvas edge in dp.
pub const LEGACY_CANVAS_DP: f32 = 48.0;

/// Notification icon canvas edge in dp.
pub const NOTIFICATION_CANVAS_DP: f32 = 24.0;

/// Fraction of the adaptive canvas the foreground may occupy at padding 0.
pub const ADAPTIVE_FOREGROUND_RATIO: f32 = 0.48;

/// Fraction of the legacy round canvas the foreground may occupy at
/// padding 0. The round mask clips less aggressively than adaptive shapes,
/// hence the larger safe zone.
pub const LEGACY_FOREGROUND_RATIO: f32 = 0.64;

/// Fraction of the notification canvas the silhouette is fitted into.
pub const NOTIFICATION_FIT_RATIO: f32 = 0.9;

/// Options for density-bucket drawable generation.
#[derive(Debug, Clone)]
pub struct ResizeOptions {
    pub output_dir: PathBuf,
    pub image_name: String,
    pub width: Dimension,
    pub height: Dimension,
}

/// Background layer of the launcher icon. The two arms are mutually
/// exclusive by construction.
#[derive(Debug, Clone)]
pub enum IconBackground {
    /// Solid colour, stored as a hex string without the `#` prefix. Rendered
    /// as a circle mask on the legacy icon and referenced as a colour
    /// resource from the adaptive XML.
    Color(String),
    /// External background image, stretched to the canvas.
    Image(PathBuf),
}

impl IconBackground {
    /// Build from the raw option pair, enforcing that exactly one is set.
    pub fn from_parts(color: Option<String>, image: Option<PathBuf>) -> Result<Self> {
        match (color, image) {
            (Some(_), Some(_)) => Err(ResizeError::ConflictingBackground),
            (Some(color), None) => Ok(IconBackground::Color(raster::normalize_hex(&color))),
            (None, Some(path)) => Ok(IconBackground::Image(path)),
            (None, None) => Err(ResizeError::MissingBackground),
        }
    }
}

/// Options for adaptive/round app-icon generation.
#[derive(Debug, Clone)]
pub struct AppIconOptions {
    pub output_dir: PathBuf,
    pub background: IconBackground,
    /// Colour resource file name; required for the colour background arm.
    pub color_file: Option<String>,
    /// Extra inset applied to the foreground, in `[0, 1)`.
    pub padding_factor: f32,
}

impl AppIconOptions {
    /// Validate before any file I/O begins.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.padding_factor) {
            return Err(ResizeError::PaddingOutOfRange(self.padding_factor));
        }
        if let IconBackground::Color(hex) = &self.background {
            parse_color(hex)?;
            if self.color_file.as_deref().map_or(true, str::is_empty) {
                return Err(ResizeError::MissingColorFile);
            }
        }
        Ok(())
    }
}

/// Options for notification icon generation.
#[derive(Debug, Clone)]
pub struct NotificationIconOptions {
    pub output_dir: PathBuf,
    pub image_name: String,
}

/// Foreground resize ratio after applying the padding inset.
pub fn foreground_ratio(base_ratio: f32, padding_factor: f32) -> f32 {
    base_ratio * (1.0 - padding_factor)
}

/// Concrete foreground edge for a canvas, rounded half-up.
pub fn foreground_target(canvas: u32, base_ratio: f32, padding_factor: f32) -> u32 {
    ((canvas as f32 * foreground_ratio(base_ratio, padding_factor)).round() as u32).max(1)
}

fn canvas_size(dp: f32, factor: f32) -> u32 {
    ((dp * factor).round() as u32).max(1)
}

/// Resize the source into `drawable-<density>/<name><ext>` for every density
/// bucket concurrently. Vector sources come in pre-rasterised, so the
/// extension is already `.png` for them.
pub fn resize_image(source: &SourceImage, options: &ResizeOptions, report: &Reporter) -> Result<()> {
    AndroidDensity::values().into_par_iter().try_for_each(|density| {
        let dir = options.output_dir.join(density.drawable_dir());
        fs::create_dir_all(&dir)?;
        let factor = density.factor();
        let width = options.width.scaled(factor);
        let height = options.height.scaled(factor);
        report.info(&format!(
            "resizing image for screen type {} <{}x{}>",
            density.identifier(),
            describe(width),
            describe(height),
        ));
        let resized = source.resize(width, height)?;
        let file = dir.join(format!(
            "{}{}",
            options.image_name,
            source.raster_extension()
        ));
        save_image(&resized, &file)
    })
}

/// Generate the adaptive foreground layer and the legacy round icon for
/// every density, then the XML resources binding the layers together.
pub fn generate_app_icons(
    source: &SourceImage,
    options: &AppIconOptions,
    report: &Reporter,
) -> Result<()> {
    options.validate()?;

    let background_image = match &options.background {
        IconBackground::Image(path) => {
            raster::validate_source_path(path)?;
            Some(SourceImage::open(path)?)
        }
        IconBackground::Color(_) => None,
    };

    AndroidDensity::values().into_par_iter().try_for_each(|density| -> Result<()> {
        let dir = options.output_dir.join(density.mipmap_dir());
        fs::create_dir_all(&dir)?;
        let factor = density.factor();

        // Adaptive foreground layer: transparent 108dp canvas, foreground
        // centred inside the safe zone.
        let adaptive_edge = canvas_size(ADAPTIVE_CANVAS_DP, factor);
        let target = foreground_target(adaptive_edge, ADAPTIVE_FOREGROUND_RATIO, options.padding_factor);
        let mut canvas = transparent_canvas(adaptive_edge);
        overlay_centered(&mut canvas, &source.fit_within(target));
        save_image(
            &DynamicImage::ImageRgba8(canvas),
            &dir.join("ic_launcher_foreground.png"),
        )?;

        // Adaptive background layer only exists as a bitmap for the external
        // image arm; the colour arm is a resource reference.
        if let Some(background) = &background_image {
            save_image(
                &background.resize_exact(adaptive_edge),
                &dir.join("ic_launcher_background.png"),
            )?;
        }

        // Legacy round icon: background drawn first, foreground on top.
        let legacy_edge = canvas_size(LEGACY_CANVAS_DP, factor);
        let mut round = transparent_canvas(legacy_edge);
        match &options.background {
            IconBackground::Color(hex) => {
                let color = parse_color(hex)?;
                overlay_centered(
                    &mut round,
                    &DynamicImage::ImageRgba8(circle_canvas(legacy_edge, color)),
                );
            }
            IconBackground::Image(_) => {
                if let Some(background) = &background_image {
                    overlay_centered(&mut round, &background.resize_exact(legacy_edge));
                }
            }
        }
        let round_target =
            foreground_target(legacy_edge, LEGACY_FOREGROUND_RATIO, options.padding_factor);
        overlay_centered(&mut round, &source.fit_within(round_target));
        save_image(
            &DynamicImage::ImageRgba8(round),
            &dir.join("ic_launcher_round.png"),
        )?;

        report.info(&format!(
            "generated app icon layers for screen type {}",
            density.identifier()
        ));
        Ok(())
    })?;

    write_icon_resources(options, report)
}

fn write_icon_resources(options: &AppIconOptions, report: &Reporter) -> Result<()> {
    let anydpi_dir = options.output_dir.join("mipmap-anydpi-v26");
    fs::create_dir_all(&anydpi_dir)?;
    let background_ref = match (&options.background, &options.color_file) {
        (IconBackground::Color(_), Some(name)) => format!("@color/{name}"),
        _ => "@mipmap/ic_launcher_background".to_string(),
    };
    fs::write(
        anydpi_dir.join("ic_launcher.xml"),
        adaptive_icon_xml(&background_ref),
    )?;
    report.info("generated mipmap-anydpi-v26/ic_launcher.xml");

    if let (IconBackground::Color(hex), Some(name)) = (&options.background, &options.color_file) {
        let values_dir = options.output_dir.join("values");
        fs::create_dir_all(&values_dir)?;
        fs::write(
            values_dir.join(format!("{name}.xml")),
            color_resource_xml(name, hex),
        )?;
        report.info(&format!("generated values/{name}.xml"));
    }
    Ok(())
}

/// Fit the source into 90% of a transparent 24dp canvas per density. The
/// monochrome-silhouette convention is the caller's responsibility.
pub fn generate_notification_icons(
    source: &SourceImage,
    options: &NotificationIconOptions,
    report: &Reporter,
) -> Result<()> {
    AndroidDensity::values().into_par_iter().try_for_each(|density| {
        let dir = options.output_dir.join(density.drawable_dir());
        fs::create_dir_all(&dir)?;
        let edge = canvas_size(NOTIFICATION_CANVAS_DP, density.factor());
        let target = ((edge as f32 * NOTIFICATION_FIT_RATIO).round() as u32).max(1);
        let mut canvas = transparent_canvas(edge);
        overlay_centered(&mut canvas, &source.fit_within(target));
        let file = dir.join(format!("{}.png", options.image_name));
        save_image(&DynamicImage::ImageRgba8(canvas), &file)?;
        report.info(&format!(
            "generated notification icon for screen type {}",
            density.identifier()
        ));
        Ok(())
    })
}

fn describe(dimension: Option<u32>) -> String {
    match dimension {
        Some(px) => px.to_string(),
        None => "auto".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_halves_the_foreground_ratio() {
        let full = foreground_ratio(ADAPTIVE_FOREGROUND_RATIO, 0.0);
        let half = foreground_ratio(ADAPTIVE_FOREGROUND_RATIO, 0.5);
        assert_eq!(half, full / 2.0);
    }

    #[test]
    fn padding_halves_the_computed_target() {
        // mdpi adaptive canvas: 108 * 0.48 = 51.84 -> 52, half -> 26.
        assert_eq!(foreground_target(108, ADAPTIVE_FOREGROUND_RATIO, 0.0), 52);
        assert_eq!(foreground_target(108, ADAPTIVE_FOREGROUND_RATIO, 0.5), 26);
    }

    #[test]
    fn legacy_target_uses_the_larger_safe_zone() {
        assert_eq!(foreground_target(48, LEGACY_FOREGROUND_RATIO, 0.0), 31);
        assert!(
            foreground_ratio(LEGACY_FOREGROUND_RATIO, 0.0)
                > foreground_ratio(ADAPTIVE_FOREGROUND_RATIO, 0.0)
        );
    }

    #[test]
    fn canvas_sizes_scale_with_density() {
        assert_eq!(canvas_size(ADAPTIVE_CANVAS_DP, 1.5), 162);
        assert_eq!(canvas_size(LEGACY_CANVAS_DP, 4.0), 192);
        assert_eq!(canvas_size(NOTIFICATION_CANVAS_DP, 1.5), 36);
    }

    #[test]
    fn background_parts_are_mutually_exclusive() {
        assert!(matches!(
            IconBackground::from_parts(Some("FFFFFF".into()), Some("bg.png".into())),
            Err(ResizeError::ConflictingBackground)
        ));
        assert!(matches!(
            IconBackground::from_parts(None, None),
            Err(ResizeError::MissingBackground)
        ));
        assert!(matches!(
            IconBackground::from_parts(Some("#a1b2c3".into()), None),
            Ok(IconBackground::Color(hex)) if hex == "A1B2C3"
        ));
    }

    #[test]
    fn app_icon_options_validation() {
        let base = AppIconOptions {
            output_dir: PathBuf::from("out"),
            background: IconBackground::Color("FFFFFF".into()),
            color_file: Some("ic_launcher_background".into()),
            padding_factor: 0.0,
        };
        assert!(base.validate().is_ok());

        let out_of_range = AppIconOptions {
            padding_factor: 1.0,
            ..base.clone()
        };
        assert!(matches!(
            out_of_range.validate(),
            Err(ResizeError::PaddingOutOfRange(_))
        ));

        let missing_color_file = AppIconOptions {
            color_file: None,
            ..base.clone()
        };
        assert!(matches!(
            missing_color_file.validate(),
            Err(ResizeError::MissingColorFile)
        ));

        let bad_color = AppIconOptions {
            background: IconBackground::Color("ZZZ".into()),
            ..base
        };
        assert!(matches!(
            bad_color.validate(),
            Err(ResizeError::InvalidColor(_))
        ));
    }
}

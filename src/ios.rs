//! iOS asset generation: scale-variant image sets and app-icon sets with
//! their `Contents.json` manifests.

use crate::error::Result;
use crate::manifest::{
    self, app_icon_template, universal_image_template, write_contents_json, APP_ICON_SPECS,
};
use crate::raster::{overlay_centered, parse_color, save_image, solid_canvas, SourceImage};
use crate::report::Reporter;
use crate::scale::IosScale;
use crate::size::Dimension;
use image::DynamicImage;
use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;

/// Fraction of the icon canvas the source occupies when composited over a
/// background colour.
pub const BACKGROUND_FIT_RATIO: f32 = 0.9;

/// Options for universal image-set generation.
#[derive(Debug, Clone)]
pub struct ResizeOptions {
    pub output_dir: PathBuf,
    /// PascalCase stem used for the variant filenames.
    pub image_name: String,
    pub width: Dimension,
    pub height: Dimension,
}

/// Options for app-icon set generation.
#[derive(Debug, Clone)]
pub struct AppIconOptions {
    pub output_dir: PathBuf,
    pub image_name: String,
    /// Optional solid background; without it the source is resized directly.
    pub background_color: Option<String>,
}

/// Resize the source into `<Name>@<n>x.<ext>` for the three scale variants
/// concurrently, then write the universal `Contents.json`.
pub fn resize_image(source: &SourceImage, options: &ResizeOptions, report: &Reporter) -> Result<()> {
    fs::create_dir_all(&options.output_dir)?;

    IosScale::values().into_par_iter().try_for_each(|scale| {
        let factor = scale.factor();
        let width = options.width.scaled(factor);
        let height = options.height.scaled(factor);
        report.info(&format!(
            "resizing ios image for screen type {} <{}x{}>",
            scale.suffix(),
            describe(width),
            describe(height),
        ));
        let resized = source.resize(width, height)?;
        let file = options.output_dir.join(format!(
            "{}{}{}",
            options.image_name,
            scale.suffix(),
            source.raster_extension()
        ));
        save_image(&resized, &file)
    })?;

    let contents = manifest::instantiate(&universal_image_template(), &options.image_name);
    write_contents_json(&options.output_dir, &contents)?;
    report.info("generated ios Contents.json");
    Ok(())
}

/// Produce every entry of the required app-icon table plus its manifest.
///
/// With a background colour the source is fitted into 90% of a solid canvas;
/// without one it is resized directly to the target size. Entries sharing a
/// point size and scale across idioms share a filename, so those files are
/// written (identically) more than once.
pub fn generate_app_icons(
    source: &SourceImage,
    options: &AppIconOptions,
    report: &Reporter,
) -> Result<()> {
    let background = options
        .background_color
        .as_deref()
        .map(parse_color)
        .transpose()?;

    fs::create_dir_all(&options.output_dir)?;

    APP_ICON_SPECS.into_par_iter().try_for_each(|spec| {
        let edge = spec.pixel_size();
        let icon = match background {
            Some(color) => {
                let mut canvas = solid_canvas(edge, color);
                let target = ((edge as f32 * BACKGROUND_FIT_RATIO).round() as u32).max(1);
                overlay_centered(&mut canvas, &source.fit_within(target));
                DynamicImage::ImageRgba8(canvas)
            }
            None => source.resize_exact(edge),
        };
        let filename = spec.filename(&options.image_name);
        report.info(&format!("generating ios app icon {filename} <{edge}x{edge}>"));
        save_image(&icon, &options.output_dir.join(filename))
    })?;

    let contents = manifest::instantiate(&app_icon_template(), &options.image_name);
    write_contents_json(&options.output_dir, &contents)?;
    report.info("generated ios app icon Contents.json");
    Ok(())
}

fn describe(dimension: Option<u32>) -> String {
    match dimension {
        Some(px) => px.to_string(),
        None => "auto".to_string(),
    }
}

//! airesize - multi-target mobile asset generation pipeline
//!
//! Takes a single source image and produces density-scaled raster variants
//! and packaged icon sets for Android and iOS, plus the manifest files
//! (density XML resources, `Contents.json`) those platforms expect.

pub mod android;
pub mod error;
pub mod ios;
pub mod manifest;
pub mod naming;
pub mod orchestrate;
pub mod raster;
pub mod report;
pub mod scale;
pub mod size;

pub use error::{ResizeError, Result};
pub use orchestrate::{run, RunOptions};
pub use raster::SourceImage;
pub use report::Reporter;
pub use scale::{AndroidDensity, IosScale};
pub use size::Dimension;

use std::path::Path;

/// Generate density-bucket drawables for Android.
pub fn generate_android_images(source: &Path, options: &android::ResizeOptions) -> Result<()> {
    let image = SourceImage::open(source)?;
    android::resize_image(&image, options, &Reporter::silent())
}

/// Generate adaptive/round Android app icons.
pub fn generate_android_app_icons(source: &Path, options: &android::AppIconOptions) -> Result<()> {
    let image = SourceImage::open(source)?;
    android::generate_app_icons(&image, options, &Reporter::silent())
}

/// Generate Android notification icons.
pub fn generate_android_notification_icons(
    source: &Path,
    options: &android::NotificationIconOptions,
) -> Result<()> {
    let image = SourceImage::open(source)?;
    android::generate_notification_icons(&image, options, &Reporter::silent())
}

/// Generate the three iOS scale variants plus their `Contents.json`.
pub fn generate_ios_images(source: &Path, options: &ios::ResizeOptions) -> Result<()> {
    let image = SourceImage::open(source)?;
    ios::resize_image(&image, options, &Reporter::silent())
}

/// Generate the full iOS app-icon set plus its `Contents.json`.
pub fn generate_ios_app_icons(source: &Path, options: &ios::AppIconOptions) -> Result<()> {
    let image = SourceImage::open(source)?;
    ios::generate_app_icons(&image, options, &Reporter::silent())
}

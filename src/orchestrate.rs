//! Request validation and concurrent fan-out across the selected
//! generation operations.
//!
//! All validation happens before the source image is decoded and before any
//! generation unit starts. Jobs then run as a rayon scatter/gather: the
//! batch fails on the first error, but siblings already running are not
//! cancelled, so a failed invocation may leave partial output on disk.

use crate::android;
use crate::error::{ResizeError, Result};
use crate::ios;
use crate::naming::{to_pascal_case, to_snake_case};
use crate::raster::{self, parse_color, SourceImage};
use crate::report::Reporter;
use crate::size;
use rayon::prelude::*;
use std::path::PathBuf;

/// A validated invocation: source, output root, requested sizes, platform
/// selection and icon styling. Consumed once.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub source_path: PathBuf,
    /// Output root; defaults to a directory named after the source image,
    /// created next to it.
    pub output_root: Option<PathBuf>,
    pub width: Option<String>,
    pub height: Option<String>,

    pub android: bool,
    pub android_app_icon: bool,
    pub android_notification_icon: bool,
    pub ios: bool,
    pub ios_app_icon: bool,

    pub background_color: Option<String>,
    pub background_image: Option<PathBuf>,
    pub color_file: Option<String>,
    pub padding_factor: f32,
    pub ios_background_color: Option<String>,
}

impl RunOptions {
    fn wants_resize(&self) -> bool {
        self.android || self.ios
    }

    fn wants_anything(&self) -> bool {
        self.android
            || self.android_app_icon
            || self.android_notification_icon
            || self.ios
            || self.ios_app_icon
    }
}

enum Job {
    AndroidResize(android::ResizeOptions),
    AndroidAppIcons(android::AppIconOptions),
    AndroidNotificationIcons(android::NotificationIconOptions),
    IosResize(ios::ResizeOptions),
    IosAppIcons(ios::AppIconOptions),
}

impl Job {
    fn run(&self, source: &SourceImage, report: &Reporter) -> Result<()> {
        match self {
            Job::AndroidResize(options) => android::resize_image(source, options, report),
            Job::AndroidAppIcons(options) => android::generate_app_icons(source, options, report),
            Job::AndroidNotificationIcons(options) => {
                android::generate_notification_icons(source, options, report)
            }
            Job::IosResize(options) => ios::resize_image(source, options, report),
            Job::IosAppIcons(options) => ios::generate_app_icons(source, options, report),
        }
    }
}

/// Validate the request, fan out the selected operations concurrently and
/// return the output root on success. All-or-nothing: the first error fails
/// the whole invocation.
pub fn run(options: &RunOptions, report: &Reporter) -> Result<PathBuf> {
    if !options.wants_anything() {
        return Err(ResizeError::NothingToGenerate);
    }
    raster::validate_source_path(&options.source_path)?;

    let root = match &options.output_root {
        Some(root) => root.clone(),
        None => {
            let stem = options
                .source_path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "image".to_string());
            options
                .source_path
                .parent()
                .map(PathBuf::from)
                .unwrap_or_default()
                .join(stem)
        }
    };

    let jobs = build_jobs(options, &root)?;

    let source = SourceImage::open(&options.source_path)?;
    jobs.par_iter().try_for_each(|job| job.run(&source, report))?;

    Ok(root)
}

/// Resolve every per-operation option struct up front so that all validation
/// errors surface before any generation unit starts.
fn build_jobs(options: &RunOptions, root: &PathBuf) -> Result<Vec<Job>> {
    let stem = options
        .source_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let android_name = to_snake_case(&stem);
    let ios_name = to_pascal_case(&stem);

    let sizes = if options.wants_resize() {
        Some(size::parse_pair(
            options.width.as_deref(),
            options.height.as_deref(),
        )?)
    } else {
        None
    };

    let mut jobs = Vec::new();

    if options.android {
        let (width, height) = sizes.expect("sizes parsed when a resize platform is selected");
        jobs.push(Job::AndroidResize(android::ResizeOptions {
            output_dir: root.join("android"),
            image_name: android_name.clone(),
            width,
            height,
        }));
    }
    if options.android_app_icon {
        let icon_options = android::AppIconOptions {
            output_dir: root.join("android-app-icons"),
            background: android::IconBackground::from_parts(
                options.background_color.clone(),
                options.background_image.clone(),
            )?,
            color_file: options.color_file.clone(),
            padding_factor: options.padding_factor,
        };
        icon_options.validate()?;
        jobs.push(Job::AndroidAppIcons(icon_options));
    }
    if options.android_notification_icon {
        jobs.push(Job::AndroidNotificationIcons(
            android::NotificationIconOptions {
                output_dir: root.join("android-notification-icons"),
                image_name: android_name,
            },
        ));
    }
    if options.ios {
        let (width, height) = sizes.expect("sizes parsed when a resize platform is selected");
        jobs.push(Job::IosResize(ios::ResizeOptions {
            output_dir: root.join("ios"),
            image_name: ios_name.clone(),
            width,
            height,
        }));
    }
    if options.ios_app_icon {
        if let Some(color) = &options.ios_background_color {
            parse_color(color)?;
        }
        jobs.push(Job::IosAppIcons(ios::AppIconOptions {
            output_dir: root.join("ios-app-icons"),
            image_name: ios_name,
            background_color: options.ios_background_color.clone(),
        }));
    }

    Ok(jobs)
}

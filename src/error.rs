use std::path::PathBuf;
use thiserror::Error;

/// Main error type for asset generation.
///
/// Validation variants are raised before any generation unit starts; the
/// remaining variants are primitive failures (decode, resize, encode, disk)
/// that abort the whole invocation.
#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("image not found: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("only .png, .jpg, .jpeg, .svg extensions are allowed")]
    UnsupportedExtension,

    #[error("{0} is required")]
    MissingSize(&'static str),

    #[error("only auto | number is allowed for {field}, got \"{value}\"")]
    InvalidSize { field: &'static str, value: String },

    #[error("{0} should be greater than 1")]
    SizeTooSmall(&'static str),

    #[error("you can't use auto for both width and height at the same time")]
    BothAuto,

    #[error("app icon background color and background image are mutually exclusive")]
    ConflictingBackground,

    #[error("an app icon background color or a background image is required")]
    MissingBackground,

    #[error("a color file name is required when a background color is supplied")]
    MissingColorFile,

    #[error("padding factor should be within [0, 1), got {0}")]
    PaddingOutOfRange(f32),

    #[error("invalid color value: {0}")]
    InvalidColor(String),

    #[error(
        "pass at least one of --android, --android-app-icon, \
         --android-notification-icon, --ios or/and --ios-app-icon"
    )]
    NothingToGenerate,

    #[error("failed to render svg {}: {message}", .path.display())]
    Svg { path: PathBuf, message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to serialize manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ResizeError>;

//! Manifest templates for the generated asset bundles.
//!
//! The `Contents.json` model mirrors Apple's asset catalog schema, trimmed to
//! the fields app icon and universal image sets actually carry. Templates are
//! immutable constants with an `[IMAGE_NAME]` placeholder; instantiation is a
//! pure deep-copy-plus-substitution, the shared template is never mutated.

use crate::error::Result;
use serde::Serialize;
use std::path::Path;

/// Placeholder substituted with the output image name at instantiation time.
pub const IMAGE_NAME_PLACEHOLDER: &str = "[IMAGE_NAME]";

/// Provenance tag written into every generated `Contents.json`.
pub const MANIFEST_AUTHOR: &str = "xcode";
pub const MANIFEST_VERSION: u8 = 1;

/// Root structure of a `Contents.json` file.
#[derive(Serialize, Debug, Clone)]
pub struct ContentsFile {
    pub images: Vec<ContentsImage>,
    pub info: ContentsInfo,
}

/// One image entry: filename, device idiom, scale and, for app icons, the
/// logical point size.
#[derive(Serialize, Debug, Clone)]
pub struct ContentsImage {
    pub filename: String,
    pub idiom: String,
    pub scale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct ContentsInfo {
    pub author: String,
    pub version: u8,
}

impl ContentsInfo {
    fn provenance() -> Self {
        Self {
            author: MANIFEST_AUTHOR.to_string(),
            version: MANIFEST_VERSION,
        }
    }
}

/// One row of the required iOS app-icon table: nominal point size, scale
/// multiplier and device idiom.
#[derive(Debug, Clone, Copy)]
pub struct AppIconSpec {
    pub nominal: f32,
    pub scale: u32,
    pub idiom: &'static str,
}

/// The 19 entries mandated by Apple's icon-set specification, in catalog
/// order. Fixed by platform tooling; not reconfigurable.
pub const APP_ICON_SPECS: [AppIconSpec; 19] = [
    AppIconSpec { nominal: 20.0, scale: 2, idiom: "iphone" },
    AppIconSpec { nominal: 20.0, scale: 3, idiom: "iphone" },
    AppIconSpec { nominal: 29.0, scale: 1, idiom: "iphone" },
    AppIconSpec { nominal: 29.0, scale: 2, idiom: "iphone" },
    AppIconSpec { nominal: 29.0, scale: 3, idiom: "iphone" },
    AppIconSpec { nominal: 40.0, scale: 2, idiom: "iphone" },
    AppIconSpec { nominal: 40.0, scale: 3, idiom: "iphone" },
    AppIconSpec { nominal: 60.0, scale: 2, idiom: "iphone" },
    AppIconSpec { nominal: 60.0, scale: 3, idiom: "iphone" },
    AppIconSpec { nominal: 20.0, scale: 1, idiom: "ipad" },
    AppIconSpec { nominal: 20.0, scale: 2, idiom: "ipad" },
    AppIconSpec { nominal: 29.0, scale: 1, idiom: "ipad" },
    AppIconSpec { nominal: 29.0, scale: 2, idiom: "ipad" },
    AppIconSpec { nominal: 40.0, scale: 1, idiom: "ipad" },
    AppIconSpec { nominal: 40.0, scale: 2, idiom: "ipad" },
    AppIconSpec { nominal: 76.0, scale: 1, idiom: "ipad" },
    AppIconSpec { nominal: 76.0, scale: 2, idiom: "ipad" },
    AppIconSpec { nominal: 83.5, scale: 2, idiom: "ipad" },
    AppIconSpec { nominal: 1024.0, scale: 1, idiom: "ios-marketing" },
];

impl AppIconSpec {
    /// Logical size string, e.g. `20x20` or `83.5x83.5`.
    pub fn point_size(&self) -> String {
        format!("{n}x{n}", n = self.nominal)
    }

    /// Concrete pixel edge: nominal size times scale, rounded half-up.
    pub fn pixel_size(&self) -> u32 {
        (self.nominal * self.scale as f32).round() as u32
    }

    /// Filename with the given image name substituted in, always PNG.
    pub fn filename(&self, image_name: &str) -> String {
        format!(
            "{image_name}-{size}@{scale}x.png",
            size = self.point_size(),
            scale = self.scale
        )
    }

    fn template_entry(&self) -> ContentsImage {
        ContentsImage {
            filename: self.filename(IMAGE_NAME_PLACEHOLDER),
            idiom: self.idiom.to_string(),
            scale: format!("{}x", self.scale),
            size: Some(self.point_size()),
        }
    }
}

/// Template for an app-icon set bundle.
pub fn app_icon_template() -> ContentsFile {
    ContentsFile {
        images: APP_ICON_SPECS.iter().map(AppIconSpec::template_entry).collect(),
        info: ContentsInfo::provenance(),
    }
}

/// Template for a universal image set: the three scale variants.
pub fn universal_image_template() -> ContentsFile {
    let images = [1u32, 2, 3]
        .iter()
        .map(|scale| ContentsImage {
            filename: format!("{IMAGE_NAME_PLACEHOLDER}@{scale}x.png"),
            idiom: "universal".to_string(),
            scale: format!("{scale}x"),
            size: None,
        })
        .collect();
    ContentsFile {
        images,
        info: ContentsInfo::provenance(),
    }
}

/// Instantiate a template for a concrete image name.
///
/// Returns a fresh manifest; the template argument is left untouched.
pub fn instantiate(template: &ContentsFile, image_name: &str) -> ContentsFile {
    let mut copy = template.clone();
    for image in &mut copy.images {
        image.filename = image.filename.replace(IMAGE_NAME_PLACEHOLDER, image_name);
    }
    copy
}

/// Serialize a manifest to `<dir>/Contents.json`, pretty-printed.
pub fn write_contents_json(dir: &Path, contents: &ContentsFile) -> Result<()> {
    let json = serde_json::to_string_pretty(contents)?;
    std::fs::write(dir.join("Contents.json"), json)?;
    Ok(())
}

/// Adaptive-icon XML referencing the background and foreground drawables.
/// `background_ref` is `@color/<name>` or `@mipmap/<name>`.
pub fn adaptive_icon_xml(background_ref: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<adaptive-icon xmlns:android="http://schemas.android.com/apk/res/android">
    <background android:drawable="{background_ref}" />
    <foreground android:drawable="@mipmap/ic_launcher_foreground" />
</adaptive-icon>"#
    )
}

/// Colour resource XML. The `name` attribute carries the resource name and
/// the text content carries the `#`-prefixed hex value.
pub fn color_resource_xml(name: &str, hex: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
    <color name="{name}">#{hex}</color>
</resources>"#
    )
}

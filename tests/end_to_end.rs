use airesize::{ResizeError, Reporter, RunOptions};
use image::{Rgba, RgbaImage};
use std::path::Path;
use tempfile::TempDir;

const SVG_SOURCE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100">
  <rect width="200" height="100" fill="#ff4444"/>
</svg>"##;

fn create_source_image(path: &Path) {
    let mut image = RgbaImage::new(200, 100);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        *pixel = Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255]);
    }
    image.save(path).expect("failed to write source image");
}

fn image_size(path: &Path) -> (u32, u32) {
    let image = image::open(path).expect("failed to open generated image");
    (image.width(), image.height())
}

#[test]
fn svg_source_is_rasterized_into_all_android_density_buckets() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("logo.svg");
    std::fs::write(&source, SVG_SOURCE).unwrap();
    let root = temp.path().join("out");

    let result = airesize::run(
        &RunOptions {
            source_path: source,
            output_root: Some(root.clone()),
            android: true,
            width: Some("48".to_string()),
            height: Some("auto".to_string()),
            ..Default::default()
        },
        &Reporter::silent(),
    )
    .unwrap();
    assert_eq!(result, root);

    let expected = [
        ("drawable-mdpi", 48),
        ("drawable-hdpi", 72),
        ("drawable-xhdpi", 96),
        ("drawable-xxhdpi", 144),
        ("drawable-xxxhdpi", 192),
    ];
    for (dir, width) in expected {
        // Vector sources are rasterised: extension forced to .png.
        let file = root.join("android").join(dir).join("logo.png");
        assert!(file.exists(), "missing {}", file.display());
        // Height follows the 2:1 svg aspect ratio.
        assert_eq!(image_size(&file), (width, width / 2));
    }
}

#[test]
fn double_auto_is_rejected_for_every_platform_selection() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("logo.png");
    create_source_image(&source);

    for (android, ios) in [(true, false), (false, true), (true, true)] {
        let result = airesize::run(
            &RunOptions {
                source_path: source.clone(),
                output_root: Some(temp.path().join("out")),
                android,
                ios,
                width: Some("auto".to_string()),
                height: Some("auto".to_string()),
                ..Default::default()
            },
            &Reporter::silent(),
        );
        assert!(matches!(result, Err(ResizeError::BothAuto)));
    }
    assert!(!temp.path().join("out").exists());
}

#[test]
fn unsupported_extension_is_rejected() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("logo.gif");
    std::fs::write(&source, b"GIF89a").unwrap();

    let result = airesize::run(
        &RunOptions {
            source_path: source,
            android: true,
            width: Some("48".to_string()),
            height: Some("auto".to_string()),
            ..Default::default()
        },
        &Reporter::silent(),
    );
    assert!(matches!(result, Err(ResizeError::UnsupportedExtension)));
}

#[test]
fn all_operations_run_together_into_separate_subdirectories() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("my-logo.png");
    create_source_image(&source);
    let root = temp.path().join("out");

    airesize::run(
        &RunOptions {
            source_path: source,
            output_root: Some(root.clone()),
            android: true,
            android_app_icon: true,
            android_notification_icon: true,
            ios: true,
            ios_app_icon: true,
            width: Some("100".to_string()),
            height: Some("50".to_string()),
            background_color: Some("FFFFFF".to_string()),
            color_file: Some("ic_launcher_background".to_string()),
            padding_factor: 0.1,
            ios_background_color: None,
            ..Default::default()
        },
        &Reporter::silent(),
    )
    .unwrap();

    // Android names are snake_cased, iOS names PascalCased.
    assert!(root.join("android/drawable-mdpi/my_logo.png").exists());
    assert!(root
        .join("android-app-icons/mipmap-anydpi-v26/ic_launcher.xml")
        .exists());
    assert!(root
        .join("android-notification-icons/drawable-xxxhdpi/my_logo.png")
        .exists());
    assert!(root.join("ios/MyLogo@2x.png").exists());
    assert!(root.join("ios/Contents.json").exists());
    assert!(root.join("ios-app-icons/MyLogo-1024x1024@1x.png").exists());
    assert!(root.join("ios-app-icons/Contents.json").exists());

    // Both dimensions numeric: scaled independently, aspect not preserved.
    assert_eq!(
        image_size(&root.join("android/drawable-hdpi/my_logo.png")),
        (150, 75)
    );
}

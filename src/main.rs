use airesize::{orchestrate, Reporter, RunOptions};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "airesize",
    about = "Resize an image into density-scaled assets and icon sets for Android and iOS"
)]
struct Args {
    /// Path to the source image (.png, .jpg, .jpeg or .svg).
    #[clap(value_name = "IMAGE")]
    input: PathBuf,

    /// Output directory. Defaults to a directory named after the source
    /// image, created next to it.
    #[clap(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Target width: a number or "auto".
    #[clap(short, long, value_name = "WIDTH")]
    width: Option<String>,

    /// Target height: a number or "auto".
    #[clap(short = 'H', long, value_name = "HEIGHT")]
    height: Option<String>,

    /// Generate density-bucket drawables for Android
    #[clap(short, long)]
    android: bool,

    /// Generate adaptive/round Android app icons
    #[clap(long)]
    android_app_icon: bool,

    /// Generate Android notification icons
    #[clap(long)]
    android_notification_icon: bool,

    /// Generate the three iOS scale variants
    #[clap(short, long)]
    ios: bool,

    /// Generate the iOS app-icon set
    #[clap(long)]
    ios_app_icon: bool,

    /// App icon background color (hex, e.g. FFFFFF)
    #[clap(long, value_name = "COLOR", requires = "android_app_icon")]
    bg_color: Option<String>,

    /// App icon background image
    #[clap(long, value_name = "PATH", requires = "android_app_icon")]
    bg_image: Option<PathBuf>,

    /// Color resource file name for the app icon background color
    #[clap(long, value_name = "NAME", default_value = "ic_launcher_background")]
    color_file: String,

    /// Extra foreground inset for app icons, within [0, 1)
    #[clap(long, value_name = "FACTOR", default_value_t = 0.0)]
    padding_factor: f32,

    /// iOS app icon background color (hex); without it the source is resized
    /// directly
    #[clap(long, value_name = "COLOR", requires = "ios_app_icon")]
    ios_bg_color: Option<String>,

    /// Suppress status output
    #[clap(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let reporter = Reporter::new(args.quiet);

    let options = RunOptions {
        source_path: args.input,
        output_root: args.output,
        width: args.width,
        height: args.height,
        android: args.android,
        android_app_icon: args.android_app_icon,
        android_notification_icon: args.android_notification_icon,
        ios: args.ios,
        ios_app_icon: args.ios_app_icon,
        background_color: args.bg_color,
        background_image: args.bg_image,
        color_file: Some(args.color_file),
        padding_factor: args.padding_factor,
        ios_background_color: args.ios_bg_color,
    };

    match orchestrate::run(&options, &reporter) {
        Ok(root) => {
            reporter.success(&format!(
                "All images resized successfully. You can find them in {}",
                root.display()
            ));
            Ok(())
        }
        Err(error) => {
            reporter.error(&error.to_string());
            std::process::exit(1);
        }
    }
}

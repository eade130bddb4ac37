//! Command-line front end: render one payload to a PNG file.
//!
//! ```bash
//! qivault "https://example.com" --eye circle --fg "#10B981" --dir out --name site
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

use qivault::helper::{load_logo, save_png};
use qivault::render::DEFAULT_SIZE;
use qivault::{try_render, Color, EyeStyle, FinderSizing, RenderConfig};

#[derive(Parser)]
#[command(name = "qivault")]
#[command(version)]
#[command(about = "Render a styled QR code to a PNG file")]
struct Cli {
    /// Text to encode
    payload: String,

    /// Side of the output image in pixels
    #[arg(long, short, default_value_t = DEFAULT_SIZE)]
    size: u32,

    /// Module color, as opaque #RRGGBB
    #[arg(long, default_value = "#000000")]
    fg: Color,

    /// Background color, as opaque #RRGGBB
    #[arg(long, default_value = "#FFFFFF")]
    bg: Color,

    /// Finder pattern style: square, rounded or circle
    #[arg(long, default_value = "square")]
    eye: EyeStyle,

    /// How the finder pattern size is derived
    #[arg(long, value_enum, default_value = "approximate")]
    finder_sizing: Sizing,

    /// Image to paste in the center
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Output directory
    #[arg(long, default_value = "generated")]
    dir: String,

    /// Output file name without extension (defaults to a timestamp)
    #[arg(long)]
    name: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Sizing {
    Approximate,
    Measured,
}

impl From<Sizing> for FinderSizing {
    fn from(s: Sizing) -> Self {
        match s {
            Sizing::Approximate => FinderSizing::Approximate,
            Sizing::Measured => FinderSizing::Measured,
        }
    }
}

fn run(cli: Cli) -> qivault::Result<PathBuf> {
    let mut config = RenderConfig::new(cli.fg, cli.bg)
        .with_eye_style(cli.eye)
        .with_finder_sizing(cli.finder_sizing.into());
    if let Some(path) = &cli.logo {
        config = config.with_logo(load_logo(path)?);
    }
    let img = try_render(&cli.payload, cli.size, &config)?;
    save_png(&img, Some(cli.dir.as_str()), cli.name.as_deref())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("qivault: {}", e);
            ExitCode::FAILURE
        }
    }
}

use image::{DynamicImage, ImageFormat, RgbaImage};
use log::debug;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::Result;
use crate::render::{try_render, RenderConfig};

/// Saves a rendered QR code as a PNG file.
///
/// # Arguments
///
/// * `img` - The rendered raster.
/// * `directory_path` - Optional. The directory the image is saved in. Defaults to "generated" and is created if missing.
/// * `filename` - Optional. The file name without extension. Defaults to a millisecond timestamp.
///
/// # Returns
///
/// The path of the written file.
///
/// # Example
///
/// ```rust,no_run
/// use qivault::{helper::save_png, render, RenderConfig};
///
/// let img = render("Hello, World!", 256, &RenderConfig::default()).unwrap();
/// save_png(&img, Some("images"), Some("qr_code")).unwrap();
/// ```
pub fn save_png(img: &RgbaImage, directory_path: Option<&str>, filename: Option<&str>) -> Result<PathBuf> {
    let directory_path = directory_path.unwrap_or("generated");
    let filename = match filename {
        Some(name) => name.to_string(),
        None => timestamp_name("qr"),
    };

    if !Path::new(directory_path).exists() {
        fs::create_dir_all(directory_path)?;
    }

    let file_path = Path::new(directory_path).join(format!("{}.png", filename));
    img.save_with_format(&file_path, ImageFormat::Png)?;
    debug!("Saved {}x{} raster to {}", img.width(), img.height(), file_path.display());
    Ok(file_path)
}

/// Encodes a rendered QR code as in-memory PNG bytes.
pub fn png_bytes(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Decodes a logo from any image format the `image` crate understands.
pub fn load_logo(path: impl AsRef<Path>) -> Result<DynamicImage> {
    Ok(image::open(path)?)
}

/// Renders `content` with `config` and saves it as a PNG.
///
/// # Example
///
/// ```rust,no_run
/// use qivault::{helper::generate_image, EyeStyle, RenderConfig};
///
/// let config = RenderConfig::default().with_eye_style(EyeStyle::Circle);
/// generate_image("Hello, World!", 512, &config, Some("images"), Some("qr_code")).unwrap();
/// ```
pub fn generate_image(
    content: &str,
    size: u32,
    config: &RenderConfig,
    directory: Option<&str>,
    filename: Option<&str>,
) -> Result<PathBuf> {
    let img = try_render(content, size, config)?;
    save_png(&img, directory, filename)
}

/// `<prefix>_<milliseconds since the epoch>`.
fn timestamp_name(prefix: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("{}_{}", prefix, millis)
}

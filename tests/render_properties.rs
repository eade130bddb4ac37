use image::{DynamicImage, Rgba, RgbaImage};

use qivault::encoder::{ErrorCorrection, QrEncoder, SymbolEncoder};
use qivault::raster::rasterize;
use qivault::{
    render, render_with, try_render, BitMatrix, Bounds, Color, EyeStyle, FinderSizing, RenderConfig,
    RenderError, Result,
};

const URL: &str = "https://example.com";

fn config(style: EyeStyle) -> RenderConfig {
    RenderConfig::new(Color::BLACK, Color::WHITE).with_eye_style(style)
}

fn red_logo() -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(64, 48, Rgba([255, 0, 0, 255])))
}

fn base_raster(payload: &str, size: u32, ecc: ErrorCorrection) -> RgbaImage {
    let matrix = QrEncoder.encode(payload, size, ecc).unwrap();
    rasterize(&matrix, Color::BLACK.to_rgba(), Color::WHITE.to_rgba())
}

#[test]
fn render_is_deterministic() {
    for style in EyeStyle::ALL {
        let c = config(style).with_logo(red_logo());
        let a = render(URL, 300, &c).unwrap();
        let b = render(URL, 300, &c).unwrap();
        assert_eq!(a, b, "style {}", style);
    }
}

#[test]
fn square_eyes_leave_base_raster_untouched() {
    let img = render(URL, 512, &config(EyeStyle::Square)).unwrap();
    assert_eq!(img, base_raster(URL, 512, ErrorCorrection::Medium));
}

#[test]
fn circle_eyes_differ_from_square_in_finder_region() {
    let size = 512;
    let square = render(URL, size, &config(EyeStyle::Square)).unwrap();
    let circle = render(URL, size, &config(EyeStyle::Circle)).unwrap();

    let area = size / 4;
    let mut diff = 0u32;
    for y in 0..area {
        for x in 0..area {
            if square.get_pixel(x, y) != circle.get_pixel(x, y) {
                diff += 1;
            }
        }
    }
    let pct = diff as f32 * 100.0 / (area * area) as f32;
    assert!(pct >= 5.0, "only {:.2}% of finder pixels differ", pct);
}

#[test]
fn rounded_eyes_differ_from_square() {
    let square = render(URL, 512, &config(EyeStyle::Square)).unwrap();
    let rounded = render(URL, 512, &config(EyeStyle::Rounded)).unwrap();
    assert_ne!(square, rounded);
    // Outer corner of the top-left eye is cut away.
    let b = Bounds::detect(&QrEncoder.encode(URL, 512, ErrorCorrection::Medium).unwrap()).unwrap();
    assert_eq!(*rounded.get_pixel(b.min_x, b.min_y), Rgba([255, 255, 255, 255]));
    assert_eq!(*square.get_pixel(b.min_x, b.min_y), Rgba([0, 0, 0, 255]));
}

#[test]
fn bounds_cover_every_dark_module() {
    for (payload, size) in [(URL, 512), ("HELLO", 64), ("a much longer payload that forces a bigger symbol version", 333)] {
        let m = QrEncoder.encode(payload, size, ErrorCorrection::Medium).unwrap();
        let b = Bounds::detect(&m).unwrap();
        assert!(b.min_x <= b.max_x && b.min_y <= b.max_y);
        assert!(b.max_x < m.width() && b.max_y < m.height());
        assert!(m.dark_modules().all(|(x, y)| b.contains(x, y)));
    }
}

#[test]
fn all_light_matrix_fails() {
    let blank = |_: &str, size: u32, _: ErrorCorrection| -> Result<BitMatrix> { Ok(BitMatrix::new(size)) };
    assert!(Bounds::detect(&BitMatrix::new(32)).is_none());
    for style in EyeStyle::ALL {
        assert!(render_with(&blank, URL, 128, &config(style)).is_none());
    }
}

#[test]
fn logo_is_centered_and_sized() {
    let size = 512;
    let img = render(URL, size, &config(EyeStyle::Rounded).with_logo(red_logo())).unwrap();

    let red: Vec<(u32, u32)> = img
        .enumerate_pixels()
        .filter(|(_, _, p)| p.0[0] > 200 && p.0[1] < 60 && p.0[2] < 60)
        .map(|(x, y, _)| (x, y))
        .collect();
    assert!(!red.is_empty());
    let min_x = red.iter().map(|p| p.0).min().unwrap();
    let max_x = red.iter().map(|p| p.0).max().unwrap();
    let min_y = red.iter().map(|p| p.1).min().unwrap();
    let max_y = red.iter().map(|p| p.1).max().unwrap();

    let expected = (0.22 * size as f64).round() as i64;
    let side_x = (max_x - min_x + 1) as i64;
    let side_y = (max_y - min_y + 1) as i64;
    assert!((side_x - expected).abs() <= 1, "logo width {}", side_x);
    assert!((side_y - expected).abs() <= 1, "logo height {}", side_y);

    let left = min_x as i64;
    let right = (img.width() - 1 - max_x) as i64;
    let top = min_y as i64;
    let bottom = (img.height() - 1 - max_y) as i64;
    assert!((left - right).abs() <= 1, "left {} right {}", left, right);
    assert!((top - bottom).abs() <= 1, "top {} bottom {}", top, bottom);
}

#[test]
fn logo_render_requests_high_correction() {
    let img = render(URL, 512, &RenderConfig::default().with_logo(red_logo())).unwrap();
    let plain = base_raster(URL, 512, ErrorCorrection::High);
    let center = img.width() / 2;
    // Away from the logo the modules come from the high-correction symbol.
    for x in 0..img.width() {
        assert_eq!(img.get_pixel(x, center / 4), plain.get_pixel(x, center / 4));
    }
}

#[test]
fn raster_matches_matrix_dimensions() {
    for size in [10, 100, 257, 512] {
        let m = QrEncoder.encode(URL, size, ErrorCorrection::Medium).unwrap();
        let img = render(URL, size, &config(EyeStyle::Circle)).unwrap();
        assert_eq!(img.dimensions(), (m.width(), m.height()), "size {}", size);
    }
    // Smaller than the module count: the encoder grows the matrix.
    let img = render(URL, 10, &RenderConfig::default()).unwrap();
    assert!(img.width() > 10);
}

#[test]
fn invalid_input_never_produces_a_raster() {
    for style in EyeStyle::ALL {
        assert!(render("", 512, &config(style)).is_none());
        assert!(render(URL, 0, &config(style)).is_none());
    }
    assert!(matches!(try_render(URL, 0, &RenderConfig::default()), Err(RenderError::InvalidSize(0))));
    assert!(matches!(try_render("", 64, &RenderConfig::default()), Err(RenderError::EmptyPayload)));
}

#[test]
fn huge_size_is_rejected_without_allocating() {
    for style in EyeStyle::ALL {
        assert!(render(URL, u32::MAX, &config(style)).is_none());
    }
    assert!(matches!(
        try_render(URL, qivault::MAX_SIZE + 1, &RenderConfig::default()),
        Err(RenderError::InvalidSize(_))
    ));
}

#[test]
fn translucent_background_never_produces_a_raster() {
    let bg: Color = "#80FFFFFF".parse().unwrap();
    for style in EyeStyle::ALL {
        let config = RenderConfig::new(Color::BLACK, bg).with_eye_style(style);
        assert!(render(URL, 256, &config).is_none());
        assert!(matches!(try_render(URL, 256, &config), Err(RenderError::InvalidColor(_))));
    }
}

#[test]
fn measured_eyes_stay_inside_finder_patterns() {
    let size = 512;
    let m = QrEncoder.encode(URL, size, ErrorCorrection::Medium).unwrap();
    let b = Bounds::detect(&m).unwrap();
    let finder = qivault::eye::finder_size(&m, &b, FinderSizing::Measured).unwrap();
    // Version 2 is 25 modules: 7 of them make the finder side.
    assert_eq!(finder * 25, b.width() * 7);

    let base = base_raster(URL, size, ErrorCorrection::Medium);
    let img = render(
        URL,
        size,
        &config(EyeStyle::Circle).with_finder_sizing(FinderSizing::Measured),
    )
    .unwrap();

    let in_eye = |x: u32, y: u32| {
        let near_left = x >= b.min_x && x < b.min_x + finder;
        let near_top = y >= b.min_y && y < b.min_y + finder;
        let near_right = x + finder > b.max_x && x <= b.max_x;
        let near_bottom = y + finder > b.max_y && y <= b.max_y;
        (near_left && near_top) || (near_right && near_top) || (near_left && near_bottom)
    };
    for (x, y, px) in img.enumerate_pixels() {
        if !in_eye(x, y) {
            assert_eq!(px, base.get_pixel(x, y), "pixel ({}, {}) changed outside the eyes", x, y);
        }
    }
    assert_ne!(img, base);
}

#[test]
fn renders_concurrently() {
    let payloads = ["alpha", "bravo", "charlie", "delta"];
    let c = config(EyeStyle::Circle).with_logo(red_logo());
    let serial: Vec<RgbaImage> = payloads.iter().map(|p| render(p, 200, &c).unwrap()).collect();
    let parallel: Vec<RgbaImage> = std::thread::scope(|s| {
        let handles: Vec<_> = payloads
            .iter()
            .map(|p| {
                let c = &c;
                s.spawn(move || render(p, 200, c).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(serial, parallel);
}

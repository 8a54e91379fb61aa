//! Test fixtures: in-memory encoded images and data URLs.

use base64::Engine;

/// Encode an RGB8 buffer as PNG
pub fn png_rgb(width: u32, height: u32, rgb: &[u8]) -> Vec<u8> {
    encode(width, height, png::ColorType::Rgb, rgb)
}

/// Encode an RGBA8 buffer as PNG
pub fn png_rgba(width: u32, height: u32, rgba: &[u8]) -> Vec<u8> {
    encode(width, height, png::ColorType::Rgba, rgba)
}

fn encode(width: u32, height: u32, color_type: png::ColorType, data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("png header");
        writer.write_image_data(data).expect("png data");
    }
    buf
}

/// Encode an RGB8 buffer in another container format, e.g. BMP or GIF
pub fn encoded_rgb(width: u32, height: u32, rgb: &[u8], format: image::ImageFormat) -> Vec<u8> {
    let source = image::RgbImage::from_raw(width, height, rgb.to_vec()).expect("rgb buffer");
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(source)
        .write_to(&mut std::io::Cursor::new(&mut buf), format)
        .expect("encode");
    buf
}

/// Wrap PNG bytes in a `data:image/png;base64,` URL
pub fn data_url(png: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(png)
    )
}

/// Named pixel layouts
pub mod images {
    /// 2x2: top row white, bottom row (10,20,30)
    pub const HALF_WHITE: [u8; 12] = [255, 255, 255, 255, 255, 255, 10, 20, 30, 10, 20, 30];

    /// 1x1 black
    pub const BLACK: [u8; 3] = [0, 0, 0];

    /// 1x1 white
    pub const WHITE: [u8; 3] = [255, 255, 255];

    /// 10x1 with ten distinct colors, listed in descending order
    pub fn ten_distinct() -> Vec<u8> {
        (0..10u8).rev().flat_map(|i| [i * 10, 0, 0]).collect()
    }
}

use std::path::{Path, PathBuf};

/// Encodes a bottom-up BMP with a two-entry black/white palette.
pub fn encode_bmp(width: u32, height: u32, bits_per_pixel: u16, is_black: impl Fn(u32, u32) -> bool) -> Vec<u8> {
    assert!(bits_per_pixel == 1 || bits_per_pixel == 8);
    let stride = (width * bits_per_pixel as u32).div_ceil(32) * 4;
    let palette_len = 2 * 4;
    let pixel_offset = 14 + 40 + palette_len;
    let image_size = stride * height;

    let mut out = Vec::new();
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(pixel_offset + image_size).to_le_bytes());
    out.extend_from_slice(&[0; 4]);
    out.extend_from_slice(&pixel_offset.to_le_bytes());

    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(height as i32).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&bits_per_pixel.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&image_size.to_le_bytes());
    out.extend_from_slice(&2835i32.to_le_bytes());
    out.extend_from_slice(&2835i32.to_le_bytes());
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());

    out.extend_from_slice(&[0, 0, 0, 0]);
    out.extend_from_slice(&[255, 255, 255, 0]);

    for y in (0..height).rev() {
        let mut row = vec![0u8; stride as usize];
        for x in 0..width {
            if is_black(x, y) {
                continue;
            }
            if bits_per_pixel == 1 {
                row[(x / 8) as usize] |= 0x80 >> (x % 8);
            } else {
                row[x as usize] = 1;
            }
        }
        out.extend_from_slice(&row);
    }
    out
}

pub fn write_bmp(dir: &Path, name: &str, bmp: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bmp).unwrap();
    path
}

/// Parses a hex table back into words.
pub fn parse_words(text: &str) -> Vec<u32> {
    let bytes: Vec<u8> = text
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| u8::from_str_radix(token.trim_start_matches("0x"), 16).unwrap())
        .collect();
    bytes
        .chunks_exact(4)
        .map(|b| u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
        .collect()
}

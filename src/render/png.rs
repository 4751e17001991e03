//! PNG output for rendered identicons.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::{IdenticonError, Result};

/// Encode an image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| IdenticonError::Encode {
            message: format!("Failed to encode PNG: {}", e),
        })?;
    Ok(buffer.into_inner())
}

/// Write an image to a PNG file.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let bytes = encode_png(image)?;

    std::fs::write(path, bytes).map_err(|e| IdenticonError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;
    use crate::types::{Code, Settings};
    use image::Rgba;
    use tempfile::tempdir;

    #[test]
    fn test_encode_png_signature() {
        let image = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]));
        let bytes = encode_png(&image).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_write_png_round_trip() {
        let image = render(Code::derive("round-trip"), 30, &Settings::default());

        let dir = tempdir().unwrap();
        let path = dir.path().join("icon.png");
        write_png(&image, &path).unwrap();

        assert!(path.exists());
        let read = image::open(&path).unwrap().to_rgba8();
        assert_eq!(read, image);
    }

    #[test]
    fn test_write_png_with_transparency() {
        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(1, 0, Rgba([255, 0, 0, 128]));

        let dir = tempdir().unwrap();
        let path = dir.path().join("alpha.png");
        write_png(&image, &path).unwrap();

        let read = image::open(&path).unwrap().to_rgba8();
        assert_eq!(read.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(read.get_pixel(1, 0).0, [255, 0, 0, 128]);
    }

    #[test]
    fn test_write_png_missing_directory() {
        let image = RgbaImage::new(3, 3);
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("icon.png");

        let err = write_png(&image, &path).unwrap_err();
        assert!(matches!(err, IdenticonError::Io { .. }));
    }
}

//! Decode and encode raster images, format derived from the path extension.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG, BMP, WebP) | `image` crate (pure Rust decoders) |
//! | Encode | `image::ImageBuffer::write_to`, format from extension |
//! | Durable write | temp file in the target directory + atomic rename |
//!
//! Images are held as 8-bit RGB throughout; alpha is flattened away at
//! decode time and never round-trips.

use image::{ImageFormat, ImageReader, RgbImage};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },
    #[error("failed to encode {path}: {message}")]
    Encode { path: PathBuf, message: String },
    #[error("no encoder for extension of {0}")]
    UnsupportedExtension(PathBuf),
}

/// Extensions whose codecs are compiled in and known to work.
const FORMAT_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("png", ImageFormat::Png),
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("bmp", ImageFormat::Bmp),
    ("webp", ImageFormat::WebP),
];

/// Target format for a path, by extension (case-insensitive).
pub fn format_for(path: &Path) -> Option<ImageFormat> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    FORMAT_CANDIDATES
        .iter()
        .find(|(candidate, _)| *candidate == ext)
        .map(|(_, format)| *format)
}

/// Load and decode an image from disk into an 8-bit RGB grid.
///
/// Content sniffing takes precedence over the extension, so a misnamed but
/// valid file still decodes; truly unreadable bytes fail here.
pub fn decode(path: &Path) -> Result<RgbImage, CodecError> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let image = reader.decode().map_err(|e| CodecError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(image.to_rgb8())
}

/// Encode `image` in the format implied by `path`'s extension and write it.
///
/// The bytes go to a temp file in the destination directory first and are
/// renamed into place, so a crash mid-encode never leaves a partial file.
/// An existing file at `path` is overwritten.
pub fn encode(image: &RgbImage, path: &Path) -> Result<(), CodecError> {
    let format =
        format_for(path).ok_or_else(|| CodecError::UnsupportedExtension(path.to_path_buf()))?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = tempfile::NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(staged.as_file_mut());
        image
            .write_to(&mut writer, format)
            .map_err(|e| CodecError::Encode {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        writer.flush()?;
    }
    staged.persist(path).map_err(|e| CodecError::Io(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use tempfile::TempDir;

    fn checker(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Rgb([250, 10, 40])
            } else {
                Rgb([5, 200, 90])
            }
        })
    }

    #[test]
    fn format_for_known_extensions() {
        assert_eq!(format_for(Path::new("a.png")), Some(ImageFormat::Png));
        assert_eq!(format_for(Path::new("a.jpg")), Some(ImageFormat::Jpeg));
        assert_eq!(format_for(Path::new("a.jpeg")), Some(ImageFormat::Jpeg));
        assert_eq!(format_for(Path::new("a.bmp")), Some(ImageFormat::Bmp));
        assert_eq!(format_for(Path::new("a.webp")), Some(ImageFormat::WebP));
        assert_eq!(format_for(Path::new("a.PNG")), Some(ImageFormat::Png));
    }

    #[test]
    fn format_for_unknown_extension_is_none() {
        assert_eq!(format_for(Path::new("a.tiff")), None);
        assert_eq!(format_for(Path::new("noext")), None);
    }

    #[test]
    fn png_round_trip_preserves_pixels() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("grid.png");
        let original = checker(12, 9);

        encode(&original, &path).unwrap();
        let decoded = decode(&path).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn bmp_round_trip_preserves_pixels() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("grid.bmp");
        let original = checker(8, 8);

        encode(&original, &path).unwrap();
        assert_eq!(decode(&path).unwrap(), original);
    }

    #[test]
    fn jpeg_encode_produces_decodable_file() {
        // Lossy format: only dimensions are stable, not exact pixel values.
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("photo.jpg");

        encode(&checker(32, 24), &path).unwrap();
        let decoded = decode(&path).unwrap();
        assert_eq!(decoded.dimensions(), (32, 24));
    }

    #[test]
    fn decode_missing_file_fails() {
        assert!(decode(Path::new("/nonexistent/image.png")).is_err());
    }

    #[test]
    fn decode_zero_byte_file_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty.png");
        std::fs::write(&path, b"").unwrap();
        assert!(matches!(
            decode(&path),
            Err(CodecError::Decode { .. }) | Err(CodecError::Io(_))
        ));
    }

    #[test]
    fn decode_garbage_bytes_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("garbage.png");
        std::fs::write(&path, b"not an image at all").unwrap();
        assert!(decode(&path).is_err());
    }

    #[test]
    fn decode_ignores_wrong_extension() {
        // A PNG saved with a .jpg name still decodes via content sniffing.
        let tmp = TempDir::new().unwrap();
        let png_path = tmp.path().join("real.png");
        encode(&checker(6, 6), &png_path).unwrap();

        let misnamed = tmp.path().join("misnamed.jpg");
        std::fs::copy(&png_path, &misnamed).unwrap();
        assert_eq!(decode(&misnamed).unwrap().dimensions(), (6, 6));
    }

    #[test]
    fn encode_unsupported_extension_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.tiff");
        let result = encode(&checker(4, 4), &path);
        assert!(matches!(result, Err(CodecError::UnsupportedExtension(_))));
        assert!(!path.exists());
    }

    #[test]
    fn encode_overwrites_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.png");
        std::fs::write(&path, b"stale contents").unwrap();

        let original = checker(5, 5);
        encode(&original, &path).unwrap();
        assert_eq!(decode(&path).unwrap(), original);
    }

    #[test]
    fn encode_leaves_no_stray_temp_files() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.png");
        encode(&checker(5, 5), &path).unwrap();

        let entries: Vec<_> = std::fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("out.png")]);
    }
}

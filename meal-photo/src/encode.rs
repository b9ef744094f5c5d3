use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use std::path::Path;

/// Error type for photo preparation
#[derive(Debug)]
pub enum PhotoError {
    ImageLoadError(String),
    ImageEncodeError(String),
    IoError(std::io::Error),
    TaskError(String),
}

impl std::fmt::Display for PhotoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhotoError::ImageLoadError(msg) => write!(f, "Image load error: {}", msg),
            PhotoError::ImageEncodeError(msg) => write!(f, "Image encode error: {}", msg),
            PhotoError::IoError(e) => write!(f, "IO error: {}", e),
            PhotoError::TaskError(msg) => write!(f, "Task error: {}", msg),
        }
    }
}

impl std::error::Error for PhotoError {}

impl From<std::io::Error> for PhotoError {
    fn from(err: std::io::Error) -> Self {
        PhotoError::IoError(err)
    }
}

/// Limits applied before a photo is uploaded for recognition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhotoOptions {
    pub max_dimension: u32,
    /// JPEG quality, 1..=100
    pub quality: u8,
    /// Send the file untouched (the "save original images" setting)
    pub keep_original: bool,
}

impl Default for PhotoOptions {
    fn default() -> Self {
        Self {
            max_dimension: 1024,
            quality: 80,
            keep_original: false,
        }
    }
}

/// A photo ready for upload and preview
#[derive(Debug, Clone, PartialEq)]
pub struct MealPhoto {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime: &'static str,
}

impl MealPhoto {
    /// Base64 data URL for inline display in an `img` tag
    pub fn data_url(&self) -> String {
        to_data_url(self.mime, &self.bytes)
    }
}

pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    let b64 = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime, b64)
}

/// Guess a MIME type from the file extension, JPEG when unknown
pub fn mime_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("heic") | Some("heif") => "image/heic",
        _ => "image/jpeg",
    }
}

/// Fit `width` x `height` into a `max` square keeping the aspect ratio; never upscales
pub fn resize_dimensions(width: u32, height: u32, max: u32) -> (u32, u32) {
    let ratio = (width as f32 / max as f32).max(height as f32 / max as f32);

    if ratio > 1.0 {
        let new_width = ((width as f32 / ratio).round() as u32).max(1);
        let new_height = ((height as f32 / ratio).round() as u32).max(1);
        (new_width, new_height)
    } else {
        (width, height)
    }
}

/// Downscale and re-encode raw image bytes as JPEG
pub fn prepare_from_bytes(
    bytes: &[u8],
    file_name: &str,
    options: &PhotoOptions,
) -> Result<MealPhoto, PhotoError> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| PhotoError::ImageLoadError(format!("Failed to decode image: {}", e)))?;

    let (width, height) = resize_dimensions(img.width(), img.height(), options.max_dimension);
    let img = if (width, height) != (img.width(), img.height()) {
        log::debug!(
            "Resizing {} from {}x{} to {}x{}",
            file_name,
            img.width(),
            img.height(),
            width,
            height
        );
        img.resize(width, height, FilterType::Lanczos3)
    } else {
        img
    };

    let mut out = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut out, options.quality.clamp(1, 100));
    img.to_rgb8()
        .write_with_encoder(encoder)
        .map_err(|e| PhotoError::ImageEncodeError(format!("Failed to write JPEG: {}", e)))?;

    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("meal");

    Ok(MealPhoto {
        bytes: out,
        file_name: format!("{}.jpg", stem),
        mime: "image/jpeg",
    })
}

/// Read a photo from disk and prepare it for upload
///
/// Runs on the blocking pool; decoding a camera image takes a noticeable time.
pub async fn prepare_meal_photo(
    path: &Path,
    options: PhotoOptions,
) -> Result<MealPhoto, PhotoError> {
    let path = path.to_path_buf();

    tokio::task::spawn_blocking(move || {
        let bytes = std::fs::read(&path)?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("meal.jpg")
            .to_string();
        log::debug!("Preparing {} ({} bytes)", file_name, bytes.len());

        if options.keep_original {
            return Ok(MealPhoto {
                mime: mime_for_path(&path),
                bytes,
                file_name,
            });
        }

        prepare_from_bytes(&bytes, &file_name, &options)
    })
    .await
    .map_err(|e| PhotoError::TaskError(format!("Task join error: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([200, 120, 40]));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_resize_dimensions() {
        let (w, h) = resize_dimensions(2000, 1500, 1024);
        assert_eq!((w, h), (1024, 768));

        let (w, h) = resize_dimensions(800, 600, 1024);
        assert_eq!((w, h), (800, 600));

        let (w, h) = resize_dimensions(4000, 10, 100);
        assert_eq!((w, h), (100, 1));
    }

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(Path::new("a/b.PNG")), "image/png");
        assert_eq!(mime_for_path(Path::new("a/b.heic")), "image/heic");
        assert_eq!(mime_for_path(Path::new("noext")), "image/jpeg");
    }

    #[test]
    fn test_prepare_from_bytes_downscales_to_jpeg() {
        let photo = prepare_from_bytes(
            &png_bytes(300, 150),
            "lunch.png",
            &PhotoOptions {
                max_dimension: 100,
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(photo.file_name, "lunch.jpg");
        assert_eq!(photo.mime, "image/jpeg");
        let decoded = image::load_from_memory(&photo.bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (100, 50));
        assert!(photo.data_url().starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_prepare_from_bytes_rejects_garbage() {
        let err = prepare_from_bytes(b"not an image", "x.jpg", &PhotoOptions::default())
            .unwrap_err();
        assert!(matches!(err, PhotoError::ImageLoadError(_)));
    }

    #[tokio::test]
    async fn test_prepare_meal_photo_keeps_original() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dinner.png");
        let bytes = png_bytes(20, 20);
        std::fs::write(&path, &bytes).unwrap();

        let photo = prepare_meal_photo(
            &path,
            PhotoOptions {
                keep_original: true,
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(photo.bytes, bytes);
        assert_eq!(photo.mime, "image/png");
        assert_eq!(photo.file_name, "dinner.png");
    }

    #[tokio::test]
    async fn test_prepare_meal_photo_missing_file() {
        let err = prepare_meal_photo(Path::new("/nonexistent/meal.jpg"), PhotoOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, PhotoError::IoError(_)));
    }
}

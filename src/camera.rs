// Thin wrapper around meal-photo's picker and encoder for the quick log flow.

use crate::error::AppError;
use meal_photo::{MealPhoto, PhotoOptions, PhotoSource, PickerConfig, PickerError};

/// What came back from the camera or gallery
#[derive(Debug, Clone, PartialEq)]
pub enum PhotoOutcome {
    Taken(MealPhoto),
    /// No camera or gallery on this device; carries the reason
    Unavailable(String),
    /// The user closed the picker or let it time out
    Cancelled,
}

fn photo_options(keep_original: bool) -> PhotoOptions {
    PhotoOptions {
        keep_original,
        ..Default::default()
    }
}

/// Acquire a photo and prepare it for upload
///
/// `keep_original` mirrors the "save original images" setting.
pub async fn take_meal_photo(
    source: PhotoSource,
    keep_original: bool,
) -> Result<PhotoOutcome, AppError> {
    let config = PickerConfig::default();
    let acquired = match source {
        PhotoSource::Camera => meal_photo::capture_photo(config).await,
        PhotoSource::Gallery => meal_photo::pick_image(config).await,
    };

    let path = match acquired {
        Ok(path) => path,
        Err(PickerError::PlatformNotSupported(msg)) => {
            log::info!("No photo source: {}", msg);
            return Ok(PhotoOutcome::Unavailable(msg));
        }
        Err(PickerError::Cancelled(_)) | Err(PickerError::Timeout(_)) => {
            return Ok(PhotoOutcome::Cancelled);
        }
        Err(e) => return Err(e.into()),
    };

    let photo = meal_photo::prepare_meal_photo(&path, photo_options(keep_original)).await?;
    log::info!("Meal photo ready: {} ({} bytes)", photo.file_name, photo.bytes.len());
    Ok(PhotoOutcome::Taken(photo))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_follow_setting() {
        assert!(photo_options(true).keep_original);
        let downscaled = photo_options(false);
        assert!(!downscaled.keep_original);
        assert_eq!(downscaled.max_dimension, 1024);
    }

    #[cfg(not(target_os = "android"))]
    #[tokio::test]
    async fn test_desktop_reports_unavailable() {
        let outcome = take_meal_photo(PhotoSource::Camera, false).await.unwrap();
        assert!(matches!(outcome, PhotoOutcome::Unavailable(_)));
    }
}

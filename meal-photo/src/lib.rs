//! # Meal Photo
//!
//! Camera and gallery access plus upload preparation for meal photos.
//!
//! This crate provides:
//! - Photo acquisition from the gallery or the camera (Android via JNI)
//! - Downscaling and JPEG re-encoding before upload
//! - Data URLs for inline previews
//!
//! ## Platform Separation
//!
//! Only [`picker`] is platform specific. On desktop and web the picker reports
//! [`PickerError::PlatformNotSupported`]; [`encode`] works everywhere.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use meal_photo::{capture_photo, prepare_meal_photo, PhotoOptions, PickerConfig};
//!
//! let path = capture_photo(PickerConfig::default()).await?;
//! let photo = prepare_meal_photo(&path, PhotoOptions::default()).await?;
//! upload(photo.bytes, &photo.file_name).await?;
//! ```

pub mod encode;
pub mod picker;

pub use encode::{
    mime_for_path, prepare_from_bytes, prepare_meal_photo, resize_dimensions, to_data_url,
    MealPhoto, PhotoError, PhotoOptions,
};
pub use picker::{
    acquire_photo, capture_photo, has_camera_permission, pick_image, PhotoSource, PickerConfig,
    PickerError,
};

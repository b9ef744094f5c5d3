use crate::navigation::NavigationError;
use calorie_api::ApiError;
use std::fmt;

/// Central error types for the CalorieTracker app
#[derive(Debug)]
pub enum AppError {
    /// Backend error (network, HTTP status, authentication)
    Api(ApiError),
    /// config.toml or settings.toml could not be parsed or written
    Config(String),
    /// Filesystem error
    Filesystem(std::io::Error),
    /// Validation error (e.g. invalid inputs)
    Validation(String),
    /// Camera, gallery or image encoding error
    Photo(String),
    /// Rejected screen transition
    Navigation(NavigationError),
    /// General error
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Api(e) => write!(f, "API error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Filesystem(e) => write!(f, "Filesystem error: {}", e),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Photo(msg) => write!(f, "Photo error: {}", msg),
            AppError::Navigation(e) => write!(f, "Navigation error: {}", e),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        AppError::Api(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Filesystem(e)
    }
}

impl From<NavigationError> for AppError {
    fn from(e: NavigationError) -> Self {
        AppError::Navigation(e)
    }
}

impl From<meal_photo::PickerError> for AppError {
    fn from(e: meal_photo::PickerError) -> Self {
        AppError::Photo(e.to_string())
    }
}

impl From<meal_photo::PhotoError> for AppError {
    fn from(e: meal_photo::PhotoError) -> Self {
        AppError::Photo(e.to_string())
    }
}

/// User-friendly error messages for the error banner
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api(e) => e.to_string(),
            AppError::Config(_) => "Settings could not be saved.".to_string(),
            AppError::Filesystem(_) => {
                "Error accessing files. Please check app permissions.".to_string()
            }
            AppError::Validation(msg) => msg.clone(),
            AppError::Photo(msg) => msg.clone(),
            AppError::Navigation(_) => "This page is not available from here.".to_string(),
            AppError::Other(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_passes_through() {
        let err: AppError = ApiError::Auth("Incorrect email or password".to_string()).into();
        assert_eq!(err.user_message(), "Incorrect email or password");
    }

    #[test]
    fn test_validation_message() {
        let err = AppError::Validation("Name is required".to_string());
        assert_eq!(err.user_message(), "Name is required");
        assert_eq!(err.to_string(), "Validation error: Name is required");
    }
}

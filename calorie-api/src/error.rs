use std::fmt;

/// Error type for backend operations
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Credentials rejected or signup validation failed; carries the server message
    Auth(String),
    /// Missing or expired token (HTTP 401 on the profile endpoint)
    Unauthorized,
    /// Network failure, non-2xx status or undecodable body
    Fetch(String),
    /// The token store could not be read or written
    Storage(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Auth(msg) => write!(f, "{}", msg),
            ApiError::Unauthorized => write!(f, "Unauthorized. Please login again."),
            ApiError::Fetch(msg) => write!(f, "{}", msg),
            ApiError::Storage(msg) => write!(f, "Session storage error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_message_passes_through() {
        let err = ApiError::Auth("Email already registered".to_string());
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[test]
    fn test_unauthorized_flag() {
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(!ApiError::Fetch("x".to_string()).is_unauthorized());
    }
}

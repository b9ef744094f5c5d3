//! # Calorie API
//!
//! Typed client for the CalorieTracker REST backend.
//!
//! This crate provides:
//! - Wire models for profiles, food logs and food recognition results
//! - [`ApiClient`], the single point of contact with the backend
//! - Bearer token handling with durable storage through [`TokenStore`]
//!
//! ## Separation of Concerns
//!
//! This crate only talks HTTP. It does **not**:
//! - Compute calorie targets or statistics (handled by the application)
//! - Decide where the session file lives (the application supplies a [`TokenStore`])
//! - Retry failed requests
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use calorie_api::{ApiClient, MemoryTokenStore};
//! use std::sync::Arc;
//!
//! let client = ApiClient::new("http://localhost:8000", Arc::new(MemoryTokenStore::default()))?;
//! let auth = client.login("user@example.com", "secret").await?;
//! let logs = client.get_food_logs().await?;
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod store;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    ActivityLevel, AuthResponse, FoodLog, FoodLogUpdate, FoodRecognitionResponse, Gender, Goal,
    HealthStatus, MealType, NewFoodLog, ProfileUpdate, UserProfile,
};
pub use store::{MemoryTokenStore, StoredSession, TokenStore};

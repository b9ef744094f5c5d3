pub mod analytics_service;
pub mod backend;
pub mod food_log_service;
pub mod meal_plan_service;
pub mod nutrition_service;
pub mod recognition_service;
pub mod settings_service;

pub use backend::{Backend, BackendHandle};
pub use recognition_service::{FoodSuggestion, RecognitionInput, Recognizer};

pub mod meal_plan;
pub mod settings;

pub use calorie_api::models::{
    ActivityLevel, FoodLog, FoodLogUpdate, FoodRecognitionResponse, Gender, Goal, HealthStatus,
    MealType, NewFoodLog, ProfileUpdate, UserProfile,
};
pub use meal_plan::{DayPlan, MealSlot, PlannedMeal};
pub use settings::{AppSettings, ReminderTime};

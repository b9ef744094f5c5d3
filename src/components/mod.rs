mod dashboard;
mod goal_selection;
mod login;
mod manual_log;
mod meal_plan;
mod navigation;
mod pic_log;
mod profile;
mod quick_log;
mod settings;
mod setup_profile;
mod signup;
mod welcome;

pub use dashboard::DashboardScreen;
pub use goal_selection::GoalSelectionScreen;
pub use login::LoginScreen;
pub use manual_log::ManualLogScreen;
pub use meal_plan::MealPlanScreen;
pub use navigation::{BottomNav, ScreenHeader};
pub use pic_log::PicLogScreen;
pub use profile::ProfileScreen;
pub use quick_log::QuickLogScreen;
pub use settings::SettingsScreen;
pub use setup_profile::SetupProfileScreen;
pub use signup::SignupScreen;
pub use welcome::WelcomeScreen;

use crate::models::MealType;
use dioxus_i18n::t;

/// Translated label of a meal type
pub(crate) fn meal_type_label(meal_type: MealType) -> String {
    match meal_type {
        MealType::Breakfast => t!("meal-breakfast"),
        MealType::Lunch => t!("meal-lunch"),
        MealType::Dinner => t!("meal-dinner"),
        MealType::Snack => t!("meal-snack"),
    }
}

/// Grams without decimals, as shown on cards
pub(crate) fn grams(value: f64) -> String {
    format!("{:.0}g", value)
}

/// Compact "P • C • F" line under a dish or log
pub(crate) fn macro_line(protein: f64, carbs: f64, fat: f64) -> String {
    t!(
        "macro-line",
        protein: grams(protein),
        carbs: grams(carbs),
        fat: grams(fat)
    )
}

use chrono::NaiveDate;

/// The three planned meals of a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub fn all() -> [MealSlot; 3] {
        [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner]
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "🌅",
            MealSlot::Lunch => "☀️",
            MealSlot::Dinner => "🌙",
        }
    }

    /// Suggested eating window
    pub fn time_window(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "7:00 - 9:00",
            MealSlot::Lunch => "11:30 - 13:00",
            MealSlot::Dinner => "18:00 - 20:00",
        }
    }

    pub fn i18n_key(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "meal-breakfast",
            MealSlot::Lunch => "meal-lunch",
            MealSlot::Dinner => "meal-dinner",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedMeal {
    pub name: String,
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub description: String,
}

/// One day of a generated meal plan
#[derive(Debug, Clone, PartialEq)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub breakfast: PlannedMeal,
    pub lunch: PlannedMeal,
    pub dinner: PlannedMeal,
}

impl DayPlan {
    pub fn meal(&self, slot: MealSlot) -> &PlannedMeal {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    pub fn total_calories(&self) -> u32 {
        self.breakfast.calories + self.lunch.calories + self.dinner.calories
    }
}

use crate::error::AppError;
use crate::models::{FoodLog, FoodLogUpdate, MealType, NewFoodLog};
use crate::services::recognition_service::FoodSuggestion;
use chrono::{DateTime, Duration, Local, NaiveDate, Utc};

pub const DEFAULT_PORTION: &str = "1 serving";
pub const DEFAULT_MEAL_TYPE: MealType = MealType::Lunch;

fn check_macro(label: &str, value: f64) -> Result<(), AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::Validation(format!(
            "{} must be a non-negative number",
            label
        )));
    }
    Ok(())
}

/// Checks a new entry before it is sent
pub fn validate(log: &NewFoodLog) -> Result<(), AppError> {
    if log.name.trim().is_empty() {
        return Err(AppError::Validation("Food name is required".to_string()));
    }
    check_macro("Protein", log.protein)?;
    check_macro("Carbs", log.carbs)?;
    check_macro("Fat", log.fat)?;
    Ok(())
}

pub fn validate_update(update: &FoodLogUpdate) -> Result<(), AppError> {
    if let Some(name) = &update.name {
        if name.trim().is_empty() {
            return Err(AppError::Validation("Food name is required".to_string()));
        }
    }
    for (label, value) in [
        ("Protein", update.protein),
        ("Carbs", update.carbs),
        ("Fat", update.fat),
    ] {
        if let Some(v) = value {
            check_macro(label, v)?;
        }
    }
    Ok(())
}

/// Portion picked in the quick log flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PortionSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl PortionSize {
    pub fn all() -> [PortionSize; 3] {
        [PortionSize::Small, PortionSize::Medium, PortionSize::Large]
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            PortionSize::Small => 0.7,
            PortionSize::Medium => 1.0,
            PortionSize::Large => 1.3,
        }
    }

    /// Stored as the log's portion text
    pub fn label(&self) -> &'static str {
        match self {
            PortionSize::Small => "Small (70%)",
            PortionSize::Medium => "Medium (100%)",
            PortionSize::Large => "Large (130%)",
        }
    }

    pub fn scale(&self, value: f64) -> f64 {
        (value * self.multiplier()).round()
    }
}

/// Entry for a recognized dish; calories and macros are scaled then rounded
pub fn log_from_suggestion(
    suggestion: &FoodSuggestion,
    portion: PortionSize,
    meal_type: MealType,
    image_url: Option<String>,
) -> NewFoodLog {
    NewFoodLog {
        name: suggestion.name.clone(),
        calories: portion.scale(suggestion.calories as f64) as u32,
        protein: portion.scale(suggestion.protein),
        carbs: portion.scale(suggestion.carbs),
        fat: portion.scale(suggestion.fat),
        portion: portion.label().to_string(),
        meal_type,
        image_url,
    }
}

/// Steps of the quick log flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickLogStep {
    Capture,
    Recognizing,
    Recognition,
    Portion,
    Confirm,
}

/// One tap fill-ins on the manual log screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuickAddPreset {
    pub name: &'static str,
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub portion: &'static str,
}

pub const QUICK_ADD_PRESETS: [QuickAddPreset; 4] = [
    QuickAddPreset {
        name: "Cơm trắng",
        calories: 200,
        protein: 4.0,
        carbs: 45.0,
        fat: 0.5,
        portion: "1 bát",
    },
    QuickAddPreset {
        name: "Trứng gà",
        calories: 70,
        protein: 6.0,
        carbs: 0.5,
        fat: 5.0,
        portion: "1 quả",
    },
    QuickAddPreset {
        name: "Ức gà luộc",
        calories: 165,
        protein: 31.0,
        carbs: 0.0,
        fat: 3.6,
        portion: "100g",
    },
    QuickAddPreset {
        name: "Chuối",
        calories: 89,
        protein: 1.0,
        carbs: 23.0,
        fat: 0.3,
        portion: "1 quả",
    },
];

/// Raw text of the manual log form
#[derive(Debug, Clone, PartialEq)]
pub struct ManualForm {
    pub name: String,
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub portion: String,
    pub meal_type: MealType,
}

impl Default for ManualForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            calories: String::new(),
            protein: String::new(),
            carbs: String::new(),
            fat: String::new(),
            portion: DEFAULT_PORTION.to_string(),
            meal_type: DEFAULT_MEAL_TYPE,
        }
    }
}

/// Empty or unparsable macro fields count as 0
fn parse_grams(raw: &str) -> f64 {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}

impl ManualForm {
    /// Fill the fields from a preset, keeping the selected meal type
    pub fn apply_preset(&mut self, preset: &QuickAddPreset) {
        self.name = preset.name.to_string();
        self.calories = preset.calories.to_string();
        self.protein = preset.protein.to_string();
        self.carbs = preset.carbs.to_string();
        self.fat = preset.fat.to_string();
        self.portion = preset.portion.to_string();
    }

    pub fn to_new_food_log(&self) -> Result<NewFoodLog, AppError> {
        let calories = self
            .calories
            .trim()
            .parse::<u32>()
            .map_err(|_| AppError::Validation("Calories must be a whole number".to_string()))?;
        let portion = self.portion.trim();

        let log = NewFoodLog {
            name: self.name.trim().to_string(),
            calories,
            protein: parse_grams(&self.protein),
            carbs: parse_grams(&self.carbs),
            fat: parse_grams(&self.fat),
            portion: if portion.is_empty() {
                DEFAULT_PORTION.to_string()
            } else {
                portion.to_string()
            },
            meal_type: self.meal_type,
            image_url: None,
        };
        validate(&log)?;
        Ok(log)
    }
}

/// Values edited in the diary's edit dialog
#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    pub id: i64,
    pub name: String,
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub portion: String,
    pub meal_type: MealType,
}

impl EditForm {
    pub fn from_log(log: &FoodLog) -> Self {
        Self {
            id: log.id,
            name: log.name.clone(),
            calories: log.calories.to_string(),
            protein: log.protein.to_string(),
            carbs: log.carbs.to_string(),
            fat: log.fat.to_string(),
            portion: log.portion.clone(),
            meal_type: log.meal_type,
        }
    }

    /// Every editable field is sent; the photo is left as is
    pub fn to_update(&self) -> Result<FoodLogUpdate, AppError> {
        let calories = self
            .calories
            .trim()
            .parse::<u32>()
            .map_err(|_| AppError::Validation("Calories must be a whole number".to_string()))?;
        let update = FoodLogUpdate {
            name: Some(self.name.trim().to_string()),
            calories: Some(calories),
            protein: Some(parse_grams(&self.protein)),
            carbs: Some(parse_grams(&self.carbs)),
            fat: Some(parse_grams(&self.fat)),
            portion: Some(self.portion.trim().to_string()),
            meal_type: Some(self.meal_type),
            image_url: None,
        };
        validate_update(&update)?;
        Ok(update)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFilter {
    #[default]
    All,
    Today,
    /// The last 7×24 hours
    Week,
}

impl DateFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateFilter::All => "all",
            DateFilter::Today => "today",
            DateFilter::Week => "week",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "today" => DateFilter::Today,
            "week" => DateFilter::Week,
            _ => DateFilter::All,
        }
    }
}

/// Logs matching both filters, in list order
pub fn filter_logs(
    logs: &[FoodLog],
    date: DateFilter,
    meal: Option<MealType>,
    now: DateTime<Utc>,
) -> Vec<FoodLog> {
    let today = now.with_timezone(&Local).date_naive();
    let week_ago = now - Duration::days(7);

    logs.iter()
        .filter(|log| match date {
            DateFilter::All => true,
            DateFilter::Today => log.local_date() == today,
            DateFilter::Week => log.timestamp >= week_ago,
        })
        .filter(|log| meal.map_or(true, |m| log.meal_type == m))
        .cloned()
        .collect()
}

/// Groups by local date, newest day first; order inside a day is kept
pub fn group_by_day(logs: &[FoodLog]) -> Vec<(NaiveDate, Vec<FoodLog>)> {
    let mut groups: Vec<(NaiveDate, Vec<FoodLog>)> = Vec::new();
    for log in logs {
        let day = log.local_date();
        match groups.iter_mut().find(|(d, _)| *d == day) {
            Some((_, entries)) => entries.push(log.clone()),
            None => groups.push((day, vec![log.clone()])),
        }
    }
    groups.sort_by(|a, b| b.0.cmp(&a.0));
    groups
}

pub fn total_calories(logs: &[FoodLog]) -> u32 {
    logs.iter().map(|log| log.calories).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion() -> FoodSuggestion {
        FoodSuggestion {
            name: "Cơm gà".to_string(),
            calories: 450,
            protein: 35.0,
            carbs: 52.0,
            fat: 12.0,
            confidence: None,
        }
    }

    fn log(id: i64, meal_type: MealType, timestamp: DateTime<Utc>) -> FoodLog {
        FoodLog {
            id,
            name: format!("log {}", id),
            calories: 100 * id as u32,
            protein: 1.0,
            carbs: 1.0,
            fat: 1.0,
            portion: "1".to_string(),
            meal_type,
            timestamp,
            image_url: None,
        }
    }

    #[test]
    fn test_small_portion_scales_and_rounds() {
        let entry = log_from_suggestion(&suggestion(), PortionSize::Small, MealType::Lunch, None);
        assert_eq!(entry.calories, 315);
        assert_eq!(entry.protein, 25.0); // 24.5 rounds up
        assert_eq!(entry.carbs, 36.0);
        assert_eq!(entry.fat, 8.0);
        assert_eq!(entry.portion, "Small (70%)");
    }

    #[test]
    fn test_large_portion() {
        let entry = log_from_suggestion(
            &suggestion(),
            PortionSize::Large,
            MealType::Dinner,
            Some("data:image/jpeg;base64,AAAA".to_string()),
        );
        assert_eq!(entry.calories, 585);
        assert_eq!(entry.meal_type, MealType::Dinner);
        assert!(entry.image_url.is_some());
    }

    #[test]
    fn test_manual_form_defaults_and_parse() {
        let mut form = ManualForm::default();
        assert_eq!(form.portion, "1 serving");
        assert_eq!(form.meal_type, MealType::Lunch);

        form.name = "  Bánh mì ".to_string();
        form.calories = "350".to_string();
        form.protein = "abc".to_string();
        form.fat = "12,5".to_string();
        let entry = form.to_new_food_log().unwrap();
        assert_eq!(entry.name, "Bánh mì");
        assert_eq!(entry.protein, 0.0);
        assert_eq!(entry.carbs, 0.0);
        assert_eq!(entry.fat, 12.5);
    }

    #[test]
    fn test_manual_form_rejects_bad_input() {
        let mut form = ManualForm::default();
        form.calories = "200".to_string();
        assert!(matches!(
            form.to_new_food_log(),
            Err(AppError::Validation(_))
        ));

        form.name = "Phở".to_string();
        form.calories = "-5".to_string();
        assert!(form.to_new_food_log().is_err());
    }

    #[test]
    fn test_apply_preset_keeps_meal_type() {
        let mut form = ManualForm {
            meal_type: MealType::Breakfast,
            ..Default::default()
        };
        form.apply_preset(&QUICK_ADD_PRESETS[2]);
        assert_eq!(form.name, "Ức gà luộc");
        assert_eq!(form.fat, "3.6");
        assert_eq!(form.portion, "100g");
        assert_eq!(form.meal_type, MealType::Breakfast);
        assert_eq!(form.to_new_food_log().unwrap().calories, 165);
    }

    #[test]
    fn test_validate_rejects_negative_macro() {
        let entry = NewFoodLog {
            name: "x".to_string(),
            calories: 1,
            protein: -1.0,
            carbs: 0.0,
            fat: 0.0,
            portion: DEFAULT_PORTION.to_string(),
            meal_type: MealType::Snack,
            image_url: None,
        };
        assert!(validate(&entry).is_err());
    }

    #[test]
    fn test_edit_form_roundtrip_to_update() {
        let original = log(3, MealType::Snack, Utc::now());
        let mut form = EditForm::from_log(&original);
        form.calories = "250".to_string();
        let update = form.to_update().unwrap();
        assert_eq!(update.calories, Some(250));
        assert_eq!(update.meal_type, Some(MealType::Snack));
        assert!(update.image_url.is_none());
    }

    #[test]
    fn test_filters() {
        let now = Utc::now();
        let logs = vec![
            log(1, MealType::Lunch, now),
            log(2, MealType::Dinner, now - Duration::days(3)),
            log(3, MealType::Lunch, now - Duration::days(8)),
        ];

        assert_eq!(filter_logs(&logs, DateFilter::All, None, now).len(), 3);
        let week = filter_logs(&logs, DateFilter::Week, None, now);
        assert_eq!(week.iter().map(|l| l.id).collect::<Vec<_>>(), vec![1, 2]);
        let today = filter_logs(&logs, DateFilter::Today, None, now);
        assert_eq!(today.len(), 1);
        let lunches = filter_logs(&logs, DateFilter::All, Some(MealType::Lunch), now);
        assert_eq!(lunches.iter().map(|l| l.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(total_calories(&lunches), 400);
    }

    #[test]
    fn test_group_by_day_newest_first() {
        let now = Utc::now();
        let logs = vec![
            log(1, MealType::Lunch, now - Duration::days(2)),
            log(2, MealType::Lunch, now),
            log(3, MealType::Dinner, now - Duration::days(2)),
        ];
        let groups = group_by_day(&logs);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].1[0].id, 2);
        assert_eq!(
            groups[1].1.iter().map(|l| l.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[test]
    fn test_date_filter_strings() {
        for filter in [DateFilter::All, DateFilter::Today, DateFilter::Week] {
            assert_eq!(DateFilter::from_str(filter.as_str()), filter);
        }
    }
}

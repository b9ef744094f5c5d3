use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[serde(other)]
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => Gender::Other,
        }
    }

    pub fn all() -> &'static [Gender] {
        static ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];
        &ALL
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl From<String> for ActivityLevel {
    fn from(value: String) -> Self {
        Self::from_str(&value)
    }
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very-active",
        }
    }

    /// Unknown values fall back to `Moderate`, the default activity level
    pub fn from_str(s: &str) -> Self {
        match s {
            "sedentary" => ActivityLevel::Sedentary,
            "light" => ActivityLevel::Light,
            "active" => ActivityLevel::Active,
            "very-active" | "very_active" | "veryActive" => ActivityLevel::VeryActive,
            _ => ActivityLevel::Moderate,
        }
    }

    pub fn all() -> &'static [ActivityLevel] {
        static ALL: [ActivityLevel; 5] = [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Active,
            ActivityLevel::VeryActive,
        ];
        &ALL
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Goal {
    Maintain,
    Lose,
    Gain,
}

impl From<String> for Goal {
    fn from(value: String) -> Self {
        Self::from_str(&value)
    }
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Maintain => "maintain",
            Goal::Lose => "lose",
            Goal::Gain => "gain",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "lose" => Goal::Lose,
            "gain" => Goal::Gain,
            _ => Goal::Maintain,
        }
    }

    pub fn all() -> &'static [Goal] {
        static ALL: [Goal; 3] = [Goal::Maintain, Goal::Lose, Goal::Gain];
        &ALL
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl From<String> for MealType {
    fn from(value: String) -> Self {
        Self::from_str(&value)
    }
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "breakfast" => MealType::Breakfast,
            "dinner" => MealType::Dinner,
            "snack" => MealType::Snack,
            _ => MealType::Lunch,
        }
    }

    pub fn all() -> &'static [MealType] {
        static ALL: [MealType; 4] = [
            MealType::Breakfast,
            MealType::Lunch,
            MealType::Dinner,
            MealType::Snack,
        ];
        &ALL
    }
}

/// Profile as stored by the backend (camelCase keys on the wire)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Height in cm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Weight in kg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<Goal>,
    /// Cached at goal selection, not recomputed when the inputs change
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_calories: Option<u32>,
}

impl UserProfile {
    /// Overwrites exactly the fields present in `update`
    pub fn merge(&mut self, update: &ProfileUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(email) = &update.email {
            self.email = email.clone();
        }
        if update.age.is_some() {
            self.age = update.age;
        }
        if update.gender.is_some() {
            self.gender = update.gender;
        }
        if update.height.is_some() {
            self.height = update.height;
        }
        if update.weight.is_some() {
            self.weight = update.weight;
        }
        if update.activity_level.is_some() {
            self.activity_level = update.activity_level;
        }
        if update.goal.is_some() {
            self.goal = update.goal;
        }
        if update.daily_calories.is_some() {
            self.daily_calories = update.daily_calories;
        }
    }
}

/// Partial profile for `PUT /api/profile`; absent fields are not sent
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<Goal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_calories: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodLog {
    pub id: i64,
    pub name: String,
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub portion: String,
    pub meal_type: MealType,
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl FoodLog {
    /// Builds the entry the server would return for `new`
    pub fn from_new(id: i64, timestamp: DateTime<Utc>, new: NewFoodLog) -> Self {
        Self {
            id,
            name: new.name,
            calories: new.calories,
            protein: new.protein,
            carbs: new.carbs,
            fat: new.fat,
            portion: new.portion,
            meal_type: new.meal_type,
            timestamp,
            image_url: new.image_url,
        }
    }

    /// Calendar day of the entry in the device's time zone
    pub fn local_date(&self) -> NaiveDate {
        self.timestamp.with_timezone(&Local).date_naive()
    }

    /// Overwrites exactly the fields present in `update`
    pub fn merge(&mut self, update: &FoodLogUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(calories) = update.calories {
            self.calories = calories;
        }
        if let Some(protein) = update.protein {
            self.protein = protein;
        }
        if let Some(carbs) = update.carbs {
            self.carbs = carbs;
        }
        if let Some(fat) = update.fat {
            self.fat = fat;
        }
        if let Some(portion) = &update.portion {
            self.portion = portion.clone();
        }
        if let Some(meal_type) = update.meal_type {
            self.meal_type = meal_type;
        }
        if update.image_url.is_some() {
            self.image_url = update.image_url.clone();
        }
    }
}

/// Body of `POST /api/food/log`; id and timestamp are assigned by the server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewFoodLog {
    pub name: String,
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub portion: String,
    pub meal_type: MealType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Partial food log for `PUT /api/food/log/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodLogUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Response of the signup and login endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserProfile,
}

/// Nutrition estimate returned by the food analysis endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodRecognitionResponse {
    pub food_name: String,
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub portion: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub const OFFLINE: &'static str = "offline";

    pub fn offline() -> Self {
        Self {
            status: Self::OFFLINE.to_string(),
        }
    }

    pub fn is_online(&self) -> bool {
        self.status != Self::OFFLINE
    }
}

/// Backend timestamps come either as RFC 3339 or as naive ISO-8601 in UTC
pub mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
    }

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()
            .map(|naive| naive.and_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_profile_uses_camel_case_keys() {
        let json = r#"{
            "name": "An",
            "email": "an@example.com",
            "age": 30,
            "gender": "female",
            "height": 160.0,
            "weight": 52.5,
            "activityLevel": "very-active",
            "goal": "lose",
            "dailyCalories": 1700
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.activity_level, Some(ActivityLevel::VeryActive));
        assert_eq!(profile.goal, Some(Goal::Lose));
        assert_eq!(profile.daily_calories, Some(1700));
    }

    #[test]
    fn test_unknown_enum_strings_fall_back() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"name":"x","email":"y","activityLevel":"athlete","goal":"bulk"}"#,
        )
        .unwrap();
        assert_eq!(profile.activity_level, Some(ActivityLevel::Moderate));
        assert_eq!(profile.goal, Some(Goal::Maintain));

        let profile: UserProfile =
            serde_json::from_str(r#"{"name":"x","email":"y","activityLevel":"very_active"}"#)
                .unwrap();
        assert_eq!(profile.activity_level, Some(ActivityLevel::VeryActive));
        assert_eq!(serde_json::to_value(MealType::Snack).unwrap(), "snack");
    }

    #[test]
    fn test_unknown_gender_is_other() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"name":"x","email":"y","gender":"nonbinary"}"#).unwrap();
        assert_eq!(profile.gender, Some(Gender::Other));
    }

    #[test]
    fn test_profile_update_omits_absent_fields() {
        let update = ProfileUpdate {
            goal: Some(Goal::Gain),
            daily_calories: Some(2800),
            ..Default::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "goal": "gain", "dailyCalories": 2800 })
        );
    }

    #[test]
    fn test_profile_merge_keeps_untouched_fields() {
        let mut profile = UserProfile {
            name: "Minh".to_string(),
            email: "minh@example.com".to_string(),
            age: Some(40),
            ..Default::default()
        };
        profile.merge(&ProfileUpdate {
            weight: Some(70.0),
            ..Default::default()
        });
        assert_eq!(profile.age, Some(40));
        assert_eq!(profile.weight, Some(70.0));
        assert_eq!(profile.name, "Minh");
    }

    #[test]
    fn test_food_log_accepts_naive_timestamp_and_ignores_user_id() {
        let json = r#"{
            "id": 7,
            "user_id": 3,
            "name": "Phở bò",
            "calories": 550,
            "protein": 30,
            "carbs": 70,
            "fat": 15,
            "portion": "1 tô",
            "mealType": "breakfast",
            "timestamp": "2025-03-01T07:30:15.123456",
            "imageUrl": null
        }"#;
        let log: FoodLog = serde_json::from_str(json).unwrap();
        assert_eq!(log.id, 7);
        assert_eq!(log.meal_type, MealType::Breakfast);
        assert_eq!(log.protein, 30.0);
        assert_eq!(
            log.timestamp.date_naive(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
        assert!(log.image_url.is_none());
    }

    #[test]
    fn test_timestamp_parse_rfc3339_with_offset() {
        let parsed = timestamp::parse("2025-03-01T09:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 3, 1, 7, 0, 0).unwrap());
        assert!(timestamp::parse("yesterday").is_none());
    }

    #[test]
    fn test_food_log_merge() {
        let mut log = FoodLog::from_new(
            1,
            Utc::now(),
            NewFoodLog {
                name: "Cơm gà".to_string(),
                calories: 450,
                protein: 35.0,
                carbs: 52.0,
                fat: 12.0,
                portion: "1 dĩa".to_string(),
                meal_type: MealType::Lunch,
                image_url: None,
            },
        );
        log.merge(&FoodLogUpdate {
            calories: Some(400),
            meal_type: Some(MealType::Dinner),
            ..Default::default()
        });
        assert_eq!(log.calories, 400);
        assert_eq!(log.meal_type, MealType::Dinner);
        assert_eq!(log.name, "Cơm gà");
    }

    #[test]
    fn test_enum_string_roundtrip() {
        for level in ActivityLevel::all() {
            assert_eq!(ActivityLevel::from_str(level.as_str()), *level);
        }
        for meal in MealType::all() {
            assert_eq!(MealType::from_str(meal.as_str()), *meal);
        }
        assert_eq!(Goal::from_str("unknown"), Goal::Maintain);
    }

    #[test]
    fn test_health_status() {
        assert!(!HealthStatus::offline().is_online());
        assert!(HealthStatus {
            status: "healthy".to_string()
        }
        .is_online());
    }
}

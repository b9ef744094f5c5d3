use crate::models::{ActivityLevel, FoodLog, Gender, Goal, UserProfile};
use chrono::NaiveDate;

pub const DEFAULT_AGE: u32 = 25;
pub const DEFAULT_HEIGHT_CM: f64 = 170.0;
pub const DEFAULT_WEIGHT_KG: f64 = 65.0;
/// Dashboard limit when the profile has no cached target
pub const DEFAULT_DAILY_LIMIT: u32 = 2000;

pub const LOSE_DEFICIT: f64 = 500.0;
pub const GAIN_SURPLUS: f64 = 300.0;

/// Above this many remaining kcal the dashboard suggests eating more
pub const CAUTION_THRESHOLD: i64 = 500;

pub const RING_RADIUS: f64 = 70.0;

pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

/// Basal metabolic rate (Mifflin-St Jeor), missing attributes use the defaults
pub fn bmr(profile: &UserProfile) -> f64 {
    let age = profile.age.unwrap_or(DEFAULT_AGE) as f64;
    let height = profile.height.unwrap_or(DEFAULT_HEIGHT_CM);
    let weight = profile.weight.unwrap_or(DEFAULT_WEIGHT_KG);
    let base = 10.0 * weight + 6.25 * height - 5.0 * age;

    match profile.gender.unwrap_or(Gender::Male) {
        Gender::Male => base + 5.0,
        Gender::Female | Gender::Other => base - 161.0,
    }
}

pub fn tdee(profile: &UserProfile) -> f64 {
    bmr(profile) * activity_multiplier(profile.activity_level.unwrap_or(ActivityLevel::Moderate))
}

/// Calorie target for `goal`, rounded half away from zero and never negative
pub fn daily_target(profile: &UserProfile, goal: Goal) -> u32 {
    let tdee = tdee(profile);
    let target = match goal {
        Goal::Lose => tdee - LOSE_DEFICIT,
        Goal::Gain => tdee + GAIN_SURPLUS,
        Goal::Maintain => tdee,
    };
    target.round().max(0.0) as u32
}

/// Body mass index from the recorded height and weight; `None` until both are set
pub fn bmi(profile: &UserProfile) -> Option<f64> {
    let height_m = profile.height.filter(|h| *h > 0.0)? / 100.0;
    let weight = profile.weight.filter(|w| *w > 0.0)?;
    Some(weight / (height_m * height_m))
}

/// The cached target, or 2000 kcal
pub fn daily_limit(profile: Option<&UserProfile>) -> u32 {
    profile
        .and_then(|p| p.daily_calories)
        .unwrap_or(DEFAULT_DAILY_LIMIT)
}

/// Share of each macro in percent of the total grams
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

pub fn macro_percentages(protein: f64, carbs: f64, fat: f64) -> MacroSplit {
    let total = protein + carbs + fat;
    if total <= 0.0 {
        return MacroSplit::default();
    }
    MacroSplit {
        protein: protein / total * 100.0,
        carbs: carbs / total * 100.0,
        fat: fat / total * 100.0,
    }
}

/// Advisory banner shown under the macro card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerTier {
    /// More than 500 kcal left
    Surplus,
    /// 1..=500 kcal left
    Caution,
    /// Limit reached or passed
    Exceeded,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalorieProgress {
    pub total: u32,
    pub limit: u32,
    /// Consumed share of the limit, clamped to 0..=1
    pub fraction: f64,
    pub remaining: u32,
    /// kcal above the limit, 0 unless exceeded
    pub overflow: u32,
    pub tier: BannerTier,
}

impl CalorieProgress {
    pub fn percent(&self) -> f64 {
        self.fraction * 100.0
    }

    pub fn circumference() -> f64 {
        2.0 * std::f64::consts::PI * RING_RADIUS
    }

    /// `stroke-dashoffset` of the progress ring
    pub fn dash_offset(&self) -> f64 {
        Self::circumference() * (1.0 - self.fraction)
    }
}

pub fn calorie_progress(total: u32, limit: u32) -> CalorieProgress {
    let fraction = if limit == 0 {
        1.0
    } else {
        (total as f64 / limit as f64).min(1.0)
    };
    let diff = limit as i64 - total as i64;
    let tier = if diff > CAUTION_THRESHOLD {
        BannerTier::Surplus
    } else if diff > 0 {
        BannerTier::Caution
    } else {
        BannerTier::Exceeded
    };

    CalorieProgress {
        total,
        limit,
        fraction,
        remaining: diff.max(0) as u32,
        overflow: (-diff).max(0) as u32,
        tier,
    }
}

/// Totals over the logs of one local calendar day
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DailySummary {
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    /// That day's logs in list order (newest first as kept by the session)
    pub entries: Vec<FoodLog>,
}

impl DailySummary {
    pub fn macros(&self) -> MacroSplit {
        macro_percentages(self.protein, self.carbs, self.fat)
    }

    pub fn recent(&self, n: usize) -> &[FoodLog] {
        &self.entries[..self.entries.len().min(n)]
    }
}

pub fn daily_summary(logs: &[FoodLog], day: NaiveDate) -> DailySummary {
    logs.iter()
        .filter(|log| log.local_date() == day)
        .fold(DailySummary::default(), |mut acc, log| {
            acc.calories += log.calories;
            acc.protein += log.protein;
            acc.carbs += log.carbs;
            acc.fat += log.fat;
            acc.entries.push(log.clone());
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealType;
    use chrono::{Duration, Local, TimeZone, Utc};

    #[test]
    fn test_bmi_needs_height_and_weight() {
        let value = bmi(&reference_profile()).unwrap();
        assert!((value - 22.49).abs() < 0.01);
        assert_eq!(bmi(&UserProfile::default()), None);
        let no_height = UserProfile {
            weight: Some(70.0),
            ..Default::default()
        };
        assert_eq!(bmi(&no_height), None);
    }

    fn reference_profile() -> UserProfile {
        UserProfile {
            age: Some(25),
            gender: Some(Gender::Male),
            height: Some(170.0),
            weight: Some(65.0),
            activity_level: Some(ActivityLevel::Moderate),
            ..Default::default()
        }
    }

    fn log_at(id: i64, calories: u32, hours_ago: i64) -> FoodLog {
        FoodLog {
            id,
            name: format!("meal {}", id),
            calories,
            protein: 10.0,
            carbs: 20.0,
            fat: 5.0,
            portion: "1".to_string(),
            meal_type: MealType::Lunch,
            timestamp: Utc::now() - Duration::hours(hours_ago),
            image_url: None,
        }
    }

    #[test]
    fn test_reference_scenario() {
        let profile = reference_profile();
        assert_eq!(bmr(&profile), 1592.5);
        assert!((tdee(&profile) - 2468.375).abs() < 1e-9);
        assert_eq!(daily_target(&profile, Goal::Lose), 1968);
        assert_eq!(daily_target(&profile, Goal::Maintain), 2468);
        assert_eq!(daily_target(&profile, Goal::Gain), 2768);
    }

    #[test]
    fn test_defaults_match_reference_profile() {
        assert_eq!(bmr(&UserProfile::default()), bmr(&reference_profile()));
    }

    #[test]
    fn test_female_and_other_use_female_constant() {
        let mut profile = reference_profile();
        profile.gender = Some(Gender::Female);
        assert_eq!(bmr(&profile), 1426.5);
        profile.gender = Some(Gender::Other);
        assert_eq!(bmr(&profile), 1426.5);
    }

    #[test]
    fn test_goal_offsets_are_exact() {
        for level in ActivityLevel::all() {
            for age in [18u32, 35, 61] {
                let profile = UserProfile {
                    age: Some(age),
                    gender: Some(Gender::Female),
                    height: Some(158.0),
                    weight: Some(51.3),
                    activity_level: Some(*level),
                    ..Default::default()
                };
                let maintain = daily_target(&profile, Goal::Maintain);
                assert_eq!(
                    maintain,
                    (bmr(&profile) * activity_multiplier(*level)).round() as u32
                );
                let lose = daily_target(&profile, Goal::Lose) as i64;
                let gain = daily_target(&profile, Goal::Gain) as i64;
                assert_eq!(lose, maintain as i64 - 500);
                assert_eq!(gain, maintain as i64 + 300);
            }
        }
    }

    #[test]
    fn test_daily_limit_fallback() {
        assert_eq!(daily_limit(None), 2000);
        let profile = UserProfile {
            daily_calories: Some(1700),
            ..Default::default()
        };
        assert_eq!(daily_limit(Some(&profile)), 1700);
    }

    #[test]
    fn test_macro_percentages() {
        let split = macro_percentages(30.0, 50.0, 20.0);
        assert!((split.protein + split.carbs + split.fat - 100.0).abs() < 1e-9);
        assert!((split.carbs - 50.0).abs() < 1e-9);

        assert_eq!(macro_percentages(0.0, 0.0, 0.0), MacroSplit::default());
    }

    #[test]
    fn test_progress_exceeded_shows_overflow() {
        let progress = calorie_progress(2200, 2000);
        assert_eq!(progress.remaining, 0);
        assert_eq!(progress.overflow, 200);
        assert_eq!(progress.tier, BannerTier::Exceeded);
        assert_eq!(progress.fraction, 1.0);
        assert!(progress.dash_offset().abs() < 1e-9);
    }

    #[test]
    fn test_progress_tiers() {
        assert_eq!(calorie_progress(1000, 2000).tier, BannerTier::Surplus);
        assert_eq!(calorie_progress(1500, 2000).tier, BannerTier::Caution);
        assert_eq!(calorie_progress(1999, 2000).tier, BannerTier::Caution);
        assert_eq!(calorie_progress(2000, 2000).tier, BannerTier::Exceeded);
        assert_eq!(calorie_progress(2000, 2000).overflow, 0);

        let half = calorie_progress(1000, 2000);
        assert_eq!(half.remaining, 1000);
        assert!((half.dash_offset() - CalorieProgress::circumference() / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_daily_summary_only_counts_today() {
        let now = Local::now();
        let today = now.date_naive();
        let yesterday_noon = Local
            .from_local_datetime(&(today - Duration::days(1)).and_hms_opt(12, 0, 0).unwrap())
            .unwrap()
            .with_timezone(&Utc);

        let mut old = log_at(9, 900, 0);
        old.timestamp = yesterday_noon;
        let logs = vec![log_at(1, 300, 0), old, log_at(2, 200, 0)];

        let summary = daily_summary(&logs, today);
        assert_eq!(summary.calories, 500);
        assert_eq!(summary.entries.len(), 2);
        assert_eq!(summary.protein, 20.0);
        assert_eq!(summary.recent(3).len(), 2);
        assert_eq!(summary.recent(1)[0].id, 1);
    }
}

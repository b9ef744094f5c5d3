use crate::models::FoodLog;
use chrono::{Duration, NaiveDate};
use std::collections::{BTreeMap, HashSet};

/// Streaks are not counted further back than this
pub const MAX_STREAK_DAYS: u32 = 365;

/// Consecutive local days ending `today` with at least one log
pub fn calculate_streak(logs: &[FoodLog], today: NaiveDate) -> u32 {
    let days: HashSet<NaiveDate> = logs.iter().map(FoodLog::local_date).collect();
    let mut streak = 0;
    let mut day = today;

    while streak < MAX_STREAK_DAYS && days.contains(&day) {
        streak += 1;
        day = day - Duration::days(1);
    }

    streak
}

/// Calories for one day of the weekly chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCalories {
    pub date: NaiveDate,
    pub calories: u32,
}

/// Calories per day for `today - 6 ..= today`, oldest first
pub fn weekly_calories(logs: &[FoodLog], today: NaiveDate) -> Vec<DayCalories> {
    let start = today - Duration::days(6);
    let mut per_day: BTreeMap<NaiveDate, u32> = (0..7)
        .map(|offset| (start + Duration::days(offset), 0))
        .collect();

    for log in logs {
        if let Some(total) = per_day.get_mut(&log.local_date()) {
            *total += log.calories;
        }
    }

    per_day
        .into_iter()
        .map(|(date, calories)| DayCalories { date, calories })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementKind {
    StreakMaster,
    FirstGoal,
    Photographer,
    Consistent,
    Expert,
    Legend,
}

impl AchievementKind {
    pub fn all() -> [AchievementKind; 6] {
        [
            AchievementKind::StreakMaster,
            AchievementKind::FirstGoal,
            AchievementKind::Photographer,
            AchievementKind::Consistent,
            AchievementKind::Expert,
            AchievementKind::Legend,
        ]
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AchievementKind::StreakMaster => "🔥",
            AchievementKind::FirstGoal => "💪",
            AchievementKind::Photographer => "📸",
            AchievementKind::Consistent => "🎯",
            AchievementKind::Expert => "⭐",
            AchievementKind::Legend => "🏆",
        }
    }

    /// Fluent message id of the title
    pub fn i18n_key(&self) -> &'static str {
        match self {
            AchievementKind::StreakMaster => "achievement-streak-master",
            AchievementKind::FirstGoal => "achievement-first-goal",
            AchievementKind::Photographer => "achievement-photographer",
            AchievementKind::Consistent => "achievement-consistent",
            AchievementKind::Expert => "achievement-expert",
            AchievementKind::Legend => "achievement-legend",
        }
    }

    /// Threshold and the statistic it applies to
    fn earned(&self, stats: &ProfileStats) -> bool {
        match self {
            AchievementKind::StreakMaster => stats.streak >= 3,
            AchievementKind::FirstGoal => stats.days_logged >= 7,
            AchievementKind::Photographer => stats.total_meals >= 50,
            AchievementKind::Consistent => stats.streak >= 30,
            AchievementKind::Expert => stats.total_meals >= 100,
            AchievementKind::Legend => stats.streak >= 365,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub kind: AchievementKind,
    pub earned: bool,
}

/// Numbers shown on the profile screen
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileStats {
    pub days_logged: usize,
    pub total_meals: usize,
    pub total_calories: u64,
    /// Average over days with at least one log
    pub average_calories: f64,
    pub streak: u32,
}

impl ProfileStats {
    pub fn achievements(&self) -> Vec<Achievement> {
        AchievementKind::all()
            .into_iter()
            .map(|kind| Achievement {
                kind,
                earned: kind.earned(self),
            })
            .collect()
    }

    pub fn earned_count(&self) -> usize {
        self.achievements().iter().filter(|a| a.earned).count()
    }
}

pub fn calculate_profile_stats(logs: &[FoodLog], today: NaiveDate) -> ProfileStats {
    let days_logged = logs
        .iter()
        .map(FoodLog::local_date)
        .collect::<HashSet<_>>()
        .len();
    let total_calories: u64 = logs.iter().map(|log| log.calories as u64).sum();
    let average_calories = if days_logged > 0 {
        total_calories as f64 / days_logged as f64
    } else {
        0.0
    };

    ProfileStats {
        days_logged,
        total_meals: logs.len(),
        total_calories,
        average_calories,
        streak: calculate_streak(logs, today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealType;
    use chrono::{Local, TimeZone, Utc};

    fn log_on(id: i64, date: NaiveDate, calories: u32) -> FoodLog {
        let noon = Local
            .from_local_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
            .unwrap()
            .with_timezone(&Utc);
        FoodLog {
            id,
            name: "Bún chả".to_string(),
            calories,
            protein: 20.0,
            carbs: 40.0,
            fat: 10.0,
            portion: "1 phần".to_string(),
            meal_type: MealType::Dinner,
            timestamp: noon,
            image_url: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_streak_three_consecutive_days() {
        let t = today();
        let logs = vec![
            log_on(1, t, 500),
            log_on(2, t - Duration::days(1), 500),
            log_on(3, t - Duration::days(2), 500),
        ];
        assert_eq!(calculate_streak(&logs, t), 3);
    }

    #[test]
    fn test_streak_stops_at_gap() {
        let t = today();
        let logs = vec![log_on(1, t, 500), log_on(2, t - Duration::days(2), 500)];
        assert_eq!(calculate_streak(&logs, t), 1);
    }

    #[test]
    fn test_streak_zero_without_log_today() {
        let t = today();
        let logs = vec![log_on(1, t - Duration::days(1), 500)];
        assert_eq!(calculate_streak(&logs, t), 0);
    }

    #[test]
    fn test_streak_capped_at_365() {
        let t = today();
        let logs: Vec<FoodLog> = (0..400)
            .map(|i| log_on(i, t - Duration::days(i), 100))
            .collect();
        assert_eq!(calculate_streak(&logs, t), 365);
    }

    #[test]
    fn test_weekly_calories_window() {
        let t = today();
        let logs = vec![
            log_on(1, t, 400),
            log_on(2, t, 300),
            log_on(3, t - Duration::days(6), 250),
            log_on(4, t - Duration::days(7), 999),
        ];
        let week = weekly_calories(&logs, t);
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].date, t - Duration::days(6));
        assert_eq!(week[0].calories, 250);
        assert_eq!(week[6].calories, 700);
        assert_eq!(week.iter().map(|d| d.calories).sum::<u32>(), 950);
    }

    #[test]
    fn test_profile_stats_and_achievements() {
        let t = today();
        let logs: Vec<FoodLog> = (0..8)
            .flat_map(|day| {
                let date = t - Duration::days(day);
                vec![log_on(day * 2, date, 600), log_on(day * 2 + 1, date, 400)]
            })
            .collect();

        let stats = calculate_profile_stats(&logs, t);
        assert_eq!(stats.days_logged, 8);
        assert_eq!(stats.total_meals, 16);
        assert_eq!(stats.total_calories, 8000);
        assert_eq!(stats.average_calories, 1000.0);
        assert_eq!(stats.streak, 8);

        let earned: Vec<AchievementKind> = stats
            .achievements()
            .into_iter()
            .filter(|a| a.earned)
            .map(|a| a.kind)
            .collect();
        assert_eq!(
            earned,
            vec![AchievementKind::StreakMaster, AchievementKind::FirstGoal]
        );
        assert_eq!(stats.earned_count(), 2);
    }

    #[test]
    fn test_empty_stats() {
        let stats = calculate_profile_stats(&[], today());
        assert_eq!(stats.days_logged, 0);
        assert_eq!(stats.average_calories, 0.0);
        assert_eq!(stats.earned_count(), 0);
    }
}

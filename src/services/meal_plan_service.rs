use crate::models::{DayPlan, Goal, MealSlot, PlannedMeal};
use chrono::{Duration, NaiveDate};

pub const PLAN_DAYS: i64 = 7;

/// Supplies the dish options a weekly plan is built from
pub trait MealPlanSource {
    /// Options for one slot; must not be empty
    fn options(&self, goal: Goal, slot: MealSlot) -> Vec<PlannedMeal>;
}

type Dish = (&'static str, u32, f64, f64, f64, &'static str);

const LOSE_BREAKFAST: [Dish; 3] = [
    ("Yến mạch với trái cây", 250, 8.0, 45.0, 5.0, "Yến mạch, chuối, dâu tây, sữa tươi"),
    ("Trứng luộc & bánh mì nguyên cám", 280, 15.0, 35.0, 8.0, "2 trứng luộc, 2 lát bánh mì nguyên cám"),
    ("Sữa chua Hy Lạp với hạt", 220, 18.0, 20.0, 8.0, "Sữa chua Hy Lạp, hạt chia, hạnh nhân"),
];
const LOSE_LUNCH: [Dish; 3] = [
    ("Salad gà nướng", 350, 35.0, 25.0, 12.0, "Ức gà nướng, rau xanh, cà chua, dầu olive"),
    ("Cơm gạo lứt & cá hồi", 420, 30.0, 40.0, 15.0, "Cá hồi nướng, cơm gạo lứt, rau củ luộc"),
    ("Phở gà không mỡ", 380, 32.0, 45.0, 8.0, "Phở gà, ít bánh phở, nhiều rau thơm"),
];
const LOSE_DINNER: [Dish; 3] = [
    ("Ức gà áp chảo & rau", 320, 38.0, 20.0, 10.0, "Ức gà, bông cải xanh, cà rót"),
    ("Tôm hấp & salad", 280, 30.0, 18.0, 8.0, "Tôm hấp, salad rau trộn"),
    ("Cá diêu hồng nướng", 310, 35.0, 15.0, 12.0, "Cá nướng, rau củ luộc"),
];

const MAINTAIN_BREAKFAST: [Dish; 3] = [
    ("Bánh mì trứng", 350, 15.0, 45.0, 12.0, "Bánh mì, trứng ốp la, pate"),
    ("Phở bò", 400, 20.0, 55.0, 10.0, "Phở bò tái, rau thơm"),
    ("Xôi gà", 380, 18.0, 50.0, 12.0, "Xôi gà, đậu phộng"),
];
const MAINTAIN_LUNCH: [Dish; 3] = [
    ("Cơm gà xối mỡ", 520, 35.0, 58.0, 18.0, "Cơm trắng, gà xối mỡ, canh"),
    ("Bún chả", 480, 28.0, 55.0, 16.0, "Bún, chả nướng, nem, nước mắm"),
    ("Cơm sườn", 550, 32.0, 60.0, 20.0, "Cơm trắng, sườn nướng, trứng"),
];
const MAINTAIN_DINNER: [Dish; 3] = [
    ("Cơm rang thập cẩm", 450, 20.0, 55.0, 15.0, "Cơm rang, tôm, xúc xích, rau củ"),
    ("Mì Ý sốt bò bằm", 500, 25.0, 60.0, 18.0, "Mì Ý, sốt cà chua, thịt bò bằm"),
    ("Lẩu gà", 420, 35.0, 30.0, 18.0, "Gà, rau củ, nấm, miến"),
];

const GAIN_BREAKFAST: [Dish; 3] = [
    ("Bánh mì thịt nguội phô mai", 480, 22.0, 50.0, 20.0, "Bánh mì, thịt nguội, phô mai, trứng"),
    ("Cháo gà nấm", 420, 25.0, 55.0, 12.0, "Cháo gà, nấm, trứng, hành phi"),
    ("Bún bò Huế", 550, 28.0, 65.0, 18.0, "Bún bò, giò heo, chả"),
];
const GAIN_LUNCH: [Dish; 3] = [
    ("Cơm gà teriyaki", 650, 40.0, 75.0, 20.0, "Cơm trắng, gà teriyaki, salad"),
    ("Bún đậu mắm tôm", 620, 35.0, 70.0, 22.0, "Bún, đậu rán, nem, chả"),
    ("Cơm chiên dương châu", 680, 30.0, 80.0, 25.0, "Cơm chiên, tôm, xúc xích, trứng"),
];
const GAIN_DINNER: [Dish; 3] = [
    ("Bít tết & khoai tây", 720, 45.0, 60.0, 30.0, "Bít tết bò, khoai tây chiên, salad"),
    ("Cơm gà rán", 650, 38.0, 65.0, 25.0, "Cơm trắng, gà rán giòn, rau củ"),
    ("Mì xào bò", 620, 35.0, 70.0, 22.0, "Mì xào, thịt bò, rau củ"),
];

/// The built-in dish tables, three options per goal and slot
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticMealPlanSource;

impl StaticMealPlanSource {
    fn table(goal: Goal, slot: MealSlot) -> &'static [Dish] {
        match (goal, slot) {
            (Goal::Lose, MealSlot::Breakfast) => &LOSE_BREAKFAST,
            (Goal::Lose, MealSlot::Lunch) => &LOSE_LUNCH,
            (Goal::Lose, MealSlot::Dinner) => &LOSE_DINNER,
            (Goal::Maintain, MealSlot::Breakfast) => &MAINTAIN_BREAKFAST,
            (Goal::Maintain, MealSlot::Lunch) => &MAINTAIN_LUNCH,
            (Goal::Maintain, MealSlot::Dinner) => &MAINTAIN_DINNER,
            (Goal::Gain, MealSlot::Breakfast) => &GAIN_BREAKFAST,
            (Goal::Gain, MealSlot::Lunch) => &GAIN_LUNCH,
            (Goal::Gain, MealSlot::Dinner) => &GAIN_DINNER,
        }
    }
}

impl MealPlanSource for StaticMealPlanSource {
    fn options(&self, goal: Goal, slot: MealSlot) -> Vec<PlannedMeal> {
        Self::table(goal, slot)
            .iter()
            .map(|(name, calories, protein, carbs, fat, description)| PlannedMeal {
                name: name.to_string(),
                calories: *calories,
                protein: *protein,
                carbs: *carbs,
                fat: *fat,
                description: description.to_string(),
            })
            .collect()
    }
}

/// Seven days starting at `start`; day i takes option `i mod len` of every slot
pub fn generate_week(
    source: &dyn MealPlanSource,
    goal: Option<Goal>,
    start: NaiveDate,
) -> Vec<DayPlan> {
    let goal = goal.unwrap_or(Goal::Maintain);
    let breakfast = source.options(goal, MealSlot::Breakfast);
    let lunch = source.options(goal, MealSlot::Lunch);
    let dinner = source.options(goal, MealSlot::Dinner);

    if breakfast.is_empty() || lunch.is_empty() || dinner.is_empty() {
        log::warn!("Meal plan source has no options for {}", goal.as_str());
        return Vec::new();
    }

    (0..PLAN_DAYS)
        .map(|i| {
            let idx = i as usize;
            DayPlan {
                date: start + Duration::days(i),
                breakfast: breakfast[idx % breakfast.len()].clone(),
                lunch: lunch[idx % lunch.len()].clone(),
                dinner: dinner[idx % dinner.len()].clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 30).unwrap()
    }

    #[test]
    fn test_week_is_deterministic() {
        let a = generate_week(&StaticMealPlanSource, Some(Goal::Lose), start());
        let b = generate_week(&StaticMealPlanSource, Some(Goal::Lose), start());
        assert_eq!(a, b);
        assert_eq!(a.len(), 7);
    }

    #[test]
    fn test_rotation_and_dates() {
        let plan = generate_week(&StaticMealPlanSource, Some(Goal::Lose), start());
        assert_eq!(plan[0].breakfast.name, "Yến mạch với trái cây");
        assert_eq!(plan[3].breakfast.name, plan[0].breakfast.name);
        assert_eq!(plan[4].lunch.name, "Cơm gạo lứt & cá hồi");
        assert_eq!(plan[2].date, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        assert_eq!(plan[0].total_calories(), 250 + 350 + 320);
    }

    #[test]
    fn test_missing_goal_uses_maintain() {
        let plan = generate_week(&StaticMealPlanSource, None, start());
        assert_eq!(plan[0].lunch.name, "Cơm gà xối mỡ");
        assert_eq!(plan[0].meal(MealSlot::Dinner).calories, 450);
    }

    struct EmptySource;

    impl MealPlanSource for EmptySource {
        fn options(&self, _goal: Goal, _slot: MealSlot) -> Vec<PlannedMeal> {
            Vec::new()
        }
    }

    #[test]
    fn test_empty_source_gives_empty_plan() {
        assert!(generate_week(&EmptySource, Some(Goal::Gain), start()).is_empty());
    }
}

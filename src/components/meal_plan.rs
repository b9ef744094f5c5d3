use crate::components::goal_selection::goal_title;
use crate::components::macro_line;
use crate::models::{DayPlan, Goal, MealSlot, UserProfile};
use crate::services::meal_plan_service::{self, StaticMealPlanSource};
use chrono::Local;
use dioxus::prelude::*;
use dioxus_i18n::t;

fn goal_label(profile: Option<&UserProfile>) -> String {
    goal_title(profile.and_then(|p| p.goal).unwrap_or(Goal::Maintain))
}

fn build_plan(profile: Option<&UserProfile>) -> Vec<DayPlan> {
    meal_plan_service::generate_week(
        &StaticMealPlanSource,
        profile.and_then(|p| p.goal),
        Local::now().date_naive(),
    )
}

#[component]
fn PlannedDay(day: DayPlan, index: usize) -> Element {
    let heading = if index == 0 {
        t!("meal-plan-today")
    } else {
        day.date.format("%A, %d/%m").to_string()
    };
    let total = day.total_calories();

    rsx! {
        div { class: "card", style: "margin-bottom: 16px;",
            div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
                h3 { style: "margin: 0; font-size: 16px; color: #333;", "📅 {heading}" }
                span { style: "font-size: 13px; color: #0066cc; font-weight: 600;",
                    {t!("meal-plan-day-total", total: total)}
                }
            }
            for slot in MealSlot::all() {
                {
                    let meal = day.meal(slot).clone();
                    rsx! {
                        div {
                            key: "{slot.i18n_key()}",
                            style: "padding: 10px; border-radius: 8px; background: #f8f9fa; margin-bottom: 8px;",
                            div { style: "display: flex; justify-content: space-between; font-size: 12px; color: #666;",
                                span { "{slot.icon()} " {t!(slot.i18n_key())} }
                                span { "{slot.time_window()}" }
                            }
                            div { style: "display: flex; justify-content: space-between; margin-top: 4px;",
                                div { style: "font-weight: 600; color: #333;", "{meal.name}" }
                                div { style: "font-weight: 600; color: #0066cc;", "{meal.calories} kcal" }
                            }
                            div { style: "font-size: 12px; color: #888; margin-top: 2px;", "{meal.description}" }
                            div { style: "font-size: 11px; color: #999; margin-top: 4px;",
                                {macro_line(meal.protein, meal.carbs, meal.fat)}
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn MealPlanScreen(profile: Option<UserProfile>) -> Element {
    let profile_for_plan = profile.clone();
    let mut plan = use_signal(move || build_plan(profile_for_plan.as_ref()));
    let goal_text = goal_label(profile.as_ref());

    let regenerate = move |_| {
        let days = build_plan(profile.as_ref());
        log::info!("Regenerated meal plan with {} days", days.len());
        plan.set(days);
    };

    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto; min-height: 100vh; background: #f5f5f5; padding-bottom: 96px;",
            div { style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 8px;",
                h1 { style: "color: #0066cc; font-size: 24px; font-weight: 700; margin: 0;",
                    {t!("meal-plan-title")}
                }
                button {
                    class: "btn-secondary",
                    style: "padding: 8px 12px;",
                    onclick: regenerate,
                    "🔄 "
                    {t!("meal-plan-regenerate")}
                }
            }
            p { style: "color: #666; margin: 0 0 16px 0; font-size: 14px;",
                {t!("meal-plan-subtitle", goal: goal_text)}
            }

            for (index, day) in plan().into_iter().enumerate() {
                PlannedDay { key: "{day.date}", day, index }
            }
        }
    }
}

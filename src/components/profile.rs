use crate::components::goal_selection::goal_title;
use crate::components::setup_profile::activity_label;
use crate::models::{FoodLog, UserProfile};
use crate::navigation::Screen;
use crate::services::analytics_service::{self, DayCalories};
use crate::services::nutrition_service;
use chrono::Local;
use dioxus::prelude::*;
use dioxus_i18n::t;

const CHART_HEIGHT: f64 = 120.0;

#[component]
fn WeeklyChart(days: Vec<DayCalories>) -> Element {
    let peak = days.iter().map(|d| d.calories).max().unwrap_or(0).max(1) as f64;
    let frame_height = CHART_HEIGHT + 32.0;

    rsx! {
        div { class: "card", style: "margin-bottom: 16px;",
            h3 { style: "margin: 0 0 12px 0; font-size: 16px;", "📊 " {t!("profile-weekly-calories")} }
            div { style: "display: flex; align-items: flex-end; gap: 6px; height: {frame_height}px;",
                for day in days {
                    {
                        let height = (day.calories as f64 / peak * CHART_HEIGHT).max(2.0);
                        rsx! {
                            div {
                                key: "{day.date}",
                                style: "flex: 1; display: flex; flex-direction: column; align-items: center; justify-content: flex-end;",
                                span { style: "font-size: 10px; color: #666;", "{day.calories}" }
                                div { style: "width: 100%; height: {height}px; background: #0066cc; border-radius: 4px 4px 0 0;" }
                                span { style: "font-size: 11px; color: #888; margin-top: 4px;",
                                    {day.date.format("%a").to_string()}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatTile(label: String, value: String) -> Element {
    rsx! {
        div { style: "flex: 1; text-align: center; padding: 8px; background: #f8f9fa; border-radius: 8px;",
            div { style: "font-size: 20px; font-weight: 700; color: #0066cc;", "{value}" }
            div { style: "font-size: 11px; color: #666;", "{label}" }
        }
    }
}

#[component]
pub fn ProfileScreen(
    profile: Option<UserProfile>,
    food_logs: Vec<FoodLog>,
    on_navigate: EventHandler<Screen>,
) -> Element {
    let today = Local::now().date_naive();
    let stats = analytics_service::calculate_profile_stats(&food_logs, today);
    let weekly = analytics_service::weekly_calories(&food_logs, today);
    let achievements = stats.achievements();
    let earned = stats.earned_count();
    let average = stats.average_calories.round() as u64;

    let name = profile
        .as_ref()
        .map(|p| p.name.clone())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| t!("dashboard-default-name"));
    let email = profile.as_ref().map(|p| p.email.clone()).unwrap_or_default();
    let initial = name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();

    let activity = profile
        .as_ref()
        .and_then(|p| p.activity_level)
        .map(activity_label)
        .unwrap_or_else(|| "-".to_string());
    let goal = profile
        .as_ref()
        .and_then(|p| p.goal)
        .map(goal_title)
        .unwrap_or_else(|| "-".to_string());
    let recommended = nutrition_service::daily_limit(profile.as_ref());
    let weight = profile
        .as_ref()
        .and_then(|p| p.weight)
        .map(|w| format!("{:.1}", w))
        .unwrap_or_else(|| "-".to_string());
    let height = profile
        .as_ref()
        .and_then(|p| p.height)
        .map(|h| format!("{:.0}", h))
        .unwrap_or_else(|| "-".to_string());
    let bmi = profile
        .as_ref()
        .and_then(nutrition_service::bmi)
        .map(|b| format!("{:.1}", b))
        .unwrap_or_else(|| "-".to_string());

    let row_style = "display: flex; justify-content: space-between; padding: 8px 0; border-bottom: 1px solid #eee; font-size: 14px;";

    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto; min-height: 100vh; background: #f5f5f5; padding-bottom: 96px;",
            div { style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;",
                h1 { style: "color: #0066cc; font-size: 24px; font-weight: 700; margin: 0;",
                    {t!("profile-title")}
                }
                button {
                    class: "btn-secondary",
                    style: "padding: 8px 12px;",
                    onclick: move |_| on_navigate.call(Screen::Settings),
                    "⚙️"
                }
            }

            div { class: "card", style: "display: flex; align-items: center; gap: 16px; margin-bottom: 16px;",
                div { style: "width: 64px; height: 64px; border-radius: 50%; background: linear-gradient(135deg, #0066cc, #00a3ff); color: white; display: flex; align-items: center; justify-content: center; font-size: 28px; font-weight: 700;",
                    "{initial}"
                }
                div {
                    div { style: "font-size: 20px; font-weight: 600; color: #333;", "{name}" }
                    if !email.is_empty() {
                        div { style: "font-size: 13px; color: #666;", "{email}" }
                    }
                    div { style: "font-size: 13px; color: #ff6b35; margin-top: 4px;",
                        "🔥 "
                        {t!("profile-streak", days: stats.streak)}
                    }
                }
            }

            div { class: "card", style: "display: flex; gap: 8px; margin-bottom: 16px;",
                StatTile { label: t!("profile-days-logged"), value: stats.days_logged.to_string() }
                StatTile { label: t!("profile-total-meals"), value: stats.total_meals.to_string() }
                StatTile { label: t!("profile-average"), value: average.to_string() }
            }

            div { class: "card", style: "margin-bottom: 16px;",
                h3 { style: "margin: 0 0 12px 0; font-size: 16px;", "⚖️ " {t!("profile-body")} }
                div { style: "display: flex; gap: 8px;",
                    StatTile { label: t!("field-weight"), value: weight }
                    StatTile { label: t!("field-height"), value: height }
                    StatTile { label: t!("profile-bmi"), value: bmi }
                }
            }

            WeeklyChart { days: weekly }

            div { class: "card", style: "margin-bottom: 16px;",
                div { style: "display: flex; justify-content: space-between; margin-bottom: 12px;",
                    h3 { style: "margin: 0; font-size: 16px;", "🏅 " {t!("profile-achievements")} }
                    span { style: "font-size: 13px; color: #666;", "{earned}/{achievements.len()}" }
                }
                div { style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 8px;",
                    for achievement in achievements {
                        div {
                            key: "{achievement.kind.i18n_key()}",
                            style: if achievement.earned {
                                "text-align: center; padding: 12px 4px; border-radius: 8px; background: #FFF8E1;"
                            } else {
                                "text-align: center; padding: 12px 4px; border-radius: 8px; background: #f0f0f0; opacity: 0.5; filter: grayscale(1);"
                            },
                            div { style: "font-size: 28px;", "{achievement.kind.icon()}" }
                            div { style: "font-size: 11px; color: #333; margin-top: 4px;",
                                {t!(achievement.kind.i18n_key())}
                            }
                        }
                    }
                }
            }

            div { class: "card",
                h3 { style: "margin: 0 0 8px 0; font-size: 16px;", "📋 " {t!("profile-details")} }
                div { style: "{row_style}",
                    span { style: "color: #666;", {t!("field-activity")} }
                    span { "{activity}" }
                }
                div { style: "{row_style}",
                    span { style: "color: #666;", {t!("profile-goal")} }
                    span { "{goal}" }
                }
                div { style: "{row_style}",
                    span { style: "color: #666;", {t!("profile-recommended")} }
                    span { "{recommended} kcal" }
                }
                div { style: "display: flex; justify-content: space-between; padding: 8px 0; font-size: 14px;",
                    span { style: "color: #666;", {t!("profile-total-calories")} }
                    span { "{stats.total_calories} kcal" }
                }
            }
        }
    }
}

use crate::components::{grams, meal_type_label};
use crate::models::{FoodLog, UserProfile};
use crate::navigation::Screen;
use crate::services::nutrition_service::{self, BannerTier, CalorieProgress, RING_RADIUS};
use chrono::Local;
use dioxus::prelude::*;
use dioxus_i18n::t;

const RECENT_COUNT: usize = 3;

#[component]
fn ProgressRing(progress: CalorieProgress) -> Element {
    let circumference = CalorieProgress::circumference();
    let offset = progress.dash_offset();

    rsx! {
        div { style: "position: relative; display: inline-block; width: 160px; height: 160px;",
            svg {
                width: "160",
                height: "160",
                style: "transform: rotate(-90deg);",
                circle {
                    cx: "80",
                    cy: "80",
                    r: "{RING_RADIUS}",
                    stroke: "#e9ecef",
                    stroke_width: "12",
                    fill: "transparent",
                }
                circle {
                    cx: "80",
                    cy: "80",
                    r: "{RING_RADIUS}",
                    stroke: "#4CAF50",
                    stroke_width: "12",
                    fill: "transparent",
                    stroke_dasharray: "{circumference}",
                    stroke_dashoffset: "{offset}",
                    stroke_linecap: "round",
                    style: "transition: stroke-dashoffset 0.5s ease;",
                }
            }
            div { style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); text-align: center;",
                div { style: "font-size: 32px; font-weight: bold; color: #212529;", "{progress.total}" }
                div { style: "font-size: 14px; color: #6c757d;", "/ {progress.limit} kcal" }
            }
        }
    }
}

#[component]
fn AdvisoryBanner(progress: CalorieProgress) -> Element {
    let (style, icon, text) = match progress.tier {
        BannerTier::Surplus => (
            "background: #e8f5e9; border: 1px solid #c8e6c9; color: #2e7d32;",
            "📈",
            t!("banner-surplus", remaining: progress.remaining),
        ),
        BannerTier::Caution => (
            "background: #fff8e1; border: 1px solid #ffe082; color: #8d6e00;",
            "📉",
            t!("banner-caution"),
        ),
        BannerTier::Exceeded => (
            "background: #fee; border: 1px solid #fcc; color: #c33;",
            "⚠️",
            t!("banner-exceeded", overflow: progress.overflow),
        ),
    };

    rsx! {
        div { style: "{style} padding: 12px; margin-bottom: 16px; border-radius: 8px; font-size: 14px;",
            "{icon} {text}"
        }
    }
}

#[component]
fn RecentLogRow(log: FoodLog) -> Element {
    rsx! {
        div { style: "display: flex; align-items: center; padding: 12px 0; border-bottom: 1px solid #eee;",
            div { style: "width: 50px; height: 50px; border-radius: 8px; background: #f8f9fa; overflow: hidden; display: flex; align-items: center; justify-content: center; margin-right: 12px;",
                if let Some(url) = &log.image_url {
                    img { src: "{url}", alt: "{log.name}", style: "width: 100%; height: 100%; object-fit: cover;" }
                } else {
                    span { style: "font-size: 24px;", "🍽️" }
                }
            }
            div { style: "flex: 1;",
                div { style: "font-weight: 600; color: #333;", "{log.name}" }
                div { style: "font-size: 12px; color: #666;",
                    "{log.portion} • {meal_type_label(log.meal_type)}"
                }
            }
            div { style: "text-align: right;",
                div { style: "font-size: 16px; font-weight: 600;", "{log.calories}" }
                div { style: "font-size: 12px; color: #666;", "kcal" }
            }
        }
    }
}

#[component]
pub fn DashboardScreen(
    profile: Option<UserProfile>,
    food_logs: Vec<FoodLog>,
    calorie_warning: bool,
    on_navigate: EventHandler<Screen>,
) -> Element {
    let now = Local::now();
    let summary = nutrition_service::daily_summary(&food_logs, now.date_naive());
    let limit = nutrition_service::daily_limit(profile.as_ref());
    let progress = nutrition_service::calorie_progress(summary.calories, limit);
    let macros = summary.macros();
    let has_macros = summary.protein + summary.carbs + summary.fat > 0.0;
    let name = profile
        .as_ref()
        .map(|p| p.name.clone())
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| t!("dashboard-default-name"));
    let today_label = now.format("%A, %d %B %Y").to_string();
    let recent = summary.recent(RECENT_COUNT).to_vec();

    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto; min-height: 100vh; background: #f5f5f5; padding-bottom: 96px;",
            div { style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;",
                h1 { style: "color: #0066cc; font-size: 24px; font-weight: 700; margin: 0;",
                    {t!("dashboard-title")}
                }
                button {
                    class: "btn-secondary",
                    style: "padding: 8px 12px;",
                    onclick: move |_| on_navigate.call(Screen::Settings),
                    "⚙️"
                }
            }

            div { style: "margin-bottom: 16px;",
                h2 { style: "margin: 0 0 4px 0; font-size: 20px;", {t!("dashboard-greeting", name: name)} " 👋" }
                p { style: "margin: 0; color: #666; font-size: 14px;", "{today_label}" }
            }

            div { class: "card", style: "margin-bottom: 16px; text-align: center;",
                ProgressRing { progress }
                h3 { style: "margin: 12px 0 4px 0; font-size: 16px;", {t!("dashboard-consumed")} }
                p { style: "margin: 0; color: #666; font-size: 13px;",
                    {t!("dashboard-remaining", remaining: progress.remaining)}
                }
            }

            div { class: "card", style: "margin-bottom: 16px;",
                h3 { style: "margin: 0 0 12px 0; font-size: 16px;", {t!("dashboard-macros")} }
                if has_macros {
                    div { style: "display: flex; height: 12px; border-radius: 6px; overflow: hidden; margin-bottom: 12px; background: #eee;",
                        div { style: "width: {macros.protein}%; background: #FF9800;" }
                        div { style: "width: {macros.carbs}%; background: #2196F3;" }
                        div { style: "width: {macros.fat}%; background: #9C27B0;" }
                    }
                    div { style: "display: flex; text-align: center;",
                        div { style: "flex: 1;",
                            div { style: "font-size: 12px; color: #FF9800;", "● " {t!("field-protein")} }
                            div { style: "font-size: 18px; font-weight: 600;", "{grams(summary.protein)}" }
                        }
                        div { style: "flex: 1;",
                            div { style: "font-size: 12px; color: #2196F3;", "● " {t!("field-carbs")} }
                            div { style: "font-size: 18px; font-weight: 600;", "{grams(summary.carbs)}" }
                        }
                        div { style: "flex: 1;",
                            div { style: "font-size: 12px; color: #9C27B0;", "● " {t!("field-fat")} }
                            div { style: "font-size: 18px; font-weight: 600;", "{grams(summary.fat)}" }
                        }
                    }
                } else {
                    p { style: "margin: 0; text-align: center; color: #888; font-size: 14px;",
                        {t!("dashboard-no-macros")}
                    }
                }
            }

            if calorie_warning && summary.calories > 0 {
                AdvisoryBanner { progress }
            }

            div { class: "card", style: "margin-bottom: 16px;",
                div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;",
                    h3 { style: "margin: 0; font-size: 16px;", {t!("dashboard-recent")} }
                    button {
                        style: "background: none; border: none; color: #0066cc; cursor: pointer; font-size: 14px;",
                        onclick: move |_| on_navigate.call(Screen::PicLog),
                        {t!("action-see-all")}
                    }
                }
                if recent.is_empty() {
                    div { style: "text-align: center; padding: 24px 0; color: #888;",
                        div { style: "font-size: 40px; opacity: 0.4;", "📷" }
                        p { style: "margin: 8px 0 4px 0;", {t!("dashboard-empty")} }
                        p { style: "margin: 0; font-size: 12px;", {t!("dashboard-empty-hint")} }
                    }
                } else {
                    for log in recent {
                        RecentLogRow { key: "{log.id}", log: log.clone() }
                    }
                }
            }

            div { style: "display: flex; gap: 12px;",
                button {
                    class: "btn-success",
                    style: "flex: 1; padding: 16px; font-size: 16px;",
                    onclick: move |_| on_navigate.call(Screen::QuickLog),
                    "📷 "
                    {t!("dashboard-quick-log")}
                }
                button {
                    class: "btn-secondary",
                    style: "flex: 1; padding: 16px; font-size: 16px;",
                    onclick: move |_| on_navigate.call(Screen::ManualLog),
                    "✏️ "
                    {t!("dashboard-manual-log")}
                }
            }
        }
    }
}

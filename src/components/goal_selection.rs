use crate::components::ScreenHeader;
use crate::models::{Goal, ProfileUpdate, UserProfile};
use crate::navigation::Screen;
use crate::services::nutrition_service;
use crate::session::Command;
use dioxus::prelude::*;
use dioxus_i18n::t;

struct GoalCard {
    icon: &'static str,
    color: &'static str,
    background: &'static str,
}

fn goal_card(goal: Goal) -> GoalCard {
    match goal {
        Goal::Maintain => GoalCard {
            icon: "➖",
            color: "#2196F3",
            background: "#E3F2FD",
        },
        Goal::Lose => GoalCard {
            icon: "📉",
            color: "#FF9800",
            background: "#FFF3E0",
        },
        Goal::Gain => GoalCard {
            icon: "📈",
            color: "#4CAF50",
            background: "#E8F5E9",
        },
    }
}

pub(crate) fn goal_title(goal: Goal) -> String {
    match goal {
        Goal::Maintain => t!("goal-maintain"),
        Goal::Lose => t!("goal-lose"),
        Goal::Gain => t!("goal-gain"),
    }
}

fn goal_description(goal: Goal) -> String {
    match goal {
        Goal::Maintain => t!("goal-maintain-detail"),
        Goal::Lose => t!("goal-lose-detail"),
        Goal::Gain => t!("goal-gain-detail"),
    }
}

#[component]
pub fn GoalSelectionScreen(
    profile: Option<UserProfile>,
    on_navigate: EventHandler<Screen>,
    on_command: EventHandler<Command>,
) -> Element {
    let profile = profile.unwrap_or_default();
    let mut selected = use_signal(|| profile.goal.unwrap_or(Goal::Maintain));
    let target = nutrition_service::daily_target(&profile, selected());
    let tdee = nutrition_service::tdee(&profile).round();

    let handle_continue = move |_| {
        let goal = selected();
        let daily_calories = nutrition_service::daily_target(&profile, goal);
        log::info!("Goal {} with {} kcal/day", goal.as_str(), daily_calories);
        on_command.call(Command::UpdateProfile(ProfileUpdate {
            goal: Some(goal),
            daily_calories: Some(daily_calories),
            ..Default::default()
        }));
        on_navigate.call(Screen::Dashboard);
    };

    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto; min-height: 100vh; background: #f5f5f5;",
            ScreenHeader {
                title: t!("goal-title"),
                on_back: move |_| on_command.call(Command::Back),
            }

            div { style: "text-align: center; margin-bottom: 24px;",
                div { style: "font-size: 40px; margin-bottom: 8px;", "🎯" }
                h2 { style: "margin: 0 0 8px 0;", {t!("goal-heading")} }
                p { style: "margin: 0; color: #666;", {t!("goal-subtitle")} }
            }

            for goal in Goal::all().iter().copied() {
                {
                    let GoalCard { icon, color, background } = goal_card(goal);
                    let is_selected = selected() == goal;
                    rsx! {
                        div {
                            key: "{goal.as_str()}",
                            class: "card",
                            style: if is_selected {
                                format!("margin-bottom: 12px; cursor: pointer; border: 2px solid {};", color)
                            } else {
                                "margin-bottom: 12px; cursor: pointer; border: 2px solid transparent;".to_string()
                            },
                            onclick: move |_| selected.set(goal),
                            div { style: "display: flex; align-items: center; gap: 16px;",
                                div { style: "width: 48px; height: 48px; border-radius: 50%; background: {background}; display: flex; align-items: center; justify-content: center; font-size: 24px;",
                                    "{icon}"
                                }
                                div { style: "flex: 1;",
                                    div { style: "font-size: 16px; font-weight: 600; color: #333;", "{goal_title(goal)}" }
                                    div { style: "font-size: 13px; color: #666;", "{goal_description(goal)}" }
                                }
                                if is_selected {
                                    div { style: "color: {color}; font-size: 20px;", "✓" }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "card", style: "margin: 16px 0; text-align: center; background: #e3f2fd;",
                div { style: "font-size: 13px; color: #666;", {t!("goal-recommended")} }
                div { style: "font-size: 32px; font-weight: 700; color: #0066cc;", "{target} kcal" }
                div { style: "font-size: 12px; color: #888;", {t!("goal-tdee", tdee: tdee)} }
            }

            button {
                class: "btn-primary",
                style: "width: 100%; padding: 16px; font-size: 16px; margin-bottom: 24px;",
                onclick: handle_continue,
                {t!("goal-confirm")}
            }
        }
    }
}

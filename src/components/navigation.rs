use crate::navigation::{Screen, BOTTOM_NAV};
use dioxus::prelude::*;
use dioxus_i18n::t;

fn tab_label(screen: Screen) -> String {
    match screen {
        Screen::Dashboard => format!("🏠 {}", t!("nav-home")),
        Screen::PicLog => format!("📖 {}", t!("nav-diary")),
        Screen::MealPlan => format!("📅 {}", t!("nav-meal-plan")),
        Screen::Profile => format!("👤 {}", t!("nav-profile")),
        other => other.slug().to_string(),
    }
}

#[component]
pub fn BottomNav(current_screen: Screen, on_navigate: EventHandler<Screen>) -> Element {
    let nav_style = "display: flex; justify-content: space-around; padding: 10px; background: #f0f0f0; border-top: 1px solid #ddd;";

    rsx! {
        div { style: "{nav_style}",
            for screen in BOTTOM_NAV {
                button {
                    key: "{screen.slug()}",
                    style: if current_screen == screen {
                        "flex: 1; padding: 12px; margin: 0 5px; border: none; border-radius: 8px; cursor: pointer; font-size: 13px; text-align: center; background: #0066cc; color: #ffffff;"
                    } else {
                        "flex: 1; padding: 12px; margin: 0 5px; border: none; border-radius: 8px; cursor: pointer; font-size: 13px; text-align: center; background: #ffffff; color: #333;"
                    },
                    onclick: move |_| on_navigate.call(screen),
                    "{tab_label(screen)}"
                }
            }
        }
    }
}

/// Title row with an optional back arrow and an optional action on the right
#[component]
pub fn ScreenHeader(
    title: String,
    on_back: Option<EventHandler<()>>,
    action_label: Option<String>,
    on_action: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div { style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 24px;",
            div { style: "display: flex; align-items: center;",
                if let Some(on_back) = on_back {
                    button {
                        class: "btn-secondary",
                        style: "margin-right: 12px; padding: 8px 16px;",
                        onclick: move |_| on_back.call(()),
                        "← "
                        {t!("action-back")}
                    }
                }
                h1 { style: "color: #0066cc; font-size: 24px; font-weight: 700; margin: 0;",
                    "{title}"
                }
            }
            if let (Some(label), Some(on_action)) = (action_label, on_action) {
                button {
                    style: "background: none; border: none; color: #0066cc; cursor: pointer; font-size: 15px; font-weight: 600;",
                    onclick: move |_| on_action.call(()),
                    "{label}"
                }
            }
        }
    }
}

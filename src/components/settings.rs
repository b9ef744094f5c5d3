use crate::components::ScreenHeader;
use crate::models::{AppSettings, HealthStatus, ReminderTime};
use crate::navigation::Screen;
use crate::services::BackendHandle;
use crate::session::Command;
use dioxus::prelude::*;
use dioxus_i18n::t;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq)]
enum BackendStatus {
    Checking,
    Online(String),
    Offline,
}

impl From<HealthStatus> for BackendStatus {
    fn from(health: HealthStatus) -> Self {
        if health.is_online() {
            BackendStatus::Online(health.status)
        } else {
            BackendStatus::Offline
        }
    }
}

#[component]
fn BackendCheckCard(backend: BackendHandle) -> Element {
    let mut status = use_signal(|| BackendStatus::Checking);

    let check_backend = backend.clone();
    use_effect(move || {
        let backend = check_backend.clone();
        spawn(async move {
            status.set(backend.check_health().await.into());
        });
    });

    let recheck = move |_| {
        status.set(BackendStatus::Checking);
        let backend = backend.clone();
        spawn(async move {
            status.set(backend.check_health().await.into());
        });
    };

    rsx! {
        div { class: "card", style: "margin-bottom: 16px;",
            div { style: "display: flex; justify-content: space-between; align-items: center;",
                h3 { style: "margin: 0; font-size: 16px;", "🌐 " {t!("settings-backend")} }
                button {
                    class: "btn-secondary",
                    style: "padding: 6px 12px; font-size: 12px;",
                    onclick: recheck,
                    {t!("settings-recheck")}
                }
            }
            div { style: "margin-top: 8px; font-size: 14px;",
                match status() {
                    BackendStatus::Checking => rsx! {
                        span { style: "color: #666;", "⏳ " {t!("settings-checking")} }
                    },
                    BackendStatus::Online(state) => rsx! {
                        span { style: "color: #28a745;", "✅ " {t!("settings-online", status: state)} }
                    },
                    BackendStatus::Offline => rsx! {
                        span { style: "color: #dc3545;", "❌ " {t!("settings-offline")} }
                    },
                }
            }
        }
    }
}

#[component]
fn ToggleRow(label: String, detail: String, checked: bool, on_toggle: EventHandler<bool>) -> Element {
    rsx! {
        label { style: "display: flex; align-items: center; justify-content: space-between; padding: 10px 0; border-bottom: 1px solid #eee; cursor: pointer;",
            div {
                div { style: "font-size: 14px; color: #333;", "{label}" }
                div { style: "font-size: 12px; color: #888;", "{detail}" }
            }
            input {
                r#type: "checkbox",
                checked,
                style: "width: 20px; height: 20px;",
                onchange: move |e| on_toggle.call(e.checked()),
            }
        }
    }
}

#[component]
fn ReminderRow(label: String, value: ReminderTime, on_change: EventHandler<ReminderTime>) -> Element {
    rsx! {
        div { style: "display: flex; align-items: center; justify-content: space-between; padding: 6px 0;",
            span { style: "font-size: 14px; color: #555;", "{label}" }
            input {
                r#type: "time",
                class: "input",
                style: "width: 120px;",
                value: "{value}",
                onchange: move |e| match ReminderTime::parse(&e.value()) {
                    Some(time) => on_change.call(time),
                    None => log::warn!("Ignoring reminder time {:?}", e.value()),
                },
            }
        }
    }
}

fn changed(settings: &AppSettings, change: impl FnOnce(&mut AppSettings)) -> Command {
    let mut updated = settings.clone();
    change(&mut updated);
    Command::SaveSettings(updated)
}

#[component]
pub fn SettingsScreen(
    settings: AppSettings,
    backend: BackendHandle,
    on_navigate: EventHandler<Screen>,
    on_command: EventHandler<Command>,
) -> Element {
    let link_style = "display: flex; justify-content: space-between; width: 100%; padding: 12px 0; background: none; border: none; border-bottom: 1px solid #eee; font-size: 14px; color: #333; cursor: pointer; text-align: left;";

    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto; min-height: 100vh; background: #f5f5f5;",
            ScreenHeader {
                title: t!("settings-title"),
                on_back: move |_| on_command.call(Command::Back),
            }

            div { class: "card", style: "margin-bottom: 16px;",
                h3 { style: "margin: 0 0 4px 0; font-size: 16px;", "👤 " {t!("settings-account")} }
                button {
                    style: "{link_style}",
                    onclick: move |_| on_navigate.call(Screen::SetupProfile),
                    span { {t!("settings-edit-profile")} }
                    span { "›" }
                }
                button {
                    style: "{link_style}",
                    onclick: move |_| on_navigate.call(Screen::GoalSelection),
                    span { {t!("settings-change-goal")} }
                    span { "›" }
                }
            }

            div { class: "card", style: "margin-bottom: 16px;",
                h3 { style: "margin: 0 0 4px 0; font-size: 16px;", "🔔 " {t!("settings-notifications")} }
                ToggleRow {
                    label: t!("settings-reminders"),
                    detail: t!("settings-reminders-detail"),
                    checked: settings.reminders_enabled,
                    on_toggle: {
                        let settings = settings.clone();
                        move |enabled: bool| {
                            on_command.call(changed(&settings, |s| s.reminders_enabled = enabled))
                        }
                    },
                }
                if settings.reminders_enabled {
                    div { style: "padding: 8px 0 0 8px;",
                        ReminderRow {
                            label: t!("meal-breakfast"),
                            value: settings.breakfast_reminder,
                            on_change: {
                                let settings = settings.clone();
                                move |time: ReminderTime| on_command.call(changed(&settings, |s| s.breakfast_reminder = time))
                            },
                        }
                        ReminderRow {
                            label: t!("meal-lunch"),
                            value: settings.lunch_reminder,
                            on_change: {
                                let settings = settings.clone();
                                move |time: ReminderTime| on_command.call(changed(&settings, |s| s.lunch_reminder = time))
                            },
                        }
                        ReminderRow {
                            label: t!("meal-dinner"),
                            value: settings.dinner_reminder,
                            on_change: {
                                let settings = settings.clone();
                                move |time: ReminderTime| on_command.call(changed(&settings, |s| s.dinner_reminder = time))
                            },
                        }
                    }
                }
                ToggleRow {
                    label: t!("settings-calorie-warning"),
                    detail: t!("settings-calorie-warning-detail"),
                    checked: settings.calorie_warning,
                    on_toggle: {
                        let settings = settings.clone();
                        move |enabled: bool| {
                            on_command.call(changed(&settings, |s| s.calorie_warning = enabled))
                        }
                    },
                }
            }

            div { class: "card", style: "margin-bottom: 16px;",
                h3 { style: "margin: 0 0 4px 0; font-size: 16px;", "📷 " {t!("settings-photos")} }
                ToggleRow {
                    label: t!("settings-save-original"),
                    detail: t!("settings-save-original-detail"),
                    checked: settings.save_original_images,
                    on_toggle: {
                        let settings = settings.clone();
                        move |enabled: bool| {
                            on_command.call(changed(&settings, |s| s.save_original_images = enabled))
                        }
                    },
                }
            }

            BackendCheckCard { backend }

            div { style: "text-align: center; color: #888; font-size: 12px; margin: 16px 0;",
                {t!("settings-version", version: APP_VERSION)}
            }

            button {
                style: "width: 100%; padding: 14px; background: #dc3545; color: white; border: none; border-radius: 8px; font-size: 16px; font-weight: 600;",
                onclick: move |_| on_command.call(Command::Logout),
                "🚪 "
                {t!("settings-logout")}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changed_copies_and_applies() {
        let settings = AppSettings::default();
        let command = changed(&settings, |s| s.calorie_warning = false);
        match command {
            Command::SaveSettings(updated) => {
                assert!(!updated.calorie_warning);
                assert_eq!(updated.lunch_reminder, settings.lunch_reminder);
            }
            _ => panic!("expected SaveSettings"),
        }
        assert!(settings.calorie_warning);
    }

    #[test]
    fn test_backend_status_from_health() {
        assert!(matches!(
            BackendStatus::from(HealthStatus::offline()),
            BackendStatus::Offline
        ));
        let online = BackendStatus::from(HealthStatus {
            status: "healthy".to_string(),
        });
        assert_eq!(online, BackendStatus::Online("healthy".to_string()));
    }
}

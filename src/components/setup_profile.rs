use crate::components::ScreenHeader;
use crate::models::{ActivityLevel, Gender, ProfileUpdate, UserProfile};
use crate::navigation::Screen;
use crate::services::nutrition_service::{DEFAULT_AGE, DEFAULT_HEIGHT_CM, DEFAULT_WEIGHT_KG};
use crate::session::Command;
use dioxus::prelude::*;
use dioxus_i18n::t;

fn gender_label(gender: Gender) -> String {
    match gender {
        Gender::Male => t!("gender-male"),
        Gender::Female => t!("gender-female"),
        Gender::Other => t!("gender-other"),
    }
}

pub(crate) fn activity_label(level: ActivityLevel) -> String {
    match level {
        ActivityLevel::Sedentary => t!("activity-sedentary"),
        ActivityLevel::Light => t!("activity-light"),
        ActivityLevel::Moderate => t!("activity-moderate"),
        ActivityLevel::Active => t!("activity-active"),
        ActivityLevel::VeryActive => t!("activity-very-active"),
    }
}

/// Parses a number field and checks it against the form's bounds
fn parse_in_range(raw: &str, min: f64, max: f64) -> Option<f64> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| *v >= min && *v <= max)
}

#[component]
pub fn SetupProfileScreen(
    profile: Option<UserProfile>,
    on_navigate: EventHandler<Screen>,
    on_command: EventHandler<Command>,
) -> Element {
    let existing = profile.unwrap_or_default();
    let mut age = use_signal(|| existing.age.unwrap_or(DEFAULT_AGE).to_string());
    let mut gender = use_signal(|| existing.gender.unwrap_or(Gender::Male));
    let mut height = use_signal(|| existing.height.unwrap_or(DEFAULT_HEIGHT_CM).to_string());
    let mut weight = use_signal(|| existing.weight.unwrap_or(DEFAULT_WEIGHT_KG).to_string());
    let mut activity = use_signal(|| existing.activity_level.unwrap_or(ActivityLevel::Moderate));
    let mut error = use_signal(|| None::<String>);

    let handle_submit = move |_| {
        error.set(None);
        let Some(age_value) = parse_in_range(&age(), 10.0, 100.0) else {
            error.set(Some(t!("error-age-range")));
            return;
        };
        let Some(height_value) = parse_in_range(&height(), 100.0, 250.0) else {
            error.set(Some(t!("error-height-range")));
            return;
        };
        let Some(weight_value) = parse_in_range(&weight(), 30.0, 200.0) else {
            error.set(Some(t!("error-weight-range")));
            return;
        };

        on_command.call(Command::UpdateProfile(ProfileUpdate {
            age: Some(age_value.round() as u32),
            gender: Some(gender()),
            height: Some(height_value),
            weight: Some(weight_value),
            activity_level: Some(activity()),
            ..Default::default()
        }));
        on_navigate.call(Screen::GoalSelection);
    };

    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto; min-height: 100vh; background: #f5f5f5;",
            ScreenHeader {
                title: t!("setup-title"),
                on_back: move |_| on_command.call(Command::Back),
            }

            div { style: "text-align: center; margin-bottom: 24px;",
                div { style: "font-size: 40px; margin-bottom: 8px;", "👤" }
                h2 { style: "margin: 0 0 8px 0;", {t!("setup-heading")} }
                p { style: "margin: 0; color: #666;", {t!("setup-subtitle")} }
            }

            if let Some(err) = error() {
                div { style: "background: #fee; border: 1px solid #fcc; color: #c33; padding: 12px; margin-bottom: 16px; border-radius: 8px; font-size: 14px;",
                    "⚠️ {err}"
                }
            }

            div { class: "card",
                div { style: "margin-bottom: 20px;",
                    label { style: "display: block; margin-bottom: 6px; font-weight: 600; color: #333; font-size: 14px;",
                        {t!("field-gender")}
                    }
                    div { style: "display: flex; gap: 8px;",
                        for option in Gender::all().iter().copied() {
                            button {
                                key: "{option.as_str()}",
                                class: if gender() == option { "btn-primary" } else { "btn-secondary" },
                                style: "flex: 1; padding: 12px;",
                                onclick: move |_| gender.set(option),
                                "{gender_label(option)}"
                            }
                        }
                    }
                }

                div { style: "margin-bottom: 20px;",
                    label { style: "display: block; margin-bottom: 6px; font-weight: 600; color: #333; font-size: 14px;",
                        {t!("field-age")}
                    }
                    input {
                        r#type: "number",
                        class: "input",
                        min: "10",
                        max: "100",
                        value: "{age}",
                        oninput: move |e| age.set(e.value()),
                    }
                }

                div { style: "display: flex; gap: 12px; margin-bottom: 20px;",
                    div { style: "flex: 1;",
                        label { style: "display: block; margin-bottom: 6px; font-weight: 600; color: #333; font-size: 14px;",
                            {t!("field-height")}
                        }
                        input {
                            r#type: "number",
                            class: "input",
                            min: "100",
                            max: "250",
                            value: "{height}",
                            oninput: move |e| height.set(e.value()),
                        }
                    }
                    div { style: "flex: 1;",
                        label { style: "display: block; margin-bottom: 6px; font-weight: 600; color: #333; font-size: 14px;",
                            {t!("field-weight")}
                        }
                        input {
                            r#type: "number",
                            class: "input",
                            min: "30",
                            max: "200",
                            step: "0.1",
                            value: "{weight}",
                            oninput: move |e| weight.set(e.value()),
                        }
                    }
                }

                div { style: "margin-bottom: 20px;",
                    label { style: "display: block; margin-bottom: 6px; font-weight: 600; color: #333; font-size: 14px;",
                        {t!("field-activity")}
                    }
                    select {
                        class: "input",
                        value: "{activity().as_str()}",
                        onchange: move |e| activity.set(ActivityLevel::from_str(&e.value())),
                        for level in ActivityLevel::all().iter().copied() {
                            option { key: "{level.as_str()}", value: "{level.as_str()}", "{activity_label(level)}" }
                        }
                    }
                }

                button {
                    class: "btn-primary",
                    style: "width: 100%; padding: 16px; font-size: 16px;",
                    onclick: handle_submit,
                    {t!("action-continue")}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_in_range() {
        assert_eq!(parse_in_range("65,5", 30.0, 200.0), Some(65.5));
        assert_eq!(parse_in_range("5", 10.0, 100.0), None);
        assert_eq!(parse_in_range("", 10.0, 100.0), None);
    }
}

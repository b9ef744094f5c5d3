use crate::components::{meal_type_label, ScreenHeader};
use crate::models::MealType;
use crate::navigation::Screen;
use crate::services::food_log_service::{ManualForm, QUICK_ADD_PRESETS};
use crate::session::Command;
use dioxus::prelude::*;
use dioxus_i18n::t;

#[component]
pub fn ManualLogScreen(
    loading: bool,
    on_navigate: EventHandler<Screen>,
    on_command: EventHandler<Command>,
) -> Element {
    let mut form = use_signal(ManualForm::default);
    let mut error = use_signal(|| None::<String>);

    let handle_submit = move |_| {
        error.set(None);
        match form.read().to_new_food_log() {
            Ok(entry) => on_command.call(Command::AddFoodLog(entry)),
            Err(e) => error.set(Some(e.user_message())),
        }
    };

    let label_style = "display: block; margin-bottom: 6px; font-weight: 600; color: #333; font-size: 14px;";

    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto; min-height: 100vh; background: #f5f5f5;",
            ScreenHeader {
                title: t!("manual-log-title"),
                on_back: move |_| on_navigate.call(Screen::Dashboard),
            }

            if let Some(err) = error() {
                div { style: "background: #fee; border: 1px solid #fcc; color: #c33; padding: 12px; margin-bottom: 16px; border-radius: 8px; font-size: 14px;",
                    "⚠️ {err}"
                }
            }

            div { class: "card", style: "margin-bottom: 16px;",
                h3 { style: "margin: 0 0 12px 0; font-size: 16px;", {t!("manual-log-quick-add")} }
                div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 8px;",
                    for preset in QUICK_ADD_PRESETS {
                        button {
                            key: "{preset.name}",
                            class: "btn-secondary",
                            style: "padding: 10px; text-align: left;",
                            onclick: move |_| form.write().apply_preset(&preset),
                            div { style: "font-weight: 600;", "{preset.name}" }
                            div { style: "font-size: 12px; color: #666;", "{preset.calories} kcal • {preset.portion}" }
                        }
                    }
                }
            }

            div { class: "card",
                div { style: "margin-bottom: 16px;",
                    label { style: "{label_style}", {t!("field-food-name")} }
                    input {
                        r#type: "text",
                        class: "input",
                        placeholder: t!("field-food-name-placeholder"),
                        value: "{form.read().name}",
                        oninput: move |e| form.write().name = e.value(),
                    }
                }
                div { style: "display: flex; gap: 12px; margin-bottom: 16px;",
                    div { style: "flex: 1;",
                        label { style: "{label_style}", {t!("field-calories")} }
                        input {
                            r#type: "number",
                            class: "input",
                            min: "0",
                            value: "{form.read().calories}",
                            oninput: move |e| form.write().calories = e.value(),
                        }
                    }
                    div { style: "flex: 1;",
                        label { style: "{label_style}", {t!("field-portion")} }
                        input {
                            r#type: "text",
                            class: "input",
                            value: "{form.read().portion}",
                            oninput: move |e| form.write().portion = e.value(),
                        }
                    }
                }
                div { style: "display: flex; gap: 12px; margin-bottom: 16px;",
                    div { style: "flex: 1;",
                        label { style: "{label_style}", {t!("field-protein-grams")} }
                        input {
                            r#type: "number",
                            class: "input",
                            min: "0",
                            step: "0.1",
                            value: "{form.read().protein}",
                            oninput: move |e| form.write().protein = e.value(),
                        }
                    }
                    div { style: "flex: 1;",
                        label { style: "{label_style}", {t!("field-carbs-grams")} }
                        input {
                            r#type: "number",
                            class: "input",
                            min: "0",
                            step: "0.1",
                            value: "{form.read().carbs}",
                            oninput: move |e| form.write().carbs = e.value(),
                        }
                    }
                    div { style: "flex: 1;",
                        label { style: "{label_style}", {t!("field-fat-grams")} }
                        input {
                            r#type: "number",
                            class: "input",
                            min: "0",
                            step: "0.1",
                            value: "{form.read().fat}",
                            oninput: move |e| form.write().fat = e.value(),
                        }
                    }
                }
                div { style: "margin-bottom: 20px;",
                    label { style: "{label_style}", {t!("field-meal-type")} }
                    div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 8px;",
                        for option in MealType::all().iter().copied() {
                            button {
                                key: "{option.as_str()}",
                                class: if form.read().meal_type == option { "btn-primary" } else { "btn-secondary" },
                                style: "padding: 10px;",
                                onclick: move |_| form.write().meal_type = option,
                                "{meal_type_label(option)}"
                            }
                        }
                    }
                }
                button {
                    class: "btn-success",
                    style: "width: 100%; padding: 16px; font-size: 16px;",
                    disabled: loading,
                    onclick: handle_submit,
                    "✓ "
                    {t!("manual-log-save")}
                }
            }
        }
    }
}

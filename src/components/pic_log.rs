use crate::components::{macro_line, meal_type_label};
use crate::models::{FoodLog, MealType};
use crate::navigation::Screen;
use crate::services::food_log_service::{self, DateFilter, EditForm};
use crate::session::Command;
use chrono::{Local, Utc};
use dioxus::prelude::*;
use dioxus_i18n::t;

#[component]
fn EditDialog(
    form: Signal<Option<EditForm>>,
    on_command: EventHandler<Command>,
) -> Element {
    let mut form = form;
    let mut error = use_signal(|| None::<String>);
    let Some(current) = form() else {
        return rsx! {};
    };

    let handle_save = move |_| {
        let Some(edit) = form() else {
            return;
        };
        match edit.to_update() {
            Ok(update) => {
                on_command.call(Command::UpdateFoodLog(edit.id, update));
                error.set(None);
                form.set(None);
            }
            Err(e) => error.set(Some(e.user_message())),
        }
    };

    let label_style = "display: block; margin-bottom: 4px; font-weight: 600; color: #333; font-size: 13px;";

    rsx! {
        div { style: "position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; z-index: 1000;",
            div { class: "card", style: "width: 90%; max-width: 480px; max-height: 90vh; overflow-y: auto;",
                h3 { style: "margin: 0 0 16px 0;", {t!("pic-log-edit-title")} }

                if let Some(err) = error() {
                    div { style: "background: #fee; border: 1px solid #fcc; color: #c33; padding: 8px; margin-bottom: 12px; border-radius: 8px; font-size: 13px;",
                        "⚠️ {err}"
                    }
                }

                div { style: "margin-bottom: 12px;",
                    label { style: "{label_style}", {t!("field-food-name")} }
                    input {
                        class: "input",
                        value: "{current.name}",
                        oninput: move |e| {
                            if let Some(f) = form.write().as_mut() {
                                f.name = e.value();
                            }
                        },
                    }
                }
                div { style: "display: flex; gap: 8px; margin-bottom: 12px;",
                    div { style: "flex: 1;",
                        label { style: "{label_style}", {t!("field-calories")} }
                        input {
                            r#type: "number",
                            class: "input",
                            value: "{current.calories}",
                            oninput: move |e| {
                                if let Some(f) = form.write().as_mut() {
                                    f.calories = e.value();
                                }
                            },
                        }
                    }
                    div { style: "flex: 1;",
                        label { style: "{label_style}", {t!("field-portion")} }
                        input {
                            class: "input",
                            value: "{current.portion}",
                            oninput: move |e| {
                                if let Some(f) = form.write().as_mut() {
                                    f.portion = e.value();
                                }
                            },
                        }
                    }
                }
                div { style: "display: flex; gap: 8px; margin-bottom: 12px;",
                    div { style: "flex: 1;",
                        label { style: "{label_style}", {t!("field-protein")} }
                        input {
                            r#type: "number",
                            class: "input",
                            value: "{current.protein}",
                            oninput: move |e| {
                                if let Some(f) = form.write().as_mut() {
                                    f.protein = e.value();
                                }
                            },
                        }
                    }
                    div { style: "flex: 1;",
                        label { style: "{label_style}", {t!("field-carbs")} }
                        input {
                            r#type: "number",
                            class: "input",
                            value: "{current.carbs}",
                            oninput: move |e| {
                                if let Some(f) = form.write().as_mut() {
                                    f.carbs = e.value();
                                }
                            },
                        }
                    }
                    div { style: "flex: 1;",
                        label { style: "{label_style}", {t!("field-fat")} }
                        input {
                            r#type: "number",
                            class: "input",
                            value: "{current.fat}",
                            oninput: move |e| {
                                if let Some(f) = form.write().as_mut() {
                                    f.fat = e.value();
                                }
                            },
                        }
                    }
                }
                div { style: "margin-bottom: 16px;",
                    label { style: "{label_style}", {t!("field-meal-type")} }
                    select {
                        class: "input",
                        value: "{current.meal_type.as_str()}",
                        onchange: move |e| {
                            if let Some(f) = form.write().as_mut() {
                                f.meal_type = MealType::from_str(&e.value());
                            }
                        },
                        for option in MealType::all().iter().copied() {
                            option { key: "{option.as_str()}", value: "{option.as_str()}", "{meal_type_label(option)}" }
                        }
                    }
                }
                div { style: "display: flex; gap: 12px;",
                    button {
                        class: "btn-secondary",
                        style: "flex: 1; padding: 12px;",
                        onclick: move |_| {
                            error.set(None);
                            form.set(None);
                        },
                        {t!("action-cancel")}
                    }
                    button {
                        class: "btn-primary",
                        style: "flex: 1; padding: 12px;",
                        onclick: handle_save,
                        {t!("action-save")}
                    }
                }
            }
        }
    }
}

#[component]
fn DiaryEntry(
    log: FoodLog,
    on_edit: EventHandler<FoodLog>,
    on_delete: EventHandler<i64>,
) -> Element {
    let time = log.timestamp.with_timezone(&Local).format("%H:%M").to_string();
    let id = log.id;
    let edit_log = log.clone();

    rsx! {
        div { class: "card", style: "margin-bottom: 12px; display: flex; gap: 12px;",
            div { style: "width: 72px; height: 72px; border-radius: 8px; background: #f8f9fa; overflow: hidden; flex-shrink: 0; display: flex; align-items: center; justify-content: center;",
                if let Some(url) = &log.image_url {
                    img { src: "{url}", alt: "{log.name}", style: "width: 100%; height: 100%; object-fit: cover;" }
                } else {
                    span { style: "font-size: 28px;", "🍽️" }
                }
            }
            div { style: "flex: 1; min-width: 0;",
                div { style: "display: flex; justify-content: space-between;",
                    div { style: "font-weight: 600; color: #333;", "{log.name}" }
                    div { style: "font-weight: 600; color: #0066cc;", "{log.calories} kcal" }
                }
                div { style: "font-size: 12px; color: #666; margin: 4px 0;",
                    "{meal_type_label(log.meal_type)} • {time} • {log.portion}"
                }
                div { style: "font-size: 12px; color: #888;",
                    {macro_line(log.protein, log.carbs, log.fat)}
                }
                div { style: "display: flex; gap: 8px; margin-top: 8px;",
                    button {
                        class: "btn-secondary",
                        style: "padding: 6px 12px; font-size: 12px;",
                        onclick: move |_| on_edit.call(edit_log.clone()),
                        "✏️ "
                        {t!("action-edit")}
                    }
                    button {
                        style: "padding: 6px 12px; font-size: 12px; background: #fee; color: #c33; border: 1px solid #fcc; border-radius: 8px;",
                        onclick: move |_| on_delete.call(id),
                        "🗑️ "
                        {t!("action-delete")}
                    }
                }
            }
        }
    }
}

#[component]
pub fn PicLogScreen(
    food_logs: Vec<FoodLog>,
    on_navigate: EventHandler<Screen>,
    on_command: EventHandler<Command>,
) -> Element {
    let mut date_filter = use_signal(DateFilter::default);
    let mut meal_filter = use_signal(|| None::<MealType>);
    let mut editing = use_signal(|| None::<EditForm>);
    let mut pending_delete = use_signal(|| None::<i64>);

    let filtered =
        food_log_service::filter_logs(&food_logs, date_filter(), meal_filter(), Utc::now());
    let total = food_log_service::total_calories(&filtered);
    let average = if filtered.is_empty() {
        0
    } else {
        (total as f64 / filtered.len() as f64).round() as u32
    };
    let groups = food_log_service::group_by_day(&filtered);

    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto; min-height: 100vh; background: #f5f5f5; padding-bottom: 96px;",
            div { style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;",
                h1 { style: "color: #0066cc; font-size: 24px; font-weight: 700; margin: 0;",
                    {t!("pic-log-title")}
                }
                div { style: "display: flex; gap: 8px;",
                    button {
                        class: "btn-secondary",
                        style: "padding: 8px 12px;",
                        onclick: move |_| on_command.call(Command::Reload),
                        "🔄"
                    }
                    button {
                        class: "btn-success",
                        style: "padding: 8px 12px;",
                        onclick: move |_| on_navigate.call(Screen::QuickLog),
                        "📷 +"
                    }
                }
            }

            div { style: "display: flex; gap: 8px; margin-bottom: 16px;",
                select {
                    class: "input",
                    style: "flex: 1;",
                    value: "{date_filter().as_str()}",
                    onchange: move |e| date_filter.set(DateFilter::from_str(&e.value())),
                    option { value: "all", {t!("filter-all-days")} }
                    option { value: "today", {t!("filter-today")} }
                    option { value: "week", {t!("filter-week")} }
                }
                select {
                    class: "input",
                    style: "flex: 1;",
                    value: meal_filter().map(|m| m.as_str()).unwrap_or("all"),
                    onchange: move |e| {
                        let value = e.value();
                        meal_filter.set(if value == "all" { None } else { Some(MealType::from_str(&value)) });
                    },
                    option { value: "all", {t!("filter-all-meals")} }
                    for option in MealType::all().iter().copied() {
                        option { key: "{option.as_str()}", value: "{option.as_str()}", "{meal_type_label(option)}" }
                    }
                }
            }

            if !filtered.is_empty() {
                div { class: "card", style: "margin-bottom: 16px; display: flex; text-align: center;",
                    div { style: "flex: 1;",
                        div { style: "font-size: 12px; color: #666;", {t!("pic-log-total-meals")} }
                        div { style: "font-size: 20px; font-weight: 600;", "{filtered.len()}" }
                    }
                    div { style: "flex: 1;",
                        div { style: "font-size: 12px; color: #666;", {t!("pic-log-total-calories")} }
                        div { style: "font-size: 20px; font-weight: 600; color: #0066cc;", "{total}" }
                    }
                    div { style: "flex: 1;",
                        div { style: "font-size: 12px; color: #666;", {t!("pic-log-average")} }
                        div { style: "font-size: 20px; font-weight: 600;", "{average}" }
                    }
                }
            }

            if groups.is_empty() {
                div { class: "card", style: "text-align: center; padding: 32px 16px; color: #888;",
                    div { style: "font-size: 48px; opacity: 0.4;", "📷" }
                    p { style: "margin: 8px 0;", {t!("pic-log-empty")} }
                    button {
                        class: "btn-primary",
                        style: "padding: 12px 24px;",
                        onclick: move |_| on_navigate.call(Screen::QuickLog),
                        {t!("pic-log-add-first")}
                    }
                }
            } else {
                for (day, entries) in groups {
                    div { key: "{day}",
                        h3 { style: "font-size: 14px; color: #666; margin: 16px 0 8px 0;",
                            "📅 "
                            {day.format("%A, %d %B %Y").to_string()}
                        }
                        for log in entries {
                            DiaryEntry {
                                key: "{log.id}",
                                log: log.clone(),
                                on_edit: move |log: FoodLog| editing.set(Some(EditForm::from_log(&log))),
                                on_delete: move |id: i64| pending_delete.set(Some(id)),
                            }
                        }
                    }
                }
            }
        }

        EditDialog { form: editing, on_command }

        if let Some(id) = pending_delete() {
            div { style: "position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; z-index: 1000;",
                div { class: "card", style: "width: 85%; max-width: 400px; text-align: center;",
                    p { style: "margin: 0 0 16px 0;", {t!("pic-log-delete-confirm")} }
                    div { style: "display: flex; gap: 12px;",
                        button {
                            class: "btn-secondary",
                            style: "flex: 1; padding: 12px;",
                            onclick: move |_| pending_delete.set(None),
                            {t!("action-cancel")}
                        }
                        button {
                            style: "flex: 1; padding: 12px; background: #dc3545; color: white; border: none; border-radius: 8px;",
                            onclick: move |_| {
                                on_command.call(Command::DeleteFoodLog(id));
                                pending_delete.set(None);
                            },
                            {t!("action-delete")}
                        }
                    }
                }
            }
        }
    }
}

use crate::camera::{self, PhotoOutcome};
use crate::components::{grams, macro_line, meal_type_label, ScreenHeader};
use crate::models::MealType;
use crate::navigation::Screen;
use crate::services::food_log_service::{
    log_from_suggestion, PortionSize, QuickLogStep, DEFAULT_MEAL_TYPE,
};
use crate::services::{FoodSuggestion, RecognitionInput, Recognizer};
use crate::session::Command;
use dioxus::prelude::*;
use dioxus_i18n::t;
use meal_photo::PhotoSource;

fn portion_label(portion: PortionSize) -> String {
    match portion {
        PortionSize::Small => t!("portion-small"),
        PortionSize::Medium => t!("portion-medium"),
        PortionSize::Large => t!("portion-large"),
    }
}

fn photo_preview(url: Option<String>) -> Element {
    rsx! {
        if let Some(url) = url {
            img {
                src: "{url}",
                alt: "Preview",
                style: "width: 100%; max-height: 240px; object-fit: cover; border-radius: 12px; margin-bottom: 16px;",
            }
        }
    }
}

#[component]
pub fn QuickLogScreen(
    recognizer: Recognizer,
    save_original_images: bool,
    loading: bool,
    on_navigate: EventHandler<Screen>,
    on_command: EventHandler<Command>,
) -> Element {
    let mut step = use_signal(|| QuickLogStep::Capture);
    let mut preview = use_signal(|| None::<String>);
    let mut suggestions = use_signal(Vec::<FoodSuggestion>::new);
    let mut selected = use_signal(|| None::<FoodSuggestion>);
    let mut portion = use_signal(PortionSize::default);
    let mut meal_type = use_signal(|| DEFAULT_MEAL_TYPE);
    let mut description = use_signal(String::new);
    let mut camera_unavailable = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let recognize = {
        let recognizer = recognizer.clone();
        move |input: RecognitionInput| {
            let recognizer = recognizer.clone();
            step.set(QuickLogStep::Recognizing);
            spawn(async move {
                match recognizer.recognize(input).await {
                    Ok(found) if !found.is_empty() => {
                        suggestions.set(found);
                        step.set(QuickLogStep::Recognition);
                    }
                    Ok(_) => {
                        error.set(Some(t!("quick-log-nothing-found")));
                        step.set(QuickLogStep::Capture);
                    }
                    Err(e) => {
                        log::error!("Recognition failed: {}", e);
                        error.set(Some(e.user_message()));
                        step.set(QuickLogStep::Capture);
                    }
                }
            });
        }
    };

    let take_photo = {
        let recognize = recognize.clone();
        move |source: PhotoSource| {
            let mut recognize = recognize.clone();
            error.set(None);
            spawn(async move {
                match camera::take_meal_photo(source, save_original_images).await {
                    Ok(PhotoOutcome::Taken(photo)) => {
                        preview.set(Some(photo.data_url()));
                        recognize(RecognitionInput::Photo {
                            bytes: photo.bytes,
                            file_name: photo.file_name,
                        });
                    }
                    Ok(PhotoOutcome::Unavailable(msg)) => {
                        camera_unavailable.set(true);
                        error.set(Some(t!("quick-log-camera-unavailable", reason: msg)));
                    }
                    Ok(PhotoOutcome::Cancelled) => {}
                    Err(e) => {
                        log::error!("Photo capture failed: {}", e);
                        error.set(Some(e.user_message()));
                    }
                }
            });
        }
    };

    let handle_confirm = move |_| {
        let Some(food) = selected() else {
            return;
        };
        let entry = log_from_suggestion(&food, portion(), meal_type(), preview());
        on_command.call(Command::AddFoodLog(entry));
    };

    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto; min-height: 100vh; background: #f5f5f5;",
            ScreenHeader {
                title: t!("quick-log-title"),
                on_back: move |_| on_navigate.call(Screen::Dashboard),
                action_label: t!("quick-log-manual"),
                on_action: move |_| on_navigate.call(Screen::ManualLog),
            }

            if let Some(err) = error() {
                div { style: "background: #fee; border: 1px solid #fcc; color: #c33; padding: 12px; margin-bottom: 16px; border-radius: 8px; font-size: 14px;",
                    "⚠️ {err}"
                }
            }

            match step() {
                QuickLogStep::Capture => rsx! {
                    div { class: "card", style: "text-align: center; border: 2px dashed #dee2e6;",
                        div { style: "font-size: 64px; color: #999;", "📷" }
                        h3 { style: "margin: 8px 0;", {t!("quick-log-capture-title")} }
                        p { style: "color: #666; margin: 0 0 20px 0;", {t!("quick-log-capture-subtitle")} }
                        div { style: "display: flex; flex-direction: column; gap: 12px;",
                            button {
                                class: "btn-primary",
                                style: "padding: 16px; font-size: 16px;",
                                onclick: {
                                    let mut take_photo = take_photo.clone();
                                    move |_| take_photo(PhotoSource::Camera)
                                },
                                "📷 "
                                {t!("quick-log-take-photo")}
                            }
                            button {
                                class: "btn-secondary",
                                style: "padding: 16px; font-size: 16px;",
                                onclick: {
                                    let mut take_photo = take_photo.clone();
                                    move |_| take_photo(PhotoSource::Gallery)
                                },
                                "🖼️ "
                                {t!("quick-log-upload")}
                            }
                        }
                    }

                    if camera_unavailable() {
                        div { class: "card", style: "margin-top: 16px;",
                            label { style: "display: block; margin-bottom: 6px; font-weight: 600; color: #333; font-size: 14px;",
                                {t!("quick-log-describe")}
                            }
                            input {
                                r#type: "text",
                                class: "input",
                                placeholder: t!("quick-log-describe-placeholder"),
                                value: "{description}",
                                oninput: move |e| description.set(e.value()),
                            }
                            div { style: "display: flex; gap: 12px; margin-top: 12px;",
                                button {
                                    class: "btn-primary",
                                    style: "flex: 1; padding: 12px;",
                                    onclick: {
                                        let mut recognize = recognize.clone();
                                        move |_| {
                                            error.set(None);
                                            recognize(RecognitionInput::Description(description()));
                                        }
                                    },
                                    {t!("quick-log-analyze")}
                                }
                                button {
                                    class: "btn-secondary",
                                    style: "flex: 1; padding: 12px;",
                                    onclick: {
                                        let mut recognize = recognize.clone();
                                        move |_| {
                                            error.set(None);
                                            recognize(RecognitionInput::Nothing);
                                        }
                                    },
                                    {t!("quick-log-without-photo")}
                                }
                            }
                        }
                    }

                    div { style: "padding: 12px; background: #e3f2fd; border-radius: 8px; color: #0066cc; font-size: 13px; margin-top: 16px;",
                        "💡 "
                        {t!("quick-log-tip")}
                    }
                },
                QuickLogStep::Recognizing => rsx! {
                    div { style: "text-align: center;",
                        {photo_preview(preview())}
                        div { class: "spinner" }
                        h3 { style: "margin: 16px 0 4px 0;", {t!("quick-log-analyzing")} }
                        p { style: "color: #666; margin: 0;", {t!("quick-log-analyzing-detail")} }
                    }
                },
                QuickLogStep::Recognition => rsx! {
                    {photo_preview(preview())}
                    h3 { style: "margin: 0 0 4px 0;", {t!("quick-log-recognized")} }
                    p { style: "color: #666; margin: 0 0 16px 0;", {t!("quick-log-pick-one")} }
                    for (index, food) in suggestions().into_iter().enumerate() {
                        div {
                            key: "{index}",
                            class: "card",
                            style: "margin-bottom: 12px; cursor: pointer; display: flex; align-items: center;",
                            onclick: {
                                let food = food.clone();
                                move |_| {
                                    selected.set(Some(food.clone()));
                                    step.set(QuickLogStep::Portion);
                                }
                            },
                            div { style: "flex: 1;",
                                div { style: "font-weight: 600; color: #333;", "{food.name}" }
                                div { style: "font-size: 12px; color: #666;",
                                    "{food.calories} kcal • "
                                    {macro_line(food.protein, food.carbs, food.fat)}
                                }
                                if let Some(confidence) = food.confidence {
                                    div { style: "font-size: 11px; color: #888;",
                                        {t!("quick-log-confidence", percent: (confidence * 100.0).round())}
                                    }
                                }
                            }
                            span { style: "color: #999; font-size: 20px;", "›" }
                        }
                    }
                    button {
                        class: "btn-secondary",
                        style: "width: 100%; padding: 14px; margin-top: 8px;",
                        onclick: move |_| on_navigate.call(Screen::ManualLog),
                        {t!("quick-log-not-right")}
                    }
                },
                QuickLogStep::Portion => rsx! {
                    {photo_preview(preview())}
                    if let Some(food) = selected() {
                        div { class: "card", style: "text-align: center; margin-bottom: 16px;",
                            div { style: "font-size: 18px; font-weight: 600;", "{food.name}" }
                            div { style: "font-size: 12px; color: #666;", {t!("quick-log-choose-portion")} }
                        }
                        for size in PortionSize::all() {
                            div {
                                key: "{size.label()}",
                                class: "card",
                                style: if portion() == size {
                                    "margin-bottom: 12px; cursor: pointer; border: 2px solid #0066cc;"
                                } else {
                                    "margin-bottom: 12px; cursor: pointer; border: 1px solid #ddd;"
                                },
                                onclick: move |_| {
                                    portion.set(size);
                                    step.set(QuickLogStep::Confirm);
                                },
                                div { style: "display: flex; justify-content: space-between; align-items: center;",
                                    div {
                                        div { style: "font-weight: 600;", "{portion_label(size)}" }
                                        div { style: "font-size: 12px; color: #666;",
                                            "{size.scale(food.calories as f64)} kcal"
                                        }
                                    }
                                    if portion() == size {
                                        span { style: "color: #0066cc; font-size: 20px;", "✓" }
                                    }
                                }
                            }
                        }
                        button {
                            class: "btn-primary",
                            style: "width: 100%; padding: 16px; margin-top: 8px;",
                            onclick: move |_| step.set(QuickLogStep::Confirm),
                            {t!("action-continue")}
                        }
                    }
                },
                QuickLogStep::Confirm => rsx! {
                    {photo_preview(preview())}
                    if let Some(food) = selected() {
                        {
                            let size = portion();
                            rsx! {
                                h3 { style: "margin: 0 0 12px 0;", {t!("quick-log-confirm-title")} }
                                div { class: "card", style: "margin-bottom: 16px;",
                                    div { style: "font-size: 18px; font-weight: 600; margin-bottom: 12px;", "{food.name}" }
                                    div { style: "display: flex; justify-content: space-between; margin-bottom: 12px;",
                                        div {
                                            div { style: "font-size: 12px; color: #666;", {t!("field-portion")} }
                                            div { "{portion_label(size)}" }
                                        }
                                        div { style: "text-align: right;",
                                            div { style: "font-size: 12px; color: #666;", {t!("field-calories")} }
                                            div { style: "font-size: 24px; font-weight: bold; color: #4CAF50;",
                                                "{size.scale(food.calories as f64)}"
                                            }
                                        }
                                    }
                                    div { style: "display: flex; text-align: center; border-top: 1px solid #eee; padding-top: 12px;",
                                        div { style: "flex: 1;",
                                            div { style: "font-size: 12px; color: #666;", {t!("field-protein")} }
                                            strong { "{grams(size.scale(food.protein))}" }
                                        }
                                        div { style: "flex: 1;",
                                            div { style: "font-size: 12px; color: #666;", {t!("field-carbs")} }
                                            strong { "{grams(size.scale(food.carbs))}" }
                                        }
                                        div { style: "flex: 1;",
                                            div { style: "font-size: 12px; color: #666;", {t!("field-fat")} }
                                            strong { "{grams(size.scale(food.fat))}" }
                                        }
                                    }
                                }
                            }
                        }
                        div { style: "margin-bottom: 20px;",
                            label { style: "display: block; margin-bottom: 6px; font-weight: 600; color: #333; font-size: 14px;",
                                {t!("field-meal-type")}
                            }
                            select {
                                class: "input",
                                value: "{meal_type().as_str()}",
                                onchange: move |e| meal_type.set(MealType::from_str(&e.value())),
                                for option in MealType::all().iter().copied() {
                                    option { key: "{option.as_str()}", value: "{option.as_str()}", "{meal_type_label(option)}" }
                                }
                            }
                        }
                        button {
                            class: "btn-success",
                            style: "width: 100%; padding: 16px; font-size: 16px;",
                            disabled: loading,
                            onclick: handle_confirm,
                            "✓ "
                            {t!("quick-log-save")}
                        }
                        button {
                            class: "btn-secondary",
                            style: "width: 100%; padding: 14px; margin-top: 12px;",
                            onclick: move |_| step.set(QuickLogStep::Portion),
                            {t!("quick-log-change-portion")}
                        }
                    }
                },
            }
        }
    }
}

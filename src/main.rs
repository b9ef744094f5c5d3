use dioxus::prelude::*;
use dioxus_i18n::prelude::use_init_i18n;
use dioxus_i18n::t;
use std::sync::Arc;
use std::time::Duration;

mod camera;
mod components;
mod config;
mod error;
mod i18n;
mod models;
mod navigation;
mod services;
mod session;
mod storage;

use calorie_api::ApiClient;
use components::{
    BottomNav, DashboardScreen, GoalSelectionScreen, LoginScreen, ManualLogScreen,
    MealPlanScreen, PicLogScreen, ProfileScreen, QuickLogScreen, SettingsScreen,
    SetupProfileScreen, SignupScreen, WelcomeScreen,
};
use config::AppConfig;
use error::AppError;
use navigation::Screen;
use services::{settings_service, Backend, BackendHandle, Recognizer};
use session::{Command, Controller, SessionState};
use storage::FileTokenStore;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    init_logging();
    dioxus::launch(App);
}

#[cfg(target_os = "android")]
fn init_logging() {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Info)
            .with_tag("calorie-tracker"),
    );
}

#[cfg(not(target_os = "android"))]
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Long-lived handles shared by every screen
#[derive(Clone)]
struct Services {
    backend: BackendHandle,
    recognizer: Recognizer,
}

fn build_services() -> Result<Services, AppError> {
    let config = AppConfig::load();
    let client = Arc::new(ApiClient::with_timeout(
        config.api_base_url.clone(),
        Arc::new(FileTokenStore::in_app_dir()),
        Duration::from_secs(config.request_timeout_secs),
    )?);
    let recognizer = Recognizer::from_config(config.recognizer, Arc::clone(&client));
    let backend: Arc<dyn Backend> = client;
    Ok(Services {
        backend: BackendHandle::new(backend),
        recognizer,
    })
}

#[component]
fn App() -> Element {
    use_init_i18n(i18n::init_i18n);
    let services = use_hook(|| {
        build_services().map_err(|e| {
            log::error!("Startup failed: {}", e);
            e.user_message()
        })
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        match services {
            Ok(services) => rsx! {
                Session { backend: services.backend, recognizer: services.recognizer }
            },
            Err(message) => rsx! {
                div { style: "padding: 32px 16px; text-align: center; font-family: sans-serif;",
                    h2 { style: "color: #c33;", {t!("app-startup-failed")} }
                    p { style: "color: #666;", "{message}" }
                }
            },
        }
    }
}

#[component]
fn Session(backend: BackendHandle, recognizer: Recognizer) -> Element {
    let state = use_signal(|| {
        let settings =
            settings_service::load_settings_or_default(&settings_service::default_settings_path());
        SessionState::new(backend.inner().is_authenticated(), settings)
    });
    let controller = use_hook(|| {
        Controller::new(
            backend.inner(),
            state,
            Some(settings_service::default_settings_path()),
        )
    });

    let loader = controller.clone();
    use_effect(move || {
        let controller = loader.clone();
        spawn(async move {
            controller.load_user_data().await;
        });
    });

    let navigator = controller.clone();
    let on_navigate = EventHandler::new(move |target: Screen| {
        if let Err(e) = navigator.navigate(target) {
            log::warn!("{}", e);
        }
    });
    let on_command = EventHandler::new(move |command: Command| {
        let controller = controller.clone();
        spawn(async move {
            controller.dispatch(command).await;
        });
    });

    let current = state.read().clone();
    let screen = current.screen();

    rsx! {
        div { style: "display: flex; flex-direction: column; height: 100vh; font-family: sans-serif;",
            if let Some(message) = current.error.clone() {
                div { style: "background: #fee; border-bottom: 1px solid #fcc; color: #c33; padding: 10px 16px; display: flex; justify-content: space-between; align-items: center;",
                    span { "⚠️ {message}" }
                    button {
                        style: "background: none; border: none; color: #c33; font-weight: 600;",
                        onclick: move |_| on_command.call(Command::DismissError),
                        {t!("action-dismiss")}
                    }
                }
            }
            if current.loading {
                div { style: "background: #e7f1ff; color: #0066cc; padding: 6px 16px; font-size: 13px; display: flex; align-items: center; gap: 8px;",
                    div { class: "spinner", style: "width: 14px; height: 14px;" }
                    {t!("app-loading")}
                }
            }

            div { style: "flex: 1; overflow-y: auto;",
                match screen {
                    Screen::Welcome => rsx! {
                        WelcomeScreen { on_navigate }
                    },
                    Screen::Login => rsx! {
                        LoginScreen { loading: current.loading, on_navigate, on_command }
                    },
                    Screen::Signup => rsx! {
                        SignupScreen { loading: current.loading, on_navigate, on_command }
                    },
                    Screen::SetupProfile => rsx! {
                        SetupProfileScreen { profile: current.profile.clone(), on_navigate, on_command }
                    },
                    Screen::GoalSelection => rsx! {
                        GoalSelectionScreen { profile: current.profile.clone(), on_navigate, on_command }
                    },
                    Screen::Dashboard => rsx! {
                        DashboardScreen {
                            profile: current.profile.clone(),
                            food_logs: current.food_logs.clone(),
                            calorie_warning: current.settings.calorie_warning,
                            on_navigate,
                        }
                    },
                    Screen::QuickLog => rsx! {
                        QuickLogScreen {
                            recognizer: recognizer.clone(),
                            save_original_images: current.settings.save_original_images,
                            loading: current.loading,
                            on_navigate,
                            on_command,
                        }
                    },
                    Screen::ManualLog => rsx! {
                        ManualLogScreen { loading: current.loading, on_navigate, on_command }
                    },
                    Screen::PicLog => rsx! {
                        PicLogScreen { food_logs: current.food_logs.clone(), on_navigate, on_command }
                    },
                    Screen::MealPlan => rsx! {
                        MealPlanScreen { profile: current.profile.clone() }
                    },
                    Screen::Profile => rsx! {
                        ProfileScreen {
                            profile: current.profile.clone(),
                            food_logs: current.food_logs.clone(),
                            on_navigate,
                        }
                    },
                    Screen::Settings => rsx! {
                        SettingsScreen {
                            settings: current.settings.clone(),
                            backend: backend.clone(),
                            on_navigate,
                            on_command,
                        }
                    },
                }
            }

            if screen.shows_bottom_nav() {
                BottomNav { current_screen: screen, on_navigate }
            }
        }
    }
}

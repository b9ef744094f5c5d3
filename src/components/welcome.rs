use crate::navigation::Screen;
use dioxus::prelude::*;
use dioxus_i18n::t;

#[component]
pub fn WelcomeScreen(on_navigate: EventHandler<Screen>) -> Element {
    rsx! {
        div { style: "display: flex; flex-direction: column; min-height: 100vh; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white;",
            div { style: "flex: 1; display: flex; flex-direction: column; justify-content: center; padding: 24px;",
                div { style: "text-align: center; margin-bottom: 32px;",
                    div { style: "width: 100px; height: 100px; margin: 0 auto 16px auto; background: white; border-radius: 50%; display: flex; align-items: center; justify-content: center; font-size: 50px;",
                        "🍎"
                    }
                    h1 { style: "margin: 0 0 8px 0; font-size: 32px; font-weight: 700;", "CalorieTracker" }
                    p { style: "margin: 0; opacity: 0.75;", {t!("welcome-tagline")} }
                }

                div { style: "display: flex; align-items: flex-start; gap: 16px; margin-bottom: 24px;",
                    div { style: "font-size: 24px; background: rgba(255,255,255,0.25); border-radius: 50%; padding: 12px;",
                        "❤️"
                    }
                    div {
                        h3 { style: "margin: 0 0 4px 0; font-size: 18px;", {t!("welcome-feature-tracking")} }
                        p { style: "margin: 0; font-size: 14px; opacity: 0.75;",
                            {t!("welcome-feature-tracking-detail")}
                        }
                    }
                }
                div { style: "display: flex; align-items: flex-start; gap: 16px;",
                    div { style: "font-size: 24px; background: rgba(255,255,255,0.25); border-radius: 50%; padding: 12px;",
                        "📈"
                    }
                    div {
                        h3 { style: "margin: 0 0 4px 0; font-size: 18px;", {t!("welcome-feature-goals")} }
                        p { style: "margin: 0; font-size: 14px; opacity: 0.75;",
                            {t!("welcome-feature-goals-detail")}
                        }
                    }
                }
            }

            div { style: "padding: 24px; display: flex; flex-direction: column; gap: 12px;",
                button {
                    style: "padding: 16px; font-size: 16px; border: none; border-radius: 999px; background: white; color: #764ba2; font-weight: 600;",
                    onclick: move |_| on_navigate.call(Screen::Signup),
                    {t!("welcome-get-started")}
                }
                button {
                    style: "padding: 16px; font-size: 16px; border: 2px solid white; border-radius: 999px; background: transparent; color: white;",
                    onclick: move |_| on_navigate.call(Screen::Login),
                    {t!("welcome-have-account")}
                }
            }
        }
    }
}

use crate::components::ScreenHeader;
use crate::navigation::Screen;
use crate::session::Command;
use dioxus::prelude::*;
use dioxus_i18n::t;

#[component]
pub fn LoginScreen(
    loading: bool,
    on_navigate: EventHandler<Screen>,
    on_command: EventHandler<Command>,
) -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let handle_submit = move |_| {
        error.set(None);
        let email_value = email();
        if email_value.trim().is_empty() || password().is_empty() {
            error.set(Some(t!("error-credentials-required")));
            return;
        }
        on_command.call(Command::Login {
            email: email_value.trim().to_string(),
            password: password(),
        });
    };

    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto; min-height: 100vh; background: #f5f5f5;",
            ScreenHeader {
                title: t!("login-title"),
                on_back: move |_| on_navigate.call(Screen::Welcome),
            }

            div { style: "text-align: center; margin-bottom: 24px;",
                h2 { style: "margin: 0 0 8px 0;", {t!("login-welcome-back")} }
                p { style: "margin: 0; color: #666;", {t!("login-subtitle")} }
            }

            if let Some(err) = error() {
                div { style: "background: #fee; border: 1px solid #fcc; color: #c33; padding: 12px; margin-bottom: 16px; border-radius: 8px; font-size: 14px;",
                    "⚠️ {err}"
                }
            }

            div { class: "card",
                div { style: "margin-bottom: 20px;",
                    label { style: "display: block; margin-bottom: 6px; font-weight: 600; color: #333; font-size: 14px;",
                        "✉️ "
                        {t!("field-email")}
                    }
                    input {
                        r#type: "email",
                        class: "input",
                        placeholder: "name@example.com",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                        autofocus: true,
                    }
                }
                div { style: "margin-bottom: 20px;",
                    label { style: "display: block; margin-bottom: 6px; font-weight: 600; color: #333; font-size: 14px;",
                        "🔒 "
                        {t!("field-password")}
                    }
                    input {
                        r#type: "password",
                        class: "input",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                }
                button {
                    class: "btn-primary",
                    style: "width: 100%; padding: 16px; font-size: 16px;",
                    disabled: loading,
                    onclick: handle_submit,
                    {t!("login-submit")}
                }
            }

            div { style: "text-align: center; margin-top: 24px; font-size: 14px;",
                span { style: "color: #666;", {t!("login-no-account")} }
                " "
                button {
                    style: "background: none; border: none; color: #0066cc; cursor: pointer; font-size: 14px; padding: 0;",
                    onclick: move |_| on_navigate.call(Screen::Signup),
                    {t!("login-signup-link")}
                }
            }
        }
    }
}

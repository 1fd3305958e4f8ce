use crate::auth::{use_auth, AuthStatus};
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{AppConfig, Credentials};
use shared_ui::{Button, Card, CardContent, CardHeader, Form, FormError, Input};

/// Login page with email and password.
///
/// The submit button stays disabled while a sign-in is in flight. A failed
/// sign-in leaves the form filled and shows the server's message.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let config = use_context::<Signal<AppConfig>>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    if auth.status() == AuthStatus::Authenticated {
        navigator().push(Route::Dashboard {});
    }

    let handle_login = {
        let auth = auth.clone();
        move |_: FormEvent| {
            if submitting() {
                return;
            }
            let credentials = Credentials {
                email: email().trim().to_string(),
                password: password(),
            };
            let auth = auth.clone();
            submitting.set(true);
            spawn(async move {
                auth.login(credentials).await;
                if !auth.state.is_authenticated() {
                    submitting.set(false);
                }
            });
        }
    };

    let office_name = config.read().office.name.clone();
    let error = auth.error();
    let busy = submitting();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    title: office_name,
                    description: "سجّل الدخول للوصول إلى لوحة التحكم",
                }
                CardContent {
                    if let Some(message) = error {
                        FormError { message }
                    }
                    Form { onsubmit: handle_login,
                        Input {
                            label: "البريد الإلكتروني",
                            input_type: "email",
                            placeholder: "name@example.com",
                            value: email(),
                            required: true,
                            disabled: busy,
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "كلمة المرور",
                            input_type: "password",
                            value: password(),
                            required: true,
                            disabled: busy,
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button { submit: true, disabled: busy, class: "auth-submit",
                            if busy { "جارٍ تسجيل الدخول..." } else { "تسجيل الدخول" }
                        }
                    }
                }
            }
        }
    }
}

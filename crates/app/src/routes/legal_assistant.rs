use dioxus::prelude::*;
use shared_types::{AppConfig, AppError, AssistantArticle};
use shared_ui::{
    use_toast, Badge, Button, Card, CardContent, CardHeader, Form, PageHeader, Textarea,
    ToastOptions,
};

use crate::lifetime::use_lifetime;

/// Reference lookup: the office's articles ranked against a question.
#[component]
pub fn LegalAssistant() -> Element {
    let config = use_context::<Signal<AppConfig>>();
    let toast = use_toast();
    let lifetime = use_lifetime();
    let mut question = use_signal(String::new);
    let mut answers = use_signal(|| None::<Vec<AssistantArticle>>);
    let mut asking = use_signal(|| false);

    if !config.read().features.legal_assistant {
        return rsx! {
            PageHeader { title: "المساعد القانوني" }
            Card {
                CardContent {
                    p { "المساعد القانوني غير مفعّل في هذا المكتب." }
                }
            }
        };
    }

    let ask = move |_: FormEvent| {
        let text = question.read().trim().to_string();
        if text.is_empty() {
            toast.error("يرجى كتابة السؤال".to_string(), ToastOptions::new());
            return;
        }
        if asking() {
            return;
        }
        let lifetime = lifetime.clone();
        asking.set(true);
        spawn(async move {
            let Some(result) = lifetime.guard(server::api::ask_assistant(text)).await else {
                return;
            };
            match result {
                Ok(found) => answers.set(Some(found)),
                Err(e) => {
                    let err = AppError::from_transport(&e.to_string());
                    tracing::warn!(error = %err, "assistant lookup failed");
                    toast.error(err.message, ToastOptions::new());
                }
            }
            asking.set(false);
        });
    };

    rsx! {
        PageHeader {
            title: "المساعد القانوني",
            subtitle: "اطرح سؤالك وستظهر المواد المرجعية ذات الصلة",
        }

        Card {
            CardContent {
                Form { onsubmit: ask,
                    Textarea {
                        label: "سؤالك",
                        placeholder: "مثال: ما مدة الاعتراض على الحكم؟",
                        value: question(),
                        rows: 3,
                        disabled: asking(),
                        on_input: move |e: FormEvent| question.set(e.value()),
                    }
                    Button { submit: true, disabled: asking(),
                        if asking() { "جارٍ البحث..." } else { "اسأل" }
                    }
                }
            }
        }

        match answers() {
            Some(found) if found.is_empty() => rsx! {
                Card {
                    CardContent {
                        p { "لم يتم العثور على مواد مرتبطة بسؤالك." }
                    }
                }
            },
            Some(found) => rsx! {
                for article in found {
                    Card { key: "{article.id}",
                        CardHeader {
                            title: article.title.clone(),
                            action: rsx! { Badge { "{article.category}" } },
                        }
                        CardContent {
                            p { class: "assistant-answer", "{article.body}" }
                        }
                    }
                }
            },
            None => rsx! {},
        }
    }
}

use dioxus::prelude::*;
use shared_types::{AppConfig, AppError, CaseStatus, DataProvider, FeeTerms, FileUpload, LegalCase};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, DetailGrid, DetailItem,
    DetailList, PageHeader, SkeletonRows, ToastOptions,
};

use crate::components::dialogs::{AttachFileDialog, SendMessageDialog, StatusChangeDialog};
use crate::components::StatusBadge;
use crate::data::provider;
use crate::format_helpers::{
    format_currency, format_date, format_datetime, format_file_size, format_number,
    format_optional_date,
};
use crate::routes::Route;

/// One-line description of a case's billing terms.
pub fn fee_summary(fees: &FeeTerms) -> String {
    match fees {
        FeeTerms::Fixed { amount } => format_currency(*amount),
        FeeTerms::Percentage {
            percentage,
            case_value,
        } => format!(
            "{}% من {}",
            format_number(*percentage),
            format_currency(*case_value)
        ),
        FeeTerms::Hourly { amount } => format!("{} / ساعة", format_currency(*amount)),
    }
}

#[component]
pub fn CaseDetail(id: String) -> Element {
    let case_id = id.clone();
    let mut data = use_resource(move || {
        let cid = case_id.clone();
        async move { provider::<LegalCase>().find(&cid).await }
    });

    rsx! {
        match &*data.read() {
            Some(Ok(Some(case))) => rsx! {
                CaseDetailView {
                    case_item: case.clone(),
                    on_updated: move |_| data.restart(),
                }
            },
            Some(Ok(None)) => rsx! {
                PageHeader {
                    title: "القضية غير موجودة",
                    actions: rsx! {
                        Link { to: Route::CaseList {},
                            Button { variant: ButtonVariant::Secondary, "العودة إلى القضايا" }
                        }
                    },
                }
                Card {
                    CardContent {
                        p { "لم يتم العثور على القضية المطلوبة." }
                    }
                }
            },
            Some(Err(e)) => {
                tracing::warn!(error = %e, case_id = %id, "loading case failed");
                rsx! {
                    div { class: "page-error", "تعذر تحميل القضية" }
                }
            }
            None => rsx! { SkeletonRows { rows: 6 } },
        }
    }
}

#[component]
fn CaseDetailView(case_item: LegalCase, on_updated: EventHandler<()>) -> Element {
    let config = use_context::<Signal<AppConfig>>();
    let toast = use_toast();
    let mut show_status = use_signal(|| false);
    let mut show_attach = use_signal(|| false);
    let mut show_message = use_signal(|| false);
    let mut saving = use_signal(|| false);

    let messaging = config.read().features.messaging;
    let case_id = case_item.id.clone();

    let change_status = {
        let case_id = case_id.clone();
        move |status: CaseStatus| {
            let case_id = case_id.clone();
            spawn(async move {
                match server::api::update_case_status(case_id.clone(), status.as_str().to_string()).await {
                    Ok(_) => on_updated.call(()),
                    Err(e) => {
                        let err = AppError::from_transport(&e.to_string());
                        tracing::warn!(error = %err, %case_id, "status update failed");
                        toast.error(err.message, ToastOptions::new());
                    }
                }
            });
        }
    };

    let attach = {
        let case_id = case_id.clone();
        move |files: Vec<FileUpload>| {
            let case_id = case_id.clone();
            saving.set(true);
            spawn(async move {
                match server::api::attach_case_files(case_id.clone(), files).await {
                    Ok(_) => on_updated.call(()),
                    Err(e) => {
                        let err = AppError::from_transport(&e.to_string());
                        tracing::warn!(error = %err, %case_id, "attaching files failed");
                        toast.error(err.message, ToastOptions::new());
                    }
                }
                saving.set(false);
            });
        }
    };

    let estimated = case_item.fees.estimated_total();

    rsx! {
        PageHeader {
            title: case_item.title.clone(),
            subtitle: format!("رقم القضية {}", case_item.case_number),
            actions: rsx! {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| show_status.set(true),
                    "تغيير الحالة"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: saving(),
                    onclick: move |_| show_attach.set(true),
                    "إرفاق ملف"
                }
                if messaging {
                    Button {
                        onclick: move |_| show_message.set(true),
                        "مراسلة العميل"
                    }
                }
            },
        }

        DetailGrid {
            Card {
                CardHeader { title: "بيانات القضية" }
                CardContent {
                    DetailList {
                        DetailItem { label: "الحالة",
                            StatusBadge { key_name: case_item.status.as_str(), label: case_item.status.label() }
                        }
                        DetailItem { label: "العميل", value: case_item.client.name.clone() }
                        DetailItem { label: "المحكمة", value: case_item.court.clone() }
                        DetailItem { label: "تاريخ الفتح", value: format_date(case_item.opened_on) }
                        DetailItem {
                            label: "الجلسة القادمة",
                            value: format_optional_date(case_item.next_session_date),
                        }
                        DetailItem { label: "المحامون", value: case_item.lawyers.join("، ") }
                    }
                }
            }

            Card {
                CardHeader { title: "الأتعاب", description: case_item.fees.label().to_string() }
                CardContent {
                    DetailList {
                        DetailItem { label: "الشروط", value: fee_summary(&case_item.fees) }
                        if let Some(total) = estimated {
                            DetailItem { label: "الإجمالي المتوقع", value: format_currency(total) }
                        }
                    }
                }
            }

            Card {
                CardHeader { title: "الملاحظات" }
                CardContent {
                    if case_item.notes.is_empty() {
                        p { class: "attach-empty", "لا توجد ملاحظات" }
                    }
                    for note in case_item.notes.iter() {
                        div { key: "{note.id}", class: "case-note",
                            p { "{note.body}" }
                            small { "{note.author} · {format_datetime(note.created_at)}" }
                        }
                    }
                }
            }

            Card {
                CardHeader { title: "المرفقات" }
                CardContent {
                    if case_item.attachments.is_empty() {
                        p { class: "attach-empty", "لا توجد مرفقات" }
                    }
                    ul { class: "attach-list",
                        for file in case_item.attachments.iter() {
                            li { key: "{file.id}", class: "attach-item",
                                span { class: "attach-name", "{file.file_name}" }
                                span { class: "attach-size", "{format_file_size(file.size_bytes)}" }
                                span { class: "attach-size", "{format_datetime(file.uploaded_at)}" }
                            }
                        }
                    }
                }
            }
        }

        StatusChangeDialog {
            open: show_status(),
            on_open_change: move |open| show_status.set(open),
            current: case_item.status,
            on_change: change_status,
        }
        AttachFileDialog {
            open: show_attach(),
            on_open_change: move |open| show_attach.set(open),
            on_attach: attach,
            is_loading: saving(),
        }
        if messaging {
            SendMessageDialog {
                open: show_message(),
                on_open_change: move |open| show_message.set(open),
                recipient: case_item.client.name.clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_summary_per_kind() {
        assert_eq!(
            fee_summary(&FeeTerms::Fixed { amount: 15000.0 }),
            format_currency(15000.0)
        );
        assert_eq!(
            fee_summary(&FeeTerms::Percentage {
                percentage: 10.0,
                case_value: 250000.0
            }),
            format!("10% من {}", format_currency(250000.0))
        );
        assert!(fee_summary(&FeeTerms::Hourly { amount: 400.0 }).ends_with("/ ساعة"));
    }
}

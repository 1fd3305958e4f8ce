use dioxus::prelude::*;
use shared_types::{DataProvider, Task, TaskPriority};
use shared_ui::{
    Badge, BadgeTone, DataTable, DataTableCell, DataTableEmpty, DataTableRow, PageHeader,
    SkeletonRows,
};
use std::collections::HashSet;

use crate::data::provider;
use crate::format_helpers::{format_date, today};

fn priority_tone(priority: TaskPriority) -> BadgeTone {
    match priority {
        TaskPriority::High => BadgeTone::Danger,
        TaskPriority::Medium => BadgeTone::Warning,
        TaskPriority::Low => BadgeTone::Neutral,
    }
}

/// Done flag after the local toggles: each id in `toggled` flips the
/// stored value.
pub fn effective_done(task: &Task, toggled: &HashSet<String>) -> bool {
    task.done != toggled.contains(&task.id)
}

/// Open tasks first by due date, then finished ones.
pub fn ordered(tasks: &[Task], toggled: &HashSet<String>) -> Vec<Task> {
    let mut rows = tasks.to_vec();
    rows.sort_by_key(|t| (effective_done(t, toggled), t.due_date));
    rows
}

/// Office to-do list. Ticking a task only changes this page's view.
#[component]
pub fn Tasks() -> Element {
    let mut toggled = use_signal(HashSet::<String>::new);
    let tasks = use_resource(move || async move { provider::<Task>().list().await });
    let today = today();

    rsx! {
        PageHeader { title: "المهام", subtitle: "متابعة أعمال الفريق" }

        match &*tasks.read() {
            Some(Ok(all)) => {
                let flipped = toggled.read().clone();
                let rows = ordered(all, &flipped);
                rsx! {
                    DataTable { columns: vec!["", "المهمة", "المسؤول", "القضية", "تاريخ الاستحقاق", "الأولوية"],
                        if rows.is_empty() {
                            DataTableEmpty { colspan: 6, message: "لا توجد مهام" }
                        }
                        for task in rows {
                            DataTableRow { key: "{task.id}",
                                DataTableCell {
                                    input {
                                        r#type: "checkbox",
                                        checked: effective_done(&task, &flipped),
                                        "aria-label": "تم",
                                        onchange: {
                                            let id = task.id.clone();
                                            move |_| {
                                                let mut set = toggled.write();
                                                if !set.remove(&id) {
                                                    set.insert(id.clone());
                                                }
                                            }
                                        },
                                    }
                                }
                                DataTableCell {
                                    span {
                                        class: if effective_done(&task, &flipped) { "task-done" } else { "" },
                                        "{task.title}"
                                    }
                                }
                                DataTableCell { "{task.assignee}" }
                                DataTableCell {
                                    {task.case.as_ref().map(|c| c.name.clone()).unwrap_or_else(|| "—".to_string())}
                                }
                                DataTableCell {
                                    "{format_date(task.due_date)}"
                                    if !effective_done(&task, &flipped) && task.due_date < today {
                                        " "
                                        Badge { tone: BadgeTone::Danger, "متأخرة" }
                                    }
                                }
                                DataTableCell {
                                    Badge { tone: priority_tone(task.priority), "{task.priority.label()}" }
                                }
                            }
                        }
                    }
                }
            }
            Some(Err(e)) => {
                tracing::warn!(error = %e, "loading tasks failed");
                rsx! {
                    div { class: "page-error", "تعذر تحميل المهام" }
                }
            }
            None => rsx! { SkeletonRows { rows: 5 } },
        }
    }
}

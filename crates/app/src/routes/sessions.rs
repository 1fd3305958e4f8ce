use dioxus::prelude::*;
use shared_types::{status_tone, CourtSession, DataProvider, SessionStatus};
use shared_ui::{
    BadgeTone, Card, CardContent, CardHeader, EventItem, EventList, PageHeader, SearchBar,
    SkeletonRows,
};

use crate::data::provider;
use crate::format_helpers::format_datetime;

/// Sessions split by status, in status order. Each group is sorted by start
/// time; finished hearings run newest first.
pub fn group_by_status(sessions: &[CourtSession]) -> Vec<(SessionStatus, Vec<CourtSession>)> {
    SessionStatus::ALL
        .iter()
        .map(|status| {
            let mut group: Vec<CourtSession> = sessions
                .iter()
                .filter(|s| s.status == *status)
                .cloned()
                .collect();
            group.sort_by_key(|s| s.starts_at);
            if *status == SessionStatus::Finished {
                group.reverse();
            }
            (*status, group)
        })
        .collect()
}

fn session_item(session: &CourtSession) -> EventItem {
    EventItem {
        key: session.id.clone(),
        title: session.case.name.clone(),
        subtitle: format!("{} · {}", session.client.name, session.location),
        meta: format_datetime(session.starts_at),
        badge: Some((
            session.status.label().to_string(),
            BadgeTone::from_key(status_tone(session.status.as_str())),
        )),
    }
}

#[component]
pub fn Sessions() -> Element {
    let mut search_query = use_signal(String::new);

    let sessions = use_resource(move || {
        let q = search_query.read().clone();
        async move { provider::<CourtSession>().search(&q).await }
    });

    rsx! {
        PageHeader { title: "الجلسات", subtitle: "جلسات المحاكم المجدولة" }

        SearchBar {
            value: search_query(),
            on_search: move |q: String| search_query.set(q),
            placeholder: "ابحث بالقضية أو العميل أو المكان...",
        }

        match &*sessions.read() {
            Some(Ok(all)) => rsx! {
                for (status, group) in group_by_status(all) {
                    Card { key: "{status.as_str()}",
                        CardHeader {
                            title: status.label().to_string(),
                            description: format!("{} جلسة", group.len()),
                        }
                        CardContent {
                            EventList {
                                items: group.iter().map(session_item).collect::<Vec<_>>(),
                                empty_text: "لا توجد جلسات",
                            }
                        }
                    }
                }
            },
            Some(Err(e)) => {
                tracing::warn!(error = %e, "loading sessions failed");
                rsx! {
                    div { class: "page-error", "تعذر تحميل الجلسات" }
                }
            }
            None => rsx! { SkeletonRows { rows: 5 } },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared_types::EntityRef;

    fn session(id: &str, day: u32, status: SessionStatus) -> CourtSession {
        CourtSession {
            id: id.into(),
            starts_at: NaiveDate::from_ymd_opt(2026, 3, day)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            location: "القاعة 3".into(),
            status,
            case: EntityRef::new("case-1", "نزاع تجاري"),
            client: EntityRef::new("cus-1", "أحمد"),
        }
    }

    #[test]
    fn groups_follow_status_order_with_sorted_members() {
        let all = vec![
            session("late", 20, SessionStatus::Upcoming),
            session("old", 1, SessionStatus::Finished),
            session("soon", 16, SessionStatus::Upcoming),
            session("older", 2, SessionStatus::Finished),
        ];
        let groups = group_by_status(&all);
        let summary: Vec<(SessionStatus, Vec<&str>)> = groups
            .iter()
            .map(|(s, g)| (*s, g.iter().map(|x| x.id.as_str()).collect()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (SessionStatus::Upcoming, vec!["soon", "late"]),
                (SessionStatus::InProgress, vec![]),
                (SessionStatus::Finished, vec!["older", "old"]),
            ]
        );
    }
}

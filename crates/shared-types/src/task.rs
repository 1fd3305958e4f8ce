use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::{labeled_enum, EntityRef};
use crate::provider::{Collection, Record};

labeled_enum! {
    TaskPriority {
        Low => ("low", "منخفضة"),
        Medium => ("medium", "متوسطة"),
        High => ("high", "عالية"),
    }
}

/// A to-do item assigned to a staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub assignee: String,
    pub due_date: NaiveDate,
    pub priority: TaskPriority,
    #[serde(default)]
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case: Option<EntityRef>,
}

impl Task {
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.done && self.due_date < today
    }
}

impl Record for Task {
    const COLLECTION: Collection = Collection::Tasks;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.title, self.assignee)
    }
}

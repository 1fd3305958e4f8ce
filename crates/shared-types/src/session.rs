use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::common::{labeled_enum, EntityRef};
use crate::provider::{Collection, Record};

labeled_enum! {
    SessionStatus {
        Upcoming => ("upcoming", "قادمة"),
        InProgress => ("in_progress", "منعقدة"),
        Finished => ("finished", "منتهية"),
    }
}

/// A scheduled court hearing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtSession {
    pub id: String,
    pub starts_at: NaiveDateTime,
    pub location: String,
    pub status: SessionStatus,
    pub case: EntityRef,
    pub client: EntityRef,
}

impl Record for CourtSession {
    const COLLECTION: Collection = Collection::Sessions;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> String {
        format!("{} {} {}", self.case.name, self.client.name, self.location)
    }
}

use serde::{Deserialize, Serialize};

use crate::common::labeled_enum;
use crate::provider::{Collection, Record};

labeled_enum! {
    EmployeeStatus {
        Active => ("active", "على رأس العمل"),
        OnLeave => ("on_leave", "في إجازة"),
        Terminated => ("terminated", "منتهية خدمته"),
    }
}

/// A staff member of the office.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub position: String,
    pub department: String,
    pub phone: String,
    pub email: String,
    pub status: EmployeeStatus,
}

impl Record for Employee {
    const COLLECTION: Collection = Collection::Employees;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.position, self.department)
    }
}

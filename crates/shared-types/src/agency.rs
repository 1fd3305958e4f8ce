use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::{labeled_enum, EntityRef};
use crate::provider::{Collection, Record};

labeled_enum! {
    AgencyType {
        General => ("general", "وكالة عامة"),
        Special => ("special", "وكالة خاصة"),
        Litigation => ("litigation", "وكالة خصومة"),
    }
}

labeled_enum! {
    AgencyValidity {
        Valid => ("valid", "سارية"),
        Expired => ("expired", "منتهية"),
    }
}

/// A power-of-attorney instrument authorising the office to act for a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agency {
    pub id: String,
    pub agency_number: String,
    pub client: EntityRef,
    #[serde(rename = "type")]
    pub agency_type: AgencyType,
    pub issued_on: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<NaiveDate>,
}

impl Agency {
    /// An agency without an expiry date never lapses. The expiry day itself
    /// is still valid.
    pub fn validity(&self, today: NaiveDate) -> AgencyValidity {
        match self.expires_on {
            Some(end) if end < today => AgencyValidity::Expired,
            _ => AgencyValidity::Valid,
        }
    }
}

impl Record for Agency {
    const COLLECTION: Collection = Collection::Agencies;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.agency_number, self.client.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agency(expires_on: Option<NaiveDate>) -> Agency {
        Agency {
            id: "a1".into(),
            agency_number: "44120".into(),
            client: EntityRef::new("c1", "خالد"),
            agency_type: AgencyType::Litigation,
            issued_on: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            expires_on,
        }
    }

    #[test]
    fn validity_against_today() {
        let today = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        assert_eq!(agency(None).validity(today), AgencyValidity::Valid);
        assert_eq!(agency(Some(today)).validity(today), AgencyValidity::Valid);
        assert_eq!(
            agency(NaiveDate::from_ymd_opt(2026, 5, 31)).validity(today),
            AgencyValidity::Expired
        );
    }
}

use serde::{Deserialize, Serialize};

use crate::common::labeled_enum;
use crate::provider::{Collection, Record};

labeled_enum! {
    CustomerType {
        Individual => ("individual", "فرد"),
        Company => ("company", "شركة"),
        Institution => ("institution", "مؤسسة"),
    }
}

labeled_enum! {
    CustomerStatus {
        Active => ("active", "نشط"),
        Inactive => ("inactive", "غير نشط"),
        Suspended => ("suspended", "موقوف"),
    }
}

/// A client of the office.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// National id for individuals, commercial registration otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "type")]
    pub customer_type: CustomerType,
    pub status: CustomerStatus,
}

impl Record for Customer {
    const COLLECTION: Collection = Collection::Customers;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.name,
            self.phone,
            self.email.as_deref().unwrap_or_default()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_field_is_named_type_on_the_wire() {
        let json = r#"{
            "id": "c1",
            "name": "مؤسسة الفجر",
            "phone": "0551234567",
            "type": "institution",
            "status": "suspended"
        }"#;
        let c: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(c.customer_type, CustomerType::Institution);
        assert_eq!(c.status, CustomerStatus::Suspended);
        assert!(c.email.is_none());
    }
}

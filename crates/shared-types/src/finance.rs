use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::labeled_enum;
use crate::provider::{Collection, Record};

labeled_enum! {
    FinancialType {
        Payment => ("payment", "دفعة"),
        Invoice => ("invoice", "فاتورة"),
        Refund => ("refund", "استرداد"),
        Claim => ("claim", "مطالبة"),
    }
}

labeled_enum! {
    FinancialStatus {
        Paid => ("paid", "مدفوع"),
        Pending => ("pending", "قيد الانتظار"),
        Cancelled => ("cancelled", "ملغى"),
    }
}

labeled_enum! {
    SourceType {
        Case => ("case", "قضية"),
        Employee => ("employee", "موظف"),
    }
}

/// What a financial record is linked to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinancialSource {
    Case(String),
    Employee(String),
}

impl FinancialSource {
    pub fn new(source_type: SourceType, id: String) -> Self {
        match source_type {
            SourceType::Case => FinancialSource::Case(id),
            SourceType::Employee => FinancialSource::Employee(id),
        }
    }

    pub fn source_type(&self) -> SourceType {
        match self {
            FinancialSource::Case(_) => SourceType::Case,
            FinancialSource::Employee(_) => SourceType::Employee,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            FinancialSource::Case(id) | FinancialSource::Employee(id) => id,
        }
    }
}

/// A money movement recorded by the office.
///
/// On the wire the link is two sibling fields, `sourceType` and `sourceId`,
/// which must appear together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FinancialRecordWire", into = "FinancialRecordWire")]
pub struct FinancialRecord {
    pub id: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub description: String,
    pub record_type: FinancialType,
    pub status: FinancialStatus,
    pub source: Option<FinancialSource>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FinancialRecordWire {
    id: String,
    amount: f64,
    date: NaiveDate,
    description: String,
    #[serde(rename = "type")]
    record_type: FinancialType,
    status: FinancialStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_type: Option<SourceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_id: Option<String>,
}

impl TryFrom<FinancialRecordWire> for FinancialRecord {
    type Error = String;

    fn try_from(wire: FinancialRecordWire) -> Result<Self, Self::Error> {
        let source = match (wire.source_type, wire.source_id) {
            (None, None) => None,
            (Some(kind), Some(id)) if !id.trim().is_empty() => Some(FinancialSource::new(kind, id)),
            (Some(kind), _) => {
                return Err(format!(
                    "record {}: sourceType \"{}\" needs a non-empty sourceId",
                    wire.id,
                    kind.as_str()
                ))
            }
            (None, Some(_)) => {
                return Err(format!("record {}: sourceId given without sourceType", wire.id))
            }
        };
        Ok(FinancialRecord {
            id: wire.id,
            amount: wire.amount,
            date: wire.date,
            description: wire.description,
            record_type: wire.record_type,
            status: wire.status,
            source,
        })
    }
}

impl From<FinancialRecord> for FinancialRecordWire {
    fn from(record: FinancialRecord) -> Self {
        let (source_type, source_id) = match record.source {
            Some(source) => (Some(source.source_type()), Some(source.id().to_string())),
            None => (None, None),
        };
        FinancialRecordWire {
            id: record.id,
            amount: record.amount,
            date: record.date,
            description: record.description,
            record_type: record.record_type,
            status: record.status,
            source_type,
            source_id,
        }
    }
}

impl FinancialRecord {
    /// Money that has actually come in.
    pub fn is_collected(&self) -> bool {
        self.status == FinancialStatus::Paid
            && matches!(
                self.record_type,
                FinancialType::Payment | FinancialType::Invoice
            )
    }

    /// Money still expected from clients.
    pub fn is_outstanding(&self) -> bool {
        self.status == FinancialStatus::Pending
            && matches!(self.record_type, FinancialType::Invoice | FinancialType::Claim)
    }
}

impl Record for FinancialRecord {
    const COLLECTION: Collection = Collection::Finance;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.description, self.record_type.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_type_discriminates_link() {
        let json = r#"{
            "id": "f1",
            "amount": 1500.5,
            "date": "2026-02-01",
            "description": "دفعة أولى",
            "type": "payment",
            "status": "paid",
            "sourceType": "case",
            "sourceId": "case-7"
        }"#;
        let r: FinancialRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.source, Some(FinancialSource::Case("case-7".into())));
        assert!(r.is_collected());
        assert!(!r.is_outstanding());
    }

    fn with_source(fields: &str) -> Result<FinancialRecord, serde_json::Error> {
        let json = format!(
            r#"{{"id":"f3","amount":10,"date":"2026-02-04","description":"x","type":"refund","status":"paid"{fields}}}"#
        );
        serde_json::from_str(&json)
    }

    #[test]
    fn unknown_source_type_is_rejected() {
        assert!(with_source(r#","sourceType":"court","sourceId":"c-1""#).is_err());
    }

    #[test]
    fn half_a_source_link_is_rejected() {
        let err = with_source(r#","sourceType":"case""#).unwrap_err();
        assert!(err.to_string().contains("sourceId"));
        assert!(with_source(r#","sourceType":"employee","sourceId":" ""#).is_err());
        assert!(with_source(r#","sourceId":"case-1""#).is_err());
    }

    #[test]
    fn source_link_survives_serialization() {
        let record = with_source(r#","sourceType":"employee","sourceId":"emp-6""#).unwrap();
        assert_eq!(record.source, Some(FinancialSource::Employee("emp-6".into())));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "refund");
        assert_eq!(value["sourceType"], "employee");
        assert_eq!(value["sourceId"], "emp-6");
    }

    #[test]
    fn source_is_optional() {
        let json = r#"{
            "id": "f2",
            "amount": 200,
            "date": "2026-02-03",
            "description": "مطالبة",
            "type": "claim",
            "status": "pending"
        }"#;
        let r: FinancialRecord = serde_json::from_str(json).unwrap();
        assert!(r.source.is_none());
        assert!(r.is_outstanding());
        let value = serde_json::to_value(&r).unwrap();
        assert!(value.get("sourceType").is_none());
    }
}

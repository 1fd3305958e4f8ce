use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::attachment::{Attachment, FileUpload};
use crate::common::{labeled_enum, EntityRef};
use crate::provider::{Collection, Record};

labeled_enum! {
    /// Lifecycle state of a case. Exactly these four values are valid.
    CaseStatus {
        Active => ("active", "نشطة"),
        Pending => ("pending", "معلقة"),
        Processing => ("processing", "قيد الإجراء"),
        Closed => ("closed", "مغلقة"),
    }
}

/// Billing terms for a case, tagged by `type`.
///
/// Each variant carries only the fields that mean something for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FeeTerms {
    Fixed {
        amount: f64,
    },
    Percentage {
        percentage: f64,
        #[serde(rename = "caseValue")]
        case_value: f64,
    },
    Hourly {
        amount: f64,
    },
}

impl FeeTerms {
    pub fn label(&self) -> &'static str {
        match self {
            FeeTerms::Fixed { .. } => "أتعاب ثابتة",
            FeeTerms::Percentage { .. } => "نسبة من قيمة القضية",
            FeeTerms::Hourly { .. } => "بالساعة",
        }
    }

    /// Expected total fee. Hourly terms are open-ended and have none.
    pub fn estimated_total(&self) -> Option<f64> {
        match self {
            FeeTerms::Fixed { amount } => Some(*amount),
            FeeTerms::Percentage {
                percentage,
                case_value,
            } => Some(percentage / 100.0 * case_value),
            FeeTerms::Hourly { .. } => None,
        }
    }
}

/// A free-text note on a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseNote {
    pub id: String,
    pub author: String,
    pub body: String,
    pub created_at: NaiveDateTime,
}

/// A legal matter tracked by the office.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalCase {
    pub id: String,
    pub title: String,
    pub case_number: String,
    pub status: CaseStatus,
    pub client: EntityRef,
    pub court: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_session_date: Option<NaiveDate>,
    #[serde(default)]
    pub lawyers: Vec<String>,
    pub fees: FeeTerms,
    #[serde(default)]
    pub notes: Vec<CaseNote>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    pub opened_on: NaiveDate,
}

impl LegalCase {
    /// Append uploaded files as attachments, numbering ids after the
    /// existing ones.
    pub fn attach(&mut self, uploads: Vec<FileUpload>, uploaded_at: NaiveDateTime) {
        for upload in uploads {
            let id = format!("{}-att-{}", self.id, self.attachments.len() + 1);
            self.attachments
                .push(Attachment::from_upload(id, upload, uploaded_at));
        }
    }
}

impl Record for LegalCase {
    const COLLECTION: Collection = Collection::Cases;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title, self.case_number, self.client.name, self.court
        )
    }
}

/// Request body for changing a case's status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCaseStatusRequest {
    pub status: String,
}

/// Request body for attaching files to a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachFilesRequest {
    pub files: Vec<FileUpload>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_rejects_unknown_values() {
        assert_eq!(CaseStatus::parse("closed"), Some(CaseStatus::Closed));
        assert_eq!(CaseStatus::parse("archived"), None);
        assert!(serde_json::from_str::<CaseStatus>(r#""archived""#).is_err());
        assert_eq!(CaseStatus::ALL.len(), 4);
    }

    #[test]
    fn fee_terms_use_type_tag() {
        let fixed: FeeTerms = serde_json::from_str(r#"{"type":"fixed","amount":5000}"#).unwrap();
        assert_eq!(fixed, FeeTerms::Fixed { amount: 5000.0 });

        let pct: FeeTerms =
            serde_json::from_str(r#"{"type":"percentage","percentage":10,"caseValue":200000}"#)
                .unwrap();
        assert_eq!(
            pct,
            FeeTerms::Percentage {
                percentage: 10.0,
                case_value: 200000.0
            }
        );

        let json = serde_json::to_value(FeeTerms::Hourly { amount: 350.0 }).unwrap();
        assert_eq!(json["type"], "hourly");
        assert_eq!(json["amount"], 350.0);
        assert!(json.get("percentage").is_none());
    }

    #[test]
    fn fee_terms_estimated_total() {
        assert_eq!(FeeTerms::Fixed { amount: 7500.0 }.estimated_total(), Some(7500.0));
        assert_eq!(
            FeeTerms::Percentage {
                percentage: 5.0,
                case_value: 100000.0
            }
            .estimated_total(),
            Some(5000.0)
        );
        assert_eq!(FeeTerms::Hourly { amount: 300.0 }.estimated_total(), None);
    }

    #[test]
    fn attach_numbers_new_files_after_existing() {
        let day = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
        let at = day.and_hms_opt(12, 0, 0).unwrap();
        let mut case = LegalCase {
            id: "case-1".into(),
            title: "نزاع تجاري".into(),
            case_number: "1447/123".into(),
            status: CaseStatus::Active,
            client: EntityRef::new("c1", "شركة النور"),
            court: "المحكمة التجارية".into(),
            next_session_date: None,
            lawyers: vec![],
            fees: FeeTerms::Fixed { amount: 1.0 },
            notes: vec![],
            attachments: vec![],
            opened_on: day,
        };
        case.attach(vec![FileUpload::new("a.pdf", 10, "application/pdf")], at);
        case.attach(
            vec![
                FileUpload::new("b.pdf", 20, "application/pdf"),
                FileUpload::new("c.png", 30, "image/png"),
            ],
            at,
        );
        let ids: Vec<&str> = case.attachments.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["case-1-att-1", "case-1-att-2", "case-1-att-3"]);
    }
}

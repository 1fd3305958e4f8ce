//! Seed records for the mock office backend.
//!
//! Dates are laid out relative to `today` so the dashboard always has
//! upcoming sessions and six months of revenue to show.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use shared_types::{
    Agency, AgencyType, AssistantArticle, CaseNote, CaseStatus, CourtSession, Customer,
    CustomerStatus, CustomerType, Employee, EmployeeStatus, EntityRef, FeeTerms, FinancialRecord,
    FinancialSource, FinancialStatus, FinancialType, LegalCase, SessionStatus, Task, TaskPriority,
};

fn day(today: NaiveDate, offset: i64) -> NaiveDate {
    today + Duration::days(offset)
}

fn at(today: NaiveDate, offset: i64, hour: u32) -> NaiveDateTime {
    day(today, offset)
        .and_hms_opt(hour, 0, 0)
        .unwrap_or_default()
}

fn client(id: &str, name: &str) -> EntityRef {
    EntityRef::new(id, name)
}

pub fn customers() -> Vec<Customer> {
    let c = |id: &str,
             name: &str,
             phone: &str,
             email: Option<&str>,
             reg: Option<&str>,
             customer_type: CustomerType,
             status: CustomerStatus| Customer {
        id: id.to_string(),
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.map(str::to_string),
        registration_number: reg.map(str::to_string),
        address: Some("الرياض".to_string()),
        customer_type,
        status,
    };
    vec![
        c("cus-1", "أحمد الحربي", "0551234567", Some("ahmed@example.com"), Some("1012345678"), CustomerType::Individual, CustomerStatus::Active),
        c("cus-2", "شركة النور للتجارة", "0112345678", Some("info@alnoor.example"), Some("1010654321"), CustomerType::Company, CustomerStatus::Active),
        c("cus-3", "مؤسسة الفجر للمقاولات", "0509876543", None, Some("4030112233"), CustomerType::Institution, CustomerStatus::Active),
        c("cus-4", "خالد الدوسري", "0533456789", Some("khaled@example.com"), Some("1098765432"), CustomerType::Individual, CustomerStatus::Inactive),
        c("cus-5", "نورة السبيعي", "0544567890", None, None, CustomerType::Individual, CustomerStatus::Active),
        c("cus-6", "شركة الأفق العقارية", "0126543210", Some("legal@ofuq.example"), Some("2050998877"), CustomerType::Company, CustomerStatus::Suspended),
    ]
}

pub fn employees() -> Vec<Employee> {
    let e = |id: &str, name: &str, position: &str, department: &str, email: &str, status| Employee {
        id: id.to_string(),
        name: name.to_string(),
        position: position.to_string(),
        department: department.to_string(),
        phone: "0500000000".to_string(),
        email: email.to_string(),
        status,
    };
    vec![
        e("emp-1", "محمد العتيبي", "المدير العام", "الإدارة", "admin@office.test", EmployeeStatus::Active),
        e("emp-2", "سارة القحطاني", "محامية أولى", "القضايا التجارية", "lawyer@office.test", EmployeeStatus::Active),
        e("emp-3", "فهد الشمري", "محامٍ", "القضايا العمالية", "fahad@office.test", EmployeeStatus::Active),
        e("emp-4", "عبدالله الزهراني", "مستشار قانوني", "الاستشارات", "abdullah@office.test", EmployeeStatus::OnLeave),
        e("emp-5", "ريم الشهري", "سكرتيرة", "الإدارة", "secretary@office.test", EmployeeStatus::Active),
        e("emp-6", "ماجد الغامدي", "محاسب", "المالية", "majed@office.test", EmployeeStatus::Terminated),
    ]
}

pub fn cases(today: NaiveDate) -> Vec<LegalCase> {
    vec![
        LegalCase {
            id: "case-1".into(),
            title: "نزاع توريد بضائع".into(),
            case_number: "1447/1021".into(),
            status: CaseStatus::Active,
            client: client("cus-2", "شركة النور للتجارة"),
            court: "المحكمة التجارية بالرياض".into(),
            next_session_date: Some(day(today, 3)),
            lawyers: vec!["سارة القحطاني".into()],
            fees: FeeTerms::Percentage {
                percentage: 10.0,
                case_value: 450_000.0,
            },
            notes: vec![CaseNote {
                id: "note-1".into(),
                author: "سارة القحطاني".into(),
                body: "تم تقديم مذكرة الرد وطلب ندب خبير.".into(),
                created_at: at(today, -6, 11),
            }],
            attachments: vec![],
            opened_on: day(today, -120),
        },
        LegalCase {
            id: "case-2".into(),
            title: "مطالبة بمستحقات نهاية الخدمة".into(),
            case_number: "1447/2210".into(),
            status: CaseStatus::Processing,
            client: client("cus-1", "أحمد الحربي"),
            court: "المحكمة العمالية".into(),
            next_session_date: Some(day(today, 8)),
            lawyers: vec!["فهد الشمري".into()],
            fees: FeeTerms::Fixed { amount: 15_000.0 },
            notes: vec![],
            attachments: vec![],
            opened_on: day(today, -75),
        },
        LegalCase {
            id: "case-3".into(),
            title: "فسخ عقد إيجار تجاري".into(),
            case_number: "1446/8876".into(),
            status: CaseStatus::Pending,
            client: client("cus-6", "شركة الأفق العقارية"),
            court: "المحكمة العامة بجدة".into(),
            next_session_date: None,
            lawyers: vec!["سارة القحطاني".into(), "فهد الشمري".into()],
            fees: FeeTerms::Hourly { amount: 800.0 },
            notes: vec![],
            attachments: vec![],
            opened_on: day(today, -200),
        },
        LegalCase {
            id: "case-4".into(),
            title: "تعويض عن أضرار مقاولة".into(),
            case_number: "1447/3345".into(),
            status: CaseStatus::Active,
            client: client("cus-3", "مؤسسة الفجر للمقاولات"),
            court: "المحكمة العامة بالرياض".into(),
            next_session_date: Some(day(today, 14)),
            lawyers: vec!["عبدالله الزهراني".into()],
            fees: FeeTerms::Fixed { amount: 40_000.0 },
            notes: vec![],
            attachments: vec![],
            opened_on: day(today, -40),
        },
        LegalCase {
            id: "case-5".into(),
            title: "قضية حضانة".into(),
            case_number: "1446/5512".into(),
            status: CaseStatus::Closed,
            client: client("cus-5", "نورة السبيعي"),
            court: "محكمة الأحوال الشخصية".into(),
            next_session_date: None,
            lawyers: vec!["سارة القحطاني".into()],
            fees: FeeTerms::Fixed { amount: 12_000.0 },
            notes: vec![],
            attachments: vec![],
            opened_on: day(today, -300),
        },
        LegalCase {
            id: "case-6".into(),
            title: "اعتراض على قرار إداري".into(),
            case_number: "1447/4101".into(),
            status: CaseStatus::Active,
            client: client("cus-4", "خالد الدوسري"),
            court: "ديوان المظالم".into(),
            next_session_date: Some(day(today, 21)),
            lawyers: vec!["فهد الشمري".into()],
            fees: FeeTerms::Percentage {
                percentage: 5.0,
                case_value: 200_000.0,
            },
            notes: vec![],
            attachments: vec![],
            opened_on: day(today, -15),
        },
    ]
}

pub fn sessions(today: NaiveDate) -> Vec<CourtSession> {
    let s = |id: &str, offset: i64, hour: u32, location: &str, status, case: EntityRef, client: EntityRef| {
        CourtSession {
            id: id.to_string(),
            starts_at: at(today, offset, hour),
            location: location.to_string(),
            status,
            case,
            client,
        }
    };
    vec![
        s("ses-1", -10, 9, "المحكمة التجارية - الدائرة 4", SessionStatus::Finished, client("case-1", "نزاع توريد بضائع"), client("cus-2", "شركة النور للتجارة")),
        s("ses-2", 0, 10, "المحكمة العمالية - القاعة 2", SessionStatus::InProgress, client("case-2", "مطالبة بمستحقات نهاية الخدمة"), client("cus-1", "أحمد الحربي")),
        s("ses-3", 3, 9, "المحكمة التجارية - الدائرة 4", SessionStatus::Upcoming, client("case-1", "نزاع توريد بضائع"), client("cus-2", "شركة النور للتجارة")),
        s("ses-4", 8, 11, "المحكمة العمالية - القاعة 5", SessionStatus::Upcoming, client("case-2", "مطالبة بمستحقات نهاية الخدمة"), client("cus-1", "أحمد الحربي")),
        s("ses-5", 14, 10, "المحكمة العامة - الدائرة 7", SessionStatus::Upcoming, client("case-4", "تعويض عن أضرار مقاولة"), client("cus-3", "مؤسسة الفجر للمقاولات")),
        s("ses-6", 21, 12, "ديوان المظالم - الدائرة 1", SessionStatus::Upcoming, client("case-6", "اعتراض على قرار إداري"), client("cus-4", "خالد الدوسري")),
    ]
}

pub fn finance(today: NaiveDate) -> Vec<FinancialRecord> {
    let f = |id: &str, amount: f64, offset: i64, description: &str, record_type, status, source| {
        FinancialRecord {
            id: id.to_string(),
            amount,
            date: day(today, offset),
            description: description.to_string(),
            record_type,
            status,
            source,
        }
    };
    let case = |id: &str| Some(FinancialSource::Case(id.to_string()));
    vec![
        f("fin-1", 20_000.0, -150, "دفعة مقدمة - نزاع توريد", FinancialType::Payment, FinancialStatus::Paid, case("case-1")),
        f("fin-2", 7_500.0, -110, "فاتورة أتعاب - مستحقات نهاية الخدمة", FinancialType::Invoice, FinancialStatus::Paid, case("case-2")),
        f("fin-3", 12_000.0, -95, "أتعاب قضية الحضانة", FinancialType::Payment, FinancialStatus::Paid, case("case-5")),
        f("fin-4", 9_000.0, -60, "دفعة ثانية - نزاع توريد", FinancialType::Payment, FinancialStatus::Paid, case("case-1")),
        f("fin-5", 20_000.0, -35, "دفعة أولى - تعويض مقاولة", FinancialType::Invoice, FinancialStatus::Paid, case("case-4")),
        f("fin-6", 7_500.0, -20, "فاتورة أتعاب - الدفعة الثانية", FinancialType::Invoice, FinancialStatus::Pending, case("case-2")),
        f("fin-7", 6_400.0, -12, "مطالبة ساعات عمل - عقد الإيجار", FinancialType::Claim, FinancialStatus::Pending, case("case-3")),
        f("fin-8", 1_500.0, -8, "استرداد رسوم", FinancialType::Refund, FinancialStatus::Paid, case("case-5")),
        f("fin-9", 5_000.0, -5, "دفعة أولى - اعتراض إداري", FinancialType::Payment, FinancialStatus::Paid, case("case-6")),
        f("fin-10", 4_000.0, -3, "سلفة موظف", FinancialType::Payment, FinancialStatus::Cancelled, Some(FinancialSource::Employee("emp-6".into()))),
    ]
}

pub fn tasks(today: NaiveDate) -> Vec<Task> {
    let t = |id: &str, title: &str, assignee: &str, offset: i64, priority, done, case: Option<EntityRef>| Task {
        id: id.to_string(),
        title: title.to_string(),
        assignee: assignee.to_string(),
        due_date: day(today, offset),
        priority,
        done,
        case,
    };
    vec![
        t("task-1", "إعداد مذكرة الرد", "سارة القحطاني", 2, TaskPriority::High, false, Some(client("case-1", "نزاع توريد بضائع"))),
        t("task-2", "تجهيز مستندات الجلسة", "ريم الشهري", 1, TaskPriority::Medium, false, Some(client("case-2", "مطالبة بمستحقات نهاية الخدمة"))),
        t("task-3", "مراجعة تقرير الخبير", "عبدالله الزهراني", -2, TaskPriority::High, false, Some(client("case-4", "تعويض عن أضرار مقاولة"))),
        t("task-4", "تجديد وكالة العميل", "ريم الشهري", 10, TaskPriority::Low, false, None),
        t("task-5", "أرشفة ملف قضية الحضانة", "ريم الشهري", -15, TaskPriority::Low, true, Some(client("case-5", "قضية حضانة"))),
    ]
}

pub fn agencies(today: NaiveDate) -> Vec<Agency> {
    let a = |id: &str, number: &str, client_ref: EntityRef, agency_type, issued: i64, expires: Option<i64>| Agency {
        id: id.to_string(),
        agency_number: number.to_string(),
        client: client_ref,
        agency_type,
        issued_on: day(today, issued),
        expires_on: expires.map(|o| day(today, o)),
    };
    vec![
        a("agc-1", "44120331", client("cus-2", "شركة النور للتجارة"), AgencyType::Litigation, -365, Some(180)),
        a("agc-2", "44120998", client("cus-1", "أحمد الحربي"), AgencyType::Special, -200, Some(-5)),
        a("agc-3", "44121450", client("cus-3", "مؤسسة الفجر للمقاولات"), AgencyType::General, -90, None),
        a("agc-4", "44122017", client("cus-4", "خالد الدوسري"), AgencyType::Litigation, -20, Some(345)),
    ]
}

pub fn articles() -> Vec<AssistantArticle> {
    let a = |id: &str, title: &str, category: &str, body: &str, keywords: &[&str]| AssistantArticle {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        body: body.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    };
    vec![
        a("art-1", "مدة الاعتراض على الأحكام", "المرافعات",
          "مدة الاعتراض بطلب الاستئناف أو التدقيق ثلاثون يوماً من تاريخ تسلم صورة الحكم، وعشرة أيام في المسائل المستعجلة.",
          &["استئناف", "اعتراض", "مهلة", "حكم"]),
        a("art-2", "مستحقات نهاية الخدمة", "العمل",
          "يستحق العامل مكافأة نصف أجر شهر عن كل سنة من السنوات الخمس الأولى، وأجر شهر عن كل سنة بعدها.",
          &["مكافأة", "نهاية", "الخدمة", "عامل"]),
        a("art-3", "فسخ عقد الإيجار", "العقود",
          "يجوز للمؤجر طلب فسخ العقد إذا تأخر المستأجر عن سداد الأجرة بعد إنذاره، وفق ما يقرره العقد ونظام الإيجار.",
          &["إيجار", "فسخ", "عقد", "إخلاء"]),
        a("art-4", "أنواع الوكالات الشرعية", "الوكالات",
          "الوكالة العامة تخول الوكيل التصرف في جميع الشؤون، والخاصة تقتصر على تصرف محدد، ووكالة الخصومة للترافع أمام المحاكم.",
          &["وكالة", "توكيل", "خصومة"]),
        a("art-5", "التعويض عن الضرر", "المسؤولية",
          "كل خطأ سبب ضرراً للغير يلزم من ارتكبه بالتعويض، ويشمل التعويض ما لحق المتضرر من خسارة وما فاته من كسب.",
          &["تعويض", "ضرر", "مسؤولية"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    #[test]
    fn ids_are_unique_per_collection() {
        let case_ids: HashSet<String> = cases(today()).into_iter().map(|c| c.id).collect();
        assert_eq!(case_ids.len(), cases(today()).len());
        let customer_ids: HashSet<String> = customers().into_iter().map(|c| c.id).collect();
        assert_eq!(customer_ids.len(), customers().len());
    }

    #[test]
    fn case_clients_exist() {
        let known: HashSet<String> = customers().into_iter().map(|c| c.id).collect();
        for case in cases(today()) {
            assert!(known.contains(&case.client.id), "{} has unknown client", case.id);
        }
    }

    #[test]
    fn some_sessions_are_upcoming() {
        let upcoming = sessions(today())
            .into_iter()
            .filter(|s| s.status == SessionStatus::Upcoming && s.starts_at.date() >= today())
            .count();
        assert!(upcoming >= 3);
    }
}

//! In-memory office backend shared by server functions and REST handlers.

use chrono::{Local, NaiveDate};
use serde::Serialize;
use shared_types::{
    rank_articles, search_records, Agency, AppError, AssistantArticle, AuthUser, CaseStatus,
    Collection, CourtSession, Credentials, Customer, DashboardStats, Employee, FileUpload,
    FinancialRecord, LegalCase, LoginResponse, OfficeSettings, Record, Task,
};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::auth::jwt::{create_access_token, hash_token, validate_access_token};
use crate::directory::StaffDirectory;
use crate::fixtures;

/// Shown for any failed login so the form does not reveal which emails exist.
pub const INVALID_CREDENTIALS: &str = "البريد الإلكتروني أو كلمة المرور غير صحيحة";

static STORE: OnceLock<Arc<OfficeStore>> = OnceLock::new();

/// Process-wide store, seeded on first use relative to the local date.
pub fn office_store() -> Result<Arc<OfficeStore>, AppError> {
    if let Some(store) = STORE.get() {
        return Ok(store.clone());
    }
    let settings = crate::config::load_config().office.clone();
    let store = Arc::new(OfficeStore::seeded(today(), settings)?);
    Ok(STORE.get_or_init(|| store).clone())
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub struct OfficeStore {
    cases: RwLock<Vec<LegalCase>>,
    customers: Vec<Customer>,
    employees: Vec<Employee>,
    sessions: Vec<CourtSession>,
    finance: Vec<FinancialRecord>,
    tasks: Vec<Task>,
    agencies: Vec<Agency>,
    articles: Vec<AssistantArticle>,
    staff: StaffDirectory,
    revoked: RwLock<HashSet<String>>,
    settings: OfficeSettings,
}

fn to_json<T: Serialize>(value: &T) -> Result<serde_json::Value, AppError> {
    serde_json::to_value(value).map_err(|e| AppError::internal(format!("serializing: {e}")))
}

fn find_json<T: Record>(items: &[T], id: &str) -> Result<serde_json::Value, AppError> {
    let item = items
        .iter()
        .find(|r| r.id() == id)
        .ok_or_else(|| AppError::not_found(format!("السجل {id} غير موجود")))?;
    to_json(item)
}

impl OfficeStore {
    pub fn seeded(today: NaiveDate, settings: OfficeSettings) -> Result<Self, AppError> {
        Ok(Self {
            cases: RwLock::new(fixtures::cases(today)),
            customers: fixtures::customers(),
            employees: fixtures::employees(),
            sessions: fixtures::sessions(today),
            finance: fixtures::finance(today),
            tasks: fixtures::tasks(today),
            agencies: fixtures::agencies(today),
            articles: fixtures::articles(),
            staff: StaffDirectory::seeded()?,
            revoked: RwLock::new(HashSet::new()),
            settings: crate::config::sanitize_office(settings),
        })
    }

    pub fn settings(&self) -> &OfficeSettings {
        &self.settings
    }

    fn cases_snapshot(&self) -> Vec<LegalCase> {
        self.cases
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Records of a collection matching `query`, in seed order.
    pub fn list_json(&self, collection: Collection, query: &str) -> Result<serde_json::Value, AppError> {
        match collection {
            Collection::Cases => to_json(&search_records(&self.cases_snapshot(), query)),
            Collection::Customers => to_json(&search_records(&self.customers, query)),
            Collection::Employees => to_json(&search_records(&self.employees, query)),
            Collection::Finance => to_json(&search_records(&self.finance, query)),
            Collection::Sessions => to_json(&search_records(&self.sessions, query)),
            Collection::Tasks => to_json(&search_records(&self.tasks, query)),
            Collection::Agencies => to_json(&search_records(&self.agencies, query)),
            Collection::Articles => to_json(&search_records(&self.articles, query)),
        }
    }

    pub fn get_json(&self, collection: Collection, id: &str) -> Result<serde_json::Value, AppError> {
        match collection {
            Collection::Cases => find_json(&self.cases_snapshot(), id),
            Collection::Customers => find_json(&self.customers, id),
            Collection::Employees => find_json(&self.employees, id),
            Collection::Finance => find_json(&self.finance, id),
            Collection::Sessions => find_json(&self.sessions, id),
            Collection::Tasks => find_json(&self.tasks, id),
            Collection::Agencies => find_json(&self.agencies, id),
            Collection::Articles => find_json(&self.articles, id),
        }
    }

    pub fn case(&self, id: &str) -> Result<LegalCase, AppError> {
        self.cases_snapshot()
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::not_found("القضية غير موجودة"))
    }

    /// Move a case to another status. Only the four known status keys are
    /// accepted.
    pub fn update_case_status(&self, id: &str, status: &str) -> Result<LegalCase, AppError> {
        let status = CaseStatus::parse(status).ok_or_else(|| {
            AppError::validation(
                "حالة القضية غير صالحة",
                HashMap::from([("status".to_string(), format!("قيمة غير معروفة: {status}"))]),
            )
        })?;
        let mut cases = self.cases.write().unwrap_or_else(PoisonError::into_inner);
        let case = cases
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::not_found("القضية غير موجودة"))?;
        let previous = case.status;
        case.status = status;
        tracing::info!(case_id = id, from = previous.as_str(), to = status.as_str(), "case status changed");
        Ok(case.clone())
    }

    pub fn attach_files(&self, id: &str, files: Vec<FileUpload>) -> Result<LegalCase, AppError> {
        if files.is_empty() {
            return Err(AppError::bad_request("لم يتم اختيار أي ملف"));
        }
        if files.iter().any(|f| f.name.trim().is_empty()) {
            return Err(AppError::bad_request("اسم الملف مطلوب"));
        }
        let mut cases = self.cases.write().unwrap_or_else(PoisonError::into_inner);
        let case = cases
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::not_found("القضية غير موجودة"))?;
        let count = files.len();
        case.attach(files, Local::now().naive_local());
        tracing::info!(case_id = id, count, "files attached");
        Ok(case.clone())
    }

    pub fn dashboard(&self, today: NaiveDate) -> DashboardStats {
        DashboardStats::compute(
            &self.cases_snapshot(),
            &self.customers,
            &self.sessions,
            &self.finance,
            today,
        )
    }

    pub fn ask(&self, question: &str) -> Vec<AssistantArticle> {
        rank_articles(&self.articles, question)
    }

    /// Check credentials and issue a token. Bad credentials are a normal
    /// `success: false` answer, not an error.
    pub fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AppError> {
        let Some(user) = self.staff.authenticate(credentials) else {
            tracing::info!(email = credentials.email.trim(), "login rejected");
            return Ok(LoginResponse::rejected(INVALID_CREDENTIALS));
        };
        let token = create_access_token(&user, self.settings.token_ttl_minutes)?;
        tracing::info!(user_id = %user.id, "login succeeded");
        Ok(LoginResponse::ok(user, token))
    }

    /// Revoke a token. Unknown or already revoked tokens are accepted.
    pub fn logout(&self, token: &str) {
        self.revoked
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(hash_token(token));
    }

    pub fn current_user(&self, token: &str) -> Result<AuthUser, AppError> {
        let revoked = self
            .revoked
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&hash_token(token));
        if revoked {
            return Err(AppError::unauthorized("انتهت الجلسة"));
        }
        let claims = validate_access_token(token)
            .map_err(|_| AppError::unauthorized("رمز الدخول غير صالح أو منتهي"))?;
        self.staff
            .find(&claims.sub)
            .ok_or_else(|| AppError::unauthorized("المستخدم غير موجود"))
    }
}

use shared_types::{AppError, AuthUser, Credentials, StaffRole};

use crate::auth::password::{hash_password, verify_password};

/// Demo staff logins seeded into the mock backend: (id, name, email, password, role).
pub const DEMO_ACCOUNTS: &[(&str, &str, &str, &str, StaffRole)] = &[
    ("emp-1", "محمد العتيبي", "admin@office.test", "admin123", StaffRole::Admin),
    ("emp-2", "سارة القحطاني", "lawyer@office.test", "lawyer123", StaffRole::Lawyer),
    ("emp-5", "ريم الشهري", "secretary@office.test", "secretary123", StaffRole::Secretary),
];

struct StaffAccount {
    user: AuthUser,
    password_hash: String,
}

/// Staff members who can sign in, with argon2 password hashes.
pub struct StaffDirectory {
    accounts: Vec<StaffAccount>,
}

impl StaffDirectory {
    /// Build the directory from [`DEMO_ACCOUNTS`], hashing each password.
    pub fn seeded() -> Result<Self, AppError> {
        let accounts = DEMO_ACCOUNTS
            .iter()
            .map(|(id, name, email, password, role)| {
                let password_hash = hash_password(password)
                    .map_err(|e| AppError::internal(format!("hashing seed password: {e}")))?;
                Ok(StaffAccount {
                    user: AuthUser {
                        id: id.to_string(),
                        name: name.to_string(),
                        email: email.to_string(),
                        role: *role,
                    },
                    password_hash,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;
        Ok(Self { accounts })
    }

    /// Match credentials. Emails compare case-insensitively after trimming.
    pub fn authenticate(&self, credentials: &Credentials) -> Option<AuthUser> {
        let email = credentials.email.trim();
        let account = self
            .accounts
            .iter()
            .find(|a| a.user.email.eq_ignore_ascii_case(email))?;
        match verify_password(&credentials.password, &account.password_hash) {
            Ok(true) => Some(account.user.clone()),
            Ok(false) => None,
            Err(e) => {
                tracing::warn!(email, error = %e, "stored password hash is unreadable");
                None
            }
        }
    }

    pub fn find(&self, id: &str) -> Option<AuthUser> {
        self.accounts
            .iter()
            .find(|a| a.user.id == id)
            .map(|a| a.user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn authenticates_demo_accounts() {
        let dir = StaffDirectory::seeded().unwrap();
        let user = dir.authenticate(&creds(" Lawyer@Office.test ", "lawyer123")).unwrap();
        assert_eq!(user.id, "emp-2");
        assert_eq!(user.role, StaffRole::Lawyer);
    }

    #[test]
    fn rejects_wrong_password_and_unknown_email() {
        let dir = StaffDirectory::seeded().unwrap();
        assert!(dir.authenticate(&creds("lawyer@office.test", "nope")).is_none());
        assert!(dir.authenticate(&creds("ghost@office.test", "lawyer123")).is_none());
    }

    #[test]
    fn find_by_id() {
        let dir = StaffDirectory::seeded().unwrap();
        assert_eq!(dir.find("emp-5").unwrap().role, StaffRole::Secretary);
        assert!(dir.find("emp-99").is_none());
    }
}

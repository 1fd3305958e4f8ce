use serde::{Deserialize, Serialize};

use crate::common::labeled_enum;

labeled_enum! {
    StaffRole {
        Admin => ("admin", "مدير"),
        Lawyer => ("lawyer", "محامٍ"),
        Secretary => ("secretary", "سكرتير"),
    }
}

/// Email/password pair submitted by the login form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// The signed-in staff member as seen by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: StaffRole,
}

impl AuthUser {
    /// Up to two initials for the avatar bubble.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect()
    }
}

/// Payload of a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginData {
    pub user: AuthUser,
    pub token: String,
}

/// Response envelope of the login call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<LoginData>,
    #[serde(default)]
    pub message: String,
}

impl LoginResponse {
    pub fn ok(user: AuthUser, token: String) -> Self {
        Self {
            success: true,
            data: Some(LoginData { user, token }),
            message: String::new(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: message.into(),
        }
    }
}

/// Response envelope of the current-user call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<AuthUser>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_login_has_no_data() {
        let resp = LoginResponse::rejected("بيانات الدخول غير صحيحة");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("data").is_none());
    }

    #[test]
    fn initials_take_first_two_words() {
        let user = AuthUser {
            id: "u1".into(),
            name: "سارة عبدالله القحطاني".into(),
            email: "sara@office.test".into(),
            role: StaffRole::Lawyer,
        };
        assert_eq!(user.initials(), "سع");
    }
}

use serde::{Deserialize, Serialize};

/// Name of the signed cookie holding the logged-in user
pub const SESSION_COOKIE: &str = "session";

/// Logged-in user, as carried by the session cookie
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub user_id: i64,
    pub username: String,
}

impl SessionUser {
    /// Cookie value: `<user_id>:<username>`
    pub fn to_cookie_value(&self) -> String {
        format!("{}:{}", self.user_id, self.username)
    }

    pub fn from_cookie_value(value: &str) -> Option<Self> {
        let (id, username) = value.split_once(':')?;
        Some(Self {
            user_id: id.parse().ok()?,
            username: username.to_string(),
        })
    }
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value_keeps_colons_in_username() {
        let user = SessionUser {
            user_id: 3,
            username: "dj:night".to_string(),
        };
        assert_eq!(user.to_cookie_value(), "3:dj:night");
        assert_eq!(SessionUser::from_cookie_value("3:dj:night"), Some(user));
    }

    #[test]
    fn test_malformed_cookie_value() {
        assert_eq!(SessionUser::from_cookie_value("admin"), None);
        assert_eq!(SessionUser::from_cookie_value("x:admin"), None);
    }
}

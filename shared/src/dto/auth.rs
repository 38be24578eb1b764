use serde::{Deserialize, Serialize};

use super::id::deserialize_id;

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
}

/// Authentication response (login/register success)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    #[serde(alias = "token")]
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: UserInfo,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Signed-in user as persisted in local storage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_accepts_token_alias() {
        let json = r#"{"token":"abc","user":{"id":3,"name":"Asha","email":"a@b.in"}}"#;
        let resp: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.access_token, "abc");
        assert_eq!(resp.token_type, "bearer");
        assert_eq!(resp.user.id, "3");
        assert_eq!(resp.user.phone, None);
    }

    #[test]
    fn test_register_request_omits_missing_phone() {
        let req = RegisterRequest {
            name: "Asha".to_string(),
            email: "a@b.in".to_string(),
            phone: None,
            password: "secret1".to_string(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert!(value.get("phone").is_none());
    }
}

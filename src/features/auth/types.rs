//! Request and response types for the auth API. Wire field names follow the
//! backend's schemas (`first_Name`/`last_Name` casing included), so every
//! rename lives here and nowhere else.

use serde::{Deserialize, Serialize};

/// Success payload of `POST /api/token`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

/// Body of `POST /register`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "first_Name")]
    pub first_name: String,
    #[serde(rename = "last_Name")]
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/forgot-password`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Body of `POST /api/auth/reset-password`. The token comes from the email
/// link, the code is the 6-digit confirmation the user types in.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub code: String,
    pub new_password: String,
}

/// `{message}` payload returned by the password-reset endpoints.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// Profile fields returned by `GET /users/me`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "first_Name")]
    pub first_name: String,
    #[serde(rename = "last_Name")]
    pub last_name: String,
    pub username: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_uses_backend_field_casing() {
        let request = RegisterRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "correct-horse".to_string(),
        };

        let json = serde_json::to_string(&request).expect("Failed to serialize");
        assert!(json.contains("\"first_Name\":\"Ada\""));
        assert!(json.contains("\"last_Name\":\"Lovelace\""));
        assert!(!json.contains("first_name"));
    }

    #[test]
    fn user_profile_deserializes_backend_casing() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"first_Name":"Ada","last_Name":"Lovelace","username":"ada","email":"ada@example.com"}"#,
        )
        .expect("Failed to deserialize");

        assert_eq!(profile.first_name, "Ada");
        assert_eq!(profile.last_name, "Lovelace");
        assert_eq!(profile.username, "ada");
    }

    #[test]
    fn token_response_tolerates_missing_token_type() {
        let response: TokenResponse =
            serde_json::from_str(r#"{"access_token":"abc.def.ghi"}"#).expect("Failed to deserialize");

        assert_eq!(response.access_token, "abc.def.ghi");
        assert_eq!(response.token_type, None);
    }
}

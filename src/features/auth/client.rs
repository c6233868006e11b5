//! Client wrappers for the auth API endpoints. These helpers centralize the
//! wire contracts (form-encoded login, JSON everywhere else, bearer headers
//! for protected calls) so route code never builds requests by hand.

use crate::{
    app_lib::{
        AppError, get_empty_with_bearer, get_json_with_bearer, post_form, post_json,
        post_json_empty,
    },
    features::auth::types::{
        ApiMessage, ForgotPasswordRequest, RegisterRequest, ResetPasswordRequest, TokenResponse,
        UserProfile,
    },
};

/// Exchanges credentials for a bearer token. The endpoint expects a
/// form-encoded body, not JSON.
pub async fn login(username: &str, password: &str) -> Result<TokenResponse, AppError> {
    post_form("/api/token", &[("username", username), ("password", password)]).await
}

/// Creates a new account. The success payload is not consumed.
pub async fn register(request: &RegisterRequest) -> Result<(), AppError> {
    post_json_empty("/register", request).await
}

/// Requests a password-reset email with a link and 6-digit code.
pub async fn forgot_password(email: &str) -> Result<ApiMessage, AppError> {
    post_json(
        "/api/auth/forgot-password",
        &ForgotPasswordRequest {
            email: email.to_string(),
        },
    )
    .await
}

/// Submits the reset token, confirmation code and new password.
pub async fn reset_password(request: &ResetPasswordRequest) -> Result<ApiMessage, AppError> {
    post_json("/api/auth/reset-password", request).await
}

/// Asks the API whether the bearer token is still accepted. Only the status
/// matters; any non-2xx answer means the session is gone server-side.
pub async fn verify_token(token: &str) -> Result<(), AppError> {
    get_empty_with_bearer("/verify-token", token).await
}

/// Fetches the authenticated user's profile for the dashboard.
pub async fn fetch_profile(token: &str) -> Result<UserProfile, AppError> {
    get_json_with_bearer("/users/me", token).await
}

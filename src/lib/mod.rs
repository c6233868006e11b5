//! Shared frontend utilities for API access, configuration and errors.
//!
//! ## Core Authentication Flow
//!
//! 1. **Login:** The client POSTs form-encoded credentials to `/api/token`
//!    and stores the returned bearer token under the `access_token` key in
//!    local storage.
//! 2. **Route gating:** On every navigation the session guard inspects the
//!    stored token locally (claims-segment decode + expiry check) and either
//!    renders the route or redirects. No network call is involved.
//! 3. **Protected data:** The dashboard sends the token as an
//!    `Authorization: Bearer` header to `/verify-token` and `/users/me`;
//!    any failure purges the token and falls back to the login screen.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Callers must still avoid
//! logging token material.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod config;
pub(crate) mod errors;

#[cfg(target_arch = "wasm32")]
pub(crate) const GIT_COMMIT_HASH: &str = env!("AUTH_WEB_GIT_SHA");

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{
    get_empty_with_bearer, get_json_with_bearer, post_form, post_json, post_json_empty,
};
pub(crate) use errors::AppError;

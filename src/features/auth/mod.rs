//! Auth feature module covering the local session guard, token storage and
//! the auth API client. The guard decides route access from the stored
//! bearer token alone and never talks to the network; real access control
//! lives on the API. This module touches security boundaries and must avoid
//! logging token material.
//!
//! Flow Overview: Login stores the bearer token under `access_token`. Route
//! gates evaluate the token's claims segment locally on every navigation.
//! Logout and any detected invalidity purge the stored credential.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
#[cfg(target_arch = "wasm32")]
mod guards;
pub(crate) mod session;
pub(crate) mod storage;
pub(crate) mod types;
pub(crate) mod validation;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::{ProtectedGate, PublicGate};

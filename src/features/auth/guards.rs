//! Route gates around the public and protected route groups. Each gate runs
//! one fresh guard evaluation when the route is entered; nothing is cached
//! across navigations. This is UX-only gating; the API re-checks the token
//! on every protected call.

use crate::features::auth::session::{self, Decision};
use crate::features::auth::storage::BrowserTokens;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::{NavigateOptions, components::Outlet, hooks::use_navigate};

/// Wraps the public route group (login, register, password reset). A live
/// session skips straight to the dashboard.
#[component]
pub fn PublicGate() -> impl IntoView {
    let decision = session::evaluate_for_public(&BrowserTokens);
    let navigate = use_navigate();

    Effect::new(move |_| {
        if decision == Decision::RedirectToDashboard {
            navigate(paths::DASHBOARD, replace_navigation());
        }
    });

    move || (decision == Decision::Allow).then(|| view! { <Outlet /> })
}

/// Wraps the protected route group (dashboard and children). Invalid or
/// expired sessions bounce back to the login screen.
#[component]
pub fn ProtectedGate() -> impl IntoView {
    let decision = session::evaluate_for_protected(&BrowserTokens);
    let navigate = use_navigate();

    Effect::new(move |_| {
        if decision == Decision::RedirectToLogin {
            navigate(paths::LOGIN, replace_navigation());
        }
    });

    move || (decision == Decision::Allow).then(|| view! { <Outlet /> })
}

/// Redirects replace the history entry so "back" never lands on a gated
/// page the user was just bounced from.
fn replace_navigation() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..Default::default()
    }
}

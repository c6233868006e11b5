mod dashboard;
mod forgot_password;
mod login;
mod not_found;
mod register;
mod reset_password;

pub(crate) use dashboard::DashboardPage;
pub(crate) use forgot_password::ForgotPasswordPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use register::RegisterPage;
pub(crate) use reset_password::ResetPasswordPage;

use crate::features::auth::{ProtectedGate, PublicGate};
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Routes};
use leptos_router::path;

/// Route constants shared by gates, links and redirects.
pub(crate) mod paths {
    pub const LOGIN: &str = "/";
    pub const REGISTER: &str = "/register";
    pub const FORGOT_PASSWORD: &str = "/forgot-password";
    pub const RESET_PASSWORD: &str = "/reset-password";
    pub const DASHBOARD: &str = "/dashboard";
}

/// Two mutually exclusive route groups: the public screens behind
/// `PublicGate` and the dashboard behind `ProtectedGate`.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <ParentRoute path=path!("") view=PublicGate>
                <Route path=path!("") view=LoginPage />
                <Route path=path!("register") view=RegisterPage />
                <Route path=path!("forgot-password") view=ForgotPasswordPage />
                <Route path=path!("reset-password") view=ResetPasswordPage />
            </ParentRoute>
            <ParentRoute path=path!("dashboard") view=ProtectedGate>
                <Route path=path!("") view=DashboardPage />
            </ParentRoute>
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}

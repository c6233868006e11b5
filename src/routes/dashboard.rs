//! Dashboard route, the only protected screen. The route gate already
//! checked the token's expiry locally; on mount this screen additionally
//! confirms the session with the API and loads the profile. A rejected
//! token purges the stored credentials and sends the user back to login.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, Sidebar, Spinner};
use crate::features::auth::{
    client, session,
    storage::{BrowserTokens, TokenStore},
    types::UserProfile,
};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let navigate = use_navigate();

    let profile = LocalResource::new(|| async {
        let Some(token) = BrowserTokens.get(session::ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
        else {
            return Err(AppError::Api {
                status: 401,
                detail: "Not signed in".to_string(),
            });
        };
        client::verify_token(&token).await?;
        client::fetch_profile(&token).await
    });

    // A server-side rejection means the local token lied; drop it and start over.
    Effect::new(move |_| {
        if let Some(Err(err)) = profile.get() {
            if err.is_unauthorized() {
                session::clear_session(&BrowserTokens);
                navigate(paths::LOGIN, Default::default());
            }
        }
    });

    view! {
        <div class="flex min-h-screen bg-gray-50">
            <Sidebar />
            <main class="flex-1 px-6 py-8 md:px-10">
                <Suspense fallback=move || view! { <div class="mt-16"><Spinner /></div> }>
                    {move || match profile.get() {
                        None => ().into_any(),
                        Some(Ok(user)) => view! { <ProfilePanel user=user /> }.into_any(),
                        Some(Err(err)) => {
                            view! {
                                <div class="max-w-lg mt-8">
                                    <Alert kind=AlertKind::Error message=err.user_message() />
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </Suspense>
            </main>
        </div>
    }
}

#[component]
fn ProfilePanel(user: UserProfile) -> impl IntoView {
    let full_name = format!("{} {}", user.first_name, user.last_name);

    view! {
        <header class="mb-8">
            <h1 class="text-2xl font-bold text-gray-900">
                {format!("Welcome back, {}!", user.first_name)}
            </h1>
            <p class="mt-1 text-sm text-gray-500">"Here's an overview of your account."</p>
        </header>
        <section class="grid grid-cols-1 gap-4 sm:grid-cols-2 max-w-3xl">
            <ProfileCard label="Name" value=full_name />
            <ProfileCard label="Username" value=user.username />
            <ProfileCard label="Email" value=user.email />
            <ProfileCard label="Status" value="Active".to_string() />
        </section>
    }
}

#[component]
fn ProfileCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="rounded-xl border border-gray-200 bg-white p-5 shadow-sm">
            <p class="text-xs font-semibold uppercase tracking-wider text-gray-500">{label}</p>
            <p class="mt-1 text-lg font-medium text-gray-900 break-words">{value}</p>
        </div>
    }
}

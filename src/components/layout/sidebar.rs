//! Side navigation for the authenticated area. Sign-out clears every
//! credential key before returning to the login screen.

use crate::app_lib::GIT_COMMIT_HASH;
use crate::features::auth::{session, storage::BrowserTokens};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::{use_location, use_navigate}};

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let pathname = move || location.pathname.get();
    let navigate = use_navigate();

    let on_sign_out = move |_| {
        session::clear_session(&BrowserTokens);
        navigate(paths::LOGIN, Default::default());
    };

    view! {
        <aside class="w-64 flex-shrink-0 hidden md:flex flex-col border-r border-gray-200 bg-white overflow-y-auto">
            <nav class="flex-1 px-4 py-6 space-y-8">
                <div>
                    <h3 class="px-2 text-xs font-semibold text-gray-500 uppercase tracking-wider">
                        "Account"
                    </h3>
                    <div class="mt-2 space-y-1">
                        <SidebarLink
                            target=paths::DASHBOARD
                            icon="dashboard"
                            label="Dashboard"
                            active=move || pathname() == paths::DASHBOARD
                        />
                    </div>
                </div>
            </nav>

            <div class="p-4 border-t border-gray-100 space-y-3">
                <button
                    type="button"
                    class="w-full flex items-center justify-center gap-2 rounded-lg bg-red-600 px-4 py-2 text-sm font-medium text-white transition hover:bg-red-700"
                    on:click=on_sign_out
                >
                    <span class="material-symbols-outlined text-base">"logout"</span>
                    "Sign Out"
                </button>
                <p class="text-[10px] text-gray-400 font-mono text-center uppercase tracking-tighter">
                    {format!("build {GIT_COMMIT_HASH}")}
                </p>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink<F>(
    target: &'static str,
    icon: &'static str,
    label: &'static str,
    active: F,
) -> impl IntoView
where
    F: Fn() -> bool + Clone + Send + Sync + 'static,
{
    let text_active = active.clone();
    let background_active = active.clone();
    let text_inactive = active.clone();
    let hover_inactive = active.clone();

    view! {
        <A
            href=move || target.to_string()
            {..}
            attr:class="group flex items-center px-2 py-2 text-sm font-medium rounded-md transition-colors"
            class:text-blue-600=move || text_active()
            class:bg-blue-50=move || background_active()
            class:text-gray-600=move || !text_inactive()
            class:hover:bg-gray-50=move || !hover_inactive()
        >
            <span class="material-symbols-outlined mr-3 text-xl transition-colors"
                class:text-blue-600=move || active()
            >
                {icon}
            </span>
            {label}
        </A>
    }
}

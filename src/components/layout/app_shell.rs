//! Shared wrapper for the public screens: a slim brand header and a
//! centered content container. The protected area uses the sidebar layout
//! instead.

use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps public routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-gradient-to-br from-blue-50 via-white to-purple-50">
            <header class="border-b border-gray-100 bg-white/80 backdrop-blur">
                <div class="max-w-screen-xl flex items-center justify-between mx-auto p-4">
                    <A href="/" {..} class="flex items-center space-x-3">
                        <span class="flex h-8 w-8 items-center justify-center rounded-full bg-gradient-to-br from-blue-500 to-purple-600 text-sm font-bold text-white">
                            "A"
                        </span>
                        <span class="font-semibold whitespace-nowrap text-gray-900">
                            "AES Account"
                        </span>
                    </A>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
        </div>
    }
}

use leptos::prelude::*;

/// Indeterminate activity indicator shown while a request is in flight.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="flex justify-center" role="status" aria-live="polite" aria-label="Loading">
            <div class="h-8 w-8 animate-spin rounded-full border-[3px] border-purple-100 border-t-blue-600"></div>
        </div>
    }
}

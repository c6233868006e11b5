//! Centered overlay dialog used by the registration flow for its success
//! and failure states.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Visual treatment of the dialog.
pub enum ModalKind {
    Success,
    Error,
}

/// Renders an overlay dialog while `show` is true. The backdrop and the
/// dismiss button both invoke `on_close`.
#[component]
pub fn Modal(
    kind: ModalKind,
    title: &'static str,
    #[prop(into)] message: Signal<String>,
    #[prop(into)] show: Signal<bool>,
    on_close: Callback<()>,
) -> impl IntoView {
    let badge_class = match kind {
        ModalKind::Success => "mx-auto mb-4 flex h-12 w-12 items-center justify-center rounded-full bg-green-100 text-green-600 text-2xl",
        ModalKind::Error => "mx-auto mb-4 flex h-12 w-12 items-center justify-center rounded-full bg-red-100 text-red-600 text-2xl",
    };
    let badge_glyph = match kind {
        ModalKind::Success => "✓",
        ModalKind::Error => "!",
    };

    view! {
        <Show when=move || show.get()>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center bg-black/40 px-4"
                on:click=move |_| on_close.run(())
            >
                <div
                    class="w-full max-w-sm rounded-2xl bg-white p-6 text-center shadow-xl"
                    on:click=move |event| event.stop_propagation()
                >
                    <div class=badge_class>{badge_glyph}</div>
                    <h2 class="mb-2 text-xl font-bold text-gray-900">{title}</h2>
                    <p class="mb-6 text-sm text-gray-600">{move || message.get()}</p>
                    <button
                        type="button"
                        class="w-full rounded-lg bg-gray-900 py-2 text-sm font-semibold text-white hover:opacity-90"
                        on:click=move |_| on_close.run(())
                    >
                        "Close"
                    </button>
                </div>
            </div>
        </Show>
    }
}

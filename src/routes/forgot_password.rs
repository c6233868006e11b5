//! Forgot-password route: takes an email address and asks the API to send a
//! reset link with a 6-digit confirmation code. The API's `{message}`
//! payload is shown inline on success.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::{client, validation::validate_email};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (sent_message, set_sent_message) = signal::<Option<String>>(None);

    let request_action = Action::new_local(move |email: &String| {
        let email = email.clone();
        async move { client::forgot_password(&email).await }
    });

    Effect::new(move |_| {
        if let Some(result) = request_action.value().get() {
            match result {
                Ok(response) => set_sent_message.set(Some(response.message)),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_sent_message.set(None);

        let email_value = email.get_untracked().trim().to_string();
        if let Err(message) = validate_email(&email_value) {
            set_error.set(Some(AppError::Config(message)));
            return;
        }

        request_action.dispatch(email_value);
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-2 text-2xl font-bold text-gray-900">"Forgot your password?"</h1>
                <p class="mb-6 text-sm text-gray-600">
                    "Enter your email and we'll send you a reset link with a confirmation code."
                </p>
                <div class="mb-5">
                    <label class="block mb-2 text-sm font-medium text-gray-900" for="email">
                        "Email Address"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5"
                        placeholder="you@example.com"
                        autocomplete="email"
                        required
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=request_action.pending()>
                    {move || {
                        if request_action.pending().get() { "Sending..." } else { "Send Reset Link" }
                    }}
                </Button>
                {move || {
                    request_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    sent_message
                        .get()
                        .map(|message| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Success message=message />
                                </div>
                            }
                        })
                }}
                {move || {
                    error
                        .get()
                        .map(|err| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=err.user_message() />
                                </div>
                            }
                        })
                }}
                <div class="mt-6 text-center text-sm">
                    <A href=paths::LOGIN {..} class="font-medium text-blue-700 hover:underline">
                        "Back to login"
                    </A>
                </div>
            </form>
        </AppShell>
    }
}

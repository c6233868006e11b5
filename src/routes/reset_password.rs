//! Reset-password route. The reset token arrives in the `token` query
//! parameter of the emailed link; the user supplies the 6-digit code from
//! the same email plus a new password. Without a token the form refuses to
//! submit, since the API would reject the request anyway.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::{
    client,
    types::ResetPasswordRequest,
    validation::{validate_new_password, validate_reset_code},
};
use crate::routes::paths;
use gloo_timers::callback::Timeout;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{
    components::A,
    hooks::{use_navigate, use_query_map},
};

/// Milliseconds the success message stays up before redirecting to login.
const SUCCESS_REDIRECT_MS: u32 = 1_200;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let navigate = use_navigate();
    let query = use_query_map();
    let reset_token = Memo::new(move |_| query.with(|map| map.get("token").unwrap_or_default()));

    let (code, set_code) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (done_message, set_done_message) = signal::<Option<String>>(None);

    let reset_action = Action::new_local(move |request: &ResetPasswordRequest| {
        let request = request.clone();
        async move { client::reset_password(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = reset_action.value().get() {
            match result {
                Ok(response) => set_done_message.set(Some(response.message)),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let navigate_after_success = navigate.clone();
    Effect::new(move |_| {
        if done_message.get().is_some() {
            let navigate = navigate_after_success.clone();
            Timeout::new(SUCCESS_REDIRECT_MS, move || {
                navigate(paths::LOGIN, Default::default());
            })
            .forget();
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let token = reset_token.get_untracked();
        if token.is_empty() {
            set_error.set(Some(AppError::Config(
                "This reset link is invalid. Please request a new one.".to_string(),
            )));
            return;
        }
        let code_value = code.get_untracked();
        if let Err(message) = validate_reset_code(&code_value) {
            set_error.set(Some(AppError::Config(message)));
            return;
        }
        let password_value = new_password.get_untracked();
        if let Err(message) = validate_new_password(&password_value) {
            set_error.set(Some(AppError::Config(message)));
            return;
        }

        reset_action.dispatch(ResetPasswordRequest {
            token,
            code: code_value,
            new_password: password_value,
        });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-2 text-2xl font-bold text-gray-900">"Reset your password"</h1>
                <p class="mb-6 text-sm text-gray-600">
                    "Enter the 6-digit code from your email and choose a new password."
                </p>
                {move || {
                    reset_token
                        .get()
                        .is_empty()
                        .then_some(view! {
                            <div class="mb-4">
                                <Alert
                                    kind=AlertKind::Error
                                    message="This reset link is missing its token. Please use the link from your email or request a new one."
                                />
                            </div>
                        })
                }}
                <div class="mb-5">
                    <label class="block mb-2 text-sm font-medium text-gray-900" for="code">
                        "Confirmation Code"
                    </label>
                    <input
                        id="code"
                        type="text"
                        inputmode="numeric"
                        maxlength="6"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg tracking-widest focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5"
                        placeholder="123456"
                        required
                        prop:value=code
                        on:input=move |event| {
                            let digits: String = event_target_value(&event)
                                .chars()
                                .filter(char::is_ascii_digit)
                                .take(6)
                                .collect();
                            set_code.set(digits);
                        }
                    />
                </div>
                <div class="mb-5">
                    <label class="block mb-2 text-sm font-medium text-gray-900" for="new_password">
                        "New Password"
                    </label>
                    <input
                        id="new_password"
                        type="password"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5"
                        placeholder="At least 8 characters"
                        autocomplete="new-password"
                        required
                        on:input=move |event| set_new_password.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=reset_action.pending()>
                    {move || {
                        if reset_action.pending().get() { "Resetting..." } else { "Reset Password" }
                    }}
                </Button>
                {move || {
                    reset_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    done_message
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

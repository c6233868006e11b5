//! Registration route. Validates all fields locally before calling the API
//! (names, username, email shape, password strength, confirmation match),
//! then shows a success modal and returns to the login screen. API failures
//! land in an error modal; nothing propagates past this screen.

use crate::components::{AppShell, Button, Modal, ModalKind, Spinner};
use crate::features::auth::validation::{
    PasswordStrength, password_strength, validate_email, validate_name, validate_username,
};
use crate::features::auth::{client, types::RegisterRequest};
use crate::routes::paths;
use gloo_timers::callback::Timeout;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

/// Milliseconds the success modal stays up before redirecting to login.
const SUCCESS_REDIRECT_MS: u32 = 2_000;

#[derive(Clone, Default)]
struct FieldErrors {
    first_name: Option<String>,
    last_name: Option<String>,
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
    confirm_password: Option<String>,
}

impl FieldErrors {
    fn any(&self) -> bool {
        self.first_name.is_some()
            || self.last_name.is_some()
            || self.username.is_some()
            || self.email.is_some()
            || self.password.is_some()
            || self.confirm_password.is_some()
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let (api_error, set_api_error) = signal(String::new());
    let (show_success, set_show_success) = signal(false);
    let (show_error, set_show_error) = signal(false);

    let strength = Memo::new(move |_| {
        let value = password.get();
        if value.is_empty() {
            None
        } else {
            Some(password_strength(&value))
        }
    });

    let mismatch = Memo::new(move |_| {
        let confirm = confirm_password.get();
        !confirm.is_empty() && confirm != password.get()
    });

    let register_action = Action::new_local(move |request: &RegisterRequest| {
        let request = request.clone();
        async move { client::register(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(()) => set_show_success.set(true),
                Err(err) => {
                    set_api_error.set(err.user_message());
                    set_show_error.set(true);
                }
            }
        }
    });

    let navigate_after_success = navigate.clone();
    Effect::new(move |_| {
        if show_success.get() {
            let navigate = navigate_after_success.clone();
            Timeout::new(SUCCESS_REDIRECT_MS, move || {
                navigate(paths::LOGIN, Default::default());
            })
            .forget();
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_api_error.set(String::new());

        let mut next = FieldErrors::default();
        next.first_name = validate_name(first_name.get_untracked().trim(), "First name").err();
        next.last_name = validate_name(last_name.get_untracked().trim(), "Last name").err();
        next.username = validate_username(username.get_untracked().trim()).err();
        next.email = validate_email(email.get_untracked().trim()).err();

        let password_value = password.get_untracked();
        if password_value.is_empty() {
            next.password = Some("Password is required".to_string());
        } else if !password_strength(&password_value).is_acceptable() {
            next.password =
                Some("Password is too weak. Please choose a stronger password".to_string());
        }
        if password_value != confirm_password.get_untracked() {
            next.confirm_password = Some("Passwords do not match".to_string());
        }

        if next.any() {
            errors.set(next);
            set_show_error.set(true);
            return;
        }
        errors.set(next);

        register_action.dispatch(RegisterRequest {
            first_name: first_name.get_untracked().trim().to_string(),
            last_name: last_name.get_untracked().trim().to_string(),
            username: username.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password_value,
        });
    };

    let error_modal_message = Signal::derive(move || {
        let api = api_error.get();
        if api.is_empty() {
            "Please fix the highlighted fields and try again.".to_string()
        } else {
            api
        }
    });

    view! {
        <AppShell>
            <form class="max-w-2xl mx-auto" on:submit=on_submit>
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold text-gray-900 mb-2">"Create Account"</h1>
                    <p class="text-gray-600">"Join us today and get started"</p>
                </div>

                <div class="flex gap-4">
                    <FieldInput
                        id="first_name"
                        label="First Name"
                        input_type="text"
                        placeholder="Enter your first name"
                        on_change=set_first_name
                        error=Signal::derive(move || errors.get().first_name)
                    />
                    <FieldInput
                        id="last_name"
                        label="Last Name"
                        input_type="text"
                        placeholder="Enter your last name"
                        on_change=set_last_name
                        error=Signal::derive(move || errors.get().last_name)
                    />
                </div>

                <FieldInput
                    id="username"
                    label="Username"
                    input_type="text"
                    placeholder="Choose a username"
                    on_change=set_username
                    error=Signal::derive(move || errors.get().username)
                />
                <FieldInput
                    id="email"
                    label="Email Address"
                    input_type="email"
                    placeholder="Enter your email"
                    on_change=set_email
                    error=Signal::derive(move || errors.get().email)
                />
                <FieldInput
                    id="password"
                    label="Password"
                    input_type="password"
                    placeholder="Create a strong password"
                    on_change=set_password
                    error=Signal::derive(move || errors.get().password)
                />

                {move || {
                    strength
                        .get()
                        .map(|level| {
                            let (text_class, bar_class) = match level {
                                PasswordStrength::Weak => ("text-red-600", "bg-red-600 w-1/3"),
                                PasswordStrength::Medium => {
                                    ("text-yellow-600", "bg-yellow-500 w-2/3")
                                }
                                PasswordStrength::Strong => ("text-green-600", "bg-green-600 w-full"),
                            };
                            view! {
                                <div class="mb-4 -mt-3">
                                    <span class=format!("text-sm font-semibold {text_class}")>
                                        {level.label()}
                                    </span>
                                    <div class="mt-1 w-full h-2 bg-gray-200 rounded-full overflow-hidden">
                                        <div class=format!("h-2 rounded-full transition-all {bar_class}")></div>
                                    </div>
                                </div>
                            }
                        })
                }}

                <FieldInput
                    id="confirm_password"
                    label="Confirm Password"
                    input_type="password"
                    placeholder="Re-type password"
                    on_change=set_confirm_password
                    error=Signal::derive(move || errors.get().confirm_password)
                />
                {move || {
                    mismatch
                        .get()
                        .then_some(view! {
                            <p class="-mt-3 mb-4 text-sm text-red-600">"Passwords do not match"</p>
                        })
                }}

                <Button
                    button_type="submit"
                    disabled=Signal::derive(move || {
                        mismatch.get() || register_action.pending().get()
                    })
                >
                    {move || {
                        if register_action.pending().get() {
                            "Creating Account..."
                        } else {
                            "Register"
                        }
                    }}
                </Button>
                {move || {
                    register_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}

                <div class="mt-6 text-center text-sm text-gray-500">
                    "Already have an account? "
                    <A href=paths::LOGIN {..} class="font-medium text-blue-700 hover:underline">
                        "Sign in"
                    </A>
                </div>

                <Modal
                    kind=ModalKind::Success
                    title="Account created"
                    message=Signal::derive(|| "Redirecting you to the login page...".to_string())
                    show=show_success
                    on_close=Callback::new(move |()| set_show_success.set(false))
                />
                <Modal
                    kind=ModalKind::Error
                    title="Registration failed"
                    message=error_modal_message
                    show=show_error
                    on_close=Callback::new(move |()| set_show_error.set(false))
                />
            </form>
        </AppShell>
    }
}

/// Labeled input with an optional per-field error line.
#[component]
fn FieldInput(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    on_change: WriteSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="mb-5 flex-1">
            <label class="block mb-2 text-sm font-medium text-gray-700" for=id>
                {label}
            </label>
            <input
                id=id
                type=input_type
                placeholder=placeholder
                class="w-full px-4 py-2.5 border rounded-lg text-sm focus:ring-2 focus:ring-blue-500 focus:border-transparent outline-none"
                class:border-red-500=move || error.get().is_some()
                class:border-gray-300=move || error.get().is_none()
                on:input=move |event| on_change.set(event_target_value(&event))
            />
            {move || {
                error
                    .get()
                    .map(|message| view! { <p class="mt-1 text-sm text-red-600">{message}</p> })
            }}
        </div>
    }
}

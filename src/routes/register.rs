use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, Button, TextField};
use crate::features::auth::accounts;
use crate::features::auth::state::use_session;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (name_error, set_name_error) = signal::<Option<String>>(None);
    let (email_error, set_email_error) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<AppError>>(None);

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let name_check = accounts::validate_display_name(&name.get_untracked());
        let email_check = accounts::validate_email(&email.get_untracked());
        set_name_error.set(name_check.as_ref().err().map(ToString::to_string));
        set_email_error.set(email_check.as_ref().err().map(ToString::to_string));
        let (Ok(name_value), Ok(email_value)) = (name_check, email_check) else {
            return;
        };

        match accounts::register(&session.accounts_key(), &name_value, &email_value) {
            Ok(user) => {
                session.sign_in(user);
                navigate(paths::PAYMENT_REQUIRED, Default::default());
            }
            Err(AppError::Validation(message)) => set_email_error.set(Some(message)),
            Err(err) => set_error.set(Some(err)),
        }
    };

    view! {
        <form class="max-w-sm mx-auto" on:submit=on_submit>
            <h1 class="mb-6 text-2xl font-bold text-gray-900 dark:text-white">"Become a member"</h1>
            <TextField
                id="display-name"
                label="Your name"
                error=name_error
                on_input=Callback::new(move |value: String| {
                    set_name.set(value);
                    set_name_error.set(None);
                })
                {..}
                type="text"
                autocomplete="name"
                required=true
            />
            <TextField
                id="email"
                label="Your email"
                error=email_error
                on_input=Callback::new(move |value: String| {
                    set_email.set(value);
                    set_email_error.set(None);
                })
                {..}
                type="email"
                autocomplete="email"
                placeholder="name@example.org"
                required=true
            />
            <Button button_type="submit">"Create account"</Button>
            {move || {
                error
                    .get()
                    .map(|err| {
                        view! {
                            <div class="mt-4">
                                <Alert kind=AlertKind::Error message=err.to_string() />
                            </div>
                        }
                    })
            }}
        </form>
    }
}

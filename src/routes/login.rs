use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, Button, TextField};
use crate::features::auth::accounts;
use crate::features::auth::state::use_session;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::html::Input;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let email_ref = NodeRef::<Input>::new();
    let (email, set_email) = signal(String::new());
    let (email_error, set_email_error) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<AppError>>(None);

    Effect::new(move |_| {
        if let Some(input) = email_ref.get() {
            let _ = input.focus();
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = match accounts::validate_email(&email.get_untracked()) {
            Ok(value) => value,
            Err(err) => {
                set_email_error.set(Some(err.to_string()));
                return;
            }
        };

        match accounts::find(&session.accounts_key(), &email_value) {
            Ok(Some(user)) => {
                session.sign_in(user);
                navigate(paths::DASHBOARD, Default::default());
            }
            Ok(None) => set_email_error.set(Some(
                "No account is registered with this email.".to_string(),
            )),
            Err(err) => set_error.set(Some(err)),
        }
    };

    view! {
        <form class="max-w-sm mx-auto" on:submit=on_submit>
            <h1 class="mb-6 text-2xl font-bold text-gray-900 dark:text-white">"Sign in"</h1>
            <TextField
                id="email"
                label="Your email"
                error=email_error
                node_ref=email_ref
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
            <Button button_type="submit">"Sign in"</Button>
            <p class="mt-4 text-sm text-gray-500 dark:text-gray-400">
                "Not a member yet? "
                <A href={paths::REGISTER}>"Join the club"</A>
            </p>
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

// web_app/components/login.rs - Sign-in form and modal
//
// Shown from the navbar's Login button (as a modal) and on /login.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::web_sys::SubmitEvent;

use crate::web_app::components::common::{ModalWrapper, TextInput};
use crate::web_app::model::Toast;
use crate::web_app::server_fns::login_user;
use crate::web_app::state::use_app_context;

#[component]
pub fn LoginForm(
    /// Called after a successful sign-in
    #[prop(optional)]
    on_success: Option<Callback<()>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        pending.set(true);
        spawn_local(async move {
            match login_user(name.get_untracked(), email.get_untracked()).await {
                Ok(user) => {
                    tracing::info!("Signed in as {}", user.email);
                    ctx.notify(Toast::success(format!("Welcome, {}", user.name)));
                    ctx.set_user().set(Some(user));
                    ctx.show_user_login().set(false);
                    if let Some(callback) = on_success {
                        callback.run(());
                    }
                }
                Err(e) => ctx.notify(Toast::error(e.to_string())),
            }
            pending.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="flex flex-col gap-4 text-sm text-gray-600">
            <label class="flex flex-col gap-1">
                "Name"
                <TextInput value=name placeholder="Your name" />
            </label>
            <label class="flex flex-col gap-1">
                "Email"
                <TextInput value=email placeholder="you@example.com" input_type="email" />
            </label>
            <button
                type="submit"
                disabled=move || pending.get()
                class="w-full py-2.5 bg-red-500 hover:bg-red-600 disabled:bg-gray-400 text-white rounded transition"
            >
                {move || if pending.get() { "Signing in..." } else { "Login" }}
            </button>
        </form>
    }
}

/// Modal shown while the shared `show_user_login` flag is raised
#[component]
pub fn LoginModal() -> impl IntoView {
    let ctx = use_app_context();
    let show = ctx.show_user_login();
    let on_close = Callback::new(move |()| show.set(false));

    view! {
        <Show when=move || show.get()>
            <ModalWrapper title="Login" on_close=on_close>
                <LoginForm />
            </ModalWrapper>
        </Show>
    }
}

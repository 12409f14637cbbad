// web_app/pages/login.rs - Standalone sign-in page

use leptos::prelude::*;

use crate::web_app::components::LoginForm;
use crate::web_app::model::Route;
use crate::web_app::state::{use_app_context, Navigator};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigator = Navigator::new();
    let on_success = Callback::new(move |()| navigator.go(&Route::Home));

    view! {
        <div class="flex justify-center mt-16">
            <div class="w-full max-w-sm p-8 border border-gray-200 rounded-lg shadow-sm bg-white">
                {move || match ctx.user().get() {
                    Some(user) => view! {
                        <p class="text-center text-gray-600">{format!("Signed in as {}", user.email)}</p>
                    }
                    .into_any(),
                    None => view! {
                        <p class="text-2xl font-medium text-center mb-6">
                            <span class="text-red-500">"User"</span>
                            " Login"
                        </p>
                        <LoginForm on_success=on_success />
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

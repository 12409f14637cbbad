// web_app/components/navbar.rs - Top navigation bar
//
// Brand link, live product search, cart indicator and the session menu,
// with a collapsible menu for small screens.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::web_sys::{Event, SubmitEvent};
use leptos_router::hooks::use_location;

use crate::web_app::behavior::navbar::NavbarState;
use crate::web_app::behavior::session::LogoutOutcome;
use crate::web_app::model::Route;
use crate::web_app::server_fns::logout_user;
use crate::web_app::state::{use_app_context, AppContext, Navigator};

const DESKTOP_SEARCH_CLASS: &str = "hidden lg:flex items-center text-sm gap-2 border border-gray-300 px-3 rounded-full hover:border-red-700 transition";
const MOBILE_SEARCH_CLASS: &str = "w-full flex items-center text-sm gap-2 border border-gray-300 px-3 rounded-full";

/// Keystroke in a search box: mirrors the text into the shared query and
/// returns the listing route when the navbar should navigate there.
pub fn search_input(
    ctx: AppContext,
    state: RwSignal<NavbarState>,
    value: String,
    pathname: &str,
) -> Option<Route> {
    let reaction = state.try_update(|s| s.input(value, pathname))?;
    ctx.search_query().set(reaction.query);
    reaction.navigate_to
}

/// Location change: leaving the listing view clears both search buffers.
pub fn location_changed(ctx: AppContext, state: RwSignal<NavbarState>, pathname: &str) {
    if state.try_update(|s| s.route_changed(pathname)).unwrap_or(false) {
        ctx.search_query().set(String::new());
    }
}

/// Apply a finished logout to the shared state. Returns the redirect; the
/// mobile menu is closed whenever there is one.
pub fn logout_finished(
    ctx: AppContext,
    state: RwSignal<NavbarState>,
    outcome: &LogoutOutcome,
) -> Option<Route> {
    if outcome.clears_session() {
        ctx.set_user().set(None);
    }
    ctx.notify(outcome.toast());
    let redirect = outcome.redirect();
    if redirect.is_some() {
        state.update(NavbarState::close_menu);
    }
    redirect
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let navigator = Navigator::new();
    let pathname = use_location().pathname;
    let state = RwSignal::new(NavbarState::default());

    Effect::new(move || {
        let current = pathname.get();
        location_changed(ctx, state, &current);
    });

    // Every navigation issued from the navbar closes the mobile menu.
    let go = move |route: Route| {
        state.update(NavbarState::close_menu);
        navigator.go(&route);
    };

    let on_input = move |ev: Event| {
        let current = pathname.get_untracked();
        if let Some(route) = search_input(ctx, state, event_target_value(&ev), &current) {
            navigator.go(&route);
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(route) = state.try_update(NavbarState::submit).flatten() {
            navigator.go(&route);
        }
    };

    let logout = move || {
        spawn_local(async move {
            let outcome = LogoutOutcome::from_response(logout_user().await);
            tracing::info!("Logout finished: {:?}", outcome);
            if let Some(route) = logout_finished(ctx, state, &outcome) {
                navigator.go(&route);
            }
        });
    };

    let open_login = move || {
        state.update(NavbarState::close_menu);
        ctx.show_user_login().set(true);
    };

    let search_form = move |class: &'static str| {
        view! {
            <form on:submit=on_submit class=class>
                <input
                    type="text"
                    placeholder="Search products"
                    class="py-1.5 w-full bg-transparent outline-none placeholder-gray-500"
                    prop:value=move || state.with(|s| s.search_text.clone())
                    on:input=on_input
                />
                <button type="submit" class="cursor-pointer text-gray-500" aria-label="Search">
                    "🔍"
                </button>
            </form>
        }
    };

    let cart_indicator = move || {
        view! {
            <div class="relative cursor-pointer" on:click=move |_| go(Route::Cart)>
                <span class="text-lg">"🛒"</span>
                <span class="absolute -top-2 -right-3 text-xs text-white bg-red-500 w-[18px] h-[18px] rounded-full flex items-center justify-center">
                    {move || ctx.cart_count()}
                </span>
            </div>
        }
    };

    let link = move |label: &'static str, route: Route| {
        let href = route.path();
        view! {
            <a
                href=href
                on:click=move |ev| {
                    ev.prevent_default();
                    go(route.clone());
                }
            >
                {label}
            </a>
        }
    };

    let desktop_session = move || {
        if ctx.user().get().is_some() {
            view! {
                <div class="relative group">
                    <span class="cursor-pointer text-2xl">"👤"</span>
                    <ul class="hidden group-hover:block absolute top-10 right-0 bg-white shadow-lg border border-gray-200 py-2 w-32 rounded-md z-40 text-sm">
                        <li
                            class="p-2 cursor-pointer hover:bg-gray-100 transition"
                            on:click=move |_| go(Route::MyOrders)
                        >
                            "My Orders"
                        </li>
                        <li
                            class="p-2 cursor-pointer hover:bg-gray-100 transition"
                            on:click=move |_| logout()
                        >
                            "Logout"
                        </li>
                    </ul>
                </div>
            }
            .into_any()
        } else {
            view! {
                <button
                    class="cursor-pointer px-8 py-2 bg-red-500 hover:bg-red-600 transition text-white rounded-full"
                    on:click=move |_| open_login()
                >
                    "Login"
                </button>
            }
            .into_any()
        }
    };

    let mobile_session = move || match ctx.user().get() {
        Some(user) => view! {
            <div class="w-full">
                <div class="flex items-center gap-2 mb-2">
                    <span class="text-xl">"👤"</span>
                    <span class="font-medium">{user.display_name().to_string()}</span>
                </div>
                <button
                    class="w-full text-left p-2 hover:bg-gray-100 transition rounded"
                    on:click=move |_| go(Route::MyOrders)
                >
                    "My Orders"
                </button>
                <button
                    class="w-full text-left p-2 hover:bg-gray-100 transition rounded"
                    on:click=move |_| {
                        state.update(NavbarState::close_menu);
                        logout();
                    }
                >
                    "Logout"
                </button>
            </div>
        }
        .into_any(),
        None => view! {
            <button
                class="cursor-pointer w-full px-8 py-2 bg-red-500 hover:bg-red-600 transition text-white rounded-full"
                on:click=move |_| open_login()
            >
                "Login"
            </button>
        }
        .into_any(),
    };

    let mobile_menu_class = move || {
        let visibility = if state.with(|s| s.menu_open) { "flex" } else { "hidden" };
        format!(
            "{} absolute top-[60px] left-0 w-full bg-white shadow-md py-4 flex-col items-start gap-4 px-5 text-sm md:hidden z-50",
            visibility
        )
    };

    view! {
        <nav class="flex items-center justify-between px-6 md:px-16 lg:px-24 xl:px-32 py-4 border-b border-gray-300 bg-white relative transition-all">
            <a
                href=Route::Home.path()
                class="text-2xl font-bold text-red-600"
                on:click=move |ev| {
                    ev.prevent_default();
                    go(Route::Home);
                }
            >
                "M Kart"
            </a>

            // Desktop menu
            <div class="hidden sm:flex items-center gap-8">
                {link("Home", Route::Home)}
                {link("All Products", Route::Products)}
                {search_form(DESKTOP_SEARCH_CLASS)}
                {cart_indicator()}
                {desktop_session}
            </div>

            // Mobile icons
            <div class="flex items-center gap-6 md:hidden">
                {cart_indicator()}
                <button
                    class="sm:hidden"
                    aria-label="Menu"
                    on:click=move |_| state.update(NavbarState::toggle_menu)
                >
                    "☰"
                </button>
            </div>

            // Mobile menu
            <div class=mobile_menu_class>
                {link("Home", Route::Home)}
                {link("Products", Route::Products)}
                {search_form(MOBILE_SEARCH_CLASS)}
                {mobile_session}
            </div>
        </nav>
    }
}

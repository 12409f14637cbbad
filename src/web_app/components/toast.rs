// web_app/components/toast.rs - Toast notifications
//
// Non-blocking overlay in the top-right corner. Each toast dismisses itself
// after TOAST_DURATION.

use std::time::Duration;

use leptos::prelude::*;

use crate::web_app::model::{Toast, ToastKind};
use crate::web_app::state::use_app_context;

pub const TOAST_DURATION: Duration = Duration::from_secs(3);

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "bg-white border-l-4 border-green-500 text-gray-800",
        ToastKind::Error => "bg-white border-l-4 border-red-500 text-gray-800",
    }
}

fn toast_icon(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "✔",
        ToastKind::Error => "✖",
    }
}

#[component]
pub fn ToastView(toast: Toast) -> impl IntoView {
    let ctx = use_app_context();
    let id = toast.id;

    Effect::new(move || {
        set_timeout(move || ctx.dismiss(id), TOAST_DURATION);
    });

    view! {
        <div
            role="status"
            class=format!("flex items-center gap-3 px-4 py-3 rounded shadow-lg text-sm {}", toast_class(toast.kind))
            on:click=move |_| ctx.dismiss(id)
        >
            <span>{toast_icon(toast.kind)}</span>
            <span>{toast.message}</span>
        </div>
    }
}

/// Renders every pending toast from the AppContext
#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_app_context();
    let toasts = ctx.toasts();

    view! {
        <div class="fixed top-4 right-4 z-[60] flex flex-col gap-2">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=|toast| view! { <ToastView toast=toast /> }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_have_distinct_styles() {
        assert_ne!(toast_class(ToastKind::Success), toast_class(ToastKind::Error));
        assert_eq!(toast_icon(ToastKind::Success), "✔");
    }

    #[test]
    fn test_duration() {
        assert_eq!(TOAST_DURATION.as_secs(), 3);
    }
}

// web_app/components/common.rs - Reusable UI components
//
// Small, composable components used throughout the storefront.
// Pure, stateless components that receive all data via props.

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;
use rust_decimal::Decimal;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-red-500"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Error display component
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-6 flex items-start gap-4">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <div>
                <h3 class="text-red-800 font-bold mb-1">"Something went wrong"</h3>
                <p class="text-red-600 text-sm">{error}</p>
            </div>
        </div>
    }
}

/// Modal wrapper component
///
/// Provides the backdrop and header. Whether it is open is decided by the
/// parent using Show.
#[component]
pub fn ModalWrapper(
    children: Children,
    /// Callback when modal should close
    on_close: Callback<()>,
    #[prop(default = "")]
    title: &'static str,
) -> impl IntoView {
    let handle_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4"
            on:keydown=handle_keydown
        >
            <div
                class="absolute inset-0 bg-gray-900/50 backdrop-blur-sm"
                on:click=move |_| on_close.run(())
            ></div>

            <div
                class="relative bg-white rounded-xl shadow-2xl w-full max-w-md overflow-hidden"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex justify-between items-center px-6 py-4 border-b border-gray-100">
                    <h2 class="text-xl font-semibold text-gray-800">{title}</h2>
                    <button
                        class="text-gray-400 hover:text-gray-600 rounded-full p-2"
                        on:click=move |_| on_close.run(())
                        title="Close"
                    >
                        "✕"
                    </button>
                </div>
                <div class="p-6">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Text input bound to a signal
#[component]
pub fn TextInput(
    value: RwSignal<String>,
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input type (text, search, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
) -> impl IntoView {
    view! {
        <input
            type=input_type
            placeholder=placeholder
            class="w-full px-3 py-2 border border-gray-300 rounded outline-none focus:border-red-500"
            prop:value=move || value.get()
            on:input=move |ev| {
                value.set(event_target_value(&ev));
            }
        />
    }
}

/// Rupee amount as shown across the storefront
pub fn format_rupees(amount: Decimal) -> String {
    format!("₹{}", amount)
}

/// Price display component
#[component]
pub fn PriceDisplay(
    price: Decimal,
    /// Larger offer-price styling
    #[prop(default = false)]
    highlight: bool,
) -> impl IntoView {
    let class = if highlight {
        "text-2xl font-medium text-gray-900"
    } else {
        "text-gray-500/70 line-through"
    };

    view! {
        <span class=class>{format_rupees(price)}</span>
    }
}

/// Scroll the window back to the top after programmatic navigation
pub fn scroll_to_top() {
    window().scroll_to_with_x_and_y(0.0, 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rupee_formatting() {
        assert_eq!(format_rupees(Decimal::new(120, 0)), "₹120");
        assert_eq!(format_rupees(Decimal::new(4999, 2)), "₹49.99");
    }
}

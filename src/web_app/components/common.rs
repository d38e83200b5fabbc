// web_app/components/common.rs - Reusable UI components
//
// Small, stateless building blocks shared by the list view and the
// detail pages: progress and error states, buttons, the delete
// confirmation, the page frame and status badges.

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;

/// Inline progress indicator for a list or page that is waiting on data
#[component]
pub fn Loading(
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center gap-3 py-12 text-gray-500" role="status" aria-live="polite">
            <span class="animate-spin h-5 w-5 rounded-full border-2 border-gray-300 border-t-blue-600"></span>
            <span>{message}</span>
        </div>
    }
}

/// Failed load, with an optional retry
#[component]
pub fn ErrorDisplay(
    error: String,
    /// Shown as a "Try again" button when set
    #[prop(optional)]
    on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-lg px-5 py-4 flex items-center justify-between gap-4" role="alert">
            <p class="text-sm text-red-700">{error}</p>
            {on_retry.map(|retry| view! {
                <button
                    type="button"
                    class="text-sm font-medium text-red-700 underline hover:text-red-900"
                    on:click=move |_| retry.run(())
                >
                    "Try again"
                </button>
            })}
        </div>
    }
}

/// Primary action button; `danger` switches to the destructive color
#[component]
pub fn Button(
    children: Children,
    on_click: Callback<()>,
    #[prop(default = false)]
    disabled: bool,
    #[prop(default = false)]
    danger: bool,
) -> impl IntoView {
    let color = if danger {
        "bg-red-600 hover:bg-red-700"
    } else {
        "bg-blue-600 hover:bg-blue-700"
    };

    view! {
        <button
            type="button"
            disabled=disabled
            class=format!("px-4 py-2 text-white rounded-lg font-medium disabled:bg-gray-400 disabled:cursor-not-allowed {}", color)
            on:click=move |_| on_click.run(())
        >
            {children()}
        </button>
    }
}

#[component]
pub fn SecondaryButton(children: Children, on_click: Callback<()>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="px-4 py-2 bg-white text-gray-700 rounded-lg border border-gray-300 font-medium hover:bg-gray-50"
            on:click=move |_| on_click.run(())
        >
            {children()}
        </button>
    }
}

/// Yes/no dialog for destructive actions
///
/// Escape, the backdrop and Cancel all call `on_cancel`. The parent decides
/// when the dialog exists.
#[component]
pub fn ConfirmDialog(
    title: &'static str,
    message: String,
    #[prop(default = "Delete")]
    confirm_label: &'static str,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            on_cancel.run(());
        }
    };

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4" on:keydown=on_keydown>
            <div class="absolute inset-0 bg-gray-900/50" on:click=move |_| on_cancel.run(())></div>
            <div
                role="alertdialog"
                aria-modal="true"
                aria-labelledby="confirm-dialog-title"
                aria-describedby="confirm-dialog-message"
                class="relative bg-white rounded-xl shadow-xl w-full max-w-md p-6"
            >
                <h2 id="confirm-dialog-title" class="text-lg font-semibold text-gray-900">{title}</h2>
                <p id="confirm-dialog-message" class="mt-3 text-gray-700">{message}</p>
                <div class="flex justify-end gap-3 mt-6">
                    <SecondaryButton on_click=on_cancel>"Cancel"</SecondaryButton>
                    <Button on_click=on_confirm danger=true>{confirm_label}</Button>
                </div>
            </div>
        </div>
    }
}

/// Page frame with the console header and navigation
#[component]
pub fn PageShell(
    /// Heading of the page
    title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            <header class="bg-white shadow-sm border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                    <a href="/" class="text-xl font-bold text-blue-700">"API Manager Admin"</a>
                    <nav aria-label="Main" class="flex gap-6 text-sm font-medium text-gray-600">
                        <a href="/key-managers" class="hover:text-blue-600">"Key Managers"</a>
                        <a href="/endpoint-certificates" class="hover:text-blue-600">"Endpoint Certificates"</a>
                        <a href="/subscription/tiers" class="hover:text-blue-600">"Subscription Tiers"</a>
                    </nav>
                </div>
            </header>
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <h1 class="text-2xl font-semibold mb-6">{title}</h1>
                {children()}
            </main>
        </div>
    }
}

/// Badge component
///
/// A small pill for status labels such as Enabled / Disabled.
#[component]
pub fn Badge(
    children: Children,
    /// Badge color variant
    #[prop(default = "gray")]
    variant: &'static str,
) -> impl IntoView {
    view! {
        <span class=badge_class(variant)>
            {children()}
        </span>
    }
}

pub fn badge_class(variant: &str) -> &'static str {
    match variant {
        "green" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-green-100 text-green-800 border border-green-200",
        "red" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-red-100 text-red-800 border border-red-200",
        "blue" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-blue-100 text-blue-800 border border-blue-200",
        _ => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-gray-100 text-gray-800 border border-gray-200",
    }
}

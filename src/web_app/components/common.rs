// web_app/components/common.rs - Reusable UI components
//
// Small presentational pieces shared by the product screens.
// Philosophy: Pure, stateless components that receive all data via props.
// Open/close state of dialogs belongs to the parent, which renders them
// conditionally.

use leptos::html::Div;
use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;

use crate::web_app::model::format_price;

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
        <div class="flex flex-col items-center justify-center p-6">
            <div class="animate-spin rounded-full h-8 w-8 border-4 border-gray-200 border-t-blue-600"></div>
            <span class="mt-3 text-gray-500">{message}</span>
        </div>
    }
}

/// Error display component
///
/// Inline error text used in place of content that failed to load.
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <p class="p-6 text-red-600" role="alert">{error}</p>
    }
}

/// Error banner for form and action failures
#[component]
pub fn ErrorBanner(error: String) -> impl IntoView {
    view! {
        <div class="p-2 bg-red-100 text-red-700 rounded" role="alert">{error}</div>
    }
}

/// Primary button component
#[component]
pub fn Button(
    /// Button label text
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Whether the button is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Button type (submit, button, reset)
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-700 \
                      disabled:opacity-60 disabled:cursor-not-allowed";

    view! {
        <button
            type=button_type
            disabled=move || disabled.get()
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Secondary button component
///
/// A grey button for cancel/reset style actions.
#[component]
pub fn SecondaryButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(default = false)]
    disabled: bool,
) -> impl IntoView {
    let class = "bg-gray-200 text-gray-700 px-4 py-2 rounded hover:bg-gray-300 \
                 disabled:opacity-50";

    view! {
        <button
            type="button"
            disabled=disabled
            class=class
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Shared dialog chrome: backdrop, Escape handling, focus on open
#[component]
fn DialogFrame(
    children: Children,
    /// Called on Escape or a click on the backdrop
    on_dismiss: Callback<()>,
    /// Width and padding classes of the panel
    panel_class: &'static str,
) -> impl IntoView {
    let panel_ref = NodeRef::<Div>::new();

    // Focus the panel so Escape reaches its keydown handler
    Effect::new(move || {
        if let Some(panel) = panel_ref.get() {
            let _ = panel.focus();
        }
    });

    let handle_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            on_dismiss.run(());
        }
    };

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center" role="dialog" aria-modal="true">
            <div
                class="absolute inset-0 bg-black/40"
                on:click=move |_| on_dismiss.run(())
            ></div>
            <div
                node_ref=panel_ref
                tabindex="-1"
                class=format!("relative bg-white rounded shadow-lg w-full outline-none {}", panel_class)
                on:keydown=handle_keydown
            >
                {children()}
            </div>
        </div>
    }
}

/// Modal hosting a form
///
/// Rendered only while open; the parent decides when.
#[component]
pub fn FormModal(
    /// Form content
    children: Children,
    /// Dialog heading
    #[prop(into)]
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <DialogFrame on_dismiss=on_close panel_class="max-w-md p-6">
            <button
                type="button"
                class="absolute top-2 right-2 text-gray-500 hover:text-gray-700"
                aria-label="Close"
                on:click=move |_| on_close.run(())
            >
                "✕"
            </button>
            <h2 class="text-xl font-bold mb-4">{title}</h2>
            {children()}
        </DialogFrame>
    }
}

/// Yes/no confirmation dialog
#[component]
pub fn ConfirmModal(
    /// Question shown in the dialog body
    #[prop(into)]
    message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(default = "Confirm")]
    title: &'static str,
    #[prop(default = "OK")]
    confirm_label: &'static str,
    #[prop(default = "Cancel")]
    cancel_label: &'static str,
    /// Colour classes of the confirm button
    #[prop(default = "bg-blue-600 hover:bg-blue-700")]
    confirm_class: &'static str,
) -> impl IntoView {
    view! {
        <DialogFrame on_dismiss=on_cancel panel_class="max-w-sm p-6">
            <h2 class="text-lg font-bold mb-4">{title}</h2>
            <p class="mb-4">{message}</p>
            <div class="flex justify-end gap-3">
                <SecondaryButton on_click=on_cancel>{cancel_label}</SecondaryButton>
                <button
                    type="button"
                    class=format!("px-4 py-2 rounded text-white {}", confirm_class)
                    on:click=move |_| on_confirm.run(())
                >
                    {confirm_label}
                </button>
            </div>
        </DialogFrame>
    }
}

/// Full-screen blocking spinner
#[component]
pub fn LoadingOverlay(
    /// Whether the overlay is shown
    #[prop(into)]
    show: Signal<bool>,
) -> impl IntoView {
    view! {
        <Show when=move || show.get()>
            <div
                class="fixed inset-0 flex items-center justify-center bg-black/30 backdrop-blur-sm z-40"
                aria-busy="true"
            >
                <div class="animate-spin rounded-full h-16 w-16 border-4 border-white border-t-transparent"></div>
            </div>
        </Show>
    }
}

/// Labelled text input bound to a signal
#[component]
pub fn LabeledInput(
    /// Label text above the field
    label: &'static str,
    /// The current value
    value: RwSignal<String>,
    /// Input type (text, number, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(default = false)]
    required: bool,
    /// Enter key handler
    #[prop(optional)]
    on_enter: Option<Callback<()>>,
) -> impl IntoView {
    let handle_keydown = move |ev: KeyboardEvent| {
        if let Some(handler) = on_enter {
            if ev.key() == "Enter" {
                ev.prevent_default();
                handler.run(());
            }
        }
    };

    view! {
        <label class="flex flex-col">
            <span class="text-sm font-medium mb-1">{label}</span>
            <input
                type=input_type
                placeholder=placeholder
                required=required
                class="border px-3 py-2 rounded"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:keydown=handle_keydown
            />
        </label>
    }
}

/// Price display component
///
/// Formats and displays a yen amount.
#[component]
pub fn PriceDisplay(
    /// The price value
    price: f64,
) -> impl IntoView {
    view! {
        <span class="tabular-nums">{format_price(price)}</span>
    }
}

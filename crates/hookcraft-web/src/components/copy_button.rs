//! Copy-to-clipboard button

use leptos::prelude::*;

use crate::api::copy_to_clipboard;
use crate::components::use_toast;

#[component]
pub fn CopyButton(#[prop(into)] text: String) -> impl IntoView {
    let toast = use_toast();
    let copied = RwSignal::new(false);

    let on_click = move |_: leptos::ev::MouseEvent| {
        if copy_to_clipboard(&text) {
            copied.set(true);
            toast.success("Copied to clipboard!");
            set_timeout(move || copied.set(false), std::time::Duration::from_secs(2));
        } else {
            toast.error("Clipboard is not available");
        }
    };

    view! {
        <button class="btn-icon copy-button" title="Copy to clipboard" on:click=on_click>
            {move || if copied.get() { "✓" } else { "📋" }}
        </button>
    }
}

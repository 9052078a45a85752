//! Toast notifications for transient failures and confirmations

use leptos::prelude::*;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Warning => "toast toast-warning",
            ToastKind::Error => "toast toast-error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Warning => "!",
            ToastKind::Error => "✕",
        }
    }

    /// Errors stay up longer than confirmations
    fn lifetime(&self) -> Duration {
        match self {
            ToastKind::Success => Duration::from_millis(3000),
            ToastKind::Warning => Duration::from_millis(4000),
            ToastKind::Error => Duration::from_millis(6000),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Shared toast queue, provided once at the app root
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl ToastContext {
    fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));

        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                kind,
                message: message.into(),
            })
        });

        let toasts = self.toasts;
        set_timeout(
            move || toasts.update(|toasts| toasts.retain(|t| t.id != id)),
            kind.lifetime(),
        );
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(ToastKind::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    pub fn dismiss(&self, id: u32) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let context = ToastContext::new();
    provide_context(context);

    view! {
        {children()}
        <div class="toast-container" role="status">
            <For
                each=move || context.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class()>
                            <span class="toast-icon">{toast.kind.icon()}</span>
                            <span class="toast-message">{toast.message}</span>
                            <button
                                class="toast-close"
                                aria-label="Dismiss"
                                on:click=move |_| context.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

pub fn use_toast() -> ToastContext {
    expect_context::<ToastContext>()
}

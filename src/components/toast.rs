//! Transient feedback banner that dismisses itself.
//!
//! DESIGN
//! ======
//! The dismiss timer is a spawned sleep guarded by the toast's `ViewScope`,
//! so a toast replaced before its timer fires never closes its successor.

use leptos::prelude::*;

pub const TOAST_DURATION_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

impl ToastKind {
    fn modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }
}

/// A message queued for display by a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastMessage {
    pub text: String,
    pub kind: ToastKind,
}

impl ToastMessage {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: ToastKind::Success }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: ToastKind::Error }
    }
}

#[component]
pub fn Toast(
    message: ToastMessage,
    on_close: Callback<()>,
    #[prop(default = TOAST_DURATION_MS)] duration_ms: u32,
) -> impl IntoView {
    #[cfg(feature = "csr")]
    {
        let scope = crate::util::fetch::ViewScope::mounted();
        crate::util::fetch::spawn_task(async move {
            let timer = gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(duration_ms)));
            if scope.finish(timer).await.is_some() {
                on_close.run(());
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = duration_ms;

    view! {
        <div class=format!("toast {}", message.kind.modifier()) role="status">
            <span class="toast__text">{message.text}</span>
            <button class="toast__dismiss" aria-label="Dismiss" on:click=move |_| on_close.run(())>
                "✕"
            </button>
        </div>
    }
}

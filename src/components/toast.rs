//! Toast Component

use leptos::prelude::*;

use crate::context::{use_app_context, ToastKind};

/// Renders the app toast, if any; click to dismiss
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app_context();

    move || {
        ctx.toast.get().map(|toast| {
            let class = match toast.kind {
                ToastKind::Success => "toast success",
                ToastKind::Error => "toast error",
            };
            view! {
                <div class=class role="status" on:click=move |_| ctx.dismiss_toast()>
                    {toast.message}
                </div>
            }
        })
    }
}

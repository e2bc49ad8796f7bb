//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays on screen
const TOAST_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped after admin edits so every list refetches - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped after admin edits so every list refetches - write
    set_reload_trigger: WriteSignal<u32>,
    /// Toast currently on screen - read
    pub toast: ReadSignal<Option<Toast>>,
    /// Toast currently on screen - write
    set_toast: WriteSignal<Option<Toast>>,
}

impl AppContext {
    pub fn new() -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        let (toast, set_toast) = signal::<Option<Toast>>(None);
        Self { reload_trigger, set_reload_trigger, toast, set_toast }
    }

    /// Trigger a refetch of every mounted list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Show a toast, dismissed automatically unless replaced first
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.toast.get_untracked().map_or(1, |t| t.id.wrapping_add(1));
        self.set_toast.set(Some(Toast { id, kind, message: message.into() }));

        let set_toast = self.set_toast;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            set_toast.update(|current| {
                if current.as_ref().is_some_and(|t| t.id == id) {
                    *current = None;
                }
            });
        });
    }

    pub fn dismiss_toast(&self) {
        self.set_toast.set(None);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

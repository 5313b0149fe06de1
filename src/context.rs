//! Application Context
//!
//! Configuration, the shared API client and the toast queue, provided via
//! Leptos Context API.

use comic_admin_core::{ApiClient, AppConfig, Notice};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays up
const NOTICE_TIMEOUT_MS: u32 = 5_000;

/// A queued toast
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    client: StoredValue<ApiClient, LocalStorage>,
    /// Toasts currently shown - read
    pub toasts: ReadSignal<Vec<Toast>>,
    /// Toasts currently shown - write
    set_toasts: WriteSignal<Vec<Toast>>,
    next_toast: StoredValue<u32>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let client = ApiClient::new(config.api_base_url.clone());
        let (toasts, set_toasts) = signal(Vec::<Toast>::new());
        Self {
            config: StoredValue::new(config),
            client: StoredValue::new_local(client),
            toasts,
            set_toasts,
            next_toast: StoredValue::new(0),
        }
    }

    /// Handle to the backend; clones share one connection pool
    pub fn client(&self) -> ApiClient {
        self.client.get_value()
    }

    pub fn page_size(&self) -> usize {
        self.config.with_value(|c| c.page_size)
    }

    pub fn api_base_url(&self) -> String {
        self.config.with_value(|c| c.api_base_url.clone())
    }

    /// Show a toast and dismiss it after a while
    pub fn notify(&self, notice: Notice) {
        if notice.is_error() {
            log::warn!("{}: {}", notice.title, notice.description);
        }
        let id = self.next_toast.get_value();
        self.next_toast.set_value(id.wrapping_add(1));
        self.set_toasts.update(|toasts| toasts.push(Toast { id, notice }));

        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            ctx.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u32) {
        self.set_toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

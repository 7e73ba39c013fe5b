//! Application Context
//!
//! Shared state provided via Leptos Context API.

use community_admin_core::DashboardConfig;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Sidebar destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavPage {
    Dashboard,
    Organizations,
    Members,
    Events,
    Donations,
    Sponsorships,
    Volunteering,
    Relationships,
    Reports,
    Settings,
}

impl NavPage {
    /// Sidebar order
    pub const ALL: [NavPage; 10] = [
        NavPage::Dashboard,
        NavPage::Organizations,
        NavPage::Members,
        NavPage::Events,
        NavPage::Donations,
        NavPage::Sponsorships,
        NavPage::Volunteering,
        NavPage::Relationships,
        NavPage::Reports,
        NavPage::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavPage::Dashboard => "Dashboard",
            NavPage::Organizations => "Organizations",
            NavPage::Members => "Members",
            NavPage::Events => "Events",
            NavPage::Donations => "Donations",
            NavPage::Sponsorships => "Sponsorships",
            NavPage::Volunteering => "Volunteering",
            NavPage::Relationships => "Relationships",
            NavPage::Reports => "Reports",
            NavPage::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NavPage::Dashboard => "🏠",
            NavPage::Organizations => "🏢",
            NavPage::Members => "👤",
            NavPage::Events => "📅",
            NavPage::Donations => "💰",
            NavPage::Sponsorships => "🤝",
            NavPage::Volunteering => "🙋",
            NavPage::Relationships => "🔗",
            NavPage::Reports => "📊",
            NavPage::Settings => "⚙",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn class(&self) -> &'static str {
        match self.kind {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page shown in the main column - read
    pub current_page: ReadSignal<NavPage>,
    /// Page shown in the main column - write
    set_current_page: WriteSignal<NavPage>,
    /// Toasts currently on screen, oldest first
    pub toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    next_toast_id: StoredValue<u32>,
    config: StoredValue<DashboardConfig>,
}

impl AppContext {
    pub fn new(
        current_page: (ReadSignal<NavPage>, WriteSignal<NavPage>),
        toasts: (ReadSignal<Vec<Toast>>, WriteSignal<Vec<Toast>>),
        config: DashboardConfig,
    ) -> Self {
        Self {
            current_page: current_page.0,
            set_current_page: current_page.1,
            toasts: toasts.0,
            set_toasts: toasts.1,
            next_toast_id: StoredValue::new(1),
            config: StoredValue::new(config),
        }
    }

    /// Switch the main column to another page
    pub fn navigate(&self, page: NavPage) {
        tracing::debug!(page = page.label(), "navigate");
        self.set_current_page.set(page);
    }

    pub fn page_size(&self) -> usize {
        self.config.with_value(|c| c.page_size)
    }

    pub fn default_expand_depth(&self) -> usize {
        self.config.with_value(|c| c.default_expand_depth)
    }

    /// Wait out the artificial delay of a simulated submission
    pub async fn simulated_latency(&self) {
        let ms = self.config.with_value(|c| c.simulated_latency_ms);
        TimeoutFuture::new(ms).await;
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.push_toast(ToastKind::Success, message.into());
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        self.push_toast(ToastKind::Error, message.into());
    }

    /// Remove a toast before its timer fires
    pub fn dismiss_toast(&self, id: u32) {
        self.set_toasts.update(|list| list.retain(|t| t.id != id));
    }

    fn push_toast(&self, kind: ToastKind, message: String) {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id + 1);
        self.set_toasts.update(|list| list.push(Toast { id, kind, message }));

        let ctx = *self;
        let ms = self.config.with_value(|c| c.toast_duration_ms);
        spawn_local(async move {
            TimeoutFuture::new(ms).await;
            ctx.dismiss_toast(id);
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

//! Всплывающие уведомления.
//!
//! Любой компонент отправляет сообщение через `NotificationStore` из контекста,
//! рисует их один `Toaster`. Ошибки дополнительно уходят в серверный лог.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::client_log;
use crate::shared::icons::icon;

const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    fn css_modifier(&self) -> &'static str {
        match self {
            NotificationKind::Success => "toast--success",
            NotificationKind::Error => "toast--error",
            NotificationKind::Info => "toast--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct NotificationStore {
    items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn push(&self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        let message = message.into();
        let id = self.next_id.with_value(|n| n + 1);
        self.next_id.set_value(id);

        self.items.update(|items| {
            items.push(Notification {
                id,
                kind,
                message,
            })
        });

        let store = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            store.dismiss(id);
        });
        id
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(NotificationKind::Info, message);
    }

    /// Ошибка: уведомление + запись в консоль и в серверный лог
    pub fn error(&self, category: &str, message: impl Into<String>) {
        let message = message.into();
        log::error!("[{}] {}", category, message);
        client_log::ship(category, &message);
        self.push(NotificationKind::Error, message);
    }

    pub fn dismiss(&self, id: u64) {
        let _ = self.items.try_update(|items| items.retain(|n| n.id != id));
    }

    pub fn items(&self) -> Vec<Notification> {
        self.items.get()
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationStore {
    use_context::<NotificationStore>().expect("NotificationStore not found in context")
}

#[component]
pub fn Toaster() -> impl IntoView {
    let store = use_notifications();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || store.items()
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    view! {
                        <div class=format!("toast {}", n.kind.css_modifier())>
                            <span class="toast__message">{n.message}</span>
                            <button
                                class="toast__close"
                                title="Fechar"
                                on:click=move |_| store.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

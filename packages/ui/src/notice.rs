//! User-facing alerts shown above the tables.

use std::time::Duration;

use dioxus::prelude::*;

/// How long a notice stays up unless dismissed.
pub const NOTICE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Stack of visible notices, newest last.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notices {
    items: Vec<Notice>,
    next_id: u64,
}

impl Notices {
    pub fn items(&self) -> &[Notice] {
        &self.items
    }

    /// Show a notice and return its id.
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notice {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}

/// Show a notice and hide it again after [`NOTICE_TIMEOUT`].
pub fn show_notice(mut notices: Signal<Notices>, kind: NoticeKind, message: impl Into<String>) {
    let id = notices.write().push(kind, message);
    spawn(async move {
        sleep(NOTICE_TIMEOUT).await;
        notices.write().dismiss(id);
    });
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[component]
pub fn NoticeStack(notices: Signal<Notices>) -> Element {
    let items = notices.read().items().to_vec();

    rsx! {
        div {
            class: "notice-stack",
            for notice in items {
                div {
                    key: "{notice.id}",
                    class: match notice.kind {
                        NoticeKind::Success => "notice success",
                        NoticeKind::Error => "notice error",
                    },
                    role: "alert",
                    span { "{notice.message}" }
                    button {
                        class: "notice-close",
                        title: "Dismiss",
                        onclick: move |_| notices.write().dismiss(notice.id),
                        "×"
                    }
                }
            }
        }
    }
}

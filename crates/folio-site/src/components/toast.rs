//! Transient notifications.

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::NoticeKind;

/// How long a toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(5);

/// A single notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Visible toasts, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Toasts {
    items: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    /// Adds a toast and returns its id.
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

/// Returns the toast signal provided by the application root.
pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Shows a toast and schedules its removal.
pub fn notify(mut toasts: Signal<Toasts>, kind: NoticeKind, message: impl Into<String>) {
    let id = toasts.write().push(kind, message);
    spawn(async move {
        tokio::time::sleep(TOAST_TTL).await;
        toasts.write().dismiss(id);
    });
}

/// Stack of toasts in the bottom-left corner.
#[component]
pub fn ToastStack() -> Element {
    let mut toasts = use_toasts();
    let items = toasts.read().items().to_vec();

    rsx! {
        div {
            class: "toast-stack",
            for toast in items {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        NoticeKind::Success => "toast toast-success",
                        NoticeKind::Error => "toast toast-error",
                    },
                    span {
                        class: "toast-icon",
                        {
                            match toast.kind {
                                NoticeKind::Success => "✓",
                                NoticeKind::Error => "✗",
                            }
                        }
                    }
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-dismiss",
                        onclick: move |_| toasts.write().dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut toasts = Toasts::default();
        let a = toasts.push(NoticeKind::Success, "sent");
        let b = toasts.push(NoticeKind::Error, "failed");
        assert_ne!(a, b);
        assert_eq!(toasts.items().len(), 2);

        toasts.dismiss(a);
        assert_eq!(toasts.items().len(), 1);
        assert_eq!(toasts.items()[0].message, "failed");

        // Unknown ids are ignored
        toasts.dismiss(99);
        assert_eq!(toasts.items().len(), 1);
    }
}

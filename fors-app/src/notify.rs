//! Notification queue
//!
//! Ordered set of ephemeral toast messages. Each toast expires independently
//! a fixed 3 seconds after creation; there is no deduplication. Deadlines use
//! `tokio::time::Instant` so tests can drive expiry under paused time.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::Instant;

/// Fixed toast lifetime
pub const TOAST_TTL: Duration = Duration::from_millis(3000);

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

struct Entry {
    toast: Toast,
    expires_at: Instant,
}

struct Inner {
    next_id: u64,
    entries: Vec<Entry>,
}

/// Toast notification queue, cloneable handle
#[derive(Clone)]
pub struct Notifier {
    inner: Arc<Mutex<Inner>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Append a toast and schedule its expiry `TOAST_TTL` from now
    pub fn notify(&self, message: impl Into<String>, kind: ToastKind) -> u64 {
        let mut inner = self.inner.lock().expect("notifier lock poisoned");
        inner.next_id += 1;
        let id = inner.next_id;
        inner.entries.push(Entry {
            toast: Toast {
                id,
                message: message.into(),
                kind,
            },
            expires_at: Instant::now() + TOAST_TTL,
        });
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.notify(message, ToastKind::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.notify(message, ToastKind::Error)
    }

    /// Currently visible toasts, in creation order; expired entries are pruned
    pub fn visible(&self) -> Vec<Toast> {
        let now = Instant::now();
        let mut inner = self.inner.lock().expect("notifier lock poisoned");
        inner.entries.retain(|e| e.expires_at > now);
        inner.entries.iter().map(|e| e.toast.clone()).collect()
    }

    /// Manually dismiss a toast before its deadline
    pub fn dismiss(&self, id: u64) {
        let mut inner = self.inner.lock().expect("notifier lock poisoned");
        inner.entries.retain(|e| e.toast.id != id);
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_toast_expires_after_fixed_window() {
        let notifier = Notifier::new();
        notifier.success("order created");

        tokio::time::advance(Duration::from_millis(2999)).await;
        assert_eq!(notifier.visible().len(), 1);

        tokio::time::advance(Duration::from_millis(2)).await;
        assert!(notifier.visible().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_toasts_expire_independently() {
        let notifier = Notifier::new();
        notifier.success("first");

        tokio::time::advance(Duration::from_millis(1500)).await;
        notifier.error("second");

        tokio::time::advance(Duration::from_millis(2000)).await;
        let visible = notifier.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].message, "second");
        assert_eq!(visible[0].kind, ToastKind::Error);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_deduplication_and_order_preserved() {
        let notifier = Notifier::new();
        let a = notifier.error("same");
        let b = notifier.error("same");
        assert_ne!(a, b);

        let visible = notifier.visible();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].id, a);
        assert_eq!(visible[1].id, b);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_removes_single_toast() {
        let notifier = Notifier::new();
        let a = notifier.success("keep");
        let b = notifier.success("drop");
        notifier.dismiss(b);

        let visible = notifier.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, a);
    }
}

//! Toast center: the single current notification plus a broadcast feed.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::Instant;

use crate::domain::{Toast, ToastKind};

const FEED_CAPACITY: usize = 16;

pub struct ToastCenter {
    ttl: Duration,
    current: Mutex<Option<(Toast, Instant)>>,
    feed: broadcast::Sender<Toast>,
}

impl ToastCenter {
    pub fn new(ttl: Duration) -> Self {
        let (feed, _) = broadcast::channel(FEED_CAPACITY);
        Self {
            ttl,
            current: Mutex::new(None),
            feed,
        }
    }

    fn current_slot(&self) -> MutexGuard<'_, Option<(Toast, Instant)>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the current toast and broadcast it
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) -> Toast {
        let toast = Toast::new(message, kind);
        match kind {
            ToastKind::Error => log::warn!("[toast] {}", toast.message),
            _ => log::info!("[toast] {}", toast.message),
        }
        *self.current_slot() = Some((toast.clone(), Instant::now()));
        // No subscribers is fine
        let _ = self.feed.send(toast.clone());
        toast
    }

    /// The current toast, or `None` once its time to live has passed
    pub fn current(&self) -> Option<Toast> {
        let mut slot = self.current_slot();
        match slot.as_ref() {
            Some((toast, shown_at)) if shown_at.elapsed() < self.ttl => Some(toast.clone()),
            Some(_) => {
                *slot = None;
                None
            }
            None => None,
        }
    }

    pub fn dismiss(&self) {
        *self.current_slot() = None;
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Toast> {
        self.feed.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_toast_expires_after_ttl() {
        let center = ToastCenter::new(Duration::from_secs(3));
        center.show("Comment added!", ToastKind::Success);

        tokio::time::sleep(Duration::from_millis(2900)).await;
        assert_eq!(center.current().map(|t| t.message), Some("Comment added!".to_string()));

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(center.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_toast_replaces_and_restarts_ttl() {
        let center = ToastCenter::new(Duration::from_secs(3));
        center.show("first", ToastKind::Info);
        tokio::time::sleep(Duration::from_secs(2)).await;
        center.show("second", ToastKind::Error);
        tokio::time::sleep(Duration::from_secs(2)).await;

        let toast = center.current().unwrap();
        assert_eq!(toast.message, "second");
        assert_eq!(toast.kind, ToastKind::Error);
    }

    #[tokio::test]
    async fn test_subscribers_receive_toasts() {
        let center = ToastCenter::new(Duration::from_secs(3));
        let mut feed = center.subscribe();
        center.show("hello", ToastKind::Info);
        assert_eq!(feed.recv().await.unwrap().message, "hello");
    }

    #[test]
    fn test_dismiss() {
        let center = ToastCenter::new(Duration::from_secs(3));
        center.show("bye", ToastKind::Info);
        center.dismiss();
        assert!(center.current().is_none());
    }
}

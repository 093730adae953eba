use std::time::Duration;

use crate::models::toast::{generate_toast_id, Toast, ToastKind};
use crate::stores::store::{Store, SubscriptionId};

/// Ephemeral queue of user-facing notifications, in insertion order.
/// Duplicate messages are allowed. Timed toasts remove themselves, so
/// [`ToastStore::add`] must run inside a tokio runtime.
#[derive(Clone)]
pub struct ToastStore {
    state: Store<Vec<Toast>>,
}

impl ToastStore {
    pub fn new() -> Self {
        Self { state: Store::new(Vec::new()) }
    }

    /// Snapshot of the active toasts.
    pub fn toasts(&self) -> Vec<Toast> {
        self.state.get()
    }

    pub fn subscribe(
        &self,
        observer: impl Fn(&Vec<Toast>) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.state.subscribe(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.state.unsubscribe(id)
    }

    /// Appends a toast and returns its id. A positive `duration_ms` schedules
    /// automatic removal after that delay; anything else keeps the toast
    /// until [`ToastStore::remove`] or [`ToastStore::clear`].
    pub fn add(&self, message: impl Into<String>, kind: ToastKind, duration_ms: i64) -> String {
        let id = generate_toast_id();
        let toast = Toast {
            id: id.clone(),
            message: message.into(),
            kind,
            duration_ms,
        };
        self.state.update(|toasts| toasts.push(toast));

        if duration_ms > 0 {
            let store = self.clone();
            let expiring = id.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(duration_ms as u64)).await;
                store.remove(&expiring);
            });
        }

        id
    }

    /// Removes the toast with this id; no-op when it already expired.
    pub fn remove(&self, id: &str) {
        self.state.update(|toasts| toasts.retain(|t| t.id != id));
    }

    pub fn clear(&self) {
        self.state.set(Vec::new());
    }

    // Per-kind wrappers with their default durations.

    pub fn success(&self, message: impl Into<String>) -> String {
        self.add(message, ToastKind::Success, ToastKind::Success.default_duration_ms())
    }

    pub fn error(&self, message: impl Into<String>) -> String {
        self.add(message, ToastKind::Error, ToastKind::Error.default_duration_ms())
    }

    pub fn warning(&self, message: impl Into<String>) -> String {
        self.add(message, ToastKind::Warning, ToastKind::Warning.default_duration_ms())
    }

    pub fn info(&self, message: impl Into<String>) -> String {
        self.add(message, ToastKind::Info, ToastKind::Info.default_duration_ms())
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn timed_toast_expires_after_its_duration() {
        let store = ToastStore::new();
        store.add("saved", ToastKind::Error, 100);
        assert_eq!(store.toasts().len(), 1);

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(store.toasts().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn non_positive_duration_persists_until_removed() {
        let store = ToastStore::new();
        let id = store.add("sticky", ToastKind::Info, 0);

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(store.toasts().len(), 1);

        store.remove(&id);
        assert!(store.toasts().is_empty());
        // removing again is a no-op
        store.remove(&id);
    }

    #[tokio::test]
    async fn insertion_order_and_duplicates_are_kept() {
        let store = ToastStore::new();
        store.add("same", ToastKind::Info, 0);
        store.add("same", ToastKind::Info, 0);
        store.warning("last");

        let messages: Vec<String> =
            store.toasts().into_iter().map(|t| t.message).collect();
        assert_eq!(messages, vec!["same", "same", "last"]);
    }

    #[tokio::test]
    async fn clear_empties_the_queue() {
        let store = ToastStore::new();
        store.success("one");
        store.info("two");
        store.clear();
        assert!(store.toasts().is_empty());
    }
}

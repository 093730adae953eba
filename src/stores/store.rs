use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

type Observer<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Handle returned by [`Store::subscribe`], consumed by [`Store::unsubscribe`].
/// Dropping the id without unsubscribing keeps the subscription alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

struct Inner<T> {
    value: Mutex<T>,
    observers: Mutex<Vec<(u64, Observer<T>)>>,
    next_id: AtomicU64,
}

/// Snapshot-holding state container with synchronous observer notification.
///
/// `update` replaces the snapshot under the state lock, then pushes a clone of
/// the new snapshot to every observer outside the lock, so observers may call
/// [`Store::get`] or manage subscriptions from within a callback. Clones share
/// the same state.
pub struct Store<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T: Clone> Store<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                value: Mutex::new(initial),
                observers: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Clone of the current snapshot.
    pub fn get(&self) -> T {
        self.inner.value.lock().unwrap().clone()
    }

    /// Applies a mutation to the current snapshot and notifies observers.
    pub fn update(&self, mutate: impl FnOnce(&mut T)) {
        let snapshot = {
            let mut value = self.inner.value.lock().unwrap();
            mutate(&mut value);
            value.clone()
        };
        self.notify(&snapshot);
    }

    /// Replaces the snapshot wholesale.
    pub fn set(&self, value: T) {
        self.update(|current| *current = value);
    }

    /// Registers an observer. It is called immediately with the current
    /// snapshot, then again after every update until unsubscribed.
    pub fn subscribe(&self, observer: impl Fn(&T) + Send + Sync + 'static) -> SubscriptionId {
        let observer: Observer<T> = Arc::new(observer);
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.observers.lock().unwrap().push((id, Arc::clone(&observer)));
        observer(&self.get());
        SubscriptionId(id)
    }

    /// Removes an observer; no-op for an already removed id.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.observers.lock().unwrap().retain(|(sub, _)| *sub != id.0);
    }

    fn notify(&self, snapshot: &T) {
        let observers: Vec<Observer<T>> = {
            let subs = self.inner.observers.lock().unwrap();
            subs.iter().map(|(_, obs)| Arc::clone(obs)).collect()
        };
        for observer in observers {
            observer(snapshot);
        }
    }
}

//! Keyed write debouncer
//!
//! The first `schedule` for a key starts a timer; later calls for the same key
//! only replace the pending flush, so the latest one runs when the timer fires.
//! A key is therefore written at most once per interval.
//!
//! Writes run one at a time. A flush takes its entry out of the pending map
//! only while holding the write lock, so a snapshot can never land after a
//! newer one for the same key.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

type FlushFn = Box<dyn FnOnce() + Send + 'static>;

struct Pending {
    flush: FlushFn,
    timer: JoinHandle<()>,
}

type Slots<K> = Arc<Mutex<HashMap<K, Pending>>>;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct Debouncer<K> {
    interval: Duration,
    pending: Slots<K>,
    writing: Arc<Mutex<()>>,
}

impl<K> Debouncer<K>
where
    K: Eq + Hash + Copy + Send + 'static,
{
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: Arc::new(Mutex::new(HashMap::new())),
            writing: Arc::new(Mutex::new(())),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Schedule `flush` for `key`. Outside a tokio runtime it runs immediately.
    pub fn schedule<F>(&self, key: K, flush: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let Ok(handle) = Handle::try_current() else {
            let _writing = lock(&self.writing);
            flush();
            return;
        };

        let mut pending = lock(&self.pending);
        if let Some(entry) = pending.get_mut(&key) {
            entry.flush = Box::new(flush);
            return;
        }

        let slots = Arc::clone(&self.pending);
        let writing = Arc::clone(&self.writing);
        let interval = self.interval;
        let timer = handle.spawn(async move {
            tokio::time::sleep(interval).await;
            let _writing = lock(&writing);
            let due = lock(&slots).remove(&key);
            if let Some(entry) = due {
                (entry.flush)();
            }
        });
        pending.insert(
            key,
            Pending {
                flush: Box::new(flush),
                timer,
            },
        );
    }

    pub fn is_pending(&self, key: K) -> bool {
        lock(&self.pending).contains_key(&key)
    }
}

impl<K> Debouncer<K> {
    /// Run every pending flush now and cancel the timers
    pub fn flush_all(&self) {
        let _writing = lock(&self.writing);
        let drained: Vec<Pending> = lock(&self.pending).drain().map(|(_, entry)| entry).collect();
        for entry in drained {
            entry.timer.abort();
            (entry.flush)();
        }
    }
}

impl<K> Drop for Debouncer<K> {
    fn drop(&mut self) {
        self.flush_all();
    }
}

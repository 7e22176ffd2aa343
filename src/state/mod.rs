// ABOUTME: Observable application state with synchronous change notification
// ABOUTME: Backs the toast list and task-modal stores; listeners detach when their Subscription drops
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

//! # Application State Stores
//!
//! Stores are plain values owned by the application and passed to whoever
//! needs them; cloning a store yields another handle to the same state.
//! Every mutation notifies subscribers synchronously, after the new state is
//! in place and without holding the state lock, so a listener may read the
//! store or subscribe further listeners.
//!
//! Snapshots reach listeners in mutation order, one at a time, even with
//! several writing threads: while one thread is delivering, snapshots from
//! other writers are queued and delivered by that thread. A mutation made from
//! inside a listener is delivered once the current delivery finishes.

use dashmap::DashMap;
use std::collections::VecDeque;
use std::fmt;
use std::mem;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::thread;
use tracing::warn;

/// Task creation modal state
pub mod task_modal;
/// Toast notification list
pub mod toast;

pub use task_modal::{TaskModalState, TaskModalStore};
pub use toast::{Toast, ToastId, ToastKind, ToastStore};

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Snapshots awaiting delivery, and whether a thread is delivering them
struct Delivery<T> {
    queue: VecDeque<T>,
    draining: bool,
}

struct Shared<T> {
    state: Mutex<T>,
    delivery: Mutex<Delivery<T>>,
    listeners: DashMap<u64, Listener<T>>,
    next_listener_id: AtomicU64,
}

/// Shared, observable value
pub struct Observable<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Default + Clone + Send + 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + Send + 'static> Observable<T> {
    /// Wrap an initial value
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(initial),
                delivery: Mutex::new(Delivery {
                    queue: VecDeque::new(),
                    draining: false,
                }),
                listeners: DashMap::new(),
                next_listener_id: AtomicU64::new(0),
            }),
        }
    }

    /// Snapshot of the current value
    #[must_use]
    pub fn get(&self) -> T {
        self.lock().clone()
    }

    /// Read the current value without cloning it
    pub fn with<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&self.lock())
    }

    /// Replace the value and notify subscribers
    pub fn set(&self, value: T) {
        self.update(|state| *state = value);
    }

    /// Mutate the value and notify subscribers
    pub fn update<R>(&self, mutate: impl FnOnce(&mut T) -> R) -> R {
        let (result, should_drain) = {
            let mut state = self.lock();
            let result = mutate(&mut state);
            (result, self.enqueue(state.clone()))
        };
        if should_drain {
            self.drain();
        }
        result
    }

    /// Mutate the value, notifying subscribers only when `mutate` reports a change
    pub fn update_if(&self, mutate: impl FnOnce(&mut T) -> bool) -> bool {
        let should_drain = {
            let mut state = self.lock();
            if !mutate(&mut state) {
                return false;
            }
            self.enqueue(state.clone())
        };
        if should_drain {
            self.drain();
        }
        true
    }

    /// Register a listener called with the new value after every change
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let id = self
            .shared
            .next_listener_id
            .fetch_add(1, Ordering::Relaxed);
        self.shared.listeners.insert(id, Arc::new(listener));

        let shared: Weak<Shared<T>> = Arc::downgrade(&self.shared);
        Subscription {
            id,
            detach: Some(Box::new(move || {
                if let Some(shared) = shared.upgrade() {
                    shared.listeners.remove(&id);
                }
            })),
        }
    }

    /// Number of attached listeners
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.shared.listeners.len()
    }

    /// Queue a snapshot while the state lock is held, so queue order is
    /// mutation order. Returns whether the caller must deliver the queue.
    fn enqueue(&self, snapshot: T) -> bool {
        let mut delivery = self.delivery();
        delivery.queue.push_back(snapshot);
        !mem::replace(&mut delivery.draining, true)
    }

    fn drain(&self) {
        let _reset = DrainReset {
            delivery: &self.shared.delivery,
        };
        loop {
            let next = {
                let mut delivery = self.delivery();
                let Some(snapshot) = delivery.queue.pop_front() else {
                    delivery.draining = false;
                    return;
                };
                snapshot
            };
            self.notify(&next);
        }
    }

    fn notify(&self, snapshot: &T) {
        // Collected first so listeners may subscribe or unsubscribe re-entrantly
        let listeners: Vec<Listener<T>> = self
            .shared
            .listeners
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        for listener in listeners {
            listener(snapshot);
        }
    }

    fn lock(&self) -> MutexGuard<'_, T> {
        self.shared.state.lock().unwrap_or_else(|poisoned| {
            warn!("State store lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn delivery(&self) -> MutexGuard<'_, Delivery<T>> {
        lock_delivery(&self.shared.delivery)
    }
}

fn lock_delivery<T>(delivery: &Mutex<Delivery<T>>) -> MutexGuard<'_, Delivery<T>> {
    delivery.lock().unwrap_or_else(|poisoned| {
        warn!("State store delivery lock poisoned, recovering");
        poisoned.into_inner()
    })
}

/// Releases the delivery role when a listener panics mid-drain
struct DrainReset<'a, T> {
    delivery: &'a Mutex<Delivery<T>>,
}

impl<T> Drop for DrainReset<'_, T> {
    fn drop(&mut self) {
        if thread::panicking() {
            let mut delivery = lock_delivery(self.delivery);
            delivery.queue.clear();
            delivery.draining = false;
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("subscribers", &self.shared.listeners.len())
            .finish_non_exhaustive()
    }
}

/// Handle keeping a listener attached; dropping it detaches the listener
#[must_use = "dropping a Subscription immediately detaches its listener"]
pub struct Subscription {
    id: u64,
    detach: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Listener id, unique per store
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Detach the listener now
    pub fn unsubscribe(mut self) {
        self.detach_now();
    }

    fn detach_now(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("attached", &self.detach.is_some())
            .finish()
    }
}

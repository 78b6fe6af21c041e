//! Writable value cells with synchronous change notification.
//!
//! A `Writable` owns a single value and a registry of observers. Observers
//! are either callbacks (notified inline by the writer) or channel receivers
//! obtained through `watch` (fanned out with non-blocking sends). Observers
//! never own the value; they hold a `Subscription` token or a `Receiver`.

use std::{
    collections::VecDeque,
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::{Arc, Weak},
};

use {
    async_channel::{Receiver, Sender, unbounded},
    parking_lot::{Mutex, RwLock},
    tracing::debug,
};

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Read-only view over a store.
///
/// UI components that only render a value should depend on this trait
/// rather than on `Writable` itself.
pub trait Readable<T> {
    /// Returns a snapshot of the current value.
    fn get(&self) -> T;

    /// Registers a callback invoked with the current value and on every change.
    fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static;
}

/// Registered observers of a store.
struct Observers<T> {
    /// Identifier handed to the next callback subscription.
    next_id: u64,
    /// Callback subscribers in registration order.
    callbacks: Vec<(u64, Callback<T>)>,
    /// Channel subscribers created by `watch`.
    channels: Vec<Sender<T>>,
}

/// When a write counts as a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChangePolicy {
    /// Notify only if the new value differs from the held one.
    #[default]
    WhenUnequal,
    /// Notify on every write, equal or not.
    Always,
}

/// Values waiting to be delivered while a notification pass is running.
struct Dispatch<T> {
    draining: bool,
    queue: VecDeque<T>,
}

struct Shared<T> {
    name: &'static str,
    policy: ChangePolicy,
    value: RwLock<T>,
    observers: RwLock<Observers<T>>,
    dispatch: Mutex<Dispatch<T>>,
}

/// Process-wide mutable cell with subscribe/set/update semantics.
///
/// Cloning a `Writable` yields another handle to the same cell.
pub struct Writable<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for Writable<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Debug> Debug for Writable<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Writable")
            .field("name", &self.shared.name)
            .field("value", &*self.shared.value.read())
            .finish()
    }
}

impl<T> Writable<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Creates an anonymous store holding `initial`.
    pub fn new(initial: T) -> Self {
        Self::named("store", initial)
    }

    /// Creates a store whose name is attached to its log events.
    ///
    /// # Arguments
    ///
    /// * `name` - Label used in tracing output.
    /// * `initial` - Value held until the first write.
    pub fn named(name: &'static str, initial: T) -> Self {
        Self::with_policy(name, initial, ChangePolicy::WhenUnequal)
    }

    /// Creates a named store with an explicit change policy.
    ///
    /// Stores of sequences or records use `ChangePolicy::Always` so that a
    /// producer replacing them with equal content still triggers a render.
    pub fn with_policy(name: &'static str, initial: T, policy: ChangePolicy) -> Self {
        Self {
            shared: Arc::new(Shared {
                name,
                policy,
                value: RwLock::new(initial),
                observers: RwLock::new(Observers {
                    next_id: 0,
                    callbacks: Vec::new(),
                    channels: Vec::new(),
                }),
                dispatch: Mutex::new(Dispatch {
                    draining: false,
                    queue: VecDeque::new(),
                }),
            }),
        }
    }

    /// Gets a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.shared.value.read().clone()
    }

    /// Replaces the held value and notifies observers.
    ///
    /// Under `ChangePolicy::WhenUnequal` a write equal to the held value is
    /// dropped without notifying.
    ///
    /// # Arguments
    ///
    /// * `value` - New value; stored as given.
    pub fn set(&self, value: T) {
        let drain = {
            let mut current = self.shared.value.write();
            if self.shared.policy == ChangePolicy::WhenUnequal && *current == value {
                debug!(store = self.shared.name, "Store write left value unchanged");
                return;
            }
            *current = value.clone();
            // Queue while the value lock is held so delivery follows store order.
            self.shared.enqueue(value)
        };

        debug!(store = self.shared.name, "Store value replaced");
        if drain {
            self.shared.drain();
        }
    }

    /// Applies `transform` to the current value and stores the result.
    ///
    /// The transform sees a snapshot; the store is not locked while it runs.
    pub fn update<F>(&self, transform: F)
    where
        F: FnOnce(&T) -> T,
    {
        let current = self.get();
        self.set(transform(&current));
    }

    /// Registers a callback.
    ///
    /// The callback is invoked immediately with the current value, then once
    /// for every change until the returned `Subscription` is dropped or
    /// unsubscribed.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let callback: Callback<T> = Arc::new(callback);
        let id = {
            let mut observers = self.shared.observers.write();
            let id = observers.next_id;
            observers.next_id += 1;
            observers.callbacks.push((id, Arc::clone(&callback)));
            id
        };
        debug!(store = self.shared.name, id, "New subscription created");

        callback(&self.get());

        let weak: Weak<Shared<T>> = Arc::downgrade(&self.shared);
        Subscription::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.observers.write().callbacks.retain(|(sid, _)| *sid != id);
                debug!(store = shared.name, id, "Subscription removed");
            }
        })
    }

    /// Subscribes through a channel.
    ///
    /// The receiver yields the current value first, then every change.
    /// Dropping the receiver unsubscribes; the sender is pruned on the next
    /// broadcast.
    pub fn watch(&self) -> Receiver<T> {
        let (tx, rx) = unbounded();
        let _ = tx.try_send(self.get());
        self.shared.observers.write().channels.push(tx);
        debug!(store = self.shared.name, "New watch channel created");

        rx
    }

    /// Number of live observers, callbacks and open channels combined.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        let observers = self.shared.observers.read();
        observers.callbacks.len()
            + observers
                .channels
                .iter()
                .filter(|tx| !tx.is_closed())
                .count()
    }
}

impl<T> Readable<T> for Writable<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    fn get(&self) -> T {
        Writable::get(self)
    }

    fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        Writable::subscribe(self, callback)
    }
}

impl<T> Shared<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Queues `value` for delivery.
    ///
    /// Returns `true` if the caller must drain the queue, `false` if a pass
    /// is already running (a callback that writes, or another thread).
    fn enqueue(&self, value: T) -> bool {
        let mut dispatch = self.dispatch.lock();
        dispatch.queue.push_back(value);
        if dispatch.draining {
            return false;
        }
        dispatch.draining = true;
        true
    }

    fn drain(&self) {
        let mut dispatch = self.dispatch.lock();
        while let Some(next) = dispatch.queue.pop_front() {
            drop(dispatch);
            self.deliver(&next);
            dispatch = self.dispatch.lock();
        }
        dispatch.draining = false;
    }

    fn deliver(&self, value: &T) {
        let callbacks: Vec<Callback<T>> = self
            .observers
            .read()
            .callbacks
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        for callback in &callbacks {
            callback(value);
        }

        let delivered = self.broadcast(value);
        debug!(
            store = self.name,
            callbacks = callbacks.len(),
            channels = delivered,
            "Store change delivered"
        );
    }

    /// Sends to every channel subscriber, dropping closed ones.
    fn broadcast(&self, value: &T) -> usize {
        let mut observers = self.observers.write();
        observers
            .channels
            .retain(|tx| tx.try_send(value.clone()).is_ok());
        observers.channels.len()
    }
}

/// Registration token returned by `subscribe`.
///
/// Dropping the token unsubscribes the callback.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Stops further notifications to this subscriber.
    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl Debug for Subscription {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

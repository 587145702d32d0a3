//! Topic-based observer list with synchronous delivery.

use core::cell::{Cell, RefCell};

/// Handle identifying one subscription, used to unsubscribe.
pub type SubscriptionId = u64;

/// Callback invoked with the published payload.
type Callback = Box<dyn FnMut(&str)>;

struct Subscriber {
    id: SubscriptionId,
    topic: String,
    callback: Callback,
}

/// Synchronous topic pub/sub channel.
///
/// Delivery runs on the publishing thread, in subscription order, before
/// `publish` returns. Subscribing or unsubscribing from inside a callback
/// is deferred until the in-flight delivery completes. A nested `publish`
/// from inside a callback delivers to no one; the observer list is held by
/// the outer delivery.
#[derive(Default)]
pub struct EventChannel {
    subscribers: RefCell<Vec<Subscriber>>,
    next_id: Cell<SubscriptionId>,
    delivering: Cell<bool>,
    retired: RefCell<Vec<SubscriptionId>>,
}

impl EventChannel {
    /// Create a channel with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` for every future publish on `topic`.
    pub fn subscribe(&self, topic: &str, callback: impl FnMut(&str) + 'static) -> SubscriptionId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        // During delivery the main list is checked out, so this push lands
        // in the pending list and is merged once delivery finishes.
        self.subscribers.borrow_mut().push(Subscriber {
            id,
            topic: String::from(topic),
            callback: Box::new(callback),
        });
        id
    }

    /// Remove the subscription with the given id.
    ///
    /// Returns `true` if the subscription was known. Called from inside a
    /// callback it always returns `true` and takes effect after the
    /// in-flight delivery completes.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        if self.delivering.get() {
            self.retired.borrow_mut().push(id);
            return true;
        }
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        subscribers.len() != before
    }

    /// Deliver `payload` to every current subscriber of `topic`, in
    /// subscription order. Returns the number of callbacks invoked.
    pub fn publish(&self, topic: &str, payload: &str) -> usize {
        let mut subscribers = self.subscribers.take();
        self.delivering.set(true);

        let mut delivered = 0;
        for subscriber in subscribers.iter_mut() {
            if subscriber.topic == topic {
                (subscriber.callback)(payload);
                delivered += 1;
            }
        }

        self.delivering.set(false);

        // Merge subscriptions added during delivery, then drop retired ones.
        let added = self.subscribers.take();
        subscribers.extend(added);
        let retired = core::mem::take(&mut *self.retired.borrow_mut());
        if !retired.is_empty() {
            subscribers.retain(|s| !retired.contains(&s.id));
        }
        self.subscribers.replace(subscribers);

        tracing::trace!(topic, delivered, "published");
        delivered
    }

    /// Number of live subscriptions across all topics.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

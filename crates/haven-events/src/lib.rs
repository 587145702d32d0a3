//! Haven OS Event Notification Channel
//!
//! A minimal publish/subscribe mechanism with synchronous, same-thread,
//! at-least-once delivery. Used by the desktop settings registry to notify
//! observers of theme and wallpaper changes.
//!
//! The channel is an explicit observer list owned by whichever component
//! publishes on it — there is no ambient global event bus. Components that
//! must publish or subscribe are handed a reference to the channel.

mod channel;

pub use channel::{EventChannel, SubscriptionId};

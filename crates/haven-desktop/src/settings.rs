//! Store-backed desktop settings with change notification.
//!
//! Theme and wallpaper persist in the backing store under reserved keys;
//! every change publishes the new value on the owned notification channel.
//! The channel is owned here, not ambient — components that need change
//! events are handed a reference via [`Settings::channel`].

use haven_events::{EventChannel, SubscriptionId};
use haven_store::StoreBackend;

/// Topic published when the theme changes.
pub const TOPIC_THEME: &str = "theme";
/// Topic published when the wallpaper changes.
pub const TOPIC_WALLPAPER: &str = "wallpaper";

const THEME_KEY: &str = "settings/theme";
const WALLPAPER_KEY: &str = "settings/wallpaper";

const DEFAULT_THEME: &str = "light";
const DEFAULT_WALLPAPER: &str = "default";

/// Desktop settings registry.
pub struct Settings<S: StoreBackend> {
    store: S,
    channel: EventChannel,
}

impl<S: StoreBackend> Settings<S> {
    /// Create a settings registry over its own store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            channel: EventChannel::new(),
        }
    }

    /// Current theme name.
    pub fn theme(&self) -> String {
        self.store
            .get(THEME_KEY)
            .unwrap_or_else(|| String::from(DEFAULT_THEME))
    }

    /// Persist a new theme and notify subscribers.
    pub fn set_theme(&self, theme: &str) {
        self.store.put(THEME_KEY, theme);
        self.channel.publish(TOPIC_THEME, theme);
    }

    /// Current wallpaper identifier.
    pub fn wallpaper(&self) -> String {
        self.store
            .get(WALLPAPER_KEY)
            .unwrap_or_else(|| String::from(DEFAULT_WALLPAPER))
    }

    /// Persist a new wallpaper and notify subscribers.
    pub fn set_wallpaper(&self, wallpaper: &str) {
        self.store.put(WALLPAPER_KEY, wallpaper);
        self.channel.publish(TOPIC_WALLPAPER, wallpaper);
    }

    /// Subscribe to a settings topic.
    pub fn subscribe(
        &self,
        topic: &str,
        callback: impl FnMut(&str) + 'static,
    ) -> SubscriptionId {
        self.channel.subscribe(topic, callback)
    }

    /// Remove a subscription.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.channel.unsubscribe(id)
    }

    /// The owned notification channel, for components that publish their
    /// own settings-adjacent events.
    pub fn channel(&self) -> &EventChannel {
        &self.channel
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use haven_store::MemoryStore;

    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::new(MemoryStore::new());
        assert_eq!(settings.theme(), "light");
        assert_eq!(settings.wallpaper(), "default");
    }

    #[test]
    fn test_set_persists_and_reads_back() {
        let settings = Settings::new(MemoryStore::new());

        settings.set_theme("dark");
        settings.set_wallpaper("nebula");

        assert_eq!(settings.theme(), "dark");
        assert_eq!(settings.wallpaper(), "nebula");
    }

    #[test]
    fn test_change_publishes_to_subscribers() {
        let settings = Settings::new(MemoryStore::new());
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_inner = Rc::clone(&seen);
        settings.subscribe(TOPIC_THEME, move |payload| {
            seen_inner.borrow_mut().push(String::from(payload));
        });

        settings.set_theme("dark");
        settings.set_wallpaper("nebula"); // different topic, not delivered
        settings.set_theme("solar");

        assert_eq!(*seen.borrow(), vec!["dark", "solar"]);
    }

    #[test]
    fn test_unsubscribe() {
        let settings = Settings::new(MemoryStore::new());
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_inner = Rc::clone(&seen);
        let id = settings.subscribe(TOPIC_WALLPAPER, move |payload| {
            seen_inner.borrow_mut().push(String::from(payload));
        });

        settings.set_wallpaper("one");
        assert!(settings.unsubscribe(id));
        settings.set_wallpaper("two");

        assert_eq!(*seen.borrow(), vec!["one"]);
    }
}

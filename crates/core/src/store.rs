//! State container
//!
//! Owns the current [`AppState`] and publishes every new state through a
//! `tokio::sync::watch` channel. Views subscribe and re-render on change.
//! Dispatch is synchronous; the channel only carries notifications.

use std::sync::Arc;

use tokio::sync::watch;

use crate::state::{Action, AppState, reduce};

/// Shared handle to the application state
#[derive(Debug, Clone)]
pub struct Store {
    tx: Arc<watch::Sender<AppState>>,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// Store holding the demo data, signed out
    pub fn seeded() -> Self {
        Self::new(AppState::seeded())
    }

    /// Apply one action and notify subscribers
    pub fn dispatch(&self, action: Action) {
        tracing::debug!(action = action.kind(), "Dispatching action");
        self.tx.send_modify(|state| {
            let current = std::mem::take(state);
            *state = reduce(current, action);
        });
    }

    /// Apply several actions in order
    pub fn dispatch_all(&self, actions: impl IntoIterator<Item = Action>) {
        for action in actions {
            self.dispatch(action);
        }
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> AppState {
        self.tx.borrow().clone()
    }

    /// Receiver that observes every state published after this call
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.tx.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Route;

    #[test]
    fn test_dispatch_updates_snapshot() {
        let store = Store::seeded();
        store.dispatch(Action::SetCurrentPage(Route::Projects));
        assert_eq!(store.snapshot().current_page, Route::Projects);
    }

    #[test]
    fn test_subscribers_see_changes() {
        let store = Store::seeded();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        store.dispatch(Action::SetLoading(true));

        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().loading);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_clones_share_state() {
        let store = Store::seeded();
        let handle = store.clone();
        handle.dispatch_all([Action::SetAuthenticated(true), Action::SetTelegramApp(true)]);

        let state = store.snapshot();
        assert!(state.is_authenticated);
        assert!(state.is_telegram_app);
    }
}

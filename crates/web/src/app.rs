use chrono::{Local, NaiveDate, NaiveDateTime};
use dioxus::prelude::*;
use officetrack_core::host::{HostBridge, TelegramUser, bootstrap};
use officetrack_core::navigation::{Screen, resolve_screen};
use officetrack_core::{Action, AppConfig, AppState, Store, seed};

use crate::components::{AuthPage, Dashboard, RegistrationPage};
use crate::telegram::WebAppBridge;

/// Shared handles every screen pulls from context
#[derive(Clone)]
pub struct AppContext {
    pub store: Store,
    /// Mirror of the store state; reading it subscribes the component
    pub state: Signal<AppState>,
    pub config: AppConfig,
    pub bridge: Signal<Option<WebAppBridge>>,
}

impl AppContext {
    pub fn dispatch(&self, action: Action) {
        self.store.dispatch(action);
    }

    pub fn dispatch_all(&self, actions: impl IntoIterator<Item = Action>) {
        self.store.dispatch_all(actions);
    }

    /// User Telegram passed in the init data, if any
    pub fn host_user(&self) -> Option<TelegramUser> {
        self.bridge
            .read()
            .as_ref()
            .and_then(|bridge| bridge.init_data().user.clone())
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let store = use_hook(Store::seeded);
    let mut state = use_signal(|| store.snapshot());
    let mut bridge = use_signal(|| None::<WebAppBridge>);

    // Forward every published state into the signal
    use_hook({
        let store = store.clone();
        move || {
            let mut rx = store.subscribe();
            spawn(async move {
                while rx.changed().await.is_ok() {
                    let next = rx.borrow_and_update().clone();
                    state.set(next);
                }
            });
        }
    });

    use_hook({
        let store = store.clone();
        move || {
            spawn(async move {
                let detected = WebAppBridge::detect().await;
                bridge.set(detected.clone());
                let entry = bootstrap(
                    &store,
                    detected.as_ref().map(|b| b as &dyn HostBridge),
                    &seed::registered_users(),
                );
                tracing::debug!(?entry, "Startup finished");
            });
        }
    });

    use_context_provider(|| AppContext {
        store: store.clone(),
        state,
        config: config.clone(),
        bridge,
    });

    let screen = resolve_screen(&state.read());
    match screen {
        Screen::Auth => rsx! { AuthPage {} },
        Screen::Registration => rsx! { RegistrationPage {} },
        Screen::Dashboard(page) => rsx! { Dashboard { page } },
    }
}

//! Telegram Mini App host environment
//!
//! The host (Telegram's WebView) exposes `ready()`, `expand()`, `close()` and
//! the unsigned `initDataUnsafe` payload. The app reads it once at startup to
//! pick the entry screen and to pre-fill registration.
//!
//! Nothing here verifies the init data signature: login is demo-only.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::HostError;
use crate::models::User;
use crate::navigation::Route;
use crate::state::Action;
use crate::store::Store;
use crate::types::UserId;

/// User information supplied by Telegram
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelegramUser {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub allows_write_to_pm: Option<bool>,
}

impl TelegramUser {
    pub fn user_id(&self) -> UserId {
        UserId(self.id)
    }
}

/// `initDataUnsafe`: the parsed, unverified init data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitDataUnsafe {
    #[serde(default)]
    pub user: Option<TelegramUser>,
    #[serde(default)]
    pub start_param: Option<String>,
}

impl InitDataUnsafe {
    /// Parse the raw `initData` query string
    ///
    /// `user` is url-encoded JSON; unknown keys (`auth_date`, `hash`, ...)
    /// are ignored.
    pub fn from_init_data(init_data: &str) -> Result<Self, HostError> {
        let parsed: HashMap<String, String> = url::form_urlencoded::parse(init_data.as_bytes())
            .into_owned()
            .collect();

        let user = parsed
            .get("user")
            .map(|json| serde_json::from_str::<TelegramUser>(json))
            .transpose()?;

        Ok(Self {
            user,
            start_param: parsed.get("start_param").cloned(),
        })
    }
}

/// Viewport and identity controls of the embedding host
pub trait HostBridge {
    /// Tell the host the app has rendered
    fn ready(&self);
    /// Expand the WebView to full height
    fn expand(&self);
    /// Close the Mini App
    fn close(&self);
    fn init_data(&self) -> &InitDataUnsafe;
}

/// Where the app should start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Host user is already registered: sign straight in
    SignedIn(User),
    /// Host user is new: show the registration form
    Registration,
    /// Plain browser, or the host sent no user: show the auth screen
    Auth,
}

impl Entry {
    pub fn actions(self) -> Vec<Action> {
        match self {
            Entry::SignedIn(user) => Vec::from(Action::sign_in(user)),
            Entry::Registration => vec![Action::SetCurrentPage(Route::Registration)],
            Entry::Auth => Vec::new(),
        }
    }
}

/// Pick the entry state for a host user against the registered directory
pub fn entry_for(host_user: Option<&TelegramUser>, registered: &[User]) -> Entry {
    let Some(host_user) = host_user else {
        return Entry::Auth;
    };

    registered
        .iter()
        .find(|user| user.id == host_user.user_id())
        .map_or(Entry::Registration, |user| Entry::SignedIn(user.clone()))
}

/// Startup sequence run once when the app mounts
///
/// Records whether a host is present, signals `ready`/`expand` to it and
/// dispatches the entry actions. A signed-in user with a `start_param` lands
/// on that page instead of the default one.
pub fn bootstrap(store: &Store, bridge: Option<&dyn HostBridge>, registered: &[User]) -> Entry {
    store.dispatch(Action::SetTelegramApp(bridge.is_some()));

    let Some(bridge) = bridge else {
        tracing::info!("Running outside Telegram, showing auth screen");
        return Entry::Auth;
    };

    bridge.ready();
    bridge.expand();

    let host_user = bridge.init_data().user.as_ref();
    let entry = entry_for(host_user, registered);
    match &entry {
        Entry::SignedIn(user) => {
            tracing::info!(user_id = %user.id, "Registered Telegram user signed in");
        }
        Entry::Registration => {
            tracing::info!(
                telegram_id = ?host_user.map(|u| u.id),
                "Unregistered Telegram user, opening registration"
            );
        }
        Entry::Auth => tracing::info!("Telegram host sent no user"),
    }

    store.dispatch_all(entry.clone().actions());

    if let (Entry::SignedIn(_), Some(page_id)) =
        (&entry, bridge.init_data().start_param.as_deref())
    {
        match Route::from_page_id(page_id) {
            Route::Auth | Route::Registration => {
                tracing::debug!(page_id, "Ignoring start_param for signed-in user");
            }
            route => {
                tracing::info!(page_id, "Opening deep link");
                store.dispatch(Action::SetCurrentPage(route));
            }
        }
    }

    entry
}

/// Link that opens the bot in Telegram
pub fn telegram_login_url(bot_username: &str) -> String {
    format!("https://t.me/{}", bot_username.trim_start_matches('@'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use std::cell::RefCell;

    struct FakeHost {
        init: InitDataUnsafe,
        calls: RefCell<Vec<&'static str>>,
    }

    impl FakeHost {
        fn with_user(id: i64) -> Self {
            Self {
                init: InitDataUnsafe {
                    user: Some(TelegramUser {
                        id,
                        first_name: "Test".to_string(),
                        last_name: Some("User".to_string()),
                        username: None,
                        photo_url: None,
                        allows_write_to_pm: None,
                    }),
                    start_param: None,
                },
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl HostBridge for FakeHost {
        fn ready(&self) {
            self.calls.borrow_mut().push("ready");
        }
        fn expand(&self) {
            self.calls.borrow_mut().push("expand");
        }
        fn close(&self) {
            self.calls.borrow_mut().push("close");
        }
        fn init_data(&self) -> &InitDataUnsafe {
            &self.init
        }
    }

    #[test]
    fn test_parse_init_data() {
        let init_data = "query_id=AAGPK&user=%7B%22id%22%3A123%2C%22first_name%22%3A%22Test%22%2C%22username%22%3A%22tester%22%7D&auth_date=1736950000&start_param=reports&hash=abc";
        let parsed = InitDataUnsafe::from_init_data(init_data).unwrap();

        let user = parsed.user.unwrap();
        assert_eq!(user.id, 123);
        assert_eq!(user.first_name, "Test");
        assert_eq!(user.username.as_deref(), Some("tester"));
        assert!(user.last_name.is_none());
        assert_eq!(parsed.start_param.as_deref(), Some("reports"));
    }

    #[test]
    fn test_parse_init_data_without_user() {
        let parsed = InitDataUnsafe::from_init_data("auth_date=1&hash=abc").unwrap();
        assert_eq!(parsed, InitDataUnsafe::default());
    }

    #[test]
    fn test_parse_init_data_invalid_user_json() {
        let result = InitDataUnsafe::from_init_data("user=%7Bnot-json");
        assert!(matches!(result, Err(HostError::InvalidUser(_))));
    }

    #[test]
    fn test_bootstrap_without_host() {
        let store = Store::seeded();
        let entry = bootstrap(&store, None, &seed::registered_users());

        assert_eq!(entry, Entry::Auth);
        let state = store.snapshot();
        assert!(!state.is_telegram_app);
        assert_eq!(state.current_page, Route::Auth);
    }

    #[test]
    fn test_bootstrap_registered_user_goes_to_dashboard() {
        let store = Store::seeded();
        let host = FakeHost::with_user(seed::DIRECTOR_ID.0);

        let entry = bootstrap(&store, Some(&host), &seed::registered_users());

        assert_eq!(entry, Entry::SignedIn(seed::director()));
        assert_eq!(*host.calls.borrow(), vec!["ready", "expand"]);
        let state = store.snapshot();
        assert!(state.is_telegram_app);
        assert!(state.is_authenticated);
        assert_eq!(state.current_page, Route::Dashboard);
    }

    #[test]
    fn test_bootstrap_unknown_user_goes_to_registration() {
        let store = Store::seeded();
        let host = FakeHost::with_user(42);

        let entry = bootstrap(&store, Some(&host), &seed::registered_users());

        assert_eq!(entry, Entry::Registration);
        let state = store.snapshot();
        assert!(!state.is_authenticated);
        assert!(state.user.is_none());
        assert_eq!(state.current_page, Route::Registration);
    }

    #[test]
    fn test_bootstrap_start_param_opens_page() {
        let store = Store::seeded();
        let mut host = FakeHost::with_user(seed::DIRECTOR_ID.0);
        host.init.start_param = Some("reports".to_string());

        bootstrap(&store, Some(&host), &seed::registered_users());

        assert_eq!(store.snapshot().current_page, Route::Reports);
    }

    #[test]
    fn test_bootstrap_start_param_employee_detail() {
        let store = Store::seeded();
        let mut host = FakeHost::with_user(seed::DIRECTOR_ID.0);
        host.init.start_param = Some("employee-detail-abc".to_string());

        bootstrap(&store, Some(&host), &seed::registered_users());

        assert_eq!(store.snapshot().current_page, Route::EmployeeDetail(None));
    }

    #[test]
    fn test_bootstrap_unknown_start_param_falls_back_to_dashboard() {
        let store = Store::seeded();
        let mut host = FakeHost::with_user(seed::DIRECTOR_ID.0);
        host.init.start_param = Some("no-such-page".to_string());

        bootstrap(&store, Some(&host), &seed::registered_users());

        assert_eq!(store.snapshot().current_page, Route::Dashboard);
    }

    #[test]
    fn test_bootstrap_start_param_ignored_for_unregistered_user() {
        let store = Store::seeded();
        let mut host = FakeHost::with_user(42);
        host.init.start_param = Some("reports".to_string());

        assert_eq!(
            bootstrap(&store, Some(&host), &seed::registered_users()),
            Entry::Registration
        );
        assert_eq!(store.snapshot().current_page, Route::Registration);
    }

    #[test]
    fn test_bootstrap_host_without_user_stays_on_auth() {
        let store = Store::seeded();
        let mut host = FakeHost::with_user(1);
        host.init.user = None;

        assert_eq!(
            bootstrap(&store, Some(&host), &seed::registered_users()),
            Entry::Auth
        );
        assert!(store.snapshot().is_telegram_app);
        assert_eq!(store.snapshot().current_page, Route::Auth);
    }

    #[test]
    fn test_telegram_login_url() {
        assert_eq!(telegram_login_url("tracker_bot"), "https://t.me/tracker_bot");
        assert_eq!(telegram_login_url("@tracker_bot"), "https://t.me/tracker_bot");
    }
}

//! Officetrack Core - state, navigation and domain logic
//!
//! This crate holds everything the Mini App does apart from drawing: the
//! models and demo data, the reducer and its store, page routing, the host
//! bridge contract, form validation and the derived views.
//! It performs no I/O besides reading configuration.

pub mod config;
pub mod error;
pub mod forms;
pub mod host;
pub mod models;
pub mod navigation;
pub mod seed;
pub mod state;
pub mod store;
pub mod types;
pub mod views;

pub use config::AppConfig;
pub use error::{ConfigError, FormError, HostError, RouteError};
pub use host::{Entry, HostBridge, InitDataUnsafe, TelegramUser, bootstrap};
pub use models::{Meeting, Office, OfficePlan, Project, Role, User};
pub use navigation::{Page, Route, Screen, navigation_items, resolve_screen};
pub use state::{Action, AppState, reduce};
pub use store::Store;
pub use types::{MeetingId, OfficeId, ProjectId, UserId};

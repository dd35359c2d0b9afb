//! Client-side navigation
//!
//! The current screen is a [`Route`] stored in the application state. Routes
//! still have the string page ids the Mini App has always used
//! (`"office-planning"`, `"employee-detail-987654321"`, ...) so deep links
//! and `start_param` values keep working.

use std::fmt;
use std::str::FromStr;

use crate::error::RouteError;
use crate::models::User;
use crate::state::AppState;
use crate::types::UserId;

const EMPLOYEE_DETAIL_PREFIX: &str = "employee-detail-";

/// Navigation target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Auth,
    Registration,
    Dashboard,
    OfficePlanning,
    Projects,
    Meetings,
    Employees,
    Reports,
    CreateMeeting,
    /// Detail card for one employee. `None` when the page id carried an
    /// unparseable id; it renders as "employee not found".
    EmployeeDetail(Option<UserId>),
}

impl Route {
    pub fn employee_detail(id: UserId) -> Self {
        Route::EmployeeDetail(Some(id))
    }

    /// String page id for this route
    pub fn page_id(&self) -> String {
        match self {
            Route::Auth => "auth".to_string(),
            Route::Registration => "registration".to_string(),
            Route::Dashboard => "dashboard".to_string(),
            Route::OfficePlanning => "office-planning".to_string(),
            Route::Projects => "projects".to_string(),
            Route::Meetings => "meetings".to_string(),
            Route::Employees => "employees".to_string(),
            Route::Reports => "reports".to_string(),
            Route::CreateMeeting => "create-meeting".to_string(),
            Route::EmployeeDetail(Some(id)) => format!("{}{}", EMPLOYEE_DETAIL_PREFIX, id),
            Route::EmployeeDetail(None) => format!("{}unknown", EMPLOYEE_DETAIL_PREFIX),
        }
    }

    /// Lenient page-id lookup used for deep links
    ///
    /// Unknown ids land on the default dashboard screen. An
    /// `employee-detail-` id with a bad suffix keeps the detail route so the
    /// screen can say the employee was not found.
    pub fn from_page_id(page_id: &str) -> Self {
        match page_id.parse::<Route>() {
            Ok(route) => route,
            Err(RouteError::InvalidEmployeeId(_)) => Route::EmployeeDetail(None),
            Err(RouteError::UnknownPage(id)) => {
                tracing::debug!(page_id = %id, "Unknown page id, falling back to dashboard");
                Route::Dashboard
            }
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(page_id: &str) -> Result<Self, Self::Err> {
        if let Some(suffix) = page_id.strip_prefix(EMPLOYEE_DETAIL_PREFIX) {
            return suffix
                .parse::<i64>()
                .map(|id| Route::employee_detail(UserId(id)))
                .map_err(|_| RouteError::InvalidEmployeeId(suffix.to_string()));
        }

        match page_id {
            "auth" => Ok(Route::Auth),
            "registration" => Ok(Route::Registration),
            "dashboard" => Ok(Route::Dashboard),
            "office-planning" => Ok(Route::OfficePlanning),
            "projects" => Ok(Route::Projects),
            "meetings" => Ok(Route::Meetings),
            "employees" => Ok(Route::Employees),
            "reports" => Ok(Route::Reports),
            "create-meeting" => Ok(Route::CreateMeeting),
            other => Err(RouteError::UnknownPage(other.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.page_id())
    }
}

/// Dashboard sub-page actually rendered below the top bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    OfficePlanning,
    Projects,
    Meetings,
    Employees,
    Reports,
    CreateMeeting,
    EmployeeDetail(Option<UserId>),
}

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Auth,
    Registration,
    Dashboard(Page),
}

/// Decide which screen the current state renders
pub fn resolve_screen(state: &AppState) -> Screen {
    if !state.is_authenticated {
        return match state.current_page {
            Route::Registration => Screen::Registration,
            _ => Screen::Auth,
        };
    }

    let page = match state.current_page {
        Route::Auth | Route::Registration | Route::Dashboard | Route::OfficePlanning => {
            Page::OfficePlanning
        }
        Route::Projects => Page::Projects,
        Route::Meetings => Page::Meetings,
        Route::Employees => Page::Employees,
        Route::Reports => Page::Reports,
        Route::CreateMeeting => Page::CreateMeeting,
        Route::EmployeeDetail(id) => Page::EmployeeDetail(id),
    };
    Screen::Dashboard(page)
}

/// Bottom navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
    pub director_only: bool,
}

impl NavItem {
    pub fn is_active(&self, current: &Route) -> bool {
        self.route == *current
    }
}

const COMMON_ITEMS: [NavItem; 3] = [
    NavItem {
        route: Route::OfficePlanning,
        label: "Офисы",
        director_only: false,
    },
    NavItem {
        route: Route::Projects,
        label: "Проекты",
        director_only: false,
    },
    NavItem {
        route: Route::Meetings,
        label: "Встречи",
        director_only: false,
    },
];

const DIRECTOR_ITEMS: [NavItem; 3] = [
    NavItem {
        route: Route::Employees,
        label: "Сотрудники",
        director_only: true,
    },
    NavItem {
        route: Route::Reports,
        label: "Отчёты",
        director_only: true,
    },
    NavItem {
        route: Route::CreateMeeting,
        label: "Встреча",
        director_only: true,
    },
];

/// Navigation items visible to `user`
///
/// Directors get the management row. This only hides items; routes are not
/// guarded anywhere else.
pub fn navigation_items(user: Option<&User>) -> Vec<NavItem> {
    let mut items = COMMON_ITEMS.to_vec();
    if user.is_some_and(User::is_director) {
        items.extend(DIRECTOR_ITEMS);
    }
    items
}

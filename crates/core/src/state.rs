//! Application state and its reducer
//!
//! `reduce` is the only place state changes. It is pure and total: every
//! action produces a new state and none of them can fail.

use crate::models::{Meeting, Office, OfficePlan, Project, User};
use crate::navigation::Route;
use crate::seed;

/// Whole-app state shared by every screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub current_page: Route,
    pub offices: Vec<Office>,
    pub office_plans: Vec<OfficePlan>,
    pub projects: Vec<Project>,
    pub meetings: Vec<Meeting>,
    /// Employee directory read by the director screens (static)
    pub employees: Vec<User>,
    pub loading: bool,
    pub is_telegram_app: bool,
}

impl AppState {
    /// Initial state: signed out, on the auth screen, demo data loaded
    pub fn seeded() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            current_page: Route::Auth,
            offices: seed::offices(),
            office_plans: seed::office_plans(),
            projects: seed::projects(),
            meetings: seed::meetings(),
            employees: seed::employees(),
            loading: false,
            is_telegram_app: false,
        }
    }
}

/// State transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetUser(User),
    SetAuthenticated(bool),
    SetCurrentPage(Route),
    SetLoading(bool),
    SetTelegramApp(bool),
    /// Insert or replace the plan for the payload's (date, user)
    UpdateOfficePlan(OfficePlan),
    AddMeeting(Meeting),
}

impl Action {
    /// Short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SetUser(_) => "SET_USER",
            Action::SetAuthenticated(_) => "SET_AUTHENTICATED",
            Action::SetCurrentPage(_) => "SET_CURRENT_PAGE",
            Action::SetLoading(_) => "SET_LOADING",
            Action::SetTelegramApp(_) => "SET_TELEGRAM_APP",
            Action::UpdateOfficePlan(_) => "UPDATE_OFFICE_PLAN",
            Action::AddMeeting(_) => "ADD_MEETING",
        }
    }

    /// The login sequence: set the user, mark authenticated, open the dashboard
    pub fn sign_in(user: User) -> [Action; 3] {
        [
            Action::SetUser(user),
            Action::SetAuthenticated(true),
            Action::SetCurrentPage(Route::Dashboard),
        ]
    }
}

/// Compute the next state
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::SetUser(user) => state.user = Some(user),
        Action::SetAuthenticated(value) => state.is_authenticated = value,
        Action::SetCurrentPage(route) => state.current_page = route,
        Action::SetLoading(value) => state.loading = value,
        Action::SetTelegramApp(value) => state.is_telegram_app = value,
        Action::UpdateOfficePlan(plan) => upsert_plan(&mut state.office_plans, plan),
        Action::AddMeeting(meeting) => state.meetings.push(meeting),
    }
    state
}

/// Drop any plan in the same (date, user) slot, then append `plan`
///
/// The replacement always ends up last.
pub fn upsert_plan(plans: &mut Vec<OfficePlan>, plan: OfficePlan) {
    plans.retain(|existing| !existing.same_slot(&plan));
    plans.push(plan);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::types::{OfficeId, UserId};
    use chrono::NaiveDate;

    fn plan(day: u32, office: Option<&str>, user: i64) -> OfficePlan {
        OfficePlan::new(
            NaiveDate::from_ymd_opt(2025, 2, day).unwrap(),
            office.map(OfficeId::from),
            UserId(user),
        )
    }

    #[test]
    fn test_seeded_initial_state() {
        let state = AppState::seeded();
        assert!(state.user.is_none());
        assert!(!state.is_authenticated);
        assert_eq!(state.current_page, Route::Auth);
        assert_eq!(state.offices.len(), 4);
        assert_eq!(state.meetings.len(), 3);
        assert!(!state.loading);
        assert!(!state.is_telegram_app);
    }

    #[test]
    fn test_flag_actions() {
        let state = reduce(AppState::default(), Action::SetAuthenticated(true));
        assert!(state.is_authenticated);
        let state = reduce(state, Action::SetLoading(true));
        assert!(state.loading);
        let state = reduce(state, Action::SetTelegramApp(true));
        assert!(state.is_telegram_app);
        let state = reduce(state, Action::SetAuthenticated(false));
        assert!(!state.is_authenticated);
    }

    #[test]
    fn test_set_user_replaces_wholesale() {
        let mut director = seed::director();
        let state = reduce(AppState::default(), Action::SetUser(director.clone()));

        director.role = Role::Employee;
        director.phone = None;
        let state = reduce(state, Action::SetUser(director.clone()));
        assert_eq!(state.user, Some(director));
    }

    #[test]
    fn test_set_current_page_accepts_any_route() {
        // No role or auth check happens at the reducer
        let state = reduce(AppState::seeded(), Action::SetCurrentPage(Route::Reports));
        assert_eq!(state.current_page, Route::Reports);
        assert!(!state.is_authenticated);
    }

    #[test]
    fn test_update_office_plan_inserts_new_slot() {
        let state = AppState::default();
        let state = reduce(state, Action::UpdateOfficePlan(plan(3, Some("office-1"), 1)));
        let state = reduce(state, Action::UpdateOfficePlan(plan(4, None, 1)));
        assert_eq!(state.office_plans.len(), 2);
    }

    #[test]
    fn test_update_office_plan_replaces_and_moves_to_end() {
        let mut state = AppState::default();
        state.office_plans = vec![
            plan(3, Some("office-1"), 1),
            plan(4, Some("office-2"), 1),
            plan(3, Some("office-3"), 2),
        ];

        let state = reduce(state, Action::UpdateOfficePlan(plan(3, None, 1)));

        assert_eq!(
            state.office_plans,
            vec![
                plan(4, Some("office-2"), 1),
                plan(3, Some("office-3"), 2),
                plan(3, None, 1),
            ]
        );
    }

    #[test]
    fn test_update_office_plan_idempotent() {
        let payload = plan(5, Some(OfficeId::REMOTE), 7);
        let once = reduce(AppState::seeded(), Action::UpdateOfficePlan(payload.clone()));
        let twice = reduce(once.clone(), Action::UpdateOfficePlan(payload));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_add_meeting_appends_without_uniqueness_check() {
        let state = AppState::seeded();
        let duplicate = state.meetings[0].clone();
        let before = state.meetings.clone();

        let state = reduce(state, Action::AddMeeting(duplicate.clone()));

        assert_eq!(state.meetings.len(), before.len() + 1);
        assert_eq!(state.meetings[..before.len()], before[..]);
        assert_eq!(state.meetings.last(), Some(&duplicate));
    }

    #[test]
    fn test_sign_in_sequence() {
        let state = Action::sign_in(seed::director())
            .into_iter()
            .fold(AppState::seeded(), reduce);
        assert!(state.is_authenticated);
        assert_eq!(state.current_page, Route::Dashboard);
        assert_eq!(state.user.map(|u| u.id), Some(seed::DIRECTOR_ID));
    }

    #[test]
    fn test_action_kind_names() {
        assert_eq!(Action::SetLoading(true).kind(), "SET_LOADING");
        assert_eq!(
            Action::SetCurrentPage(Route::Auth).kind(),
            "SET_CURRENT_PAGE"
        );
    }
}

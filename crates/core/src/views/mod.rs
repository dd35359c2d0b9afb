//! Read-only projections of [`AppState`](crate::state::AppState) used by the screens
//!
//! Everything here is pure; callers pass `today`/`now` in explicitly.

pub mod calendar;
pub mod employees;
pub mod meetings;
pub mod projects;
pub mod reports;

pub use calendar::{CalendarDay, MonthCursor, month_grid, office_for, plan_for};
pub use employees::{find_employee, recent_plans};
pub use meetings::{MeetingFilter, Paginated, is_upcoming, meeting_page, project_name};
pub use projects::{DeadlineUrgency, days_until_deadline, deadline_label};
pub use reports::{OfficeStats, attendance_percent, office_stats_for, weekly_stats};

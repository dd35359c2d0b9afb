//! Employee directory helpers for the director screens

use chrono::NaiveDate;

use crate::models::{OfficePlan, User};
use crate::types::UserId;

/// Plans shown on an employee's card
pub const RECENT_PLAN_LIMIT: usize = 3;
/// Days either side of today that count as recent
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Up to three of `user`'s plans within a week of `today`, earliest first
pub fn recent_plans(plans: &[OfficePlan], user: UserId, today: NaiveDate) -> Vec<&OfficePlan> {
    let mut recent: Vec<&OfficePlan> = plans
        .iter()
        .filter(|plan| plan.user_id == user)
        .filter(|plan| (plan.date - today).num_days().abs() <= RECENT_WINDOW_DAYS)
        .collect();
    recent.sort_by_key(|plan| plan.date);
    recent.truncate(RECENT_PLAN_LIMIT);
    recent
}

/// Look up the employee an `employee-detail-*` route points at
pub fn find_employee(directory: &[User], id: Option<UserId>) -> Option<&User> {
    let id = id?;
    directory.iter().find(|user| user.id == id)
}

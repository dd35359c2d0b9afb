mod auth;
mod calendar;
mod common;
mod create_meeting;
mod dashboard;
mod employee_detail;
mod employees;
mod meetings;
mod office_planning;
mod projects;
mod registration;
mod reports;

pub use auth::AuthPage;
pub use dashboard::Dashboard;
pub use registration::RegistrationPage;

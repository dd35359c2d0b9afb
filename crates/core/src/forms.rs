//! Registration and meeting-creation forms
//!
//! Forms hold raw field text the way the inputs deliver it and only check
//! that required fields are present before building a domain value.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};

use crate::error::{FormError, FormResult};
use crate::host::TelegramUser;
use crate::models::{Meeting, MeetingStatus, Role, User, hhmm};
use crate::types::{MeetingId, ProjectId, UserId};

/// Shown after a meeting is created
pub const MEETING_CREATED_MESSAGE: &str = "Встреча успешно создана!";

/// Meeting duration input bounds, minutes
pub const DURATION_MIN: u32 = 15;
pub const DURATION_MAX: u32 = 480;
pub const DURATION_STEP: u32 = 15;
pub const DEFAULT_DURATION: u32 = 60;

/// The user the demo login signs in as
pub fn demo_user() -> User {
    User {
        id: UserId(123456789),
        first_name: "Demo".to_string(),
        last_name: Some("User".to_string()),
        username: None,
        photo_url: None,
        phone: None,
        role: Role::Director,
        is_registered: true,
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Registration form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl RegistrationForm {
    /// Form pre-filled with the name Telegram knows
    pub fn prefilled(host_user: Option<&TelegramUser>) -> Self {
        host_user.map_or_else(Self::default, |user| Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone().unwrap_or_default(),
            phone: String::new(),
        })
    }

    /// Build the new employee record
    ///
    /// The id is the Telegram id when the host supplied one, otherwise a
    /// placeholder derived from `now`.
    pub fn submit(&self, host_user: Option<&TelegramUser>, now: DateTime<Utc>) -> FormResult<User> {
        if is_blank(&self.first_name) || is_blank(&self.last_name) || is_blank(&self.phone) {
            tracing::debug!("Registration rejected: missing required fields");
            return Err(FormError::MissingRequiredFields);
        }

        let id = host_user.map_or_else(|| UserId(now.timestamp_millis()), TelegramUser::user_id);

        Ok(User {
            id,
            first_name: self.first_name.trim().to_string(),
            last_name: Some(self.last_name.trim().to_string()),
            username: host_user.and_then(|u| u.username.clone()),
            photo_url: host_user.and_then(|u| u.photo_url.clone()),
            phone: Some(self.phone.trim().to_string()),
            role: Role::Employee,
            is_registered: true,
        })
    }
}

/// Meeting creation form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingForm {
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD` from the date input
    pub date: String,
    /// `HH:MM` from the time input
    pub time: String,
    pub duration: u32,
    /// Empty means no project
    pub project_id: String,
    pub participant_ids: Vec<UserId>,
}

impl Default for MeetingForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            date: String::new(),
            time: String::new(),
            duration: DEFAULT_DURATION,
            project_id: String::new(),
            participant_ids: Vec::new(),
        }
    }
}

impl MeetingForm {
    /// Add or remove an invitee
    pub fn toggle_participant(&mut self, id: UserId) {
        if let Some(pos) = self.participant_ids.iter().position(|p| *p == id) {
            self.participant_ids.remove(pos);
        } else {
            self.participant_ids.push(id);
        }
    }

    pub fn is_selected(&self, id: UserId) -> bool {
        self.participant_ids.contains(&id)
    }

    /// Build the meeting
    ///
    /// The creator always comes first in the participant list, followed by
    /// the selected employees in directory order.
    pub fn submit(
        &self,
        creator: Option<&User>,
        employees: &[User],
        now: DateTime<Utc>,
    ) -> FormResult<Meeting> {
        if is_blank(&self.title)
            || is_blank(&self.date)
            || is_blank(&self.time)
            || self.participant_ids.is_empty()
        {
            tracing::debug!("Meeting rejected: missing required fields");
            return Err(FormError::MissingRequiredFields);
        }
        let creator = creator.ok_or(FormError::NotSignedIn)?;

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| FormError::InvalidDate(self.date.clone()))?;
        let time = NaiveTime::parse_from_str(self.time.trim(), hhmm::FORMAT)
            .map_err(|_| FormError::InvalidTime(self.time.clone()))?;

        let participants = std::iter::once(creator.clone())
            .chain(
                employees
                    .iter()
                    .filter(|employee| self.is_selected(employee.id))
                    .cloned(),
            )
            .collect();

        let description = self.description.trim();
        let project_id = self.project_id.trim();

        Ok(Meeting {
            id: MeetingId::from_timestamp_millis(now.timestamp_millis()),
            title: self.title.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            date,
            time,
            duration: self.duration,
            participants,
            project_id: (!project_id.is_empty()).then(|| ProjectId::new(project_id)),
            created_by: creator.id,
            status: MeetingStatus::Scheduled,
        })
    }
}

/// First date the meeting form offers: tomorrow
pub fn earliest_meeting_date(today: NaiveDate) -> NaiveDate {
    today.checked_add_days(Days::new(1)).unwrap_or(today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap()
    }

    fn host_user() -> TelegramUser {
        TelegramUser {
            id: 42,
            first_name: "Ольга".to_string(),
            last_name: Some("Иванова".to_string()),
            username: Some("olga".to_string()),
            photo_url: Some("https://t.me/i/userpic/olga.jpg".to_string()),
            allows_write_to_pm: Some(true),
        }
    }

    fn filled_meeting_form() -> MeetingForm {
        MeetingForm {
            title: "Ретро".to_string(),
            description: String::new(),
            date: "2025-01-21".to_string(),
            time: "11:30".to_string(),
            duration: 45,
            project_id: String::new(),
            participant_ids: vec![UserId(111222333), UserId(987654321)],
        }
    }

    #[test]
    fn test_registration_prefill() {
        let host = host_user();
        let form = RegistrationForm::prefilled(Some(&host));
        assert_eq!(form.first_name, "Ольга");
        assert_eq!(form.last_name, "Иванова");
        assert!(form.phone.is_empty());

        assert_eq!(RegistrationForm::prefilled(None), RegistrationForm::default());
    }

    #[test]
    fn test_registration_requires_all_fields() {
        let form = RegistrationForm {
            first_name: "A".to_string(),
            last_name: "  ".to_string(),
            phone: "123".to_string(),
        };
        assert_eq!(
            form.submit(None, now()),
            Err(FormError::MissingRequiredFields)
        );
    }

    #[test]
    fn test_registration_uses_host_identity() {
        let host = host_user();
        let form = RegistrationForm {
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            phone: "123".to_string(),
        };

        let user = form.submit(Some(&host), now()).unwrap();
        assert_eq!(user.id, UserId(42));
        assert_eq!(user.role, Role::Employee);
        assert!(user.is_registered);
        assert_eq!(user.username.as_deref(), Some("olga"));
        assert_eq!(user.phone.as_deref(), Some("123"));
    }

    #[test]
    fn test_registration_placeholder_id_without_host() {
        let form = RegistrationForm {
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            phone: "123".to_string(),
        };

        let user = form.submit(None, now()).unwrap();
        assert_eq!(user.id, UserId(now().timestamp_millis()));
        assert!(user.username.is_none());
        assert!(user.photo_url.is_none());
    }

    #[test]
    fn test_toggle_participant() {
        let mut form = MeetingForm::default();
        form.toggle_participant(UserId(1));
        form.toggle_participant(UserId(2));
        assert_eq!(form.participant_ids, vec![UserId(1), UserId(2)]);

        form.toggle_participant(UserId(1));
        assert_eq!(form.participant_ids, vec![UserId(2)]);
        assert!(!form.is_selected(UserId(1)));
    }

    #[test]
    fn test_meeting_requires_participants() {
        let mut form = filled_meeting_form();
        form.participant_ids.clear();
        let director = seed::director();
        assert_eq!(
            form.submit(Some(&director), &seed::employees(), now()),
            Err(FormError::MissingRequiredFields)
        );
    }

    #[test]
    fn test_meeting_requires_signed_in_creator() {
        let form = filled_meeting_form();
        assert_eq!(
            form.submit(None, &seed::employees(), now()),
            Err(FormError::NotSignedIn)
        );
    }

    #[test]
    fn test_meeting_rejects_malformed_time() {
        let mut form = filled_meeting_form();
        form.time = "half past".to_string();
        let director = seed::director();
        assert_eq!(
            form.submit(Some(&director), &seed::employees(), now()),
            Err(FormError::InvalidTime("half past".to_string()))
        );
    }

    #[test]
    fn test_meeting_submit_builds_scheduled_meeting() {
        let form = filled_meeting_form();
        let director = seed::director();

        let meeting = form
            .submit(Some(&director), &seed::employees(), now())
            .unwrap();

        assert_eq!(meeting.id.as_str(), "meeting-1736933400000");
        assert_eq!(meeting.status, MeetingStatus::Scheduled);
        assert_eq!(meeting.created_by, director.id);
        assert!(meeting.description.is_none());
        assert!(meeting.project_id.is_none());
        assert_eq!(meeting.duration, 45);

        let ids: Vec<_> = meeting.participants.iter().map(|p| p.id).collect();
        assert_eq!(
            ids,
            vec![director.id, UserId(987654321), UserId(111222333)]
        );
    }

    #[test]
    fn test_meeting_keeps_project_reference() {
        let mut form = filled_meeting_form();
        form.project_id = "project-2".to_string();
        form.description = "Итоги спринта".to_string();
        let director = seed::director();

        let meeting = form
            .submit(Some(&director), &seed::employees(), now())
            .unwrap();
        assert_eq!(meeting.project_id, Some(ProjectId::from("project-2")));
        assert_eq!(meeting.description.as_deref(), Some("Итоги спринта"));
    }

    #[test]
    fn test_earliest_meeting_date_is_tomorrow() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert_eq!(
            earliest_meeting_date(today),
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
        );
    }

    #[test]
    fn test_demo_user_is_director() {
        let user = demo_user();
        assert!(user.is_director());
        assert_eq!(user.full_name(), "Demo User");
    }
}

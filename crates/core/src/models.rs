//! Core domain models for the office planner
//!
//! These models mirror the JSON shapes the Mini App has always used, so the
//! serde representation keeps the snake_case field names and string enums.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::types::{MeetingId, OfficeId, ProjectId, UserId};

/// User role; directors get the management screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Employee,
    Director,
}

impl Role {
    /// Human-readable role name shown under the user's name
    pub fn label(self) -> &'static str {
        match self {
            Role::Employee => "Сотрудник",
            Role::Director => "Директор",
        }
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: Role,
    pub is_registered: bool,
}

impl User {
    pub fn is_director(&self) -> bool {
        self.role == Role::Director
    }

    /// "First Last", or just the first name when there is no last name
    pub fn full_name(&self) -> String {
        match self.last_name.as_deref() {
            Some(last) if !last.is_empty() => format!("{} {}", self.first_name, last),
            _ => self.first_name.clone(),
        }
    }

    /// Avatar fallback: first letter of the first and last names
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.iter().flat_map(|last| last.chars().take(1)))
            .collect()
    }
}

/// "N участник(а/ов)" with Russian plural rules
pub fn participants_label(count: usize) -> String {
    let word = match (count % 10, count % 100) {
        (1, rem) if rem != 11 => "участник",
        (2..=4, rem) if !(12..=14).contains(&rem) => "участника",
        _ => "участников",
    };
    format!("{} {}", count, word)
}

/// Office entity (immutable reference data)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Office {
    pub id: OfficeId,
    pub name: String,
    pub color: String, // Hex color for UI
    pub address: String,
}

/// A single day's location assignment for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficePlan {
    pub date: NaiveDate,
    pub office_id: Option<OfficeId>, // None means absence
    pub user_id: UserId,
}

/// What an [`OfficePlan`] says about where the user is
///
/// Remote work and absence are separate categories: reports count remote
/// work as presence, absence is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanKind<'a> {
    Office(&'a OfficeId),
    Remote,
    Absence,
}

impl OfficePlan {
    pub fn new(date: NaiveDate, office_id: Option<OfficeId>, user_id: UserId) -> Self {
        Self {
            date,
            office_id,
            user_id,
        }
    }

    pub fn kind(&self) -> PlanKind<'_> {
        match &self.office_id {
            None => PlanKind::Absence,
            Some(id) if id.is_remote() => PlanKind::Remote,
            Some(id) => PlanKind::Office(id),
        }
    }

    pub fn is_absence(&self) -> bool {
        self.office_id.is_none()
    }

    /// Whether this plan occupies the same (date, user) slot as `other`
    pub fn same_slot(&self, other: &OfficePlan) -> bool {
        self.date == other.date && self.user_id == other.user_id
    }
}

/// Project status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    Completed,
    OnHold,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Active => "Активный",
            ProjectStatus::Completed => "Завершен",
            ProjectStatus::OnHold => "Приостановлен",
        }
    }
}

/// Project entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub deadline: NaiveDate,
    pub participants: Vec<User>,
    pub progress: u8, // 0..=100
    pub status: ProjectStatus,
}

/// Meeting status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl MeetingStatus {
    pub fn label(self) -> &'static str {
        match self {
            MeetingStatus::Scheduled => "Запланировано",
            MeetingStatus::Completed => "Завершено",
            MeetingStatus::Cancelled => "Отменено",
        }
    }
}

/// Meeting entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: MeetingId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub duration: u32, // minutes
    pub participants: Vec<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    pub created_by: UserId,
    pub status: MeetingStatus,
}

/// `HH:MM` wire format for meeting start times
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: &str, last: Option<&str>) -> User {
        User {
            id: UserId(1),
            first_name: first.to_string(),
            last_name: last.map(str::to_string),
            username: None,
            photo_url: None,
            phone: None,
            role: Role::Employee,
            is_registered: true,
        }
    }

    #[test]
    fn test_full_name_and_initials() {
        let anna = user("Анна", Some("Смирнова"));
        assert_eq!(anna.full_name(), "Анна Смирнова");
        assert_eq!(anna.initials(), "АС");

        let solo = user("Demo", None);
        assert_eq!(solo.full_name(), "Demo");
        assert_eq!(solo.initials(), "D");
    }

    #[test]
    fn test_participants_label_plural_forms() {
        assert_eq!(participants_label(1), "1 участник");
        assert_eq!(participants_label(3), "3 участника");
        assert_eq!(participants_label(5), "5 участников");
        assert_eq!(participants_label(11), "11 участников");
        assert_eq!(participants_label(21), "21 участник");
    }

    #[test]
    fn test_plan_kind_keeps_remote_and_absence_apart() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
        let absence = OfficePlan::new(date, None, UserId(1));
        let remote = OfficePlan::new(date, Some(OfficeId::remote()), UserId(1));
        let office = OfficePlan::new(date, Some(OfficeId::from("office-1")), UserId(1));

        assert_eq!(absence.kind(), PlanKind::Absence);
        assert_eq!(remote.kind(), PlanKind::Remote);
        assert!(matches!(office.kind(), PlanKind::Office(id) if id.as_str() == "office-1"));
        assert!(absence.same_slot(&remote));
    }

    #[test]
    fn test_office_plan_wire_format() {
        let json = r#"{"date":"2025-01-17","office_id":null,"user_id":123456789}"#;
        let plan: OfficePlan = serde_json::from_str(json).unwrap();
        assert!(plan.is_absence());
        assert_eq!(serde_json::to_string(&plan).unwrap(), json);
    }

    #[test]
    fn test_meeting_time_uses_hh_mm() {
        let json = r#"{
            "id": "meeting-1",
            "title": "Планерка",
            "date": "2025-01-20",
            "time": "10:00",
            "duration": 60,
            "participants": [],
            "created_by": 123456789,
            "status": "scheduled"
        }"#;
        let meeting: Meeting = serde_json::from_str(json).unwrap();
        assert_eq!(meeting.time, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert!(meeting.project_id.is_none());

        let out = serde_json::to_value(&meeting).unwrap();
        assert_eq!(out["time"], "10:00");
        assert_eq!(out["status"], "scheduled");
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&ProjectStatus::OnHold).unwrap(),
            "\"on_hold\""
        );
        assert_eq!(
            serde_json::to_string(&Role::Director).unwrap(),
            "\"director\""
        );
    }
}

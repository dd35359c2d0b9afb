//! Type-safe wrappers for domain identifiers
//!
//! These newtypes prevent mixing different ID types at compile time.
//! For example, you cannot pass a UserId where an OfficeId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// User identifier (the Telegram user id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        UserId(id)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// Office identifier
///
/// `"remote"` is a sentinel office standing for remote work.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfficeId(pub String);

impl OfficeId {
    /// Id of the remote-work pseudo office
    pub const REMOTE: &'static str = "remote";

    pub fn new(id: impl Into<String>) -> Self {
        OfficeId(id.into())
    }

    pub fn remote() -> Self {
        OfficeId(Self::REMOTE.to_string())
    }

    pub fn is_remote(&self) -> bool {
        self.0 == Self::REMOTE
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OfficeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OfficeId {
    fn from(id: &str) -> Self {
        OfficeId(id.to_string())
    }
}

/// Project identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        ProjectId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(id: &str) -> Self {
        ProjectId(id.to_string())
    }
}

/// Meeting identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeetingId(pub String);

impl MeetingId {
    pub fn new(id: impl Into<String>) -> Self {
        MeetingId(id.into())
    }

    /// Build the id of a meeting created at `millis` since the epoch
    pub fn from_timestamp_millis(millis: i64) -> Self {
        MeetingId(format!("meeting-{}", millis))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MeetingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MeetingId {
    fn from(id: &str) -> Self {
        MeetingId(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_from_i64() {
        let user_id = UserId::from(987654321);
        assert_eq!(i64::from(user_id), 987654321);
    }

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserId(123456789).to_string(), "123456789");
    }

    #[test]
    fn test_office_id_remote_sentinel() {
        assert!(OfficeId::remote().is_remote());
        assert!(OfficeId::from("remote").is_remote());
        assert!(!OfficeId::from("office-1").is_remote());
    }

    #[test]
    fn test_meeting_id_from_timestamp() {
        let id = MeetingId::from_timestamp_millis(1736950000000);
        assert_eq!(id.as_str(), "meeting-1736950000000");
    }

    #[test]
    fn test_user_id_serialization_is_transparent() {
        let json = serde_json::to_string(&UserId(42)).unwrap();
        assert_eq!(json, "42");
        let office: OfficeId = serde_json::from_str("\"office-2\"").unwrap();
        assert_eq!(office, OfficeId::from("office-2"));
    }
}

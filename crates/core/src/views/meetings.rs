//! Meeting list: status filter, pagination and upcoming badge

use chrono::NaiveDateTime;

use crate::models::{Meeting, MeetingStatus, Project};
use crate::types::ProjectId;

/// Default number of meetings per page
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Tabs above the meeting list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeetingFilter {
    #[default]
    All,
    Scheduled,
    Completed,
}

impl MeetingFilter {
    pub const ALL: [MeetingFilter; 3] = [
        MeetingFilter::All,
        MeetingFilter::Scheduled,
        MeetingFilter::Completed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MeetingFilter::All => "Все",
            MeetingFilter::Scheduled => "Предстоящие",
            MeetingFilter::Completed => "Завершенные",
        }
    }

    pub fn matches(self, meeting: &Meeting) -> bool {
        match self {
            MeetingFilter::All => true,
            MeetingFilter::Scheduled => meeting.status == MeetingStatus::Scheduled,
            MeetingFilter::Completed => meeting.status == MeetingStatus::Completed,
        }
    }
}

/// One page of a filtered list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginated<'a, T> {
    pub items: Vec<&'a T>,
    /// 1-based, clamped into range
    pub page: usize,
    /// Zero when nothing matched
    pub total_pages: usize,
}

impl<T> Paginated<'_, T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Split `items` into pages of `page_size` and return page `page`
pub fn paginate<T>(items: Vec<&T>, page: usize, page_size: usize) -> Paginated<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size);
    let page = page.clamp(1, total_pages.max(1));

    let items = items
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    Paginated {
        items,
        page,
        total_pages,
    }
}

/// Filter, then paginate, keeping list order
pub fn meeting_page(
    meetings: &[Meeting],
    filter: MeetingFilter,
    page: usize,
    page_size: usize,
) -> Paginated<'_, Meeting> {
    let matching = meetings.iter().filter(|m| filter.matches(m)).collect();
    paginate(matching, page, page_size)
}

/// Whether the meeting starts after `now` (local wall clock)
pub fn is_upcoming(meeting: &Meeting, now: NaiveDateTime) -> bool {
    meeting.date.and_time(meeting.time) > now
}

/// Name of the linked project, if it exists
pub fn project_name<'a>(projects: &'a [Project], project_id: Option<&ProjectId>) -> Option<&'a str> {
    let project_id = project_id?;
    projects
        .iter()
        .find(|project| project.id == *project_id)
        .map(|project| project.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::types::MeetingId;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn many_meetings(count: usize) -> Vec<Meeting> {
        let template = seed::meetings().remove(0);
        (0..count)
            .map(|i| Meeting {
                id: MeetingId::new(format!("meeting-{i}")),
                ..template.clone()
            })
            .collect()
    }

    #[test]
    fn test_filter_by_status() {
        let meetings = seed::meetings();
        let scheduled = meeting_page(&meetings, MeetingFilter::Scheduled, 1, 5);
        assert_eq!(scheduled.items.len(), 2);

        let completed = meeting_page(&meetings, MeetingFilter::Completed, 1, 5);
        assert_eq!(completed.items.len(), 1);
        assert_eq!(completed.items[0].id.as_str(), "meeting-2");

        assert_eq!(meeting_page(&meetings, MeetingFilter::All, 1, 5).items.len(), 3);
    }

    #[test]
    fn test_pagination() {
        let meetings = many_meetings(12);

        let first = meeting_page(&meetings, MeetingFilter::All, 1, 5);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.items.len(), 5);
        assert!(!first.has_prev());
        assert!(first.has_next());

        let last = meeting_page(&meetings, MeetingFilter::All, 3, 5);
        assert_eq!(last.items.len(), 2);
        assert_eq!(last.items[0].id.as_str(), "meeting-10");
        assert!(!last.has_next());
    }

    #[test]
    fn test_pagination_clamps_page() {
        let meetings = many_meetings(6);
        let page = meeting_page(&meetings, MeetingFilter::All, 9, 5);
        assert_eq!(page.page, 2);
        assert_eq!(page.items.len(), 1);

        let empty = meeting_page(&[], MeetingFilter::All, 0, 5);
        assert_eq!(empty.page, 1);
        assert_eq!(empty.total_pages, 0);
        assert!(empty.items.is_empty());
    }

    #[test]
    fn test_is_upcoming() {
        let meeting = &seed::meetings()[0]; // 2025-01-20 10:00
        assert!(is_upcoming(meeting, at(2025, 1, 20, 9, 59)));
        assert!(!is_upcoming(meeting, at(2025, 1, 20, 10, 0)));
        assert!(!is_upcoming(meeting, at(2025, 2, 1, 8, 0)));
    }

    #[test]
    fn test_project_name_lookup() {
        let projects = seed::projects();
        assert_eq!(
            project_name(&projects, Some(&ProjectId::from("project-2"))),
            Some("Обновление сайта")
        );
        assert_eq!(project_name(&projects, Some(&ProjectId::from("missing"))), None);
        assert_eq!(project_name(&projects, None), None);
    }
}

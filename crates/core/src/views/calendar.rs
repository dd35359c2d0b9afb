//! Month calendar used by office planning and the employee detail card

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::models::{Office, OfficePlan};
use crate::types::UserId;

pub const MONTH_NAMES: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

/// Column headers, Sunday first
pub const DAY_NAMES: [&str; 7] = ["Вс", "Пн", "Вт", "Ср", "Чт", "Пт", "Сб"];

/// Month currently shown by a calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    first_day: NaiveDate,
}

impl MonthCursor {
    /// Month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// 1-based month number
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next()
            .first_day
            .pred_opt()
            .unwrap_or(self.first_day)
    }

    pub fn prev(&self) -> Self {
        Self {
            first_day: self
                .first_day
                .checked_sub_months(Months::new(1))
                .unwrap_or(self.first_day),
        }
    }

    pub fn next(&self) -> Self {
        Self {
            first_day: self
                .first_day
                .checked_add_months(Months::new(1))
                .unwrap_or(self.first_day),
        }
    }

    /// Header text, e.g. "Январь 2025"
    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month()), self.year())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }
}

/// Russian month name for a 1-based month number
pub fn month_name(month: u32) -> &'static str {
    let index = month.clamp(1, 12) as usize - 1;
    MONTH_NAMES[index]
}

/// One cell of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// False for the leading/trailing days of neighbouring months
    pub in_month: bool,
    pub is_today: bool,
    /// Past days cannot be re-planned
    pub editable: bool,
}

/// Whether a plan can still be set for `date`
pub fn is_editable(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today
}

/// Cells for `cursor`'s month in whole Sunday-to-Saturday weeks
pub fn month_grid(cursor: MonthCursor, today: NaiveDate) -> Vec<CalendarDay> {
    let first = cursor.first_day();
    let last = cursor.last_day();
    let leading = u64::from(first.weekday().num_days_from_sunday());
    let start = first.checked_sub_days(Days::new(leading)).unwrap_or(first);

    start
        .iter_days()
        .take_while(|day| *day <= last || day.weekday() != Weekday::Sun)
        .map(|date| CalendarDay {
            date,
            in_month: cursor.contains(date),
            is_today: date == today,
            editable: is_editable(date, today),
        })
        .collect()
}

/// The plan `user` has for `date`, if any
pub fn plan_for(plans: &[OfficePlan], user: UserId, date: NaiveDate) -> Option<&OfficePlan> {
    plans
        .iter()
        .find(|plan| plan.date == date && plan.user_id == user)
}

/// Office a plan points at; `None` for absences and unknown ids
pub fn office_for<'a>(offices: &'a [Office], plan: Option<&OfficePlan>) -> Option<&'a Office> {
    let office_id = plan?.office_id.as_ref()?;
    offices.iter().find(|office| office.id == *office_id)
}

/// `15.01.2025`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// `15.01`
pub fn format_day_month(date: NaiveDate) -> String {
    date.format("%d.%m").to_string()
}

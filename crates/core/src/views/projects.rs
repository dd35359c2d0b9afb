//! Project cards: deadline countdown and urgency colouring

use chrono::NaiveDate;

/// Whole days from `today` to `deadline`; negative once it has passed
pub fn days_until_deadline(deadline: NaiveDate, today: NaiveDate) -> i64 {
    (deadline - today).num_days()
}

/// How close a deadline is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineUrgency {
    /// Under a week left, or overdue
    Critical,
    /// Under a month left
    Soon,
    Relaxed,
}

impl DeadlineUrgency {
    pub fn from_days(days_left: i64) -> Self {
        if days_left < 7 {
            DeadlineUrgency::Critical
        } else if days_left < 30 {
            DeadlineUrgency::Soon
        } else {
            DeadlineUrgency::Relaxed
        }
    }

    /// Tailwind classes for the countdown text
    pub fn css_class(self) -> &'static str {
        match self {
            DeadlineUrgency::Critical => "text-red-600 font-medium",
            DeadlineUrgency::Soon => "text-yellow-600",
            DeadlineUrgency::Relaxed => "",
        }
    }
}

/// Countdown text: "12 дн.", "Сегодня" or "Просрочен"
pub fn deadline_label(days_left: i64) -> String {
    match days_left {
        0 => "Сегодня".to_string(),
        d if d > 0 => format!("{d} дн."),
        _ => "Просрочен".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_until_deadline() {
        let today = date(2025, 1, 15);
        assert_eq!(days_until_deadline(date(2025, 2, 28), today), 44);
        assert_eq!(days_until_deadline(today, today), 0);
        assert_eq!(days_until_deadline(date(2025, 1, 10), today), -5);
    }

    #[test]
    fn test_urgency_thresholds() {
        assert_eq!(DeadlineUrgency::from_days(-3), DeadlineUrgency::Critical);
        assert_eq!(DeadlineUrgency::from_days(6), DeadlineUrgency::Critical);
        assert_eq!(DeadlineUrgency::from_days(7), DeadlineUrgency::Soon);
        assert_eq!(DeadlineUrgency::from_days(29), DeadlineUrgency::Soon);
        assert_eq!(DeadlineUrgency::from_days(30), DeadlineUrgency::Relaxed);
    }

    #[test]
    fn test_urgency_css_class() {
        assert_eq!(DeadlineUrgency::from_days(3).css_class(), "text-red-600 font-medium");
        assert_eq!(DeadlineUrgency::from_days(10).css_class(), "text-yellow-600");
        assert_eq!(DeadlineUrgency::from_days(90).css_class(), "");
    }

    #[test]
    fn test_deadline_label() {
        assert_eq!(deadline_label(12), "12 дн.");
        assert_eq!(deadline_label(0), "Сегодня");
        assert_eq!(deadline_label(-1), "Просрочен");
    }
}

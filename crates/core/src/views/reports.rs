//! Director attendance reports

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::models::{Office, OfficePlan, PlanKind};

/// Attendance figures for one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficeStats<'a> {
    pub date: NaiveDate,
    /// Every office in directory order with the number of plans for it
    pub per_office: Vec<(&'a Office, usize)>,
    pub absences: usize,
    pub remote: usize,
    /// Plans with any location, remote included
    pub present: usize,
    /// Size of the employee directory
    pub total: usize,
}

impl OfficeStats<'_> {
    pub fn attendance_percent(&self) -> u32 {
        attendance_percent(self.present, self.total)
    }
}

/// `present / total` as a rounded percentage; 0 for an empty directory
pub fn attendance_percent(present: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let rounded = (present * 200 + total) / (total * 2);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Count the plans for `date`
///
/// Remote work is counted once, in both `remote` and `present`. Absences
/// never count as presence.
pub fn office_stats_for<'a>(
    date: NaiveDate,
    offices: &'a [Office],
    plans: &[OfficePlan],
    total: usize,
) -> OfficeStats<'a> {
    let todays: Vec<&OfficePlan> = plans.iter().filter(|plan| plan.date == date).collect();

    let per_office = offices
        .iter()
        .map(|office| {
            let count = todays
                .iter()
                .filter(|plan| plan.office_id.as_ref() == Some(&office.id))
                .count();
            (office, count)
        })
        .collect();

    let mut absences = 0;
    let mut remote = 0;
    let mut present = 0;
    for plan in &todays {
        match plan.kind() {
            PlanKind::Absence => absences += 1,
            PlanKind::Remote => {
                remote += 1;
                present += 1;
            }
            PlanKind::Office(_) => present += 1,
        }
    }

    OfficeStats {
        date,
        per_office,
        absences,
        remote,
        present,
        total,
    }
}

/// Short Russian weekday name as used in the weekly chart
pub fn short_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "пн",
        Weekday::Tue => "вт",
        Weekday::Wed => "ср",
        Weekday::Thu => "чт",
        Weekday::Fri => "пт",
        Weekday::Sat => "сб",
        Weekday::Sun => "вс",
    }
}

/// One row of the weekly trend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayStats<'a> {
    pub day_name: &'static str,
    pub stats: OfficeStats<'a>,
}

/// Stats for the seven days ending with `today`, oldest first
pub fn weekly_stats<'a>(
    today: NaiveDate,
    offices: &'a [Office],
    plans: &[OfficePlan],
    total: usize,
) -> Vec<DayStats<'a>> {
    (0..7u64)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .map(|date| DayStats {
            day_name: short_weekday(date.weekday()),
            stats: office_stats_for(date, offices, plans, total),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::types::{OfficeId, UserId};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_percent_rounding() {
        assert_eq!(attendance_percent(1, 3), 33);
        assert_eq!(attendance_percent(2, 3), 67);
        assert_eq!(attendance_percent(3, 3), 100);
        assert_eq!(attendance_percent(1, 8), 13);
        assert_eq!(attendance_percent(5, 0), 0);
    }

    #[test]
    fn test_remote_counted_once() {
        let offices = seed::offices();
        let plans = seed::office_plans();

        let stats = office_stats_for(date(2025, 1, 18), &offices, &plans, 3);
        assert_eq!(stats.remote, 1);
        assert_eq!(stats.present, 1);
        assert_eq!(stats.absences, 0);
        assert_eq!(stats.attendance_percent(), 33);

        let remote_row = stats
            .per_office
            .iter()
            .find(|(office, _)| office.id.is_remote())
            .unwrap();
        assert_eq!(remote_row.1, 1);
    }

    #[test]
    fn test_absence_is_not_presence() {
        let offices = seed::offices();
        let plans = seed::office_plans();

        let stats = office_stats_for(date(2025, 1, 17), &offices, &plans, 3);
        assert_eq!(stats.absences, 1);
        assert_eq!(stats.present, 0);
        assert!(stats.per_office.iter().all(|(_, count)| *count == 0));
    }

    #[test]
    fn test_per_office_counts() {
        let offices = seed::offices();
        let mut plans = seed::office_plans();
        plans.push(OfficePlan::new(
            date(2025, 1, 15),
            Some(OfficeId::from("office-1")),
            UserId(987654321),
        ));
        plans.push(OfficePlan::new(
            date(2025, 1, 15),
            Some(OfficeId::from("office-3")),
            UserId(555666777),
        ));

        let stats = office_stats_for(date(2025, 1, 15), &offices, &plans, 3);
        let counts: Vec<usize> = stats.per_office.iter().map(|(_, c)| *c).collect();
        assert_eq!(counts, vec![2, 0, 1, 0]);
        assert_eq!(stats.present, 3);
        assert_eq!(stats.attendance_percent(), 100);
    }

    #[test]
    fn test_weekly_stats_window() {
        let offices = seed::offices();
        let plans = seed::office_plans();

        // 2025-01-19 is a Sunday
        let week = weekly_stats(date(2025, 1, 19), &offices, &plans, 3);
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].stats.date, date(2025, 1, 13));
        assert_eq!(week[0].day_name, "пн");
        assert_eq!(week[6].stats.date, date(2025, 1, 19));
        assert_eq!(week[6].day_name, "вс");

        let present: usize = week.iter().map(|d| d.stats.present).sum();
        assert_eq!(present, 4);
    }
}

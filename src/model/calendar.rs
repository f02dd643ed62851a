use chrono::{Datelike, Duration, NaiveDate};

/// One month laid out as calendar rows. Each week is Sunday..Saturday; days
/// outside the month are None.
pub fn month_weeks(year: i32, month: u32) -> Vec<[Option<NaiveDate>; 7]> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let days = days_in_month(year, month);

    let mut weeks = Vec::new();
    let mut week: [Option<NaiveDate>; 7] = [None; 7];
    for offset in 0..days {
        let date = first + Duration::days(offset as i64);
        let slot = date.weekday().num_days_from_sunday() as usize;
        week[slot] = Some(date);
        if slot == 6 {
            weeks.push(week);
            week = [None; 7];
        }
    }
    if week.iter().any(Option::is_some) {
        weeks.push(week);
    }
    weeks
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (first, next) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 0,
    }
}

/// The previous calendar month
pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// The next calendar month
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use pretty_assertions::assert_eq;

    #[test]
    fn december_2024_grid_shape() {
        let weeks = month_weeks(2024, 12);
        // Dec 1 2024 is a Sunday; 31 days fill five rows
        assert_eq!(weeks.len(), 5);
        assert_eq!(
            weeks[0][0],
            NaiveDate::from_ymd_opt(2024, 12, 1)
        );
        assert_eq!(
            weeks[4][2],
            NaiveDate::from_ymd_opt(2024, 12, 31)
        );
        assert_eq!(weeks[4][3], None);
    }

    #[test]
    fn leading_days_are_blank() {
        // Feb 1 2025 is a Saturday
        let weeks = month_weeks(2025, 2);
        assert!(weeks[0][..6].iter().all(Option::is_none));
        assert_eq!(weeks[0][6], NaiveDate::from_ymd_opt(2025, 2, 1));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn month_arithmetic_wraps_year() {
        assert_eq!(prev_month(2025, 1), (2024, 12));
        assert_eq!(next_month(2024, 12), (2025, 1));
        assert_eq!(next_month(2024, 6), (2024, 7));
    }

    #[test]
    fn weekday_mapping_uses_sunday_origin() {
        let dec25 = NaiveDate::from_ymd_opt(2024, 12, 25).expect("valid date");
        assert_eq!(dec25.weekday(), Weekday::Wed);
        assert_eq!(dec25.weekday().num_days_from_sunday(), 3);
    }
}

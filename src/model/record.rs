use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// When during the day (or what kind of workout) a session was
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    #[default]
    Morning,
    Afternoon,
    Evening,
    Night,
    Interval,
    Recovery,
}

impl SessionType {
    pub const ALL: [SessionType; 6] = [
        SessionType::Morning,
        SessionType::Afternoon,
        SessionType::Evening,
        SessionType::Night,
        SessionType::Interval,
        SessionType::Recovery,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SessionType::Morning => "Morning",
            SessionType::Afternoon => "Afternoon",
            SessionType::Evening => "Evening",
            SessionType::Night => "Night",
            SessionType::Interval => "Interval",
            SessionType::Recovery => "Recovery",
        }
    }

    /// Short badge text shown next to a session in lists
    pub fn badge(&self) -> &'static str {
        match self {
            SessionType::Morning => "🌅 Morning",
            SessionType::Afternoon => "☀️ Afternoon",
            SessionType::Evening => "🌆 Evening",
            SessionType::Night => "🌙 Night",
            SessionType::Interval => "⚡ Interval",
            SessionType::Recovery => "💚 Recovery",
        }
    }
}

/// A single recorded running session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub id: String,
    pub session_id: String,
    pub session_type: SessionType,
    /// Order within the same type on one day (interval set 1, set 2, ...)
    #[serde(default)]
    pub session_number: Option<u32>,
    pub date: NaiveDate,
    /// Wall-clock "HH:MM" strings, already formatted for display
    pub start_time: String,
    pub end_time: String,
    pub distance_km: f32,
    pub duration_min: u32,
    /// Pace strings are display strings, e.g. "5'38\"" per km
    pub average_pace: String,
    #[serde(default)]
    pub best_pace: Option<String>,
    #[serde(default)]
    pub average_heart_rate: Option<u32>,
    #[serde(default)]
    pub average_cadence: Option<u32>,
    #[serde(default)]
    pub calories: Option<u32>,
    #[serde(default)]
    pub elevation_m: Option<u32>,
    /// Opaque image references; painting them is a rendering concern
    #[serde(default)]
    pub route_image: Option<String>,
    #[serde(default)]
    pub custom_image: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// All sessions of one calendar day plus day totals
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub sessions: Vec<RunRecord>,
    pub total_distance_km: f32,
    pub total_duration_min: u32,
    pub total_calories: u32,
    pub session_count: usize,
}

/// Group records by date: sessions within a day sorted by start time, days
/// sorted newest first.
pub fn group_by_date(records: &[RunRecord]) -> Vec<DailySummary> {
    let mut grouped: BTreeMap<NaiveDate, Vec<RunRecord>> = BTreeMap::new();
    for record in records {
        grouped.entry(record.date).or_default().push(record.clone());
    }

    grouped
        .into_iter()
        .rev()
        .map(|(date, mut sessions)| {
            sessions.sort_by(|a, b| a.start_time.cmp(&b.start_time));
            let total_distance_km = sessions.iter().map(|s| s.distance_km).sum();
            let total_duration_min = sessions.iter().map(|s| s.duration_min).sum();
            let total_calories = sessions.iter().filter_map(|s| s.calories).sum();
            let session_count = sessions.len();
            DailySummary {
                date,
                sessions,
                total_distance_km,
                total_duration_min,
                total_calories,
                session_count,
            }
        })
        .collect()
}

/// Aggregate figures for a time window (week or month)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PeriodStats {
    pub total_distance_km: f32,
    /// Whole hours, floored
    pub total_time_h: u32,
    pub total_runs: usize,
    pub average_distance_km: f32,
    pub active_days: usize,
}

fn stats_for(records: &[&RunRecord]) -> PeriodStats {
    let total_distance_km: f32 = records.iter().map(|r| r.distance_km).sum();
    let total_minutes: u32 = records.iter().map(|r| r.duration_min).sum();
    let total_runs = records.len();
    let mut days: Vec<NaiveDate> = records.iter().map(|r| r.date).collect();
    days.sort();
    days.dedup();
    PeriodStats {
        total_distance_km,
        total_time_h: total_minutes / 60,
        total_runs,
        average_distance_km: if total_runs > 0 {
            total_distance_km / total_runs as f32
        } else {
            0.0
        },
        active_days: days.len(),
    }
}

/// The date of the most recent record, if any. Weekly/monthly windows are
/// anchored here rather than at the wall clock so the figures stay stable
/// for historical data.
pub fn latest_date(records: &[RunRecord]) -> Option<NaiveDate> {
    records.iter().map(|r| r.date).max()
}

/// Stats for the 7 days ending at the most recent record
pub fn weekly_stats(records: &[RunRecord]) -> PeriodStats {
    let Some(latest) = latest_date(records) else {
        return PeriodStats::default();
    };
    let window_start = latest - Duration::days(7);
    let in_week: Vec<&RunRecord> = records.iter().filter(|r| r.date > window_start).collect();
    stats_for(&in_week)
}

/// Records inside the weekly window, newest day first
pub fn weekly_summaries(records: &[RunRecord]) -> Vec<DailySummary> {
    let Some(latest) = latest_date(records) else {
        return Vec::new();
    };
    let window_start = latest - Duration::days(7);
    let in_week: Vec<RunRecord> = records
        .iter()
        .filter(|r| r.date > window_start)
        .cloned()
        .collect();
    group_by_date(&in_week)
}

/// Stats for the calendar month of the most recent record
pub fn monthly_stats(records: &[RunRecord]) -> PeriodStats {
    let Some(latest) = latest_date(records) else {
        return PeriodStats::default();
    };
    let in_month: Vec<&RunRecord> = records
        .iter()
        .filter(|r| r.date.year() == latest.year() && r.date.month() == latest.month())
        .collect();
    stats_for(&in_month)
}

/// The session/run summary a decoration canvas is built from. Values are
/// already formatted for display; the canvas never recomputes them.
#[derive(Debug, Clone, PartialEq)]
pub struct RunningSummary {
    pub total_distance_km: f32,
    pub total_runs: u32,
    pub total_time_min: u32,
    pub average_pace: String,
}

impl RunningSummary {
    /// Summary for decorating a single session
    pub fn for_record(record: &RunRecord) -> Self {
        Self {
            total_distance_km: record.distance_km,
            total_runs: 1,
            total_time_min: record.duration_min,
            average_pace: record.average_pace.clone(),
        }
    }

    /// The four fixed stat strings bound to the stat-text layers, in layer
    /// index order: distance, run count, time, pace.
    pub fn stat_texts(&self) -> [String; 4] {
        [
            format!("TOTAL {}KM", format_km(self.total_distance_km)),
            format!("{} RUNS", self.total_runs),
            format_duration_hm(self.total_time_min),
            format!("{} PACE", self.average_pace),
        ]
    }
}

/// Format kilometers: integers without the fraction ("4KM"), otherwise one
/// decimal ("5.2KM")
pub fn format_km(km: f32) -> String {
    if km.fract() == 0.0 {
        format!("{}", km as i32)
    } else {
        format!("{:.1}", km)
    }
}

/// Minutes as "0H 45M"
pub fn format_duration_hm(minutes: u32) -> String {
    format!("{}H {}M", minutes / 60, minutes % 60)
}

/// Minutes as a friendly duration, "1h 30m" or "45m"
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample::sample_records;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn grouping_sorts_days_newest_first_and_sessions_by_start() {
        let summaries = group_by_date(&sample_records());
        assert!(summaries
            .windows(2)
            .all(|pair| pair[0].date > pair[1].date));
        for day in &summaries {
            assert!(day
                .sessions
                .windows(2)
                .all(|pair| pair[0].start_time <= pair[1].start_time));
            assert_eq!(day.session_count, day.sessions.len());
        }
    }

    #[test]
    fn grouping_sums_day_totals() {
        let summaries = group_by_date(&sample_records());
        let dec28 = summaries
            .iter()
            .find(|s| s.date == date(2024, 12, 28))
            .expect("two sessions on dec 28");
        assert_eq!(dec28.session_count, 2);
        assert!((dec28.total_distance_km - 8.4).abs() < 1e-4);
        assert_eq!(dec28.total_duration_min, 75);
        assert_eq!(dec28.total_calories, 485 + 285);
    }

    #[test]
    fn weekly_window_is_anchored_to_latest_record() {
        let records = sample_records();
        let stats = weekly_stats(&records);
        // latest record is Dec 28; window covers Dec 22-28
        let expected: Vec<&RunRecord> = records
            .iter()
            .filter(|r| r.date > date(2024, 12, 21))
            .collect();
        assert_eq!(stats.total_runs, expected.len());
        let dist: f32 = expected.iter().map(|r| r.distance_km).sum();
        assert!((stats.total_distance_km - dist).abs() < 1e-4);
    }

    #[test]
    fn monthly_stats_cover_latest_month_only() {
        let mut records = sample_records();
        records.push(RunRecord {
            date: date(2024, 11, 30),
            ..records[0].clone()
        });
        let stats = monthly_stats(&records);
        assert_eq!(stats.total_runs, sample_records().len());
        assert!(stats.active_days > 0);
    }

    #[test]
    fn empty_records_produce_empty_stats() {
        assert_eq!(weekly_stats(&[]), PeriodStats::default());
        assert_eq!(monthly_stats(&[]), PeriodStats::default());
        assert!(group_by_date(&[]).is_empty());
    }

    #[test]
    fn stat_texts_match_layer_order() {
        let summary = RunningSummary {
            total_distance_km: 5.2,
            total_runs: 1,
            total_time_min: 45,
            average_pace: "5'38\"".to_string(),
        };
        assert_eq!(
            summary.stat_texts(),
            [
                "TOTAL 5.2KM".to_string(),
                "1 RUNS".to_string(),
                "0H 45M".to_string(),
                "5'38\" PACE".to_string(),
            ]
        );
    }

    #[test]
    fn km_formatting_trims_whole_numbers() {
        assert_eq!(format_km(4.0), "4");
        assert_eq!(format_km(12.1), "12.1");
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration_hm(90), "1H 30M");
        assert_eq!(format_duration(45), "45m");
        assert_eq!(format_duration(125), "2h 5m");
    }
}

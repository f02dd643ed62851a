use std::time::Duration;

use chrono::NaiveDate;

use crate::model::{RunRecord, SessionType};

/// How long the simulated health-app connect takes
pub const IMPORT_CONNECT_DELAY: Duration = Duration::from_millis(1500);

/// How long a status message stays visible
pub const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(4);

/// Which screen the shell is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveScreen {
    #[default]
    Home,
    Decoration,
    WeeklyDetail,
    MonthlyCalendar,
    AddRecord,
    ImportRecord,
}

/// Tool tab at the bottom of the decoration screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolTab {
    #[default]
    Background,
    Templates,
    Stickers,
}

impl ToolTab {
    pub const ALL: [ToolTab; 3] = [ToolTab::Background, ToolTab::Templates, ToolTab::Stickers];

    pub fn label(&self) -> &'static str {
        match self {
            ToolTab::Background => "Background",
            ToolTab::Templates => "Templates",
            ToolTab::Stickers => "Stickers",
        }
    }
}

/// Stubbed header actions surfaced as modal dialogs; the real persistence
/// and share collaborators live outside this app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubDialog {
    Saved,
    Shared,
}

/// Input buffers for the add-record form
#[derive(Debug, Clone)]
pub struct RecordForm {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub distance_km: String,
    pub duration_min: String,
    pub average_pace: String,
    pub session_type: SessionType,
    pub title: String,
    pub location: String,
    pub comment: String,
}

impl Default for RecordForm {
    fn default() -> Self {
        Self {
            date: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            distance_km: String::new(),
            duration_min: String::new(),
            average_pace: String::new(),
            session_type: SessionType::Morning,
            title: String::new(),
            location: String::new(),
            comment: String::new(),
        }
    }
}

impl RecordForm {
    /// Validate the buffers and build a record. Field errors come back as a
    /// single message for the status bar.
    pub fn to_record(&self, id: u64) -> Result<RunRecord, String> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| "Date must be YYYY-MM-DD".to_string())?;
        let distance_km: f32 = self
            .distance_km
            .trim()
            .parse()
            .map_err(|_| "Distance must be a number of kilometers".to_string())?;
        if distance_km <= 0.0 {
            return Err("Distance must be positive".to_string());
        }
        let duration_min: u32 = self
            .duration_min
            .trim()
            .parse()
            .map_err(|_| "Duration must be whole minutes".to_string())?;
        if duration_min == 0 {
            return Err("Duration must be positive".to_string());
        }

        let optional = |s: &str| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };

        Ok(RunRecord {
            id: format!("manual-{id}"),
            session_id: format!("manual-session-{id}"),
            session_type: self.session_type,
            session_number: None,
            date,
            start_time: self.start_time.trim().to_string(),
            end_time: self.end_time.trim().to_string(),
            distance_km,
            duration_min,
            average_pace: if self.average_pace.trim().is_empty() {
                "-".to_string()
            } else {
                self.average_pace.trim().to_string()
            },
            best_pace: None,
            average_heart_rate: None,
            average_cadence: None,
            calories: None,
            elevation_m: None,
            route_image: None,
            custom_image: None,
            title: optional(&self.title),
            location: optional(&self.location),
            comment: optional(&self.comment),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_form() -> RecordForm {
        RecordForm {
            date: "2024-12-30".to_string(),
            start_time: "07:00".to_string(),
            end_time: "07:40".to_string(),
            distance_km: "6.5".to_string(),
            duration_min: "40".to_string(),
            average_pace: "6'09\"".to_string(),
            session_type: SessionType::Morning,
            title: "Test run".to_string(),
            location: String::new(),
            comment: "  ".to_string(),
        }
    }

    #[test]
    fn valid_form_builds_a_record() {
        let record = filled_form().to_record(1).expect("valid form");
        assert_eq!(record.id, "manual-1");
        assert_eq!(record.distance_km, 6.5);
        assert_eq!(record.duration_min, 40);
        assert_eq!(record.title.as_deref(), Some("Test run"));
        // blank optional fields collapse to None
        assert_eq!(record.location, None);
        assert_eq!(record.comment, None);
    }

    #[test]
    fn bad_fields_are_rejected_with_a_message() {
        let mut form = filled_form();
        form.date = "12/30/2024".to_string();
        assert!(form.to_record(1).is_err());

        let mut form = filled_form();
        form.distance_km = "fast".to_string();
        assert!(form.to_record(1).is_err());

        let mut form = filled_form();
        form.duration_min = "0".to_string();
        assert!(form.to_record(1).is_err());
    }
}

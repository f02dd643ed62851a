use bevy::prelude::*;
use chrono::{Datelike, NaiveDate};
use log::info;
use std::time::Instant;

use crate::model::{
    builtin_backgrounds, builtin_stickers, builtin_templates, group_by_date, imported_records,
    latest_date, sample_records, BackgroundPreset, DailySummary, RunRecord, RunningSummary,
    StickerDef, Template,
};

use super::config::AppConfig;
use super::scene::DecorationScene;
use super::types::{
    ActiveScreen, RecordForm, StubDialog, ToolTab, IMPORT_CONNECT_DELAY,
};

#[derive(Resource, Default)]
pub struct AppState {
    pub config: AppConfig,

    // Records (in-memory only; persistence is an external collaborator)
    pub records: Vec<RunRecord>,
    next_record_seq: u64,

    // Static catalogs, enumerated once at startup
    pub sticker_catalog: Vec<StickerDef>,
    pub template_catalog: Vec<Template>,
    pub background_presets: Vec<BackgroundPreset>,

    // Navigation
    pub screen: ActiveScreen,
    pub selected_record: Option<String>,

    // Decoration screen state
    pub scene: Option<DecorationScene>,
    pub show_style_panel: bool,
    pub tool_tab: ToolTab,
    pub stub_dialog: Option<StubDialog>,

    // Home screen state
    pub show_all_records: bool,

    // Calendar screen state
    pub calendar_month: Option<(i32, u32)>,
    pub calendar_selected_day: Option<NaiveDate>,

    // Add-record form
    pub record_form: RecordForm,

    // Import simulation
    pub import_started_at: Option<Instant>,
    pub import_available: Vec<RunRecord>,
    pub import_selected: Vec<String>,

    // Status message
    pub status_message: Option<(String, Instant)>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            config: AppConfig::load(),
            records: sample_records(),
            next_record_seq: 1,
            sticker_catalog: builtin_stickers(),
            template_catalog: builtin_templates(),
            background_presets: builtin_backgrounds(),
            screen: ActiveScreen::Home,
            selected_record: None,
            scene: None,
            show_style_panel: false,
            tool_tab: ToolTab::Background,
            stub_dialog: None,
            show_all_records: false,
            calendar_month: None,
            calendar_selected_day: None,
            record_form: RecordForm::default(),
            import_started_at: None,
            import_available: Vec::new(),
            import_selected: Vec::new(),
            status_message: None,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    pub fn daily_summaries(&self) -> Vec<DailySummary> {
        group_by_date(&self.records)
    }

    pub fn record_by_id(&self, id: &str) -> Option<&RunRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// The summary feeding the decoration canvas's four stat layers
    pub fn running_summary(&self) -> Option<RunningSummary> {
        let id = self.selected_record.as_ref()?;
        self.record_by_id(id).map(RunningSummary::for_record)
    }

    /// Open the decoration screen for one record with a fresh scene
    pub fn open_decoration(&mut self, record_id: &str) {
        if self.record_by_id(record_id).is_none() {
            return;
        }
        info!("decorating record {record_id}");
        self.selected_record = Some(record_id.to_string());
        self.scene = Some(DecorationScene::new());
        self.show_style_panel = false;
        self.tool_tab = ToolTab::Background;
        self.stub_dialog = None;
        self.screen = ActiveScreen::Decoration;
    }

    /// Leave the decoration screen. Tears down the scene, which also
    /// releases any drag still in flight.
    pub fn close_decoration(&mut self) {
        if let Some(scene) = self.scene.as_mut() {
            scene.end_drag();
        }
        self.scene = None;
        self.selected_record = None;
        self.show_style_panel = false;
        self.stub_dialog = None;
        self.screen = ActiveScreen::Home;
    }

    pub fn go_home(&mut self) {
        if self.screen == ActiveScreen::Decoration {
            self.close_decoration();
        } else {
            self.screen = ActiveScreen::Home;
        }
    }

    pub fn open_calendar(&mut self) {
        let anchor = latest_date(&self.records);
        self.calendar_month = anchor.map(|d| (d.year(), d.month()));
        self.calendar_selected_day = anchor;
        self.screen = ActiveScreen::MonthlyCalendar;
    }

    pub fn open_add_record(&mut self) {
        self.record_form = RecordForm::default();
        self.screen = ActiveScreen::AddRecord;
    }

    /// Validate the form, append the record, and return home
    pub fn save_record_form(&mut self) -> Result<(), String> {
        let record = self.record_form.to_record(self.next_record_seq)?;
        self.next_record_seq += 1;
        info!("added record {} ({} km)", record.id, record.distance_km);
        self.records.push(record);
        self.record_form = RecordForm::default();
        self.screen = ActiveScreen::Home;
        Ok(())
    }

    pub fn open_import(&mut self) {
        self.import_started_at = None;
        self.import_available.clear();
        self.import_selected.clear();
        self.screen = ActiveScreen::ImportRecord;
    }

    /// Kick off the simulated health-app connect
    pub fn begin_import_connect(&mut self) {
        self.import_started_at = Some(Instant::now());
    }

    /// Poll the simulated connect; once the delay elapses the canned batch
    /// becomes available for selection. Called every frame by the UI.
    pub fn poll_import(&mut self) {
        let Some(started) = self.import_started_at else {
            return;
        };
        if started.elapsed() < IMPORT_CONNECT_DELAY {
            return;
        }
        self.import_started_at = None;
        self.import_available = imported_records();
        // everything pre-selected, matching the connect flow's default
        self.import_selected = self
            .import_available
            .iter()
            .map(|r| r.id.clone())
            .collect();
        info!("health app connect returned {} records", self.import_available.len());
    }

    pub fn import_is_connecting(&self) -> bool {
        self.import_started_at.is_some()
    }

    pub fn toggle_import_selection(&mut self, id: &str) {
        if let Some(index) = self.import_selected.iter().position(|s| s == id) {
            self.import_selected.remove(index);
        } else {
            self.import_selected.push(id.to_string());
        }
    }

    /// Append the selected imported records, skipping ids already present
    pub fn finish_import(&mut self) {
        let mut imported = 0;
        let available = std::mem::take(&mut self.import_available);
        for record in available {
            if self.import_selected.iter().any(|id| *id == record.id)
                && self.record_by_id(&record.id).is_none()
            {
                self.records.push(record);
                imported += 1;
            }
        }
        self.import_selected.clear();
        self.set_status(format!("Imported {imported} records"));
        self.screen = ActiveScreen::Home;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::scene::ElementRef;
    use crate::state::types::STATUS_MESSAGE_TTL;
    use pretty_assertions::assert_eq;

    #[test]
    fn opening_decoration_builds_a_fresh_scene() {
        let mut state = AppState::new();
        let id = state.records[0].id.clone();
        state.open_decoration(&id);
        assert_eq!(state.screen, ActiveScreen::Decoration);
        assert!(state.scene.is_some());
        let summary = state.running_summary().expect("summary for selection");
        assert_eq!(summary.total_runs, 1);
    }

    #[test]
    fn opening_decoration_for_unknown_record_is_ignored() {
        let mut state = AppState::new();
        state.open_decoration("nope");
        assert_eq!(state.screen, ActiveScreen::Home);
        assert!(state.scene.is_none());
    }

    #[test]
    fn leaving_decoration_releases_the_drag() {
        let mut state = AppState::new();
        let id = state.records[0].id.clone();
        state.open_decoration(&id);
        {
            let scene = state.scene.as_mut().expect("scene open");
            scene.set_canvas_size(400.0, 300.0);
            scene.begin_press(
                ElementRef::Stat(0),
                crate::model::Position::new(25.0, 55.0),
            );
            assert!(scene.is_dragging());
        }
        state.close_decoration();
        assert!(state.scene.is_none());
        assert_eq!(state.selected_record, None);
    }

    #[test]
    fn saving_the_form_appends_a_record() {
        let mut state = AppState::new();
        let before = state.records.len();
        state.record_form.date = "2024-12-30".to_string();
        state.record_form.distance_km = "5".to_string();
        state.record_form.duration_min = "30".to_string();
        state.save_record_form().expect("valid form");
        assert_eq!(state.records.len(), before + 1);
        assert_eq!(state.screen, ActiveScreen::Home);
    }

    #[test]
    fn invalid_form_leaves_records_untouched() {
        let mut state = AppState::new();
        let before = state.records.len();
        state.record_form.date = "bad".to_string();
        assert!(state.save_record_form().is_err());
        assert_eq!(state.records.len(), before);
    }

    #[test]
    fn finish_import_appends_only_selected_new_records() {
        let mut state = AppState::new();
        let before = state.records.len();
        state.import_available = imported_records();
        state.import_selected = state
            .import_available
            .iter()
            .map(|r| r.id.clone())
            .collect();
        // deselect one
        let dropped = state.import_selected.remove(0);
        state.finish_import();
        assert_eq!(state.records.len(), before + imported_records().len() - 1);
        assert!(state.record_by_id(&dropped).is_none());
        // importing again must not duplicate
        state.import_available = imported_records();
        state.import_selected = state
            .import_available
            .iter()
            .map(|r| r.id.clone())
            .collect();
        state.finish_import();
        assert_eq!(state.records.len(), before + imported_records().len());
    }

    #[test]
    fn status_ttl_is_a_few_seconds() {
        assert!(STATUS_MESSAGE_TTL.as_secs() >= 2);
    }
}

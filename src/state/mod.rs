mod app_state;
mod config;
mod scene;
mod types;

pub use app_state::AppState;
pub use scene::{
    DecorationScene, ElementRef, Gesture, StatLayer, DOUBLE_PRESS_WINDOW, STAT_LAYER_COUNT,
};
pub use types::{ActiveScreen, RecordForm, StubDialog, ToolTab, STATUS_MESSAGE_TTL};

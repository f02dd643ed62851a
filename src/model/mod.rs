mod background;
mod calendar;
mod record;
mod sample;
mod sticker;
mod style;
mod template;

pub use background::{builtin_backgrounds, dark_preset, BackgroundPreset};
pub use calendar::{
    days_in_month, month_name, month_weeks, next_month, prev_month, WEEKDAY_HEADERS,
};
pub use record::{
    format_duration, format_duration_hm, format_km, group_by_date, latest_date, monthly_stats,
    weekly_stats, weekly_summaries, DailySummary, PeriodStats, RunRecord, RunningSummary,
    SessionType,
};
pub use sample::{imported_records, sample_records};
pub use sticker::{builtin_stickers, CanvasSticker, StickerCategory, StickerDef, StickerKind};
pub use style::{
    Border, CornerRadius, Decoration, Padding, Position, StyleEdit, TextAlign, TextStyle,
    TextTransform, COLOR_OPTIONS, FONT_OPTIONS, FONT_SIZE_MAX, FONT_SIZE_MIN,
};
pub use template::{builtin_templates, Template, TemplateElement};

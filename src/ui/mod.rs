mod add_record;
mod canvas;
mod decoration;
mod dialogs;
mod home;
mod import;
mod monthly;
mod style_panel;
mod system;
mod weekly;
mod widgets;

pub use system::ui_system;

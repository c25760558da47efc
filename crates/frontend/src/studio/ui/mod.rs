pub mod config_editor;
pub mod history_list;
pub mod input_panel;
pub mod preview_panel;

pub use input_panel::InputPanel;
pub use preview_panel::PreviewPanel;

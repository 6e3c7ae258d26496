pub mod options_panel;
pub mod settings_panel;

pub use options_panel::OptionsPanel;
pub use settings_panel::SettingsPanel;

//! Feature modules

mod settings;

pub use settings::{Settings, SettingsError};

//! Application state definitions

use crate::audio::ClipPlayer;
use crate::features::Settings;
use crate::notes::NoteTable;

/// Main application state
pub struct App {
    /// Core services (Settings, NoteTable, audio output)
    pub core: CoreState,
    /// UI state (error dialog)
    pub ui: UiState,
}

/// Core services
pub struct CoreState {
    pub settings: Settings,
    pub notes: NoteTable,
    /// None when no output device could be opened; activations then
    /// surface a playback error instead of playing
    pub player: Option<ClipPlayer>,
}

impl CoreState {
    /// Initialize core services with loaded settings
    pub fn new(settings: Settings) -> Self {
        let player = match ClipPlayer::new() {
            Ok(player) => Some(player),
            Err(e) => {
                tracing::error!("Failed to create audio output: {}", e);
                None
            }
        };

        Self {
            settings,
            notes: NoteTable::default(),
            player,
        }
    }
}

/// UI state
#[derive(Default)]
pub struct UiState {
    /// Modal error dialog text, when visible
    pub error_dialog: Option<String>,
}

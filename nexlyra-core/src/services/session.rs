//! Startup session restoration.

use crate::types::{Settings, UiState, BLANK_ADDRESS};

/// Decide the initial UI state from persisted settings.
///
/// Browsing iff a last visited address exists, is not the blank page,
/// and is not a `nexlyra://` address; Homepage otherwise.
#[must_use]
pub fn startup_state(settings: &Settings) -> UiState {
    let last = settings.last_url.trim();
    if !last.is_empty() && last != BLANK_ADDRESS && !last.starts_with("nexlyra://") {
        UiState::browsing(last)
    } else {
        UiState::homepage()
    }
}

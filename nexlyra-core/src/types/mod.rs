//! 核心类型定义

mod engine;
mod intent;
mod settings;
mod suggestion;
mod ui;

pub use engine::{AiEngine, SearchEngine, ThemeMode};
pub use intent::{Intent, IntentKind};
pub use settings::{keys, Settings};
pub use suggestion::{SuggestionRow, SuggestionView};
pub use ui::{Screen, UiState};

/// Reserved address representing the start/new-tab page.
pub const HOME_SENTINEL: &str = "nexlyra://home";

/// Address the content surface shows while the homepage is up.
pub const BLANK_ADDRESS: &str = "about:blank";

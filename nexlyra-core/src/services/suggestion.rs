//! Suggestion-list rendering.
//!
//! Pure presentation derived from the latest classified intent and the
//! current input text; no state beyond its inputs.

use crate::services::intent::classify;
use crate::types::{IntentKind, Settings, SuggestionRow, SuggestionView};

/// 搜索建议行快捷键
const SEARCH_SHORTCUT: &str = "Ctrl+Enter";
/// AI 建议行快捷键
const AI_SHORTCUT: &str = "Shift+Enter";

/// Render the suggestion list for the current input.
///
/// Empty input hides the list. Otherwise there are exactly two rows:
/// search-with-current-engine and ask-with-current-AI-engine, with the
/// row matching the unforced classification marked as default-selected.
/// A `Url` classification counts toward the search row.
#[must_use]
pub fn build_view(input: &str, settings: &Settings) -> SuggestionView {
    if input.is_empty() {
        return SuggestionView::hidden();
    }

    let kind = classify(input).kind();
    let ai_selected = kind == IntentKind::Ai;

    SuggestionView {
        visible: true,
        rows: vec![
            SuggestionRow {
                action: IntentKind::Search,
                label: format!(
                    "Search {} for \"{input}\"",
                    settings.engine.display_name()
                ),
                shortcut: SEARCH_SHORTCUT.to_string(),
                selected: !ai_selected,
            },
            SuggestionRow {
                action: IntentKind::Ai,
                label: format!("Ask {}: \"{input}\"", settings.ai_engine.display_name()),
                shortcut: AI_SHORTCUT.to_string(),
                selected: ai_selected,
            },
        ],
    }
}

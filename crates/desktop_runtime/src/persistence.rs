//! Lightweight preference persistence: the theme color and the snake high score.
//!
//! Both values are scalar JSON entries in the host [`PrefsStore`]; an absent key means the default.

use platform_host::{load_pref_with, save_pref_with, PrefsStore};

use crate::theme;

const THEME_KEY: &str = "portfolio.theme.v1";
const SNAKE_HIGH_SCORE_KEY: &str = "portfolio.snake_high_score.v1";

/// Values restored before the boot sequence starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootPrefs {
    /// Saved theme color, if a valid one is stored.
    pub theme_color: Option<String>,
    /// Saved snake high score; `0` when absent.
    pub snake_high_score: u32,
}

/// Loads the saved theme color. Malformed values are ignored.
pub async fn load_theme(prefs: &dyn PrefsStore) -> Result<Option<String>, String> {
    let color: Option<String> = load_pref_with(prefs, THEME_KEY).await?;
    Ok(color.filter(|c| theme::is_valid_hex(c)))
}

pub async fn persist_theme(prefs: &dyn PrefsStore, color: &str) -> Result<(), String> {
    save_pref_with(prefs, THEME_KEY, &color).await
}

pub async fn load_snake_high_score(prefs: &dyn PrefsStore) -> Result<u32, String> {
    Ok(load_pref_with(prefs, SNAKE_HIGH_SCORE_KEY)
        .await?
        .unwrap_or(0))
}

pub async fn persist_snake_high_score(prefs: &dyn PrefsStore, score: u32) -> Result<(), String> {
    save_pref_with(prefs, SNAKE_HIGH_SCORE_KEY, &score).await
}

/// Loads every boot-time preference, logging and defaulting the ones that fail.
pub async fn load_boot_prefs(prefs: &dyn PrefsStore) -> BootPrefs {
    let theme_color = match load_theme(prefs).await {
        Ok(color) => color,
        Err(err) => {
            leptos::logging::warn!("theme preference load failed: {err}");
            None
        }
    };
    let snake_high_score = match load_snake_high_score(prefs).await {
        Ok(score) => score,
        Err(err) => {
            leptos::logging::warn!("snake high score load failed: {err}");
            0
        }
    };
    BootPrefs {
        theme_color,
        snake_high_score,
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{MemoryPrefsStore, NoopPrefsStore};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn absent_keys_mean_defaults() {
        assert_eq!(block_on(load_boot_prefs(&NoopPrefsStore)), BootPrefs::default());
    }

    #[test]
    fn saved_values_are_restored() {
        let store = MemoryPrefsStore::default();
        block_on(persist_theme(&store, "#800000")).expect("save theme");
        block_on(persist_snake_high_score(&store, 120)).expect("save score");

        assert_eq!(store.raw(THEME_KEY), Some("\"#800000\"".to_string()));
        assert_eq!(
            block_on(load_boot_prefs(&store)),
            BootPrefs {
                theme_color: Some("#800000".to_string()),
                snake_high_score: 120,
            }
        );
    }

    #[test]
    fn malformed_entries_fall_back_to_defaults() {
        let store = MemoryPrefsStore::default();
        block_on(store.save_pref(THEME_KEY, "\"not-a-color\"")).expect("save");
        block_on(store.save_pref(SNAKE_HIGH_SCORE_KEY, "{broken")).expect("save");

        assert_eq!(block_on(load_boot_prefs(&store)), BootPrefs::default());
    }
}

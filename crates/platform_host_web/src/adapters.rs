use std::rc::Rc;

use platform_host::{
    HostServices, HostStrategy, NoopPrefsStore, NoopSoundService, PrefsStore, PrefsStoreFuture,
    SoundService,
};

use crate::{WebPrefsStore, WebSoundService};

/// Returns the compile-time selected host strategy for the active build.
///
/// Native builds and the `headless-host` feature select [`HostStrategy::Headless`].
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(any(feature = "headless-host", not(target_arch = "wasm32")))]
    {
        HostStrategy::Headless
    }

    #[cfg(not(any(feature = "headless-host", not(target_arch = "wasm32"))))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete preference backend behind [`PrefsStore`].
#[derive(Debug, Clone, Copy)]
pub enum PrefsStoreAdapter {
    /// Browser `localStorage`.
    Browser(WebPrefsStore),
    /// Inert fallback.
    Headless(NoopPrefsStore),
}

impl PrefsStore for PrefsStoreAdapter {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        match self {
            Self::Browser(store) => store.load_pref(key),
            Self::Headless(store) => store.load_pref(key),
        }
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(store) => store.save_pref(key, raw_json),
            Self::Headless(store) => store.save_pref(key, raw_json),
        }
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(store) => store.delete_pref(key),
            Self::Headless(store) => store.delete_pref(key),
        }
    }
}

/// Adapter enum that erases the concrete audio backend behind [`SoundService`].
#[derive(Debug, Clone, Copy)]
pub enum SoundServiceAdapter {
    /// Page `<audio>` elements.
    Browser(WebSoundService),
    /// Silent fallback.
    Headless(NoopSoundService),
}

impl SoundService for SoundServiceAdapter {
    fn play(&self, clip: &str) -> Result<(), String> {
        match self {
            Self::Browser(sound) => sound.play(clip),
            Self::Headless(sound) => sound.play(clip),
        }
    }
}

/// Builds the preference adapter for the compile-time selected host strategy.
pub fn prefs_store() -> PrefsStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => PrefsStoreAdapter::Browser(WebPrefsStore),
        HostStrategy::Headless => PrefsStoreAdapter::Headless(NoopPrefsStore),
    }
}

/// Builds the sound adapter for the compile-time selected host strategy.
pub fn sound_service() -> SoundServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => SoundServiceAdapter::Browser(WebSoundService),
        HostStrategy::Headless => SoundServiceAdapter::Headless(NoopSoundService),
    }
}

/// Assembles the [`HostServices`] bundle injected into the desktop runtime.
pub fn build_host_services() -> HostServices {
    HostServices {
        prefs: Rc::new(prefs_store()),
        sound: Rc::new(sound_service()),
        host_strategy: selected_host_strategy(),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_builds_select_headless_services() {
        let services = build_host_services();
        assert_eq!(services.host_strategy, HostStrategy::Headless);
        assert_eq!(host_strategy_name(), "headless");
        assert!(matches!(prefs_store(), PrefsStoreAdapter::Headless(_)));
        assert!(matches!(sound_service(), SoundServiceAdapter::Headless(_)));
    }
}

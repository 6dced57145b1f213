//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! - [`WebPrefsStore`] persists preferences in `window.localStorage`.
//! - [`WebSoundService`] plays `<audio>` elements that the page declares by DOM id.
//!
//! Both adapters compile on native targets, where they degrade to no-ops so the runtime crates
//! stay testable off-browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod sound;
pub mod storage;

pub use adapters::{
    build_host_services, host_strategy_name, prefs_store, selected_host_strategy, sound_service,
    PrefsStoreAdapter, SoundServiceAdapter,
};
pub use sound::WebSoundService;
pub use storage::local_prefs::WebPrefsStore;

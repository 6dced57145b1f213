//! Typed host-domain contracts shared by the desktop runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services. The desktop shell only needs two of
//! them: a lightweight key/value preference store and a fire-and-forget sound sink. Concrete
//! browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod sound;
pub mod storage;

pub use host::{HostServices, HostStrategy};
pub use sound::{NoopSoundService, RecordingSoundService, SoundService};
pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture,
};

//! Desktop shell runtime: window manager, shell chrome sequencing, and the Leptos components that
//! render them.
//!
//! State transitions are pure functions over [`DesktopState`] driven by [`DesktopAction`] values;
//! browser side effects are returned as [`RuntimeEffect`] intents and executed by [`host`].

pub mod apps;
pub mod components;
pub mod effect_executor;
pub mod host;
pub mod model;
pub mod persistence;
pub mod reducer;
pub mod runtime_context;
pub mod sequencer;
pub mod shell;
pub mod taskbar;
pub mod theme;
pub mod window_manager;

pub use apps::{app_descriptor, app_registry, AppDescriptor, BuiltinApps};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use persistence::{load_boot_prefs, persist_snake_high_score, persist_theme, BootPrefs};
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use sequencer::{Scheduler, ShellPhase, ShellScreen};

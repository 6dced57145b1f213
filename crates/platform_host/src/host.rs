//! Host service bundle injected into the desktop runtime.

use std::rc::Rc;

use crate::{NoopPrefsStore, NoopSoundService, PrefsStore, SoundService};

/// Stable host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed composition (`localStorage`, `<audio>` elements).
    Browser,
    /// Inert composition for native builds and tests.
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Runtime-selected host service bundle.
///
/// All environment-specific selection happens before this bundle crosses into `desktop_runtime`,
/// so the window manager and snake engine never name a browser type.
#[derive(Clone)]
pub struct HostServices {
    /// Scalar preference store (theme color, snake high score).
    pub prefs: Rc<dyn PrefsStore>,
    /// Named sound clip playback.
    pub sound: Rc<dyn SoundService>,
    /// Strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundle with no persistence and no audio.
    pub fn headless() -> Self {
        Self {
            prefs: Rc::new(NoopPrefsStore),
            sound: Rc::new(NoopSoundService),
            host_strategy: HostStrategy::Headless,
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}

//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Reducers stay pure; everything that touches storage, audio, timers, or the viewport runs here
//! behind the [`HostServices`] bundle injected by the entry layer.

mod boot;
mod host_ui;
mod persistence_effects;
mod shell_clock;
mod snake_effects;

use std::rc::Rc;

use desktop_app_contract::SoundCue;
use desktop_app_snake::SnakeEffect;
use leptos::{logging, SignalWithUntracked};
use platform_host::{HostServices, HostStrategy, PrefsStore, SoundService};

use crate::{
    model::Viewport,
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

pub use host_ui::{pointer_from_mouse_event, viewport};
pub use shell_clock::SHELL_CLOCK_TICK_MS;

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    prefs: Rc<dyn PrefsStore>,
    sound: Rc<dyn SoundService>,
    host_strategy: HostStrategy,
}

impl DesktopHostContext {
    pub fn new(services: HostServices) -> Self {
        Self {
            prefs: services.prefs,
            sound: services.sound,
            host_strategy: services.host_strategy,
        }
    }

    /// Returns the configured lightweight preference service.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.prefs.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy.as_str()
    }

    /// Plays `cue` unless sound is disabled. Playback failures are logged and dropped.
    pub fn play_sound(&self, sound_enabled: bool, cue: SoundCue) {
        if !sound_enabled {
            return;
        }
        if let Err(err) = self.sound.play(cue.clip_name()) {
            logging::warn!("sound `{}` failed: {err}", cue.clip_name());
        }
    }

    /// Returns the current browser viewport.
    pub fn viewport(&self) -> Viewport {
        host_ui::viewport()
    }

    /// Restores saved preferences, then starts the boot sequence.
    pub fn install_boot_hydration(&self, runtime: DesktopRuntimeContext) {
        boot::install_boot_hydration(self.clone(), runtime);
    }

    /// Keeps the shell clock interval running exactly while the state waits on it.
    pub fn install_shell_clock(&self, runtime: DesktopRuntimeContext) {
        shell_clock::install(runtime);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PlaySound(cue) => {
                let enabled = runtime.state.with_untracked(|s| s.sound_enabled);
                self.play_sound(enabled, cue);
            }
            RuntimeEffect::PersistTheme => {
                persistence_effects::persist_theme(self.clone(), runtime)
            }
            RuntimeEffect::StopSnake => {
                runtime.dispatch_snake(desktop_app_snake::SnakeAction::Stop)
            }
        }
    }

    /// Executes a single [`SnakeEffect`] emitted by the snake engine.
    pub fn run_snake_effect(&self, runtime: DesktopRuntimeContext, effect: SnakeEffect) {
        match effect {
            SnakeEffect::StartTicker { interval_ms } => {
                snake_effects::start_ticker(runtime, interval_ms)
            }
            SnakeEffect::StopTicker => snake_effects::stop_ticker(runtime),
            SnakeEffect::PersistHighScore(score) => {
                persistence_effects::persist_snake_high_score(self.clone(), score)
            }
            SnakeEffect::PlaySound(cue) => {
                let enabled = runtime.state.with_untracked(|s| s.sound_enabled);
                self.play_sound(enabled, cue);
            }
            SnakeEffect::GameOver { score, high_score } => {
                runtime.dispatch_action(DesktopAction::SnakeGameOver { score, high_score })
            }
        }
    }
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(HostServices::headless())
    }
}

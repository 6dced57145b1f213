use leptos::{logging, spawn_local, SignalWithUntracked};

use crate::{host::DesktopHostContext, persistence, runtime_context::DesktopRuntimeContext};

pub(super) fn persist_theme(host: DesktopHostContext, runtime: DesktopRuntimeContext) {
    let color = runtime.state.with_untracked(|s| s.theme_color.clone());
    spawn_local(async move {
        if let Err(err) = persistence::persist_theme(host.prefs_store().as_ref(), &color).await {
            logging::warn!("persist theme failed: {err}");
        }
    });
}

pub(super) fn persist_snake_high_score(host: DesktopHostContext, score: u32) {
    spawn_local(async move {
        if let Err(err) =
            persistence::persist_snake_high_score(host.prefs_store().as_ref(), score).await
        {
            logging::warn!("persist snake high score failed: {err}");
        }
    });
}

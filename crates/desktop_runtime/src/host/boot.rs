use leptos::{spawn_local, SignalUpdate};

use crate::{
    host::DesktopHostContext, persistence, reducer::DesktopAction,
    runtime_context::DesktopRuntimeContext,
};

pub(super) fn install_boot_hydration(host: DesktopHostContext, runtime: DesktopRuntimeContext) {
    spawn_local(async move {
        let prefs = persistence::load_boot_prefs(host.prefs_store().as_ref()).await;

        if let Some(color) = prefs.theme_color {
            runtime.dispatch_action(DesktopAction::HydrateTheme { color });
        }
        runtime
            .snake
            .update(|engine| engine.hydrate_high_score(prefs.snake_high_score));

        runtime.dispatch_action(DesktopAction::Boot);
    });
}

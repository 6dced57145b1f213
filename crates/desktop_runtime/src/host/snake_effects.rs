use std::time::Duration;

use desktop_app_snake::SnakeAction;
use leptos::{logging, set_interval_with_handle};

use crate::runtime_context::DesktopRuntimeContext;

/// Replaces any running ticker with one at `interval_ms`.
pub(super) fn start_ticker(runtime: DesktopRuntimeContext, interval_ms: u32) {
    stop_ticker(runtime);
    match set_interval_with_handle(
        move || runtime.dispatch_snake(SnakeAction::Tick),
        Duration::from_millis(u64::from(interval_ms)),
    ) {
        Ok(handle) => runtime.snake_ticker.set_value(Some(handle)),
        Err(err) => logging::warn!("snake ticker failed to start: {err:?}"),
    }
}

pub(super) fn stop_ticker(runtime: DesktopRuntimeContext) {
    if let Some(handle) = runtime.snake_ticker.get_value() {
        handle.clear();
        runtime.snake_ticker.set_value(None);
    }
}

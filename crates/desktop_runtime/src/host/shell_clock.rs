use std::time::Duration;

use leptos::{
    create_effect, create_memo, logging, set_interval_with_handle, SignalGet, SignalWith,
};

use crate::{reducer::DesktopAction, runtime_context::DesktopRuntimeContext};

/// Interval driving the phase sequencer, delayed dialogs, and window transitions.
pub const SHELL_CLOCK_TICK_MS: u32 = 100;

pub(super) fn install(runtime: DesktopRuntimeContext) {
    let needs_clock = create_memo(move |_| runtime.state.with(|s| s.needs_clock()));

    create_effect(move |_| {
        if !needs_clock.get() {
            if let Some(handle) = runtime.shell_clock.get_value() {
                handle.clear();
                runtime.shell_clock.set_value(None);
            }
            return;
        }
        if runtime.shell_clock.get_value().is_some() {
            return;
        }
        match set_interval_with_handle(
            move || {
                runtime.dispatch_action(DesktopAction::AdvanceClock {
                    elapsed_ms: SHELL_CLOCK_TICK_MS,
                })
            },
            Duration::from_millis(u64::from(SHELL_CLOCK_TICK_MS)),
        ) {
            Ok(handle) => runtime.shell_clock.set_value(Some(handle)),
            Err(err) => logging::warn!("shell clock failed to start: {err:?}"),
        }
    });
}

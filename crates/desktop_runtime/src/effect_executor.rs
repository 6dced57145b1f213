//! Explicit effect-queue executor for reducer and snake engine side effects.

use leptos::*;

use crate::runtime_context::DesktopRuntimeContext;

/// Installs the executors that drain both effect queues in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear the queue before processing so nested dispatches enqueue a fresh batch instead of
    // being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        let host = runtime.host.get_value();
        for effect in queued {
            host.run_runtime_effect(runtime, effect);
        }
    });

    create_effect(move |_| {
        let queued = runtime.snake_effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.snake_effects.set(Vec::new());

        let host = runtime.host.get_value();
        for effect in queued {
            host.run_snake_effect(runtime, effect);
        }
    });
}

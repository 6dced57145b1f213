//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queues, the snake engine,
//! and host bootstrap wiring. UI composition stays in [`crate::components`].

use std::rc::Rc;

use desktop_app_contract::ContentProvider;
use desktop_app_snake::{entropy_seed, SnakeAction, SnakeConfig, SnakeEffect, SnakeEngine};
use leptos::{leptos_dom::helpers::IntervalHandle, *};
use platform_host::HostServices;

use crate::{
    apps::BuiltinApps,
    effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Provider of window metadata and panel bodies.
    pub content: StoredValue<Rc<dyn ContentProvider>>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer drag/resize interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Snake game engine.
    pub snake: RwSignal<SnakeEngine>,
    /// Queue of effects emitted by the snake engine.
    pub snake_effects: RwSignal<Vec<SnakeEffect>>,
    /// Running snake tick interval, if any.
    pub snake_ticker: StoredValue<Option<IntervalHandle>>,
    /// Running shell clock interval, if any.
    pub shell_clock: StoredValue<Option<IntervalHandle>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
    /// Snake engine dispatch callback.
    pub snake_dispatch: Callback<SnakeAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Feeds an action to the snake engine.
    pub fn dispatch_snake(&self, action: SnakeAction) {
        self.snake_dispatch.call(action);
    }
}

fn install_runtime_orchestration(runtime: DesktopRuntimeContext) {
    effect_executor::install(runtime);
    let host = runtime.host.get_value();
    host.install_shell_clock(runtime);
    host.install_boot_hydration(runtime);
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and boots persisted state.
pub fn DesktopProvider(
    /// Injected browser or headless host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Window content source. Defaults to the built-in portfolio catalog.
    #[prop(optional)]
    content: Option<Rc<dyn ContentProvider>>,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext::new(host_services));
    let content =
        store_value(content.unwrap_or_else(|| Rc::new(BuiltinApps) as Rc<dyn ContentProvider>));
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let snake = create_rw_signal(SnakeEngine::new(SnakeConfig::default(), entropy_seed(), 0));
    let snake_effects = create_rw_signal(Vec::<SnakeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        let result = content
            .with_value(|content| reduce_desktop(&mut desktop, &mut ui, content.as_ref(), action));
        match result {
            Ok(new_effects) => {
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    effects.update(|queue| queue.extend(new_effects));
                }
            }
            Err(err) if err.is_stale_reference() => {
                logging::debug_warn!("desktop reducer ignored stale reference: {err}")
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let snake_dispatch = Callback::new(move |action: SnakeAction| {
        let mut produced = Vec::new();
        snake.update(|engine| produced = engine.apply(action));
        if !produced.is_empty() {
            snake_effects.update(|queue| queue.extend(produced));
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        content,
        state,
        interaction,
        effects,
        snake,
        snake_effects,
        snake_ticker: store_value(None),
        shell_clock: store_value(None),
        dispatch,
        snake_dispatch,
    };

    provide_context(runtime);

    install_runtime_orchestration(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

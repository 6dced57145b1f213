//! Desktop shell UI composition and interaction surfaces.

mod menus;
mod modals;
mod screens;
mod taskbar;
mod window;

use desktop_app_contract::AppId;
use leptos::*;

use self::{
    menus::{DesktopContextMenu, StartMenu},
    modals::{DialogBox, SnakeModal, ThemePicker},
    screens::{BootScreen, ShutdownScreen},
    taskbar::Taskbar,
    window::{ClosingWindow, DesktopWindow},
};

use crate::{
    apps,
    host::pointer_from_mouse_event,
    model::{DesktopState, PointerPosition, ResizeEdge},
    reducer::DesktopAction,
    sequencer::ShellScreen,
    shell::ShellKey,
    theme,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

/// Percent the theme color is lightened by for title-bar and start-button gradients.
const GRADIENT_LIGHTEN_PERCENT: i32 = 30;

fn theme_gradient(color: &str) -> String {
    format!(
        "linear-gradient(to right, {color}, {})",
        theme::lighten(color, GRADIENT_LIGHTEN_PERCENT)
    )
}

fn shell_style(state: &DesktopState) -> String {
    format!(
        "--theme-color:{};--theme-gradient:{};",
        state.theme_color,
        theme_gradient(&state.theme_color)
    )
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn pointer_from_touch_event(ev: &web_sys::TouchEvent) -> Option<PointerPosition> {
    ev.touches().get(0).map(|touch| PointerPosition {
        x: touch.client_x(),
        y: touch.client_y(),
    })
}

fn resize_edge_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::North => "edge-n",
        ResizeEdge::South => "edge-s",
        ResizeEdge::East => "edge-e",
        ResizeEdge::West => "edge-w",
        ResizeEdge::NorthEast => "edge-ne",
        ResizeEdge::NorthWest => "edge-nw",
        ResizeEdge::SouthEast => "edge-se",
        ResizeEdge::SouthWest => "edge-sw",
    }
}

/// Routes a pointer move to whichever session occupies the interaction slot.
fn update_pointer_session(runtime: DesktopRuntimeContext, pointer: PointerPosition) {
    let (dragging, resizing) = runtime
        .interaction
        .with_untracked(|i| (i.dragging().is_some(), i.resizing().is_some()));
    if dragging {
        let viewport = runtime.host.get_value().viewport();
        runtime.dispatch_action(DesktopAction::UpdateDrag { pointer, viewport });
    } else if resizing {
        runtime.dispatch_action(DesktopAction::UpdateResize { pointer });
    }
}

fn end_pointer_session(runtime: DesktopRuntimeContext) {
    if runtime.interaction.with_untracked(|i| i.pointer.is_some()) {
        runtime.dispatch_action(DesktopAction::EndPointer);
    }
}

fn install_global_listeners(runtime: DesktopRuntimeContext) {
    let keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() {
            return;
        }
        let Some(key) = ShellKey::from_key(&ev.key(), ev.alt_key()) else {
            return;
        };
        if key.prevents_default() {
            ev.prevent_default();
        }
        runtime.dispatch_action(DesktopAction::KeyPressed(key));
    });
    on_cleanup(move || keydown.remove());

    let pointermove = window_event_listener(ev::pointermove, move |ev| {
        update_pointer_session(runtime, pointer_from_pointer_event(&ev));
    });
    on_cleanup(move || pointermove.remove());

    let pointerup = window_event_listener(ev::pointerup, move |_| end_pointer_session(runtime));
    on_cleanup(move || pointerup.remove());

    let pointercancel =
        window_event_listener(ev::pointercancel, move |_| end_pointer_session(runtime));
    on_cleanup(move || pointercancel.remove());

    let touchmove = window_event_listener(ev::touchmove, move |ev| {
        if let Some(pointer) = pointer_from_touch_event(&ev) {
            update_pointer_session(runtime, pointer);
        }
    });
    on_cleanup(move || touchmove.remove());

    let touchend = window_event_listener(ev::touchend, move |_| end_pointer_session(runtime));
    on_cleanup(move || touchend.remove());
}

#[component]
fn DesktopIcon(app_id: AppId, label: String, icon: String) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let selected = {
        let app_id = app_id.clone();
        create_memo(move |_| {
            runtime
                .state
                .with(|s| s.selected_icon.as_ref() == Some(&app_id))
        })
    };
    let select_id = app_id.clone();

    view! {
        <div
            class="desktop-icon"
            class:selected=move || selected.get()
            role="button"
            tabindex="0"
            on:click=move |ev| {
                ev.stop_propagation();
                runtime.dispatch_action(DesktopAction::SelectIcon { app_id: select_id.clone() });
            }
            on:dblclick=move |ev| {
                ev.stop_propagation();
                runtime.dispatch_action(DesktopAction::OpenApp { app_id: app_id.clone() });
            }
        >
            <i class=format!("{icon} desktop-icon-glyph") aria-hidden="true"></i>
            <span class="desktop-icon-label">{label}</span>
        </div>
    }
}

#[component]
/// Renders the full desktop shell UI.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let screen = create_memo(move |_| state.with(|s| s.scheduler.screen()));

    install_global_listeners(runtime);

    let on_contextmenu = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::CloseStartMenu);
        runtime.dispatch_action(DesktopAction::OpenContextMenu {
            pointer: pointer_from_mouse_event(&ev),
            viewport: runtime.host.get_value().viewport(),
        });
    };

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            class:crt=move || state.with(|s| s.crt_enabled)
            style=move || state.with(shell_style)
        >
            <Show when=move || matches!(screen.get(), ShellScreen::Boot { .. }) fallback=|| ()>
                <BootScreen screen=screen />
            </Show>
            <Show when=move || screen.get() == ShellScreen::Shutdown fallback=|| ()>
                <ShutdownScreen />
            </Show>
            <div
                class="desktop"
                class:hidden=move || screen.get() != ShellScreen::Desktop
                on:click=move |_| {
                    runtime.dispatch_action(DesktopAction::DismissTransient);
                    runtime.dispatch_action(DesktopAction::CloseStartMenu);
                }
                on:contextmenu=on_contextmenu
            >
                <div class="desktop-icons">
                    <For
                        each=apps::desktop_icon_apps
                        key=|app| app.app_id.to_string()
                        let:app
                    >
                        <DesktopIcon
                            app_id=app.app_id.clone()
                            label=app.desktop_label.clone()
                            icon=app.icon.clone()
                        />
                    </For>
                </div>

                <div class="window-layer">
                    <For each=move || state.with(|s| s.windows.clone()) key=|win| win.id.0 let:win>
                        <DesktopWindow window_id=win.id />
                    </For>
                    <For
                        each=move || state.with(|s| s.closing_windows.clone())
                        key=|win| win.id.0
                        let:win
                    >
                        <ClosingWindow window=win />
                    </For>
                </div>

                <DesktopContextMenu />
                <StartMenu />
                <Taskbar />
            </div>

            <ThemePicker />
            <SnakeModal />
            <DialogBox />
            <div class="crt-overlay" aria-hidden="true" class:hidden=move || !state.with(|s| s.crt_enabled)></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn gradient_runs_from_theme_to_lighter_shade() {
        assert_eq!(
            theme_gradient("#ffffff"),
            "linear-gradient(to right, #ffffff, #ffffff)"
        );
    }

    #[test]
    fn shell_style_exposes_theme_variables() {
        let state = DesktopState::default();
        assert!(shell_style(&state).starts_with("--theme-color:#008080;"));
    }
}

use super::*;
use crate::model::{WindowId, WindowRecord, WindowState};
use desktop_app_contract::{DialogRequest, PanelHost, SoundCue};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

const RESIZE_EDGES: [ResizeEdge; 8] = [
    ResizeEdge::North,
    ResizeEdge::South,
    ResizeEdge::East,
    ResizeEdge::West,
    ResizeEdge::NorthEast,
    ResizeEdge::NorthWest,
    ResizeEdge::SouthEast,
    ResizeEdge::SouthWest,
];

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Primary button for mice, primary contact for touch and pen.
fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn window_style(win: &WindowRecord) -> String {
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        win.bounds.x,
        win.bounds.y,
        win.bounds.w,
        win.bounds.h,
        win.visual_z()
    )
}

fn window_class(win: &WindowRecord, transition: Option<&'static str>) -> String {
    let mut class = String::from("window");
    if win.is_active {
        class.push_str(" active");
    }
    match (win.state, transition) {
        (_, Some(name)) => {
            class.push(' ');
            class.push_str(name);
        }
        (WindowState::Minimized { .. }, None) => class.push_str(" minimized"),
        _ => {}
    }
    if win.state.is_maximized() {
        class.push_str(" maximized");
    }
    class
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let window = create_memo(move |_| state.with(|s| s.window(window_id).cloned()));
    let transition = create_memo(move |_| {
        state.with(|s| s.transition_for(window_id).map(|kind| kind.css_class()))
    });

    let focus = move |_| {
        let should_focus = window
            .with_untracked(|w| w.as_ref().map(|w| !w.is_active))
            .unwrap_or(false);
        if should_focus {
            runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
        }
    };
    let toggle_maximize = move || {
        runtime.dispatch_action(DesktopAction::MaximizeToggle {
            window_id,
            viewport: runtime.host.get_value().viewport(),
        });
    };
    let begin_drag = move |pointer: PointerPosition| {
        runtime.dispatch_action(DesktopAction::BeginDrag { window_id, pointer });
    };
    let on_header_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        begin_drag(pointer_from_pointer_event(&ev));
    };
    let on_header_touchstart = move |ev: web_sys::TouchEvent| {
        if let Some(pointer) = pointer_from_touch_event(&ev) {
            begin_drag(pointer);
        }
    };

    let (title, icon) = window
        .with_untracked(|w| w.as_ref().map(|w| (w.title.clone(), w.icon.clone())))
        .unwrap_or_default();
    let class = move || {
        window.with(|w| {
            w.as_ref()
                .map(|w| window_class(w, transition.get()))
                .unwrap_or_default()
        })
    };
    let style = move || window.with(|w| w.as_ref().map(window_style).unwrap_or_default());
    let resizable = move || window.with(|w| w.as_ref().is_some_and(|w| w.state == WindowState::Normal));
    let maximize_label = move || {
        if window.with(|w| w.as_ref().is_some_and(|w| w.state.is_maximized())) {
            "Restore window"
        } else {
            "Maximize window"
        }
    };

    view! {
        <section
            class=class
            style=style
            on:pointerdown=focus
            role="dialog"
            aria-label=title.clone()
        >
            <header
                class="window-header"
                on:pointerdown=on_header_pointerdown
                on:touchstart=on_header_touchstart
                on:dblclick=move |ev| {
                    stop_mouse_event(&ev);
                    toggle_maximize();
                }
            >
                <div class="window-title">
                    <i class=icon aria-hidden="true"></i>
                    <span>{title}</span>
                </div>
                <div class="window-controls">
                    <button
                        class="window-control minimize"
                        aria-label="Minimize window"
                        on:pointerdown=|ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::MinimizeToggle { window_id });
                        }
                    >
                        "_"
                    </button>
                    <button
                        class="window-control maximize"
                        aria-label=maximize_label
                        on:pointerdown=|ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            toggle_maximize();
                        }
                    >
                        "\u{25A1}"
                    </button>
                    <button
                        class="window-control close"
                        aria-label="Close window"
                        on:pointerdown=|ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
                        }
                    >
                        "\u{00D7}"
                    </button>
                </div>
            </header>
            <div class="window-content">
                <WindowBody window_id=window_id />
            </div>
            <Show when=resizable fallback=|| ()>
                {RESIZE_EDGES
                    .into_iter()
                    .map(|edge| view! { <WindowResizeHandle window_id edge /> })
                    .collect_view()}
            </Show>
        </section>
    }
}

#[component]
fn WindowResizeHandle(window_id: WindowId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let class_name = format!("window-resize-handle {}", resize_edge_class(edge));

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id,
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    view! { <div class=class_name aria-hidden="true" on:pointerdown=on_pointerdown /> }
}

#[component]
fn WindowBody(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let host = PanelHost::new(
        Callback::new(move |dialog: DialogRequest| {
            runtime.dispatch_action(DesktopAction::ShowDialog(dialog));
        }),
        Callback::new(move |cue: SoundCue| runtime.dispatch_action(DesktopAction::PlaySound(cue))),
    );
    let app_id = runtime
        .state
        .with_untracked(|s| s.window(window_id).map(|w| w.app_id.clone()));

    match app_id {
        Some(app_id) => runtime
            .content
            .with_value(|content| content.render_body(&app_id, host)),
        None => ().into_view(),
    }
}

/// Render-only copy of a closed window, kept while its closing transition plays.
#[component]
pub(super) fn ClosingWindow(window: WindowRecord) -> impl IntoView {
    view! {
        <section class=window_class(&window, Some("closing")) style=window_style(&window) aria-hidden="true">
            <header class="window-header">
                <div class="window-title">
                    <i class=window.icon.clone() aria-hidden="true"></i>
                    <span>{window.title.clone()}</span>
                </div>
            </header>
        </section>
    }
}

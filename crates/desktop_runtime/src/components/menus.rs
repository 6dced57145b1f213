use super::*;
use crate::shell;

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let sound_label = move || state.with(|s| shell::sound_label(s.sound_enabled));

    view! {
        <Show when=move || state.with(|s| s.start_menu_open) fallback=|| ()>
            <nav
                class="start-menu"
                role="menu"
                aria-label="Start menu"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="start-menu-banner">"Portfolio OS"</div>
                <ul class="start-menu-items">
                    {apps::launcher_apps()
                        .map(|app| {
                            let app_id = app.app_id.clone();
                            view! {
                                <li
                                    role="menuitem"
                                    class="start-menu-item"
                                    on:click=move |_| {
                                        runtime
                                            .dispatch_action(DesktopAction::OpenApp {
                                                app_id: app_id.clone(),
                                            })
                                    }
                                >
                                    <i class=app.icon.clone() aria-hidden="true"></i>
                                    <span>{app.display_name.clone()}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                    <li class="start-menu-separator" role="separator"></li>
                    <li
                        role="menuitem"
                        class="start-menu-item"
                        on:click=move |_| runtime.dispatch_action(DesktopAction::OpenThemePicker)
                    >
                        <i class="fas fa-palette" aria-hidden="true"></i>
                        <span>"Change Theme"</span>
                    </li>
                    <li
                        role="menuitem"
                        class="start-menu-item"
                        on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleCrt)
                    >
                        <i class="fas fa-tv" aria-hidden="true"></i>
                        <span>"Toggle CRT Effect"</span>
                    </li>
                    <li
                        role="menuitem"
                        class="start-menu-item"
                        on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleSound)
                    >
                        <i class="fas fa-volume-up" aria-hidden="true"></i>
                        <span>{sound_label}</span>
                    </li>
                    <li class="start-menu-separator" role="separator"></li>
                    <li
                        role="menuitem"
                        class="start-menu-item"
                        on:click=move |_| runtime.dispatch_action(DesktopAction::Shutdown)
                    >
                        <i class="fas fa-power-off" aria-hidden="true"></i>
                        <span>"Shut Down..."</span>
                    </li>
                </ul>
            </nav>
        </Show>
    }
}

#[component]
pub(super) fn DesktopContextMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let menu = create_memo(move |_| runtime.state.with(|s| s.context_menu));
    let choose = move |action: DesktopAction| {
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            runtime.dispatch_action(action.clone());
        }
    };

    view! {
        <Show when=move || menu.with(Option::is_some) fallback=|| ()>
            <div
                class="context-menu"
                role="menu"
                aria-label="Desktop context menu"
                style=move || {
                    menu.get()
                        .map(|m| format!("left:{}px;top:{}px;", m.x, m.y))
                        .unwrap_or_default()
                }
                on:contextmenu=|ev| stop_mouse_event(&ev)
            >
                <div
                    role="menuitem"
                    class="context-menu-item"
                    on:click=choose(DesktopAction::ShowDialog(shell::refresh_dialog()))
                >
                    "Refresh"
                </div>
                <div
                    role="menuitem"
                    class="context-menu-item"
                    on:click=choose(DesktopAction::ShowDialog(shell::properties_dialog()))
                >
                    "Properties"
                </div>
                <div class="context-menu-separator" role="separator"></div>
                <div
                    role="menuitem"
                    class="context-menu-item"
                    on:click=move |ev| {
                        stop_mouse_event(&ev);
                        runtime.dispatch_action(DesktopAction::DismissTransient);
                        runtime.dispatch_action(DesktopAction::ToggleCrt);
                    }
                >
                    "Toggle CRT Effect"
                </div>
            </div>
        </Show>
    }
}

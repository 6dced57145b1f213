use std::time::Duration;

use super::*;
use crate::{
    model::TaskbarEntry,
    taskbar::{format_clock, local_time, CLOCK_REFRESH_MS},
};

fn entry_class(entry: &TaskbarEntry) -> &'static str {
    match (entry.is_active, entry.is_minimized) {
        (true, _) => "taskbar-item active",
        (false, true) => "taskbar-item minimized",
        (false, false) => "taskbar-item",
    }
}

fn clock_text() -> String {
    let (hours, minutes) = local_time();
    format_clock(hours, minutes)
}

#[component]
fn TaskbarClock() -> impl IntoView {
    let now = create_rw_signal(clock_text());

    if let Ok(interval) = set_interval_with_handle(
        move || now.set(clock_text()),
        Duration::from_millis(CLOCK_REFRESH_MS),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! { <div class="taskbar-clock" aria-live="off">{move || now.get()}</div> }
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <footer class="taskbar">
            <button
                class="start-button"
                class:active=move || state.with(|s| s.start_menu_open)
                aria-haspopup="menu"
                on:click=move |ev| {
                    stop_mouse_event(&ev);
                    runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                }
            >
                <i class="fab fa-windows" aria-hidden="true"></i>
                <span>"Start"</span>
            </button>

            <div class="quick-launch">
                {apps::pinned_apps()
                    .map(|app| {
                        let app_id = app.app_id.clone();
                        view! {
                            <button
                                class="quick-launch-item"
                                title=app.display_name.clone()
                                on:click=move |ev| {
                                    stop_mouse_event(&ev);
                                    runtime
                                        .dispatch_action(DesktopAction::OpenApp {
                                            app_id: app_id.clone(),
                                        });
                                }
                            >
                                <i class=app.icon.clone() aria-hidden="true"></i>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="taskbar-items" role="toolbar" aria-label="Open windows">
                <For
                    each=move || state.with(|s| s.taskbar.clone())
                    key=|entry| (entry.window_id.0, entry.is_active, entry.is_minimized)
                    let:entry
                >
                    {{
                        let window_id = entry.window_id;
                        view! {
                            <button
                                class=entry_class(&entry)
                                aria-pressed=entry.is_active.to_string()
                                on:click=move |ev| {
                                    stop_mouse_event(&ev);
                                    runtime.dispatch_action(DesktopAction::TaskbarClick { window_id });
                                }
                            >
                                <i class=entry.icon.clone() aria-hidden="true"></i>
                                <span>{entry.title.clone()}</span>
                            </button>
                        }
                    }}
                </For>
            </div>

            <TaskbarClock />
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowId;

    #[test]
    fn entry_class_reflects_window_state() {
        let mut entry = TaskbarEntry {
            window_id: WindowId(3),
            title: "Skills".to_string(),
            icon: "fas fa-cogs".to_string(),
            is_active: true,
            is_minimized: false,
        };
        assert_eq!(entry_class(&entry), "taskbar-item active");
        entry.is_active = false;
        entry.is_minimized = true;
        assert_eq!(entry_class(&entry), "taskbar-item minimized");
    }
}

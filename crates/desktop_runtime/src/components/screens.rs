use super::*;

#[component]
pub(super) fn BootScreen(screen: Memo<ShellScreen>) -> impl IntoView {
    let progress = move || screen.get().boot_progress();
    let percent = move || progress().map(|(percent, _)| percent).unwrap_or(0);
    let status = move || progress().map(|(_, status)| status).unwrap_or("Starting...");

    view! {
        <div class="boot-screen" role="status" aria-live="polite">
            <div class="boot-logo">
                <i class="fab fa-windows" aria-hidden="true"></i>
                <span>"Portfolio OS"</span>
            </div>
            <div class="boot-progress">
                <div class="boot-progress-bar" style=move || format!("width:{}%;", percent())></div>
            </div>
            <div class="boot-status">{status}</div>
        </div>
    }
}

#[component]
pub(super) fn ShutdownScreen() -> impl IntoView {
    view! {
        <div class="shutdown-screen" role="status">
            <p>"It's now safe to turn off your computer."</p>
        </div>
    }
}

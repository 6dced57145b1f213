use desktop_app_snake::{SnakeAction, SnakeBoard};

use super::*;
use crate::{model::Modal, theme::PALETTE};

fn modal_style(z: Option<u32>) -> String {
    z.map(|z| format!("z-index:{z};")).unwrap_or_default()
}

#[component]
pub(super) fn DialogBox() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let dialog = create_memo(move |_| runtime.state.with(|s| s.dialog.clone()));
    let dismiss = move |_| runtime.dispatch_action(DesktopAction::DismissDialog);

    view! {
        <Show when=move || dialog.with(Option::is_some) fallback=|| ()>
            {move || {
                dialog
                    .get()
                    .map(|dialog| {
                        view! {
                            <div class="dialog-backdrop" style=format!("z-index:{};", dialog.z)>
                                <div class="dialog" role="alertdialog" aria-label=dialog.title.clone()>
                                    <header class="dialog-header">
                                        <span>{dialog.title.clone()}</span>
                                        <button class="window-control close" aria-label="Close" on:click=dismiss>
                                            "\u{00D7}"
                                        </button>
                                    </header>
                                    <div class="dialog-body">
                                        <i class="fas fa-info-circle dialog-icon" aria-hidden="true"></i>
                                        <p>{dialog.message.clone()}</p>
                                    </div>
                                    <div class="dialog-actions">
                                        <button class="dialog-ok" on:click=dismiss>"OK"</button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}

#[component]
pub(super) fn ThemePicker() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let z = create_memo(move |_| runtime.state.with(|s| s.modal_z(Modal::ThemePicker)));
    let current = create_memo(move |_| runtime.state.with(|s| s.theme_color.clone()));

    view! {
        <Show when=move || z.with(Option::is_some) fallback=|| ()>
            <div class="modal theme-picker" style=move || modal_style(z.get()) role="dialog" aria-label="Choose Theme">
                <header class="dialog-header">
                    <span>"Choose Theme"</span>
                    <button
                        class="window-control close"
                        aria-label="Close"
                        on:click=move |_| {
                            runtime.dispatch_action(DesktopAction::CloseModal { modal: Modal::ThemePicker })
                        }
                    >
                        "\u{00D7}"
                    </button>
                </header>
                <div class="theme-swatches">
                    {PALETTE
                        .iter()
                        .map(|&(color, name)| {
                            view! {
                                <button
                                    class="theme-swatch"
                                    class:selected=move || current.with(|c| c.eq_ignore_ascii_case(color))
                                    title=name
                                    style=format!("background:{color};")
                                    on:click=move |_| {
                                        runtime
                                            .dispatch_action(DesktopAction::SetThemeColor {
                                                color: color.to_string(),
                                            })
                                    }
                                >
                                    <span class="theme-swatch-name">{name}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Show>
    }
}

#[component]
pub(super) fn SnakeModal() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let z = create_memo(move |_| runtime.state.with(|s| s.modal_z(Modal::Snake)));
    let on_action = Callback::new(move |action: SnakeAction| runtime.dispatch_snake(action));

    view! {
        <Show when=move || z.with(Option::is_some) fallback=|| ()>
            <div class="modal snake-modal" style=move || modal_style(z.get()) role="dialog" aria-label="Snake Game">
                <header class="dialog-header">
                    <span>"Snake Game"</span>
                    <button
                        class="window-control close"
                        aria-label="Close"
                        on:click=move |_| {
                            runtime.dispatch_action(DesktopAction::CloseModal { modal: Modal::Snake })
                        }
                    >
                        "\u{00D7}"
                    </button>
                </header>
                <SnakeBoard game=runtime.snake on_action=on_action />
            </div>
        </Show>
    }
}

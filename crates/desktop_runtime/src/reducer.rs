//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use desktop_app_contract::{
    AppId, ContentProvider, DialogRequest, Presentation, ShellError, SoundCue,
};
use thiserror::Error;

use crate::{
    model::{
        DesktopState, Dialog, InteractionState, Modal, OpenModal, PointerPosition,
        PointerSession, ResizeEdge, Viewport, WindowId,
    },
    sequencer::{boot_sequence, shutdown_sequence, Greeting, ShellPhase},
    shell::{self, ShellKey},
    theme, window_manager,
};

/// Delay between a snake game over and its summary dialog.
pub const GAME_OVER_DIALOG_DELAY_MS: u32 = 500;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Start the boot sequence.
    Boot,
    /// Close everything, power off, and boot again.
    Shutdown,
    /// Advance the phase sequencer, delayed dialogs, and window transitions.
    AdvanceClock { elapsed_ms: u32 },
    /// Open an app, or focus/restore its existing window.
    OpenApp { app_id: AppId },
    FocusWindow { window_id: WindowId },
    MinimizeToggle { window_id: WindowId },
    MaximizeToggle { window_id: WindowId, viewport: Viewport },
    CloseWindow { window_id: WindowId },
    CycleWindows,
    /// Taskbar button: restore when minimized, otherwise focus.
    TaskbarClick { window_id: WindowId },
    BeginDrag { window_id: WindowId, pointer: PointerPosition },
    UpdateDrag { pointer: PointerPosition, viewport: Viewport },
    BeginResize {
        window_id: WindowId,
        edge: ResizeEdge,
        pointer: PointerPosition,
    },
    UpdateResize { pointer: PointerPosition },
    /// Pointer or touch release anywhere; ends any drag or resize.
    EndPointer,
    ToggleStartMenu,
    CloseStartMenu,
    OpenContextMenu { pointer: PointerPosition, viewport: Viewport },
    /// Click on the page background: hides the context menu and clears icon selection.
    DismissTransient,
    SelectIcon { app_id: AppId },
    ShowDialog(DialogRequest),
    DismissDialog,
    ToggleCrt,
    ToggleSound,
    OpenThemePicker,
    CloseModal { modal: Modal },
    SetThemeColor { color: String },
    /// Apply a persisted theme without sound or dialog.
    HydrateTheme { color: String },
    KeyPressed(ShellKey),
    /// A panel or the snake board asked for a sound.
    PlaySound(SoundCue),
    /// The snake run ended; queues the summary dialog.
    SnakeGameOver { score: u32, high_score: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Play a named sound; the host drops it while sound is disabled.
    PlaySound(SoundCue),
    /// Persist the current theme color.
    PersistTheme,
    /// Stop the snake ticker, keeping the board.
    StopSnake,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions.
pub enum ReducerError {
    /// The target window no longer exists.
    #[error("window {0:?} not found")]
    WindowNotFound(WindowId),
    /// A theme color was not `#RRGGBB`.
    #[error("invalid theme color `{0}`")]
    InvalidThemeColor(String),
}

impl ReducerError {
    /// Maps the error onto the shared [`ShellError`] taxonomy.
    pub fn shell_error(&self) -> ShellError {
        match self {
            Self::WindowNotFound(id) => ShellError::StaleReference(id.0),
            Self::InvalidThemeColor(_) => ShellError::Validation(self.to_string()),
        }
    }

    /// Stale references are expected races with deferred callbacks and stay quiet.
    pub fn is_stale_reference(&self) -> bool {
        matches!(self.shell_error(), ShellError::StaleReference(_))
    }
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// `content` resolves app ids to window metadata when a new window is opened.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action references a window that is not
/// present, and [`ReducerError::InvalidThemeColor`] for malformed colors. The state is left
/// unchanged in both cases.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    content: &dyn ContentProvider,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::Boot => {
            let entered = state.scheduler.start(boot_sequence(Greeting::FirstBoot));
            enter_phases(state, &entered, &mut effects);
        }
        DesktopAction::Shutdown => {
            effects.push(RuntimeEffect::PlaySound(SoundCue::Shutdown));
            state.start_menu_open = false;
            state.context_menu = None;
            interaction.pointer = None;
            window_manager::close_all_windows(state);
            close_modal(state, Modal::ThemePicker, &mut effects);
            close_modal(state, Modal::Snake, &mut effects);
            let entered = state.scheduler.start(shutdown_sequence());
            enter_phases(state, &entered, &mut effects);
        }
        DesktopAction::AdvanceClock { elapsed_ms } => {
            window_manager::advance_transitions(state, elapsed_ms);
            let tick = state.scheduler.advance(elapsed_ms);
            enter_phases(state, &tick.phases, &mut effects);
            for dialog in tick.dialogs {
                show_dialog(state, dialog, &mut effects);
            }
        }
        DesktopAction::OpenApp { app_id } => {
            state.start_menu_open = false;
            open_app(state, content, &app_id, &mut effects)?;
        }
        DesktopAction::FocusWindow { window_id } => {
            window_manager::focus_window(state, window_id)?;
            effects.push(RuntimeEffect::PlaySound(SoundCue::Click));
        }
        DesktopAction::MinimizeToggle { window_id } => {
            window_manager::minimize_toggle(state, window_id)?;
            effects.push(RuntimeEffect::PlaySound(SoundCue::Click));
        }
        DesktopAction::MaximizeToggle {
            window_id,
            viewport,
        } => {
            window_manager::maximize_toggle(state, window_id, viewport)?;
            effects.push(RuntimeEffect::PlaySound(SoundCue::Click));
        }
        DesktopAction::CloseWindow { window_id } => {
            close_window(state, interaction, window_id)?;
            effects.push(RuntimeEffect::PlaySound(SoundCue::WindowClose));
        }
        DesktopAction::CycleWindows => {
            window_manager::cycle_windows(state);
        }
        DesktopAction::TaskbarClick { window_id } => {
            window_manager::taskbar_click(state, window_id)?;
            effects.push(RuntimeEffect::PlaySound(SoundCue::Click));
        }
        DesktopAction::BeginDrag { window_id, pointer } => {
            window_manager::begin_drag(state, interaction, window_id, pointer)?;
        }
        DesktopAction::UpdateDrag { pointer, viewport } => {
            window_manager::update_drag(state, interaction, pointer, viewport)?;
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            window_manager::begin_resize(state, interaction, window_id, edge, pointer)?;
        }
        DesktopAction::UpdateResize { pointer } => {
            window_manager::update_resize(state, interaction, pointer)?;
        }
        DesktopAction::EndPointer => {
            interaction.pointer = None;
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
            let cue = if state.start_menu_open {
                SoundCue::MenuOpen
            } else {
                SoundCue::Click
            };
            effects.push(RuntimeEffect::PlaySound(cue));
        }
        DesktopAction::CloseStartMenu => {
            if state.start_menu_open {
                state.start_menu_open = false;
                effects.push(RuntimeEffect::PlaySound(SoundCue::Click));
            }
        }
        DesktopAction::OpenContextMenu { pointer, viewport } => {
            state.context_menu = Some(shell::place_context_menu(pointer, viewport));
            effects.push(RuntimeEffect::PlaySound(SoundCue::Click));
        }
        DesktopAction::DismissTransient => {
            state.context_menu = None;
            state.selected_icon = None;
        }
        DesktopAction::SelectIcon { app_id } => {
            state.selected_icon = Some(app_id);
            effects.push(RuntimeEffect::PlaySound(SoundCue::Click));
        }
        DesktopAction::ShowDialog(dialog) => {
            state.context_menu = None;
            show_dialog(state, dialog, &mut effects);
        }
        DesktopAction::DismissDialog => {
            if state.dialog.take().is_some() {
                effects.push(RuntimeEffect::PlaySound(SoundCue::Click));
            }
        }
        DesktopAction::ToggleCrt => toggle_crt(state, &mut effects),
        DesktopAction::ToggleSound => {
            state.sound_enabled = !state.sound_enabled;
            let enabled = state.sound_enabled;
            show_dialog(state, shell::sound_dialog(enabled), &mut effects);
        }
        DesktopAction::OpenThemePicker => {
            state.start_menu_open = false;
            open_modal(state, Modal::ThemePicker);
            effects.push(RuntimeEffect::PlaySound(SoundCue::Click));
        }
        DesktopAction::CloseModal { modal } => {
            if close_modal(state, modal, &mut effects) {
                effects.push(RuntimeEffect::PlaySound(SoundCue::Click));
            }
        }
        DesktopAction::SetThemeColor { color } => {
            let color = validated_color(color)?;
            effects.push(RuntimeEffect::PlaySound(SoundCue::ThemeChange));
            let dialog = shell::theme_dialog(&color);
            state.theme_color = color;
            effects.push(RuntimeEffect::PersistTheme);
            close_modal(state, Modal::ThemePicker, &mut effects);
            show_dialog(state, dialog, &mut effects);
        }
        DesktopAction::HydrateTheme { color } => {
            state.theme_color = validated_color(color)?;
        }
        DesktopAction::KeyPressed(key) => {
            effects.push(RuntimeEffect::PlaySound(SoundCue::Click));
            match key {
                ShellKey::CycleWindows => {
                    window_manager::cycle_windows(state);
                }
                ShellKey::ToggleCrt => toggle_crt(state, &mut effects),
                ShellKey::Escape => {
                    if state.start_menu_open {
                        state.start_menu_open = false;
                    } else if let Some(active) = state.active_window {
                        close_window(state, interaction, active)?;
                    }
                    close_modal(state, Modal::Snake, &mut effects);
                    close_modal(state, Modal::ThemePicker, &mut effects);
                }
            }
        }
        DesktopAction::PlaySound(cue) => {
            effects.push(RuntimeEffect::PlaySound(cue));
        }
        DesktopAction::SnakeGameOver { score, high_score } => {
            state.scheduler.queue_dialog(
                GAME_OVER_DIALOG_DELAY_MS,
                shell::snake_game_over_dialog(score, high_score),
            );
        }
    }

    Ok(effects)
}

fn open_app(
    state: &mut DesktopState,
    content: &dyn ContentProvider,
    app_id: &AppId,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    let existing = state
        .window_for_app(app_id)
        .map(|w| (w.id, w.state.is_minimized()));
    if let Some((window_id, minimized)) = existing {
        if minimized {
            window_manager::minimize_toggle(state, window_id)?;
        } else {
            window_manager::focus_window(state, window_id)?;
        }
        effects.push(RuntimeEffect::PlaySound(SoundCue::Click));
        return Ok(());
    }

    let panel = match content.describe(app_id) {
        Ok(panel) => panel,
        Err(err) => {
            if let Some(dialog) = DialogRequest::from_error(&err) {
                show_dialog(state, dialog, effects);
            }
            return Ok(());
        }
    };

    match panel.presentation {
        Presentation::Window => {
            window_manager::open_window(state, &panel);
            effects.push(RuntimeEffect::PlaySound(SoundCue::WindowOpen));
        }
        Presentation::Snake => {
            open_modal(state, Modal::Snake);
            effects.push(RuntimeEffect::PlaySound(SoundCue::Game));
        }
    }
    Ok(())
}

fn close_window(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    window_id: WindowId,
) -> Result<(), ReducerError> {
    window_manager::close_window(state, window_id)?;
    let targets_closed = match &interaction.pointer {
        Some(PointerSession::Drag(session)) => session.window_id == window_id,
        Some(PointerSession::Resize(session)) => session.window_id == window_id,
        None => false,
    };
    if targets_closed {
        interaction.pointer = None;
    }
    Ok(())
}

fn enter_phases(state: &mut DesktopState, phases: &[ShellPhase], effects: &mut Vec<RuntimeEffect>) {
    for phase in phases {
        match phase {
            ShellPhase::BootProgress(0) => {
                effects.push(RuntimeEffect::PlaySound(SoundCue::Startup));
            }
            ShellPhase::Greet(greeting) => show_dialog(state, greeting.dialog(), effects),
            _ => {}
        }
    }
}

fn show_dialog(state: &mut DesktopState, dialog: DialogRequest, effects: &mut Vec<RuntimeEffect>) {
    let z = state.take_z();
    state.dialog = Some(Dialog {
        title: dialog.title,
        message: dialog.message,
        z,
    });
    effects.push(RuntimeEffect::PlaySound(SoundCue::Error));
}

fn toggle_crt(state: &mut DesktopState, effects: &mut Vec<RuntimeEffect>) {
    state.crt_enabled = !state.crt_enabled;
    let enabled = state.crt_enabled;
    show_dialog(state, shell::crt_dialog(enabled), effects);
}

fn open_modal(state: &mut DesktopState, modal: Modal) {
    state.modals.retain(|m| m.modal != modal);
    let z = state.take_z();
    state.modals.push(OpenModal { modal, z });
}

/// Returns `true` when the modal was open.
fn close_modal(state: &mut DesktopState, modal: Modal, effects: &mut Vec<RuntimeEffect>) -> bool {
    let before = state.modals.len();
    state.modals.retain(|m| m.modal != modal);
    let closed = state.modals.len() != before;
    if closed && modal == Modal::Snake {
        effects.push(RuntimeEffect::StopSnake);
    }
    closed
}

fn validated_color(color: String) -> Result<String, ReducerError> {
    if theme::is_valid_hex(&color) {
        Ok(color.to_ascii_lowercase())
    } else {
        Err(ReducerError::InvalidThemeColor(color))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        apps::BuiltinApps,
        model::{WindowState, WINDOW_TRANSITION_MS},
        sequencer::ShellScreen,
    };

    fn reduce(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, &BuiltinApps, action).expect("reduce")
    }

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, app: &str) -> WindowId {
        reduce(
            state,
            interaction,
            DesktopAction::OpenApp {
                app_id: AppId::trusted(app),
            },
        );
        state
            .window_for_app(&AppId::trusted(app))
            .expect("window")
            .id
    }

    #[test]
    fn opening_twice_focuses_instead_of_duplicating() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let about = open(&mut state, &mut interaction, "about");
        let projects = open(&mut state, &mut interaction, "projects");
        let again = open(&mut state, &mut interaction, "about");

        assert_eq!(about, again);
        assert_eq!(state.windows.len(), 2);
        assert_eq!(state.taskbar.len(), 2);
        assert_eq!(state.active_window, Some(about));
        assert_ne!(state.active_window, Some(projects));
    }

    #[test]
    fn reopening_a_minimized_app_restores_it() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let about = open(&mut state, &mut interaction, "about");
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeToggle { window_id: about },
        );
        assert!(state.window(about).unwrap().state.is_minimized());

        assert_eq!(open(&mut state, &mut interaction, "about"), about);
        assert_eq!(state.windows.len(), 1);
        assert_eq!(state.window(about).unwrap().state, WindowState::Normal);
        assert_eq!(state.active_window, Some(about));
    }

    #[test]
    fn new_window_plays_open_sound() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::OpenApp {
                app_id: AppId::trusted("contact"),
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::PlaySound(SoundCue::WindowOpen)]);
        assert_eq!(state.windows[0].title, "Contact Me");
    }

    #[test]
    fn unknown_app_shows_error_dialog_without_windows() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::OpenApp {
                app_id: AppId::trusted("paint"),
            },
        );

        assert!(state.windows.is_empty());
        let dialog = state.dialog.expect("dialog");
        assert_eq!(dialog.title, "Error");
        assert_eq!(dialog.message, "Application \"paint\" not found.");
        assert_eq!(effects, vec![RuntimeEffect::PlaySound(SoundCue::Error)]);
    }

    #[test]
    fn games_opens_snake_modal_above_windows() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let about = open(&mut state, &mut interaction, "about");
        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::OpenApp {
                app_id: AppId::trusted("games"),
            },
        );

        assert_eq!(effects, vec![RuntimeEffect::PlaySound(SoundCue::Game)]);
        assert_eq!(state.windows.len(), 1);
        let modal_z = state.modal_z(Modal::Snake).expect("snake modal");
        assert!(modal_z > state.window(about).unwrap().z_order);
    }

    #[test]
    fn closing_snake_modal_stops_the_game() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "about");
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::OpenApp {
                app_id: AppId::trusted("games"),
            },
        );

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::CloseModal { modal: Modal::Snake },
        );
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::StopSnake,
                RuntimeEffect::PlaySound(SoundCue::Click)
            ]
        );
        assert!(state.modals.is_empty());
    }

    #[test]
    fn stale_window_ids_are_reported_without_mutation() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let about = open(&mut state, &mut interaction, "about");
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: about },
        );
        let before = state.clone();

        for action in [
            DesktopAction::FocusWindow { window_id: about },
            DesktopAction::MinimizeToggle { window_id: about },
            DesktopAction::CloseWindow { window_id: about },
            DesktopAction::TaskbarClick { window_id: about },
        ] {
            let err = reduce_desktop(&mut state, &mut interaction, &BuiltinApps, action)
                .expect_err("stale");
            assert!(err.is_stale_reference());
            assert_eq!(err.shell_error(), ShellError::StaleReference(about.0));
            assert_eq!(DialogRequest::from_error(&err.shell_error()), None);
        }
        assert_eq!(state, before);
    }

    #[test]
    fn reopening_after_close_creates_a_new_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let first = open(&mut state, &mut interaction, "skills");
        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: first },
        );
        assert_eq!(effects, vec![RuntimeEffect::PlaySound(SoundCue::WindowClose)]);
        assert!(state.taskbar.is_empty());

        let second = open(&mut state, &mut interaction, "skills");
        assert_ne!(first, second);
        assert_eq!(state.taskbar.len(), 1);
    }

    #[test]
    fn closing_the_dragged_window_releases_the_pointer_slot() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let about = open(&mut state, &mut interaction, "about");
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                window_id: about,
                pointer: PointerPosition { x: 120, y: 110 },
            },
        );
        assert!(interaction.dragging().is_some());

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::KeyPressed(ShellKey::Escape),
        );
        assert!(state.windows.is_empty());
        assert_eq!(interaction.pointer, None);
    }

    #[test]
    fn escape_closes_start_menu_before_windows() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "about");
        reduce(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::KeyPressed(ShellKey::Escape),
        );
        assert!(!state.start_menu_open);
        assert_eq!(state.windows.len(), 1);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::KeyPressed(ShellKey::Escape),
        );
        assert!(state.windows.is_empty());
        assert_eq!(state.active_window, None);
    }

    #[test]
    fn start_menu_sounds_follow_open_state() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        assert_eq!(
            reduce(&mut state, &mut interaction, DesktopAction::ToggleStartMenu),
            vec![RuntimeEffect::PlaySound(SoundCue::MenuOpen)]
        );
        assert_eq!(
            reduce(&mut state, &mut interaction, DesktopAction::ToggleStartMenu),
            vec![RuntimeEffect::PlaySound(SoundCue::Click)]
        );
        assert!(reduce(&mut state, &mut interaction, DesktopAction::CloseStartMenu).is_empty());
    }

    #[test]
    fn theme_change_persists_and_announces() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce(&mut state, &mut interaction, DesktopAction::OpenThemePicker);

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SetThemeColor {
                color: "#800080".to_string(),
            },
        );

        assert_eq!(state.theme_color, "#800080");
        assert!(state.modals.is_empty());
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::PlaySound(SoundCue::ThemeChange),
                RuntimeEffect::PersistTheme,
                RuntimeEffect::PlaySound(SoundCue::Error),
            ]
        );
        assert_eq!(
            state.dialog.map(|d| d.message),
            Some("Theme color changed to Purple".to_string())
        );
    }

    #[test]
    fn malformed_theme_color_is_rejected() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        assert_eq!(
            reduce_desktop(
                &mut state,
                &mut interaction,
                &BuiltinApps,
                DesktopAction::SetThemeColor {
                    color: "teal".to_string()
                },
            ),
            Err(ReducerError::InvalidThemeColor("teal".to_string()))
        );
        assert_eq!(state.theme_color, theme::DEFAULT_THEME_COLOR);
    }

    #[test]
    fn malformed_theme_color_surfaces_as_validation_dialog() {
        let err = ReducerError::InvalidThemeColor("teal".to_string());
        assert!(!err.is_stale_reference());
        assert_eq!(
            DialogRequest::from_error(&err.shell_error()),
            Some(DialogRequest::new(
                "Validation Error",
                "invalid theme color `teal`"
            ))
        );
    }

    #[test]
    fn hydrated_theme_is_silent() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::HydrateTheme {
                color: "#000080".to_string(),
            },
        );
        assert!(effects.is_empty());
        assert_eq!(state.theme_color, "#000080");
        assert_eq!(state.dialog, None);
    }

    #[test]
    fn dialogs_stack_above_the_active_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let about = open(&mut state, &mut interaction, "about");
        reduce(&mut state, &mut interaction, DesktopAction::ToggleCrt);

        let dialog = state.dialog.clone().expect("dialog");
        assert_eq!(dialog.title, "Display Settings");
        assert!(dialog.z > state.window(about).unwrap().z_order);
        assert!(state.crt_enabled);

        reduce(&mut state, &mut interaction, DesktopAction::DismissDialog);
        assert_eq!(state.dialog, None);
    }

    #[test]
    fn boot_plays_startup_and_greets() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        assert!(reduce(&mut state, &mut interaction, DesktopAction::Boot).is_empty());
        assert!(state.needs_clock());

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::AdvanceClock { elapsed_ms: 500 },
        );
        assert_eq!(effects, vec![RuntimeEffect::PlaySound(SoundCue::Startup)]);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::AdvanceClock { elapsed_ms: 5_000 },
        );
        assert_eq!(state.scheduler.screen(), ShellScreen::Desktop);
        assert_eq!(state.dialog.as_ref().map(|d| d.title.as_str()), Some("Welcome"));
        assert!(!state.needs_clock());
    }

    #[test]
    fn shutdown_closes_windows_and_restarts() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "about");
        open(&mut state, &mut interaction, "projects");

        let effects = reduce(&mut state, &mut interaction, DesktopAction::Shutdown);
        assert_eq!(effects, vec![RuntimeEffect::PlaySound(SoundCue::Shutdown)]);
        assert!(state.windows.is_empty());
        assert!(state.taskbar.is_empty());
        assert_eq!(state.active_window, None);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::AdvanceClock { elapsed_ms: 500 },
        );
        assert_eq!(state.scheduler.screen(), ShellScreen::Shutdown);
        assert!(state.closing_windows.is_empty());

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::AdvanceClock { elapsed_ms: 20_000 },
        );
        assert_eq!(
            state.dialog.as_ref().map(|d| d.message.as_str()),
            Some("Welcome back!")
        );
    }

    #[test]
    fn snake_game_over_dialog_arrives_after_delay() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SnakeGameOver {
                score: 30,
                high_score: 50,
            },
        );
        assert_eq!(state.dialog, None);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::AdvanceClock {
                elapsed_ms: GAME_OVER_DIALOG_DELAY_MS,
            },
        );
        assert_eq!(
            state.dialog.map(|d| d.message),
            Some("Game Over! Final Score: 30. High Score: 50".to_string())
        );
    }

    #[test]
    fn close_transition_ghost_expires_on_clock() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let about = open(&mut state, &mut interaction, "about");
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: about },
        );
        assert_eq!(state.closing_windows.len(), 1);
        assert!(state.needs_clock());

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::AdvanceClock {
                elapsed_ms: WINDOW_TRANSITION_MS,
            },
        );
        assert!(state.closing_windows.is_empty());
        assert!(!state.needs_clock());
    }

    #[test]
    fn context_menu_opens_clamped_and_dismisses() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::OpenContextMenu {
                pointer: PointerPosition { x: 1020, y: 20 },
                viewport: Viewport::new(1024, 768),
            },
        );
        assert_eq!(state.context_menu.map(|m| m.x), Some(839));

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SelectIcon {
                app_id: AppId::trusted("about"),
            },
        );
        reduce(&mut state, &mut interaction, DesktopAction::DismissTransient);
        assert_eq!(state.context_menu, None);
        assert_eq!(state.selected_icon, None);
    }
}

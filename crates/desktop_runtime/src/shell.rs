//! Shell chrome helpers: keyboard shortcuts, context-menu placement, and informational dialogs.

use desktop_app_contract::DialogRequest;

use crate::{
    model::{ContextMenuState, PointerPosition, Viewport},
    theme,
};

/// Rendered context-menu size used for viewport clamping.
pub const CONTEXT_MENU_WIDTH_PX: i32 = 180;
pub const CONTEXT_MENU_HEIGHT_PX: i32 = 96;
/// Gap kept between a clamped context menu and the viewport edge.
pub const CONTEXT_MENU_MARGIN_PX: i32 = 5;

/// Global keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKey {
    /// `Alt+Tab`.
    CycleWindows,
    /// `Escape`.
    Escape,
    /// `F11`.
    ToggleCrt,
}

impl ShellKey {
    /// Maps a `KeyboardEvent.key` value and the Alt modifier to a shortcut.
    pub fn from_key(key: &str, alt: bool) -> Option<Self> {
        match key {
            "Tab" if alt => Some(Self::CycleWindows),
            "Escape" => Some(Self::Escape),
            "F11" => Some(Self::ToggleCrt),
            _ => None,
        }
    }

    /// Whether the browser default must be suppressed.
    pub fn prevents_default(self) -> bool {
        !matches!(self, Self::Escape)
    }
}

/// Places the context menu at the pointer, pulled back inside the viewport when it would overflow.
pub fn place_context_menu(pointer: PointerPosition, viewport: Viewport) -> ContextMenuState {
    let mut x = pointer.x;
    let mut y = pointer.y;
    if x + CONTEXT_MENU_WIDTH_PX > viewport.width {
        x = viewport.width - CONTEXT_MENU_WIDTH_PX - CONTEXT_MENU_MARGIN_PX;
    }
    if y + CONTEXT_MENU_HEIGHT_PX > viewport.height {
        y = viewport.height - CONTEXT_MENU_HEIGHT_PX - CONTEXT_MENU_MARGIN_PX;
    }
    ContextMenuState {
        x: x.max(0),
        y: y.max(0),
    }
}

pub fn refresh_dialog() -> DialogRequest {
    DialogRequest::new("Information", "This feature is not implemented in this demo.")
}

pub fn properties_dialog() -> DialogRequest {
    DialogRequest::new("Information", "Properties dialog is not available.")
}

pub fn crt_dialog(enabled: bool) -> DialogRequest {
    let state = if enabled { "enabled" } else { "disabled" };
    DialogRequest::new(
        "Display Settings",
        format!("CRT effect {state}. Press F11 to toggle."),
    )
}

pub fn sound_dialog(enabled: bool) -> DialogRequest {
    let message = if enabled {
        "Sound enabled."
    } else {
        "Sound disabled."
    };
    DialogRequest::new("Audio Settings", message)
}

/// Start menu label for the sound toggle.
pub fn sound_label(enabled: bool) -> &'static str {
    if enabled {
        "Sound: ON"
    } else {
        "Sound: OFF"
    }
}

pub fn theme_dialog(color: &str) -> DialogRequest {
    DialogRequest::new(
        "Theme Settings",
        format!("Theme color changed to {}", theme::color_name(color)),
    )
}

pub fn snake_game_over_dialog(score: u32, high_score: u32) -> DialogRequest {
    DialogRequest::new(
        "Snake Game",
        format!("Game Over! Final Score: {score}. High Score: {high_score}"),
    )
}

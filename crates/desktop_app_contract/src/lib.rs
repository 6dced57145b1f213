//! Shared contract types between the desktop window manager and the content it hosts.
//!
//! The window manager treats every panel as opaque: it asks a [`ContentProvider`] for display
//! metadata when a window opens and for a rendered body when the window mounts. Panels talk back to
//! the shell only through the callbacks in [`PanelHost`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::{Callable, Callback, View};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Symbolic key naming which content a window hosts (for example `about` or `games`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AppId(String);

impl AppId {
    /// Creates an id for constants and catalog entries.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Named sound effects the shell and its panels may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// Boot chime.
    Startup,
    /// Generic UI click.
    Click,
    /// A window was created.
    WindowOpen,
    /// A window was closed.
    WindowClose,
    /// An informational or error dialog appeared.
    Error,
    /// The start menu opened.
    MenuOpen,
    /// Shutdown started.
    Shutdown,
    /// Game start and food eaten.
    Game,
    /// Theme change and snake level-up.
    ThemeChange,
}

impl SoundCue {
    /// Returns the clip name understood by the host sound service.
    pub const fn clip_name(self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Click => "click",
            Self::WindowOpen => "windowOpen",
            Self::WindowClose => "windowClose",
            Self::Error => "error",
            Self::MenuOpen => "menuOpen",
            Self::Shutdown => "shutdown",
            Self::Game => "game",
            Self::ThemeChange => "themeChange",
        }
    }
}

/// How the shell presents an app when it is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Presentation {
    /// A managed, draggable window with a taskbar entry.
    Window,
    /// The snake game modal.
    Snake,
}

/// Display metadata returned by a [`ContentProvider`] for one app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppPanel {
    /// App the panel belongs to.
    pub app_id: AppId,
    /// Window title.
    pub title: String,
    /// Icon token (icon-font class list).
    pub icon: String,
    /// Initial window width in px.
    pub width: i32,
    /// Initial window height in px.
    pub height: i32,
    /// Presentation style.
    pub presentation: Presentation,
}

/// Failure taxonomy shared by the shell and its panels.
///
/// `Display` output is the user-facing dialog message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// An app id (or DOM target) is unknown.
    #[error("Application \"{0}\" not found.")]
    NotFound(String),
    /// User input failed validation; the input stays in place for correction.
    #[error("{0}")]
    Validation(String),
    /// A deferred callback referenced a window that no longer exists.
    #[error("window {0} no longer exists")]
    StaleReference(u64),
}

impl ShellError {
    /// Returns the dialog title used when this error is surfaced to the user.
    ///
    /// Stale references are never surfaced and have no title.
    pub fn dialog_title(&self) -> Option<&'static str> {
        match self {
            Self::NotFound(_) => Some("Error"),
            Self::Validation(_) => Some("Validation Error"),
            Self::StaleReference(_) => None,
        }
    }
}

/// An informational dialog request raised by a panel or by the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogRequest {
    /// Dialog title bar text.
    pub title: String,
    /// Dialog body text.
    pub message: String,
}

impl DialogRequest {
    /// Builds a dialog request.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Builds the dialog that surfaces `error`, or `None` for errors that stay silent.
    pub fn from_error(error: &ShellError) -> Option<Self> {
        error
            .dialog_title()
            .map(|title| Self::new(title, error.to_string()))
    }
}

#[derive(Clone, Copy)]
/// Shell callbacks handed to a mounted panel body.
pub struct PanelHost {
    show_dialog: Callback<DialogRequest>,
    play_sound: Callback<SoundCue>,
}

impl PanelHost {
    /// Creates a host from runtime callbacks.
    pub fn new(show_dialog: Callback<DialogRequest>, play_sound: Callback<SoundCue>) -> Self {
        Self {
            show_dialog,
            play_sound,
        }
    }

    /// Shows an informational dialog above every window.
    pub fn show_dialog(&self, title: impl Into<String>, message: impl Into<String>) {
        self.show_dialog.call(DialogRequest::new(title, message));
    }

    /// Surfaces a [`ShellError`] as a dialog; stale references are dropped.
    pub fn report(&self, error: &ShellError) {
        if let Some(dialog) = DialogRequest::from_error(error) {
            self.show_dialog.call(dialog);
        }
    }

    /// Requests a sound effect. Ignored when sound is disabled.
    pub fn play_sound(&self, cue: SoundCue) {
        self.play_sound.call(cue);
    }
}

/// Source of window content, keyed by [`AppId`].
pub trait ContentProvider {
    /// Returns display metadata for `app_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::NotFound`] when the id is not part of the catalog.
    fn describe(&self, app_id: &AppId) -> Result<AppPanel, ShellError>;

    /// Renders the body embedded into the window for `app_id`.
    fn render_body(&self, app_id: &AppId, host: PanelHost) -> View;
}

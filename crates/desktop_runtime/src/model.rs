use desktop_app_contract::AppId;
use serde::{Deserialize, Serialize};

use crate::{sequencer::Scheduler, theme::DEFAULT_THEME_COLOR};

/// Height of the taskbar strip reserved at the bottom of the viewport.
pub const TASKBAR_HEIGHT_PX: i32 = 40;
/// Per-window offset applied to newly opened windows.
pub const WINDOW_STAGGER_PX: i32 = 30;
/// Top-left of the first opened window.
pub const WINDOW_ORIGIN: PointerPosition = PointerPosition { x: 100, y: 100 };
/// First value handed out by the shared z-order counter.
pub const Z_INDEX_BASE: u32 = 100;
/// Visual z-index of every window that is not active.
pub const WINDOW_BACKGROUND_Z: u32 = 10;
/// Duration of minimize, maximize and close transitions.
pub const WINDOW_TRANSITION_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }
}

/// Browser viewport size in CSS pixels, taskbar included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Area available to windows: the viewport minus the taskbar strip.
    pub fn desktop_area(self) -> WindowRect {
        WindowRect {
            x: 0,
            y: 0,
            w: self.width.max(0),
            h: (self.height - TASKBAR_HEIGHT_PX).max(0),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1024, 768)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowState {
    Normal,
    Maximized,
    /// Hidden; remembers which visible state to return to.
    Minimized { was_maximized: bool },
}

impl WindowState {
    pub fn is_minimized(self) -> bool {
        matches!(self, Self::Minimized { .. })
    }

    pub fn is_maximized(self) -> bool {
        matches!(self, Self::Maximized)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: AppId,
    pub title: String,
    pub icon: String,
    pub bounds: WindowRect,
    /// Pre-maximize bounds.
    pub saved_bounds: Option<WindowRect>,
    pub state: WindowState,
    pub z_order: u32,
    pub is_active: bool,
}

impl WindowRecord {
    /// z-index used when rendering: the active window keeps its counter value, every other
    /// window drops to [`WINDOW_BACKGROUND_Z`].
    pub fn visual_z(&self) -> u32 {
        if self.is_active {
            self.z_order
        } else {
            WINDOW_BACKGROUND_Z
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskbarEntry {
    pub window_id: WindowId,
    pub title: String,
    pub icon: String,
    pub is_active: bool,
    pub is_minimized: bool,
}

impl TaskbarEntry {
    pub fn mirror(window: &WindowRecord) -> Self {
        Self {
            window_id: window.id,
            title: window.title.clone(),
            icon: window.icon.clone(),
            is_active: window.is_active,
            is_minimized: window.state.is_minimized(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionKind {
    Minimizing,
    Maximizing,
    Closing,
}

impl TransitionKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Minimizing => "minimizing",
            Self::Maximizing => "maximizing",
            Self::Closing => "closing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowTransition {
    pub window_id: WindowId,
    pub kind: TransitionKind,
    pub remaining_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialog {
    pub title: String,
    pub message: String,
    pub z: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextMenuState {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modal {
    ThemePicker,
    Snake,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenModal {
    pub modal: Modal,
    pub z: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopState {
    pub next_window_id: u64,
    /// Shared z counter for windows, dialogs and modals.
    pub next_z: u32,
    /// Managed windows in creation order.
    pub windows: Vec<WindowRecord>,
    pub taskbar: Vec<TaskbarEntry>,
    pub active_window: Option<WindowId>,
    pub transitions: Vec<WindowTransition>,
    /// Closed windows kept only for their exit transition.
    pub closing_windows: Vec<WindowRecord>,
    pub start_menu_open: bool,
    pub context_menu: Option<ContextMenuState>,
    pub selected_icon: Option<AppId>,
    pub crt_enabled: bool,
    pub sound_enabled: bool,
    pub theme_color: String,
    pub dialog: Option<Dialog>,
    pub modals: Vec<OpenModal>,
    pub scheduler: Scheduler,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            next_window_id: 1,
            next_z: Z_INDEX_BASE,
            windows: Vec::new(),
            taskbar: Vec::new(),
            active_window: None,
            transitions: Vec::new(),
            closing_windows: Vec::new(),
            start_menu_open: false,
            context_menu: None,
            selected_icon: None,
            crt_enabled: false,
            sound_enabled: true,
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            dialog: None,
            modals: Vec::new(),
            scheduler: Scheduler::default(),
        }
    }
}

impl DesktopState {
    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    pub fn window_for_app(&self, app_id: &AppId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.app_id == *app_id)
    }

    pub fn transition_for(&self, window_id: WindowId) -> Option<TransitionKind> {
        self.transitions
            .iter()
            .find(|t| t.window_id == window_id)
            .map(|t| t.kind)
    }

    pub fn modal_z(&self, modal: Modal) -> Option<u32> {
        self.modals.iter().find(|m| m.modal == modal).map(|m| m.z)
    }

    /// True while a boot/shutdown phase, a delayed dialog, or a window transition waits on the
    /// shell clock.
    pub fn needs_clock(&self) -> bool {
        !self.scheduler.is_idle() || !self.transitions.is_empty()
    }

    /// Takes the next value from the shared z counter.
    pub fn take_z(&mut self) -> u32 {
        let z = self.next_z;
        self.next_z = self.next_z.saturating_add(1);
        z
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    /// Pointer position minus window top-left at drag start.
    pub grab_offset: PointerPosition,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerSession {
    Drag(DragSession),
    Resize(ResizeSession),
}

/// Transient pointer state. A single slot: at most one drag or resize is in flight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub pointer: Option<PointerSession>,
}

impl InteractionState {
    pub fn dragging(&self) -> Option<&DragSession> {
        match &self.pointer {
            Some(PointerSession::Drag(session)) => Some(session),
            _ => None,
        }
    }

    pub fn resizing(&self) -> Option<&ResizeSession> {
        match &self.pointer {
            Some(PointerSession::Resize(session)) => Some(session),
            _ => None,
        }
    }
}

//! Window-manager transitions used by the desktop reducer.
//!
//! Every function here mutates [`DesktopState`] in place and leaves it satisfying the stacking
//! rules: at most one active window, the active window holds the highest `z_order`, and the
//! taskbar mirrors the window list one-to-one.

use desktop_app_contract::AppPanel;
use leptos::logging;

use crate::{
    model::{
        DesktopState, DragSession, InteractionState, PointerPosition, PointerSession, ResizeEdge,
        ResizeSession, TaskbarEntry, TransitionKind, Viewport, WindowId, WindowRecord, WindowRect,
        WindowState, WindowTransition, TASKBAR_HEIGHT_PX, WINDOW_ORIGIN, WINDOW_STAGGER_PX,
        WINDOW_TRANSITION_MS,
    },
    reducer::ReducerError,
};

/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 220;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 140;

/// Creates a window for `panel`, staggered by the current window count, and focuses it.
///
/// Callers check for an existing window of the same app first.
pub fn open_window(state: &mut DesktopState, panel: &AppPanel) -> WindowId {
    let id = next_window_id(state);
    let stagger = WINDOW_STAGGER_PX * state.windows.len() as i32;
    state.windows.push(WindowRecord {
        id,
        app_id: panel.app_id.clone(),
        title: panel.title.clone(),
        icon: panel.icon.clone(),
        bounds: WindowRect {
            x: WINDOW_ORIGIN.x,
            y: WINDOW_ORIGIN.y,
            w: panel.width,
            h: panel.height,
        }
        .offset(stagger, stagger),
        saved_bounds: None,
        state: WindowState::Normal,
        z_order: 0,
        is_active: false,
    });
    activate(state, id);
    id
}

/// Makes `window_id` the active window with a fresh z value, restoring it when minimized.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when the id is stale.
pub fn focus_window(state: &mut DesktopState, window_id: WindowId) -> Result<(), ReducerError> {
    let window = find_window_mut(state, window_id)?;
    if let WindowState::Minimized { was_maximized } = window.state {
        window.state = restored_state(was_maximized);
    }
    activate(state, window_id);
    Ok(())
}

/// Flips a window between minimized and its previous visible state.
///
/// Minimizing the active window hands focus to the highest remaining visible window.
pub fn minimize_toggle(state: &mut DesktopState, window_id: WindowId) -> Result<(), ReducerError> {
    let window = find_window_mut(state, window_id)?;
    match window.state {
        WindowState::Minimized { .. } => focus_window(state, window_id),
        visible => {
            window.state = WindowState::Minimized {
                was_maximized: visible.is_maximized(),
            };
            window.is_active = false;
            start_transition(state, window_id, TransitionKind::Minimizing);
            if state.active_window == Some(window_id) {
                refocus_topmost(state);
            } else {
                sync_taskbar(state);
            }
            Ok(())
        }
    }
}

/// Maximizes into the desktop area or restores the saved bounds exactly.
pub fn maximize_toggle(
    state: &mut DesktopState,
    window_id: WindowId,
    viewport: Viewport,
) -> Result<(), ReducerError> {
    let window = find_window_mut(state, window_id)?;
    match window.state {
        WindowState::Maximized => {
            if let Some(saved) = window.saved_bounds.take() {
                window.bounds = saved;
            }
            window.state = WindowState::Normal;
        }
        WindowState::Normal => {
            window.saved_bounds = Some(window.bounds);
            window.bounds = viewport.desktop_area();
            window.state = WindowState::Maximized;
            start_transition(state, window_id, TransitionKind::Maximizing);
        }
        WindowState::Minimized { .. } => return Ok(()),
    }
    focus_window(state, window_id)
}

/// Removes a window and its taskbar entry immediately, keeping a render-only ghost until its
/// closing transition finishes.
pub fn close_window(state: &mut DesktopState, window_id: WindowId) -> Result<(), ReducerError> {
    let index = state
        .windows
        .iter()
        .position(|w| w.id == window_id)
        .ok_or(ReducerError::WindowNotFound(window_id))?;
    let mut ghost = state.windows.remove(index);
    ghost.is_active = false;
    state.closing_windows.push(ghost);
    start_transition(state, window_id, TransitionKind::Closing);

    if state.active_window == Some(window_id) {
        refocus_topmost(state);
    } else {
        sync_taskbar(state);
    }
    Ok(())
}

/// Closes every window, used by shutdown.
pub fn close_all_windows(state: &mut DesktopState) {
    let ids: Vec<WindowId> = state.windows.iter().map(|w| w.id).collect();
    for id in ids {
        if let Err(err) = close_window(state, id) {
            logging::debug_warn!("close all skipped window: {err}");
        }
    }
}

/// Focuses the window after the active one in creation order, wrapping around.
pub fn cycle_windows(state: &mut DesktopState) -> Option<WindowId> {
    if state.windows.is_empty() {
        return None;
    }
    let next_index = state
        .active_window
        .and_then(|active| state.windows.iter().position(|w| w.id == active))
        .map(|index| (index + 1) % state.windows.len())
        .unwrap_or(0);
    let target = state.windows[next_index].id;
    focus_window(state, target).ok()?;
    Some(target)
}

/// Taskbar button behavior: restore a minimized window, otherwise focus it.
pub fn taskbar_click(state: &mut DesktopState, window_id: WindowId) -> Result<(), ReducerError> {
    let minimized = state
        .window(window_id)
        .map(|w| w.state.is_minimized())
        .ok_or(ReducerError::WindowNotFound(window_id))?;
    if minimized {
        minimize_toggle(state, window_id)
    } else {
        focus_window(state, window_id)
    }
}

/// Starts a header drag. Returns `false` when the window cannot move (maximized or minimized).
pub fn begin_drag(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    window_id: WindowId,
    pointer: PointerPosition,
) -> Result<bool, ReducerError> {
    let window = find_window_mut(state, window_id)?;
    if window.state != WindowState::Normal {
        return Ok(false);
    }
    let grab_offset = PointerPosition {
        x: pointer.x - window.bounds.x,
        y: pointer.y - window.bounds.y,
    };
    focus_window(state, window_id)?;
    interaction.pointer = Some(PointerSession::Drag(DragSession {
        window_id,
        grab_offset,
    }));
    Ok(true)
}

/// Moves the dragged window so its top-left is `pointer - grab_offset`, clamped on screen and
/// above the taskbar strip.
pub fn update_drag(
    state: &mut DesktopState,
    interaction: &InteractionState,
    pointer: PointerPosition,
    viewport: Viewport,
) -> Result<(), ReducerError> {
    let Some(session) = interaction.dragging() else {
        return Ok(());
    };
    let window = find_window_mut(state, session.window_id)?;
    if window.state != WindowState::Normal {
        return Ok(());
    }
    window.bounds = clamp_to_viewport(
        WindowRect {
            x: pointer.x - session.grab_offset.x,
            y: pointer.y - session.grab_offset.y,
            ..window.bounds
        },
        viewport,
    );
    Ok(())
}

/// Clamps a window so it stays inside the viewport and never overlaps the taskbar.
pub fn clamp_to_viewport(rect: WindowRect, viewport: Viewport) -> WindowRect {
    let max_x = (viewport.width - rect.w).max(0);
    let max_y = (viewport.height - rect.h - TASKBAR_HEIGHT_PX).max(0);
    WindowRect {
        x: rect.x.clamp(0, max_x),
        y: rect.y.clamp(0, max_y),
        ..rect
    }
}

pub fn begin_resize(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    window_id: WindowId,
    edge: ResizeEdge,
    pointer: PointerPosition,
) -> Result<bool, ReducerError> {
    let window = find_window_mut(state, window_id)?;
    if window.state != WindowState::Normal {
        return Ok(false);
    }
    let rect_start = window.bounds;
    focus_window(state, window_id)?;
    interaction.pointer = Some(PointerSession::Resize(ResizeSession {
        window_id,
        edge,
        pointer_start: pointer,
        rect_start,
    }));
    Ok(true)
}

pub fn update_resize(
    state: &mut DesktopState,
    interaction: &InteractionState,
    pointer: PointerPosition,
) -> Result<(), ReducerError> {
    let Some(session) = interaction.resizing() else {
        return Ok(());
    };
    let dx = pointer.x - session.pointer_start.x;
    let dy = pointer.y - session.pointer_start.y;
    let window = find_window_mut(state, session.window_id)?;
    if window.state == WindowState::Normal {
        window.bounds = bounded_resize(session.rect_start, session.edge, dx, dy);
    }
    Ok(())
}

/// [`resize_rect`] held to the minimum size, keeping the edge opposite the handle fixed.
pub fn bounded_resize(start: WindowRect, edge: ResizeEdge, dx: i32, dy: i32) -> WindowRect {
    let mut rect = resize_rect(start, edge, dx, dy).clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
    if matches!(
        edge,
        ResizeEdge::West | ResizeEdge::NorthWest | ResizeEdge::SouthWest
    ) {
        rect.x = start.x + start.w - rect.w;
    }
    if matches!(
        edge,
        ResizeEdge::North | ResizeEdge::NorthWest | ResizeEdge::NorthEast
    ) {
        rect.y = start.y + start.h - rect.h;
    }
    rect
}

/// Applies resize deltas for a given edge/corner drag.
pub fn resize_rect(start: WindowRect, edge: ResizeEdge, dx: i32, dy: i32) -> WindowRect {
    match edge {
        ResizeEdge::East => WindowRect {
            w: start.w + dx,
            ..start
        },
        ResizeEdge::West => WindowRect {
            x: start.x + dx,
            w: start.w - dx,
            ..start
        },
        ResizeEdge::South => WindowRect {
            h: start.h + dy,
            ..start
        },
        ResizeEdge::North => WindowRect {
            y: start.y + dy,
            h: start.h - dy,
            ..start
        },
        ResizeEdge::NorthEast => WindowRect {
            y: start.y + dy,
            h: start.h - dy,
            w: start.w + dx,
            ..start
        },
        ResizeEdge::NorthWest => WindowRect {
            x: start.x + dx,
            y: start.y + dy,
            w: start.w - dx,
            h: start.h - dy,
        },
        ResizeEdge::SouthEast => WindowRect {
            w: start.w + dx,
            h: start.h + dy,
            ..start
        },
        ResizeEdge::SouthWest => WindowRect {
            x: start.x + dx,
            w: start.w - dx,
            h: start.h + dy,
            ..start
        },
    }
}

/// Counts down running transitions and drops finished ones.
///
/// A finished close transition releases its ghost. Transitions whose window has disappeared in
/// the meantime are discarded without touching anything else.
pub fn advance_transitions(state: &mut DesktopState, elapsed_ms: u32) {
    let mut finished = Vec::new();
    state.transitions.retain_mut(|transition| {
        transition.remaining_ms = transition.remaining_ms.saturating_sub(elapsed_ms);
        if transition.remaining_ms == 0 {
            finished.push(*transition);
            false
        } else {
            true
        }
    });

    for transition in finished {
        match transition.kind {
            TransitionKind::Closing => {
                let before = state.closing_windows.len();
                state
                    .closing_windows
                    .retain(|w| w.id != transition.window_id);
                if state.closing_windows.len() == before {
                    logging::debug_warn!(
                        "close transition finished for missing window {:?}",
                        transition.window_id
                    );
                }
            }
            TransitionKind::Minimizing | TransitionKind::Maximizing => {
                if state.window(transition.window_id).is_none() {
                    logging::debug_warn!(
                        "{} transition finished for missing window {:?}",
                        transition.kind.css_class(),
                        transition.window_id
                    );
                }
            }
        }
    }
}

/// Regenerates the taskbar mirror from the window list.
pub fn sync_taskbar(state: &mut DesktopState) {
    state.taskbar = state.windows.iter().map(TaskbarEntry::mirror).collect();
}

fn start_transition(state: &mut DesktopState, window_id: WindowId, kind: TransitionKind) {
    state.transitions.retain(|t| t.window_id != window_id);
    state.transitions.push(WindowTransition {
        window_id,
        kind,
        remaining_ms: WINDOW_TRANSITION_MS,
    });
}

fn restored_state(was_maximized: bool) -> WindowState {
    if was_maximized {
        WindowState::Maximized
    } else {
        WindowState::Normal
    }
}

/// Activates the highest-stacked visible window, or clears focus when none is visible.
fn refocus_topmost(state: &mut DesktopState) {
    let topmost = state
        .windows
        .iter()
        .filter(|w| !w.state.is_minimized())
        .max_by_key(|w| w.z_order)
        .map(|w| w.id);
    match topmost {
        Some(id) => activate(state, id),
        None => {
            for window in &mut state.windows {
                window.is_active = false;
            }
            state.active_window = None;
            sync_taskbar(state);
        }
    }
}

fn activate(state: &mut DesktopState, window_id: WindowId) {
    let z = state.take_z();
    for window in &mut state.windows {
        window.is_active = window.id == window_id;
        if window.is_active {
            window.z_order = z;
        }
    }
    state.active_window = Some(window_id);
    sync_taskbar(state);
}

fn next_window_id(state: &mut DesktopState) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);
    id
}

pub(crate) fn find_window_mut(
    state: &mut DesktopState,
    window_id: WindowId,
) -> Result<&mut WindowRecord, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| w.id == window_id)
        .ok_or(ReducerError::WindowNotFound(window_id))
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::{AppId, Presentation};
    use pretty_assertions::assert_eq;

    use super::*;

    fn panel(app: &str, w: i32, h: i32) -> AppPanel {
        AppPanel {
            app_id: AppId::trusted(app),
            title: app.to_string(),
            icon: "fas fa-user".to_string(),
            width: w,
            height: h,
            presentation: Presentation::Window,
        }
    }

    fn active_ids(state: &DesktopState) -> Vec<WindowId> {
        state
            .windows
            .iter()
            .filter(|w| w.is_active)
            .map(|w| w.id)
            .collect()
    }

    #[test]
    fn open_staggers_by_window_count_and_focuses() {
        let mut state = DesktopState::default();
        let first = open_window(&mut state, &panel("about", 500, 400));
        let second = open_window(&mut state, &panel("projects", 600, 450));

        assert_eq!(
            state.window(first).unwrap().bounds,
            WindowRect { x: 100, y: 100, w: 500, h: 400 }
        );
        assert_eq!(
            state.window(second).unwrap().bounds,
            WindowRect { x: 130, y: 130, w: 600, h: 450 }
        );
        assert_eq!(state.active_window, Some(second));
        assert_eq!(active_ids(&state), vec![second]);
        assert_eq!(state.taskbar.len(), 2);
    }

    #[test]
    fn focus_assigns_increasing_z_and_drops_others_to_background() {
        let mut state = DesktopState::default();
        let first = open_window(&mut state, &panel("about", 500, 400));
        let second = open_window(&mut state, &panel("skills", 500, 400));
        let second_z = state.window(second).unwrap().z_order;

        focus_window(&mut state, first).unwrap();

        let first_record = state.window(first).unwrap();
        assert!(first_record.z_order > second_z);
        assert_eq!(first_record.visual_z(), first_record.z_order);
        assert_eq!(state.window(second).unwrap().visual_z(), 10);
        assert_eq!(
            state.taskbar.iter().filter(|e| e.is_active).count(),
            1
        );
    }

    #[test]
    fn focus_of_stale_id_is_an_error_and_changes_nothing() {
        let mut state = DesktopState::default();
        open_window(&mut state, &panel("about", 500, 400));
        let before = state.clone();

        assert_eq!(
            focus_window(&mut state, WindowId(99)),
            Err(ReducerError::WindowNotFound(WindowId(99)))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn minimizing_active_window_hands_focus_to_next_stacked() {
        let mut state = DesktopState::default();
        let first = open_window(&mut state, &panel("about", 500, 400));
        let second = open_window(&mut state, &panel("skills", 500, 400));

        minimize_toggle(&mut state, second).unwrap();

        assert_eq!(state.active_window, Some(first));
        let entry = state.taskbar.iter().find(|e| e.window_id == second).unwrap();
        assert!(entry.is_minimized);
        assert!(!entry.is_active);
        assert_eq!(state.transition_for(second), Some(TransitionKind::Minimizing));

        minimize_toggle(&mut state, second).unwrap();
        assert_eq!(state.active_window, Some(second));
        assert_eq!(state.window(second).unwrap().state, WindowState::Normal);
    }

    #[test]
    fn minimizing_last_visible_window_clears_active() {
        let mut state = DesktopState::default();
        let only = open_window(&mut state, &panel("about", 500, 400));
        minimize_toggle(&mut state, only).unwrap();
        assert_eq!(state.active_window, None);
        assert!(active_ids(&state).is_empty());
    }

    #[test]
    fn restoring_a_minimized_maximized_window_returns_to_maximized() {
        let mut state = DesktopState::default();
        let id = open_window(&mut state, &panel("about", 500, 400));
        maximize_toggle(&mut state, id, Viewport::new(1280, 800)).unwrap();
        minimize_toggle(&mut state, id).unwrap();
        minimize_toggle(&mut state, id).unwrap();

        let record = state.window(id).unwrap();
        assert_eq!(record.state, WindowState::Maximized);
        assert_eq!(record.bounds, WindowRect { x: 0, y: 0, w: 1280, h: 760 });
    }

    #[test]
    fn maximize_round_trip_restores_bounds_exactly() {
        let mut state = DesktopState::default();
        let id = open_window(&mut state, &panel("contact", 500, 450));
        let before = state.window(id).unwrap().bounds;

        maximize_toggle(&mut state, id, Viewport::new(1024, 768)).unwrap();
        assert_eq!(
            state.window(id).unwrap().bounds,
            WindowRect { x: 0, y: 0, w: 1024, h: 728 }
        );
        maximize_toggle(&mut state, id, Viewport::new(1024, 768)).unwrap();

        let record = state.window(id).unwrap();
        assert_eq!(record.bounds, before);
        assert_eq!(record.saved_bounds, None);
        assert_eq!(record.state, WindowState::Normal);
    }

    #[test]
    fn close_removes_entry_and_focuses_previous_window() {
        let mut state = DesktopState::default();
        let first = open_window(&mut state, &panel("about", 500, 400));
        let second = open_window(&mut state, &panel("skills", 500, 400));

        close_window(&mut state, second).unwrap();

        assert!(state.window(second).is_none());
        assert!(state.taskbar.iter().all(|e| e.window_id != second));
        assert_eq!(state.active_window, Some(first));
        assert_eq!(state.closing_windows.len(), 1);

        advance_transitions(&mut state, WINDOW_TRANSITION_MS);
        assert!(state.closing_windows.is_empty());
        assert!(state.transitions.is_empty());
    }

    #[test]
    fn cycle_follows_creation_order_and_wraps() {
        let mut state = DesktopState::default();
        let a = open_window(&mut state, &panel("about", 500, 400));
        let b = open_window(&mut state, &panel("skills", 500, 400));
        let c = open_window(&mut state, &panel("social", 500, 400));

        assert_eq!(cycle_windows(&mut state), Some(a));
        assert_eq!(cycle_windows(&mut state), Some(b));
        assert_eq!(cycle_windows(&mut state), Some(c));
        assert_eq!(cycle_windows(&mut DesktopState::default()), None);
    }

    #[test]
    fn drag_keeps_grab_offset_and_clamps_above_taskbar() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let viewport = Viewport::new(1024, 768);
        let id = open_window(&mut state, &panel("about", 500, 400));

        assert!(begin_drag(&mut state, &mut interaction, id, PointerPosition { x: 110, y: 105 })
            .unwrap());
        update_drag(&mut state, &interaction, PointerPosition { x: 210, y: 155 }, viewport)
            .unwrap();
        assert_eq!(state.window(id).unwrap().bounds.x, 200);
        assert_eq!(state.window(id).unwrap().bounds.y, 150);

        update_drag(&mut state, &interaction, PointerPosition { x: 5000, y: 5000 }, viewport)
            .unwrap();
        let bounds = state.window(id).unwrap().bounds;
        assert_eq!((bounds.x, bounds.y), (524, 328));

        update_drag(&mut state, &interaction, PointerPosition { x: -50, y: -50 }, viewport)
            .unwrap();
        let bounds = state.window(id).unwrap().bounds;
        assert_eq!((bounds.x, bounds.y), (0, 0));
    }

    #[test]
    fn maximized_window_rejects_drag_start() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open_window(&mut state, &panel("about", 500, 400));
        maximize_toggle(&mut state, id, Viewport::default()).unwrap();

        assert!(!begin_drag(&mut state, &mut interaction, id, PointerPosition { x: 0, y: 0 })
            .unwrap());
        assert_eq!(interaction.pointer, None);
    }

    #[test]
    fn resize_respects_minimum_size() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open_window(&mut state, &panel("about", 500, 400));

        begin_resize(
            &mut state,
            &mut interaction,
            id,
            ResizeEdge::SouthEast,
            PointerPosition { x: 600, y: 500 },
        )
        .unwrap();
        update_resize(&mut state, &interaction, PointerPosition { x: 0, y: 0 }).unwrap();

        let bounds = state.window(id).unwrap().bounds;
        assert_eq!((bounds.w, bounds.h), (MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
    }

    #[test]
    fn shrinking_from_west_and_north_keeps_opposite_edges_fixed() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open_window(&mut state, &panel("about", 500, 400));

        begin_resize(
            &mut state,
            &mut interaction,
            id,
            ResizeEdge::NorthWest,
            PointerPosition { x: 100, y: 100 },
        )
        .unwrap();
        update_resize(&mut state, &interaction, PointerPosition { x: 700, y: 600 }).unwrap();

        assert_eq!(
            state.window(id).unwrap().bounds,
            WindowRect {
                x: 380,
                y: 360,
                w: MIN_WINDOW_WIDTH,
                h: MIN_WINDOW_HEIGHT,
            }
        );
    }

    #[test]
    fn west_resize_above_minimum_moves_left_edge_only() {
        let start = WindowRect {
            x: 100,
            y: 100,
            w: 500,
            h: 400,
        };
        assert_eq!(
            bounded_resize(start, ResizeEdge::West, 50, 0),
            WindowRect {
                x: 150,
                y: 100,
                w: 450,
                h: 400,
            }
        );
    }

    #[test]
    fn transition_for_closed_window_finishes_quietly() {
        let mut state = DesktopState::default();
        let id = open_window(&mut state, &panel("about", 500, 400));
        minimize_toggle(&mut state, id).unwrap();
        state.windows.clear();
        sync_taskbar(&mut state);

        advance_transitions(&mut state, 1_000);
        assert!(state.transitions.is_empty());
    }
}

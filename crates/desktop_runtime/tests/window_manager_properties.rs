use desktop_app_contract::AppId;
use desktop_runtime::{
    reduce_desktop, BuiltinApps, DesktopAction, DesktopState, InteractionState, TaskbarEntry,
    Viewport, WindowState,
};
use proptest::prelude::*;

const WINDOWED_APPS: [&str; 7] = [
    "about",
    "projects",
    "skills",
    "contact",
    "education",
    "social",
    "resume",
];

#[derive(Debug, Clone)]
enum Op {
    Open(usize),
    Focus(usize),
    Minimize(usize),
    Maximize(usize),
    Close(usize),
    Taskbar(usize),
    Cycle,
    Tick(u32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..WINDOWED_APPS.len()).prop_map(Op::Open),
        1 => (0usize..8).prop_map(Op::Focus),
        1 => (0usize..8).prop_map(Op::Minimize),
        1 => (0usize..8).prop_map(Op::Maximize),
        1 => (0usize..8).prop_map(Op::Close),
        1 => (0usize..8).prop_map(Op::Taskbar),
        1 => Just(Op::Cycle),
        1 => (1u32..400).prop_map(Op::Tick),
    ]
}

fn to_action(state: &DesktopState, op: &Op) -> Option<DesktopAction> {
    let pick = |index: usize| {
        (!state.windows.is_empty()).then(|| state.windows[index % state.windows.len()].id)
    };
    Some(match *op {
        Op::Open(app) => DesktopAction::OpenApp {
            app_id: AppId::trusted(WINDOWED_APPS[app]),
        },
        Op::Focus(index) => DesktopAction::FocusWindow {
            window_id: pick(index)?,
        },
        Op::Minimize(index) => DesktopAction::MinimizeToggle {
            window_id: pick(index)?,
        },
        Op::Maximize(index) => DesktopAction::MaximizeToggle {
            window_id: pick(index)?,
            viewport: Viewport::new(1280, 800),
        },
        Op::Close(index) => DesktopAction::CloseWindow {
            window_id: pick(index)?,
        },
        Op::Taskbar(index) => DesktopAction::TaskbarClick {
            window_id: pick(index)?,
        },
        Op::Cycle => DesktopAction::CycleWindows,
        Op::Tick(elapsed_ms) => DesktopAction::AdvanceClock { elapsed_ms },
    })
}

fn run(ops: &[Op]) -> DesktopState {
    let mut state = DesktopState::default();
    let mut interaction = InteractionState::default();
    for op in ops {
        if let Some(action) = to_action(&state, op) {
            reduce_desktop(&mut state, &mut interaction, &BuiltinApps, action)
                .expect("actions target live windows");
        }
        assert_stacking_rules(&state);
    }
    state
}

fn assert_stacking_rules(state: &DesktopState) {
    let active: Vec<_> = state.windows.iter().filter(|w| w.is_active).collect();
    assert!(active.len() <= 1, "more than one active window");
    assert_eq!(state.active_window, active.first().map(|w| w.id));

    if let Some(top) = active.first() {
        assert!(!top.state.is_minimized());
        let max_z = state.windows.iter().map(|w| w.z_order).max();
        assert_eq!(Some(top.z_order), max_z);
    }

    let mirror: Vec<TaskbarEntry> = state.windows.iter().map(TaskbarEntry::mirror).collect();
    assert_eq!(state.taskbar, mirror);

    let mut apps: Vec<&str> = state.windows.iter().map(|w| w.app_id.as_str()).collect();
    apps.sort_unstable();
    apps.dedup();
    assert_eq!(apps.len(), state.windows.len(), "duplicate window for one app");
}

proptest! {
    #[test]
    fn stacking_rules_hold_after_any_sequence(ops in prop::collection::vec(op_strategy(), 0..60)) {
        run(&ops);
    }

    #[test]
    fn visible_windows_keep_an_active_window(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let state = run(&ops);
        let any_visible = state.windows.iter().any(|w| !w.state.is_minimized());
        prop_assert_eq!(any_visible, state.active_window.is_some());
    }

    #[test]
    fn maximize_round_trip_restores_bounds(
        ops in prop::collection::vec(op_strategy(), 0..40),
        app in 0..WINDOWED_APPS.len(),
        width in 320i32..2000,
        height in 240i32..1400,
    ) {
        let mut state = run(&ops);
        let mut interaction = InteractionState::default();
        let app_id = AppId::trusted(WINDOWED_APPS[app]);
        reduce_desktop(
            &mut state,
            &mut interaction,
            &BuiltinApps,
            DesktopAction::OpenApp { app_id: app_id.clone() },
        )
        .expect("open");
        let window = state.window_for_app(&app_id).expect("window").clone();
        prop_assume!(window.state == WindowState::Normal);

        let toggle = DesktopAction::MaximizeToggle {
            window_id: window.id,
            viewport: Viewport::new(width, height),
        };
        reduce_desktop(&mut state, &mut interaction, &BuiltinApps, toggle.clone()).expect("maximize");
        prop_assert_eq!(state.window(window.id).map(|w| w.state), Some(WindowState::Maximized));
        reduce_desktop(&mut state, &mut interaction, &BuiltinApps, toggle).expect("restore");

        let restored = state.window(window.id).expect("window");
        prop_assert_eq!(restored.bounds, window.bounds);
        prop_assert_eq!(restored.saved_bounds, None);
    }

    #[test]
    fn reopening_never_duplicates(app in 0..WINDOWED_APPS.len(), repeats in 1usize..6) {
        let state = run(&vec![Op::Open(app); repeats]);
        prop_assert_eq!(state.windows.len(), 1);
        prop_assert_eq!(state.taskbar.len(), 1);
    }
}

//! Snake game: a pure tick engine, its frame projection and the canvas board component.

pub mod engine;
pub mod render;

use leptos::ev::KeyboardEvent;
use leptos::*;

pub use engine::{
    Cell, Direction, SnakeAction, SnakeConfig, SnakeEffect, SnakeEngine, SnakeStatus,
};
pub use render::{frame, CellKind, FrameCell, FrameOverlay, SnakeFrame};

/// Canvas pixels per grid cell.
pub const CELL_PX: i32 = 20;

const BOARD_COLOR: &str = "#000000";
const GRID_COLOR: &str = "#111111";
const HEAD_COLOR: &str = "#00ff00";
const BODY_COLOR: &str = "#00cc00";
const FOOD_COLOR: &str = "#ff0000";
const OVERLAY_COLOR: &str = "rgba(0, 0, 0, 0.7)";

/// Returns a seed for food placement that differs between page loads.
pub fn entropy_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::now() as u64;
        let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
        now ^ (noise << 32)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default()
    }
}

const DIRECTION_BUTTONS: [(Direction, &str, &str); 4] = [
    (Direction::Up, "snake-dir-up", "\u{25B2}"),
    (Direction::Left, "snake-dir-left", "\u{25C0}"),
    (Direction::Down, "snake-dir-down", "\u{25BC}"),
    (Direction::Right, "snake-dir-right", "\u{25B6}"),
];

#[component]
/// Canvas board, HUD and controls for one [`SnakeEngine`].
///
/// The board only reads `game`; every input is forwarded through `on_action` so the owner can run
/// the returned [`SnakeEffect`] values.
pub fn SnakeBoard(
    #[prop(into)] game: Signal<SnakeEngine>,
    on_action: Callback<SnakeAction>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let snapshot = create_memo(move |_| game.with(render::frame));
    let touch_origin = create_rw_signal(None::<(i32, i32)>);

    create_effect(move |_| {
        let frame = snapshot.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_frame(&canvas, &frame);
        }
    });

    let keydown = window_event_listener(ev::keydown, move |ev: KeyboardEvent| {
        let Some(direction) = Direction::from_key(&ev.key()) else {
            return;
        };
        ev.prevent_default();
        if game.with_untracked(SnakeEngine::accepts_live_input) {
            on_action.call(SnakeAction::Steer(direction));
        }
    });
    on_cleanup(move || keydown.remove());

    let on_touch_start = move |ev: ev::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            touch_origin.set(Some((touch.client_x(), touch.client_y())));
        }
    };
    let on_touch_end = move |ev: ev::TouchEvent| {
        let Some((x0, y0)) = touch_origin.get_untracked() else {
            return;
        };
        touch_origin.set(None);
        let Some(touch) = ev.changed_touches().get(0) else {
            return;
        };
        if !game.with_untracked(SnakeEngine::accepts_live_input) {
            return;
        }
        if let Some(direction) =
            Direction::from_swipe(touch.client_x() - x0, touch.client_y() - y0)
        {
            on_action.call(SnakeAction::Steer(direction));
        }
    };

    view! {
        <div class="snake-board">
            <div class="snake-hud" role="status" aria-live="polite">
                <span class="snake-score">{move || format!("Score: {}", snapshot.get().score)}</span>
                <span class="snake-level">{move || format!("Level: {}", snapshot.get().level)}</span>
                <span class="snake-high-score">
                    {move || format!("High Score: {}", snapshot.get().high_score)}
                </span>
            </div>
            <canvas
                node_ref=canvas_ref
                class="snake-canvas"
                width=move || snapshot.get().grid_width * CELL_PX
                height=move || snapshot.get().grid_height * CELL_PX
                on:touchstart=on_touch_start
                on:touchend=on_touch_end
            ></canvas>
            <div class="snake-controls">
                <button type="button" on:click=move |_| on_action.call(SnakeAction::Start)>
                    {move || snapshot.get().start_label}
                </button>
                <button type="button" on:click=move |_| on_action.call(SnakeAction::TogglePause)>
                    {move || snapshot.get().pause_label}
                </button>
                <button type="button" on:click=move |_| on_action.call(SnakeAction::Reset)>
                    "Reset"
                </button>
            </div>
            <div class="snake-dpad" role="group" aria-label="Direction">
                {DIRECTION_BUTTONS
                    .into_iter()
                    .map(|(direction, class_name, glyph)| {
                        view! {
                            <button
                                type="button"
                                class=class_name
                                on:click=move |_| on_action.call(SnakeAction::Steer(direction))
                            >
                                {glyph}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
fn draw_frame(canvas: &web_sys::HtmlCanvasElement, frame: &SnakeFrame) {
    use wasm_bindgen::{JsCast, JsValue};

    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
    else {
        logging::warn!("snake canvas has no 2d context");
        return;
    };

    let cell = f64::from(CELL_PX);
    let width = f64::from(frame.grid_width) * cell;
    let height = f64::from(frame.grid_height) * cell;

    ctx.set_fill_style(&JsValue::from_str(BOARD_COLOR));
    ctx.fill_rect(0.0, 0.0, width, height);

    ctx.set_stroke_style(&JsValue::from_str(GRID_COLOR));
    ctx.set_line_width(1.0);
    ctx.begin_path();
    for column in 0..=frame.grid_width {
        let x = f64::from(column) * cell;
        ctx.move_to(x, 0.0);
        ctx.line_to(x, height);
    }
    for row in 0..=frame.grid_height {
        let y = f64::from(row) * cell;
        ctx.move_to(0.0, y);
        ctx.line_to(width, y);
    }
    ctx.stroke();

    for segment in &frame.cells {
        let color = match segment.kind {
            CellKind::Head => HEAD_COLOR,
            CellKind::Body => BODY_COLOR,
        };
        ctx.set_fill_style(&JsValue::from_str(color));
        ctx.fill_rect(
            f64::from(segment.cell.x) * cell + 1.0,
            f64::from(segment.cell.y) * cell + 1.0,
            cell - 2.0,
            cell - 2.0,
        );
    }

    ctx.set_fill_style(&JsValue::from_str(FOOD_COLOR));
    ctx.begin_path();
    if ctx
        .arc(
            f64::from(frame.food.x) * cell + cell / 2.0,
            f64::from(frame.food.y) * cell + cell / 2.0,
            cell / 2.0 - 2.0,
            0.0,
            std::f64::consts::TAU,
        )
        .is_ok()
    {
        ctx.fill();
    }

    if let Some(overlay) = &frame.overlay {
        ctx.set_fill_style(&JsValue::from_str(OVERLAY_COLOR));
        ctx.fill_rect(0.0, 0.0, width, height);
        ctx.set_fill_style(&JsValue::from_str("#ffffff"));
        ctx.set_text_align("center");
        let lines = overlay.lines();
        let top = height / 2.0 - (lines.len() as f64 - 1.0) * 15.0;
        for (index, line) in lines.iter().enumerate() {
            ctx.set_font(if index == 0 {
                "bold 24px 'Courier New', monospace"
            } else {
                "16px 'Courier New', monospace"
            });
            let _ = ctx.fill_text(line, width / 2.0, top + index as f64 * 30.0);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn draw_frame(_canvas: &web_sys::HtmlCanvasElement, _frame: &SnakeFrame) {}

use crate::model::{PointerPosition, Viewport};

/// Current browser viewport in CSS pixels, taskbar included.
pub fn viewport() -> Viewport {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
                value.ok().and_then(|v| v.as_f64()).map(|v| v as i32)
            };
            let fallback = Viewport::default();
            return Viewport::new(
                dimension(window.inner_width()).unwrap_or(fallback.width),
                dimension(window.inner_height()).unwrap_or(fallback.height),
            );
        }
    }

    Viewport::default()
}

pub fn pointer_from_mouse_event(ev: &web_sys::MouseEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

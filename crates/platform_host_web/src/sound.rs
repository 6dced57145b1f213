//! `<audio>`-element sound playback.
//!
//! Each clip name resolves to an `<audio>` element id declared by the page. Unknown names and
//! missing elements are ignored; rejected `play()` promises are logged to the console.

use platform_host::SoundService;

/// Clip name to `<audio>` element id.
const CLIP_ELEMENTS: [(&str, &str); 9] = [
    ("startup", "startup-sound"),
    ("click", "click-sound"),
    ("windowOpen", "window-open-sound"),
    ("windowClose", "window-close-sound"),
    ("error", "error-sound"),
    ("menuOpen", "menu-open-sound"),
    ("shutdown", "shutdown-sound"),
    ("game", "game-sound"),
    ("themeChange", "theme-change-sound"),
];

/// Returns the `<audio>` element id registered for `clip`.
pub fn clip_element_id(clip: &str) -> Option<&'static str> {
    CLIP_ELEMENTS
        .iter()
        .find(|(name, _)| *name == clip)
        .map(|(_, id)| *id)
}

/// Returns every registered `(clip, element id)` pair, for pages that render the elements.
pub fn clip_elements() -> &'static [(&'static str, &'static str)] {
    &CLIP_ELEMENTS
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser sound service playing page-declared `<audio>` elements.
pub struct WebSoundService;

impl SoundService for WebSoundService {
    fn play(&self, clip: &str) -> Result<(), String> {
        let Some(element_id) = clip_element_id(clip) else {
            return Ok(());
        };

        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;

            let Some(element) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(element_id))
            else {
                return Ok(());
            };
            let audio = element
                .dyn_into::<web_sys::HtmlAudioElement>()
                .map_err(|_| format!("#{element_id} is not an <audio> element"))?;
            audio.set_current_time(0.0);
            let promise = audio
                .play()
                .map_err(|e| format!("play `{clip}` failed: {e:?}"))?;
            let clip = clip.to_string();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    web_sys::console::log_1(&format!("Sound play failed ({clip}): {err:?}").into());
                }
            });
            Ok(())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = element_id;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_clips_map_to_element_ids() {
        assert_eq!(clip_element_id("windowOpen"), Some("window-open-sound"));
        assert_eq!(clip_element_id("themeChange"), Some("theme-change-sound"));
        assert_eq!(clip_element_id("fanfare"), None);
    }

    #[test]
    fn unknown_clip_is_ignored() {
        assert_eq!(WebSoundService.play("fanfare"), Ok(()));
    }
}

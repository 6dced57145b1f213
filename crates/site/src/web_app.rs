use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use platform_host_web::{build_host_services, sound::clip_elements};

/// Directory the audio clips are served from.
const SOUND_DIR: &str = "sounds";

fn clip_source(clip: &str) -> String {
    format!("{SOUND_DIR}/{clip}.mp3")
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Portfolio OS" />
        <Meta name="description" content="A Windows 95 style portfolio desktop." />
        <Stylesheet
            href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css"
        />

        <main class="site-root">
            <SoundClips />
            <DesktopEntry />
        </main>
    }
}

/// Hidden `<audio>` elements the browser sound service plays by id.
#[component]
pub fn SoundClips() -> impl IntoView {
    view! {
        <div class="sound-clips" aria-hidden="true">
            {clip_elements()
                .iter()
                .map(|&(clip, element_id)| {
                    view! { <audio id=element_id src=clip_source(clip) preload="auto"></audio> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider host_services=build_host_services()>
            <DesktopShell />
        </DesktopProvider>
    }
}

//! Built-in app catalog generated from the app manifests, and the default [`ContentProvider`].

use std::sync::OnceLock;

use desktop_app_contract::{AppId, AppPanel, ContentProvider, PanelHost, Presentation, ShellError};
use leptos::*;
use serde::Deserialize;

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
struct WindowDefaults {
    width: i32,
    height: i32,
}

/// One catalog entry, as declared by an `app.manifest.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppDescriptor {
    pub app_id: AppId,
    pub display_name: String,
    pub desktop_label: String,
    pub icon: String,
    pub presentation: Presentation,
    pub show_on_desktop: bool,
    pub show_in_launcher: bool,
    pub pinned_to_taskbar: bool,
    window_defaults: WindowDefaults,
}

impl AppDescriptor {
    /// Window metadata handed to the window manager.
    pub fn panel(&self) -> AppPanel {
        AppPanel {
            app_id: self.app_id.clone(),
            title: self.display_name.clone(),
            icon: self.icon.clone(),
            width: self.window_defaults.width,
            height: self.window_defaults.height,
            presentation: self.presentation,
        }
    }
}

/// Catalog entries in manifest order.
pub fn app_registry() -> &'static [AppDescriptor] {
    static REGISTRY: OnceLock<Vec<AppDescriptor>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        serde_json::from_str(APP_MANIFEST_CATALOG_JSON).unwrap_or_else(|err| {
            logging::warn!("app catalog failed to parse: {err}");
            Vec::new()
        })
    })
}

pub fn app_descriptor(app_id: &AppId) -> Option<&'static AppDescriptor> {
    app_registry().iter().find(|entry| entry.app_id == *app_id)
}

pub fn launcher_apps() -> impl Iterator<Item = &'static AppDescriptor> {
    app_registry().iter().filter(|entry| entry.show_in_launcher)
}

pub fn desktop_icon_apps() -> impl Iterator<Item = &'static AppDescriptor> {
    app_registry().iter().filter(|entry| entry.show_on_desktop)
}

pub fn pinned_apps() -> impl Iterator<Item = &'static AppDescriptor> {
    app_registry().iter().filter(|entry| entry.pinned_to_taskbar)
}

/// [`ContentProvider`] backed by the generated catalog and the portfolio panels.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinApps;

impl ContentProvider for BuiltinApps {
    fn describe(&self, app_id: &AppId) -> Result<AppPanel, ShellError> {
        app_descriptor(app_id)
            .map(AppDescriptor::panel)
            .ok_or_else(|| ShellError::NotFound(app_id.to_string()))
    }

    fn render_body(&self, app_id: &AppId, host: PanelHost) -> View {
        desktop_app_portfolio::render_panel(app_id, host).unwrap_or_else(|| {
            let message = ShellError::NotFound(app_id.to_string()).to_string();
            view! { <p class="window-missing">{message}</p> }.into_view()
        })
    }
}

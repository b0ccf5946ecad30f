//! `web-sys` host capabilities and the wasm start entry.
//!
//! SYSTEM CONTEXT
//! ==============
//! `start` runs once when the module is instantiated: it applies the
//! resolved theme synchronously, then wires the trigger once the document
//! has been parsed. After that the only activity is click handling.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CssStyleDeclaration, Document, HtmlElement, Storage, SvgElement};

use crate::config::ThemeConfig;
use crate::controller::{ThemeController, attach_trigger};
use crate::error::HostError;
use crate::host::{IconHandle, PreferenceStore, ThemeDocument};

/// Root element attribute holding an optional JSON [`ThemeConfig`] override.
pub const CONFIG_ATTRIBUTE: &str = "data-theme-config";

fn js_error(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// `window.localStorage`, looked up per call so a page that blocks storage
/// only loses persistence.
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<Storage, HostError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(HostError::StorageUnavailable)
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, HostError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| HostError::Storage(js_error(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), HostError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| HostError::Storage(js_error(&e)))
    }
}

/// Toggle icons are usually inline SVG, sometimes plain HTML.
pub enum BrowserIcon {
    Html(HtmlElement),
    Svg(SvgElement),
}

impl BrowserIcon {
    fn style(&self) -> CssStyleDeclaration {
        match self {
            BrowserIcon::Html(el) => el.style(),
            BrowserIcon::Svg(el) => el.style(),
        }
    }
}

impl IconHandle for BrowserIcon {
    fn set_visible(&self, visible: bool) -> Result<(), HostError> {
        self.style()
            .set_property("display", if visible { "block" } else { "none" })
            .map_err(|e| HostError::Dom(js_error(&e)))
    }
}

pub struct BrowserDocument {
    document: Document,
}

impl BrowserDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ThemeDocument for BrowserDocument {
    type Icon = BrowserIcon;

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), HostError> {
        let root = self
            .document
            .document_element()
            .ok_or_else(|| HostError::Dom("document has no root element".into()))?;
        root.set_attribute(name, value)
            .map_err(|e| HostError::Dom(js_error(&e)))
    }

    fn icon(&self, id: &str) -> Option<BrowserIcon> {
        let el = self.document.get_element_by_id(id)?;
        match el.dyn_into::<HtmlElement>() {
            Ok(html) => Some(BrowserIcon::Html(html)),
            Err(el) => el.dyn_into::<SvgElement>().ok().map(BrowserIcon::Svg),
        }
    }

    fn on_click(&self, id: &str, handler: Box<dyn FnMut()>) -> bool {
        let Some(el) = self.document.get_element_by_id(id) else {
            return false;
        };
        let cb = Closure::wrap(handler);
        if let Err(e) = el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref()) {
            log::warn!("on_click: #{id}: {}", js_error(&e));
            return false;
        }
        // The listener lives as long as the page.
        cb.forget();
        true
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only when the host bundle already installed a logger.
    let _ = console_log::init_with_level(log::Level::Debug);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("theme start: no document");
        return;
    };

    let config_json = document
        .document_element()
        .and_then(|root| root.get_attribute(CONFIG_ATTRIBUTE));
    let config = ThemeConfig::from_optional_json(config_json.as_deref());

    let controller = Rc::new(RefCell::new(ThemeController::new(
        config,
        LocalStorage,
        BrowserDocument::new(document.clone()),
    )));
    controller.borrow_mut().initialize();

    if document.ready_state() != "loading" {
        attach_trigger(&controller);
        return;
    }

    let on_ready = Closure::once_into_js(move || {
        attach_trigger(&controller);
    });
    if let Err(e) =
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
    {
        log::warn!("theme start: DOMContentLoaded listener: {}", js_error(&e));
    }
}

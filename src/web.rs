//! Browser bindings for the theme ports (wasm32 only).
//!
//! - Markers live on `document.documentElement`'s class list
//! - The indicator is `#theme-icon`, written via `innerHTML`
//! - The persisted record is `localStorage["theme"]`
//! - Activation is a `click` listener on `#theme-toggle`, flagged with
//!   `data-theme-bound` so the inline page script and this module never both bind it

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Storage};

use crate::theme::{
    ActivationSource, Glyph, IndicatorSink, MarkerSink, PreferencePort, Theme, ThemeController,
    ThemeError, MARKERS, STORAGE_KEY,
};
use crate::ui::components::theme::BOUND_ATTR;

pub const TOGGLE_ID: &str = "theme-toggle";
pub const ICON_ID: &str = "theme-icon";

fn js_err(e: JsValue) -> ThemeError {
    ThemeError::Storage(format!("{:?}", e))
}

/// Class list of the document root
pub struct RootMarkers {
    root: Element,
}

impl MarkerSink for RootMarkers {
    fn apply(&mut self, theme: Theme) {
        let classes = self.root.class_list();
        if let Err(e) = classes.remove_2(MARKERS[0], MARKERS[1]) {
            tracing::warn!("Failed to clear theme markers: {:?}", e);
        }
        if let Err(e) = classes.add_1(theme.marker()) {
            tracing::warn!("Failed to apply theme marker {}: {:?}", theme, e);
        }
    }
}

pub struct IconSlot {
    element: Element,
}

impl IndicatorSink for IconSlot {
    fn show(&mut self, glyph: Glyph) {
        self.element.set_inner_html(glyph.svg());
    }
}

/// `localStorage`, or nothing when the browser denies access (private mode, sandboxed iframes)
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl PreferencePort for LocalStorage {
    fn load(&self) -> Result<Option<String>, ThemeError> {
        match &self.storage {
            Some(storage) => storage.get_item(STORAGE_KEY).map_err(js_err),
            None => Ok(None),
        }
    }

    fn save(&mut self, theme: Theme) -> Result<(), ThemeError> {
        let Some(storage) = &self.storage else {
            return Err(ThemeError::Storage("localStorage unavailable".into()));
        };
        storage.set_item(STORAGE_KEY, theme.as_str()).map_err(js_err)
    }
}

pub struct ClickSource {
    target: Element,
}

impl ActivationSource for ClickSource {
    fn subscribe(&mut self, handler: Box<dyn FnMut()>) -> Result<(), ThemeError> {
        let closure = Closure::<dyn FnMut()>::wrap(handler);
        self.target
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        // Listener lives as long as the page
        closure.forget();
        Ok(())
    }
}

pub type BrowserThemeController = ThemeController<RootMarkers, IconSlot, LocalStorage>;

thread_local! {
    static CONTROLLER: RefCell<Option<Rc<RefCell<BrowserThemeController>>>> = const { RefCell::new(None) };
}

fn document() -> Result<web_sys::Document, ThemeError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ThemeError::MissingElement("document"))
}

fn element_by_id(doc: &web_sys::Document, id: &'static str) -> Result<Element, ThemeError> {
    doc.get_element_by_id(id)
        .ok_or(ThemeError::MissingElement(id))
}

/// Look up the page elements and start the controller. Subsequent calls are no-ops.
pub fn mount() -> Result<(), ThemeError> {
    if CONTROLLER.with(|c| c.borrow().is_some()) {
        tracing::debug!("Theme controller already mounted");
        return Ok(());
    }

    let doc = document()?;
    let root = doc
        .document_element()
        .ok_or(ThemeError::MissingElement("html"))?;
    let icon = element_by_id(&doc, ICON_ID)?;
    let toggle = element_by_id(&doc, TOGGLE_ID)?;
    // Listener ownership flag; the theme itself is never read from the page
    if toggle.has_attribute(BOUND_ATTR) {
        tracing::warn!("#{} already has a click handler, not mounting", TOGGLE_ID);
        return Ok(());
    }
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
    if storage.is_none() {
        tracing::warn!("localStorage unavailable, theme choice will not persist");
    }

    let controller = ThemeController::start(
        RootMarkers { root },
        IconSlot { element: icon },
        LocalStorage { storage },
        &mut ClickSource {
            target: toggle.clone(),
        },
    )?;
    if let Err(e) = toggle.set_attribute(BOUND_ATTR, "wasm") {
        tracing::warn!("Failed to flag #{} as bound: {:?}", TOGGLE_ID, e);
    }
    CONTROLLER.with(|c| *c.borrow_mut() = Some(controller));
    Ok(())
}

/// JS entry point: `import init, { start_theme_toggle } from './theme_toggle.js'`
#[wasm_bindgen]
pub fn start_theme_toggle() -> Result<(), JsValue> {
    mount().map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Active theme as a string, for page scripts that need to query it
#[wasm_bindgen]
pub fn current_theme() -> Option<String> {
    CONTROLLER.with(|c| {
        c.borrow()
            .as_ref()
            .map(|ctrl| ctrl.borrow().theme().as_str().to_string())
    })
}

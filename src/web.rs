//! Browser bindings: web-sys implementations of the host capabilities and the
//! wasm start entry.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only compiled with the `hydrate` feature. Everything here is thin glue;
//! behavior lives in [`crate::sync`] so it can be tested natively.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, MediaQueryListEvent, Storage, Window};

use crate::config::SyncConfig;
use crate::consts;
use crate::dom::{DocumentHost, ElementSpec, Mount};
use crate::error::HostError;
use crate::host::{self, EventSource, Handler, HostEnv, HostEvent, ListenTarget};
use crate::store::PreferenceStore;
use crate::sync::{self, Synchronizer};

type WebSync = Synchronizer<WebStorage, WebDocument, WebEnv>;

/// Wasm entry: apply the theme now, finish setup once the DOM is parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("prefsync: a logger is already installed"));
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let config = load_config(&document);
    let sync = Synchronizer::new(
        config,
        WebStorage::open(&window),
        WebDocument::new(document.clone()),
        WebEnv::new(window.clone()),
    );
    let sync = Rc::new(RefCell::new(sync));
    sync.borrow_mut().boot();

    if document.ready_state() == "loading" {
        let target = document.clone();
        let on_ready = Closure::once_into_js(move || ready(&sync, window, document));
        if let Err(err) = target.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
            log::warn!("failed to wait for DOMContentLoaded: {}", describe(&err));
        }
    } else {
        ready(&sync, window, document);
    }
}

fn ready(sync: &Rc<RefCell<WebSync>>, window: Window, document: Document) {
    match sync.try_borrow_mut() {
        Ok(mut sync) => sync.initialize(),
        Err(_) => return,
    }
    let mut events = WebEvents::new(window, document);
    if let Err(err) = sync::wire(sync, &mut events) {
        log::warn!("event wiring incomplete: {err}");
    }
}

/// Read the optional inline JSON override block.
fn load_config(document: &Document) -> SyncConfig {
    let Some(block) = document.get_element_by_id(consts::CONFIG_ELEMENT_ID) else {
        return SyncConfig::default();
    };
    let raw = block.text_content().unwrap_or_default();
    match SyncConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring #{}: {err}", consts::CONFIG_ELEMENT_ID);
            SyncConfig::default()
        }
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn dom_error(err: JsValue) -> HostError {
    HostError::Dom(describe(&err))
}

// =============================================================================
// STORAGE
// =============================================================================

/// `window.localStorage`, or nothing if the browser refuses access.
pub struct WebStorage {
    storage: Option<Storage>,
}

impl WebStorage {
    #[must_use]
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(_) => None,
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, HostError> {
        self.storage.as_ref().ok_or(HostError::StorageUnavailable)
    }
}

impl PreferenceStore for WebStorage {
    fn get(&self, key: &str) -> Result<Option<String>, HostError> {
        self.storage()?
            .get_item(key)
            .map_err(|err| HostError::StorageRead { key: key.to_owned(), reason: describe(&err) })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), HostError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| HostError::StorageWrite { key: key.to_owned(), reason: describe(&err) })
    }
}

// =============================================================================
// DOCUMENT
// =============================================================================

pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, id: &str) -> Result<Element, HostError> {
        self.document.get_element_by_id(id).ok_or_else(|| HostError::MissingElement(id.to_owned()))
    }

    fn build(&self, spec: &ElementSpec) -> Result<Element, HostError> {
        let el = self.document.create_element(&spec.tag).map_err(dom_error)?;
        if let Some(id) = &spec.id {
            el.set_id(id);
        }
        if !spec.classes.is_empty() {
            el.set_class_name(&spec.classes.join(" "));
        }
        for (name, value) in &spec.attributes {
            el.set_attribute(name, value).map_err(dom_error)?;
        }
        if let Some(text) = &spec.text {
            el.set_text_content(Some(text));
        }
        for child in &spec.children {
            el.append_child(&self.build(child)?).map_err(dom_error)?;
        }
        Ok(el)
    }

    fn matching(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| match node.dyn_into::<Element>() {
                Ok(el) => Some(el),
                Err(_) => None,
            })
            .collect()
    }
}

impl DocumentHost for WebDocument {
    fn root_attribute(&self, name: &str) -> Option<String> {
        self.document.document_element()?.get_attribute(name)
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) -> Result<(), HostError> {
        let root = self.document.document_element().ok_or_else(|| HostError::MissingElement("html".into()))?;
        root.set_attribute(name, value).map_err(dom_error)
    }

    fn body_has_class(&self, class: &str) -> bool {
        self.document.body().is_some_and(|body| body.class_list().contains(class))
    }

    fn set_body_class(&mut self, class: &str, on: bool) -> Result<(), HostError> {
        let body = self.document.body().ok_or_else(|| HostError::MissingElement("body".into()))?;
        body.class_list().toggle_with_force(class, on).map_err(dom_error)?;
        Ok(())
    }

    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn has_container(&self, selector: &str) -> bool {
        matches!(self.document.query_selector(selector), Ok(Some(_)))
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<(), HostError> {
        self.element(id)?.set_text_content(Some(text));
        Ok(())
    }

    fn set_class(&mut self, id: &str, class: &str, on: bool) -> Result<(), HostError> {
        self.element(id)?.class_list().toggle_with_force(class, on).map_err(dom_error)?;
        Ok(())
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> Result<(), HostError> {
        self.element(id)?.set_attribute(name, value).map_err(dom_error)
    }

    fn set_descendant_text(&mut self, id: &str, class: &str, text: &str) -> Result<(), HostError> {
        let child = self
            .element(id)?
            .query_selector(&format!(".{class}"))
            .map_err(dom_error)?
            .ok_or_else(|| HostError::MissingElement(format!("#{id} .{class}")))?;
        child.set_text_content(Some(text));
        Ok(())
    }

    fn append(&mut self, parent: &Mount, element: &ElementSpec) -> Result<(), HostError> {
        let parent: Element = match parent {
            Mount::Body => self.document.body().ok_or_else(|| HostError::MissingElement("body".into()))?.into(),
            Mount::Container(selector) => self
                .document
                .query_selector(selector)
                .map_err(dom_error)?
                .ok_or_else(|| HostError::MissingElement(selector.clone()))?,
        };
        parent.append_child(&self.build(element)?).map_err(dom_error)?;
        Ok(())
    }

    fn link_hrefs(&self, selector: &str) -> Vec<Option<String>> {
        self.matching(selector).iter().map(|a| a.get_attribute("href")).collect()
    }

    fn mark_link(&mut self, selector: &str, index: usize, class: &str) -> Result<(), HostError> {
        let anchor = self
            .matching(selector)
            .into_iter()
            .nth(index)
            .ok_or_else(|| HostError::MissingElement(format!("{selector}[{index}]")))?;
        anchor.class_list().add_1(class).map_err(dom_error)
    }
}

// =============================================================================
// ENVIRONMENT
// =============================================================================

pub struct WebEnv {
    window: Window,
}

impl WebEnv {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    fn media_matches(&self, query: &str) -> Option<bool> {
        match self.window.match_media(query) {
            Ok(Some(list)) => Some(list.matches()),
            _ => None,
        }
    }
}

impl HostEnv for WebEnv {
    fn prefers_dark(&self) -> Option<bool> {
        self.media_matches(consts::PREFERS_DARK_QUERY)
    }

    fn viewport_at_least(&self, min_width_px: u32) -> bool {
        self.media_matches(&host::min_width_query(min_width_px)).unwrap_or(false)
    }

    fn location_path(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn current_year(&self) -> u32 {
        js_sys::Date::new_0().get_full_year()
    }
}

// =============================================================================
// EVENTS
// =============================================================================

/// Registers page-lifetime listeners; closures are leaked on purpose.
pub struct WebEvents {
    window: Window,
    document: Document,
}

impl WebEvents {
    #[must_use]
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }
}

impl EventSource for WebEvents {
    fn listen(&mut self, target: ListenTarget, mut handler: Handler) -> Result<(), HostError> {
        match target {
            ListenTarget::Click(id) => {
                let el = self
                    .document
                    .get_element_by_id(&id)
                    .ok_or_else(|| HostError::MissingElement(id.clone()))?;
                let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
                    handler(HostEvent::Click(id.clone()));
                });
                el.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
                    .map_err(dom_error)?;
                callback.forget();
            }
            ListenTarget::Breakpoint(min_width_px) => {
                let list = self
                    .window
                    .match_media(&host::min_width_query(min_width_px))
                    .map_err(dom_error)?
                    .ok_or_else(|| HostError::Dom("matchMedia returned no list".into()))?;
                let callback = Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
                    handler(HostEvent::ViewportChanged { min_width_px, wide: event.matches() });
                });
                let function: &js_sys::Function = callback.as_ref().unchecked_ref();
                // Older Safari only has the deprecated addListener.
                if list.add_event_listener_with_callback("change", function).is_err() {
                    list.add_listener_with_opt_callback(Some(function)).map_err(dom_error)?;
                }
                callback.forget();
            }
        }
        Ok(())
    }
}

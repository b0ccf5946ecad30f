//! In-memory host capabilities.
//!
//! Clones share state, so a test can keep a handle to the same store across
//! two controllers to model a page reload.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::error::HostError;
use crate::host::{IconHandle, PreferenceStore, ThemeDocument};
use crate::theme::Icon;

/// A `localStorage` stand-in.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails with [`HostError::StorageUnavailable`].
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.into(), value.into());
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, HostError> {
        if self.unavailable {
            return Err(HostError::StorageUnavailable);
        }
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), HostError> {
        if self.unavailable {
            return Err(HostError::StorageUnavailable);
        }
        self.insert(key, value);
        Ok(())
    }
}

#[derive(Default)]
struct DocumentInner {
    root_attributes: RefCell<HashMap<String, String>>,
    /// Element id to its display state; `None` until first shown or hidden.
    elements: RefCell<HashMap<String, Option<bool>>>,
    handlers: RefCell<HashMap<String, Vec<Box<dyn FnMut()>>>>,
}

/// A document with a root element and a flat set of ids.
#[derive(Clone, Default)]
pub struct MemoryDocument {
    inner: Rc<DocumentInner>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document carrying the trigger and all three icons named in `config`.
    pub fn with_toggle_markup(config: &ThemeConfig) -> Self {
        let doc = Self::new();
        doc.add_element(&config.trigger_id);
        for icon in Icon::ALL {
            doc.add_element(config.icons.id(icon));
        }
        doc
    }

    pub fn add_element(&self, id: &str) {
        self.inner.elements.borrow_mut().insert(id.into(), None);
    }

    pub fn remove_element(&self, id: &str) {
        self.inner.elements.borrow_mut().remove(id);
        self.inner.handlers.borrow_mut().remove(id);
    }

    pub fn root_attribute(&self, name: &str) -> Option<String> {
        self.inner.root_attributes.borrow().get(name).cloned()
    }

    /// Display state of `id`: `None` if missing or never touched.
    pub fn is_visible(&self, id: &str) -> Option<bool> {
        self.inner.elements.borrow().get(id).copied().flatten()
    }

    /// Ids currently shown, sorted.
    pub fn visible_elements(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .inner
            .elements
            .borrow()
            .iter()
            .filter(|(_, shown)| **shown == Some(true))
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    }

    pub fn handler_count(&self, id: &str) -> usize {
        self.inner.handlers.borrow().get(id).map_or(0, Vec::len)
    }

    /// Run every click handler on `id`. Returns how many ran.
    pub fn click(&self, id: &str) -> usize {
        // Handlers are taken out while running so they may touch the document.
        let mut running = self
            .inner
            .handlers
            .borrow_mut()
            .remove(id)
            .unwrap_or_default();
        for handler in &mut running {
            handler();
        }
        let ran = running.len();
        let mut handlers = self.inner.handlers.borrow_mut();
        let slot = handlers.entry(id.into()).or_default();
        running.append(slot);
        *slot = running;
        ran
    }
}

/// Handle to an element in a [`MemoryDocument`].
pub struct MemoryIcon {
    doc: Rc<DocumentInner>,
    id: String,
}

impl IconHandle for MemoryIcon {
    fn set_visible(&self, visible: bool) -> Result<(), HostError> {
        match self.doc.elements.borrow_mut().get_mut(&self.id) {
            Some(shown) => {
                *shown = Some(visible);
                Ok(())
            }
            None => Err(HostError::Dom(format!("element {} was removed", self.id))),
        }
    }
}

impl ThemeDocument for MemoryDocument {
    type Icon = MemoryIcon;

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), HostError> {
        self.inner
            .root_attributes
            .borrow_mut()
            .insert(name.into(), value.into());
        Ok(())
    }

    fn icon(&self, id: &str) -> Option<MemoryIcon> {
        self.inner
            .elements
            .borrow()
            .contains_key(id)
            .then(|| MemoryIcon {
                doc: Rc::clone(&self.inner),
                id: id.into(),
            })
    }

    fn on_click(&self, id: &str, handler: Box<dyn FnMut()>) -> bool {
        if !self.inner.elements.borrow().contains_key(id) {
            return false;
        }
        self.inner
            .handlers
            .borrow_mut()
            .entry(id.into())
            .or_default()
            .push(handler);
        true
    }
}

//! Capabilities the controller needs from its host environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build implements these with `web-sys` (see `browser`); tests
//! use the in-memory versions in `memory`. The controller only ever talks to
//! these traits.

use crate::error::HostError;

/// Synchronous key-value storage scoped to the page origin.
pub trait PreferenceStore {
    /// Read `key`. `Ok(None)` means the entry does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] when storage is unavailable or the read throws.
    fn get(&self, key: &str) -> Result<Option<String>, HostError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] when storage is unavailable or the write throws.
    fn set(&self, key: &str, value: &str) -> Result<(), HostError>;
}

/// An element the controller can show or hide.
pub trait IconHandle {
    /// # Errors
    ///
    /// Returns [`HostError::Dom`] when the style update throws.
    fn set_visible(&self, visible: bool) -> Result<(), HostError>;
}

/// The slice of the document the controller reads and mutates.
pub trait ThemeDocument {
    type Icon: IconHandle;

    /// Set `name` to `value` on the document root element.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Dom`] when there is no root element or the
    /// attribute write throws.
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), HostError>;

    /// Look up an icon element by id.
    fn icon(&self, id: &str) -> Option<Self::Icon>;

    /// Attach `handler` to click events on element `id`.
    ///
    /// Returns `false` without attaching when the element does not exist.
    fn on_click(&self, id: &str, handler: Box<dyn FnMut()>) -> bool;
}

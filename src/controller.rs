//! Theme resolution, application, and cycling.
//!
//! SYSTEM CONTEXT
//! ==============
//! One controller exists per page load. It holds the only mutable state, the
//! last applied theme, alongside the storage and document capabilities it
//! writes through. The browser start code and the trigger click handler share
//! it through `Rc<RefCell<_>>`.
//!
//! TRADE-OFFS
//! ==========
//! Every host failure is logged and skipped. A page with broken storage still
//! themes itself for the session; a page without the toggle markup still gets
//! the persisted theme attribute.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::host::{IconHandle, PreferenceStore, ThemeDocument};
use crate::theme::{Icon, ThemeName};

pub struct ThemeController<S, D> {
    config: ThemeConfig,
    store: S,
    document: D,
    /// Last applied theme. Once set, always equals the persisted value.
    current: Option<ThemeName>,
}

impl<S: PreferenceStore, D: ThemeDocument> ThemeController<S, D> {
    pub fn new(config: ThemeConfig, store: S, document: D) -> Self {
        Self {
            config,
            store,
            document,
            current: None,
        }
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// The theme most recently applied by this controller, if any.
    pub fn current(&self) -> Option<ThemeName> {
        self.current
    }

    /// The active theme: the cached value, else a valid persisted value,
    /// else the configured default. Reads only.
    pub fn resolve_active_theme(&self) -> ThemeName {
        if let Some(theme) = self.current {
            return theme;
        }
        let stored = match self.store.get(&self.config.storage_key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("resolve_active_theme: {e}");
                None
            }
        };
        log::debug!("resolve_active_theme: stored value = {stored:?}");
        ThemeName::from_stored(stored.as_deref()).unwrap_or(self.config.default_theme)
    }

    /// Set the document attribute, persist, cache, then refresh the icons.
    pub fn apply_theme(&mut self, theme: ThemeName) {
        log::debug!("apply_theme: {theme}");
        if let Err(e) = self
            .document
            .set_root_attribute(&self.config.attribute, theme.as_str())
        {
            log::warn!("apply_theme: {e}");
        }
        if let Err(e) = self.store.set(&self.config.storage_key, theme.as_str()) {
            log::warn!("apply_theme: {e}");
        }
        self.current = Some(theme);
        self.update_icon_visibility(theme);
    }

    /// Show only the icon previewing the theme a click would move to.
    ///
    /// Does nothing unless all three icons are present.
    pub fn update_icon_visibility(&self, theme: ThemeName) {
        let ids = &self.config.icons;
        let (Some(moon), Some(sun), Some(bolt)) = (
            self.document.icon(ids.id(Icon::Moon)),
            self.document.icon(ids.id(Icon::Sun)),
            self.document.icon(ids.id(Icon::Bolt)),
        ) else {
            log::warn!("update_icon_visibility: one or more icons not found");
            return;
        };

        let shown = theme.preview_icon();
        for (icon, handle) in [(Icon::Moon, &moon), (Icon::Sun, &sun), (Icon::Bolt, &bolt)] {
            if let Err(e) = handle.set_visible(false) {
                log::warn!("update_icon_visibility: hiding {icon:?}: {e}");
            }
        }
        let handle = match shown {
            Icon::Moon => &moon,
            Icon::Sun => &sun,
            Icon::Bolt => &bolt,
        };
        if let Err(e) = handle.set_visible(true) {
            log::warn!("update_icon_visibility: showing {shown:?}: {e}");
        }
    }

    /// Advance one step along light -> dark -> synthwave -> light.
    pub fn cycle_theme(&mut self) -> ThemeName {
        let from = self.resolve_active_theme();
        let to = from.next();
        log::debug!("cycle_theme: {from} -> {to}");
        self.apply_theme(to);
        to
    }

    /// Load-time step: apply whatever theme resolves so the document,
    /// storage, cache, and icons agree.
    pub fn initialize(&mut self) -> ThemeName {
        let theme = self.resolve_active_theme();
        log::debug!("initialize: initial theme = {theme}");
        self.apply_theme(theme);
        theme
    }
}

/// Wire the trigger element's clicks to [`ThemeController::cycle_theme`].
///
/// Returns `false` without attaching anything when the trigger is missing.
pub fn attach_trigger<S, D>(controller: &Rc<RefCell<ThemeController<S, D>>>) -> bool
where
    S: PreferenceStore + 'static,
    D: ThemeDocument + 'static,
{
    let handle = Rc::clone(controller);
    let ctl = controller.borrow();
    let trigger_id = ctl.config.trigger_id.as_str();
    let attached = ctl.document.on_click(
        trigger_id,
        Box::new(move || match handle.try_borrow_mut() {
            Ok(mut ctl) => {
                ctl.cycle_theme();
            }
            Err(_) => log::warn!("theme trigger: controller busy, click dropped"),
        }),
    );
    if attached {
        log::debug!("attach_trigger: listening on #{trigger_id}");
    } else {
        log::warn!("attach_trigger: #{trigger_id} not found");
    }
    attached
}

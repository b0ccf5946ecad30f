use super::*;
use crate::memory::{MemoryDocument, MemoryStore};

type TestController = ThemeController<MemoryStore, MemoryDocument>;

fn page(store: &MemoryStore) -> TestController {
    let config = ThemeConfig::default();
    let doc = MemoryDocument::with_toggle_markup(&config);
    ThemeController::new(config, store.clone(), doc)
}

fn visible(ctl: &TestController) -> Vec<String> {
    ctl.document().visible_elements()
}

// =============================================================
// resolve_active_theme
// =============================================================

#[test]
fn resolves_light_when_nothing_persisted() {
    let ctl = page(&MemoryStore::new());
    assert_eq!(ctl.resolve_active_theme(), ThemeName::Light);
}

#[test]
fn resolves_light_when_persisted_value_unrecognized() {
    let store = MemoryStore::new();
    store.insert("pref-theme", "neon");
    let ctl = page(&store);
    assert_eq!(ctl.resolve_active_theme(), ThemeName::Light);
}

#[test]
fn resolves_persisted_value() {
    let store = MemoryStore::new();
    store.insert("pref-theme", "synthwave");
    assert_eq!(page(&store).resolve_active_theme(), ThemeName::Synthwave);
}

#[test]
fn resolve_does_not_write_cache_or_storage() {
    let store = MemoryStore::new();
    let ctl = page(&store);
    ctl.resolve_active_theme();
    assert_eq!(ctl.current(), None);
    assert_eq!(store.value("pref-theme"), None);
}

#[test]
fn resolve_prefers_cache_over_storage() {
    let store = MemoryStore::new();
    let mut ctl = page(&store);
    ctl.apply_theme(ThemeName::Dark);
    store.insert("pref-theme", "light");
    assert_eq!(ctl.resolve_active_theme(), ThemeName::Dark);
}

#[test]
fn resolve_uses_configured_default() {
    let config = ThemeConfig {
        default_theme: ThemeName::Synthwave,
        ..ThemeConfig::default()
    };
    let ctl = ThemeController::new(config, MemoryStore::new(), MemoryDocument::new());
    assert_eq!(ctl.resolve_active_theme(), ThemeName::Synthwave);
}

#[test]
fn resolve_falls_back_when_storage_unavailable() {
    let ctl = ThemeController::new(
        ThemeConfig::default(),
        MemoryStore::unavailable(),
        MemoryDocument::new(),
    );
    assert_eq!(ctl.resolve_active_theme(), ThemeName::Light);
}

// =============================================================
// apply_theme
// =============================================================

#[test]
fn apply_then_resolve_round_trips_every_theme() {
    let store = MemoryStore::new();
    let mut ctl = page(&store);
    for theme in ThemeName::ALL {
        ctl.apply_theme(theme);
        assert_eq!(ctl.resolve_active_theme(), theme);
        assert_eq!(ctl.current(), Some(theme));
        assert_eq!(store.value("pref-theme").as_deref(), Some(theme.as_str()));
        assert_eq!(
            ctl.document().root_attribute("data-theme").as_deref(),
            Some(theme.as_str())
        );
    }
}

#[test]
fn apply_still_themes_document_when_storage_unavailable() {
    let config = ThemeConfig::default();
    let doc = MemoryDocument::with_toggle_markup(&config);
    let mut ctl = ThemeController::new(config, MemoryStore::unavailable(), doc);
    ctl.apply_theme(ThemeName::Dark);
    assert_eq!(ctl.current(), Some(ThemeName::Dark));
    assert_eq!(ctl.resolve_active_theme(), ThemeName::Dark);
    assert_eq!(
        ctl.document().root_attribute("data-theme").as_deref(),
        Some("dark")
    );
}

#[test]
fn apply_writes_configured_key_and_attribute() {
    let config = ThemeConfig::from_json(r#"{"storage_key":"k","attribute":"data-mode"}"#).unwrap();
    let mut ctl = ThemeController::new(config, MemoryStore::new(), MemoryDocument::new());
    ctl.apply_theme(ThemeName::Synthwave);
    assert_eq!(ctl.store().value("k").as_deref(), Some("synthwave"));
    assert_eq!(
        ctl.document().root_attribute("data-mode").as_deref(),
        Some("synthwave")
    );
}

// =============================================================
// update_icon_visibility
// =============================================================

#[test]
fn light_shows_only_moon() {
    let ctl = page(&MemoryStore::new());
    ctl.update_icon_visibility(ThemeName::Light);
    assert_eq!(visible(&ctl), vec!["moon"]);
    assert_eq!(ctl.document().is_visible("sun"), Some(false));
    assert_eq!(ctl.document().is_visible("synthwave"), Some(false));
}

#[test]
fn dark_shows_only_bolt() {
    let ctl = page(&MemoryStore::new());
    ctl.update_icon_visibility(ThemeName::Dark);
    assert_eq!(visible(&ctl), vec!["synthwave"]);
}

#[test]
fn synthwave_shows_only_sun() {
    let ctl = page(&MemoryStore::new());
    ctl.update_icon_visibility(ThemeName::Synthwave);
    assert_eq!(visible(&ctl), vec!["sun"]);
}

#[test]
fn missing_icon_leaves_others_untouched() {
    let ctl = page(&MemoryStore::new());
    ctl.document().remove_element("sun");
    ctl.update_icon_visibility(ThemeName::Light);
    assert_eq!(ctl.document().is_visible("moon"), None);
    assert_eq!(ctl.document().is_visible("synthwave"), None);
}

#[test]
fn missing_icons_do_not_block_apply() {
    let store = MemoryStore::new();
    let mut ctl = ThemeController::new(ThemeConfig::default(), store.clone(), MemoryDocument::new());
    ctl.apply_theme(ThemeName::Dark);
    assert_eq!(store.value("pref-theme").as_deref(), Some("dark"));
    assert_eq!(ctl.current(), Some(ThemeName::Dark));
}

// =============================================================
// cycle_theme
// =============================================================

#[test]
fn cycle_rotates_one_step() {
    for (from, to) in [
        (ThemeName::Light, ThemeName::Dark),
        (ThemeName::Dark, ThemeName::Synthwave),
        (ThemeName::Synthwave, ThemeName::Light),
    ] {
        let mut ctl = page(&MemoryStore::new());
        ctl.apply_theme(from);
        assert_eq!(ctl.cycle_theme(), to);
        assert_eq!(ctl.resolve_active_theme(), to);
    }
}

#[test]
fn three_cycles_return_to_start() {
    for start in ThemeName::ALL {
        let mut ctl = page(&MemoryStore::new());
        ctl.apply_theme(start);
        ctl.cycle_theme();
        ctl.cycle_theme();
        ctl.cycle_theme();
        assert_eq!(ctl.resolve_active_theme(), start);
    }
}

#[test]
fn cycle_from_fresh_load_reads_storage() {
    let store = MemoryStore::new();
    store.insert("pref-theme", "dark");
    let mut ctl = page(&store);
    assert_eq!(ctl.cycle_theme(), ThemeName::Synthwave);
    assert_eq!(store.value("pref-theme").as_deref(), Some("synthwave"));
}

// =============================================================
// initialize / attach_trigger
// =============================================================

#[test]
fn initialize_applies_resolved_theme() {
    let store = MemoryStore::new();
    store.insert("pref-theme", "synthwave");
    let mut ctl = page(&store);
    assert_eq!(ctl.initialize(), ThemeName::Synthwave);
    assert_eq!(ctl.current(), Some(ThemeName::Synthwave));
    assert_eq!(
        ctl.document().root_attribute("data-theme").as_deref(),
        Some("synthwave")
    );
    assert_eq!(visible(&ctl), vec!["sun"]);
}

#[test]
fn initialize_persists_default_over_garbage() {
    let store = MemoryStore::new();
    store.insert("pref-theme", "neon");
    page(&store).initialize();
    assert_eq!(store.value("pref-theme").as_deref(), Some("light"));
}

#[test]
fn missing_trigger_attaches_nothing() {
    let config = ThemeConfig::default();
    let doc = MemoryDocument::with_toggle_markup(&config);
    doc.remove_element("theme-toggle");
    let ctl = Rc::new(RefCell::new(ThemeController::new(config, MemoryStore::new(), doc.clone())));
    ctl.borrow_mut().initialize();

    assert!(!attach_trigger(&ctl));
    assert_eq!(doc.handler_count("theme-toggle"), 0);
    assert_eq!(ctl.borrow().current(), Some(ThemeName::Light));
}

#[test]
fn trigger_click_cycles_theme() {
    let store = MemoryStore::new();
    let ctl = Rc::new(RefCell::new(page(&store)));
    ctl.borrow_mut().initialize();
    assert!(attach_trigger(&ctl));

    let doc = ctl.borrow().document().clone();
    assert_eq!(doc.click("theme-toggle"), 1);
    assert_eq!(ctl.borrow().current(), Some(ThemeName::Dark));
    doc.click("theme-toggle");
    doc.click("theme-toggle");
    assert_eq!(ctl.borrow().current(), Some(ThemeName::Light));
}

#[test]
fn session_survives_reload() {
    let store = MemoryStore::new();

    // First load: nothing stored.
    let ctl = Rc::new(RefCell::new(page(&store)));
    assert_eq!(ctl.borrow_mut().initialize(), ThemeName::Light);
    assert_eq!(visible(&ctl.borrow()), vec!["moon"]);
    assert!(attach_trigger(&ctl));

    let doc = ctl.borrow().document().clone();
    doc.click("theme-toggle");
    assert_eq!(ctl.borrow().current(), Some(ThemeName::Dark));
    assert_eq!(store.value("pref-theme").as_deref(), Some("dark"));
    assert_eq!(doc.root_attribute("data-theme").as_deref(), Some("dark"));
    assert_eq!(doc.visible_elements(), vec!["synthwave"]);

    // Reload: fresh controller and document, same storage.
    let mut reloaded = page(&store);
    assert_eq!(reloaded.current(), None);
    assert_eq!(reloaded.resolve_active_theme(), ThemeName::Dark);
    reloaded.initialize();
    assert_eq!(visible(&reloaded), vec!["synthwave"]);
}

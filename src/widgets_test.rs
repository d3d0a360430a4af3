use super::*;
use crate::dom::MemoryDocument;

fn page_with_sidebar() -> MemoryDocument {
    MemoryDocument::new().with_container(".sidebar")
}

// =============================================================
// Specs
// =============================================================

#[test]
fn theme_switch_starts_unchecked() {
    let spec = theme_switch_spec(&SyncConfig::default());
    assert!(spec.has_class("theme-toggle-wrap"));
    assert_eq!(spec.children[0].text.as_deref(), Some("Dark mode"));

    let button = spec.find("themeSwitch").unwrap();
    assert_eq!(button.attribute("role"), Some("switch"));
    assert_eq!(button.attribute("aria-checked"), Some("false"));
    assert_eq!(button.attribute("aria-label"), Some("Toggle dark mode"));
    assert!(!button.has_class("is-on"));
}

#[test]
fn sidebar_toggle_starts_expanded() {
    let spec = sidebar_toggle_spec(&SyncConfig::default());
    assert_eq!(spec.id.as_deref(), Some("sidebarToggle"));
    assert_eq!(spec.attribute("type"), Some("button"));
    assert_eq!(spec.children[0].text.as_deref(), Some("chevron_left"));
    assert_eq!(spec.children[1].text.as_deref(), Some("Toggle sidebar"));
}

#[test]
fn specs_use_configured_ids() {
    let config = SyncConfig { theme_switch_id: "ts".into(), sidebar_toggle_id: "st".into(), ..SyncConfig::default() };
    assert!(theme_switch_spec(&config).find("ts").is_some());
    assert_eq!(sidebar_toggle_spec(&config).id.as_deref(), Some("st"));
}

// =============================================================
// ensure_widgets
// =============================================================

#[test]
fn injects_both_widgets_once() {
    let config = SyncConfig::default();
    let mut doc = page_with_sidebar();

    let first = ensure_widgets(&mut doc, &config).unwrap();
    assert_eq!(first, Injected { theme_switch: true, sidebar_toggle: true });

    let second = ensure_widgets(&mut doc, &config).unwrap();
    assert_eq!(second, Injected::default());
    assert_eq!(doc.mounted().len(), 2);
    assert_eq!(doc.mounted()[0].parent, Mount::Container(".sidebar".into()));
    assert_eq!(doc.mounted()[1].parent, Mount::Body);
}

#[test]
fn no_sidebar_means_no_theme_switch() {
    let mut doc = MemoryDocument::new();
    let injected = ensure_widgets(&mut doc, &SyncConfig::default()).unwrap();
    assert_eq!(injected, Injected { theme_switch: false, sidebar_toggle: true });
    assert!(!doc.has_element("themeSwitch"));
}

#[test]
fn pre_rendered_widgets_are_left_alone() {
    let mut doc = page_with_sidebar()
        .with_element(Mount::Container(".sidebar".into()), ElementSpec::new("button").with_id("themeSwitch"))
        .with_element(Mount::Body, ElementSpec::new("button").with_id("sidebarToggle"));
    let injected = ensure_widgets(&mut doc, &SyncConfig::default()).unwrap();
    assert_eq!(injected, Injected::default());
    assert_eq!(doc.mounted().len(), 2);
}

// =============================================================
// Rendering
// =============================================================

#[test]
fn render_theme_switch_tracks_theme() {
    let config = SyncConfig::default();
    let mut doc = page_with_sidebar();
    ensure_widgets(&mut doc, &config).unwrap();

    render_theme_switch(&mut doc, &config, Theme::Dark).unwrap();
    let switch = doc.element("themeSwitch").unwrap();
    assert!(switch.has_class("is-on"));
    assert_eq!(switch.attribute("aria-checked"), Some("true"));

    render_theme_switch(&mut doc, &config, Theme::Light).unwrap();
    let switch = doc.element("themeSwitch").unwrap();
    assert!(!switch.has_class("is-on"));
    assert_eq!(switch.attribute("aria-checked"), Some("false"));
}

#[test]
fn render_sidebar_toggle_tracks_state() {
    let config = SyncConfig::default();
    let mut doc = MemoryDocument::new();
    ensure_widgets(&mut doc, &config).unwrap();

    render_sidebar_toggle(&mut doc, &config, SidebarState::Collapsed).unwrap();
    let toggle = doc.element("sidebarToggle").unwrap();
    assert_eq!(toggle.children[0].text.as_deref(), Some("chevron_right"));
    assert_eq!(toggle.attribute("aria-expanded"), Some("false"));
    assert_eq!(toggle.attribute("aria-label"), Some("Show sidebar"));
}

#[test]
fn render_without_widgets_is_noop() {
    let config = SyncConfig::default();
    let mut doc = MemoryDocument::new();
    assert!(render_theme_switch(&mut doc, &config, Theme::Dark).is_ok());
    assert!(render_sidebar_toggle(&mut doc, &config, SidebarState::Collapsed).is_ok());
}

#[test]
fn toggle_without_icon_still_gets_aria_state() {
    let config = SyncConfig::default();
    let mut doc = MemoryDocument::new().with_element(Mount::Body, ElementSpec::new("button").with_id("sidebarToggle"));
    render_sidebar_toggle(&mut doc, &config, SidebarState::Expanded).unwrap();
    let toggle = doc.element("sidebarToggle").unwrap();
    assert_eq!(toggle.attribute("aria-expanded"), Some("true"));
    assert_eq!(toggle.attribute("aria-label"), Some("Hide sidebar"));
}

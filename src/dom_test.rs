use super::*;

fn toggle_button() -> ElementSpec {
    ElementSpec::new("button")
        .with_id("sidebarToggle")
        .with_child(ElementSpec::new("span").with_class("icon").with_text("chevron_left"))
        .with_child(ElementSpec::new("span").with_class("sr-only").with_text("Toggle sidebar"))
}

// =============================================================
// ElementSpec
// =============================================================

#[test]
fn set_class_is_idempotent_and_removable() {
    let mut el = ElementSpec::new("div").with_class("a");
    el.set_class("a", true);
    assert_eq!(el.classes, vec!["a".to_owned()]);
    el.set_class("a", false);
    assert!(!el.has_class("a"));
}

#[test]
fn set_attribute_overwrites_in_place() {
    let mut el = ElementSpec::new("button").with_attr("type", "button").with_attr("aria-checked", "false");
    el.set_attribute("aria-checked", "true");
    assert_eq!(el.attribute("aria-checked"), Some("true"));
    assert_eq!(el.attributes.len(), 2);
    assert_eq!(el.attributes[0].0, "type");
}

#[test]
fn find_searches_descendants() {
    let wrap = ElementSpec::new("div").with_child(ElementSpec::new("button").with_id("themeSwitch"));
    assert_eq!(wrap.find("themeSwitch").map(|e| e.tag.as_str()), Some("button"));
    assert!(wrap.find("missing").is_none());
}

#[test]
fn descendant_with_class_skips_self() {
    let mut el = ElementSpec::new("span").with_class("icon").with_child(ElementSpec::new("i").with_class("icon"));
    let found = el.descendant_with_class_mut("icon").map(|e| e.tag.clone());
    assert_eq!(found.as_deref(), Some("i"));
}

// =============================================================
// MemoryDocument
// =============================================================

#[test]
fn root_attribute_round_trip() {
    let mut doc = MemoryDocument::new();
    assert_eq!(doc.root_attribute("data-theme"), None);
    doc.set_root_attribute("data-theme", "dark").unwrap();
    assert_eq!(doc.root_attribute("data-theme").as_deref(), Some("dark"));
}

#[test]
fn body_class_toggle() {
    let mut doc = MemoryDocument::new();
    doc.set_body_class("sidebar-collapsed", true).unwrap();
    doc.set_body_class("sidebar-collapsed", true).unwrap();
    assert!(doc.body_has_class("sidebar-collapsed"));
    doc.set_body_class("sidebar-collapsed", false).unwrap();
    assert!(!doc.body_has_class("sidebar-collapsed"));
}

#[test]
fn append_to_missing_container_fails() {
    let mut doc = MemoryDocument::new();
    let err = doc.append(&Mount::Container(".sidebar".into()), &ElementSpec::new("div")).unwrap_err();
    assert_eq!(err, HostError::MissingElement(".sidebar".into()));
    assert!(doc.mounted().is_empty());
}

#[test]
fn appended_elements_are_addressable_by_id() {
    let mut doc = MemoryDocument::new();
    doc.append(&Mount::Body, &toggle_button()).unwrap();
    assert!(doc.has_element("sidebarToggle"));

    doc.set_attribute("sidebarToggle", "aria-expanded", "false").unwrap();
    doc.set_descendant_text("sidebarToggle", "icon", "chevron_right").unwrap();

    let button = doc.element("sidebarToggle").unwrap();
    assert_eq!(button.attribute("aria-expanded"), Some("false"));
    assert_eq!(button.children[0].text.as_deref(), Some("chevron_right"));
    assert_eq!(button.children[1].text.as_deref(), Some("Toggle sidebar"));
}

#[test]
fn writes_to_missing_element_report_missing() {
    let mut doc = MemoryDocument::new();
    assert_eq!(doc.set_text("year", "2026"), Err(HostError::MissingElement("year".into())));
    assert!(doc.set_class("themeSwitch", "is-on", true).is_err());
}

#[test]
fn links_expose_hrefs_and_accept_marks() {
    let mut doc = MemoryDocument::new().with_links(".side-nav a", &[Some("index.html"), None]);
    assert_eq!(doc.link_hrefs(".side-nav a"), vec![Some("index.html".to_owned()), None]);

    doc.mark_link(".side-nav a", 0, "active").unwrap();
    assert!(doc.links(".side-nav a")[0].has_class("active"));
    assert!(doc.mark_link(".side-nav a", 5, "active").is_err());
    assert!(doc.link_hrefs(".other a").is_empty());
}

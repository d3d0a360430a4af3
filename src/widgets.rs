//! Injected widgets: the dark-mode switch and the sidebar toggle.
//!
//! Pages may ship either widget in their markup; injection only fills in the
//! ones that are missing, so running it twice never duplicates anything.

#[cfg(test)]
#[path = "widgets_test.rs"]
mod widgets_test;

use crate::config::SyncConfig;
use crate::consts;
use crate::dom::{DocumentHost, ElementSpec, Mount};
use crate::error::HostError;
use crate::sidebar::SidebarState;
use crate::theme::Theme;

/// Which widgets an [`ensure_widgets`] call created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Injected {
    pub theme_switch: bool,
    pub sidebar_toggle: bool,
}

/// Labelled switch wrapper appended to the sidebar. Starts unchecked.
#[must_use]
pub fn theme_switch_spec(config: &SyncConfig) -> ElementSpec {
    let button = ElementSpec::new("button")
        .with_id(&config.theme_switch_id)
        .with_class("theme-switch")
        .with_attr("type", "button")
        .with_attr("role", "switch")
        .with_attr("aria-label", consts::LABEL_TOGGLE_DARK_MODE)
        .with_attr("aria-checked", "false")
        .with_child(ElementSpec::new("span").with_class("theme-switch-thumb").with_attr("aria-hidden", "true"));

    ElementSpec::new("div")
        .with_class("theme-toggle-wrap")
        .with_child(ElementSpec::new("span").with_class("theme-label").with_text(consts::LABEL_DARK_MODE))
        .with_child(button)
}

/// Floating toggle button appended to the body. Starts in the expanded presentation.
#[must_use]
pub fn sidebar_toggle_spec(config: &SyncConfig) -> ElementSpec {
    ElementSpec::new("button")
        .with_id(&config.sidebar_toggle_id)
        .with_class("sidebar-toggle")
        .with_attr("type", "button")
        .with_child(
            ElementSpec::new("span")
                .with_class(consts::TOGGLE_ICON_CLASS)
                .with_attr("aria-hidden", "true")
                .with_text(consts::ICON_EXPANDED),
        )
        .with_child(ElementSpec::new("span").with_class("sr-only").with_text(consts::LABEL_TOGGLE_SIDEBAR))
}

/// Create whichever widgets the page lacks.
///
/// The switch needs the sidebar container; without one it is skipped.
pub fn ensure_widgets<D: DocumentHost + ?Sized>(doc: &mut D, config: &SyncConfig) -> Result<Injected, HostError> {
    let mut injected = Injected::default();

    if doc.has_container(&config.sidebar_selector) && !doc.has_element(&config.theme_switch_id) {
        doc.append(&Mount::Container(config.sidebar_selector.clone()), &theme_switch_spec(config))?;
        injected.theme_switch = true;
    }

    if !doc.has_element(&config.sidebar_toggle_id) {
        doc.append(&Mount::Body, &sidebar_toggle_spec(config))?;
        injected.sidebar_toggle = true;
    }

    Ok(injected)
}

/// Reflect `theme` on the switch. No-op when the switch is absent.
pub fn render_theme_switch<D: DocumentHost + ?Sized>(
    doc: &mut D,
    config: &SyncConfig,
    theme: Theme,
) -> Result<(), HostError> {
    let id = &config.theme_switch_id;
    if !doc.has_element(id) {
        return Ok(());
    }
    let dark = theme.is_dark();
    doc.set_class(id, consts::SWITCH_ON_CLASS, dark)?;
    doc.set_attribute(id, "aria-checked", if dark { "true" } else { "false" })
}

/// Reflect `state` on the toggle. No-op when the toggle is absent.
///
/// A toggle shipped without the icon span still gets its ARIA state.
pub fn render_sidebar_toggle<D: DocumentHost + ?Sized>(
    doc: &mut D,
    config: &SyncConfig,
    state: SidebarState,
) -> Result<(), HostError> {
    let id = &config.sidebar_toggle_id;
    if !doc.has_element(id) {
        return Ok(());
    }
    match doc.set_descendant_text(id, consts::TOGGLE_ICON_CLASS, state.icon()) {
        Ok(()) | Err(HostError::MissingElement(_)) => {}
        Err(err) => return Err(err),
    }
    doc.set_attribute(id, "aria-expanded", state.aria_expanded())?;
    doc.set_attribute(id, "aria-label", state.aria_label())
}

//! The preference synchronizer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the three host capabilities (store, document, environment) and keeps
//! them consistent: persisted theme ↔ root attribute ↔ switch widget, and
//! persisted collapse flag ↔ body class ↔ toggle widget, under the viewport
//! breakpoint policy.
//!
//! LIFECYCLE
//! =========
//! 1. [`Synchronizer::boot`] at script evaluation applies the theme before
//!    first paint.
//! 2. [`Synchronizer::initialize`] once the DOM is parsed: year, active link,
//!    widgets, initial sidebar state, switch state.
//! 3. [`wire`] registers click and breakpoint handlers; every later change
//!    arrives through [`Synchronizer::handle`].
//!
//! ERROR HANDLING
//! ==============
//! Storage failures read as "absent" and writes are best-effort; neither is
//! logged. Missing elements skip their feature. Other DOM failures are logged
//! at warn and the page carries on.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::SyncConfig;
use crate::dom::DocumentHost;
use crate::error::HostError;
use crate::host::{EventSource, Handler, HostEnv, HostEvent, ListenTarget};
use crate::nav;
use crate::sidebar::{self, SidebarState};
use crate::store::{self, PreferenceStore};
use crate::theme::{self, Theme, ThemeResolution};
use crate::widgets::{self, Injected};

/// Reconciles persisted preferences, environment signals, and the document.
pub struct Synchronizer<S, D, E> {
    config: SyncConfig,
    store: S,
    doc: D,
    env: E,
}

impl<S: PreferenceStore, D: DocumentHost, E: HostEnv> Synchronizer<S, D, E> {
    #[must_use]
    pub fn new(config: SyncConfig, store: S, doc: D, env: E) -> Self {
        Self { config, store, doc, env }
    }

    #[must_use]
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn doc(&self) -> &D {
        &self.doc
    }

    #[must_use]
    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut E {
        &mut self.env
    }

    // --- Theme ---

    /// Persisted theme if valid, else the OS signal, else light.
    #[must_use]
    pub fn resolve_theme(&self) -> ThemeResolution {
        let stored = store::read_or_absent(&self.store, &self.config.theme_key);
        theme::resolve_theme(stored.as_deref(), self.env.prefers_dark())
    }

    /// Set the root theme attribute. Idempotent.
    pub fn apply_theme(&mut self, theme: Theme) {
        let result = self.doc.set_root_attribute(&self.config.theme_attribute, theme.as_str());
        report("apply theme", result);
    }

    /// Theme currently on the root element; missing or unknown reads as light.
    #[must_use]
    pub fn applied_theme(&self) -> Theme {
        self.doc
            .root_attribute(&self.config.theme_attribute)
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or_default()
    }

    /// Flip the applied theme, persist it, and update the switch.
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.applied_theme().toggled();
        self.apply_theme(next);
        store::write_best_effort(&mut self.store, &self.config.theme_key, next.as_str());
        self.render_theme_switch(next);
        log::debug!("theme toggled to {next}");
        next
    }

    fn render_theme_switch(&mut self, theme: Theme) {
        let result = widgets::render_theme_switch(&mut self.doc, &self.config, theme);
        report("render theme switch", result);
    }

    // --- Sidebar ---

    /// Collapsed only if the viewport allows it and `"1"` is persisted.
    #[must_use]
    pub fn resolve_sidebar_collapsed(&self, viewport_allows_collapse: bool) -> bool {
        let stored = store::read_or_absent(&self.store, &self.config.sidebar_key);
        sidebar::resolve_sidebar_collapsed(viewport_allows_collapse, stored.as_deref())
    }

    /// State shown by the document right now.
    #[must_use]
    pub fn sidebar_state(&self) -> SidebarState {
        SidebarState::from_collapsed(self.doc.body_has_class(&self.config.collapsed_class))
    }

    /// Set the body marker and update the toggle. Does not persist.
    pub fn apply_sidebar(&mut self, state: SidebarState) {
        let result = self.doc.set_body_class(&self.config.collapsed_class, state.is_collapsed());
        report("apply sidebar state", result);
        let result = widgets::render_sidebar_toggle(&mut self.doc, &self.config, state);
        report("render sidebar toggle", result);
    }

    /// Flip the shown sidebar state and persist it.
    pub fn toggle_sidebar(&mut self) -> SidebarState {
        let next = self.sidebar_state().toggled();
        self.apply_sidebar(next);
        store::write_best_effort(&mut self.store, &self.config.sidebar_key, next.storage_value());
        log::debug!("sidebar toggled to {next:?}");
        next
    }

    /// Breakpoint crossing: narrow forces expanded, wide re-applies the stored flag.
    ///
    /// Never writes storage, so a stored collapse survives a trip through a
    /// narrow viewport.
    pub fn on_viewport_change(&mut self, wide: bool) -> SidebarState {
        let stored = store::read_or_absent(&self.store, &self.config.sidebar_key);
        let state = sidebar::after_breakpoint_crossing(wide, stored.as_deref());
        self.apply_sidebar(state);
        state
    }

    // --- Page chrome ---

    /// Mark the navigation link for the current page. Returns its index.
    pub fn highlight_active_nav_link(&mut self) -> Option<usize> {
        let hrefs = self.doc.link_hrefs(&self.config.nav_link_selector);
        let index = nav::active_link_index(&self.env.location_path(), &hrefs)?;
        let result = self.doc.mark_link(&self.config.nav_link_selector, index, &self.config.active_link_class);
        report("highlight nav link", result);
        Some(index)
    }

    /// Write the current year into the year element, if the page has one.
    pub fn fill_year(&mut self) -> bool {
        if !self.doc.has_element(&self.config.year_id) {
            return false;
        }
        let year = self.env.current_year().to_string();
        let result = self.doc.set_text(&self.config.year_id, &year);
        report("fill year", result);
        true
    }

    /// Create the switch and toggle where the page lacks them.
    pub fn inject_widgets(&mut self) -> Injected {
        match widgets::ensure_widgets(&mut self.doc, &self.config) {
            Ok(injected) => injected,
            Err(err) => {
                log::warn!("widget injection failed: {err}");
                Injected::default()
            }
        }
    }

    // --- Lifecycle ---

    /// Apply the resolved theme as early as possible.
    pub fn boot(&mut self) -> ThemeResolution {
        let resolution = self.resolve_theme();
        self.apply_theme(resolution.theme);
        resolution
    }

    /// One-shot setup once the document is parsed.
    pub fn initialize(&mut self) {
        let has_year = self.fill_year();
        let active = self.highlight_active_nav_link();
        let injected = self.inject_widgets();

        let wide = self.env.viewport_at_least(self.config.breakpoint_px);
        let collapsed = self.resolve_sidebar_collapsed(wide);
        self.apply_sidebar(SidebarState::from_collapsed(collapsed));

        let resolution = self.resolve_theme();
        self.render_theme_switch(resolution.theme);

        log::debug!(
            "preferences initialized: theme={} ({:?}), collapsed={collapsed}, wide={wide}, active_link={active:?}, \
             injected={injected:?}, year={has_year}",
            resolution.theme,
            resolution.source,
        );
    }

    /// Route a host event to the matching operation.
    pub fn handle(&mut self, event: &HostEvent) {
        match event {
            HostEvent::Click(id) if *id == self.config.theme_switch_id => {
                self.toggle_theme();
            }
            HostEvent::Click(id) if *id == self.config.sidebar_toggle_id => {
                self.toggle_sidebar();
            }
            HostEvent::Click(_) => {}
            HostEvent::ViewportChanged { wide, .. } => {
                self.on_viewport_change(*wide);
            }
        }
    }
}

/// Register the synchronizer's handlers with `events`.
///
/// Click handlers are only attached to widgets present in the document; the
/// breakpoint handler is always attached.
pub fn wire<S, D, E, V>(sync: &Rc<RefCell<Synchronizer<S, D, E>>>, events: &mut V) -> Result<(), HostError>
where
    S: PreferenceStore + 'static,
    D: DocumentHost + 'static,
    E: HostEnv + 'static,
    V: EventSource + ?Sized,
{
    let targets = {
        let sync = sync.try_borrow().map_err(|_| HostError::Dom("synchronizer is busy".into()))?;
        let config = sync.config();
        let mut targets = Vec::with_capacity(3);
        for id in [&config.theme_switch_id, &config.sidebar_toggle_id] {
            if sync.doc().has_element(id) {
                targets.push(ListenTarget::Click(id.clone()));
            }
        }
        targets.push(ListenTarget::Breakpoint(config.breakpoint_px));
        targets
    };

    for target in targets {
        events.listen(target, dispatcher(sync))?;
    }
    Ok(())
}

fn dispatcher<S, D, E>(sync: &Rc<RefCell<Synchronizer<S, D, E>>>) -> Handler
where
    S: PreferenceStore + 'static,
    D: DocumentHost + 'static,
    E: HostEnv + 'static,
{
    let sync = Rc::clone(sync);
    Box::new(move |event: HostEvent| match sync.try_borrow_mut() {
        Ok(mut sync) => sync.handle(&event),
        Err(_) => log::debug!("synchronizer busy, dropping {event:?}"),
    })
}

fn report(step: &str, result: Result<(), HostError>) {
    match result {
        Ok(()) | Err(HostError::MissingElement(_)) => {}
        Err(err) => log::warn!("{step} failed: {err}"),
    }
}

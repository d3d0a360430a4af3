//! Environment signals and event registration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page event loop delivers clicks and media-query changes one at a time
//! and runs each handler to completion. [`EventSource`] abstracts handler
//! registration so the synchronizer can be wired against a real browser or
//! against [`ScriptedEvents`], which replays events synchronously.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use crate::error::HostError;

/// Media query matching viewports at least `min_width_px` CSS pixels wide.
#[must_use]
pub fn min_width_query(min_width_px: u32) -> String {
    format!("(min-width: {min_width_px}px)")
}

/// Read-only signals from the browser environment.
pub trait HostEnv {
    /// OS dark color-scheme preference; `None` if the host cannot evaluate it.
    fn prefers_dark(&self) -> Option<bool>;

    /// Whether the viewport is at least `min_width_px` CSS pixels wide.
    fn viewport_at_least(&self, min_width_px: u32) -> bool;

    /// Path component of the current location.
    fn location_path(&self) -> String;

    /// Current calendar year in local time.
    fn current_year(&self) -> u32;
}

/// Fixed environment values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedEnv {
    pub prefers_dark: Option<bool>,
    pub viewport_width_px: u32,
    pub location_path: String,
    pub year: u32,
}

impl Default for FixedEnv {
    fn default() -> Self {
        Self { prefers_dark: Some(false), viewport_width_px: 1280, location_path: "/index.html".to_owned(), year: 2026 }
    }
}

impl HostEnv for FixedEnv {
    fn prefers_dark(&self) -> Option<bool> {
        self.prefers_dark
    }

    fn viewport_at_least(&self, min_width_px: u32) -> bool {
        self.viewport_width_px >= min_width_px
    }

    fn location_path(&self) -> String {
        self.location_path.clone()
    }

    fn current_year(&self) -> u32 {
        self.year
    }
}

/// Something a handler can be registered for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenTarget {
    /// Clicks on the element with this id.
    Click(String),
    /// Crossings of a `(min-width: Npx)` media query.
    Breakpoint(u32),
}

/// An event delivered to a registered handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// The element with this id was clicked.
    Click(String),
    /// The breakpoint media query changed; `wide` is its new match state.
    ViewportChanged { min_width_px: u32, wide: bool },
}

impl HostEvent {
    /// Whether a handler registered for `target` receives this event.
    #[must_use]
    pub fn is_for(&self, target: &ListenTarget) -> bool {
        match (self, target) {
            (Self::Click(id), ListenTarget::Click(target_id)) => id == target_id,
            (Self::ViewportChanged { min_width_px, .. }, ListenTarget::Breakpoint(px)) => min_width_px == px,
            _ => false,
        }
    }
}

/// Boxed page-lifetime event handler.
pub type Handler = Box<dyn FnMut(HostEvent)>;

/// Handler registration against a host event loop.
pub trait EventSource {
    /// Register `handler` for every future event matching `target`.
    fn listen(&mut self, target: ListenTarget, handler: Handler) -> Result<(), HostError>;
}

/// Synchronous [`EventSource`] that delivers events on [`ScriptedEvents::dispatch`].
#[derive(Default)]
pub struct ScriptedEvents {
    handlers: Vec<(ListenTarget, Handler)>,
}

impl ScriptedEvents {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets with a registered handler, in registration order.
    #[must_use]
    pub fn targets(&self) -> Vec<ListenTarget> {
        self.handlers.iter().map(|(target, _)| target.clone()).collect()
    }

    /// Run every handler registered for the event's target. Returns how many ran.
    pub fn dispatch(&mut self, event: &HostEvent) -> usize {
        let mut delivered = 0;
        for (target, handler) in &mut self.handlers {
            if event.is_for(target) {
                handler(event.clone());
                delivered += 1;
            }
        }
        delivered
    }
}

impl EventSource for ScriptedEvents {
    fn listen(&mut self, target: ListenTarget, handler: Handler) -> Result<(), HostError> {
        self.handlers.push((target, handler));
        Ok(())
    }
}

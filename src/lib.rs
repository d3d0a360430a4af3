//! Preference synchronizer for a static documentation site.
//!
//! This crate is compiled to WebAssembly and loaded by every page of the site.
//! It reconciles two user preferences (color theme and sidebar collapse) between
//! browser storage, the OS color-scheme signal, and the live document, and
//! injects the small widgets that let the reader flip them. All browser access
//! goes through capability traits so the logic runs natively in tests; the
//! `hydrate` feature supplies the web-sys implementations and the wasm entry.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`sync`] | The [`sync::Synchronizer`] and event wiring |
//! | [`theme`] | Theme values and the storage → system → default resolution |
//! | [`sidebar`] | Sidebar two-state machine and breakpoint policy |
//! | [`nav`] | Active navigation link selection |
//! | [`widgets`] | Widget element trees and their visual/ARIA state |
//! | [`store`] | Persistent key/value capability |
//! | [`dom`] | Document mutation capability and element trees |
//! | [`host`] | Environment signals and event registration capability |
//! | [`config`] | Overridable keys, ids, selectors, and breakpoint |
//! | [`error`] | Host and configuration error types |
//! | [`consts`] | Shared defaults (storage keys, class names, labels) |

pub mod config;
pub mod consts;
pub mod dom;
pub mod error;
pub mod host;
pub mod nav;
pub mod sidebar;
pub mod store;
pub mod sync;
pub mod theme;
pub mod widgets;

#[cfg(feature = "hydrate")]
pub mod web;

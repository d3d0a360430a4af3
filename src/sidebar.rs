//! Sidebar collapse state and the responsive policy around it.
//!
//! DESIGN
//! ======
//! Two states, [`SidebarState::Expanded`] and [`SidebarState::Collapsed`].
//! A persisted collapse only takes effect on viewports at or above the
//! breakpoint; narrow viewports always show the sidebar expanded but never
//! rewrite what the reader stored.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use crate::consts;

/// Visible sidebar state, mirrored by the body marker class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarState {
    #[default]
    Expanded,
    Collapsed,
}

impl SidebarState {
    #[must_use]
    pub fn from_collapsed(collapsed: bool) -> Self {
        if collapsed { Self::Collapsed } else { Self::Expanded }
    }

    #[must_use]
    pub fn is_collapsed(self) -> bool {
        self == Self::Collapsed
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Expanded => Self::Collapsed,
            Self::Collapsed => Self::Expanded,
        }
    }

    /// Value persisted for this state.
    #[must_use]
    pub fn storage_value(self) -> &'static str {
        match self {
            Self::Expanded => "0",
            Self::Collapsed => "1",
        }
    }

    /// Icon glyph name shown in the toggle: points toward where the sidebar will go.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Expanded => consts::ICON_EXPANDED,
            Self::Collapsed => consts::ICON_COLLAPSED,
        }
    }

    /// Accessible label describing what a click will do.
    #[must_use]
    pub fn aria_label(self) -> &'static str {
        match self {
            Self::Expanded => consts::LABEL_HIDE_SIDEBAR,
            Self::Collapsed => consts::LABEL_SHOW_SIDEBAR,
        }
    }

    /// `aria-expanded` value for the toggle.
    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        match self {
            Self::Expanded => "true",
            Self::Collapsed => "false",
        }
    }
}

/// Whether a persisted value asks for a collapsed sidebar. Only `"1"` does.
#[must_use]
pub fn stored_collapsed(stored: Option<&str>) -> bool {
    stored == Some("1")
}

/// Collapse only when the viewport allows it and the reader stored `"1"`.
#[must_use]
pub fn resolve_sidebar_collapsed(viewport_allows_collapse: bool, stored: Option<&str>) -> bool {
    viewport_allows_collapse && stored_collapsed(stored)
}

/// State after the viewport crosses the breakpoint.
///
/// Narrowing forces [`SidebarState::Expanded`]; widening re-applies the stored preference.
#[must_use]
pub fn after_breakpoint_crossing(now_wide: bool, stored: Option<&str>) -> SidebarState {
    SidebarState::from_collapsed(resolve_sidebar_collapsed(now_wide, stored))
}

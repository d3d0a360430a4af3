//! Shared defaults for the preference synchronizer.

// ── Storage ─────────────────────────────────────────────────────

/// Storage key holding `"light"` or `"dark"`.
pub const THEME_KEY: &str = "theme";

/// Storage key holding `"1"` (collapsed) or `"0"` (expanded).
pub const SIDEBAR_KEY: &str = "sidebarCollapsed";

// ── Layout ──────────────────────────────────────────────────────

/// Minimum viewport width, in CSS pixels, at which the sidebar may collapse.
pub const SIDEBAR_BREAKPOINT_PX: u32 = 901;

/// Media query for the OS dark color-scheme signal.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

// ── Document markers ────────────────────────────────────────────

/// Root element attribute CSS keys the theme off.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Body class present while the sidebar is collapsed.
pub const COLLAPSED_CLASS: &str = "sidebar-collapsed";

/// Class added to the navigation link for the current page.
pub const ACTIVE_LINK_CLASS: &str = "active";

/// Navigation anchors considered for active-link highlighting.
pub const NAV_LINK_SELECTOR: &str = ".side-nav a";

/// Container the theme switch is appended to.
pub const SIDEBAR_SELECTOR: &str = ".sidebar";

/// Element whose text becomes the current year.
pub const YEAR_ID: &str = "year";

// ── Widgets ─────────────────────────────────────────────────────

pub const THEME_SWITCH_ID: &str = "themeSwitch";
pub const SIDEBAR_TOGGLE_ID: &str = "sidebarToggle";

/// Class on the theme switch while dark mode is on.
pub const SWITCH_ON_CLASS: &str = "is-on";

/// Class of the icon span inside the sidebar toggle.
pub const TOGGLE_ICON_CLASS: &str = "material-symbols-outlined";

pub const ICON_COLLAPSED: &str = "chevron_right";
pub const ICON_EXPANDED: &str = "chevron_left";

pub const LABEL_SHOW_SIDEBAR: &str = "Show sidebar";
pub const LABEL_HIDE_SIDEBAR: &str = "Hide sidebar";
pub const LABEL_DARK_MODE: &str = "Dark mode";
pub const LABEL_TOGGLE_DARK_MODE: &str = "Toggle dark mode";
pub const LABEL_TOGGLE_SIDEBAR: &str = "Toggle sidebar";

/// Id of the optional inline JSON block overriding [`crate::config::SyncConfig`].
pub const CONFIG_ELEMENT_ID: &str = "prefsync-config";

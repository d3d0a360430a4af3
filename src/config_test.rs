use super::*;

#[test]
fn default_matches_site_contract() {
    let config = SyncConfig::default();
    assert_eq!(config.theme_key, "theme");
    assert_eq!(config.sidebar_key, "sidebarCollapsed");
    assert_eq!(config.theme_attribute, "data-theme");
    assert_eq!(config.collapsed_class, "sidebar-collapsed");
    assert_eq!(config.theme_switch_id, "themeSwitch");
    assert_eq!(config.sidebar_toggle_id, "sidebarToggle");
    assert_eq!(config.breakpoint_px, 901);
}

#[test]
fn default_validates() {
    assert!(SyncConfig::default().validate().is_ok());
}

#[test]
fn breakpoint_query_uses_min_width() {
    assert_eq!(SyncConfig::default().breakpoint_query(), "(min-width: 901px)");
}

#[test]
fn empty_object_yields_defaults() {
    let config = SyncConfig::from_json("{}").unwrap();
    assert_eq!(config, SyncConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = SyncConfig::from_json(r#"{"theme_key":"site-theme","breakpoint_px":1024}"#).unwrap();
    assert_eq!(config.theme_key, "site-theme");
    assert_eq!(config.breakpoint_px, 1024);
    assert_eq!(config.sidebar_key, "sidebarCollapsed");
    assert_eq!(config.breakpoint_query(), "(min-width: 1024px)");
}

#[test]
fn malformed_json_is_parse_error() {
    let err = SyncConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn unknown_field_is_parse_error() {
    let err = SyncConfig::from_json(r#"{"theme_kee":"x"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn blank_key_is_rejected() {
    let err = SyncConfig::from_json(r#"{"sidebar_key":"  "}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "sidebar_key", .. }));
}

#[test]
fn zero_breakpoint_is_rejected() {
    let err = SyncConfig::from_json(r#"{"breakpoint_px":0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "breakpoint_px", .. }));
}

#[test]
fn colliding_widget_ids_are_rejected() {
    let err = SyncConfig::from_json(r#"{"sidebar_toggle_id":"themeSwitch"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "sidebar_toggle_id", .. }));
}

#[test]
fn invalid_error_message_names_field() {
    let err = SyncConfig::from_json(r#"{"year_id":""}"#).unwrap_err();
    assert_eq!(err.to_string(), "invalid config field year_id: must not be empty");
}

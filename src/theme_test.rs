use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn parse_accepts_exact_values() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
}

#[test]
fn parse_rejects_everything_else() {
    for raw in ["", "Dark", "LIGHT", " dark", "dark ", "auto", "1", "true"] {
        assert_eq!(Theme::parse(raw), None, "{raw:?} should not parse");
    }
}

#[test]
fn as_str_round_trips_through_parse() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

#[test]
fn toggled_twice_is_identity() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
}

#[test]
fn default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
    assert!(!Theme::default().is_dark());
}

#[test]
fn display_matches_storage_value() {
    assert_eq!(Theme::Dark.to_string(), "dark");
}

// =============================================================
// resolve_theme
// =============================================================

#[test]
fn valid_stored_value_wins_over_system_signal() {
    for (stored, theme) in [("light", Theme::Light), ("dark", Theme::Dark)] {
        for system in [Some(true), Some(false), None] {
            let res = resolve_theme(Some(stored), system);
            assert_eq!(res.theme, theme);
            assert_eq!(res.source, ThemeSource::FromStorage);
        }
    }
}

#[test]
fn absent_value_follows_system_signal() {
    let dark = resolve_theme(None, Some(true));
    assert_eq!(dark, ThemeResolution { theme: Theme::Dark, source: ThemeSource::FromSystemSignal });

    let light = resolve_theme(None, Some(false));
    assert_eq!(light, ThemeResolution { theme: Theme::Light, source: ThemeSource::FromSystemSignal });
}

#[test]
fn invalid_value_is_treated_as_absent() {
    let res = resolve_theme(Some("sepia"), Some(true));
    assert_eq!(res.theme, Theme::Dark);
    assert_eq!(res.source, ThemeSource::FromSystemSignal);
}

#[test]
fn no_signal_falls_back_to_default_light() {
    let res = resolve_theme(None, None);
    assert_eq!(res, ThemeResolution { theme: Theme::Light, source: ThemeSource::Default });
}

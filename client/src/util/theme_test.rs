use super::*;

#[test]
fn theme_ids_round_trip_through_parse() {
    for theme in Theme::ALL {
        assert_eq!(Theme::parse(theme.id()), Some(theme));
    }
    assert_eq!(Theme::parse("neon"), None);
}

#[test]
fn every_theme_has_a_gradient_and_name() {
    for theme in Theme::ALL {
        assert!(theme.gradient().starts_with("linear-gradient"));
        assert!(!theme.name().is_empty());
    }
}

#[test]
fn default_theme_uses_light_text_and_light_themes_dark_text() {
    assert_eq!(Theme::Default.text_color(), "#ffffff");
    assert_eq!(Theme::Beige.text_color(), "#1f2937");
}

#[test]
fn host_read_preference_falls_back_to_default() {
    // Without a browser there is no storage; the default must come back.
    assert_eq!(read_preference(), Theme::Default);
}

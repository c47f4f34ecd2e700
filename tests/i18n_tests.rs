// Host-side tests for translation catalogs and language selection.

#![allow(dead_code)]
mod i18n {
    include!("../src/core/i18n.rs");
}

use i18n::*;

fn translator() -> Translator {
    let en = Catalog::from_json("en", include_str!("../locales/en.json")).unwrap();
    let es = Catalog::from_json("es", include_str!("../locales/es.json")).unwrap();
    Translator::new(vec![en, es], "en")
}

#[test]
fn nested_keys_are_flattened() {
    let c = Catalog::from_json("en", r#"{"home":{"blog":{"title":"Blog"}},"x":"y"}"#).unwrap();
    assert_eq!(c.lookup("home.blog.title"), Some("Blog"));
    assert_eq!(c.lookup("x"), Some("y"));
    assert_eq!(c.lookup("home.blog"), None);
    assert_eq!(c.len(), 2);
    assert_eq!(c.lang(), "en");
}

#[test]
fn bundled_catalogs_share_keys() {
    let en = Catalog::from_json("en", include_str!("../locales/en.json")).unwrap();
    let es = Catalog::from_json("es", include_str!("../locales/es.json")).unwrap();
    assert_eq!(en.len(), es.len());
    for key in [
        "home.projects.title",
        "home.blog.title",
        "home.me.title",
        "home.fun.title",
        "home.menu.label",
    ] {
        assert!(en.lookup(key).is_some(), "en missing {}", key);
        assert!(es.lookup(key).is_some(), "es missing {}", key);
    }
}

#[test]
fn invalid_catalogs_are_rejected() {
    assert!(matches!(
        Catalog::from_json("en", "{ not json"),
        Err(CatalogError::Parse { .. })
    ));
    assert!(matches!(
        Catalog::from_json("en", r#""just text""#),
        Err(CatalogError::NotAnObject(_))
    ));
    assert!(Catalog::from_json("en", r#"{"a": 1}"#).is_err());
}

#[test]
fn fallback_language_is_active_by_default() {
    let t = translator();
    assert_eq!(t.active_language(), Some("en"));
    assert_eq!(t.t("home.me.title"), "Resume");
}

#[test]
fn region_tags_match_base_language() {
    let mut t = translator();
    assert!(t.set_language("es-MX"));
    assert_eq!(t.active_language(), Some("es"));
    assert_eq!(t.t("home.projects.title"), "Proyectos");
    assert!(t.set_language("EN"));
    assert_eq!(t.active_language(), Some("en"));
}

#[test]
fn unknown_language_keeps_current() {
    let mut t = translator();
    t.set_language("es");
    assert!(!t.set_language("fr-FR"));
    assert_eq!(t.active_language(), Some("es"));
}

#[test]
fn missing_keys_fall_back_then_echo() {
    let en = Catalog::from_json("en", r#"{"only":{"en":"English"}}"#).unwrap();
    let es = Catalog::from_json("es", r#"{"other":"x"}"#).unwrap();
    let mut t = Translator::new(vec![en, es], "en");
    t.set_language("es");
    assert_eq!(t.t("only.en"), "English");
    assert_eq!(t.t("nope.key"), "nope.key");
}

#[test]
fn base_language_strips_region() {
    assert_eq!(base_language("es-MX"), "es");
    assert_eq!(base_language("pt_BR"), "pt");
    assert_eq!(base_language("EN"), "en");
    assert_eq!(base_language(""), "");
}

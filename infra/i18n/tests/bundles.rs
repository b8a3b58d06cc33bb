use bhub_i18n::{I18nError, Locale, Localizer, static_params};
use std::fs;

#[test]
fn locale_set_is_exactly_en_ms_zh() {
    let params = static_params();
    let locales: Vec<&str> = params.iter().map(|p| p.params.locale.as_str()).collect();
    assert_eq!(locales, vec!["en", "ms", "zh"]);
}

#[test]
fn params_serialize_to_route_records() {
    let params = static_params();
    let json = serde_json::to_value(params).expect("serialize");
    assert_eq!(json[0], serde_json::json!({ "params": { "locale": "en" } }));
    assert_eq!(json[2], serde_json::json!({ "params": { "locale": "zh" } }));
}

#[test]
fn parse_tolerates_region_tags_and_case() {
    assert_eq!(Locale::parse("en-US"), Some(Locale::En));
    assert_eq!(Locale::parse(" ZH_cn "), Some(Locale::Zh));
    assert_eq!(Locale::parse("ms"), Some(Locale::Ms));
    assert_eq!(Locale::parse("fr"), None);
    assert_eq!(Locale::parse(""), None);
}

#[tokio::test]
async fn embedded_default_namespace_loads_for_all_locales() {
    let localizer = Localizer::new();
    for locale in Locale::ALL {
        let bundle = localizer.load_default(locale).await.expect("embedded bundle");
        assert_eq!(bundle.locale(), locale);
        assert!(bundle.len() > 0);
        assert!(bundle.get("dashboard.coming_soon").is_some());
    }
}

#[tokio::test]
async fn missing_namespace_is_a_hard_error() {
    let localizer = Localizer::new();
    let err = localizer.load(Locale::En, &["nonexistent"]).await.expect_err("must fail");
    match err {
        I18nError::MissingBundle { locale, namespace } => {
            assert_eq!(locale, Locale::En);
            assert_eq!(namespace, "nonexistent");
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn missing_key_falls_back_to_the_key_itself() {
    let bundle = Localizer::new().load_default(Locale::En).await.expect("bundle");
    assert_eq!(bundle.text("no.such.key"), "no.such.key");
    assert_eq!(bundle.text("dashboard.goals.title"), "Goals");
}

#[tokio::test]
async fn on_disk_catalogs_override_embedded_ones() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let en = dir.path().join("en");
    fs::create_dir_all(&en)?;
    fs::write(en.join("common.json"), r#"{ "dashboard.coming_soon": "Soon(tm)" }"#)?;

    let localizer = Localizer::with_dir(dir.path());
    let bundle = localizer.load_default(Locale::En).await?;
    assert_eq!(bundle.text("dashboard.coming_soon"), "Soon(tm)");

    // Locales without an on-disk catalog fail instead of silently
    // falling back to the embedded set.
    let err = localizer.load_default(Locale::Ms).await.expect_err("no ms dir");
    assert!(matches!(err, I18nError::MissingBundle { .. }));
    Ok(())
}

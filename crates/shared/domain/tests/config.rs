use bhub_domain::config::{ApiConfig, DatabaseConfig, NotifyConfig, ServerConfig, SessionConfig};
use bhub_domain::toast::ToastPresentation;
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4710);
    assert!(server.ssl.is_none());

    let db = DatabaseConfig::default();
    assert_eq!(db.url, "mem://");
    assert_eq!(db.namespace, "bhub");
    assert_eq!(db.database, "core");
    assert!(db.credentials.is_some());

    let notify = NotifyConfig::default();
    assert_eq!(notify.presentation, ToastPresentation::Banner);
    assert_eq!(notify.ttl_millis, 3_000);

    let session = SessionConfig::default();
    assert_eq!(session.ttl_seconds, 3600);
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "database": { "url": "mem://", "namespace": "n", "database": "d", "credentials": null },
        "notify": { "presentation": "modal", "ttl_millis": 1500 },
        "i18n": { "default_locale": "ms" }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.database.namespace, "n");
    assert_eq!(cfg.notify.presentation, ToastPresentation::Modal);
    assert_eq!(cfg.notify.ttl_millis, 1500);
    assert_eq!(cfg.i18n.default_locale, "ms");
    assert!(cfg.i18n.bundle_dir.is_none());
}

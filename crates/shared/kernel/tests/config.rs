use bhub_kernel::config::load_config;
use std::fs;

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct TestConfig {
    port: u16,
    name: String,
}

#[test]
fn loads_toml_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("server.toml");
    fs::write(&path, "port = 9000\nname = \"budgethub\"\n")?;

    let cfg: TestConfig = load_config(Some(&path))?;
    assert_eq!(cfg.port, 9000);
    assert_eq!(cfg.name, "budgethub");
    Ok(())
}

#[test]
fn missing_file_is_an_error() {
    let result: Result<TestConfig, _> = load_config(Some("does/not/exist"));
    assert!(result.is_err());
}

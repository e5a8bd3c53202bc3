use super::*;

#[test]
fn default_delay_cap_is_fifteen_minutes() {
    let config = AdapterConfig::default();
    assert_eq!(config.sender.max_delay, Duration::from_secs(900));
    assert_eq!(config.file_store.root, PathBuf::from("satchel-data"));
}

#[test]
fn parses_a_full_config() {
    let config = AdapterConfig::parse(
        r#"
        [sender]
        name = "orders"
        max_delay = "5m"

        [file_store]
        root = "/var/lib/orders"
        "#,
    )
    .unwrap();

    assert_eq!(config.sender.name, "orders");
    assert_eq!(config.sender.max_delay, Duration::from_secs(300));
    assert_eq!(config.file_store.root, PathBuf::from("/var/lib/orders"));
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let config = AdapterConfig::parse(
        r#"
        [sender]
        name = "orders"
        max_delay = "30s"
        "#,
    )
    .unwrap();

    assert_eq!(config.sender.max_delay, Duration::from_secs(30));
    assert_eq!(config.file_store.root, PathBuf::from("satchel-data"));
}

#[test]
fn load_reports_the_missing_path() {
    let err = AdapterConfig::load(Path::new("/nonexistent/satchel.toml")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/satchel.toml"));
}

#[test]
fn load_reads_a_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("satchel.toml");
    std::fs::write(&path, "[sender]\nname = \"t\"\nmax_delay = \"1s\"\n").unwrap();

    let config = AdapterConfig::load(&path).unwrap();

    assert_eq!(config.sender.name, "t");
    assert_eq!(config.sender.max_delay, Duration::from_secs(1));
}

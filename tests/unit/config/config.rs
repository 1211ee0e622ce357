use super::*;

#[test]
fn missing_fields_take_defaults() {
    let cfg = Config::from_json_str(r#"{"server_url": "https://gen.example/api"}"#).unwrap();
    assert_eq!(cfg.server_url, "https://gen.example/api");
    assert_eq!(cfg.timeout(), Duration::from_secs(120));
    assert_eq!(Config::from_json_str("{}").unwrap(), Config::default());
}

#[test]
fn unknown_fields_are_rejected() {
    let err = Config::from_json_str(r#"{"server": "x"}"#).unwrap_err();
    assert!(err.to_string().contains("config error:"));
}

#[test]
fn env_overrides_file() {
    let cfg = Config::from_json_str(r#"{"server_url": "https://file.example"}"#)
        .unwrap()
        .with_env_from(|key| (key == SERVER_URL_ENV).then(|| "https://env.example".to_string()));
    assert_eq!(cfg.server_url, "https://env.example");

    let untouched = Config::default().with_env_from(|_| None);
    assert_eq!(untouched, Config::default());
}

#[test]
fn zero_timeout_is_invalid() {
    let cfg = Config {
        timeout_secs: 0,
        ..Config::default()
    };
    assert!(cfg.validate().is_err());
    assert!(Config::default().validate().is_ok());
}

#[test]
fn reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("maskform.json");
    std::fs::write(&path, r#"{"timeout_secs": 5}"#).unwrap();
    assert_eq!(Config::from_json_file(&path).unwrap().timeout_secs, 5);
    assert!(Config::from_json_file(&dir.path().join("nope.json")).is_err());
}

use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn empty_environment_uses_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
    assert!(config.public_dir.ends_with("../public"));
}

#[test]
fn blank_values_use_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("BIND_ADDR", "")])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
}

// =============================================================
// Overrides
// =============================================================

#[test]
fn overrides_are_applied() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BIND_ADDR", "127.0.0.1"),
        ("PUBLIC_DIR", "/srv/site"),
    ]))
    .unwrap();
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(config.public_dir, PathBuf::from("/srv/site"));
}

#[test]
fn values_are_trimmed() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", " 4000 ")])).unwrap();
    assert_eq!(config.port, 4000);
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    assert!(err.to_string().contains("\"http\""));
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost:80")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "BIND_ADDR", .. }));
}

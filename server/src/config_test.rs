use super::*;

/// # Safety
/// Env mutation is confined to this single test to avoid races.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
    }
}

#[test]
fn from_env_defaults_and_overrides() {
    unsafe { clear_server_env() };
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg, ServerConfig { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT });
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");

    unsafe {
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "8080");
    }
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");

    unsafe { std::env::set_var("PORT", "not-a-port") };
    let err = ServerConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value } if value == "not-a-port"));

    unsafe { clear_server_env() };
}

#[test]
fn parse_port_defaults_when_blank() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_rejects_out_of_range() {
    assert!(parse_port(Some("70000")).is_err());
}

use super::*;

fn fallback() -> SocketAddr {
    "127.0.0.1:3000".parse().unwrap()
}

// =============================================================================
// resolve_addr
// =============================================================================

#[test]
fn resolve_addr_without_overrides_keeps_fallback() {
    assert_eq!(resolve_addr(fallback(), None, None), Ok(fallback()));
}

#[test]
fn resolve_addr_overrides_port_only() {
    let addr = resolve_addr(fallback(), None, Some("8080")).unwrap();
    assert_eq!(addr, "127.0.0.1:8080".parse().unwrap());
}

#[test]
fn resolve_addr_overrides_host_only() {
    let addr = resolve_addr(fallback(), Some("0.0.0.0"), None).unwrap();
    assert_eq!(addr, "0.0.0.0:3000".parse().unwrap());
}

#[test]
fn resolve_addr_accepts_ipv6_host() {
    let addr = resolve_addr(fallback(), Some("::1"), Some("4000")).unwrap();
    assert_eq!(addr, "[::1]:4000".parse().unwrap());
}

#[test]
fn resolve_addr_rejects_bad_port() {
    for raw in ["0", "70000", "http", "-1"] {
        assert_eq!(
            resolve_addr(fallback(), None, Some(raw)),
            Err(ConfigError::InvalidPort(raw.to_owned())),
            "port {raw:?}"
        );
    }
}

#[test]
fn resolve_addr_rejects_hostname() {
    assert_eq!(
        resolve_addr(fallback(), Some("localhost"), None),
        Err(ConfigError::InvalidHost("localhost".to_owned()))
    );
}

// =============================================================================
// env_nonempty: unique env var names keep parallel tests apart.
// =============================================================================

#[test]
fn env_nonempty_trims_value() {
    let key = "__TEST_CODEPLAN_ENV_TRIM_311__";
    unsafe { std::env::set_var(key, "  8080  ") };
    assert_eq!(env_nonempty(key), Some("8080".to_owned()));
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_nonempty_blank_is_none() {
    let key = "__TEST_CODEPLAN_ENV_BLANK_312__";
    unsafe { std::env::set_var(key, "   ") };
    assert_eq!(env_nonempty(key), None);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_nonempty_unset_is_none() {
    assert_eq!(env_nonempty("__TEST_CODEPLAN_SURELY_UNSET_313__"), None);
}

#[test]
fn config_error_messages_name_the_variable() {
    assert!(ConfigError::InvalidPort("x".to_owned()).to_string().starts_with("invalid PORT"));
    assert!(ConfigError::InvalidHost("x".to_owned()).to_string().starts_with("invalid HOST"));
}

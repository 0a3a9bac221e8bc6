use super::*;

fn site_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

#[test]
fn resolve_without_overrides_keeps_site_addr() {
    let cfg = ServerConfig::resolve(site_addr(), None, None).unwrap();
    assert_eq!(cfg.addr, site_addr());
}

#[test]
fn resolve_port_override() {
    let cfg = ServerConfig::resolve(site_addr(), None, Some("8080")).unwrap();
    assert_eq!(cfg.addr, SocketAddr::from(([127, 0, 0, 1], 8080)));
}

#[test]
fn resolve_host_override() {
    let cfg = ServerConfig::resolve(site_addr(), Some("0.0.0.0"), Some(" 9000 ")).unwrap();
    assert_eq!(cfg.addr, SocketAddr::from(([0, 0, 0, 0], 9000)));
}

#[test]
fn resolve_accepts_ipv6_host() {
    let cfg = ServerConfig::resolve(site_addr(), Some("::1"), None).unwrap();
    assert!(cfg.addr.is_ipv6());
    assert_eq!(cfg.addr.port(), 3000);
}

#[test]
fn resolve_blank_values_are_ignored() {
    let cfg = ServerConfig::resolve(site_addr(), Some(""), Some("   ")).unwrap();
    assert_eq!(cfg.addr, site_addr());
}

#[test]
fn resolve_rejects_bad_port() {
    let err = ServerConfig::resolve(site_addr(), None, Some("70000")).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { value: "70000".into() });
    assert_eq!(err.to_string(), "invalid PORT value: \"70000\"");
}

#[test]
fn resolve_rejects_bad_host() {
    let err = ServerConfig::resolve(site_addr(), Some("localhost"), None).unwrap_err();
    assert_eq!(err, ConfigError::InvalidHost { value: "localhost".into() });
}

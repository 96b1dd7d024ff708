#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use metricsgen_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8080"
limits:
  duration_mni: 3 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.server.shutdown_timeout_ms, 1000);
    assert_eq!((cfg.limits.duration_min, cfg.limits.duration_max), (1, 10));
    assert_eq!(cfg.limits.requests_hour, 1000);
    assert_eq!(cfg.limits.errors_percentage, 10.0);
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:9100"
  shutdown_timeout_ms: 250
limits:
  duration_min: 5
  duration_max: 5
  requests_hour: 3600
  errors_percentage: 12.5
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    let limits = cfg.limits.build().expect("valid limits");
    assert_eq!(limits.duration_interval(), (5, 5));
    assert_eq!(limits.errors_percentage(), 12.5);
    assert_eq!(limits.pacing_interval(), std::time::Duration::from_secs(1));
}

#[test]
fn invalid_limits_rejected() {
    let bad = r#"
version: 1
limits:
  duration_min: 10
  duration_max: 2
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INVALID_ARGUMENT");
}

#[test]
fn unsupported_version_rejected() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn bad_listen_rejected() {
    let bad = r#"
version: 1
server:
  listen: "not an address"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");

    let bad = r#"
version: 1
server:
  listen: "127.0.0.1:99999"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn port_only_listen_binds_every_interface() {
    let cfg = config::load_from_str(
        r#"
version: 1
server:
  listen: ":9090"
"#,
    )
    .unwrap();
    assert_eq!(
        cfg.server.listen_addr().unwrap(),
        "0.0.0.0:9090".parse::<std::net::SocketAddr>().unwrap()
    );
}

#[test]
fn host_name_listen_is_resolved() {
    let cfg = config::load_from_str(
        r#"
version: 1
server:
  listen: "localhost:8080"
"#,
    )
    .unwrap();
    let addr = cfg.server.listen_addr().unwrap();
    assert!(addr.ip().is_loopback(), "{addr}");
    assert_eq!(addr.port(), 8080);
}

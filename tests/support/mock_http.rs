//! Local wiremock servers for integration tests.

use std::net::{Ipv4Addr, TcpListener};

use wiremock::MockServer;

/// When set to anything but `0`, a sandbox without loopback sockets fails the
/// test instead of skipping it.
const STRICT_ENV: &str = "STENCIL_NET_STRICT_SOCKETS";

fn loopback_available() -> bool {
    TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).is_ok()
}

fn strict() -> bool {
    std::env::var_os(STRICT_ENV).is_some_and(|value| !value.is_empty() && value != "0")
}

/// Starts a mock server, or returns `None` when loopback sockets can't be bound.
pub async fn mock_server_or_skip() -> Option<MockServer> {
    if loopback_available() {
        return Some(MockServer::start().await);
    }

    let current = std::thread::current();
    let test = current.name().unwrap_or("<unnamed test>");
    assert!(
        !strict(),
        "{test}: loopback sockets are unavailable and {STRICT_ENV} is set"
    );
    eprintln!("{test}: skipped, loopback sockets are unavailable (set {STRICT_ENV}=1 to fail instead)");
    None
}

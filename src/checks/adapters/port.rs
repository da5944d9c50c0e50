//! TCP port checks.

use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::checks::error::{CheckError, Outcome};

/// Try to connect to `host:port`, trying each resolved address in turn.
///
/// Every attempt is bounded by `timeout`. The stream is closed before
/// returning.
pub fn check(host: &str, port: u16, timeout: Duration) -> Result<Outcome, CheckError> {
    let unreachable = |reason: String| CheckError::PortUnreachable {
        host: host.to_string(),
        port,
        timeout,
        reason,
    };

    let addrs: Vec<SocketAddr> = (host, port)
        .to_socket_addrs()
        .map_err(|e| unreachable(format!("cannot resolve host: {}", e)))?
        .collect();

    if addrs.is_empty() {
        return Err(unreachable("host resolved to no addresses".to_string()));
    }

    let mut last_error = None;
    for addr in &addrs {
        match TcpStream::connect_timeout(addr, timeout) {
            Ok(stream) => {
                drop(stream);
                return Ok(Outcome::new(format!("listening on {}", addr)));
            }
            Err(e) => {
                tracing::debug!("Connect to {} failed: {}", addr, e);
                last_error = Some(e);
            }
        }
    }

    Err(unreachable(
        last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "connection failed".to_string()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;
    use std::time::Instant;

    #[test]
    fn listening_port_passes() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let outcome = check("127.0.0.1", port, Duration::from_secs(2)).unwrap();
        assert!(outcome.message.contains(&port.to_string()));
    }

    #[test]
    fn closed_port_fails() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let err = check("127.0.0.1", port, Duration::from_secs(2)).unwrap_err();
        match &err {
            CheckError::PortUnreachable { host, port: p, .. } => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(*p, port);
            }
            other => panic!("Expected PortUnreachable, got {:?}", other),
        }
        assert!(err.to_string().contains(&format!("127.0.0.1:{}", port)));
    }

    #[test]
    fn failure_is_bounded_by_timeout() {
        let start = Instant::now();
        let result = check("127.0.0.1", 10783, Duration::from_millis(2000));
        let elapsed = start.elapsed();

        // Something may legitimately be listening on 10783; only the bound matters.
        if result.is_err() {
            assert!(elapsed <= Duration::from_millis(2500), "took {:?}", elapsed);
        }
    }

    #[test]
    fn unresolvable_host_fails() {
        let err = check("host.invalid", 80, Duration::from_millis(200)).unwrap_err();
        assert!(matches!(err, CheckError::PortUnreachable { .. }));
    }
}

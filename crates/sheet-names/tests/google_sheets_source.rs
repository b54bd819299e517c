//! Integration tests for the Google Sheets adapter over real HTTP.
//!
//! Each test binds a one-shot listener on an ephemeral loopback port, serves
//! a canned response and checks how `GoogleSheetsSource::fetch` maps it.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rstest::rstest;
use sheet_names::{FetchError, GoogleSheetsSource, NameSource, SheetConfig};

const RANGE: &str = "A2:A";

/// Loopback server answering a single request with a fixed response.
struct OneShotServer {
    addr: SocketAddr,
    handle: JoinHandle<String>,
}

impl OneShotServer {
    /// Serves `status` and `body`, returning the request head once done.
    fn respond(status: &'static str, body: &'static str) -> Self {
        Self::spawn(move |stream| {
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\n\
                 Content-Length: {len}\r\nConnection: close\r\n\r\n{body}",
                len = body.len(),
            );
            stream
                .write_all(response.as_bytes())
                .expect("write response");
        })
    }

    /// Accepts the request and stays silent for `delay`.
    fn stall(delay: Duration) -> Self {
        Self::spawn(move |_stream| thread::sleep(delay))
    }

    fn spawn(reply: impl FnOnce(&mut std::net::TcpStream) + Send + 'static) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept request");
            let head = read_request_head(&mut stream);
            reply(&mut stream);
            head
        });
        Self { addr, handle }
    }

    fn config(&self) -> SheetConfig {
        config_for(self.addr)
    }

    /// Waits for the server thread and returns the request line it saw.
    fn request_line(self) -> String {
        let head = self.handle.join().expect("server thread");
        head.lines().next().unwrap_or_default().to_owned()
    }
}

fn read_request_head(stream: &mut std::net::TcpStream) -> String {
    let mut head = Vec::new();
    let mut chunk = [0_u8; 512];
    while !head.windows(4).any(|window| window == b"\r\n\r\n") {
        let read = stream.read(&mut chunk).expect("read request");
        if read == 0 {
            break;
        }
        head.extend(chunk.iter().take(read));
    }
    String::from_utf8_lossy(&head).into_owned()
}

fn config_for(addr: SocketAddr) -> SheetConfig {
    SheetConfig::new(format!("http://{addr}/"), "id", "key", "NameList", 0, "")
}

fn source(timeout: Duration) -> GoogleSheetsSource {
    GoogleSheetsSource::new(timeout).expect("client builds")
}

#[test]
fn fetch_flattens_values_from_the_sheet() {
    let server = OneShotServer::respond("200 OK", r#"{"values":[["Billy"],["Joe","Lenny"]]}"#);

    let names = source(Duration::from_secs(5))
        .fetch(RANGE, &server.config())
        .expect("fetch succeeds");

    assert_eq!(names, vec!["Billy", "Joe", "Lenny"]);
    assert_eq!(
        server.request_line(),
        "GET /id/values/NameList!A2:A/?key=key HTTP/1.1"
    );
}

#[test]
fn fetch_treats_missing_values_as_empty() {
    let server = OneShotServer::respond("200 OK", r#"{"range":"NameList!A2:A1000"}"#);

    let names = source(Duration::from_secs(5))
        .fetch(RANGE, &server.config())
        .expect("fetch succeeds");

    assert!(names.is_empty(), "unexpected names: {names:?}");
}

#[rstest]
#[case::forbidden("403 Forbidden")]
#[case::server_error("500 Internal Server Error")]
fn fetch_maps_error_statuses(#[case] status: &'static str) {
    let server = OneShotServer::respond(status, r#"{"error":{"message":"denied"}}"#);

    let error = source(Duration::from_secs(5))
        .fetch(RANGE, &server.config())
        .expect_err("fetch must fail");

    assert!(
        matches!(&error, FetchError::Status { message } if message.contains("denied")),
        "unexpected error: {error:?}"
    );
}

#[test]
fn fetch_maps_gateway_timeout_to_timeout() {
    let server = OneShotServer::respond("504 Gateway Timeout", "");

    let error = source(Duration::from_secs(5))
        .fetch(RANGE, &server.config())
        .expect_err("fetch must fail");

    assert!(
        matches!(error, FetchError::Timeout { .. }),
        "unexpected error: {error:?}"
    );
}

#[test]
fn fetch_rejects_non_json_bodies() {
    let server = OneShotServer::respond("200 OK", "<html>maintenance</html>");

    let error = source(Duration::from_secs(5))
        .fetch(RANGE, &server.config())
        .expect_err("fetch must fail");

    assert!(
        matches!(error, FetchError::Decode { .. }),
        "unexpected error: {error:?}"
    );
}

#[test]
fn fetch_reports_refused_connections_as_transport_errors() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
        listener.local_addr().expect("listener address")
    };

    let error = source(Duration::from_secs(5))
        .fetch(RANGE, &config_for(addr))
        .expect_err("fetch must fail");

    assert!(
        matches!(error, FetchError::Transport { .. }),
        "unexpected error: {error:?}"
    );
}

#[test]
fn fetch_times_out_when_the_sheet_stalls() {
    let server = OneShotServer::stall(Duration::from_secs(2));

    let error = source(Duration::from_millis(100))
        .fetch(RANGE, &server.config())
        .expect_err("fetch must fail");

    assert!(
        matches!(error, FetchError::Timeout { .. }),
        "unexpected error: {error:?}"
    );
}

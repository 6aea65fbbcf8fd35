//! `HttpTransport` against a loopback HTTP server.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use realmchat::{Action, Client, Error, Request};
use serde_json::json;

/// What the server saw.
struct Captured {
    request_line: String,
    headers: Vec<String>,
    body: String,
}

/// Serve one request with `status` and `body`, returning what was received.
fn serve_once(status: &str, body: &str) -> (String, JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}/api/v1", listener.local_addr().unwrap());
    let status = status.to_owned();
    let body = body.to_owned();

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();

        let mut headers = Vec::new();
        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            let line = line.trim_end().to_owned();
            if line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().unwrap();
                }
            }
            headers.push(line.to_ascii_lowercase());
        }

        let mut buf = vec![0u8; content_length];
        reader.read_exact(&mut buf).unwrap();

        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
        .unwrap();
        stream.flush().unwrap();

        Captured {
            request_line: request_line.trim_end().to_owned(),
            headers,
            body: String::from_utf8(buf).unwrap(),
        }
    });
    (base, handle)
}

fn client(base: &str) -> Client {
    Client::builder("k-123")
        .base_url(base)
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

#[test]
fn posts_form_and_unwraps_data() {
    let (base, server) = serve_once("200 OK", r#"{"result":true,"data":{"id":"dev-7"}}"#);

    let data = client(&base).register_device("phone 1").unwrap();
    assert_eq!(data, json!({"id": "dev-7"}));

    let seen = server.join().unwrap();
    assert_eq!(seen.request_line, "POST /api/v1/device HTTP/1.1");
    assert!(seen.headers.contains(&"accept: application/json".to_owned()));
    assert!(
        seen.headers
            .iter()
            .any(|h| h.starts_with("content-type: application/x-www-form-urlencoded"))
    );
    assert!(seen.body.starts_with("name=phone"));
    assert!(seen.body.contains("key=k-123"));
    assert!(seen.body.contains("action=add-device"));
}

#[test]
fn nested_fields_are_bracket_encoded() {
    let (base, server) = serve_once("200 OK", r#"{"result":true}"#);

    let c = client(&base).with_device_id("d1");
    let body = c
        .send_button_message("628", &[json!({"text": "Yes"})], None, None)
        .unwrap();
    assert_eq!(body, json!({"result": true}));

    let seen = server.join().unwrap();
    assert_eq!(seen.request_line, "POST /api/v1 HTTP/1.1");
    assert!(seen.body.contains("buttons%5B0%5D%5Btext%5D=Yes"));
    assert!(seen.body.contains("device=d1"));
}

#[test]
fn get_sends_fields_as_query() {
    let (base, server) = serve_once("200 OK", r#"{"result":true,"data":[]}"#);

    let c = client(&base).with_device_id("d1");
    let data = c.execute(&Request::get(Action::RecentChats)).unwrap();
    assert_eq!(data, json!([]));

    let seen = server.join().unwrap();
    assert_eq!(
        seen.request_line,
        "GET /api/v1?key=k-123&action=recent-chats&device=d1 HTTP/1.1"
    );
    assert!(seen.body.is_empty());
}

#[test]
fn server_error_status_is_api_error() {
    let (base, server) = serve_once("500 Internal Server Error", r#"{"message":"boom"}"#);

    let err = client(&base).with_device_id("d1").contacts().unwrap_err();
    assert!(matches!(err, Error::Api(ref m) if m.contains("500")), "got {err:?}");
    server.join().unwrap();
}

#[test]
fn false_result_over_http() {
    let (base, server) = serve_once("200 OK", r#"{"result":false,"message":"bad number"}"#);

    let err = client(&base).with_device_id("d1").check_number("x").unwrap_err();
    assert_eq!(err.to_string(), r#"API error: "bad number""#);
    server.join().unwrap();
}

#[test]
fn connection_refused_is_api_error() {
    let addr = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let c = client(&format!("http://{addr}/api/v1")).with_device_id("d1");

    assert!(matches!(c.recent_chats(), Err(Error::Api(_))));
}

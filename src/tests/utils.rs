use crate::config::UpstreamConfig;
use crate::lookup::{LookupError, PropertySource};
use crate::state::AppState;
use crate::upstream::UpstreamClient;
use astra::{Body, Request, Response};
use serde_json::Value;
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread;

pub const TEST_ORIGIN: &str = "http://app.test";

/// Lookups answered from memory.
#[derive(Default)]
pub struct StaticSource {
    pub bodies: HashMap<String, Value>,
}

impl StaticSource {
    pub fn with(id: &str, body: Value) -> Self {
        let mut bodies = HashMap::new();
        bodies.insert(id.to_string(), body);
        Self { bodies }
    }
}

impl PropertySource for StaticSource {
    fn fetch_raw(&self, property_id: &str) -> Result<Option<Value>, LookupError> {
        Ok(self.bodies.get(property_id).cloned())
    }
}

/// Every lookup fails as if the network were down.
pub struct FailingSource;

impl PropertySource for FailingSource {
    fn fetch_raw(&self, _property_id: &str) -> Result<Option<Value>, LookupError> {
        Err(LookupError::Network("connection refused".into()))
    }
}

pub fn state_with(source: impl PropertySource + 'static) -> AppState {
    state_with_upstream(source, UpstreamConfig::default())
}

pub fn state_with_upstream(source: impl PropertySource + 'static, upstream: UpstreamConfig) -> AppState {
    AppState {
        upstream: UpstreamClient::new(upstream).expect("upstream client"),
        properties: Box::new(source),
        public_origin: TEST_ORIGIN.to_string(),
    }
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(http::Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn header(resp: &Response, name: &str) -> String {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// What the fake upstream saw.
#[derive(Debug)]
pub struct Captured {
    pub request_line: String,
    pub authorization: Option<String>,
}

/// One-shot HTTP server on a free local port. Returns its base URL and the captured request.
pub fn fake_upstream(status: u16, content_type: &str, body: &str) -> (String, Receiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {status} Fake\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();

        let mut authorization = None;
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                if name.eq_ignore_ascii_case("authorization") {
                    authorization = Some(value.trim().to_string());
                }
            }
        }

        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();

        let _ = tx.send(Captured {
            request_line: request_line.trim_end().to_string(),
            authorization,
        });
    });

    (base, rx)
}

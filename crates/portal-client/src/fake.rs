//! In-process stand-in for the portal backend.
//!
//! [`FakeBackend`] binds `tiny_http` to `127.0.0.1:0`, answers each path
//! with a canned reply, and records every request so tests can assert both
//! the payloads sent and that no request was sent at all.

use std::collections::HashMap;
use std::io::Read;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::JoinHandle;
use std::time::Duration;

use portal_core::Envelope;

use crate::client::ApiClient;

/// A request as the fake backend saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    /// Parsed JSON body; `Null` for an empty or non-JSON body.
    pub body: serde_json::Value,
}

#[derive(Debug, Clone)]
struct Reply {
    status: u16,
    body: String,
    delay: Option<Duration>,
}

type Routes = Arc<Mutex<HashMap<String, Reply>>>;
type Recorded = Arc<Mutex<Vec<RecordedRequest>>>;

pub struct FakeBackend {
    server: Arc<tiny_http::Server>,
    addr: SocketAddr,
    routes: Routes,
    requests: Recorded,
    worker: Option<JoinHandle<()>>,
}

impl FakeBackend {
    /// Start serving on a random local port.
    ///
    /// # Panics
    ///
    /// Panics if the local listener cannot be bound.
    #[must_use]
    pub fn start() -> Self {
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").expect("bind fake backend"));
        let addr = server
            .server_addr()
            .to_ip()
            .expect("fake backend listens on an IP address");

        let routes: Routes = Arc::default();
        let requests: Recorded = Arc::default();

        let worker = {
            let server = Arc::clone(&server);
            let routes = Arc::clone(&routes);
            let requests = Arc::clone(&requests);
            std::thread::spawn(move || {
                for request in server.incoming_requests() {
                    let routes = Arc::clone(&routes);
                    let requests = Arc::clone(&requests);
                    std::thread::spawn(move || handle(request, &routes, &requests));
                }
            })
        };

        Self {
            server,
            addr,
            routes,
            requests,
            worker: Some(worker),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// A client pointed at this backend.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built.
    #[must_use]
    pub fn client(&self) -> ApiClient {
        ApiClient::with_base_url(&self.base_url()).expect("client for fake backend")
    }

    /// Answer `path` with `envelope` and HTTP 200.
    pub fn respond(&self, path: &str, envelope: &Envelope) -> &Self {
        self.respond_raw(path, 200, &envelope_body(envelope))
    }

    /// Answer `path` with an arbitrary status and body.
    pub fn respond_raw(&self, path: &str, status: u16, body: &str) -> &Self {
        self.install(
            path,
            Reply {
                status,
                body: body.to_string(),
                delay: None,
            },
        )
    }

    /// Answer `path` with `envelope` after `delay`.
    pub fn respond_after(&self, path: &str, delay: Duration, envelope: &Envelope) -> &Self {
        self.install(
            path,
            Reply {
                status: 200,
                body: envelope_body(envelope),
                delay: Some(delay),
            },
        )
    }

    /// Every request received so far, in arrival order.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests().len()
    }

    /// Requests received for `path`.
    #[must_use]
    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }

    fn install(&self, path: &str, reply: Reply) -> &Self {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.to_string(), reply);
        self
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn envelope_body(envelope: &Envelope) -> String {
    serde_json::to_string(envelope).expect("envelope serializes")
}

fn handle(mut request: tiny_http::Request, routes: &Routes, requests: &Recorded) {
    let url = request.url().to_string();
    let (path, query) = match url.split_once('?') {
        Some((path, query)) => (path.to_string(), Some(query.to_string())),
        None => (url, None),
    };

    let mut raw = String::new();
    let _ = request.as_reader().read_to_string(&mut raw);
    let body = serde_json::from_str(&raw).unwrap_or(serde_json::Value::Null);

    requests
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(RecordedRequest {
            method: request.method().to_string(),
            path: path.clone(),
            query,
            body,
        });

    let reply = routes
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&path)
        .cloned()
        .unwrap_or(Reply {
            status: 404,
            body: format!("no fake route for {path}"),
            delay: None,
        });

    if let Some(delay) = reply.delay {
        std::thread::sleep(delay);
    }

    let content_type = tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
        .expect("static header is valid");
    let response = tiny_http::Response::from_string(reply.body)
        .with_status_code(reply.status)
        .with_header(content_type);
    let _ = request.respond(response);
}

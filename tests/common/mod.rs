#![allow(dead_code)]

use serde_json::{json, Value};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use wiremock::{MockServer, Request, ResponseTemplate};

/// Polling interval used by tests so status sequences play out quickly.
pub const FAST_POLL: Duration = Duration::from_millis(100);

/// Replies to successive requests with the given responses, repeating the last one.
pub struct SequenceResponder {
    responses: Vec<ResponseTemplate>,
    calls: AtomicUsize,
}

impl SequenceResponder {
    pub fn new(responses: Vec<ResponseTemplate>) -> Self {
        assert!(!responses.is_empty(), "a sequence needs at least one response");
        Self {
            responses,
            calls: AtomicUsize::new(0),
        }
    }

    /// Replies with `200 OK` status bodies for each status string in turn.
    pub fn statuses(statuses: &[&str]) -> Self {
        Self::new(statuses.iter().map(|s| ok_status(s)).collect())
    }
}

impl wiremock::Respond for SequenceResponder {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let count = self.calls.fetch_add(1, Ordering::SeqCst);
        let index = count.min(self.responses.len() - 1);
        self.responses[index].clone()
    }
}

pub fn ok_status(status: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "uid": "job-1", "status": status }))
}

pub fn ok_json(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

/// Returns the address of a local port nothing listens on.
pub fn unreachable_uri() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or_default()
}

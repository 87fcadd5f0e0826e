// Trimmed-down HTTP request context used as introspection input.

use std::io;
use std::net::SocketAddr;
use std::time::{Duration, SystemTime};

pub struct RequestCtx {
    method: Vec<u8>,
    uri: String,
    body: Vec<u8>,
    status: u16,
    remote_addr: SocketAddr,
    started: SystemTime,
}

impl RequestCtx {
    pub fn new(remote_addr: SocketAddr) -> Self {
        Self {
            method: b"GET".to_vec(),
            uri: String::from("/"),
            body: Vec::new(),
            status: 200,
            remote_addr,
            started: SystemTime::now(),
        }
    }

    pub fn method(&self) -> &[u8] {
        &self.method
    }

    pub fn is_get(&self) -> bool {
        self.method == b"GET"
    }

    pub fn request_uri(&self) -> &str {
        &self.uri
    }

    pub fn set_status_code(&mut self, code: u16) {
        self.status = code;
    }

    pub fn status_code(&self) -> u16 {
        self.status
    }

    pub fn set_body_string(&mut self, body: &str) {
        self.body = body.as_bytes().to_vec();
    }

    pub fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.body.extend_from_slice(data);
        Ok(data.len())
    }

    pub fn form_value(&self, key: &str) -> (Option<String>, bool) {
        (None, key.is_empty())
    }

    pub fn remote_addr(&self) -> SocketAddr {
        self.remote_addr
    }

    pub fn time(&self) -> SystemTime {
        self.started
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed().unwrap_or_default()
    }

    pub fn redirect(&mut self, uri: &str, status: u16) {
        self.uri = uri.to_string();
        self.status = status;
    }

    pub fn not_found(&mut self) {
        self.status = 404;
    }

    pub fn not_modified(&mut self) {
        self.status = 304;
    }

    pub fn user_value<T: 'static>(&self, _key: &str) -> Option<&T> {
        None
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    fn reset(&mut self) {
        self.body.clear();
    }
}

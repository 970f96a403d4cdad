/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for yobit-adapter tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use wiremock::MockServer;
use yobit_adapter::{
    Authenticator, ClientConfig, Clock, Credentials, HttpResponse, PrivateClient, PublicClient,
    Result, Transport, YobitError,
};

pub const TEST_KEY: &str = "test-api-key";
pub const TEST_SECRET: &str = "test-api-secret";

/// Clock reading used to seed test counters; the first nonce is one above it
pub const START_SECS: u64 = 1_700_000_000;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::default().with_base_url(server.uri())
}

/// Clock that advances one second per reading, so nonces never wait
#[derive(Debug)]
pub struct SteppingClock(AtomicU64);

impl SteppingClock {
    pub fn starting_at(secs: u64) -> Self {
        Self(AtomicU64::new(secs))
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> Duration {
        Duration::from_secs(self.0.fetch_add(1, Ordering::SeqCst))
    }
}

/// Clock following tokio's pausable time, starting at `base` since the epoch
#[derive(Debug)]
pub struct TokioClock {
    base: Duration,
    origin: tokio::time::Instant,
}

impl TokioClock {
    pub fn starting_at(base: Duration) -> Self {
        Self {
            base,
            origin: tokio::time::Instant::now(),
        }
    }
}

impl Clock for TokioClock {
    fn now(&self) -> Duration {
        self.base + self.origin.elapsed()
    }
}

pub fn test_authenticator() -> Arc<Authenticator> {
    Arc::new(Authenticator::with_clock(
        Credentials::new(TEST_KEY, TEST_SECRET),
        Arc::new(SteppingClock::starting_at(START_SECS)),
    ))
}

/// Private client against the mock server issuing nonces START_SECS+1, +2, ...
pub fn private_client_for(server: &MockServer) -> PrivateClient {
    let config = config_for(server);
    let private_path = config.private_path.clone();
    let public = PublicClient::with_config(config).expect("client init");
    PrivateClient::with_authenticator(public, private_path, test_authenticator())
}

/// Transport stub that records every request and answers with a canned response
#[derive(Debug)]
pub struct RecordingTransport {
    response: HttpResponse,
    calls: AtomicUsize,
    bodies: Mutex<Vec<String>>,
}

impl RecordingTransport {
    pub fn new(response: HttpResponse) -> Arc<Self> {
        Arc::new(Self {
            response,
            calls: AtomicUsize::new(0),
            bodies: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn bodies(&self) -> Vec<String> {
        self.bodies.lock().expect("bodies lock").clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(&self, _url: Url) -> Result<HttpResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }

    async fn post_form(
        &self,
        _url: Url,
        body: String,
        _headers: &[(&'static str, String)],
    ) -> Result<HttpResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.bodies.lock().expect("bodies lock").push(body);
        Ok(self.response.clone())
    }
}

/// Transport stub whose every request fails at the connection level
#[derive(Debug, Default)]
pub struct FailingTransport {
    calls: AtomicUsize,
}

impl FailingTransport {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail(&self) -> YobitError {
        self.calls.fetch_add(1, Ordering::SeqCst);
        YobitError::transport(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "connection reset by peer",
        ))
    }
}

#[async_trait]
impl Transport for FailingTransport {
    async fn get(&self, _url: Url) -> Result<HttpResponse> {
        Err(self.fail())
    }

    async fn post_form(
        &self,
        _url: Url,
        _body: String,
        _headers: &[(&'static str, String)],
    ) -> Result<HttpResponse> {
        Err(self.fail())
    }
}

/// Private client over a recording transport
pub fn recording_client(response: HttpResponse) -> (PrivateClient, Arc<RecordingTransport>) {
    let transport = RecordingTransport::new(response);
    let config = ClientConfig::default();
    let private_path = config.private_path.clone();
    let public = PublicClient::with_transport(config, transport.clone()).expect("client init");
    let client = PrivateClient::with_authenticator(public, private_path, test_authenticator());
    (client, transport)
}

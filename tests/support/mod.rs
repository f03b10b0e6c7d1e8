#![allow(dead_code)]

//! Shared fixtures: a scripted `ModelInvoker` and a fully wired test app.

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use chat_api::adapter::inbound::http::{router, AppState};
use chat_api::adapter::outbound::llm::bedrock::BedrockLlm;
use chat_api::adapter::outbound::llm::mock::{DelayRange, MockLlm};
use chat_api::application::gateway::Gateway;
use chat_api::application::state::{GatewaySettings, ModelDefaults};
use chat_api::domain::GatewayMode;
use chat_api::error::{GatewayError, GatewayResult};
use chat_api::port::outbound::invoker::ModelInvoker;

pub const LIVE_MODEL: &str = "anthropic.claude-3-haiku-20240307-v1:0";
pub const MOCK_MODEL: &str = "dummy-claude-3-haiku";

/// Replies with a fixed outcome and records every call.
pub struct StubInvoker {
    reply: GatewayResult<Vec<u8>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl StubInvoker {
    pub fn replying(body: impl Into<Vec<u8>>) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(body.into()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(error: GatewayError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(error),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> (String, Value) {
        self.calls
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("invoker was not called")
    }
}

impl ModelInvoker for StubInvoker {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn invoke_model(&self, model_id: &str, body: &[u8]) -> GatewayResult<Vec<u8>> {
        let json = serde_json::from_slice(body).expect("request body is JSON");
        self.calls
            .lock()
            .unwrap()
            .push((model_id.to_string(), json));
        self.reply.clone()
    }
}

pub fn settings(mode: GatewayMode) -> Arc<GatewaySettings> {
    Arc::new(GatewaySettings::new(
        mode,
        ModelDefaults {
            model_id: LIVE_MODEL.into(),
            max_tokens: 4096,
            temperature: 0.7,
        },
        MOCK_MODEL,
    ))
}

pub struct TestApp {
    pub gateway: Arc<Gateway>,
    pub router: Router,
}

impl TestApp {
    /// Gateway with a zero-delay mock and a live adapter over `invoker`.
    pub fn new(mode: GatewayMode, invoker: Arc<StubInvoker>) -> Self {
        let settings = settings(mode);
        let live = BedrockLlm::new(invoker, Arc::clone(&settings), 2);
        Self::with_live(settings, live)
    }

    /// Gateway whose live adapter has no client.
    pub fn unavailable(mode: GatewayMode) -> Self {
        let settings = settings(mode);
        let live = BedrockLlm::unavailable("AWS credentials not found", Arc::clone(&settings));
        Self::with_live(settings, live)
    }

    fn with_live(settings: Arc<GatewaySettings>, live: BedrockLlm) -> Self {
        let mock = MockLlm::new(Arc::clone(&settings), DelayRange::NONE);
        let gateway = Arc::new(Gateway::new(settings, Arc::new(mock), Arc::new(live)));
        let router = router(Arc::new(AppState::new(Arc::clone(&gateway), "chat-api")));
        Self { gateway, router }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body.to_string())).await
    }

    pub async fn post_raw(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body.to_string())).await
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<String>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(text) => {
                request = request.header(CONTENT_TYPE, "application/json");
                Body::from(text)
            }
            None => Body::empty(),
        };
        let response = self
            .router
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, value)
    }
}

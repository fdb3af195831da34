#![allow(dead_code)]

use adversaryiq::config::Timeouts;
use adversaryiq::services::api::{HttpFailure, Transport};
use adversaryiq::Desk;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Mutex;
use std::time::Duration;

pub const ENGINE_URL: &str = "http://engine.test:3001";

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub endpoint: String,
    pub payload: Option<Value>,
    pub timeout: Duration,
}

/// In-memory engine: canned replies, every call recorded.
pub struct ScriptedTransport {
    json_reply: Result<Value, HttpFailure>,
    audio_reply: Result<Vec<u8>, HttpFailure>,
    health_reply: Result<(), HttpFailure>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self {
            json_reply: Ok(json!({})),
            audio_reply: Ok(b"ID3-fake-mp3".to_vec()),
            health_reply: Ok(()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(mut self, body: Value) -> Self {
        self.json_reply = Ok(body);
        self
    }

    pub fn failing(mut self, failure: HttpFailure) -> Self {
        self.json_reply = Err(failure);
        self
    }

    pub fn audio(mut self, reply: Result<Vec<u8>, HttpFailure>) -> Self {
        self.audio_reply = reply;
        self
    }

    pub fn health(mut self, reply: Result<(), HttpFailure>) -> Self {
        self.health_reply = reply;
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, endpoint: &str) -> Vec<RecordedCall> {
        self.calls().into_iter().filter(|c| c.endpoint == endpoint).collect()
    }

    fn record(&self, endpoint: &str, payload: Option<&Value>, timeout: Duration) {
        self.calls.lock().unwrap().push(RecordedCall {
            endpoint: endpoint.to_string(),
            payload: payload.cloned(),
            timeout,
        });
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    fn base_url(&self) -> &str {
        ENGINE_URL
    }

    async fn call(&self, endpoint: &str, payload: &Value, timeout: Duration) -> Result<Value, HttpFailure> {
        self.record(endpoint, Some(payload), timeout);
        self.json_reply.clone()
    }

    async fn call_for_bytes(&self, endpoint: &str, payload: &Value, timeout: Duration) -> Result<Vec<u8>, HttpFailure> {
        self.record(endpoint, Some(payload), timeout);
        self.audio_reply.clone()
    }

    async fn ping(&self, endpoint: &str, timeout: Duration) -> Result<(), HttpFailure> {
        self.record(endpoint, None, timeout);
        self.health_reply.clone()
    }
}

pub fn desk(transport: ScriptedTransport) -> Desk<ScriptedTransport> {
    Desk::new(transport, Timeouts::default())
}

/// A full crisis reply for all three actors.
pub fn crisis_reply() -> Value {
    json!({
        "crisis": "Blockade in the strait",
        "agents": {
            "roosevelt": {
                "public_response": "We will speak softly and carry a big stick.",
                "private_actions": "Move the fleet to within sight of the coast.",
                "psychological_reasoning": "Projecting strength deters escalation.",
                "escalation_risk": "Medium",
                "timeline": "Within 72 hours",
                "escalation_phase": "Gunboat diplomacy"
            },
            "gandhi": {
                "public_response": "India calls for calm and dialogue.",
                "private_actions": "Quietly secure alternative shipping lanes.",
                "psychological_reasoning": "Strategic autonomy first."
            },
            "putin": {
                "public_response": "Russia observes with concern.",
                "private_actions": "Offer mediation for a price.",
                "psychological_reasoning": "Leverage maximization."
            }
        },
        "bluf": "Divergent interests, moderate escalation risk.",
        "overall_risk": "High",
        "key_insights": ["Timelines diverge", "Putin calculates aggressive positioning"]
    })
}

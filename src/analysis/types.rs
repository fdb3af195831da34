use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::{debug, warn};

/// The fixed set of personas the engine answers as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Actor {
    Roosevelt,
    Gandhi,
    Putin,
}

/// Display identity for an actor's dossier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub accent: &'static str,
}

impl Actor {
    /// Panel order on the page.
    pub const ALL: [Actor; 3] = [Actor::Roosevelt, Actor::Gandhi, Actor::Putin];

    /// Wire identifier used by the engine (`agents` keys and the voice `agent` field).
    pub fn id(self) -> &'static str {
        match self {
            Actor::Roosevelt => "roosevelt",
            Actor::Gandhi => "gandhi",
            Actor::Putin => "putin",
        }
    }

    pub fn from_id(id: &str) -> Option<Actor> {
        Actor::ALL.into_iter().find(|a| a.id() == id)
    }

    pub fn profile(self) -> ActorProfile {
        match self {
            Actor::Roosevelt => ActorProfile {
                name: "ROOSEVELT, Theodore",
                description: "U.S. Historical Leadership Profile",
                accent: "#8B4513",
            },
            Actor::Gandhi => ActorProfile {
                name: "GANDHI, Indira",
                description: "Indian Strategic Leadership Profile",
                accent: "#2F4F4F",
            },
            Actor::Putin => ActorProfile {
                name: "PUTIN, Vladimir",
                description: "Russian Federation Leadership Profile",
                accent: "#8B0000",
            },
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Crisis,
    Document,
}

pub const DEFAULT_DOCUMENT_FILENAME: &str = "document.txt";

/// User text bound for the engine. Only constructible from non-blank input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub kind: RequestKind,
    text: String,
}

impl AnalysisRequest {
    /// Returns `None` when the input is empty after trimming.
    pub fn new(kind: RequestKind, raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            kind,
            text: text.to_string(),
        })
    }

    /// Trimmed text, exactly as sent to the engine.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// One actor's answer. Every field is optional; blanks are treated as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentAnalysis {
    // Crisis mode
    #[serde(default, alias = "publicResponse", deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub public_response: Option<String>,
    #[serde(default, alias = "privateActions", deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub private_actions: Option<String>,
    #[serde(default, alias = "psychologicalReasoning", deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub psychological_reasoning: Option<String>,
    #[serde(default, alias = "escalationRisk", deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub escalation_risk: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    /// Rung on the actor's escalation ladder, free text.
    #[serde(default, alias = "escalationPhase", deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub escalation_phase: Option<String>,

    // Document mode
    #[serde(default, alias = "documentInterpretation", deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub document_interpretation: Option<String>,
    #[serde(default, alias = "hiddenIntentions", deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub hidden_intentions: Option<String>,
    #[serde(default, alias = "psychologicalTactics", deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub psychological_tactics: Option<String>,
    #[serde(
        default,
        alias = "recommendedResponse",
        alias = "your_response",
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub recommended_response: Option<String>,
    #[serde(default, alias = "authenticityAssessment", deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub authenticity_assessment: Option<String>,
}

impl AgentAnalysis {
    /// An analysis with nothing in it renders as "no data", same as a missing one.
    pub fn is_empty(&self) -> bool {
        *self == AgentAnalysis::default()
    }
}

/// Accepts strings, numbers and bools; null, blank strings and containers become `None`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(text_of))
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items.into_iter().filter_map(text_of).collect(),
        _ => Vec::new(),
    })
}

fn text_of(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Case-insensitive. The engine emits `High`/`Medium`/`Low`.
    pub fn parse(label: &str) -> Option<RiskLevel> {
        match label.trim().to_ascii_uppercase().as_str() {
            "LOW" => Some(RiskLevel::Low),
            "MEDIUM" => Some(RiskLevel::Medium),
            "HIGH" => Some(RiskLevel::High),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

/// Aggregate fields of a crisis response, as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExecutiveSummary {
    #[serde(default, deserialize_with = "lenient_text")]
    pub bluf: Option<String>,
    #[serde(default, alias = "overallRisk", deserialize_with = "lenient_text")]
    pub overall_risk: Option<String>,
    #[serde(default, alias = "keyInsights", deserialize_with = "lenient_list")]
    pub key_insights: Vec<String>,
}

impl ExecutiveSummary {
    pub fn from_response(body: &Value) -> Self {
        if !body.is_object() {
            return ExecutiveSummary::default();
        }
        ExecutiveSummary::deserialize(body).unwrap_or_else(|e| {
            warn!("Executive summary unreadable, using defaults: {}", e);
            ExecutiveSummary::default()
        })
    }

    /// Missing or unrecognised labels resolve to Medium.
    pub fn risk(&self) -> RiskLevel {
        self.overall_risk
            .as_deref()
            .and_then(RiskLevel::parse)
            .unwrap_or(RiskLevel::Medium)
    }

    /// The label as the engine sent it (`High`, `low`, ...) when recognised,
    /// otherwise the Medium fallback's own label.
    pub fn risk_label(&self) -> &str {
        match self.overall_risk.as_deref().map(str::trim) {
            Some(label) if RiskLevel::parse(label).is_some() => label,
            _ => RiskLevel::Medium.label(),
        }
    }
}

pub type AgentMap = HashMap<Actor, AgentAnalysis>;

/// Pulls the `agents` object out of a response body. Absent or malformed -> empty map.
/// Unknown actor ids and unreadable entries are skipped.
pub fn parse_agents(body: &Value) -> AgentMap {
    let Some(agents) = body.get("agents").and_then(Value::as_object) else {
        return AgentMap::new();
    };

    agents
        .iter()
        .filter_map(|(id, raw)| {
            let Some(actor) = Actor::from_id(id) else {
                debug!("Ignoring unknown actor '{}' in response", id);
                return None;
            };
            if !raw.is_object() {
                warn!("Analysis for {} is not an object, skipping", actor);
                return None;
            }
            match AgentAnalysis::deserialize(raw) {
                Ok(analysis) => Some((actor, analysis)),
                Err(e) => {
                    warn!("Unreadable analysis for {}: {}", actor, e);
                    None
                }
            }
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrisisResult {
    pub agents: AgentMap,
    pub summary: ExecutiveSummary,
}

impl CrisisResult {
    pub fn from_response(body: &Value) -> Self {
        Self {
            agents: parse_agents(body),
            summary: ExecutiveSummary::from_response(body),
        }
    }
}

pub const AUDIO_MPEG: &str = "audio/mpeg";

/// Synthesized speech, handed straight to playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceClip {
    pub actor: Actor,
    pub text_hash: u64,
    pub content_type: &'static str,
    pub audio: Vec<u8>,
}

impl VoiceClip {
    pub fn new(actor: Actor, text: &str, audio: Vec<u8>) -> Self {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        Self {
            actor,
            text_hash: hasher.finish(),
            content_type: AUDIO_MPEG,
            audio,
        }
    }
}

use super::panels::{escape_html, placeholder_panel};
use crate::analysis::{Actor, AgentAnalysis};

// Fallback table. Each field has exactly one default.
pub const AWAITING_ANALYSIS: &str = "Awaiting analysis...";
pub const UNASSESSED: &str = "UNASSESSED";
pub const INTERPRETATION_DEFAULT: &str = "N/A";
pub const HIDDEN_INTENTIONS_DEFAULT: &str = "None detected";
pub const TACTICS_DEFAULT: &str = "None identified";
pub const RECOMMENDED_RESPONSE_DEFAULT: &str = "No response formulated";
pub const AUTHENTICITY_DEFAULT: &str = "Unable to assess";
pub const DOCUMENT_ABSENT: &str = "No analysis available.";

pub fn crisis_absent_message(actor: Actor) -> String {
    format!("No analysis data available for {}.", actor.profile().name)
}

fn or_default<'a>(field: &'a Option<String>, default: &'static str) -> &'a str {
    field.as_deref().unwrap_or(default)
}

/// Crisis fields after the fallback table has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrisisDossier<'a> {
    pub public_response: &'a str,
    pub private_actions: &'a str,
    pub psychological_reasoning: &'a str,
    pub escalation_risk: &'a str,
    pub timeline: &'a str,
    pub escalation_phase: &'a str,
}

impl<'a> CrisisDossier<'a> {
    pub fn resolve(analysis: &'a AgentAnalysis) -> Self {
        Self {
            public_response: or_default(&analysis.public_response, AWAITING_ANALYSIS),
            private_actions: or_default(&analysis.private_actions, AWAITING_ANALYSIS),
            psychological_reasoning: or_default(&analysis.psychological_reasoning, AWAITING_ANALYSIS),
            escalation_risk: or_default(&analysis.escalation_risk, UNASSESSED),
            timeline: or_default(&analysis.timeline, UNASSESSED),
            escalation_phase: or_default(&analysis.escalation_phase, UNASSESSED),
        }
    }
}

/// Document fields after the fallback table has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentDossier<'a> {
    pub interpretation: &'a str,
    pub hidden_intentions: &'a str,
    pub psychological_tactics: &'a str,
    pub recommended_response: &'a str,
    pub authenticity_assessment: &'a str,
}

impl<'a> DocumentDossier<'a> {
    pub fn resolve(analysis: &'a AgentAnalysis) -> Self {
        Self {
            interpretation: or_default(&analysis.document_interpretation, INTERPRETATION_DEFAULT),
            hidden_intentions: or_default(&analysis.hidden_intentions, HIDDEN_INTENTIONS_DEFAULT),
            psychological_tactics: or_default(&analysis.psychological_tactics, TACTICS_DEFAULT),
            recommended_response: or_default(&analysis.recommended_response, RECOMMENDED_RESPONSE_DEFAULT),
            authenticity_assessment: or_default(&analysis.authenticity_assessment, AUTHENTICITY_DEFAULT),
        }
    }
}

fn section(heading: &str, body: &str, class: &str) -> String {
    format!(
        r#"<section class="{}"><h4>{}</h4><p>{}</p></section>"#,
        class,
        heading,
        escape_html(body)
    )
}

/// Crisis-mode dossier page for one actor.
pub fn crisis_dossier(actor: Actor, analysis: Option<&AgentAnalysis>) -> String {
    let analysis = match analysis {
        Some(a) if !a.is_empty() => a,
        _ => return placeholder_panel(&crisis_absent_message(actor)),
    };
    let profile = actor.profile();
    let fields = CrisisDossier::resolve(analysis);

    let mut html = String::new();
    html.push_str(&format!(
        r#"<article class="panel dossier" data-actor="{}" style="border-left: 4px solid {};">"#,
        actor.id(),
        profile.accent
    ));
    html.push_str(&format!(
        r#"<header><div><span class="tag">SUBJECT:</span> <span class="subject">{} — {}</span></div><div><span class="tag">STATUS:</span> <span class="active">PROFILE ACTIVE</span></div><div><span class="tag">ESCALATION:</span> {} <span class="tag">TIMELINE:</span> {} <span class="tag">PHASE:</span> {}</div></header>"#,
        profile.name,
        profile.description,
        escape_html(fields.escalation_risk),
        escape_html(fields.timeline),
        escape_html(fields.escalation_phase)
    ));
    html.push_str(&section("A. PUBLIC RESPONSE", fields.public_response, "public"));
    html.push_str(&section("B. PRIVATE ACTIONS [CLASSIFIED]", fields.private_actions, "private"));
    html.push_str(&section("C. PSYCHOLOGICAL ASSESSMENT", fields.psychological_reasoning, "assessment"));
    html.push_str(r#"<footer><span>Page 1 of 3</span><span>SECRET // NOFORN</span></footer></article>"#);
    html
}

/// Document-mode dossier page for one actor.
pub fn document_dossier(actor: Actor, analysis: Option<&AgentAnalysis>) -> String {
    let analysis = match analysis {
        Some(a) if !a.is_empty() => a,
        _ => return placeholder_panel(DOCUMENT_ABSENT),
    };
    let profile = actor.profile();
    let fields = DocumentDossier::resolve(analysis);

    let mut html = String::new();
    html.push_str(&format!(
        r#"<article class="panel dossier" data-actor="{}" style="border-left: 4px solid {};">"#,
        actor.id(),
        profile.accent
    ));
    html.push_str(&format!(
        r#"<header><span class="tag">ANALYST:</span> <span class="subject">{}</span></header>"#,
        profile.name
    ));
    html.push_str(&section("A. DOCUMENT INTERPRETATION", fields.interpretation, "interpretation"));
    html.push_str(&section("B. HIDDEN INTENTIONS DETECTED", fields.hidden_intentions, "hidden"));
    html.push_str(&section("C. PSYCHOLOGICAL TACTICS", fields.psychological_tactics, "tactics"));
    html.push_str(&section("D. RECOMMENDED RESPONSE", fields.recommended_response, "recommended"));
    html.push_str(&format!(
        r#"<div class="authenticity"><span class="tag">AUTHENTICITY ASSESSMENT:</span> {}</div>"#,
        escape_html(fields.authenticity_assessment)
    ));
    html.push_str(r#"<footer><span>DOCUMENT ANALYSIS</span><span>CONFIDENTIAL</span></footer></article>"#);
    html
}

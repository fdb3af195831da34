use uuid::Uuid;

use crate::analysis::Actor;
use crate::formatter::escape_html;
use crate::workflows::{CrisisView, DocumentView};

const STYLE: &str = r#"
body { background: #f5f2e8; font-family: 'Courier Prime', 'Courier New', Courier, monospace; color: #1a1a1a; }
main { max-width: 900px; margin: 0 auto; }
.banner { background: #8b0000; color: #fff; text-align: center; letter-spacing: 6px; font-size: 11px; padding: 10px; }
.panel { background: #fffefa; border: 1px solid #888; padding: 28px; margin: 12px 0; }
.placeholder { text-align: center; color: #888; font-style: italic; }
.error { border: 2px solid #8b0000; color: #8b0000; }
.error.warning { border-color: #8B4513; color: #8B4513; }
.tag { font-size: 10px; font-weight: bold; letter-spacing: 2px; }
.dossier footer, .summary footer { display: flex; justify-content: space-between; font-size: 9px; color: #888; margin-top: 24px; }
.risk-low { color: #006400; } .risk-medium { color: #8B4513; } .risk-high { color: #8b0000; font-size: 18px; }
textarea { width: 100%; font-family: inherit; }
.status { font-size: 12px; letter-spacing: 1px; }
"#;

const SCRIPT: &str = r#"
const SESSION = document.body.dataset.session;
const ACTORS = ['roosevelt', 'gandhi', 'putin'];
async function act(path, body) {
  const res = await fetch(path, {
    method: 'POST',
    headers: { 'Content-Type': 'application/json', 'x-session-id': SESSION },
    body: JSON.stringify(body || {}),
  });
  return res.json();
}
function show(prefix, view) {
  ACTORS.forEach(a => { document.getElementById(prefix + '-' + a).innerHTML = view.panels[a]; });
  if (view.summary !== undefined) document.getElementById('crisis-summary').innerHTML = view.summary;
  document.getElementById(prefix + '-status').textContent = view.status;
}
async function submitCrisis() { show('crisis', await act('/actions/crisis', { text: document.getElementById('crisis-input').value })); }
async function clearCrisis() {
  document.getElementById('crisis-input').value = '';
  ACTORS.forEach(a => { document.getElementById('audio-' + a).removeAttribute('src'); });
  show('crisis', await act('/actions/crisis/clear'));
}
async function submitDocument() { show('doc', await act('/actions/document', { text: document.getElementById('doc-input').value })); }
async function clearDocument() { document.getElementById('doc-input').value = ''; show('doc', await act('/actions/document/clear')); }
async function speak(actor) {
  const res = await fetch('/actions/voice/' + actor, { method: 'POST', headers: { 'x-session-id': SESSION } });
  if (res.status !== 200) return;
  const player = document.getElementById('audio-' + actor);
  player.src = URL.createObjectURL(await res.blob());
  player.play();
}
"#;

fn actor_tabs(prefix: &str, panels: &crate::workflows::ActorPanels, with_voice: bool) -> String {
    let mut html = String::new();
    for actor in Actor::ALL {
        html.push_str(&format!(
            r#"<h3>{}</h3><div id="{}-{}">{}</div>"#,
            actor.id().to_uppercase(),
            prefix,
            actor.id(),
            panels.get(actor)
        ));
        if with_voice {
            html.push_str(&format!(
                r#"<button onclick="speak('{id}')">GENERATE VOICE</button><audio id="audio-{id}" controls></audio>"#,
                id = actor.id()
            ));
        }
    }
    html
}

/// The whole page. `session_id` ties this tab's voice requests to its crisis results.
pub fn render(session_id: Uuid, crisis: &CrisisView, document: &DocumentView) -> String {
    format!(
        concat!(
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>AdversaryIQ - Intelligence Dossier</title>",
            "<style>{style}</style></head><body data-session=\"{session}\"><main>",
            "<h1>ADVERSARY<span style=\"color: #8b0000;\">IQ</span></h1>",
            "<p class=\"tag\">MULTI-AGENT PSYCHOLOGICAL INTELLIGENCE SYSTEM</p>",
            "<div class=\"banner\">FOR OFFICIAL USE ONLY — AUTHORIZED PERSONNEL ONLY</div>",
            "<h2>I. CRISIS ANALYSIS</h2>",
            "<textarea id=\"crisis-input\" rows=\"5\" placeholder=\"Enter diplomatic crisis scenario for multi-agent psychological analysis...\"></textarea>",
            "<button onclick=\"submitCrisis()\">PROCESS INTELLIGENCE</button> <button onclick=\"clearCrisis()\">CLEAR FORM</button>",
            "<p class=\"status\">SYSTEM STATUS: <span id=\"crisis-status\">{crisis_status}</span></p>",
            "{crisis_panels}",
            "<h3>EXECUTIVE SUMMARY</h3><div id=\"crisis-summary\">{summary}</div>",
            "<h2>II. DOCUMENT ANALYSIS</h2>",
            "<textarea id=\"doc-input\" rows=\"8\" placeholder=\"Paste diplomatic document, treaty, communique, or proposal text for psychological subtext analysis...\"></textarea>",
            "<button onclick=\"submitDocument()\">ANALYZE DOCUMENT</button> <button onclick=\"clearDocument()\">CLEAR</button>",
            "<p class=\"status\">SYSTEM STATUS: <span id=\"doc-status\">{doc_status}</span></p>",
            "{doc_panels}",
            "</main><script>{script}</script></body></html>"
        ),
        style = STYLE,
        session = session_id,
        crisis_status = escape_html(&crisis.status),
        crisis_panels = actor_tabs("crisis", &crisis.panels, true),
        summary = crisis.summary,
        doc_status = escape_html(&document.status),
        doc_panels = actor_tabs("doc", &document.panels, false),
        script = SCRIPT,
    )
}

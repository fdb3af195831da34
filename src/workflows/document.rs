use serde_json::json;
use tracing::{debug, info, warn};

use super::outcome::{placeholders, ActionError, ActorPanels, DocumentView, WorkflowStage};
use super::Desk;
use crate::analysis::{parse_agents, AgentMap, AnalysisRequest, RequestKind, DEFAULT_DOCUMENT_FILENAME};
use crate::formatter::{document_dossier, DOCUMENT_EMPTY_PROMPT, DOCUMENT_PROMPT};
use crate::services::api::{Transport, ENDPOINT_ANALYZE_DOCUMENT};

const WORKFLOW: &str = "document";

pub const AWAITING_DOCUMENT: &str = "Awaiting document...";
pub const DOCUMENT_COMPLETE: &str = "Document analysis complete";

impl DocumentView {
    pub fn awaiting_document() -> Self {
        Self {
            panels: placeholders(DOCUMENT_EMPTY_PROMPT),
            status: AWAITING_DOCUMENT.to_string(),
            stage: WorkflowStage::Done,
            error: Some(ActionError::EmptyInput),
        }
    }

    pub fn idle(status: String) -> Self {
        Self {
            panels: placeholders(DOCUMENT_PROMPT),
            status,
            stage: WorkflowStage::Idle,
            error: None,
        }
    }

    pub fn from_agents(agents: &AgentMap) -> Self {
        Self {
            panels: ActorPanels::build(|actor| document_dossier(actor, agents.get(&actor))),
            status: DOCUMENT_COMPLETE.to_string(),
            stage: WorkflowStage::Done,
            error: None,
        }
    }
}

impl<T: Transport> Desk<T> {
    /// Stateless: nothing downstream reads a document result back.
    pub async fn submit_document(&self, input: &str, filename: Option<&str>) -> DocumentView {
        let stage = WorkflowStage::Idle.to(WorkflowStage::Validating, WORKFLOW);
        let Some(request) = AnalysisRequest::new(RequestKind::Document, input) else {
            debug!("Document input blank, engine not called");
            stage.to(WorkflowStage::Done, WORKFLOW);
            return DocumentView::awaiting_document();
        };

        let filename = filename
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_DOCUMENT_FILENAME);

        let stage = stage.to(WorkflowStage::Requesting, WORKFLOW);
        info!(kind = ?request.kind, chars = request.text().len(), filename, "Submitting document");
        let payload = json!({
            "documentText": request.text(),
            "filename": filename,
        });

        let body = match self
            .transport()
            .call(ENDPOINT_ANALYZE_DOCUMENT, &payload, self.timeouts.analysis)
            .await
        {
            Ok(body) => body,
            Err(failure) => {
                let error = ActionError::from_failure(failure, self.api_url());
                warn!("Document analysis failed: {}", error);
                stage.to(WorkflowStage::Failed, WORKFLOW);
                return DocumentView::failed(error);
            }
        };

        let stage = stage.to(WorkflowStage::Formatting, WORKFLOW);
        let agents = parse_agents(&body);
        let view = DocumentView::from_agents(&agents);
        info!(actors = agents.len(), "Document analysis complete");

        stage.to(WorkflowStage::Done, WORKFLOW);
        view
    }

    pub async fn clear_document(&self) -> DocumentView {
        debug!("Document form cleared");
        let health = self.check_health().await;
        DocumentView::idle(health.to_string())
    }
}

use chrono::{Local, NaiveDate};
use serde_json::json;
use tracing::{debug, info, warn};

use super::outcome::{placeholders, ActionError, ActorPanels, CrisisView, WorkflowStage};
use super::Desk;
use crate::analysis::{AnalysisRequest, CrisisResult, RequestKind};
use crate::formatter::{crisis_dossier, executive_summary, placeholder_panel, CRISIS_PROMPT, SUMMARY_PROMPT};
use crate::services::api::{Transport, ENDPOINT_PROCESS_CRISIS};
use crate::session::SessionHandle;

const WORKFLOW: &str = "crisis";

pub const AWAITING_INPUT: &str = "Awaiting input...";
pub const ANALYSIS_COMPLETE: &str = "Analysis complete";

impl CrisisView {
    /// Blank input: every panel, summary included, shows the prompt.
    pub fn awaiting_input() -> Self {
        Self {
            panels: placeholders(CRISIS_PROMPT),
            summary: placeholder_panel(CRISIS_PROMPT),
            status: AWAITING_INPUT.to_string(),
            stage: WorkflowStage::Done,
            error: Some(ActionError::EmptyInput),
        }
    }

    /// Page load or clear.
    pub fn idle(status: String) -> Self {
        Self {
            panels: placeholders(CRISIS_PROMPT),
            summary: placeholder_panel(SUMMARY_PROMPT),
            status,
            stage: WorkflowStage::Idle,
            error: None,
        }
    }

    pub fn from_result(result: &CrisisResult, dated: NaiveDate) -> Self {
        Self {
            panels: ActorPanels::build(|actor| crisis_dossier(actor, result.agents.get(&actor))),
            summary: executive_summary(&result.summary, dated),
            status: ANALYSIS_COMPLETE.to_string(),
            stage: WorkflowStage::Done,
            error: None,
        }
    }
}

impl<T: Transport> Desk<T> {
    /// Sends the scenario to the engine and, on success, replaces the session's actor map.
    /// The session is left alone on blank input and on failure.
    pub async fn submit_crisis(&self, session: &SessionHandle, input: &str) -> CrisisView {
        let stage = WorkflowStage::Idle.to(WorkflowStage::Validating, WORKFLOW);
        let Some(request) = AnalysisRequest::new(RequestKind::Crisis, input) else {
            debug!("Crisis input blank, engine not called");
            stage.to(WorkflowStage::Done, WORKFLOW);
            return CrisisView::awaiting_input();
        };

        let stage = stage.to(WorkflowStage::Requesting, WORKFLOW);
        info!(kind = ?request.kind, chars = request.text().len(), "Submitting crisis scenario");
        let payload = json!({ "crisis": request.text() });

        let body = match self
            .transport()
            .call(ENDPOINT_PROCESS_CRISIS, &payload, self.timeouts.analysis)
            .await
        {
            Ok(body) => body,
            Err(failure) => {
                let error = ActionError::from_failure(failure, self.api_url());
                warn!("Crisis analysis failed: {}", error);
                stage.to(WorkflowStage::Failed, WORKFLOW);
                return CrisisView::failed(error);
            }
        };

        let stage = stage.to(WorkflowStage::Formatting, WORKFLOW);
        let result = CrisisResult::from_response(&body);
        let view = CrisisView::from_result(&result, Local::now().date_naive());
        info!(actors = result.agents.len(), risk = result.summary.risk().label(), "Crisis analysis complete");
        session.set(result.agents);

        stage.to(WorkflowStage::Done, WORKFLOW);
        view
    }

    /// Clear form: empties the session and re-reads engine health for the status line.
    pub async fn clear_crisis(&self, session: &SessionHandle) -> CrisisView {
        session.clear();
        debug!("Crisis form cleared");
        let health = self.check_health().await;
        CrisisView::idle(health.to_string())
    }
}

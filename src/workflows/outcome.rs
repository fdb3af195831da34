use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::analysis::Actor;
use crate::formatter::{error_panel, placeholder_panel};
use crate::services::api::HttpFailure;

/// Where a workflow run is, or where it ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStage {
    Idle,
    Validating,
    Requesting,
    Formatting,
    Done,
    Failed,
}

impl WorkflowStage {
    pub fn to(self, next: WorkflowStage, workflow: &'static str) -> WorkflowStage {
        debug!(workflow, from = ?self, to = ?next, terminal = next.is_terminal(), "stage");
        next
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, WorkflowStage::Done | WorkflowStage::Failed)
    }
}

/// Everything a workflow can report to the user. Adapter failures are mapped
/// in here; nothing escapes to the shell as an `Err`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("input is empty")]
    EmptyInput,

    #[error("request timed out")]
    Timeout,

    #[error("cannot connect to API at {address}")]
    Connection { address: String },

    #[error("API error {status_code}")]
    Api { status_code: u16 },

    #[error("{0}")]
    Unexpected(String),
}

impl ActionError {
    pub fn from_failure(failure: HttpFailure, address: &str) -> Self {
        match failure {
            HttpFailure::Api { status } => ActionError::Api { status_code: status },
            HttpFailure::Timeout => ActionError::Timeout,
            HttpFailure::Connection(_) => ActionError::Connection {
                address: address.to_string(),
            },
            HttpFailure::Unexpected(message) => ActionError::Unexpected(message),
        }
    }

    /// Text for the panels of a failed run.
    pub fn panel_text(&self) -> String {
        match self {
            ActionError::EmptyInput => "Awaiting input...".to_string(),
            ActionError::Timeout => "Request timed out. Please try again.".to_string(),
            ActionError::Connection { address } => format!("Cannot connect to API at {}", address),
            ActionError::Api { status_code } => format!("API Error: {}", status_code),
            ActionError::Unexpected(message) => format!("Error: {}", message),
        }
    }

    /// One-line status label.
    pub fn status_text(&self) -> String {
        match self {
            ActionError::EmptyInput => "Awaiting input...".to_string(),
            ActionError::Timeout => "Timeout".to_string(),
            ActionError::Connection { address } => format!("Connection failed | {}", address),
            ActionError::Api { status_code } => format!("Error: {}", status_code),
            ActionError::Unexpected(message) => format!("Error: {}", message),
        }
    }

    pub fn panel(&self) -> String {
        error_panel(&self.panel_text(), matches!(self, ActionError::Timeout))
    }
}

/// One HTML panel per actor, in page order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorPanels {
    pub roosevelt: String,
    pub gandhi: String,
    pub putin: String,
}

impl ActorPanels {
    pub fn build<F>(render: F) -> Self
    where
        F: Fn(Actor) -> String,
    {
        Self {
            roosevelt: render(Actor::Roosevelt),
            gandhi: render(Actor::Gandhi),
            putin: render(Actor::Putin),
        }
    }

    pub fn uniform(html: &str) -> Self {
        Self::build(|_| html.to_string())
    }

    pub fn get(&self, actor: Actor) -> &str {
        match actor {
            Actor::Roosevelt => &self.roosevelt,
            Actor::Gandhi => &self.gandhi,
            Actor::Putin => &self.putin,
        }
    }
}

/// What the crisis tab shows after a submit or clear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrisisView {
    pub panels: ActorPanels,
    pub summary: String,
    pub status: String,
    pub stage: WorkflowStage,
    #[serde(skip)]
    pub error: Option<ActionError>,
}

impl CrisisView {
    pub fn failed(error: ActionError) -> Self {
        let panel = error.panel();
        Self {
            panels: ActorPanels::uniform(&panel),
            summary: panel,
            status: error.status_text(),
            stage: WorkflowStage::Failed,
            error: Some(error),
        }
    }
}

/// What the document tab shows after a submit or clear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentView {
    pub panels: ActorPanels,
    pub status: String,
    pub stage: WorkflowStage,
    #[serde(skip)]
    pub error: Option<ActionError>,
}

impl DocumentView {
    pub fn failed(error: ActionError) -> Self {
        Self {
            panels: ActorPanels::uniform(&error.panel()),
            status: error.status_text(),
            stage: WorkflowStage::Failed,
            error: Some(error),
        }
    }
}

pub(crate) fn placeholders(message: &str) -> ActorPanels {
    ActorPanels::uniform(&placeholder_panel(message))
}

//! Best-effort workflow dispatch.

use tracing::warn;

use crate::domain::AppError;
use crate::ports::GitHub;

/// What happened when asking GitHub to run the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The CLI accepted the dispatch.
    Dispatched { output: String },
    /// The CLI ran and reported an error.
    Failed { details: String },
    /// No `gh` executable was found.
    CliMissing,
}

impl DispatchOutcome {
    pub fn is_dispatched(&self) -> bool {
        matches!(self, DispatchOutcome::Dispatched { .. })
    }

    /// Operator-facing lines describing the outcome.
    pub fn messages(&self) -> Vec<String> {
        match self {
            DispatchOutcome::Dispatched { output } => {
                let mut lines = vec!["✓ Workflow triggered successfully".to_string()];
                if !output.is_empty() {
                    lines.push(output.clone());
                }
                lines
            }
            DispatchOutcome::Failed { details } => vec![
                format!("Error triggering workflow: {}", details),
                "You can manually trigger it from GitHub Actions page".to_string(),
            ],
            DispatchOutcome::CliMissing => vec![
                "GitHub CLI not found. Install it or trigger manually from GitHub web interface"
                    .to_string(),
            ],
        }
    }
}

/// Ask GitHub to run `workflow`. Never fails; the outcome says what happened.
pub fn execute(github: &impl GitHub, workflow: &str) -> DispatchOutcome {
    let outcome = match github.dispatch_workflow(workflow) {
        Ok(output) => DispatchOutcome::Dispatched { output },
        Err(AppError::ToolNotFound { .. }) => DispatchOutcome::CliMissing,
        Err(e) => {
            warn!(workflow, error = %e, "workflow dispatch failed");
            DispatchOutcome::Failed { details: e.to_string() }
        }
    };

    for line in outcome.messages() {
        println!("{}", line);
    }
    outcome
}

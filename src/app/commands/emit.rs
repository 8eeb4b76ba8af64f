//! Workflow emission.

use tracing::info;

use crate::adapters::assets::workflow_kit_assets::daily_commit_workflow;
use crate::domain::AppError;
use crate::domain::workflow::WORKFLOWS_DIR;
use crate::ports::RepositoryFilesystem;

/// Write the daily-commit workflow, replacing any existing file.
///
/// Returns the path written, relative to the repository root.
pub fn execute(repository: &impl RepositoryFilesystem) -> Result<String, AppError> {
    let workflow = daily_commit_workflow()?;

    repository.create_dir_all(WORKFLOWS_DIR)?;
    repository.write_file(&workflow.path, &workflow.content)?;

    info!(path = %workflow.path, bytes = workflow.content.len(), "workflow written");
    Ok(workflow.path)
}

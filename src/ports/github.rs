use crate::domain::AppError;

pub trait GitHub {
    /// Dispatch a workflow by file name or display name.
    ///
    /// Returns the CLI's standard output. A missing CLI is reported as
    /// `AppError::ToolNotFound` so callers can tell it apart from a failed run.
    fn dispatch_workflow(&self, workflow: &str) -> Result<String, AppError>;
}

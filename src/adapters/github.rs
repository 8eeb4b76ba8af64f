use std::io;
use std::process::Command;

use tracing::{debug, warn};

use crate::domain::AppError;
use crate::ports::GitHub;

const GH: &str = "gh";

/// `GitHub` implementation backed by the GitHub CLI.
#[derive(Debug, Clone)]
pub struct GitHubCommandAdapter {
    program: String,
}

impl Default for GitHubCommandAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubCommandAdapter {
    pub fn new() -> Self {
        Self { program: GH.to_string() }
    }

    /// Use a specific executable instead of `gh` from PATH.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    fn run_gh(&self, args: &[&str]) -> Result<String, AppError> {
        debug!(program = %self.program, args = ?args, "running gh");

        let output = Command::new(&self.program).args(args).output().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                AppError::ToolNotFound { tool: GH.into() }
            } else {
                AppError::ExternalToolError {
                    tool: GH.into(),
                    error: format!("Failed to execute gh CLI: {}", e),
                }
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(args = ?args, %stderr, "gh command failed");
            return Err(AppError::ExternalToolError {
                tool: GH.into(),
                error: if stderr.is_empty() {
                    format!("gh exited with {}", output.status)
                } else {
                    stderr
                },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl GitHub for GitHubCommandAdapter {
    fn dispatch_workflow(&self, workflow: &str) -> Result<String, AppError> {
        self.run_gh(&["workflow", "run", workflow])
    }
}

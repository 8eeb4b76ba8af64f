//! Fixed facts about the daily-commit workflow.

/// Directory that holds GitHub Actions workflows, relative to the repository root.
pub const WORKFLOWS_DIR: &str = ".github/workflows";

/// File name of the generated workflow. `gh workflow run` accepts it as the workflow id.
pub const WORKFLOW_FILE_NAME: &str = "daily-commit.yml";

/// Path of the generated workflow, relative to the repository root.
pub const WORKFLOW_PATH: &str = ".github/workflows/daily-commit.yml";

/// Display name declared inside the workflow document.
pub const WORKFLOW_DISPLAY_NAME: &str = "Daily Commit Workflow";

/// Commit message used when committing the workflow file.
pub const DEFAULT_COMMIT_MESSAGE: &str = "Add daily commit GitHub Actions workflow";

/// Remote consulted when resolving the browsable repository URL.
pub const DEFAULT_REMOTE: &str = "origin";

/// Committer identity the workflow configures on the runner.
pub const BOT_NAME: &str = "DevSync Bot";
pub const BOT_EMAIL: &str = "21f3002781@ds.study.iitm.ac.in";

/// Log the scheduled job appends to on every run.
pub const LOG_DIR: &str = "logs";
pub const LOG_FILE: &str = "logs/daily-updates.txt";

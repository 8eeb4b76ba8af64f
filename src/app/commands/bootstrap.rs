//! The full bootstrap sequence: emit, publish, dispatch, resolve URL.

use tracing::warn;

use super::dispatch::DispatchOutcome;
use super::publish::CommitOutcome;
use super::{banner, dispatch, emit, publish, repo_url};
use crate::app::AppContext;
use crate::domain::workflow::{WORKFLOW_DISPLAY_NAME, WORKFLOW_FILE_NAME};
use crate::domain::{AppError, BootstrapConfig, RepositoryUrl};
use crate::ports::{Git, GitHub, RepositoryFilesystem};

/// Effective settings for one bootstrap run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapOptions {
    pub remote: String,
    pub dispatch: bool,
    pub commit_message: String,
}

impl From<BootstrapConfig> for BootstrapOptions {
    fn from(config: BootstrapConfig) -> Self {
        Self {
            remote: config.remote,
            dispatch: config.dispatch,
            commit_message: config.commit_message,
        }
    }
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        BootstrapConfig::default().into()
    }
}

/// What each phase of the bootstrap did.
#[derive(Debug)]
pub struct BootstrapReport {
    pub workflow_path: String,
    /// Result of the add/commit/push sequence.
    pub publish: Result<CommitOutcome, AppError>,
    /// `None` when dispatch was disabled or never reached.
    pub dispatch: Option<DispatchOutcome>,
    pub repository_url: Option<RepositoryUrl>,
}

impl BootstrapReport {
    /// True when the workflow was committed and pushed.
    pub fn success(&self) -> bool {
        self.publish.is_ok()
    }
}

/// Run the bootstrap sequence.
///
/// Emission errors are returned as `Err`. A failed publish is recorded in the
/// report and ends the run; dispatch and URL lookup only happen after a
/// successful publish and never affect the result.
pub fn execute<R, G, H>(
    ctx: &AppContext<R, G, H>,
    options: &BootstrapOptions,
) -> Result<BootstrapReport, AppError>
where
    R: RepositoryFilesystem,
    G: Git,
    H: GitHub,
{
    println!("Creating GitHub Actions workflow for daily commits...");
    println!("{}", banner());

    let workflow_path = emit::execute(ctx.repository())?;
    println!("✓ Created workflow file: {}", workflow_path);

    let commit = match publish::execute(ctx.git(), &workflow_path, &options.commit_message) {
        Ok(commit) => commit,
        Err(e) => {
            warn!(error = %e, "publishing the workflow failed");
            println!("Error during git operations: {}", e);
            return Ok(BootstrapReport {
                workflow_path,
                publish: Err(e),
                dispatch: None,
                repository_url: None,
            });
        }
    };
    println!("✓ Workflow committed and pushed to GitHub");

    let dispatch = if options.dispatch {
        println!("\n{}", banner());
        println!("Attempting to trigger workflow...");
        Some(dispatch::execute(ctx.github(), WORKFLOW_FILE_NAME))
    } else {
        None
    };

    println!("\n{}", banner());
    let repository_url = repo_url::execute(ctx.git(), &options.remote);
    if let Some(url) = &repository_url {
        println!("\nRepository URL: {}", url);
        println!("Actions page: {}", url.actions_page());
    }

    println!("\n{}", banner());
    print_next_steps();

    Ok(BootstrapReport { workflow_path, publish: Ok(commit), dispatch, repository_url })
}

fn print_next_steps() {
    println!("Next steps:");
    println!("1. Go to your repository's Actions tab");
    println!("2. Click on '{}'", WORKFLOW_DISPLAY_NAME);
    println!("3. Click 'Run workflow' to test it");
    println!("4. Verify the commit is created within 5 minutes");
}

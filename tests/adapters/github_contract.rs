use crate::harness::FakeGh;
use devsync::AppError;
use devsync::adapters::github::GitHubCommandAdapter;
use devsync::ports::GitHub;

#[test]
fn dispatch_passes_workflow_and_returns_stdout() {
    let gh = FakeGh::succeeding();
    let adapter = GitHubCommandAdapter::with_program(gh.bin_dir.join("gh").to_string_lossy());

    let output = adapter.dispatch_workflow("daily-commit.yml").expect("dispatch");

    assert_eq!(output, "Created workflow_dispatch event for daily-commit.yml at main");
    assert_eq!(gh.get_log().trim(), "workflow run daily-commit.yml");
}

#[test]
fn non_zero_exit_carries_stderr() {
    let gh = FakeGh::failing();
    let adapter = GitHubCommandAdapter::with_program(gh.bin_dir.join("gh").to_string_lossy());

    let err = adapter.dispatch_workflow("daily-commit.yml").unwrap_err();

    match err {
        AppError::ExternalToolError { tool, error } => {
            assert_eq!(tool, "gh");
            assert!(error.contains("HTTP 404"), "error: {error}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn absent_program_is_tool_not_found() {
    let adapter = GitHubCommandAdapter::with_program("/nonexistent/devsync-test/gh");

    assert!(matches!(
        adapter.dispatch_workflow("daily-commit.yml"),
        Err(AppError::ToolNotFound { .. })
    ));
}

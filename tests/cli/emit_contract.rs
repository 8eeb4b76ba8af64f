use crate::harness::TestContext;
use crate::harness::git_repository::git;
use predicates::prelude::*;

#[test]
fn emit_writes_workflow_without_committing() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("emit")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Created workflow file: .github/workflows/daily-commit.yml"));

    assert!(ctx.read_workflow().starts_with("name: Daily Commit Workflow\n"));
    let status = git(ctx.work_dir(), &["status", "--porcelain"]);
    assert!(status.contains("?? .github/"), "workflow should be left untracked: {status}");
}

#[test]
fn emit_is_idempotent_in_content() {
    let ctx = TestContext::new();

    ctx.cli().arg("e").assert().success();
    let first = ctx.read_workflow();
    ctx.cli().arg("e").assert().success();

    assert_eq!(ctx.read_workflow(), first);
}

#[test]
fn emit_replaces_previous_content() {
    let ctx = TestContext::new();
    ctx.write_file(".github/workflows/daily-commit.yml", &"x".repeat(10_000));

    ctx.cli().arg("emit").assert().success();

    let content = ctx.read_workflow();
    assert!(!content.contains("xxxx"));
    assert!(content.ends_with("          git push\n"));
}

#[test]
fn emit_fails_when_workflows_path_is_a_file() {
    let ctx = TestContext::new();
    ctx.write_file(".github/workflows", "not a directory");

    ctx.cli().arg("emit").assert().failure().stderr(predicate::str::starts_with("Error: "));
}

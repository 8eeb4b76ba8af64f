use std::path::Path;

pub(crate) fn git(repo_dir: &Path, args: &[&str]) -> String {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(repo_dir)
        .output()
        .unwrap_or_else(|e| panic!("git {} failed to start: {}", args.join(" "), e));
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

pub(crate) fn configure_user(repo_dir: &Path) {
    git(repo_dir, &["config", "user.email", "test@example.com"]);
    git(repo_dir, &["config", "user.name", "Test User"]);
}

pub(crate) fn init_bare_repo(path: &Path) {
    git(path, &["init", "--bare", "--initial-branch=main"]);
}

pub(crate) fn add_origin_remote(repo_dir: &Path, url: &str) {
    git(repo_dir, &["remote", "add", "origin", url]);
}

pub(crate) fn commit_all(repo_dir: &Path, message: &str) {
    git(repo_dir, &["add", "."]);
    git(repo_dir, &["commit", "-m", message]);
}

pub(crate) fn head_subject(repo_dir: &Path) -> String {
    git(repo_dir, &["log", "-1", "--pretty=%s"])
}

pub(crate) fn commit_count(repo_dir: &Path, rev: &str) -> usize {
    git(repo_dir, &["rev-list", "--count", rev]).parse().expect("commit count")
}

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A `gh` stand-in placed first on PATH. Logs its arguments.
pub struct FakeGh {
    pub root: TempDir,
    pub bin_dir: PathBuf,
    pub log_file: PathBuf,
}

impl FakeGh {
    /// `gh` that accepts every dispatch.
    pub fn succeeding() -> Self {
        Self::with_body("echo \"Created workflow_dispatch event for $3 at main\"\nexit 0")
    }

    /// `gh` that rejects every dispatch.
    pub fn failing() -> Self {
        Self::with_body("echo \"HTTP 404: workflow $3 not found on the default branch\" >&2\nexit 1")
    }

    fn with_body(body: &str) -> Self {
        let root = TempDir::new().expect("Failed to create temp dir for fake gh");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        let log_file = root.path().join("gh.log");

        let script = format!(
            "#!/bin/sh\necho \"$@\" >> \"{}\"\n{}\n",
            log_file.to_string_lossy(),
            body
        );
        let gh_script_path = bin_dir.join("gh");
        fs::write(&gh_script_path, script).expect("Failed to write gh script");

        let mut perms =
            fs::metadata(&gh_script_path).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&gh_script_path, perms).expect("Failed to set permissions");

        Self { root, bin_dir, log_file }
    }

    /// PATH with the fake `gh` ahead of the inherited entries.
    pub fn path_env(&self) -> String {
        prepend_path(&self.bin_dir)
    }

    pub fn get_log(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }
}

pub(crate) fn prepend_path(dir: &Path) -> String {
    let inherited = std::env::var("PATH").unwrap_or_default();
    format!("{}:{}", dir.display(), inherited)
}

/// A bin directory exposing only `git`, so `gh` cannot be found.
pub(crate) fn git_only_bin_dir(root: &Path) -> PathBuf {
    let real_git = std::env::var_os("PATH")
        .map(|paths| std::env::split_paths(&paths).collect::<Vec<_>>())
        .unwrap_or_default()
        .into_iter()
        .map(|dir| dir.join("git"))
        .find(|candidate| candidate.is_file())
        .expect("git must be on PATH for tests");

    let bin_dir = root.join("git-only-bin");
    fs::create_dir_all(&bin_dir).expect("Failed to create git-only bin dir");
    let link = bin_dir.join("git");
    if !link.exists() {
        std::os::unix::fs::symlink(real_git, link).expect("Failed to link git");
    }
    bin_dir
}

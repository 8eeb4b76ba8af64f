use std::path::PathBuf;
use std::process::{Command, Output};

use tracing::{debug, warn};

use crate::domain::AppError;
use crate::ports::Git;

/// `Git` implementation that shells out to the `git` binary.
#[derive(Debug, Clone)]
pub struct GitCommandAdapter {
    root: PathBuf,
}

impl GitCommandAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn spawn(&self, command_line: &str, args: &[&str]) -> Result<Output, AppError> {
        debug!(command = %command_line, root = %self.root.display(), "running git");
        Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|e| AppError::Git { command: command_line.to_string(), details: e.to_string() })
    }

    fn run(&self, args: &[&str]) -> Result<String, AppError> {
        let command_line = format!("git {}", args.join(" "));
        let output = self.spawn(&command_line, args)?;
        if !output.status.success() {
            return Err(failure(command_line, &output));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

fn failure(command_line: String, output: &Output) -> AppError {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    // `git commit` with a clean tree explains itself on stdout.
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let details = if !stderr.is_empty() {
        stderr
    } else if !stdout.is_empty() {
        stdout
    } else {
        format!("exited with {}", output.status)
    };
    warn!(command = %command_line, %details, "git command failed");
    AppError::Git { command: command_line, details }
}

impl Git for GitCommandAdapter {
    fn add(&self, path: &str) -> Result<(), AppError> {
        self.run(&["add", path])?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<(), AppError> {
        self.run(&["commit", "-m", message])?;
        Ok(())
    }

    fn push(&self) -> Result<(), AppError> {
        self.run(&["push"])?;
        Ok(())
    }

    /// Exit status 1 from `git config --get` means the key is unset, so the remote is absent.
    fn remote_url(&self, remote: &str) -> Result<Option<String>, AppError> {
        let key = format!("remote.{}.url", remote);
        let args = ["config", "--get", key.as_str()];
        let command_line = format!("git {}", args.join(" "));
        let output = self.spawn(&command_line, &args)?;

        match output.status.code() {
            Some(0) => {
                let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
                Ok(if url.is_empty() { None } else { Some(url) })
            }
            Some(1) => {
                debug!(remote, "remote is not configured");
                Ok(None)
            }
            _ => Err(failure(command_line, &output)),
        }
    }
}

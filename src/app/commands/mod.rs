pub mod bootstrap;
pub mod dispatch;
pub mod emit;
pub mod publish;
pub mod repo_url;

/// Separator printed between bootstrap phases.
pub(crate) fn banner() -> String {
    "=".repeat(60)
}

use include_dir::{Dir, File, include_dir};
use minijinja::{AutoEscape, Environment, Value, context};

use crate::domain::AppError;
use crate::domain::workflow::{BOT_EMAIL, BOT_NAME, LOG_DIR, LOG_FILE, WORKFLOW_PATH};
use crate::ports::ScaffoldFile;

static WORKFLOWS_ASSET_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/workflows/.github");

const TEMPLATE_SUFFIX: &str = ".j2";

/// Helper function for templates to output GitHub Actions expressions.
/// Usage in template: {{ gha_expr("github.run_number") }} → ${{ github.run_number }}
fn gha_expr(expr: &str) -> String {
    format!("${{{{ {} }}}}", expr)
}

fn template_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.add_function("gha_expr", gha_expr);
    env
}

fn template_context() -> Value {
    context! {
        bot_name => BOT_NAME,
        bot_email => BOT_EMAIL,
        log_dir => LOG_DIR,
        log_file => LOG_FILE,
    }
}

/// Every `*.j2` file under the embedded `.github` tree.
fn templates(dir: &'static Dir<'static>, found: &mut Vec<&'static File<'static>>) {
    found.extend(dir.files().filter(|file| {
        file.path().to_str().is_some_and(|path| path.ends_with(TEMPLATE_SUFFIX))
    }));
    for subdir in dir.dirs() {
        templates(subdir, found);
    }
}

/// Render one embedded template into a file under `.github/`.
fn render(
    env: &Environment<'static>,
    ctx: &Value,
    file: &'static File<'static>,
) -> Result<ScaffoldFile, AppError> {
    let name = file.path().to_str().ok_or_else(|| {
        AppError::InternalError(format!(
            "Workflow asset path is not UTF-8: {}",
            file.path().display()
        ))
    })?;
    let source = file
        .contents_utf8()
        .ok_or_else(|| AppError::InternalError(format!("Workflow asset is not UTF-8: {}", name)))?;

    let content = env
        .template_from_named_str(name, source)
        .and_then(|template| template.render(ctx))
        .map_err(|e| AppError::InternalError(format!("Failed to render '{}': {}", name, e)))?;

    let relative = name.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(name);
    Ok(ScaffoldFile { path: format!(".github/{}", relative), content })
}

/// Render every embedded workflow template. Paths are relative to the repository root.
pub fn load_workflow_kit() -> Result<Vec<ScaffoldFile>, AppError> {
    let mut found = Vec::new();
    templates(&WORKFLOWS_ASSET_DIR, &mut found);
    if found.is_empty() {
        return Err(AppError::InternalError("Workflow kit assets are empty".into()));
    }

    let env = template_environment();
    let ctx = template_context();
    let mut files =
        found.into_iter().map(|file| render(&env, &ctx, file)).collect::<Result<Vec<_>, _>>()?;
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

/// The rendered daily-commit workflow.
pub fn daily_commit_workflow() -> Result<ScaffoldFile, AppError> {
    load_workflow_kit()?.into_iter().find(|file| file.path == WORKFLOW_PATH).ok_or_else(|| {
        AppError::InternalError(format!("Workflow kit does not contain {}", WORKFLOW_PATH))
    })
}

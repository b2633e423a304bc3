use minijinja::{Environment, UndefinedBehavior};
use once_cell::sync::Lazy;
use serde::Serialize;

use super::InstallError;

static MANIFEST_TEMPLATE: &str = include_str!("../../templates/manifest.json");
static ENTRYPOINT_TEMPLATE: &str = include_str!("../../templates/entrypoint.sh");

/// Substitution values for the manifest template.
#[derive(Debug, Serialize)]
pub struct ManifestContext<'a> {
    pub home_dir: &'a str,
    pub extension_id: &'a str,
}

/// Substitution values for the entrypoint template.
#[derive(Debug, Serialize)]
pub struct EntrypointContext<'a> {
    pub exec_path: &'a str,
    pub browser: &'a str,
}

/// Both templates, compiled once and reused. The sources are embedded at
/// build time, so a compile failure is a packaging defect and aborts the
/// process (the `template.Must` treatment).
static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    // A variable missing from the context is a bug, not an empty string.
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.add_template("manifest", MANIFEST_TEMPLATE)
        .expect("embedded manifest template is invalid");
    env.add_template("entrypoint", ENTRYPOINT_TEMPLATE)
        .expect("embedded entrypoint template is invalid");
    env
});

fn render<S: Serialize>(name: &'static str, ctx: S) -> Result<String, InstallError> {
    let rendered = TEMPLATES
        .get_template(name)
        .and_then(|tmpl| tmpl.render(ctx))
        .map_err(|source| InstallError::Render {
            template: name,
            source,
        })?;
    Ok(rendered)
}

/// Render the native-messaging host manifest.
pub fn render_manifest(ctx: &ManifestContext<'_>) -> Result<String, InstallError> {
    render("manifest", ctx)
}

/// Render the launcher script the manifest points at.
pub fn render_entrypoint(ctx: &EntrypointContext<'_>) -> Result<String, InstallError> {
    render("entrypoint", ctx)
}

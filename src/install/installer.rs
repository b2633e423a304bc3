use std::fs;
use std::path::Path;

use directories::BaseDirs;

use super::templates::{self, EntrypointContext, ManifestContext};
use super::{paths, InstallError};

/// Launcher script filename under `~/.local/bin`. One shared launcher:
/// reinstalling for a second browser overwrites it, and the rendered script
/// carries the browser identity itself.
pub const ENTRYPOINT_NAME: &str = "browser-bridge.sh";

/// One install invocation: which browser, which extension may connect, and
/// an optional profile directory to scope the manifest to.
#[derive(Debug, Clone)]
pub struct InstallRequest {
    pub browser: String,
    pub extension_id: String,
    pub profile_directory: Option<String>,
}

/// Write `contents` to `path`, then force the file mode. `fs::write` alone
/// would leave a stale executable bit when overwriting an existing file.
#[cfg(unix)]
fn write_file(path: &Path, contents: &str, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::write(path, contents)?;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn write_file(path: &Path, contents: &str, _mode: u32) -> std::io::Result<()> {
    fs::write(path, contents)
}

/// Install the native-messaging integration for one browser: write the host
/// manifest into the browser's native-messaging-hosts directory and the
/// launcher script into `~/.local/bin`.
///
/// The steps run in a fixed order and every failure is terminal: a failed
/// manifest write means the entrypoint step is never attempted, and a
/// failed entrypoint write does not roll the manifest back. Re-running with
/// the same inputs rewrites both files byte-identically, so re-installing
/// after a binary upgrade is the supported way to refresh the embedded
/// executable path.
pub fn install(request: &InstallRequest) -> Result<(), InstallError> {
    let base = BaseDirs::new().ok_or(InstallError::HomeDir)?;
    let home_dir = base.home_dir().to_path_buf();

    let manifest_path =
        paths::manifest_path(&request.browser, request.profile_directory.as_deref())?;

    println!("Writing manifest file to {}", manifest_path.display());
    if let Some(parent) = manifest_path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| InstallError::io("create manifest directory", e))?;
    }

    let manifest = templates::render_manifest(&ManifestContext {
        home_dir: &home_dir.to_string_lossy(),
        extension_id: &request.extension_id,
    })?;
    write_file(&manifest_path, &manifest, 0o644)
        .map_err(|e| InstallError::io("write manifest file", e))?;
    println!("Manifest file written successfully");

    let bin_dir = home_dir.join(".local").join("bin");
    fs::create_dir_all(&bin_dir)
        .map_err(|e| InstallError::io("create entrypoint directory", e))?;

    let exec_path = std::env::current_exe().map_err(InstallError::ExePath)?;
    let entrypoint = templates::render_entrypoint(&EntrypointContext {
        exec_path: &exec_path.to_string_lossy(),
        browser: &request.browser,
    })?;

    let entrypoint_path = bin_dir.join(ENTRYPOINT_NAME);
    println!("Writing entrypoint file to {}", entrypoint_path.display());
    write_file(&entrypoint_path, &entrypoint, 0o755)
        .map_err(|e| InstallError::io("write entrypoint file", e))?;
    println!("Entrypoint file written successfully");

    Ok(())
}

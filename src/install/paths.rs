use std::collections::BTreeMap;
use std::path::PathBuf;

use directories::BaseDirs;
use once_cell::sync::Lazy;
use serde::Deserialize;

use super::InstallError;

/// Manifest filename, identical for every browser. Browsers discover the
/// host by this well-known name inside their native-messaging-hosts
/// directory.
pub const MANIFEST_NAME: &str = "com.browserbridge.host.json";

/// One entry of the embedded browser table.
#[derive(Debug, Deserialize)]
struct BrowserTarget {
    /// Path segments under the user's data home.
    data_dir: Vec<String>,
}

static BROWSERS_TOML: &str = include_str!("browsers.toml");

/// Browser identifier -> native-messaging-hosts directory, parsed once from
/// the embedded `browsers.toml`. A parse failure is a broken build, so it
/// aborts rather than surfacing as a runtime error.
static BROWSER_TABLE: Lazy<BTreeMap<String, BrowserTarget>> =
    Lazy::new(|| toml::from_str(BROWSERS_TOML).expect("embedded browsers.toml is invalid"));

/// All browser identifiers accepted by the installer, sorted. The CLI feeds
/// these to clap as the `--browser` value set, so anything that parses is
/// guaranteed to have a table entry.
pub fn supported_browsers() -> Vec<&'static str> {
    BROWSER_TABLE.keys().map(String::as_str).collect()
}

/// Resolve the absolute manifest path for `browser`, optionally scoped to a
/// single profile directory.
///
/// Pure computation over the embedded table; nothing on disk is touched.
/// The profile directory, when given, becomes the segment directly above
/// the manifest filename:
///
/// ```text
/// <data home>/Google/Chrome/NativeMessagingHosts[/<profile>]/com.browserbridge.host.json
/// ```
pub fn manifest_path(browser: &str, profile: Option<&str>) -> Result<PathBuf, InstallError> {
    let target =
        BROWSER_TABLE
            .get(browser)
            .ok_or_else(|| InstallError::UnknownBrowser {
                name: browser.to_string(),
                supported: supported_browsers().join(", "),
            })?;

    let base = BaseDirs::new().ok_or(InstallError::HomeDir)?;
    let mut path = base.data_dir().to_path_buf();
    for segment in &target.data_dir {
        path.push(segment);
    }
    if let Some(profile) = profile {
        path.push(profile);
    }
    path.push(MANIFEST_NAME);
    Ok(path)
}

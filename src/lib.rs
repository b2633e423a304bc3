//! # browser_bridge
//!
//! Installer for a browser **Native Messaging** bridge:
//!
//! - Write the **host manifest** into the right per-browser location
//! - Generate the **launcher script** the manifest points at
//! - One shot, idempotent, no state beyond the two files written
//!
//! Native Messaging is the mechanism by which a browser extension talks to
//! a local process over stdio. The browser finds that process through a
//! small JSON manifest placed in a per-browser `NativeMessagingHosts`
//! directory under a well-known filename. Getting the placement, filename,
//! and allowlist right is where most integrations break, and that is the
//! part this crate owns. The runtime the launcher starts (`serve`) is a
//! separate concern and lives outside this crate.
//!
//! ## What an install does
//!
//! `browser-bridge init --browser chrome --extension-id <id>` performs one
//! linear sequence:
//!
//! 1. resolve the browser's manifest path (optionally profile-scoped)
//! 2. render and write the manifest (`0644`, overwriting)
//! 3. render and write `~/.local/bin/browser-bridge.sh` (`0755`)
//!
//! Failures abort the remaining steps; there is no rollback of an earlier
//! successful write. Re-running with the same inputs produces the same
//! bytes, so rerun `init` after upgrading the binary to refresh the
//! executable path embedded in the launcher.
//!
//! ## Supported browsers
//!
//! `chrome`, `chrome-beta`, `edge`, `brave`, `vivaldi`, and `arc` (which
//! shares Chrome's data directory). The table lives in an embedded
//! `browsers.toml`; identifiers accepted on the command line and entries in
//! the table are the same set by construction.
//!
//! ## Library use
//!
//! ```no_run
//! use browser_bridge::install::{install, InstallRequest};
//!
//! let request = InstallRequest {
//!     browser: "chrome".into(),
//!     extension_id: "abcdefghijklmnop".into(),
//!     profile_directory: None,
//! };
//! install(&request).unwrap();
//! ```
//!
//! ## Troubleshooting
//!
//! - *"Specified native messaging host not found"*: the extension must
//!   connect to `com.browserbridge.host`, and the manifest must exist for
//!   the profile the browser is actually running.
//! - *"Access to the native messaging host is forbidden"*: the
//!   `--extension-id` passed to `init` must match the extension's real ID.
//! - *"Native host has exited"*: the launcher path in the manifest must
//!   point at an existing executable script; rerun `init` after moving or
//!   upgrading the binary.

pub mod cli;
pub mod install;

#[doc(inline)]
pub use install::{install, manifest_path, supported_browsers, InstallError, InstallRequest};

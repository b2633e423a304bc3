use std::{collections::HashMap, env};
use tempfile::TempDir;

/// Env guard that restores previous env vars on drop.
pub struct EnvGuard {
    old: HashMap<String, Option<String>>,
}

impl EnvGuard {
    pub fn set(vars: &[(&str, String)]) -> Self {
        let mut old = HashMap::new();
        for (k, v) in vars {
            old.insert((*k).to_string(), env::var(k).ok());
            env::set_var(k, v);
        }
        Self { old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (k, prev) in self.old.drain() {
            match prev {
                Some(v) => env::set_var(k, v),
                None => env::remove_var(k),
            }
        }
    }
}

/// Create a temp sandbox and point the home and data directories into it so
/// installs never touch the real profile.
///
/// - Linux: HOME plus XDG_DATA_HOME
/// - macOS: HOME (the data dir lives under HOME/Library)
pub fn sandbox_env() -> (TempDir, EnvGuard) {
    let td = TempDir::new().expect("tempdir");
    let root = td.path().to_path_buf();

    let home = root.join("home");
    let data = root.join("data");

    std::fs::create_dir_all(&home).unwrap();
    std::fs::create_dir_all(&data).unwrap();

    let guard = EnvGuard::set(&[
        ("HOME", home.to_string_lossy().to_string()),
        ("XDG_DATA_HOME", data.to_string_lossy().to_string()),
    ]);

    (td, guard)
}

/// The sandboxed data home, matching what the path resolver will compute
/// after `sandbox_env`.
#[allow(dead_code)]
pub fn sandbox_data_dir() -> std::path::PathBuf {
    directories::BaseDirs::new()
        .expect("base dirs")
        .data_dir()
        .to_path_buf()
}

/// The sandboxed home directory.
#[allow(dead_code)]
pub fn sandbox_home_dir() -> std::path::PathBuf {
    directories::BaseDirs::new()
        .expect("base dirs")
        .home_dir()
        .to_path_buf()
}

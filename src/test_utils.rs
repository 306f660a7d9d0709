//! Shared test utilities for runner and command tests.
//!
//! Tests that launch child processes use stub tools: small shell scripts
//! written into a temp directory that stand in for `ogr2ogr`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, OnceLock};

// Writing an executable while another thread forks can leave the file busy
// (ETXTBSY) when it is exec'd, so process-spawning tests run one at a time.
fn test_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

/// Serialize a test that writes stub tools or launches processes.
pub fn process_lock() -> MutexGuard<'static, ()> {
    test_lock().lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Write an executable `/bin/sh` script named `name` into `dir`.
#[cfg(unix)]
pub fn stub_tool(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write stub tool");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("Failed to make stub tool executable");
    path
}

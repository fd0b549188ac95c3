//! Interpreter lookup

use std::path::{Path, PathBuf};

/// Resolve an interpreter setting to an existing executable file
///
/// Paths with a directory component are checked as given. A bare name such as
/// `python3` is searched for on `PATH`.
pub fn resolve_interpreter(interpreter: &Path) -> Option<PathBuf> {
    if interpreter.as_os_str().is_empty() {
        return None;
    }

    if interpreter.is_absolute() || interpreter.components().count() > 1 {
        return is_executable(interpreter).then(|| interpreter.to_path_buf());
    }

    let path_var = std::env::var_os("PATH")?;
    for dir in std::env::split_paths(&path_var) {
        for candidate in candidates(&dir, interpreter) {
            if is_executable(&candidate) {
                tracing::debug!("Resolved interpreter {:?} to {:?}", interpreter, candidate);
                return Some(candidate);
            }
        }
    }

    None
}

#[cfg(windows)]
fn candidates(dir: &Path, name: &Path) -> Vec<PathBuf> {
    vec![dir.join(name), dir.join(name).with_extension("exe")]
}

#[cfg(not(windows))]
fn candidates(dir: &Path, name: &Path) -> Vec<PathBuf> {
    vec![dir.join(name)]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

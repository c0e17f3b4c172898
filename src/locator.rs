//! Candidate-file discovery.
//!
//! Envcheck never takes a path argument; it probes a fixed list of
//! conventional environment-file names in the working directory and uses
//! the first one that exists.

use std::path::{Path, PathBuf};

/// Conventional environment-file names, in priority order.
///
/// The first existing regular file wins; multiple files are never merged.
pub const CANDIDATE_FILES: [&str; 4] = [".env", ".env.local", ".env.development", ".env.production"];

/// Find the first candidate environment file under `dir`.
///
/// Returns `None` when no candidate exists. That is a normal outcome, not
/// an error: the caller reports it and ends the run.
pub fn find_env_file(dir: &Path) -> Option<PathBuf> {
    for name in CANDIDATE_FILES {
        let path = dir.join(name);
        if path.is_file() {
            tracing::debug!("Found environment file: {}", path.display());
            return Some(path);
        }
    }
    None
}

/// Reading log files into memory.
use rankboard_core::LeaderboardError;
use std::path::Path;

/// Read a whole log file as UTF-8 text. The handle is closed before returning.
///
/// Not found, unreadable, a directory, or not UTF-8 all map to `MissingFile`.
pub fn read_log(path: &Path) -> Result<String, LeaderboardError> {
    std::fs::read_to_string(path).map_err(|e| LeaderboardError::MissingFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

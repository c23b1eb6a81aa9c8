use crate::errors::AppResult;
use crate::models::timer::TimerState;
use std::fs;
use std::path::Path;

/// Timer checkpoint slot: same fail-soft policy as the entries store.
/// A missing or corrupt checkpoint means a fresh idle timer.
pub fn load(path: &Path) -> TimerState {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => TimerState::default(),
    }
}

pub fn store(path: &Path, state: &TimerState) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}

/// Remove the checkpoint; absent is fine (reset of an idle timer).
pub fn clear(path: &Path) -> AppResult<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::{errors::GoalError, goal::GoalList};

const TMP_SUFFIX: &str = "tmp";

/// Writes the goal list to disk atomically.
pub fn save_goals_to_file(goals: &GoalList, path: &Path) -> Result<(), GoalError> {
    write_atomic(path, &goals.goals_to_store())?;
    info!(path = %path.display(), count = goals.len(), "saved goals");
    Ok(())
}

/// Loads goals from disk. A missing file yields an empty list.
pub fn load_goals_from_file(path: &Path) -> Result<GoalList, GoalError> {
    if !path.exists() {
        info!(path = %path.display(), "no goals file yet, starting empty");
        return Ok(GoalList::new());
    }
    let data = fs::read_to_string(path)?;
    let goals = GoalList::from_stored(&data)?;
    info!(path = %path.display(), count = goals.len(), "loaded goals");
    Ok(goals)
}

/// Stages `data` in a sibling temporary file and renames it over `path`, so a
/// failed write never leaves a truncated file behind.
pub fn write_atomic(path: &Path, data: &str) -> Result<(), GoalError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

pub fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

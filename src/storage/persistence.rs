//! File-backed persistence for the task list

use super::TaskStore;
use crate::core::{Item, Result, StoreError};
use directories::ProjectDirs;
use std::collections::HashSet;
use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, error, warn};

const APP_NAME: &str = "tasklist";
const DATA_FILE_NAME: &str = "tasks.json";

/// Resolve `<per-user data dir>/tasks.json`.
pub fn default_data_file() -> Result<PathBuf> {
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().join(DATA_FILE_NAME))
        .ok_or(StoreError::DataDirUnavailable)
}

/// Durable store writing a JSON snapshot of the whole list to a single file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn write_snapshot(&self, items: &[Item]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;

        // The temp file is removed on drop, so any early return leaves the old snapshot alone.
        let temp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
        let mut writer = BufWriter::new(temp);
        serde_json::to_writer_pretty(&mut writer, items)?;
        writer.flush().map_err(|e| StoreError::io(&self.path, e))?;
        let temp = writer
            .into_inner()
            .map_err(|e| StoreError::io(&self.path, e.into_error()))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| StoreError::io(&self.path, e))?;
        temp.persist(&self.path).map_err(|e| StoreError::Persist {
            path: self.path.clone(),
            source: e.error,
        })?;
        Ok(())
    }
}

impl TaskStore for FileStore {
    fn save(&mut self, items: &[Item]) -> Result<()> {
        match self.write_snapshot(items) {
            Ok(()) => {
                debug!(path = %self.path.display(), count = items.len(), "saved task list");
                Ok(())
            }
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "failed to save task list");
                Err(e)
            }
        }
    }

    fn load(&self) -> Option<Vec<Item>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "could not read task list, starting empty");
                return None;
            }
        };

        match serde_json::from_str::<Vec<Item>>(&data) {
            Ok(items) if !has_unique_ids(&items) => {
                warn!(path = %self.path.display(), "task list has duplicate ids, starting empty");
                None
            }
            Ok(items) => {
                debug!(path = %self.path.display(), count = items.len(), "loaded task list");
                Some(items)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "task list is corrupt, starting empty");
                None
            }
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn has_unique_ids(items: &[Item]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().all(|item| seen.insert(item.id()))
}

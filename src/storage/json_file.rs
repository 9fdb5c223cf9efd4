use log::debug;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::{decode, encode, HistoryStore, StorageError};
use crate::model::History;

/// Stores the history as a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl HistoryStore for JsonFileStore {
    fn read(&self) -> Result<History, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => decode(&raw),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no history file at {}", self.path.display());
                Ok(History::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, history: &History) -> Result<(), StorageError> {
        let json = encode(history)?;
        let tmp = self.temp_path();
        let written = fs::File::create(&tmp)
            .and_then(|mut file| {
                file.write_all(json.as_bytes())?;
                file.sync_all()
            })
            .and_then(|()| fs::rename(&tmp, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        debug!(
            "wrote {} calculations to {}",
            history.len(),
            self.path.display()
        );
        Ok(())
    }
}

use crate::errors::EcoError;
use crate::models::AppData;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::{
    fs,
    sync::{Mutex, RwLock},
};
use tracing::error;

// Only a missing file means an empty store; a damaged one must not be overwritten.
pub async fn load_data(path: &Path) -> Result<AppData, EcoError> {
    match fs::read(path).await {
        Ok(bytes) => serde_json::from_slice(&bytes).map_err(|err| {
            error!("failed to parse data file {}: {err}", path.display());
            EcoError::from(err)
        }),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(AppData::default()),
        Err(err) => {
            error!("failed to read data file {}: {err}", path.display());
            Err(err.into())
        }
    }
}

// Temp file + rename: a crash never leaves a half-written document.
pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), EcoError> {
    let payload = serde_json::to_vec_pretty(data)?;
    let tmp = temp_path(path);
    fs::write(&tmp, payload).await?;
    fs::rename(&tmp, path).await?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

pub struct Store {
    path: PathBuf,
    writer: Mutex<()>,
    current: RwLock<Arc<AppData>>,
}

impl Store {
    pub fn new(path: PathBuf, data: AppData) -> Self {
        Self {
            path,
            writer: Mutex::new(()),
            current: RwLock::new(Arc::new(data)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn snapshot(&self) -> Arc<AppData> {
        Arc::clone(&*self.current.read().await)
    }

    /// Writers are serialized and work on a private copy, which is published only
    /// after it is on disk. Nothing becomes visible if `change` or the write fails.
    pub async fn transact<T>(
        &self,
        change: impl FnOnce(&mut AppData) -> Result<T, EcoError>,
    ) -> Result<T, EcoError> {
        let _writer = self.writer.lock().await;

        let mut next = AppData::clone(&*self.snapshot().await);
        let outcome = change(&mut next)?;
        persist_data(&self.path, &next).await?;

        *self.current.write().await = Arc::new(next);
        Ok(outcome)
    }
}

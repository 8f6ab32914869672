use std::{path::PathBuf, sync::Arc};

use dashmap::DashMap;

/// One `<key>.json` file per storage key under `dir`.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    pub entries: Arc<DashMap<String, String>>,
}

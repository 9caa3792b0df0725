use crate::core::{CacheStore, Section, Semester};
use crate::utils::error::{AppError, Result};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

pub const SEMESTER_LIST_PATH: &str = "catalog/api/teach/semester/list.json";

pub fn section_list_path(semester_id: i64) -> String {
    format!("catalog/api/teach/lesson/list-for-teach/{}.json", semester_id)
}

/// Filesystem cache store rooted at the build pipeline's cache directory.
#[derive(Debug, Clone)]
pub struct LocalCache {
    root: PathBuf,
}

impl LocalCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl CacheStore for LocalCache {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.root.join(path);
        match fs::read(&full_path) {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AppError::CacheMissing { path: full_path })
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Parses the semester list and per-semester section files out of a cache
/// store. Reads only; a sparse cache (some section files absent) surfaces as
/// per-call `CacheMissing` errors, never as a panic or abort.
pub struct CacheReader<S: CacheStore> {
    store: S,
}

impl<S: CacheStore> CacheReader<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Semesters in the order the source file lists them. A duplicate id is
    /// treated as corruption since every downstream path keys on it.
    pub async fn list_semesters(&self) -> Result<Vec<Semester>> {
        let bytes = self.store.read_file(SEMESTER_LIST_PATH).await?;
        let semesters: Vec<Semester> =
            serde_json::from_slice(&bytes).map_err(|e| AppError::CacheCorrupt {
                path: PathBuf::from(SEMESTER_LIST_PATH),
                reason: e.to_string(),
            })?;

        let mut seen = HashSet::new();
        for semester in &semesters {
            if !seen.insert(semester.id) {
                return Err(AppError::CacheCorrupt {
                    path: PathBuf::from(SEMESTER_LIST_PATH),
                    reason: format!("duplicate semester id {}", semester.id),
                });
            }
        }

        tracing::debug!(count = semesters.len(), "parsed semester list");
        Ok(semesters)
    }

    /// An empty array is a valid result: a semester with nothing scheduled.
    pub async fn load_sections(&self, semester_id: i64) -> Result<Vec<Section>> {
        let path = section_list_path(semester_id);
        let bytes = self.store.read_file(&path).await?;
        let sections: Vec<Section> =
            serde_json::from_slice(&bytes).map_err(|e| AppError::CacheCorrupt {
                path: PathBuf::from(&path),
                reason: e.to_string(),
            })?;

        tracing::debug!(
            semester_id,
            count = sections.len(),
            "parsed section list"
        );
        Ok(sections)
    }
}

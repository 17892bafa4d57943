use crate::api::{CourseApi, CoursePaths};
use crate::config::CourseConfig;
use crate::error::{CourseError, Result};
use crate::host::{LocalFileHost, BLOB_DIR};
use crate::items::ItemStore;
use crate::model::Scope;
use crate::store::fs::FileStore;
use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DATA_DIR_NAME: &str = ".coursebuilder";

pub struct CourseContext {
    pub api: CourseApi<FileStore, LocalFileHost>,
    pub scope: Scope,
    pub config: CourseConfig,
}

/// Find the project root by walking up from cwd looking for a directory
/// that has both .git and .coursebuilder. A directory with .git but no
/// .coursebuilder does not stop the search, so nested repos share a parent's
/// course. Returns None once home or the filesystem root is reached.
pub fn find_project_root(cwd: &Path) -> Option<PathBuf> {
    let home_dir = BaseDirs::new().map(|bd| bd.home_dir().to_path_buf());
    let mut current = cwd.to_path_buf();

    loop {
        if current.join(".git").exists() && current.join(DATA_DIR_NAME).exists() {
            return Some(current);
        }

        if let Some(ref home) = home_dir {
            if &current == home {
                return None;
            }
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => return None,
        }
    }
}

pub fn global_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "coursebuilder", "coursebuilder")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| CourseError::Store("Could not determine data directory".to_string()))
}

pub fn initialize(cwd: &Path, use_global: bool) -> Result<CourseContext> {
    let project_dir = find_project_root(cwd)
        .map(|root| root.join(DATA_DIR_NAME))
        .unwrap_or_else(|| cwd.join(DATA_DIR_NAME));
    let global_dir = global_data_dir()?;

    let paths = CoursePaths {
        project: Some(project_dir),
        global: global_dir,
    };
    let scope = if use_global {
        Scope::Global
    } else {
        Scope::Project
    };
    open(paths, scope)
}

/// Open the course stored under `paths` for `scope`.
pub fn open(paths: CoursePaths, scope: Scope) -> Result<CourseContext> {
    let data_dir = paths.scope_dir(scope)?;
    let config = CourseConfig::load(&data_dir)?;
    debug!(dir = %data_dir.display(), key = %config.storage_key, "opening course");

    let items = ItemStore::load(FileStore::new(&data_dir), config.storage_key.clone())?;
    let host = LocalFileHost::new(data_dir.join(BLOB_DIR));
    let api = CourseApi::new(items, host, paths);

    Ok(CourseContext { api, scope, config })
}

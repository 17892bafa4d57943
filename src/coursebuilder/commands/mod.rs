use crate::config::CourseConfig;
use crate::error::{CourseError, Result};
use crate::model::{FileRef, Item, Scope};
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod download;
pub mod edit;
pub mod helpers;
pub mod init;
pub mod list;
pub mod reorder;

#[derive(Debug, Clone)]
pub struct CoursePaths {
    pub project: Option<PathBuf>,
    pub global: PathBuf,
}

impl CoursePaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Project => self
                .project
                .clone()
                .ok_or_else(|| CourseError::Store("Project scope is not available".to_string())),
            Scope::Global => Ok(self.global.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// An item together with its 1-based position in the course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub position: usize,
    pub item: Item,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<Item>,
    pub listed_items: Vec<DisplayItem>,
    pub paths: Vec<PathBuf>,
    pub config: Option<CourseConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_items(mut self, items: Vec<DisplayItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_config(mut self, config: CourseConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True if any message is an error.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

/// Changes requested for an existing item. Fields that do not apply to the
/// item's kind are refused.
#[derive(Debug, Clone, Default)]
pub struct ItemEdit {
    pub name: Option<String>,
    pub url: Option<String>,
    pub file: Option<FileRef>,
}

impl ItemEdit {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.url.is_none() && self.file.is_none()
    }
}
